use yew::prelude::*;
use shared::Candidate;
use crate::config::CONFIG;
use crate::styles::fade_in_up;

const CELL_DELAY_MS: usize = 50;
const ROW_CELLS: usize = 8;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Mentors in id order.
    pub mentors: Vec<Candidate>,
    pub joke: bool,
}

/// Key visual: the first four mentors sit between the two side panels, the
/// next sixteen fill two full rows.
#[function_component(Hero)]
pub fn hero(props: &Props) -> Html {
    let cell = |candidate: &Candidate, cell_index: usize| html! {
        <img
            key={candidate.id}
            src={CONFIG.mentor_image(candidate, props.joke)}
            alt={candidate.display_ref.clone()}
            class="w-full object-cover opacity-0"
            style={fade_in_up(cell_index * CELL_DELAY_MS)}
        />
    };
    let row = |start: usize, end: usize, first_cell: usize| -> Html {
        props.mentors.iter()
            .skip(start)
            .take(end.saturating_sub(start))
            .enumerate()
            .map(|(i, c)| cell(c, first_cell + i))
            .collect()
    };

    html! {
        <section class="relative">
            <img src="/assets/top-background.svg" alt="Key Visual" class="w-full" />
            <div class="absolute inset-0 flex items-center justify-center pointer-events-none">
                <div class="grid grid-cols-8 grid-rows-3 transform scale-88">
                    <div class="col-span-2 flex items-start">
                        <img src="/assets/left_contents.svg" alt="Top Left"
                            class="w-full h-full object-contain opacity-0 mt-8"
                            style={fade_in_up(1_000)} />
                    </div>
                    {row(0, 4, 0)}
                    <div class="col-span-2 flex items-start">
                        <img src="/assets/right_contents.svg" alt="Top Right"
                            class="w-full h-full object-contain opacity-0 scale-132 mt-4"
                            style={fade_in_up(1_200)} />
                    </div>
                    {row(4, 12, ROW_CELLS)}
                    {row(12, 20, 2 * ROW_CELLS)}
                </div>
            </div>
        </section>
    }
}
