use yew::prelude::*;
use shared::RankingEntry;
use crate::styles::*;

const PLACE_OVERLAYS: [&str; 3] = ["/assets/first.svg", "/assets/second.svg", "/assets/third.svg"];

#[derive(Properties, PartialEq)]
pub struct Props {
    pub entry: RankingEntry,
    pub image: String,
}

#[function_component(RankingCard)]
pub fn ranking_card(props: &Props) -> Html {
    let entry = &props.entry;
    let overlay = entry.rank.checked_sub(1).and_then(|i| PLACE_OVERLAYS.get(i));

    html! {
        <div class={CARD}>
            <div class="relative group">
                <img src={props.image.clone()} alt={entry.candidate.display_ref.clone()} class={CARD_IMAGE} />
                <div class={HOVER_COUNT}>{format!("{} 票", entry.count)}</div>
                {match overlay {
                    Some(src) => html! {
                        <div class="absolute -top-6 left-0 right-0 flex justify-center">
                            <img src={*src} alt={format!("Overlay {}", entry.rank)} class="w-16 h-auto" />
                        </div>
                    },
                    None => html! {
                        <div class="absolute -top-6 left-0 right-0 flex justify-center font-bold">
                            {format!("{}位", entry.rank)}
                        </div>
                    },
                }}
            </div>
        </div>
    }
}
