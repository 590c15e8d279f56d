use yew::prelude::*;
use gloo_timers::callback::Timeout;
use shared::{Candidate, CandidateId};
use crate::config::CONFIG;
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub candidate: Candidate,
    /// `None` when the server has no record yet; shown as zero.
    pub votes: Option<u64>,
    pub image: String,
    pub on_vote: Callback<CandidateId>,
}

#[function_component(CandidateCard)]
pub fn candidate_card(props: &Props) -> Html {
    let animating = use_state(|| false);

    let onclick = {
        let animating = animating.clone();
        let on_vote = props.on_vote.clone();
        let id = props.candidate.id;
        Callback::from(move |_: MouseEvent| {
            on_vote.emit(id);
            animating.set(true);
            let animating = animating.clone();
            Timeout::new(CONFIG.vote_animation_ms, move || animating.set(false)).forget();
        })
    };

    html! {
        <div class={CARD}>
            <div class="relative group">
                <img src={props.image.clone()} alt={props.candidate.display_ref.clone()} class={CARD_IMAGE} />
                <div class={HOVER_COUNT}>
                    {format!("{} 票", props.votes.unwrap_or(0))}
                </div>
            </div>
            <div class="relative">
                <button {onclick} class={VOTE_BUTTON}>
                    <img src="/assets/button.svg" alt="投票する" class="w-50 h-20 mx-auto mt-10" />
                </button>
                {if *animating {
                    html! {
                        <div class={OVERLAY}>
                            <img src="/assets/vote-burst.svg" alt="" class="w-60 h-60 animate-ping" />
                        </div>
                    }
                } else { html! {} }}
            </div>
        </div>
    }
}
