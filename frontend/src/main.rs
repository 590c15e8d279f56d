use yew::prelude::*;
use yew_router::prelude::*;

mod styles;
mod config;
mod logging;
mod roster;
mod gateway;
mod hero;
mod candidate_card;
mod ranking_card;
mod vote_board;

use crate::vote_board::VoteBoard;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[at("/ayapo")] Ayapo,
    #[not_found]
    #[at("/404")] NotFound,
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <HashRouter>
            <Switch<Route> render={switch} />
        </HashRouter>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <VoteBoard /> },
        Route::Ayapo => html! { <VoteBoard joke=true /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    logging::init();
    yew::Renderer::<App>::new().render();
}
