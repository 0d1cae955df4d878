//! Game-info panel shown on the home page.

use leptos::prelude::*;

use crate::components::captured_pieces::CapturedPieces;
use crate::state::game::GameState;

#[component]
pub fn GameInfo() -> impl IntoView {
    let game = expect_context::<RwSignal<GameState>>();
    let captured_white = Signal::derive(move || game.get().captured_white());
    let captured_black = Signal::derive(move || game.get().captured_black());

    view! {
        <div class="game-info">
            <h3 class="game-info__title">"Game Info"</h3>
            <CapturedPieces captured_white captured_black/>
        </div>
    }
}
