//! Protected home page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every mount runs the session gate: "Loading..." until the stored token is
//! verified, then the side nav, header and game panel. A missing or rejected
//! token sends the visitor back to the landing route.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::SessionState;

use crate::components::game_info::GameInfo;
use crate::components::header::Header;
use crate::components::side_nav::SideNav;
use crate::util::auth::install_session_gate;

#[component]
pub fn HomePage() -> impl IntoView {
    let gate_state = RwSignal::new(SessionState::Unchecked);
    install_session_gate(gate_state, use_navigate());

    view! {
        <Show
            when=move || gate_state.get().admits()
            fallback=|| view! { <div class="loading">"Loading..."</div> }
        >
            <div class="app-container">
                <SideNav/>
                <div class="main-container">
                    <Header/>
                    <div class="game-info-container">
                        <GameInfo/>
                    </div>
                </div>
            </div>
        </Show>
    }
}
