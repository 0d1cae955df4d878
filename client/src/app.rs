//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, landing::LandingPage};
use crate::state::game::GameState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the game context. Session state is owned by each protected
/// page mount, not by the app.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let game = RwSignal::new(GameState::default());
    provide_context(game);

    view! {
        <Stylesheet id="leptos" href="/pkg/indichess-ui.css"/>
        <Title text="IndiChess"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("home") view=HomePage/>
            </Routes>
        </Router>
    }
}
