//! Top header bar of the protected layout.

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1 class="header__title">"IndiChess"</h1>
        </header>
    }
}
