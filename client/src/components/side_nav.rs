//! Side navigation with links to protected routes and logout.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::HOME_ROUTE;

use crate::util::auth::{RouterNavigator, logout};

#[component]
pub fn SideNav() -> impl IntoView {
    let navigate = use_navigate();

    let on_logout = move |_| {
        logout(&RouterNavigator::new(navigate.clone()));
    };

    view! {
        <nav class="side-nav">
            <a class="side-nav__logo" href=HOME_ROUTE>"♞ IndiChess"</a>
            <a class="side-nav__link" href=HOME_ROUTE>"Play"</a>
            <button class="btn side-nav__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </nav>
    }
}
