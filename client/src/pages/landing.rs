//! Landing page: the unauthenticated route.
//!
//! Accepts a token handed over by the OAuth success redirect (`/?token=...`),
//! offers username/password login against the identity service and links to
//! Google sign-in. A newly obtained token is stored and the visitor moves on
//! to the protected home page, which verifies it.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use session::Credential;

use crate::config;

const MISSING_FIELDS: &str = "Enter both username and password.";

/// Trim and require both login fields.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    let password = password.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Token carried by the OAuth redirect, if any.
fn token_from_query(raw: Option<String>) -> Option<Credential> {
    raw.and_then(|token| Credential::new(token.trim()))
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let navigate = use_navigate();
    let query = use_query_map();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let Some(credential) = token_from_query(query.get().get("token")) else {
                return;
            };
            match crate::util::auth::store_token(&credential) {
                Ok(()) => navigate(session::HOME_ROUTE, leptos_router::NavigateOptions::default()),
                Err(e) => log::error!("storing OAuth token failed: {e}"),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
    }

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, password_value) = match validate_login_input(&username.get(), &password.get()) {
            Ok(fields) => fields,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let stored = crate::net::api::login(&username_value, &password_value)
                    .await
                    .and_then(|credential| crate::util::auth::store_token(&credential).map_err(|e| e.to_string()));
                match stored {
                    Ok(()) => navigate(session::HOME_ROUTE, leptos_router::NavigateOptions::default()),
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        info.set(e);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, username_value, password_value);
        }
    };

    let google_href = config::auth_url(config::GOOGLE_LOGIN_PATH);

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"IndiChess"</h1>
                <p class="login-card__subtitle">"Sign in to play"</p>
                <form class="login-form" on:submit=on_login>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
                <a href=google_href class="login-button login-button--google">
                    "Sign in with Google"
                </a>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-info">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
