//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages install the session gate through [`install_session_gate`]
//! so every mount gets identical verify-or-redirect behavior. Logout and the
//! login handoff share the same storage and router adapters.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use session::{Credential, LANDING_ROUTE, Navigator, SessionState, StorageError, clear_credential, save_credential};

use crate::util::credentials::BrowserStorage;

/// [`Navigator`] over a `leptos_router` navigate function.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, route: &str) {
        (self.navigate)(route, NavigateOptions::default());
    }
}

/// Run the session gate for the current mount, publishing transitions to
/// `gate_state`. The in-flight check is abandoned when the owner is cleaned up.
pub fn install_session_gate<F>(gate_state: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use session::{MountToken, SessionGate};

        use crate::net::api::GlooVerifier;

        let mount = MountToken::new();
        let cleanup = mount.clone();
        on_cleanup(move || cleanup.teardown());

        let navigator = RouterNavigator::new(navigate);
        leptos::task::spawn_local(async move {
            let gate = SessionGate::new(BrowserStorage, GlooVerifier::default(), navigator);
            let outcome = gate.check(&mount, |state| gate_state.set(state)).await;
            log::debug!("session gate finished: {outcome:?}");
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (gate_state, navigate);
    }
}

/// Store a freshly issued token.
///
/// # Errors
///
/// Returns an error if `localStorage` rejects the write.
pub fn store_token(credential: &Credential) -> Result<(), StorageError> {
    save_credential(&BrowserStorage, credential)
}

/// Forget the stored token and return to the landing route.
pub fn logout<N: Navigator>(navigator: &N) {
    clear_credential(&BrowserStorage);
    navigator.navigate(LANDING_ROUTE);
}
