//! The session gate state machine.
//!
//! ```text
//! Unchecked --no token--------------------------------> Invalid (navigate /)
//! Unchecked --token--> Checking --2xx-----------------> Valid
//!                               --error/non-2xx/timeout> Invalid (clear token, navigate /)
//! ```
//!
//! Every mount starts from `Unchecked`; a previous `Valid` is never reused.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::mount::MountToken;
use crate::navigate::{LANDING_ROUTE, Navigator};
use crate::store::{CredentialStore, clear_credential, load_credential};
use crate::verify::{Credential, RetryPolicy, Verifier, VerifyError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Unchecked,
    Checking,
    Valid,
    Invalid,
}

impl SessionState {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Valid | Self::Invalid)
    }

    /// Whether protected content may be mounted.
    #[must_use]
    pub fn admits(self) -> bool {
        self == Self::Valid
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    #[error("no session credential stored")]
    MissingCredential,
    #[error("session verification failed: {0}")]
    VerificationFailure(#[from] VerifyError),
}

/// Result of one gate check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    Admitted,
    Denied(GateError),
    /// The mount went away before the check finished; nothing was applied.
    Abandoned,
}

impl GateOutcome {
    /// The last state the gate applied.
    #[must_use]
    pub fn state(&self) -> SessionState {
        match self {
            Self::Admitted => SessionState::Valid,
            Self::Denied(_) => SessionState::Invalid,
            Self::Abandoned => SessionState::Checking,
        }
    }
}

/// Decides whether protected content renders for one mount.
pub struct SessionGate<S, V, N> {
    store: S,
    verifier: V,
    navigator: N,
    retry: RetryPolicy,
}

impl<S, V, N> SessionGate<S, V, N>
where
    S: CredentialStore,
    V: Verifier,
    N: Navigator,
{
    pub fn new(store: S, verifier: V, navigator: N) -> Self {
        Self { store, verifier, navigator, retry: RetryPolicy::default() }
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Run the check for the mount identified by `mount`.
    ///
    /// `on_state` sees each transition out of `Unchecked` while the mount is
    /// alive. If the mount is torn down while verification is in flight the
    /// late result is dropped: no state change, no storage write, no
    /// navigation.
    pub async fn check<F>(&self, mount: &MountToken, mut on_state: F) -> GateOutcome
    where
        F: FnMut(SessionState),
    {
        if !mount.is_alive() {
            return GateOutcome::Abandoned;
        }

        let Some(credential) = load_credential(&self.store) else {
            log::info!("no session credential; redirecting to {LANDING_ROUTE}");
            on_state(SessionState::Invalid);
            self.navigator.navigate(LANDING_ROUTE);
            return GateOutcome::Denied(GateError::MissingCredential);
        };

        on_state(SessionState::Checking);
        let result = self.verify(&credential, mount).await;

        if !mount.is_alive() {
            log::debug!("page unmounted during token validation; discarding result");
            return GateOutcome::Abandoned;
        }

        match result {
            Ok(()) => {
                on_state(SessionState::Valid);
                GateOutcome::Admitted
            }
            Err(e) => {
                log::warn!("token validation failed: {e}");
                clear_credential(&self.store);
                on_state(SessionState::Invalid);
                self.navigator.navigate(LANDING_ROUTE);
                GateOutcome::Denied(GateError::VerificationFailure(e))
            }
        }
    }

    /// Sequential attempts; at most one request is in flight.
    async fn verify(&self, credential: &Credential, mount: &MountToken) -> Result<(), VerifyError> {
        let mut attempt = 1;
        loop {
            match self.verifier.verify(credential).await {
                Err(e) if e.is_retryable() && attempt < self.retry.max_attempts() && mount.is_alive() => {
                    log::debug!("token validation attempt {attempt} failed: {e}; retrying");
                    attempt += 1;
                }
                other => return other,
            }
        }
    }
}
