//! Remote token verification capability.

use std::fmt;
use std::future::Future;

/// A non-empty bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw token. Returns `None` for an empty string.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.is_empty() { None } else { Some(Self(token)) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Why a verification attempt did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error("identity service rejected token: {status}")]
    Rejected { status: u16 },
    #[error("verification request failed: {0}")]
    Transport(String),
    #[error("verification request timed out")]
    Timeout,
}

impl VerifyError {
    /// Transport failures and timeouts may succeed on another attempt; a
    /// rejection will not.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout)
    }
}

/// Checks a credential against the identity service.
///
/// Implementations succeed on any 2xx response.
pub trait Verifier {
    fn verify(&self, credential: &Credential) -> impl Future<Output = Result<(), VerifyError>>;
}

impl<T: Verifier + ?Sized> Verifier for &T {
    fn verify(&self, credential: &Credential) -> impl Future<Output = Result<(), VerifyError>> {
        (**self).verify(credential)
    }
}

/// How many verification attempts a gate may make.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    attempts: u32,
}

impl RetryPolicy {
    /// One attempt, no retry.
    #[must_use]
    pub const fn single_shot() -> Self {
        Self { attempts: 1 }
    }

    /// Up to `attempts` sequential attempts (at least one).
    #[must_use]
    pub const fn attempts(attempts: u32) -> Self {
        Self { attempts: if attempts == 0 { 1 } else { attempts } }
    }

    #[must_use]
    pub const fn max_attempts(self) -> u32 {
        self.attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::single_shot()
    }
}
