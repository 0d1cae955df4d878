//! Credential storage capability.
//!
//! The browser backs this with `localStorage`, the CLI with a JSON file and
//! tests with [`MemoryStore`]. Reads and writes are atomic per key only.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::verify::Credential;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("credential storage unavailable")]
    Unavailable,
    #[error("credential storage read failed: {0}")]
    Read(String),
    #[error("credential storage write failed: {0}")]
    Write(String),
}

/// Key-value store for client-side credentials.
pub trait CredentialStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: CredentialStore + ?Sized> CredentialStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Load the stored bearer token.
///
/// Empty values and unreadable storage both count as "no credential".
pub fn load_credential<S: CredentialStore + ?Sized>(store: &S) -> Option<Credential> {
    match store.get(TOKEN_KEY) {
        Ok(raw) => raw.and_then(Credential::new),
        Err(e) => {
            log::warn!("reading session credential failed: {e}");
            None
        }
    }
}

/// Persist a freshly issued bearer token.
///
/// # Errors
///
/// Returns an error if the store rejects the write.
pub fn save_credential<S: CredentialStore + ?Sized>(store: &S, credential: &Credential) -> Result<(), StorageError> {
    store.set(TOKEN_KEY, credential.as_str())
}

/// Remove the stored bearer token, logging (not returning) storage failures.
pub fn clear_credential<S: CredentialStore + ?Sized>(store: &S) {
    if let Err(e) = store.remove(TOKEN_KEY) {
        log::error!("clearing session credential failed: {e}");
    }
}

/// In-process store used by tests and tooling.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token` under [`TOKEN_KEY`].
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(TOKEN_KEY.to_owned(), token.to_owned());
        store
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
