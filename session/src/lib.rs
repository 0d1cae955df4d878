//! Session gate for protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! A protected page mounts a [`SessionGate`] which reads the stored bearer
//! token, verifies it against the identity service and either admits the
//! page content or clears the token and navigates to the landing route.
//!
//! DESIGN
//! ======
//! Storage, verification and navigation are injected capabilities so the
//! same state machine runs in the browser (`client`), on the command line
//! (`cli`) and in tests. The only suspension point is verification; a
//! [`MountToken`] ties the check to the lifetime of the page that started it.

pub mod gate;
pub mod mount;
pub mod navigate;
pub mod store;
pub mod verify;

pub use gate::{GateError, GateOutcome, SessionGate, SessionState};
pub use mount::MountToken;
pub use navigate::{HOME_ROUTE, LANDING_ROUTE, Navigator, RecordingNavigator};
pub use store::{CredentialStore, MemoryStore, StorageError, TOKEN_KEY, clear_credential, load_credential, save_credential};
pub use verify::{Credential, RetryPolicy, Verifier, VerifyError};
