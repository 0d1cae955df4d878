//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only state shared across pages lives here. Session state is per mount and
//! stays inside the protected page.

pub mod game;
