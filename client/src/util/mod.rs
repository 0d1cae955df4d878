//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, router)
//! from page and component logic.

pub mod auth;
pub mod credentials;
