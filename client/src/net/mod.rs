//! Networking modules for the identity service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the REST endpoints the front end needs: token verification
//! for the session gate and username/password login.

pub mod api;
