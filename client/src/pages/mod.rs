//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (session gate, login handoff)
//! and delegates rendering details to `components`.

pub mod home;
pub mod landing;
