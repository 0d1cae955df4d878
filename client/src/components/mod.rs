//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the protected home layout (navigation, header, game
//! panel) while reading shared state from Leptos context providers.

pub mod captured_pieces;
pub mod game_info;
pub mod header;
pub mod side_nav;
