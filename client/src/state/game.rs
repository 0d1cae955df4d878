//! Game panel state shared through context.

#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

use pieces::{CapturedCollection, CapturedPieces};

/// State behind the game-info panel.
///
/// Captures are written by upstream game logic; the panel only reads them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    pub captured: CapturedPieces,
}

impl GameState {
    pub fn captured_white(&self) -> CapturedCollection {
        self.captured.captured_white.clone()
    }

    pub fn captured_black(&self) -> CapturedCollection {
        self.captured.captured_black.clone()
    }
}
