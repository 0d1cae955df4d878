//! Lifetime token for a mounted page.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag that stays `true` until the owning page is torn down.
///
/// Clones observe the same flag, so the page keeps one handle for its
/// cleanup hook and passes another to the in-flight check.
#[derive(Clone, Debug)]
pub struct MountToken {
    alive: Arc<AtomicBool>,
}

impl MountToken {
    #[must_use]
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn teardown(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

impl Default for MountToken {
    fn default() -> Self {
        Self::new()
    }
}
