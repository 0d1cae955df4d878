//! Navigation capability.

use std::cell::RefCell;

/// Route shown to visitors without a valid session.
pub const LANDING_ROUTE: &str = "/";
/// Protected route guarded by the session gate.
pub const HOME_ROUTE: &str = "/home";

pub trait Navigator {
    fn navigate(&self, route: &str);
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn navigate(&self, route: &str) {
        (**self).navigate(route);
    }
}

/// Navigator that only remembers where it was sent.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn routes(&self) -> Vec<String> {
        self.routes.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.borrow_mut().push(route.to_owned());
    }
}
