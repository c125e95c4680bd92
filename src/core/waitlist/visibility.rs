//! Open/close controller for the waitlist dialog

use std::cell::Cell;
use std::rc::Rc;

/// Shared visibility of the waitlist dialog.
///
/// Both operations are idempotent. Neither touches form state.
pub trait WaitlistVisibility {
    fn open(&self);
    fn close(&self);
    fn is_open(&self) -> bool;
}

/// Plain single-threaded controller. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct VisibilityState {
    is_open: Rc<Cell<bool>>,
}

impl VisibilityState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WaitlistVisibility for VisibilityState {
    fn open(&self) {
        self.is_open.set(true);
    }

    fn close(&self) {
        self.is_open.set(false);
    }

    fn is_open(&self) -> bool {
        self.is_open.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert!(!VisibilityState::new().is_open());
    }

    #[test]
    fn test_open_is_idempotent() {
        let visibility = VisibilityState::new();
        visibility.open();
        visibility.open();
        assert!(visibility.is_open());
    }

    #[test]
    fn test_close_when_closed() {
        let visibility = VisibilityState::new();
        visibility.close();
        assert!(!visibility.is_open());

        visibility.open();
        visibility.close();
        visibility.close();
        assert!(!visibility.is_open());
    }

    #[test]
    fn test_clones_share_state() {
        let navbar = VisibilityState::new();
        let dialog = navbar.clone();

        navbar.open();
        assert!(dialog.is_open());

        dialog.close();
        assert!(!navbar.is_open());
    }

    #[test]
    fn test_instances_are_isolated() {
        let first = VisibilityState::new();
        let second = VisibilityState::new();

        first.open();
        assert!(!second.is_open());
    }
}
