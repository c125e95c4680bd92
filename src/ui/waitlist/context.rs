//! Waitlist visibility context
//!
//! One `WaitlistContext` is provided by `App`. Every trigger on the page (navbar,
//! hero, CTA, mobile menu) calls `open()` on it; the dialog observes `is_open`.

use leptos::prelude::*;

use crate::core::waitlist::{FormStore, WaitlistForm, WaitlistVisibility};

/// Signal-backed open/close controller for the waitlist dialog
#[derive(Clone, Copy)]
pub struct WaitlistContext {
    is_open: RwSignal<bool>,
}

impl WaitlistContext {
    pub fn new() -> Self {
        Self {
            is_open: RwSignal::new(false),
        }
    }

    pub fn open(&self) {
        // Skip the write so observers are not re-run for a no-op
        if !self.is_open.get_untracked() {
            self.is_open.set(true);
        }
    }

    pub fn close(&self) {
        if self.is_open.get_untracked() {
            self.is_open.set(false);
        }
    }

    /// Tracked read, re-runs the caller when visibility changes.
    /// The `WaitlistVisibility::is_open` impl is the untracked counterpart.
    pub fn is_open_tracked(&self) -> bool {
        self.is_open.get()
    }

    pub fn is_open_signal(&self) -> Signal<bool> {
        self.is_open.into()
    }
}

impl Default for WaitlistContext {
    fn default() -> Self {
        Self::new()
    }
}

impl WaitlistVisibility for WaitlistContext {
    fn open(&self) {
        WaitlistContext::open(self);
    }

    fn close(&self) {
        WaitlistContext::close(self);
    }

    fn is_open(&self) -> bool {
        self.is_open.get_untracked()
    }
}

impl FormStore for RwSignal<WaitlistForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut WaitlistForm) -> R) -> Option<R> {
        // Disposed signals return None, so late writes after unmount are dropped
        self.try_update(f)
    }
}

/// Provide the waitlist context to the component tree
pub fn provide_waitlist_context() -> WaitlistContext {
    let ctx = WaitlistContext::new();
    provide_context(ctx);
    ctx
}

/// Get the waitlist context from the component tree
pub fn use_waitlist_context() -> WaitlistContext {
    expect_context::<WaitlistContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracked_and_untracked_reads_agree() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = WaitlistContext::new();
            assert!(!ctx.is_open_tracked());
            assert!(!WaitlistVisibility::is_open(&ctx));

            WaitlistVisibility::open(&ctx);
            assert!(ctx.is_open_tracked());
            assert!(WaitlistVisibility::is_open(&ctx));
            assert!(ctx.is_open_signal().get_untracked());

            ctx.close();
            ctx.close();
            assert!(!ctx.is_open_tracked());
            assert!(!WaitlistVisibility::is_open(&ctx));
        });
    }
}
