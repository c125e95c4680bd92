//! Waitlist UI: the shared open/close context, trigger buttons and the dialog

pub mod button;
pub mod context;
pub mod modal;

pub use button::WaitlistButton;
pub use context::{WaitlistContext, provide_waitlist_context, use_waitlist_context};
pub use modal::WaitlistModal;
