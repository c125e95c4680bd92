//! Waitlist signup flow
//!
//! Everything here is independent of the DOM:
//! - `validation` - pure field checks
//! - `form` - the Idle/Loading/Success/Error state machine
//! - `transport` - demo and HTTP submission backends
//! - `visibility` - the open/close controller seam
//! - `flow` - async orchestration with timers and teardown guards

/// Log from the waitlist core.
///
/// Goes to `tracing` natively. The browser build has no tracing subscriber, so
/// there it writes to the console through `leptos::logging`.
macro_rules! waitlist_log {
    (warn, $($arg:tt)*) => {{
        #[cfg(feature = "hydrate")]
        leptos::logging::warn!($($arg)*);
        #[cfg(not(feature = "hydrate"))]
        tracing::warn!($($arg)*);
    }};
    ($level:ident, $($arg:tt)*) => {{
        #[cfg(feature = "hydrate")]
        leptos::logging::log!($($arg)*);
        #[cfg(not(feature = "hydrate"))]
        tracing::$level!($($arg)*);
    }};
}

mod flow;
mod form;
mod timer;
mod transport;
mod validation;
mod visibility;


pub use flow::{CLOSE_SETTLE, FormStore, SUCCESS_DISPLAY, TaskGuard, Timings, WaitlistFlow};
pub use form::{
    FormValues, SessionId, Submission, SubmissionStatus, SubmitRejected, WaitlistForm,
};
pub use transport::{
    DEMO_DELAY, DemoTransport, HttpTransport, REQUEST_TIMEOUT, SubmissionError, Transport,
    WaitlistEntry, WaitlistTransport,
};
pub use validation::{FieldError, ValidationErrors, WaitlistField, is_valid_email, validate};
pub use visibility::{VisibilityState, WaitlistVisibility};

/// Message shown whenever a submission fails
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to join waitlist. Please try again.";
