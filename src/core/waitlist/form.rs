//! Waitlist form state machine
//!
//! ```text
//! Idle --submit(valid)--> Loading --ok--> Success --timeout--> Idle
//!   ^                        |
//!   |                        +--err--> Error --submit(valid)--> Loading
//!   +-- submit(invalid), acknowledge_error, settle after close
//! ```
//!
//! Every submission carries the session it was started in. Closing the dialog
//! starts a new session, so results that arrive for a closed dialog are dropped.

use super::transport::{SubmissionError, WaitlistEntry};
use super::validation::{ValidationErrors, WaitlistField, validate};

/// Identifies one lifetime of the dialog's contents
pub type SessionId = u64;

/// Raw field values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
}

impl FormValues {
    /// Build the request payload. Blank names are omitted.
    pub fn to_entry(&self) -> WaitlistEntry {
        let name = self.name.trim();
        WaitlistEntry {
            name: (!name.is_empty()).then(|| name.to_string()),
            email: self.email.trim().to_string(),
        }
    }
}

/// Submission lifecycle status
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl SubmissionStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionStatus::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionStatus::Success)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Ticket for a submission that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub session: SessionId,
    pub entry: WaitlistEntry,
}

/// Why a submit attempt did not start a request
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(ValidationErrors),

    #[error("a submission is already in flight")]
    InFlight,

    #[error("the form was already submitted successfully")]
    Completed,
}

/// Complete state of one waitlist form instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistForm {
    values: FormValues,
    errors: ValidationErrors,
    status: SubmissionStatus,
    session: SessionId,
    pending_reset: Option<SessionId>,
}

impl WaitlistForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        matches!(
            self.status,
            SubmissionStatus::Idle | SubmissionStatus::Error(_)
        )
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.values.name = name.into();
        self.errors.remove(WaitlistField::Name);
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.values.email = email.into();
        self.errors.remove(WaitlistField::Email);
    }

    /// Validate and, if valid, move to `Loading`.
    ///
    /// Invalid input leaves the status untouched and records the field errors.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitRejected> {
        match self.status {
            SubmissionStatus::Loading => return Err(SubmitRejected::InFlight),
            SubmissionStatus::Success => return Err(SubmitRejected::Completed),
            SubmissionStatus::Idle | SubmissionStatus::Error(_) => {}
        }

        let errors = validate(&self.values);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(SubmitRejected::Invalid(errors));
        }

        self.errors.clear();
        self.status = SubmissionStatus::Loading;

        Ok(Submission {
            session: self.session,
            entry: self.values.to_entry(),
        })
    }

    /// Apply the outcome of a request. Returns false if the result was dropped
    /// because its session is gone or the form is no longer waiting on it.
    pub fn resolve(
        &mut self,
        submission: &Submission,
        outcome: Result<(), SubmissionError>,
    ) -> bool {
        if !self.owns(submission) || !self.status.is_loading() {
            return false;
        }

        self.status = match outcome {
            Ok(()) => SubmissionStatus::Success,
            Err(e) => SubmissionStatus::Error(e.user_message()),
        };
        true
    }

    /// Leave the success confirmation: clear values and return to `Idle`.
    pub fn finish_success(&mut self, submission: &Submission) -> bool {
        if !self.owns(submission) || !self.status.is_success() {
            return false;
        }

        self.reset();
        true
    }

    /// Dismiss the error banner. Entered values are kept.
    pub fn acknowledge_error(&mut self) {
        if matches!(self.status, SubmissionStatus::Error(_)) {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// The dialog was closed. Starts a new session and schedules a reset that
    /// [`WaitlistForm::settle`] applies once the close animation is done.
    pub fn dismiss(&mut self) -> SessionId {
        self.session += 1;
        self.pending_reset = Some(self.session);
        self.session
    }

    /// Apply the reset scheduled by [`WaitlistForm::dismiss`] for `session`.
    pub fn settle(&mut self, session: SessionId) -> bool {
        if self.pending_reset != Some(session) {
            return false;
        }

        self.reset();
        true
    }

    /// The dialog was opened. A reset still waiting on its timer is applied now.
    pub fn reopen(&mut self) {
        if self.pending_reset.is_some() {
            self.reset();
        }
    }

    fn owns(&self, submission: &Submission) -> bool {
        submission.session == self.session
    }

    fn reset(&mut self) {
        self.values = FormValues::default();
        self.errors.clear();
        self.status = SubmissionStatus::Idle;
        self.pending_reset = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::waitlist::{DEFAULT_FAILURE_MESSAGE, FieldError};

    fn filled(email: &str) -> WaitlistForm {
        let mut form = WaitlistForm::new();
        form.set_name("Jane Doe");
        form.set_email(email);
        form
    }

    #[test]
    fn test_initial_state() {
        let form = WaitlistForm::new();
        assert_eq!(form.status(), &SubmissionStatus::Idle);
        assert_eq!(form.values(), &FormValues::default());
        assert!(form.errors().is_empty());
        assert!(form.can_submit());
    }

    #[test]
    fn test_invalid_submit_stays_idle() {
        let mut form = filled("");

        let rejected = form.begin_submit().unwrap_err();
        assert!(matches!(rejected, SubmitRejected::Invalid(ref e) if e.len() == 1));
        assert_eq!(form.status(), &SubmissionStatus::Idle);
        assert_eq!(
            form.errors().get(WaitlistField::Email),
            Some(FieldError::EmailRequired)
        );
    }

    #[test]
    fn test_editing_clears_field_error() {
        let mut form = filled("jane");
        assert!(form.begin_submit().is_err());
        assert!(!form.errors().is_empty());

        form.set_email("jane@");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_valid_submit_enters_loading() {
        let mut form = filled(" jane@example.com ");

        let submission = form.begin_submit().unwrap();
        assert_eq!(form.status(), &SubmissionStatus::Loading);
        assert!(!form.can_submit());
        assert_eq!(submission.session, form.session());
        assert_eq!(submission.entry.email, "jane@example.com");
        assert_eq!(submission.entry.name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_blank_name_is_omitted() {
        let mut form = WaitlistForm::new();
        form.set_name("   ");
        form.set_email("jane@example.com");

        let submission = form.begin_submit().unwrap();
        assert!(submission.entry.name.is_none());
    }

    #[test]
    fn test_cannot_submit_while_loading() {
        let mut form = filled("jane@example.com");
        form.begin_submit().unwrap();

        assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));
        assert!(form.is_loading());
    }

    #[test]
    fn test_success_then_finish_clears_values() {
        let mut form = filled("jane@example.com");
        let submission = form.begin_submit().unwrap();

        assert!(form.resolve(&submission, Ok(())));
        assert_eq!(form.status(), &SubmissionStatus::Success);
        assert_eq!(form.begin_submit(), Err(SubmitRejected::Completed));

        assert!(form.finish_success(&submission));
        assert_eq!(form.status(), &SubmissionStatus::Idle);
        assert_eq!(form.values(), &FormValues::default());
    }

    #[test]
    fn test_failure_keeps_values_for_retry() {
        let mut form = filled("jane@example.com");
        let submission = form.begin_submit().unwrap();

        assert!(form.resolve(&submission, Err(SubmissionError::Status(500))));
        assert_eq!(
            form.status(),
            &SubmissionStatus::Error(DEFAULT_FAILURE_MESSAGE.to_string())
        );
        assert_eq!(form.values().email, "jane@example.com");
        assert_eq!(form.values().name, "Jane Doe");

        // Retry leaves Error and clears the message
        let retry = form.begin_submit().unwrap();
        assert_eq!(form.status(), &SubmissionStatus::Loading);
        assert!(form.resolve(&retry, Ok(())));
        assert!(form.status().is_success());
    }

    #[test]
    fn test_invalid_submit_from_error_keeps_banner() {
        let mut form = filled("jane@example.com");
        let submission = form.begin_submit().unwrap();
        form.resolve(&submission, Err(SubmissionError::Timeout));

        form.set_email("broken");
        assert!(matches!(form.begin_submit(), Err(SubmitRejected::Invalid(_))));
        assert!(form.status().error_message().is_some());
    }

    #[test]
    fn test_acknowledge_error() {
        let mut form = filled("jane@example.com");
        let submission = form.begin_submit().unwrap();
        form.resolve(&submission, Err(SubmissionError::Network("refused".into())));

        form.acknowledge_error();
        assert_eq!(form.status(), &SubmissionStatus::Idle);
        assert_eq!(form.values().email, "jane@example.com");

        // No effect outside Error
        let _retry = form.begin_submit().unwrap();
        form.acknowledge_error();
        assert!(form.is_loading());
    }

    #[test]
    fn test_resolve_twice_is_ignored() {
        let mut form = filled("jane@example.com");
        let submission = form.begin_submit().unwrap();

        assert!(form.resolve(&submission, Ok(())));
        assert!(!form.resolve(&submission, Err(SubmissionError::Status(500))));
        assert!(form.status().is_success());
    }

    #[test]
    fn test_dismiss_then_settle_resets() {
        let mut form = filled("jane@example.com");
        form.begin_submit().unwrap();

        let session = form.dismiss();
        assert!(form.settle(session));
        assert_eq!(form.status(), &SubmissionStatus::Idle);
        assert_eq!(form.values(), &FormValues::default());

        // Already settled
        assert!(!form.settle(session));
    }

    #[test]
    fn test_late_resolution_after_close_is_dropped() {
        let mut form = filled("jane@example.com");
        let submission = form.begin_submit().unwrap();

        let session = form.dismiss();
        assert!(!form.resolve(&submission, Ok(())));
        assert!(form.is_loading());

        assert!(form.settle(session));
        assert!(!form.resolve(&submission, Err(SubmissionError::Status(500))));
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_reopen_before_settle_starts_fresh() {
        let mut form = filled("jane@example.com");
        let submission = form.begin_submit().unwrap();

        let session = form.dismiss();
        form.reopen();
        assert_eq!(form.status(), &SubmissionStatus::Idle);
        assert_eq!(form.values(), &FormValues::default());

        // The old timer and the old request both land on the fresh session
        form.set_email("new@example.com");
        assert!(!form.settle(session));
        assert!(!form.resolve(&submission, Ok(())));
        assert_eq!(form.values().email, "new@example.com");
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_reopen_without_pending_reset_keeps_values() {
        let mut form = filled("jane@example.com");
        form.reopen();
        assert_eq!(form.values().email, "jane@example.com");
    }

    #[test]
    fn test_finish_success_from_old_session_is_ignored() {
        let mut form = filled("jane@example.com");
        let submission = form.begin_submit().unwrap();
        form.resolve(&submission, Ok(()));

        form.dismiss();
        assert!(!form.finish_success(&submission));
    }
}
