//! Async orchestration of the waitlist dialog
//!
//! `WaitlistFlow` ties the form state machine to a transport and the visibility
//! controller. It never holds a borrow of the form across an await point, and every
//! write after a suspension goes through the session checks in `WaitlistForm`.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::future::Future;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::{AbortHandle, Abortable, Aborted};

use super::form::{SubmitRejected, WaitlistForm};
use super::timer::sleep;
use super::transport::{Transport, WaitlistTransport};
use super::visibility::WaitlistVisibility;

/// How long the success confirmation stays up before the dialog closes
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(2500);

/// Delay between closing the dialog and resetting its contents
pub const CLOSE_SETTLE: Duration = Duration::from_millis(300);

/// Where the form state lives.
pub trait FormStore {
    /// Run `f` against the form, or return `None` if the form has been torn down.
    fn with_form<R>(&self, f: impl FnOnce(&mut WaitlistForm) -> R) -> Option<R>;
}

impl FormStore for Rc<RefCell<WaitlistForm>> {
    fn with_form<R>(&self, f: impl FnOnce(&mut WaitlistForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Timer durations used by the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub success_display: Duration,
    pub close_settle: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            success_display: SUCCESS_DISPLAY,
            close_settle: CLOSE_SETTLE,
        }
    }
}

/// Drives submissions and dialog open/close transitions for one form instance
#[derive(Debug, Clone)]
pub struct WaitlistFlow<S, V, T = Transport> {
    store: S,
    visibility: V,
    transport: T,
    timings: Timings,
}

impl<S, V, T> WaitlistFlow<S, V, T>
where
    S: FormStore,
    V: WaitlistVisibility,
    T: WaitlistTransport,
{
    pub fn new(store: S, visibility: V, transport: T) -> Self {
        Self {
            store,
            visibility,
            transport,
            timings: Timings::default(),
        }
    }

    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn visibility(&self) -> &V {
        &self.visibility
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Run one submit attempt to the end, including the success auto-close.
    ///
    /// Validation failures and double submits are returned; transport failures
    /// end up in the form's `Error` status instead.
    pub async fn submit(&self) -> Result<(), SubmitRejected> {
        let Some(started) = self.store.with_form(|form| form.begin_submit()) else {
            return Ok(());
        };

        let submission = match started {
            Ok(submission) => submission,
            Err(rejected) => {
                waitlist_log!(debug, "Waitlist submit rejected: {}", rejected);
                return Err(rejected);
            }
        };

        waitlist_log!(info, "Submitting waitlist entry (session {})", submission.session);

        let outcome = self.transport.submit(&submission.entry).await;
        let succeeded = outcome.is_ok();
        if let Err(e) = &outcome {
            waitlist_log!(warn, "Waitlist submission failed: {}", e);
        }

        let applied = self
            .store
            .with_form(|form| form.resolve(&submission, outcome))
            .unwrap_or(false);

        if !applied {
            waitlist_log!(
                debug,
                "Dropping waitlist result for closed session {}",
                submission.session
            );
            return Ok(());
        }

        if !succeeded {
            return Ok(());
        }

        sleep(self.timings.success_display).await;

        let finished = self
            .store
            .with_form(|form| form.finish_success(&submission))
            .unwrap_or(false);

        if finished {
            self.visibility.close();
        }

        Ok(())
    }

    /// React to the dialog being opened or closed by anyone.
    pub async fn visibility_changed(&self, open: bool) {
        if open {
            self.store.with_form(|form| form.reopen());
            return;
        }

        let Some(session) = self.store.with_form(|form| form.dismiss()) else {
            return;
        };

        sleep(self.timings.close_settle).await;
        self.store.with_form(|form| form.settle(session));
    }

    /// Dismiss the error banner
    pub fn acknowledge_error(&self) {
        self.store.with_form(|form| form.acknowledge_error());
    }
}

/// Abort handles for futures spawned on behalf of a component.
///
/// Pending timers and requests are cancelled with [`TaskGuard::cancel_all`]
/// when the owning view is torn down. A handle is released as soon as its
/// future finishes or is dropped, so a long-lived view does not accumulate them.
#[derive(Debug, Clone, Default)]
pub struct TaskGuard {
    tasks: Arc<Mutex<TrackedTasks>>,
}

#[derive(Debug, Default)]
struct TrackedTasks {
    next_id: u64,
    handles: BTreeMap<u64, AbortHandle>,
}

/// Removes one handle from its guard on drop
struct Untrack {
    tasks: Arc<Mutex<TrackedTasks>>,
    id: u64,
}

impl Drop for Untrack {
    fn drop(&mut self) {
        if let Ok(mut tasks) = self.tasks.lock() {
            tasks.handles.remove(&self.id);
        }
    }
}

impl TaskGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `future` so that `cancel_all` can stop it.
    pub fn track<F: Future>(
        &self,
        future: F,
    ) -> impl Future<Output = Result<F::Output, Aborted>> + use<F> {
        let (handle, registration) = AbortHandle::new_pair();
        let untrack = self.register(handle);
        let abortable = Abortable::new(future, registration);

        async move {
            let _untrack = untrack;
            abortable.await
        }
    }

    fn register(&self, handle: AbortHandle) -> Untrack {
        let mut id = 0;
        if let Ok(mut tasks) = self.tasks.lock() {
            id = tasks.next_id;
            tasks.next_id += 1;
            tasks.handles.insert(id, handle);
        }
        Untrack {
            tasks: Arc::clone(&self.tasks),
            id,
        }
    }

    pub fn cancel_all(&self) {
        if let Ok(mut tasks) = self.tasks.lock() {
            for handle in std::mem::take(&mut tasks.handles).into_values() {
                handle.abort();
            }
        }
    }

    /// Number of tracked futures that have neither finished nor been cancelled
    pub fn tracked(&self) -> usize {
        self.tasks.lock().map(|t| t.handles.len()).unwrap_or(0)
    }
}
