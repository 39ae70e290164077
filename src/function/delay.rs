//! Run a function once after a wait.

use std::time::Duration;

use crate::scheduler::Scheduler;

/// Schedules `function(args)` to run once, no earlier than `wait` from now.
///
/// Returns immediately with the scheduler's handle. The result of the
/// function is discarded.
///
/// # Examples
///
/// ```rust
/// use eachfold::function::delay;
/// use eachfold::scheduler::VirtualClock;
/// use std::sync::Arc;
/// use parking_lot::Mutex;
/// use std::time::Duration;
///
/// let clock = VirtualClock::new();
/// let log = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&log);
///
/// let record = move |word: String| sink.lock().push(word);
/// delay(&clock, record, Duration::from_millis(50), "delayed".to_string());
/// assert!(log.lock().is_empty());
///
/// clock.advance(Duration::from_millis(50));
/// assert_eq!(*log.lock(), vec!["delayed"]);
/// ```
pub fn delay<S, F, A, R>(scheduler: &S, function: F, wait: Duration, args: A) -> S::Handle
where
    S: Scheduler + ?Sized,
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
{
    tracing::trace!(?wait, "delaying function call");
    scheduler.schedule(
        move || {
            function(args);
        },
        wait,
    )
}
