//! Run a function at most once per wait window.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::scheduler::Scheduler;

/// A function that runs at most once every `wait`.
///
/// A call while idle runs the function immediately, returns its result, and
/// starts a cooldown of `wait` on the scheduler. Calls during the cooldown
/// are dropped and return `None`; they are not queued or replayed.
///
/// # Examples
///
/// ```rust
/// use eachfold::function::throttle;
/// use eachfold::scheduler::VirtualClock;
/// use std::time::Duration;
///
/// let clock = VirtualClock::new();
/// let ping = throttle(|n: i32| n + 1, Duration::from_millis(100), clock.clone());
///
/// assert_eq!(ping.call(1), Some(2));
/// assert_eq!(ping.call(2), None);
///
/// clock.advance(Duration::from_millis(100));
/// assert_eq!(ping.call(3), Some(4));
/// ```
pub struct Throttle<F, S> {
    function: F,
    wait: Duration,
    scheduler: S,
    cooling_down: Arc<AtomicBool>,
}

/// Wraps `function` so that it runs at most once per `wait`, timing the
/// cooldown on `scheduler`.
pub fn throttle<F, A, R, S>(function: F, wait: Duration, scheduler: S) -> Throttle<F, S>
where
    F: Fn(A) -> R,
    S: Scheduler,
{
    Throttle {
        function,
        wait,
        scheduler,
        cooling_down: Arc::new(AtomicBool::new(false)),
    }
}

impl<F, S: Scheduler> Throttle<F, S> {
    /// Runs the function unless a cooldown is in progress.
    ///
    /// Returns `None` for a dropped call.
    pub fn call<A, R>(&self, args: A) -> Option<R>
    where
        F: Fn(A) -> R,
    {
        if self
            .cooling_down
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::trace!("throttled call dropped");
            return None;
        }
        tracing::debug!(wait = ?self.wait, "throttled function running");
        let result = (self.function)(args);
        let cooling_down = Arc::clone(&self.cooling_down);
        self.scheduler.schedule(
            move || {
                cooling_down.store(false, Ordering::Release);
                tracing::debug!("throttle cooldown ended");
            },
            self.wait,
        );
        Some(result)
    }

    /// Returns `true` while calls are being dropped.
    pub fn is_cooling_down(&self) -> bool {
        self.cooling_down.load(Ordering::Acquire)
    }

    /// Returns the length of the cooldown.
    pub const fn wait(&self) -> Duration {
        self.wait
    }
}

impl<F, S> fmt::Debug for Throttle<F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Throttle")
            .field("wait", &self.wait)
            .field("cooling_down", &self.cooling_down.load(Ordering::Acquire))
            .finish_non_exhaustive()
    }
}
