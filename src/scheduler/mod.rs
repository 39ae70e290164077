//! Deferred execution of callbacks.
//!
//! [`delay`](crate::function::delay) and
//! [`throttle`](crate::function::throttle) never sleep themselves. They hand
//! a callback to a [`Scheduler`], which runs it once a wait has elapsed.
//!
//! - [`VirtualClock`]: a manually advanced clock for deterministic tests
//! - [`TokioScheduler`]: timers on a tokio runtime (feature `async`)

#[cfg(feature = "async")]
mod runtime;
mod virtual_clock;

use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "async")]
pub use runtime::TokioScheduler;
pub use virtual_clock::{TimerHandle, VirtualClock};

/// Runs callbacks after a delay.
///
/// `schedule` returns immediately; it never runs `callback` itself. Every
/// scheduled callback runs exactly once, and there is no cancellation.
///
/// # Examples
///
/// ```rust
/// use eachfold::scheduler::{Scheduler, VirtualClock};
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::time::Duration;
///
/// let clock = VirtualClock::new();
/// let fired = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&fired);
///
/// clock.schedule(move || flag.store(true, Ordering::SeqCst), Duration::from_millis(10));
/// assert!(!fired.load(Ordering::SeqCst));
///
/// clock.advance(Duration::from_millis(10));
/// assert!(fired.load(Ordering::SeqCst));
/// ```
pub trait Scheduler {
    /// What `schedule` hands back for the pending callback.
    type Handle;

    /// Arranges for `callback` to run once, no earlier than `delay` from now.
    fn schedule<F>(&self, callback: F, delay: Duration) -> Self::Handle
    where
        F: FnOnce() + Send + 'static;
}

impl<S: Scheduler + ?Sized> Scheduler for &S {
    type Handle = S::Handle;

    #[inline]
    fn schedule<F>(&self, callback: F, delay: Duration) -> Self::Handle
    where
        F: FnOnce() + Send + 'static,
    {
        (**self).schedule(callback, delay)
    }
}

impl<S: Scheduler + ?Sized> Scheduler for Arc<S> {
    type Handle = S::Handle;

    #[inline]
    fn schedule<F>(&self, callback: F, delay: Duration) -> Self::Handle
    where
        F: FnOnce() + Send + 'static,
    {
        (**self).schedule(callback, delay)
    }
}
