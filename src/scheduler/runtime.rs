//! Timers backed by a tokio runtime.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use super::Scheduler;
use crate::SchedulerError;

/// A [`Scheduler`] that spawns a sleeping task per callback.
///
/// The callback runs on the runtime once `tokio::time::sleep` completes, so
/// a paused test runtime (`start_paused = true`) drives it deterministically.
///
/// # Examples
///
/// ```rust
/// use eachfold::scheduler::{Scheduler, TokioScheduler};
/// use std::time::Duration;
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let scheduler = TokioScheduler::current().unwrap();
/// let handle = scheduler.schedule(|| println!("later"), Duration::from_millis(1));
/// handle.await.unwrap();
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    /// Schedules onto the runtime behind `handle`.
    pub const fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Schedules onto the runtime the caller is running in.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::NoRuntime`] when called outside a tokio
    /// runtime.
    pub fn current() -> Result<Self, SchedulerError> {
        Ok(Self::new(Handle::try_current()?))
    }

    /// Returns the runtime handle timers are spawned on.
    pub const fn handle(&self) -> &Handle {
        &self.handle
    }
}

impl Scheduler for TokioScheduler {
    type Handle = JoinHandle<()>;

    fn schedule<F>(&self, callback: F, delay: Duration) -> JoinHandle<()>
    where
        F: FnOnce() + Send + 'static,
    {
        tracing::trace!(?delay, "tokio timer scheduled");
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::trace!(?delay, "tokio timer fired");
            callback();
        })
    }
}
