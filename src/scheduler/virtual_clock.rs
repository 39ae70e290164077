//! A deterministic clock that only moves when told to.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use super::Scheduler;

type Callback = Box<dyn FnOnce() + Send>;

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    /// Keyed by due time, then scheduling order.
    timers: BTreeMap<(Duration, u64), Callback>,
}

/// Identifies a timer scheduled on a [`VirtualClock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    id: u64,
    due: Duration,
}

impl TimerHandle {
    /// The scheduling sequence number, unique per clock.
    #[inline]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// The virtual time at which the timer fires.
    #[inline]
    pub const fn due(&self) -> Duration {
        self.due
    }
}

/// A manually advanced clock implementing [`Scheduler`].
///
/// Time starts at zero and moves only through [`advance`](Self::advance)
/// and [`run_pending`](Self::run_pending). Clones share the same clock, so
/// one clone can be handed to a throttled function while the test drives
/// another.
///
/// Timers due at the same instant fire in the order they were scheduled.
///
/// # Examples
///
/// ```rust
/// use eachfold::scheduler::{Scheduler, VirtualClock};
/// use std::sync::Arc;
/// use parking_lot::Mutex;
/// use std::time::Duration;
///
/// let clock = VirtualClock::new();
/// let log = Arc::new(Mutex::new(Vec::new()));
///
/// for (label, wait) in [("late", 20), ("early", 10)] {
///     let log = Arc::clone(&log);
///     clock.schedule(move || log.lock().push(label), Duration::from_millis(wait));
/// }
///
/// clock.run_pending();
/// assert_eq!(*log.lock(), vec!["early", "late"]);
/// assert_eq!(clock.now(), Duration::from_millis(20));
/// ```
#[derive(Clone, Default)]
pub struct VirtualClock {
    state: Arc<Mutex<ClockState>>,
}

impl VirtualClock {
    /// Creates a clock at time zero with no timers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current virtual time.
    pub fn now(&self) -> Duration {
        self.state.lock().now
    }

    /// Returns the number of timers that have not fired yet.
    pub fn pending(&self) -> usize {
        self.state.lock().timers.len()
    }

    /// Moves the clock forward by `by`, firing every timer due on the way.
    ///
    /// Callbacks run without the clock locked and observe [`now`](Self::now)
    /// at their own due time; timers they schedule fire within the same call
    /// when due before the target. Returns the number of callbacks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut fired = 0;
        loop {
            let (handle, callback) = {
                let mut state = self.state.lock();
                if state
                    .timers
                    .first_key_value()
                    .is_none_or(|(&(due, _), _)| due > target)
                {
                    break;
                }
                let Some(((due, id), callback)) = state.timers.pop_first() else {
                    break;
                };
                state.now = due;
                (TimerHandle { id, due }, callback)
            };
            tracing::trace!(id = handle.id, due = ?handle.due, "virtual timer fired");
            callback();
            fired += 1;
        }
        self.state.lock().now = target;
        fired
    }

    /// Advances until no timer is left, including timers scheduled while
    /// advancing. Returns the number of callbacks run.
    pub fn run_pending(&self) -> usize {
        let mut fired = 0;
        loop {
            let remaining = {
                let state = self.state.lock();
                state
                    .timers
                    .last_key_value()
                    .map(|(&(due, _), _)| due.saturating_sub(state.now))
            };
            let Some(remaining) = remaining else {
                return fired;
            };
            fired += self.advance(remaining);
        }
    }
}

impl Scheduler for VirtualClock {
    type Handle = TimerHandle;

    fn schedule<F>(&self, callback: F, delay: Duration) -> TimerHandle
    where
        F: FnOnce() + Send + 'static,
    {
        let mut state = self.state.lock();
        let handle = TimerHandle {
            id: state.next_id,
            due: state.now + delay,
        };
        state.next_id += 1;
        state
            .timers
            .insert((handle.due, handle.id), Box::new(callback));
        tracing::trace!(id = handle.id, ?delay, "virtual timer scheduled");
        handle
    }
}

impl fmt::Debug for VirtualClock {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        formatter
            .debug_struct("VirtualClock")
            .field("now", &state.now)
            .field("pending", &state.timers.len())
            .finish()
    }
}
