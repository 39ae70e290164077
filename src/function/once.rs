//! Run a function at most once.

use std::fmt;

use parking_lot::Mutex;

enum OnceState<F, R> {
    Pending(F),
    Running,
    Done(R),
}

/// A function that runs on its first call only.
///
/// The first [`call`](Self::call) runs the wrapped function with its
/// arguments and stores the result. Every later call returns a clone of
/// that result, whatever its arguments.
///
/// The lock is held while the function runs, so concurrent first calls
/// wait for the single execution and then see its result.
///
/// # Examples
///
/// ```rust
/// use eachfold::function::once;
///
/// let initialize = once(|seed: i32| seed * 10);
/// assert_eq!(initialize.call(4), 40);
/// assert_eq!(initialize.call(9), 40);
/// ```
pub struct Once<F, R> {
    state: Mutex<OnceState<F, R>>,
}

/// Wraps `function` so that it runs at most once.
pub const fn once<F, A, R>(function: F) -> Once<F, R>
where
    F: FnOnce(A) -> R,
{
    Once {
        state: Mutex::new(OnceState::Pending(function)),
    }
}

impl<F, R> Once<F, R> {
    /// Runs the function on the first call; returns the first result afterwards.
    ///
    /// # Panics
    ///
    /// Panics if the wrapped function panicked during the first call: the
    /// wrapper is poisoned and no result will ever exist. Calling the
    /// wrapper from inside the wrapped function deadlocks.
    pub fn call<A>(&self, args: A) -> R
    where
        F: FnOnce(A) -> R,
        R: Clone,
    {
        let mut state = self.state.lock();
        if let OnceState::Done(result) = &*state {
            return result.clone();
        }
        match std::mem::replace(&mut *state, OnceState::Running) {
            OnceState::Pending(function) => {
                tracing::debug!("running once-wrapped function");
                let result = function(args);
                *state = OnceState::Done(result.clone());
                result
            }
            OnceState::Running => panic!("Once: the wrapped function panicked on its first call"),
            OnceState::Done(_) => unreachable!("Done is returned before the state is taken"),
        }
    }

    /// Returns `true` once the function has run to completion.
    pub fn is_completed(&self) -> bool {
        matches!(*self.state.lock(), OnceState::Done(_))
    }

    /// Returns `true` if the function panicked during its run.
    pub fn is_poisoned(&self) -> bool {
        matches!(*self.state.lock(), OnceState::Running)
    }
}

impl<F, R: fmt::Debug> fmt::Debug for Once<F, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.lock() {
            OnceState::Pending(_) => formatter.write_str("Once(<pending>)"),
            OnceState::Running => formatter.write_str("Once(<poisoned>)"),
            OnceState::Done(result) => formatter.debug_tuple("Once").field(result).finish(),
        }
    }
}
