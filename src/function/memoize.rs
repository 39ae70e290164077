//! Cache results by serialized arguments.

use std::fmt;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::MemoizeError;
use crate::typeclass::Truthy;

/// A function whose results are cached per argument list.
///
/// The cache key is the JSON serialization of the arguments, so keys are
/// sensitive to order and to the type of each argument: `"1"` and `1` are
/// different keys, and so are one array argument and the same values passed
/// as separate arguments.
///
/// A cached result that is falsy is not trusted: the function runs again
/// and the new result replaces it. Results are judged by [`Truthy`]; tuples
/// always count as true, and a function returning `()` is never served from
/// the cache.
///
/// The cache lock is only held to read and write entries. Two threads
/// missing the same key at once may both run the function.
///
/// # Examples
///
/// ```rust
/// use eachfold::function::memoize;
///
/// fn fibonacci(n: u64) -> u64 {
///     if n < 2 { n } else { fibonacci(n - 1) + fibonacci(n - 2) }
/// }
///
/// let fast = memoize(fibonacci);
/// assert_eq!(fast.call(10).unwrap(), 55);
/// assert_eq!(fast.call(10).unwrap(), 55);
/// assert_eq!(fast.cached_len(), 1);
/// ```
pub struct Memoize<F, R> {
    function: F,
    cache: Mutex<FxHashMap<String, R>>,
}

/// Wraps `function` with a result cache.
pub fn memoize<F, A, R>(function: F) -> Memoize<F, R>
where
    F: Fn(A) -> R,
{
    Memoize {
        function,
        cache: Mutex::new(FxHashMap::default()),
    }
}

impl<F, R> Memoize<F, R> {
    /// Returns the cached result for `args`, computing it on a miss.
    ///
    /// # Errors
    ///
    /// Returns [`MemoizeError::Key`] when `args` cannot be serialized into a
    /// cache key. The function is not run in that case.
    pub fn call<A>(&self, args: A) -> Result<R, MemoizeError>
    where
        F: Fn(A) -> R,
        A: Serialize,
        R: Clone + Truthy,
    {
        let key = serde_json::to_string(&args)?;
        let cached = self.cache.lock().get(&key).cloned();
        if let Some(result) = cached.filter(Truthy::is_truthy) {
            tracing::trace!(%key, "memoized result reused");
            return Ok(result);
        }
        tracing::debug!(%key, "computing memoized result");
        let result = (self.function)(args);
        self.cache.lock().insert(key, result.clone());
        Ok(result)
    }

    /// Returns the number of cached entries.
    pub fn cached_len(&self) -> usize {
        self.cache.lock().len()
    }
}

impl<F, R> fmt::Debug for Memoize<F, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoize")
            .field("cached", &self.cached_len())
            .finish_non_exhaustive()
    }
}
