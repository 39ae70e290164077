//! Error types.
//!
//! Collection operations are total: missing entries come back as `None`.
//! The errors here cover the few places where a caller-supplied input can
//! not be used.

use thiserror::Error;

/// An element could not be called with the requested method.
///
/// # Examples
///
/// ```rust
/// use eachfold::collection::{Selector, invoke};
/// use eachfold::InvocationError;
///
/// let words = vec!["a".to_string()];
/// let error = invoke(&words, Selector::ByName("explode"), &[] as &[()]).unwrap_err();
/// assert_eq!(
///     error,
///     InvocationError::NotCallable { name: "explode".to_string(), position: 0 }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvocationError {
    /// The named method does not exist on the element at `position`.
    #[error("element at position {position} has no method named `{name}`")]
    NotCallable {
        /// The method name that failed to resolve.
        name: String,
        /// The position of the element in the collection.
        position: usize,
    },
}

/// A memoized function could not derive a cache key from its arguments.
#[cfg(feature = "function")]
#[derive(Debug, Error)]
pub enum MemoizeError {
    /// The arguments failed to serialize.
    #[error("failed to build memoization key: {0}")]
    Key(#[from] serde_json::Error),
}

/// A scheduler could not be created.
#[cfg(feature = "async")]
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// No tokio runtime is running on the current thread.
    #[error("no tokio runtime available: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}
