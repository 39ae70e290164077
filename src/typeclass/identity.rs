//! The identity function, default predicate and transform of the library.

/// Returns the value unchanged.
///
/// Pass it where an operation wants a predicate or a transform and the
/// element itself should be used: `every(&flags, identity)` asks whether
/// every element is truthy, `uniq(&values, false, identity)` keys elements
/// by themselves.
///
/// # Type Parameters
///
/// * `T` - The type of the value to return
///
/// # Examples
///
/// ```rust
/// use eachfold::typeclass::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}
