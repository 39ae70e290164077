//! Name-or-function parameters.

use std::fmt;

/// Selects what an operation applies to each element: a named member, or a
/// function given directly.
///
/// [`invoke`](super::invoke) resolves `ByName` to a method through
/// [`Methods`](crate::typeclass::Methods); [`sort_by`](super::sort_by)
/// resolves it to a sort key through [`Fields`](crate::typeclass::Fields).
///
/// `F` is usually a `dyn Fn` type, so any closure reference can be passed
/// to `ByFunction`.
///
/// # Examples
///
/// ```rust
/// use eachfold::collection::{Selector, sort_by};
///
/// let mut words = vec![String::from("three"), String::from("one")];
/// sort_by(&mut words, Selector::ByName("length"));
/// assert_eq!(words, vec!["one", "three"]);
///
/// let mut numbers = vec![3, 1, 2];
/// let descending = |number: &i32| -f64::from(*number);
/// sort_by(&mut numbers, Selector::ByFunction(&descending));
/// assert_eq!(numbers, vec![3, 2, 1]);
/// ```
pub enum Selector<'s, F: ?Sized + 's> {
    /// A member looked up by name on every element.
    ByName(&'s str),
    /// A function applied to every element.
    ByFunction(&'s F),
}

impl<F: ?Sized> Clone for Selector<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: ?Sized> Copy for Selector<'_, F> {}

impl<F: ?Sized> fmt::Debug for Selector<'_, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByName(name) => formatter.debug_tuple("ByName").field(name).finish(),
            Self::ByFunction(_) => formatter.debug_tuple("ByFunction").field(&"<function>").finish(),
        }
    }
}
