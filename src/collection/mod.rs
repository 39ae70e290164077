//! Collection operations derived from one visitor and one fold.
//!
//! [`each`] is the only function that steps through a [`Collection`].
//! [`fold`] and [`reduce`] are built on it, and every other operation is a
//! composition of the two:
//!
//! - **Aggregation**: [`index_of`], [`fold`], [`reduce`], [`contains`],
//!   [`every`], [`some`]
//! - **Transformation**: [`filter`], [`reject`], [`map`], [`pluck`],
//!   [`uniq`], [`invoke`], [`sort_by`], [`first`], [`first_n`], [`last`],
//!   [`last_n`]
//! - **Multiple sequences**: [`zip`], [`flatten`], [`intersection`],
//!   [`difference`]
//! - **Records**: [`extend`], [`defaults`]
//!
//! A collection is either an ordered sequence (`[T]`, `[T; N]`, `Vec<T>`),
//! keyed by index, or a [`Record`], keyed by string in insertion order.
//!
//! Only [`sort_by`], [`extend`] and [`defaults`] modify their input; every
//! other operation borrows it immutably and builds a new `Vec`.
//!
//! # Examples
//!
//! ```rust
//! use eachfold::collection::{filter, map, reduce};
//!
//! let numbers = vec![1, 2, 3, 4];
//! let doubled_evens = map(&filter(&numbers, |n| n % 2 == 0), |n, _, _| n * 2);
//! assert_eq!(doubled_evens, vec![4, 8]);
//! assert_eq!(reduce(&doubled_evens, |total, n| total + n), Some(12));
//! ```

mod aggregate;
mod each;
mod merge;
mod multi;
mod record;
mod selector;
mod transform;

pub use aggregate::{contains, every, fold, index_of, reduce, some};
pub use each::{Collection, each};
pub use merge::{defaults, extend};
pub use multi::{difference, flatten, intersection, zip};
pub use record::Record;
pub use selector::Selector;
pub use transform::{filter, first, first_n, invoke, last, last_n, map, pluck, reject, sort_by, uniq};
