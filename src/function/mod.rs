//! Function decorators.
//!
//! Each decorator wraps a function in a struct that owns the state the
//! wrapper needs between calls:
//!
//! - [`once`]: run at most once, then replay the result
//! - [`memoize`]: cache results by serialized arguments
//! - [`delay`]: run once after a wait, via a [`Scheduler`](crate::scheduler::Scheduler)
//! - [`throttle`]: run at most once per wait window
//!
//! [`shuffle`] and [`shuffle_with`] live here as well: they wrap an array
//! rather than a function, but like the decorators they are built on the
//! collection primitives and carry state (a random source) from outside.
//!
//! Arguments are passed as a single value. Functions of several arguments
//! take a tuple, which is also what [`Memoize`] serializes into its key.

mod delay;
mod memoize;
mod once;
mod shuffle;
mod throttle;

pub use delay::delay;
pub use memoize::{Memoize, memoize};
pub use once::{Once, once};
pub use shuffle::{shuffle, shuffle_with};
pub use throttle::{Throttle, throttle};
