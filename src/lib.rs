//! # eachfold
//!
//! A functional collection library in which every operation is derived from
//! two primitives: a visitor ([`each`](collection::each)) and a left fold
//! ([`fold`](collection::fold)).
//!
//! ## Overview
//!
//! - **Collection operations**: `filter`, `map`, `uniq`, `invoke`, `sort_by`,
//!   `zip`, `flatten`, `intersection`, `difference`, `extend`, `defaults`
//!   and friends, over sequences and insertion-ordered [`Record`]s
//! - **Function decorators**: `once`, `memoize`, `delay`, `throttle`
//! - **Shuffling**: unbiased Fisher–Yates over a copy
//! - **Type classes**: the small capabilities (truthiness, numeric reading,
//!   field and method lookup) operations ask of their elements
//! - **[`Value`]**: a dynamic value for heterogeneous data
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits
//! - `collection`: `each`, `fold`, `Record`, `Value` and every collection operation
//! - `function`: Function decorators, shuffling and schedulers
//! - `derive`: `#[derive(Fields)]`
//! - `async`: `TokioScheduler`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use eachfold::prelude::*;
//!
//! let numbers = vec![1, 2, 3, 4, 5, 6];
//! let evens = filter(&numbers, |n| *n % 2 == 0);
//! let total = fold(&evens, 0, |sum, n| sum + n);
//! assert_eq!(total, 12);
//!
//! let mut stooges = vec![
//!     record! { "name" => Value::from("moe"), "age" => Value::from(40) },
//!     record! { "name" => Value::from("curly"), "age" => Value::from(60) },
//!     record! { "name" => Value::from("larry"), "age" => Value::from(50) },
//! ];
//! sort_by(&mut stooges, Selector::ByName("age"));
//! assert_eq!(pluck(&stooges, "name")[2], Some(Value::from("curly")));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use eachfold::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "collection")]
    pub use crate::{Value, record};

    #[cfg(feature = "function")]
    pub use crate::function::*;

    #[cfg(feature = "function")]
    pub use crate::scheduler::*;

    pub use crate::InvocationError;

    #[cfg(feature = "function")]
    pub use crate::MemoizeError;

    #[cfg(feature = "async")]
    pub use crate::SchedulerError;
}

mod error;

pub use error::InvocationError;
#[cfg(feature = "function")]
pub use error::MemoizeError;
#[cfg(feature = "async")]
pub use error::SchedulerError;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "collection")]
mod value;

#[cfg(feature = "collection")]
pub use value::Value;

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "function")]
pub mod scheduler;
