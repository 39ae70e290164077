//! Type classes giving typed values the capabilities collection operations need.
//!
//! The operations of [`collection`](crate::collection) are generic. Instead
//! of inspecting values at runtime, they ask for small capabilities:
//!
//! - [`Truthy`]: Boolean reading of predicate results
//! - [`Numeric`]: Numeric reading of sort keys
//! - [`Fields`]: Field lookup by name (`pluck`, `sort_by`)
//! - [`Methods`]: Method lookup by name (`invoke`)
//! - [`Undefined`]: Recognising the absence sentinel (`defaults`)
//! - [`Nested`]: Exposing inner sequences (`flatten`)
//!
//! [`identity`] is the default predicate and transform.
//!
//! [`Value`](crate::Value) implements every one of them, so heterogeneous
//! data can flow through any operation.
//!
//! # Examples
//!
//! ```rust
//! use eachfold::typeclass::{Fields, Numeric, Truthy};
//!
//! assert!(!0_i32.is_truthy());
//! assert_eq!("7".to_number(), 7.0);
//! assert_eq!("seven".field("length"), Some(5));
//! ```

mod fields;
mod identity;
mod methods;
mod nested;
mod numeric;
mod truthy;
mod undefined;

pub use fields::Fields;
pub use identity::identity;
pub use methods::{Method, Methods};
pub use nested::Nested;
pub use numeric::Numeric;
pub use truthy::Truthy;
pub use undefined::Undefined;

#[cfg(feature = "derive")]
pub use eachfold_derive::Fields;
