//! Derive macros for eachfold.
//!
//! This crate provides procedural macros that give plain Rust structs the
//! named field access the eachfold collection operations rely on
//! (`pluck` and `sort_by` with a field name).
//!
//! # Available Derive Macros
//!
//! - [`Fields`]: Implements `eachfold::typeclass::Fields` for named structs
//!
//! # Example
//!
//! ```rust,ignore
//! use eachfold::collection::pluck;
//! use eachfold::typeclass::Fields;
//! use eachfold::Value;
//!
//! #[derive(Clone, Fields)]
//! struct Stooge {
//!     name: String,
//!     age: u32,
//! }
//!
//! let stooges = vec![
//!     Stooge { name: "moe".to_string(), age: 30 },
//!     Stooge { name: "curly".to_string(), age: 50 },
//! ];
//! assert_eq!(
//!     pluck(&stooges, "name"),
//!     vec![Some(Value::from("moe")), Some(Value::from("curly"))]
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod fields;

use proc_macro::TokenStream;

/// Derive macro implementing `eachfold::typeclass::Fields` for a struct.
///
/// Every named field becomes reachable by its name; the field value is
/// cloned and converted into `eachfold::Value`.
///
/// # Requirements
///
/// - The struct must have named fields (not a tuple or unit struct)
/// - Every exposed field type must implement `Clone` and `Into<eachfold::Value>`
///
/// # Attributes
///
/// - `#[fields(rename = "otherName")]`: expose the field under another name
/// - `#[fields(skip)]`: do not expose the field at all
///
/// # Generated Code
///
/// ```rust,ignore
/// impl eachfold::typeclass::Fields for StructName {
///     type Field = eachfold::Value;
///
///     fn field(&self, name: &str) -> Option<eachfold::Value> {
///         match name {
///             "foo" => Some(self.foo.clone().into()),
///             _ => None,
///         }
///     }
/// }
/// ```
#[proc_macro_derive(Fields, attributes(fields))]
pub fn derive_fields(input: TokenStream) -> TokenStream {
    fields::derive_fields_impl(input)
}
