//! Named field access.
//!
//! [`pluck`](crate::collection::pluck) and the
//! [`Selector::ByName`](crate::collection::Selector::ByName) form of
//! [`sort_by`](crate::collection::sort_by) look values up by name. `Fields`
//! is the capability they need from an element.
//!
//! Implementations exist for [`Record`](crate::collection::Record),
//! [`Value`](crate::Value), strings and vectors (`"length"`), and the
//! numeric primitives (no fields). Structs get it through
//! `#[derive(Fields)]` when the `derive` feature is enabled.
//!
//! # Examples
//!
//! ```rust
//! use eachfold::typeclass::Fields;
//!
//! assert_eq!("three".field("length"), Some(5));
//! assert_eq!(vec![1, 2].field("length"), Some(2));
//! assert_eq!(vec![1, 2].field("width"), None);
//! ```

use std::convert::Infallible;

/// A type class for values whose fields can be looked up by name.
pub trait Fields {
    /// The type of a looked-up field.
    type Field;

    /// Returns the field called `name`, or `None` if there is no such field.
    fn field(&self, name: &str) -> Option<Self::Field>;
}

impl<T: Fields + ?Sized> Fields for &T {
    type Field = T::Field;

    #[inline]
    fn field(&self, name: &str) -> Option<Self::Field> {
        (**self).field(name)
    }
}

macro_rules! impl_fields_for_primitive {
    ($($primitive:ty),* $(,)?) => {
        $(
            impl Fields for $primitive {
                type Field = Infallible;

                #[inline]
                fn field(&self, _name: &str) -> Option<Infallible> {
                    None
                }
            }
        )*
    };
}

impl_fields_for_primitive!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl Fields for str {
    type Field = usize;

    fn field(&self, name: &str) -> Option<usize> {
        // Length in UTF-16 code units.
        (name == "length").then(|| self.encode_utf16().count())
    }
}

impl Fields for String {
    type Field = usize;

    #[inline]
    fn field(&self, name: &str) -> Option<usize> {
        self.as_str().field(name)
    }
}

impl<T: Fields> Fields for Option<T> {
    type Field = T::Field;

    /// A missing value has no fields.
    #[inline]
    fn field(&self, name: &str) -> Option<T::Field> {
        self.as_ref().and_then(|value| value.field(name))
    }
}

impl<T> Fields for [T] {
    type Field = usize;

    fn field(&self, name: &str) -> Option<usize> {
        (name == "length").then_some(self.len())
    }
}

impl<T> Fields for Vec<T> {
    type Field = usize;

    #[inline]
    fn field(&self, name: &str) -> Option<usize> {
        self.as_slice().field(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_string_length_counts_utf16_units() {
        assert_eq!("abc".field("length"), Some(3));
        assert_eq!(String::from("é").field("length"), Some(1));
        assert_eq!("😀".field("length"), Some(2));
    }

    #[rstest]
    fn test_unknown_name_is_none() {
        assert_eq!("abc".field("size"), None);
        assert_eq!([1, 2, 3].as_slice().field("size"), None);
        assert!(7_i32.field("length").is_none());
    }

    #[rstest]
    fn test_option_forwards_to_its_value() {
        assert_eq!(Some("four").field("length"), Some(4));
        assert_eq!(None::<&str>.field("length"), None);
    }
}
