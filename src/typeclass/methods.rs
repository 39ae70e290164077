//! Named method lookup.
//!
//! [`invoke`](crate::collection::invoke) with a
//! [`Selector::ByName`](crate::collection::Selector::ByName) resolves a
//! method on every element by name and calls it with the element as its
//! receiver. `Methods` is the capability that resolution needs.
//!
//! A method is a plain function pointer taking the receiver and the shared
//! argument list. A name that does not resolve yields `None`, which
//! `invoke` reports as an [`InvocationError`](crate::InvocationError).
//!
//! # Examples
//!
//! ```rust
//! use eachfold::typeclass::Methods;
//!
//! let word = String::from("dog");
//! let upper = <String as Methods<()>>::method(&word, "toUpperCase").unwrap();
//! assert_eq!(upper(&word, &[]), "DOG");
//! assert!(<String as Methods<()>>::method(&word, "bark").is_none());
//! ```

/// A method resolved by name: receiver plus argument list.
pub type Method<T, A, R> = fn(&T, &[A]) -> R;

/// A type class for values exposing methods by name.
///
/// # Type Parameters
///
/// * `A` - The argument type every method of this receiver accepts
pub trait Methods<A>: Sized {
    /// The result type of every method.
    type Output;

    /// Resolves the method called `name` for this receiver.
    fn method(&self, name: &str) -> Option<Method<Self, A, Self::Output>>;
}

impl<A> Methods<A> for String {
    type Output = Self;

    fn method(&self, name: &str) -> Option<Method<Self, A, Self>> {
        let method: Method<Self, A, Self> = match name {
            "toString" => |receiver, _| receiver.clone(),
            "toUpperCase" => |receiver, _| receiver.to_uppercase(),
            "toLowerCase" => |receiver, _| receiver.to_lowercase(),
            "trim" => |receiver, _| receiver.trim().to_string(),
            _ => return None,
        };
        Some(method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("toString", " Mixed ")]
    #[case("toUpperCase", " MIXED ")]
    #[case("toLowerCase", " mixed ")]
    #[case("trim", "Mixed")]
    fn test_string_methods(#[case] name: &str, #[case] expected: &str) {
        let receiver = String::from(" Mixed ");
        let method = Methods::<i32>::method(&receiver, name).unwrap();
        assert_eq!(method(&receiver, &[]), expected);
    }

    #[rstest]
    fn test_unknown_method() {
        let receiver = String::from("x");
        assert!(Methods::<i32>::method(&receiver, "reverse").is_none());
    }
}
