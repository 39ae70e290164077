//! Truthy type class - boolean coercion of predicate results.
//!
//! Predicates handed to [`filter`](crate::collection::filter),
//! [`every`](crate::collection::every) and friends may return any value that
//! can be judged true or false, not only `bool`.
//!
//! The falsy values are `false`, zero, `NaN`, the empty string, `None`,
//! [`Value::Undefined`](crate::Value::Undefined) and
//! [`Value::Null`](crate::Value::Null) and `()`, which stands for a function
//! that returns nothing. Everything else is truthy, including empty vectors,
//! records, tuples and `Result`s.
//!
//! # Examples
//!
//! ```rust
//! use eachfold::typeclass::Truthy;
//!
//! assert!(1_i32.is_truthy());
//! assert!(!0_u8.is_truthy());
//! assert!(!"".is_truthy());
//! assert!("text".is_truthy());
//! assert!(!f64::NAN.is_truthy());
//! assert!(!None::<i32>.is_truthy());
//! assert!(Vec::<i32>::new().is_truthy());
//! assert!((0, "").is_truthy());
//! assert!(!().is_truthy());
//! ```

/// A type class for values that coerce to a boolean.
pub trait Truthy {
    /// Returns `true` if the value counts as true in a boolean context.
    fn is_truthy(&self) -> bool;
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_truthy_for_float {
    ($($float:ty),* $(,)?) => {
        $(
            impl Truthy for $float {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0.0 && !self.is_nan()
                }
            }
        )*
    };
}

impl_truthy_for_float!(f32, f64);

impl Truthy for char {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T> Truthy for [T] {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T, const N: usize> Truthy for [T; N] {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for std::rc::Rc<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for std::sync::Arc<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T, E> Truthy for Result<T, E> {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool {
        false
    }
}

macro_rules! impl_truthy_for_tuple {
    ($(($($element:ident),+)),* $(,)?) => {
        $(
            impl<$($element),+> Truthy for ($($element,)+) {
                #[inline]
                fn is_truthy(&self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_truthy_for_tuple!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
    (A, B, C, D, E, F, G),
    (A, B, C, D, E, F, G, H),
    (A, B, C, D, E, F, G, H, I),
    (A, B, C, D, E, F, G, H, I, J),
    (A, B, C, D, E, F, G, H, I, J, K),
    (A, B, C, D, E, F, G, H, I, J, K, L),
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(-7, true)]
    fn test_integer_truthiness(#[case] value: i32, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[rstest]
    #[case(0.0, false)]
    #[case(-0.0, false)]
    #[case(f64::NAN, false)]
    #[case(0.5, true)]
    #[case(f64::INFINITY, true)]
    fn test_float_truthiness(#[case] value: f64, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[rstest]
    fn test_strings() {
        assert!(!"".is_truthy());
        assert!("0".is_truthy());
        assert!(String::from("x").is_truthy());
        assert!(!String::new().is_truthy());
    }

    #[rstest]
    fn test_option_defers_to_inner_value() {
        assert!(Some(3_i32).is_truthy());
        assert!(!Some(0_i32).is_truthy());
        assert!(!None::<bool>.is_truthy());
    }

    #[rstest]
    fn test_sequences_are_always_truthy() {
        let empty: Vec<i32> = Vec::new();
        assert!(empty.is_truthy());
        assert!(empty.as_slice().is_truthy());
    }

    #[rstest]
    fn test_tuples_are_truthy_whatever_they_hold() {
        assert!((0_i32,).is_truthy());
        assert!((0_i32, "").is_truthy());
        assert!((false, None::<i32>, 0.0_f64).is_truthy());
    }

    #[rstest]
    fn test_unit_is_falsy() {
        assert!(!().is_truthy());
    }

    #[rstest]
    fn test_wrappers() {
        assert!(!Box::new(0_i32).is_truthy());
        assert!(std::sync::Arc::new("x").is_truthy());
        assert!(Err::<i32, &str>("failure").is_truthy());
        assert!(Ok::<i32, ()>(0).is_truthy());
        assert!([0_i32; 0].is_truthy());
    }

    #[rstest]
    fn test_references_delegate() {
        let value = 0;
        let reference = &value;
        assert!(!reference.is_truthy());
        assert!(!(&reference).is_truthy());
    }
}
