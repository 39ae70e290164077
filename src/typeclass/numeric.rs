//! Numeric coercion used by key-based sorting.
//!
//! [`sort_by`](crate::collection::sort_by) compares keys by subtracting
//! them, so every key is first converted into an `f64`. A key that has no
//! sensible numeric reading converts to `NaN`.
//!
//! # Examples
//!
//! ```rust
//! use eachfold::typeclass::Numeric;
//!
//! assert_eq!(42_u8.to_number(), 42.0);
//! assert_eq!(true.to_number(), 1.0);
//! assert_eq!(" 2.5 ".to_number(), 2.5);
//! assert_eq!("".to_number(), 0.0);
//! assert!("abc".to_number().is_nan());
//! assert!(None::<i32>.to_number().is_nan());
//! ```

/// A type class for values with a numeric reading.
pub trait Numeric {
    /// Converts the value into an `f64`, or `NaN` when it has no numeric reading.
    fn to_number(&self) -> f64;
}

impl<T: Numeric + ?Sized> Numeric for &T {
    #[inline]
    fn to_number(&self) -> f64 {
        (**self).to_number()
    }
}

macro_rules! impl_numeric_for_primitive {
    ($($primitive:ty),* $(,)?) => {
        $(
            impl Numeric for $primitive {
                #[inline]
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_number(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_numeric_for_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Numeric for bool {
    #[inline]
    fn to_number(&self) -> f64 {
        if *self { 1.0 } else { 0.0 }
    }
}

impl Numeric for str {
    fn to_number(&self) -> f64 {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            return 0.0;
        }
        trimmed.parse().unwrap_or(f64::NAN)
    }
}

impl Numeric for String {
    #[inline]
    fn to_number(&self) -> f64 {
        self.as_str().to_number()
    }
}

impl Numeric for std::convert::Infallible {
    fn to_number(&self) -> f64 {
        match *self {}
    }
}

impl<T: Numeric> Numeric for Option<T> {
    #[inline]
    fn to_number(&self) -> f64 {
        self.as_ref().map_or(f64::NAN, Numeric::to_number)
    }
}
