//! Detection of the absence sentinel stored inside a collection.
//!
//! [`defaults`](crate::collection::defaults) fills a key when the target
//! either lacks it or holds an absent value there. Both cases look the same
//! to it.

/// A type class for values that may stand for "no value".
pub trait Undefined {
    /// Returns `true` if the value is the absence sentinel.
    fn is_undefined(&self) -> bool;
}

impl<T> Undefined for Option<T> {
    #[inline]
    fn is_undefined(&self) -> bool {
        self.is_none()
    }
}

macro_rules! impl_defined {
    ($($defined:ty),* $(,)?) => {
        $(
            impl Undefined for $defined {
                #[inline]
                fn is_undefined(&self) -> bool {
                    false
                }
            }
        )*
    };
}

impl_defined!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
    &str
);

impl<T> Undefined for Vec<T> {
    #[inline]
    fn is_undefined(&self) -> bool {
        false
    }
}
