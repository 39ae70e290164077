//! Nested sequences, as seen by [`flatten`](crate::collection::flatten).

/// A type class for values that may themselves hold a sequence of values.
///
/// # Examples
///
/// ```rust
/// use eachfold::typeclass::Nested;
/// use eachfold::Value;
///
/// let nested = Value::from(vec![Value::from(1), Value::from(2)]);
/// assert_eq!(nested.children().map(<[Value]>::len), Some(2));
/// assert!(Value::from(1).children().is_none());
/// assert!(7_i32.children().is_none());
/// ```
pub trait Nested: Sized {
    /// Returns the inner sequence, or `None` for a leaf value.
    fn children(&self) -> Option<&[Self]>;
}

macro_rules! impl_nested_for_leaf {
    ($($leaf:ty),* $(,)?) => {
        $(
            impl Nested for $leaf {
                #[inline]
                fn children(&self) -> Option<&[Self]> {
                    None
                }
            }
        )*
    };
}

impl_nested_for_leaf!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
);

impl Nested for &str {
    #[inline]
    fn children(&self) -> Option<&[Self]> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_scalars_are_leaves() {
        assert!(1_u8.children().is_none());
        assert!(2.5_f64.children().is_none());
        assert!('x'.children().is_none());
        assert!("moe".children().is_none());
        assert!(String::from("moe").children().is_none());
    }
}
