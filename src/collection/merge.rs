//! Merging records into a target record.
//!
//! Both operations modify the target in place and return it.

use super::{Record, each};
use crate::typeclass::Undefined;

/// Copies every entry of every source into `target` and returns `target`.
///
/// Sources are applied in order, so a later source overrides an earlier one
/// and every source overrides keys already in `target`.
///
/// # Examples
///
/// ```rust
/// use eachfold::collection::extend;
/// use eachfold::record;
///
/// let mut target = record! { "x" => "x" };
/// extend(&mut target, &[&record! { "a" => "a", "x" => "2" }, &record! { "a" => "1" }]);
/// assert_eq!(target, record! { "x" => "2", "a" => "1" });
/// ```
pub fn extend<'t, V>(target: &'t mut Record<V>, sources: &[&Record<V>]) -> &'t mut Record<V>
where
    V: Clone,
{
    each(sources, |source, _, _| {
        each(*source, |value, key, _| {
            target.insert(key, value.clone());
        });
    });
    target
}

/// Fills the keys `target` lacks from the sources and returns `target`.
///
/// A key is copied only while `target` has no value for it, or holds an
/// [`Undefined`] one; the first source that provides the key wins. A key
/// explicitly holding an undefined value is treated as missing.
///
/// # Examples
///
/// ```rust
/// use eachfold::collection::defaults;
/// use eachfold::record;
///
/// let mut target = record! { "a" => Some(1), "b" => None };
/// defaults(&mut target, &[&record! { "a" => Some(10), "b" => Some(20) }, &record! { "c" => Some(3), "b" => Some(30) }]);
/// assert_eq!(target, record! { "a" => Some(1), "b" => Some(20), "c" => Some(3) });
/// ```
pub fn defaults<'t, V>(target: &'t mut Record<V>, sources: &[&Record<V>]) -> &'t mut Record<V>
where
    V: Clone + Undefined,
{
    each(sources, |source, _, _| {
        each(*source, |value, key, _| {
            if target.get(key).is_none_or(Undefined::is_undefined) {
                target.insert(key, value.clone());
            }
        });
    });
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;
    use crate::record;
    use rstest::rstest;

    // =========================================================================
    // extend
    // =========================================================================

    #[rstest]
    fn test_extend_returns_the_target() {
        let mut destination: Record<i32> = Record::new();
        let pointer: *const Record<i32> = &destination;
        let source = record! { "a" => 1 };

        let extended = extend(&mut destination, &[&source]);

        assert!(std::ptr::eq(extended, pointer));
    }

    #[rstest]
    fn test_extend_overrides_existing_keys() {
        let mut destination = record! { "a" => "x" };
        extend(&mut destination, &[&record! { "a" => "b" }]);
        assert_eq!(destination.get("a"), Some(&"b"));
    }

    #[rstest]
    fn test_extend_uses_last_source_on_conflict() {
        let mut destination = record! { "x" => Value::from("x") };
        extend(
            &mut destination,
            &[
                &record! { "a" => Value::from("a"), "x" => Value::from(2) },
                &record! { "a" => Value::from(1) },
            ],
        );

        assert_eq!(destination, record! { "x" => Value::from(2), "a" => Value::from(1) });
        assert_eq!(destination.keys(), vec!["x", "a"]);
    }

    #[rstest]
    fn test_extend_copies_undefined_values() {
        let mut destination = record! { "a" => Value::from(1) };
        extend(&mut destination, &[&record! { "a" => Value::Undefined }]);
        assert_eq!(destination.get("a"), Some(&Value::Undefined));
    }

    #[rstest]
    fn test_extend_leaves_sources_untouched() {
        let mut destination = record! { "a" => 1 };
        let source = record! { "b" => 2 };
        extend(&mut destination, &[&source]);
        assert_eq!(source, record! { "b" => 2 });
    }

    // =========================================================================
    // defaults
    // =========================================================================

    #[rstest]
    fn test_defaults_never_overwrites_defined_values() {
        let mut destination = record! { "zero" => Value::from(0), "empty" => Value::from(""), "nan" => Value::from(f64::NAN) };
        defaults(
            &mut destination,
            &[&record! { "zero" => Value::from(1), "empty" => Value::from("full"), "nan" => Value::from(1) }],
        );

        assert_eq!(destination.get("zero"), Some(&Value::from(0)));
        assert_eq!(destination.get("empty"), Some(&Value::from("")));
        assert!(matches!(destination.get("nan"), Some(Value::Number(number)) if number.is_nan()));
    }

    #[rstest]
    fn test_defaults_prefers_first_source() {
        let mut destination: Record<Value> = Record::new();
        defaults(
            &mut destination,
            &[&record! { "a" => Value::from(1) }, &record! { "a" => Value::from("one") }],
        );
        assert_eq!(destination.get("a"), Some(&Value::from(1)));
    }

    #[rstest]
    fn test_defaults_fills_keys_holding_undefined() {
        let mut destination = record! { "a" => Value::Undefined, "b" => Value::Null };
        defaults(
            &mut destination,
            &[&record! { "a" => Value::from(1), "b" => Value::from(2) }],
        );

        assert_eq!(destination.get("a"), Some(&Value::from(1)));
        assert_eq!(destination.get("b"), Some(&Value::Null));
    }

    #[rstest]
    fn test_defaults_with_plain_values_only_adds_missing_keys() {
        let mut destination = record! { "a" => 1 };
        defaults(&mut destination, &[&record! { "a" => 2, "b" => 3 }]);
        assert_eq!(destination, record! { "a" => 1, "b" => 3 });
    }
}
