//! Aggregation: folding, membership, quantification and search.
//!
//! Everything here is built on [`each`]. [`fold`] is the seeded left fold,
//! [`reduce`] its unseeded form; [`contains`], [`every`] and [`some`] are
//! folds. None of them stops the traversal early.

use super::{Collection, each};
use crate::typeclass::Truthy;

/// Returns the key of the first element equal to `target`, or `None`.
///
/// Every element is still visited after a match; only the first match is
/// recorded.
///
/// # Examples
///
/// ```rust
/// use eachfold::collection::index_of;
///
/// let numbers = [1, 2, 2, 2, 3];
/// assert_eq!(index_of(&numbers, &2), Some(1));
/// assert_eq!(index_of(&numbers, &9), None);
/// ```
pub fn index_of<'a, C>(array: &'a C, target: &C::Value) -> Option<C::Key<'a>>
where
    C: Collection + ?Sized,
    C::Value: PartialEq,
{
    let mut found = None;
    each(array, |value, key, _| {
        if found.is_none() && value == target {
            found = Some(key);
        }
    });
    found
}

/// Folds every element into `seed` from left to right.
///
/// `iterator(accumulator, value)` is applied to every element, the first
/// one included. The seed is used as given, even when it is falsy.
///
/// # Examples
///
/// ```rust
/// use eachfold::collection::fold;
///
/// assert_eq!(fold(&[1, 2, 3], 0, |total, number| total + number), 6);
/// assert_eq!(fold(&[1, 2, 3], String::new(), |text, digit| text + &digit.to_string()), "123");
/// ```
pub fn fold<'a, C, A, F>(collection: &'a C, seed: A, mut iterator: F) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &'a C::Value) -> A,
{
    let mut accumulator = Some(seed);
    each(collection, |value, _, _| {
        accumulator = accumulator.take().map(|current| iterator(current, value));
    });
    // Every visit puts the accumulator back.
    accumulator.unwrap_or_else(|| unreachable!("fold accumulator is refilled on every visit"))
}

/// Folds a collection without a seed.
///
/// The first element becomes the accumulator and is never passed to
/// `iterator`; folding starts with the second element. An empty collection
/// yields `None` without calling `iterator`.
///
/// # Examples
///
/// ```rust
/// use eachfold::collection::reduce;
///
/// // The first element is the seed, the iterator is never called.
/// assert_eq!(reduce(&[5], |total, number| total + number * number), Some(5));
/// assert_eq!(reduce(&[3, 2, 1], |memo, item| memo - item), Some(0));
/// assert_eq!(reduce(&Vec::<i32>::new(), |memo, item| memo + item), None);
/// ```
pub fn reduce<'a, C, F>(collection: &'a C, mut iterator: F) -> Option<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    F: FnMut(C::Value, &'a C::Value) -> C::Value,
{
    fold(collection, None, |accumulator, value| match accumulator {
        None => Some(value.clone()),
        Some(current) => Some(iterator(current, value)),
    })
}

/// Returns `true` if any element equals `target`.
///
/// # Examples
///
/// ```rust
/// use eachfold::collection::contains;
/// use eachfold::record;
///
/// assert!(contains(&[4, 5, 6], &5));
/// assert!(!contains(&record! { "moe" => 1 }, &2));
/// ```
pub fn contains<C>(collection: &C, target: &C::Value) -> bool
where
    C: Collection + ?Sized,
    C::Value: PartialEq,
{
    fold(collection, false, |found, value| found || value == target)
}

/// Returns `true` if `predicate` is truthy for every element.
///
/// Vacuously `true` for an empty collection. Once an element fails, the
/// predicate is not called for the remaining ones. Use
/// [`identity`](crate::typeclass::identity) to test the elements themselves.
///
/// # Examples
///
/// ```rust
/// use eachfold::collection::every;
/// use eachfold::typeclass::identity;
///
/// assert!(every(&[2, 4, 6], |number| number % 2 == 0));
/// assert!(!every(&[true, false], identity));
/// assert!(every(&Vec::<i32>::new(), |_| false));
/// ```
pub fn every<'a, C, P, R>(collection: &'a C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&'a C::Value) -> R,
    R: Truthy,
{
    fold(collection, true, |passed, value| {
        passed && predicate(value).is_truthy()
    })
}

/// Returns `true` if `predicate` is truthy for at least one element.
///
/// Defined as `!every(collection, |value| !predicate(value))`; vacuously
/// `false` for an empty collection.
///
/// # Examples
///
/// ```rust
/// use eachfold::collection::some;
/// use eachfold::typeclass::identity;
///
/// assert!(some(&[1, 3, 4], |number| number % 2 == 0));
/// assert!(!some(&[0, 0], identity));
/// assert!(!some(&Vec::<i32>::new(), |_| true));
/// ```
pub fn some<'a, C, P, R>(collection: &'a C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&'a C::Value) -> R,
    R: Truthy,
{
    !every(collection, |value| !predicate(value).is_truthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;
    use crate::typeclass::identity;
    use rstest::rstest;

    #[rstest]
    fn test_index_of_keeps_first_match() {
        assert_eq!(index_of(&[1, 2, 2, 2, 3], &2), Some(1));
        assert_eq!(index_of(&vec!["a"], &"b"), None);
    }

    #[rstest]
    fn test_index_of_visits_every_element() {
        let values = vec![1.0, f64::NAN, 1.0];
        // NaN never equals itself.
        assert_eq!(index_of(&values, &f64::NAN), None);
        assert_eq!(index_of(&values, &1.0), Some(0));
    }

    #[rstest]
    fn test_index_of_on_record_returns_key() {
        let ages = record! { "moe" => 30, "curly" => 50 };
        assert_eq!(index_of(&ages, &50), Some("curly"));
    }

    #[rstest]
    fn test_fold_calls_iterator_in_order() {
        let mut calls = Vec::new();
        let result = fold(&["a", "b", "c"], String::from("seed"), |memo, item| {
            calls.push((memo.clone(), *item));
            memo + item
        });

        assert_eq!(result, "seedabc");
        assert_eq!(
            calls,
            vec![
                ("seed".to_string(), "a"),
                ("seeda".to_string(), "b"),
                ("seedab".to_string(), "c")
            ]
        );
    }

    #[rstest]
    fn test_fold_honors_falsy_seed() {
        assert_eq!(fold(&[1, 2], 0, |memo, item| memo * item), 0);
        assert_eq!(fold(&["x"], String::new(), |memo, item| memo + item), "x");
    }

    #[rstest]
    fn test_reduce_without_seed_skips_first_element() {
        let mut calls = 0;
        let result = reduce(&[5], |total, number| {
            calls += 1;
            total + number * number
        });

        assert_eq!(result, Some(5));
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn test_reduce_passes_second_item_first() {
        assert_eq!(reduce(&[3, 2, 1], |memo, item| memo - item), Some(0));
        assert_eq!(reduce(&[1, 2, 3], |memo, _| memo), Some(1));
    }

    #[rstest]
    fn test_reduce_on_empty_is_none() {
        let empty: Vec<i32> = Vec::new();
        let mut called = false;

        assert_eq!(
            reduce(&empty, |memo, _| {
                called = true;
                memo
            }),
            None
        );
        assert!(!called);
    }

    #[rstest]
    fn test_reduce_over_record_values() {
        let scores = record! { "a" => 2, "b" => 3, "c" => 4 };
        assert_eq!(reduce(&scores, |total, score| total * score), Some(24));
    }

    #[rstest]
    #[case(vec![1, 2, 3], 3, true)]
    #[case(vec![1, 2, 3], 4, false)]
    #[case(vec![], 0, false)]
    fn test_contains(#[case] values: Vec<i32>, #[case] target: i32, #[case] expected: bool) {
        assert_eq!(contains(&values, &target), expected);
    }

    #[rstest]
    fn test_every_stops_calling_predicate_after_failure() {
        let mut calls = 0;
        let result = every(&[1, 2, 3, 4], |number| {
            calls += 1;
            *number < 2
        });

        assert!(!result);
        assert_eq!(calls, 2);
    }

    #[rstest]
    fn test_every_with_identity_and_truthy_results() {
        assert!(every(&[1, 2, 3], identity));
        assert!(!every(&[1, 0, 3], identity));
        assert!(every(&["a", "b"], |word| word.len()));
    }

    #[rstest]
    fn test_some_and_every_on_empty() {
        let empty: [i32; 0] = [];
        assert!(every(&empty, |_| false));
        assert!(!some(&empty, |_| true));
    }

    #[rstest]
    fn test_some_with_mixed_values() {
        assert!(some(&[0, 0, 7], identity));
        assert!(!some(&["", ""], identity));
        assert!(some(&record! { "flag" => true }, identity));
    }
}
