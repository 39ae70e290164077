//! Operations over several sequences at once.

use std::fmt::Display;

use super::{Collection, contains, every, filter, fold, index_of, map, reject, uniq};
use crate::typeclass::{Nested, identity};

/// Groups the elements of every array by position.
///
/// Each row holds one entry per input array; there are as many rows as the
/// longest input has elements. Positions past the end of a shorter array
/// are `None`.
///
/// # Examples
///
/// ```rust
/// use eachfold::collection::zip;
///
/// let names = vec!["moe", "larry", "curly"];
/// let ranks = vec!["first", "second"];
/// assert_eq!(
///     zip(&[names, ranks]),
///     vec![
///         vec![Some("moe"), Some("first")],
///         vec![Some("larry"), Some("second")],
///         vec![Some("curly"), None],
///     ]
/// );
/// ```
pub fn zip<T, S>(arrays: &[S]) -> Vec<Vec<Option<T>>>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let longest = fold(arrays, 0, |longest, array| longest.max(array.as_ref().len()));
    let mut zipped = Vec::with_capacity(longest);
    let mut row = 0;
    while row < longest {
        zipped.push(map(arrays, |array, _, _| {
            array.as_ref().entry(row).map(|(_, value)| value.clone())
        }));
        row += 1;
    }
    zipped
}

/// Expands nested sequences, depth first and left to right, into one sequence.
///
/// Values without [`children`](Nested::children) are kept as they are.
///
/// # Examples
///
/// ```rust
/// use eachfold::collection::flatten;
/// use eachfold::Value;
///
/// let nested = vec![
///     Value::from(1),
///     Value::from(vec![Value::from(2)]),
///     Value::from(vec![Value::from(3), Value::from(vec![Value::from(vec![Value::from(4)])])]),
/// ];
/// assert_eq!(
///     flatten(&nested),
///     vec![Value::from(1), Value::from(2), Value::from(3), Value::from(4)]
/// );
/// ```
pub fn flatten<T>(nested: &[T]) -> Vec<T>
where
    T: Nested + Clone,
{
    fold(nested, Vec::new(), |mut flat, value| {
        match value.children() {
            Some(children) => flat.append(&mut flatten(children)),
            None => flat.push(value.clone()),
        }
        flat
    })
}

/// Returns the distinct elements of `first` found in every array of `rest`.
///
/// `first` is de-duplicated with [`uniq`]; membership in the other arrays is
/// tested by equality. The order follows the first occurrence in `first`.
///
/// # Examples
///
/// ```rust
/// use eachfold::collection::intersection;
///
/// let stooges = ["moe", "curly", "larry", "moe"];
/// let leaders = ["moe", "groucho"];
/// assert_eq!(intersection(&stooges, &[leaders]), vec!["moe"]);
/// ```
pub fn intersection<T, S>(first: &[T], rest: &[S]) -> Vec<T>
where
    T: Clone + PartialEq + Display,
    S: AsRef<[T]>,
{
    let unique = uniq(first, false, identity);
    filter(&unique, |value| {
        every(rest, |array| index_of(array.as_ref(), value).is_some())
    })
}

/// Returns the elements of `first` that appear in none of the arrays of `rest`.
///
/// The arrays of `rest` are concatenated and [`flatten`]ed, so values nested
/// at any depth inside them count as present. Each element of `first` is
/// tested against the result by equality. The order of `first` is kept.
///
/// # Examples
///
/// ```rust
/// use eachfold::collection::difference;
/// use eachfold::Value;
///
/// assert_eq!(difference(&[1, 2, 3, 4], &[vec![2, 30, 40], vec![1, 11, 111]]), vec![3, 4]);
///
/// let nested = vec![Value::from(vec![Value::from(1)])];
/// assert_eq!(difference(&[Value::from(1), Value::from(2)], &[nested]), vec![Value::from(2)]);
/// ```
pub fn difference<T, S>(first: &[T], rest: &[S]) -> Vec<T>
where
    T: Clone + PartialEq + Nested,
    S: AsRef<[T]>,
{
    let others = fold(rest, Vec::new(), |mut others, array| {
        others.append(&mut flatten(array.as_ref()));
        others
    });
    reject(first, |value| contains(&others, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;
    use rstest::rstest;

    #[rstest]
    fn test_zip_fills_missing_positions() {
        let letters = vec![Value::from("a"), Value::from("b"), Value::from("c"), Value::from("d")];
        let numbers = vec![Value::from(1), Value::from(2), Value::from(3)];

        let zipped = zip(&[letters, numbers]);

        assert_eq!(
            zipped,
            vec![
                vec![Some(Value::from("a")), Some(Value::from(1))],
                vec![Some(Value::from("b")), Some(Value::from(2))],
                vec![Some(Value::from("c")), Some(Value::from(3))],
                vec![Some(Value::from("d")), None],
            ]
        );
    }

    #[rstest]
    fn test_zip_three_arrays_of_different_lengths() {
        let names = vec![Value::from("moe"), Value::from("larry"), Value::from("curly")];
        let ages = vec![Value::from(30), Value::from(40), Value::from(50)];
        let leaders = vec![Value::from(true)];

        let zipped = zip(&[&names, &ages, &leaders]);

        assert_eq!(zipped.len(), 3);
        assert_eq!(zipped[0], vec![Some(Value::from("moe")), Some(Value::from(30)), Some(Value::from(true))]);
        assert_eq!(zipped[2], vec![Some(Value::from("curly")), Some(Value::from(50)), None]);
    }

    #[rstest]
    fn test_zip_of_nothing_is_empty() {
        let arrays: [Vec<i32>; 0] = [];
        assert!(zip(&arrays).is_empty());
        assert!(zip(&[Vec::<i32>::new()]).is_empty());
    }

    #[rstest]
    fn test_flatten_keeps_leaves_in_place() {
        let nested = vec![
            Value::from("a"),
            Value::from(Vec::<Value>::new()),
            Value::from(vec![Value::Null, Value::from(vec![Value::from(false)])]),
        ];

        assert_eq!(
            flatten(&nested),
            vec![Value::from("a"), Value::Null, Value::from(false)]
        );
    }

    #[rstest]
    fn test_intersection_of_two_arrays() {
        let stooges = ["moe", "curly", "larry"];
        let leaders = ["moe", "groucho"];
        assert_eq!(intersection(&stooges, &[leaders]), vec!["moe"]);
    }

    #[rstest]
    fn test_intersection_requires_presence_in_every_array() {
        let first = [1, 2, 3, 2];
        assert_eq!(intersection(&first, &[vec![2, 3], vec![3, 2, 9]]), vec![2, 3]);
        assert_eq!(intersection(&first, &[vec![2], vec![3]]), Vec::<i32>::new());
    }

    #[rstest]
    fn test_intersection_with_no_others_is_uniq() {
        let rest: [Vec<i32>; 0] = [];
        assert_eq!(intersection(&[1, 1, 2], &rest), vec![1, 2]);
    }

    #[rstest]
    #[case(vec![1, 2, 3], vec![vec![2, 30, 40]], vec![1, 3])]
    #[case(vec![1, 2, 3, 4], vec![vec![2, 30, 40], vec![1, 11, 111]], vec![3, 4])]
    #[case(vec![1, 1, 2], vec![], vec![1, 1, 2])]
    fn test_difference(#[case] first: Vec<i32>, #[case] rest: Vec<Vec<i32>>, #[case] expected: Vec<i32>) {
        assert_eq!(difference(&first, &rest), expected);
    }

    #[rstest]
    fn test_difference_looks_inside_nested_arrays() {
        let first = [Value::from(1), Value::from(2), Value::from(3)];
        let rest = [
            vec![Value::from(vec![Value::from(1)])],
            vec![Value::from(vec![Value::from(vec![Value::from(3)])])],
        ];

        assert_eq!(difference(&first, &rest), vec![Value::from(2)]);
    }
}
