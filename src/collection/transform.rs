//! Transformation: filtering, mapping, de-duplication, invocation and sorting.
//!
//! Every operation here returns a new `Vec` and leaves its input untouched,
//! with one exception: [`sort_by`] sorts the vector it is given in place and
//! hands the same vector back.

use std::cmp::Ordering;
use std::fmt::Display;

use rustc_hash::FxHashSet;

use super::{Collection, Selector, each, fold};
use crate::InvocationError;
use crate::typeclass::{Fields, Methods, Numeric, Truthy};

/// Returns the elements for which `predicate` is truthy, in order.
///
/// # Examples
///
/// ```rust
/// use eachfold::collection::filter;
///
/// let evens = filter(&[1, 2, 3, 4, 5, 6], |number| number % 2 == 0);
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
pub fn filter<'a, C, P, R>(collection: &'a C, mut predicate: P) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    P: FnMut(&'a C::Value) -> R,
    R: Truthy,
{
    let mut filtered = Vec::new();
    each(collection, |value, _, _| {
        if predicate(value).is_truthy() {
            filtered.push(value.clone());
        }
    });
    filtered
}

/// Returns the elements for which `predicate` is falsy, in order.
///
/// # Examples
///
/// ```rust
/// use eachfold::collection::reject;
///
/// let odds = reject(&[1, 2, 3, 4, 5, 6], |number| number % 2 == 0);
/// assert_eq!(odds, vec![1, 3, 5]);
/// ```
pub fn reject<'a, C, P, R>(collection: &'a C, mut predicate: P) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    P: FnMut(&'a C::Value) -> R,
    R: Truthy,
{
    filter(collection, |value| !predicate(value).is_truthy())
}

/// Returns `iterator(value, key, collection)` for every element, in order.
///
/// # Examples
///
/// ```rust
/// use eachfold::collection::map;
/// use eachfold::record;
///
/// assert_eq!(map(&[1, 2, 3], |number, _, _| number * 2), vec![2, 4, 6]);
///
/// let labels = map(&record! { "a" => 1, "b" => 2 }, |value, key, _| format!("{key}={value}"));
/// assert_eq!(labels, vec!["a=1", "b=2"]);
/// ```
pub fn map<'a, C, R, F>(collection: &'a C, mut iterator: F) -> Vec<R>
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Value, C::Key<'a>, &'a C) -> R,
{
    let mut mapped = Vec::with_capacity(collection.size());
    each(collection, |value, key, collection| {
        mapped.push(iterator(value, key, collection));
    });
    mapped
}

/// Returns the field called `name` of every element, `None` where it is missing.
///
/// # Examples
///
/// ```rust
/// use eachfold::collection::pluck;
/// use eachfold::record;
///
/// let people = vec![
///     record! { "name" => "moe", "age" => "30" },
///     record! { "name" => "curly" },
/// ];
/// assert_eq!(pluck(&people, "name"), vec![Some("moe"), Some("curly")]);
/// assert_eq!(pluck(&people, "age"), vec![Some("30"), None]);
/// ```
pub fn pluck<'a, C>(collection: &'a C, name: &str) -> Vec<Option<<C::Value as Fields>::Field>>
where
    C: Collection + ?Sized,
    C::Value: Fields,
{
    map(collection, |value, _, _| value.field(name))
}

/// Returns the first element of every group of elements sharing a key.
///
/// The key of an element is the `Display` string of `transform(value)`; the
/// output keeps the order in which keys were first seen. `is_sorted` is
/// accepted for interface compatibility and does not change the algorithm.
///
/// Raw floats key by their own `Display`, which writes `-0.0` as `-0`, so
/// `0.0` and `-0.0` stay distinct. [`Value`](crate::Value) numbers display
/// both zeros as `0` and are merged; map floats into `Value` for that.
///
/// # Examples
///
/// ```rust
/// use eachfold::collection::uniq;
/// use eachfold::typeclass::identity;
///
/// assert_eq!(uniq(&[1, 2, 1, 3, 1, 4], false, identity), vec![1, 2, 3, 4]);
/// assert_eq!(uniq(&[1, 2, 2, 3, 4, 4], true, |value| *value == 1), vec![1, 2]);
/// ```
pub fn uniq<'a, C, K, F>(array: &'a C, _is_sorted: bool, mut transform: F) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    F: FnMut(&'a C::Value) -> K,
    K: Display,
{
    let mut seen = FxHashSet::default();
    fold(array, Vec::new(), |mut unique, value| {
        if seen.insert(transform(value).to_string()) {
            unique.push(value.clone());
        }
        unique
    })
}

/// Calls a method on every element with `args` and collects the results.
///
/// `Selector::ByName` resolves the method on each element through
/// [`Methods`]; `Selector::ByFunction` calls the given function with the
/// element as its receiver.
///
/// # Errors
///
/// Returns [`InvocationError::NotCallable`] for the first element on which
/// the name does not resolve. No later element is invoked.
///
/// # Examples
///
/// ```rust
/// use eachfold::collection::{Selector, invoke};
///
/// let words = vec![String::from("dog"), String::from("cat")];
///
/// let upper = invoke(&words, Selector::ByName("toUpperCase"), &[] as &[()]).unwrap();
/// assert_eq!(upper, vec!["DOG", "CAT"]);
///
/// let reverse = |word: &String, _: &[()]| word.chars().rev().collect::<String>();
/// let reversed = invoke(&words, Selector::ByFunction(&reverse), &[] as &[()]).unwrap();
/// assert_eq!(reversed, vec!["god", "tac"]);
///
/// assert!(invoke(&words, Selector::ByName("bark"), &[] as &[()]).is_err());
/// ```
pub fn invoke<'a, C, A, R>(
    collection: &'a C,
    selector: Selector<'_, dyn Fn(&C::Value, &[A]) -> R + '_>,
    args: &[A],
) -> Result<Vec<R>, InvocationError>
where
    C: Collection + ?Sized,
    C::Value: Methods<A, Output = R>,
{
    let mut position = 0;
    fold(
        collection,
        Ok(Vec::with_capacity(collection.size())),
        |invoked: Result<Vec<R>, InvocationError>, value| {
            let mut results = invoked?;
            let result = match selector {
                Selector::ByFunction(function) => function(value, args),
                Selector::ByName(name) => {
                    let Some(method) = Methods::<A>::method(value, name) else {
                        tracing::debug!(name, position, "named member is not callable");
                        return Err(InvocationError::NotCallable {
                            name: name.to_string(),
                            position,
                        });
                    };
                    method(value, args)
                }
            };
            results.push(result);
            position += 1;
            Ok(results)
        },
    )
}

/// Compares two sort keys by subtraction.
///
/// `NaN` keys compare equal to each other and after every number. Without
/// that the comparator is not a total order, and `slice::sort_by` may panic
/// on one.
fn compare_keys(left: f64, right: f64) -> Ordering {
    match (left.is_nan(), right.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => (left - right).partial_cmp(&0.0).unwrap_or(Ordering::Equal),
    }
}

/// Sorts `collection` in place by a numeric key and returns the same vector.
///
/// `Selector::ByName` reads the key through [`Fields`] and converts it with
/// [`Numeric`]; `Selector::ByFunction` computes it directly. The sort is
/// stable. Elements whose key is `NaN` (missing or non-numeric) keep their
/// relative order and end up after every element with a numeric key. This
/// keeps the comparison a total order: `slice::sort_by` may panic when
/// handed a comparator that is not one.
///
/// # Examples
///
/// ```rust
/// use eachfold::collection::{Selector, sort_by};
///
/// let mut list = vec![None, Some(4), Some(1), None, Some(3), Some(2)];
/// let key = |value: &Option<i32>| value.map_or(f64::NAN, f64::from);
/// let sorted = sort_by(&mut list, Selector::ByFunction(&key));
///
/// assert_eq!(*sorted, vec![Some(1), Some(2), Some(3), Some(4), None, None]);
/// ```
pub fn sort_by<'c, T>(
    collection: &'c mut Vec<T>,
    selector: Selector<'_, dyn Fn(&T) -> f64 + '_>,
) -> &'c mut Vec<T>
where
    T: Fields,
    T::Field: Numeric,
{
    let key = |value: &T| match selector {
        Selector::ByName(name) => value.field(name).map_or(f64::NAN, |field| field.to_number()),
        Selector::ByFunction(function) => function(value),
    };
    collection.sort_by(|left, right| compare_keys(key(left), key(right)));
    collection
}

/// Returns the first element, if any.
///
/// # Examples
///
/// ```rust
/// use eachfold::collection::first;
///
/// assert_eq!(first(&[1, 2, 3]), Some(1));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
pub fn first<T: Clone>(array: &[T]) -> Option<T> {
    array.entry(0).map(|(_, value)| value.clone())
}

/// Returns the first `n` elements; all of them when `n` exceeds the length.
///
/// # Examples
///
/// ```rust
/// use eachfold::collection::first_n;
///
/// assert_eq!(first_n(&[1, 2, 3], 2), vec![1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 0), Vec::<i32>::new());
/// assert_eq!(first_n(&[1, 2, 3], 5), vec![1, 2, 3]);
/// ```
pub fn first_n<T: Clone>(array: &[T], n: usize) -> Vec<T> {
    let mut taken = Vec::with_capacity(n.min(array.len()));
    each(array, |value, index, _| {
        if index < n {
            taken.push(value.clone());
        }
    });
    taken
}

/// Returns the last element, if any.
///
/// # Examples
///
/// ```rust
/// use eachfold::collection::last;
///
/// assert_eq!(last(&[1, 2, 3]), Some(3));
/// ```
pub fn last<T: Clone>(array: &[T]) -> Option<T> {
    array
        .len()
        .checked_sub(1)
        .and_then(|position| array.entry(position))
        .map(|(_, value)| value.clone())
}

/// Returns the last `n` elements; all of them when `n` exceeds the length.
///
/// # Examples
///
/// ```rust
/// use eachfold::collection::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3], 2), vec![2, 3]);
/// assert_eq!(last_n(&[1, 2, 3], 0), Vec::<i32>::new());
/// assert_eq!(last_n(&[1, 2, 3], 5), vec![1, 2, 3]);
/// ```
pub fn last_n<T: Clone>(array: &[T], n: usize) -> Vec<T> {
    let start = array.len().saturating_sub(n);
    let mut taken = Vec::with_capacity(array.len() - start);
    each(array, |value, index, _| {
        if index >= start {
            taken.push(value.clone());
        }
    });
    taken
}
