//! The iteration primitive.
//!
//! [`each`] is the only place in the library that steps through a
//! collection. Every other collection operation is a composition of `each`
//! or of [`fold`](super::fold), which is itself built on `each`.

use super::Record;

/// A collection `each` can step through: an ordered sequence or a record.
///
/// A collection exposes its entries by position. For sequences the key of
/// an entry is its index; for a [`Record`] it is the entry's string key, and
/// positions follow insertion order.
///
/// # Examples
///
/// ```rust
/// use eachfold::collection::Collection;
/// use eachfold::record;
///
/// let numbers = vec![10, 20];
/// assert_eq!(numbers.entry(1), Some((1, &20)));
///
/// let ages = record! { "moe" => 30 };
/// assert_eq!(ages.entry(0), Some(("moe", &30)));
/// assert_eq!(ages.entry(1), None);
/// ```
pub trait Collection {
    /// The key an entry is visited with.
    type Key<'a>: Copy
    where
        Self: 'a;

    /// The element type.
    type Value;

    /// Returns the number of entries.
    fn size(&self) -> usize;

    /// Returns the key and value of the entry at `position`, or `None` past the end.
    fn entry(&self, position: usize) -> Option<(Self::Key<'_>, &Self::Value)>;
}

impl<T> Collection for [T] {
    type Key<'a>
        = usize
    where
        Self: 'a;
    type Value = T;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn entry(&self, position: usize) -> Option<(usize, &T)> {
        self.get(position).map(|value| (position, value))
    }
}

impl<T> Collection for Vec<T> {
    type Key<'a>
        = usize
    where
        Self: 'a;
    type Value = T;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn entry(&self, position: usize) -> Option<(usize, &T)> {
        self.as_slice().entry(position)
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Key<'a>
        = usize
    where
        Self: 'a;
    type Value = T;

    #[inline]
    fn size(&self) -> usize {
        N
    }

    #[inline]
    fn entry(&self, position: usize) -> Option<(usize, &T)> {
        self.as_slice().entry(position)
    }
}

impl<V> Collection for Record<V> {
    type Key<'a>
        = &'a str
    where
        Self: 'a;
    type Value = V;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn entry(&self, position: usize) -> Option<(&str, &V)> {
        self.get_index(position)
    }
}

/// Calls `iterator(value, key, collection)` for every entry of `collection`.
///
/// Sequences are visited by ascending index, records in insertion order.
/// Nothing is returned and the collection is not modified.
///
/// # Examples
///
/// ```rust
/// use eachfold::collection::each;
/// use eachfold::record;
///
/// let mut visited = Vec::new();
/// each(&vec!['a', 'b'], |value, index, _| visited.push((index, *value)));
/// assert_eq!(visited, vec![(0, 'a'), (1, 'b')]);
///
/// let mut keys = Vec::new();
/// each(&record! { "d" => 1, "a" => 2 }, |_, key, _| keys.push(key.to_string()));
/// assert_eq!(keys, vec!["d", "a"]);
/// ```
pub fn each<'a, C, F>(collection: &'a C, mut iterator: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Value, C::Key<'a>, &'a C),
{
    let mut position = 0;
    while let Some((key, value)) = collection.entry(position) {
        iterator(value, key, collection);
        position += 1;
    }
}
