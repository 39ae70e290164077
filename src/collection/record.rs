//! Insertion-ordered, string-keyed mapping.
//!
//! `Record<V>` is the mapping variant of a [`Collection`](super::Collection):
//! [`each`](super::each) visits its entries in the order their keys were
//! first inserted. Replacing the value of an existing key keeps the key's
//! position.
//!
//! # Examples
//!
//! ```rust
//! use eachfold::collection::Record;
//! use eachfold::record;
//!
//! let mut stooge = record! { "name" => "moe", "role" => "leader" };
//! stooge.insert("name", "curly");
//!
//! assert_eq!(stooge.get("name"), Some(&"curly"));
//! assert_eq!(stooge.keys(), vec!["name", "role"]);
//! ```

use std::fmt;

use rustc_hash::FxHashMap;

use crate::typeclass::{Fields, Truthy};

/// An insertion-ordered map from string keys to values.
///
/// Lookups go through a hash index; iteration order is the order in which
/// keys were first inserted.
#[derive(Clone)]
pub struct Record<V> {
    entries: Vec<(String, V)>,
    positions: FxHashMap<String, usize>,
}

impl<V> Record<V> {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: FxHashMap::default(),
        }
    }

    /// Creates an empty record with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the record has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts `value` under `key`.
    ///
    /// A new key is appended after every existing key. An existing key keeps
    /// its position and the replaced value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        if let Some(&position) = self.positions.get(&key) {
            return Some(std::mem::replace(&mut self.entries[position].1, value));
        }
        self.positions.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.positions
            .get(key)
            .map(|&position| &self.entries[position].1)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.positions
            .get(key)
            .map(|&position| &mut self.entries[position].1)
    }

    /// Returns `true` if the record has an entry for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    /// Returns the entry at `position` in insertion order.
    #[inline]
    pub fn get_index(&self, position: usize) -> Option<(&str, &V)> {
        self.entries
            .get(position)
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Returns the keys in insertion order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys = Vec::with_capacity(self.entries.len());
        let mut position = 0;
        while let Some((key, _)) = self.get_index(position) {
            keys.push(key);
            position += 1;
        }
        keys
    }
}

impl<V> Default for Record<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Record<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterable: I) -> Self {
        let mut record = Self::new();
        for (key, value) in iterable {
            record.insert(key, value);
        }
        record
    }
}

impl<V: PartialEq> PartialEq for Record<V> {
    /// Two records are equal when they hold the same keys with equal values,
    /// whatever the insertion order.
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut position = 0;
        while let Some((key, value)) = self.get_index(position) {
            if other.get(key) != Some(value) {
                return false;
            }
            position += 1;
        }
        true
    }
}

impl<V: fmt::Debug> fmt::Debug for Record<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = formatter.debug_map();
        for (key, value) in &self.entries {
            map.entry(key, value);
        }
        map.finish()
    }
}

impl<V: serde::Serialize> serde::Serialize for Record<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<V: Clone> Fields for Record<V> {
    type Field = V;

    #[inline]
    fn field(&self, name: &str) -> Option<V> {
        self.get(name).cloned()
    }
}

impl<V> Truthy for Record<V> {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

/// Creates a [`Record`] from `key => value` pairs, in order.
///
/// # Examples
///
/// ```rust
/// use eachfold::record;
///
/// let point = record! { "x" => 1, "y" => 2 };
/// assert_eq!(point.get("y"), Some(&2));
///
/// let empty: eachfold::collection::Record<i32> = record! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::collection::Record::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::collection::Record::new();
        $(
            record.insert($key, $value);
        )+
        record
    }};
}
