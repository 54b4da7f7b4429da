use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use vista_utils::hash::{FixedHashState, HashTable};

use crate::value::Value;

// -----------------------------------------------------------------------------
// Record

/// An insertion-ordered mapping from property names to [`Value`]s.
///
/// Entries are stored in a `Vec` and indexed by a hash table of positions,
/// so lookups are O(1) and iteration follows insertion order.
///
/// # Examples
///
/// ```
/// use vista_reflect::value::{Record, Value};
///
/// let mut record = Record::new();
/// record.insert("id", 1);
/// record.insert("name", "Ada");
/// record.insert("id", 2); // overwrite keeps the position
///
/// assert_eq!(record.keys().collect::<Vec<_>>(), ["id", "name"]);
/// assert_eq!(record.get("id"), Some(&Value::Int(2)));
/// ```
#[derive(Clone, Default)]
pub struct Record {
    entries: Vec<(String, Value)>,
    indices: HashTable<usize>,
}

#[inline]
fn hash_key(key: &str) -> u64 {
    FixedHashState::hash_one(key)
}

impl Record {
    /// Creates an empty `Record`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            indices: HashTable::new(),
        }
    }

    /// Creates an empty `Record` with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            indices: HashTable::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn index_of(&self, key: &str) -> Option<usize> {
        let entries = &self.entries;
        self.indices
            .find(hash_key(key), |&index| entries[index].0 == key)
            .copied()
    }

    /// Returns the value stored under `key`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.index_of(key).map(|index| &self.entries[index].1)
    }

    /// Returns a mutable reference to the value stored under `key`.
    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.index_of(key).map(|index| &mut self.entries[index].1)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index_of(key).is_some()
    }

    /// Inserts a value.
    ///
    /// If `key` already exists, its value is replaced in place and the old
    /// value is returned; the entry keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();

        if let Some(index) = self.index_of(&key) {
            return Some(core::mem::replace(&mut self.entries[index].1, value));
        }

        let index = self.entries.len();
        let entries = &self.entries;
        self.indices
            .insert_unique(hash_key(&key), index, |&i| hash_key(&entries[i].0));
        self.entries.push((key, value));
        None
    }

    /// Removes `key`, shifting all later entries one position forward.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let entries = &self.entries;
        let index = self
            .indices
            .find_entry(hash_key(key), |&index| entries[index].0 == key)
            .ok()?
            .remove()
            .0;

        for position in self.indices.iter_mut() {
            if *position > index {
                *position -= 1;
            }
        }
        Some(self.entries.remove(index).1)
    }

    /// Iterates over the keys in insertion order.
    #[inline]
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Iterates over the values in insertion order.
    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &Value> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Iterates over the entries in insertion order.
    #[inline]
    pub fn iter(&self) -> RecordIter<'_> {
        RecordIter {
            inner: self.entries.iter(),
        }
    }
}

// -----------------------------------------------------------------------------
// Iterators

/// A borrowing iterator over the entries of a [`Record`].
pub struct RecordIter<'a> {
    inner: core::slice::Iter<'a, (String, Value)>,
}

impl<'a> Iterator for RecordIter<'a> {
    type Item = (&'a str, &'a Value);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key.as_str(), value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for RecordIter<'_> {}

/// An owning iterator over the entries of a [`Record`].
pub struct RecordIntoIter {
    inner: alloc::vec::IntoIter<(String, Value)>,
}

impl Iterator for RecordIntoIter {
    type Item = (String, Value);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for RecordIntoIter {}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = RecordIntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        RecordIntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a str, &'a Value);
    type IntoIter = RecordIter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        record.extend(iter);
        record
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Record {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

// -----------------------------------------------------------------------------
// Traits

impl PartialEq for Record {
    /// Two records are equal when they hold the same entries in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::Record;
    use crate::value::Value;

    #[test]
    fn insertion_order() {
        let record: Record = [("b", 1), ("a", 2), ("c", 3)].into_iter().collect();
        assert_eq!(record.keys().collect::<Vec<_>>(), ["b", "a", "c"]);
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn overwrite_in_place() {
        let mut record = Record::new();
        record.insert("x", 1);
        record.insert("y", 2);
        assert_eq!(record.insert("x", 10), Some(Value::Int(1)));
        assert_eq!(record.keys().collect::<Vec<_>>(), ["x", "y"]);
        assert_eq!(record.get("x"), Some(&Value::Int(10)));
    }

    #[test]
    fn remove_reindexes() {
        let mut record: Record = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        assert_eq!(record.remove("a"), Some(Value::Int(1)));
        assert_eq!(record.remove("a"), None);
        assert_eq!(record.get("b"), Some(&Value::Int(2)));
        assert_eq!(record.get("c"), Some(&Value::Int(3)));

        record.insert("d", 4);
        assert_eq!(record.keys().collect::<Vec<_>>(), ["b", "c", "d"]);
        assert_eq!(record.get("d"), Some(&Value::Int(4)));
    }

    #[test]
    fn equality_is_ordered() {
        let a: Record = [("a", 1), ("b", 2)].into_iter().collect();
        let b: Record = [("b", 2), ("a", 1)].into_iter().collect();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
