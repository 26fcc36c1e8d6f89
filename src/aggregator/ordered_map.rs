//! Insertion-ordered map with O(1) keyed access.
//!
//! Entries live in an arena (`Vec`) in first-insertion order; a hash index
//! maps each key to its slot. Entries are never removed, so arena order is
//! iteration order and lookups never need to walk a list.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Value for `key`, created by `factory` on first use
    ///
    /// New keys go to the end of the iteration order; existing keys keep
    /// their position however often they are accessed.
    pub fn get_or_insert_with<F>(&mut self, key: K, factory: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.index.insert(key.clone(), slot);
                self.entries.push((key, factory()));
                slot
            }
        };
        &mut self.entries[slot].1
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Position of `key` in iteration order
    pub fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).copied()
    }
}

impl<K, V> OrderedMap<K, V> {
    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    ///
    /// The iterator borrows the map, so it always reflects the map as it was
    /// when created. Clone it to restart.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + Clone + '_ {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + Clone + '_ {
        self.entries.iter().map(|(_, value)| value)
    }

    /// First inserted entry
    pub fn first(&self) -> Option<(&K, &V)> {
        self.entries.first().map(|(key, value)| (key, value))
    }
}

/// Insertion-order iterator over an `OrderedMap`
#[derive(Clone)]
pub struct Iter<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> Default for OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for OrderedMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            index: self.index.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(key, value)| (key, value)))
            .finish()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    /// Equal when both hold the same entries in the same order
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Serialize, V: Serialize> Serialize for OrderedMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_first_insertion_order() {
        let mut map = OrderedMap::new();
        for key in ["b", "a", "c", "a", "b"] {
            *map.get_or_insert_with(key.to_string(), || 0) += 1;
        }

        let entries: Vec<(&str, i32)> = map.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        assert_eq!(entries, vec![("b", 2), ("a", 2), ("c", 1)]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_factory_only_called_for_new_keys() {
        let mut map = OrderedMap::new();
        let mut calls = 0;

        map.get_or_insert_with("x", || {
            calls += 1;
            1
        });
        map.get_or_insert_with("x", || {
            calls += 1;
            2
        });

        assert_eq!(calls, 1);
        assert_eq!(map.get("x"), Some(&1));
    }

    #[test]
    fn test_iteration_is_restartable() {
        let mut map = OrderedMap::new();
        map.get_or_insert_with(1, || "one");
        map.get_or_insert_with(2, || "two");

        let iter = map.iter();
        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();
        assert_eq!(first, second);
        assert_eq!(map.iter().len(), 2);
    }

    #[test]
    fn test_borrowed_lookup() {
        let mut map: OrderedMap<String, usize> = OrderedMap::new();
        map.get_or_insert_with("main.main".to_string(), || 7);

        assert!(map.contains_key("main.main"));
        assert_eq!(map.position("main.main"), Some(0));
        assert!(map.get("main.other").is_none());
    }

    #[test]
    fn test_serializes_in_order() {
        let mut map = OrderedMap::new();
        map.get_or_insert_with("z", || 1);
        map.get_or_insert_with("a", || 2);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"z":1,"a":2}"#);
    }
}
