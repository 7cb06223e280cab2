//! `OrderedMap`: a string-keyed map that remembers first-insertion order.
//!
//! Keys and values live in a single [`IndexMap`], so the key order and the
//! value mapping can never disagree: every key appears exactly once, in the
//! position where it was first inserted.
//!
//! # Example
//!
//! ```
//! use ordered_json::OrderedMap;
//!
//! let mut m = OrderedMap::new();
//! m.set("b", 1);
//! m.set("a", 2);
//! m.set("b", 3); // overwrite keeps "b" first
//! assert_eq!(m.keys().collect::<Vec<_>>(), ["b", "a"]);
//! assert_eq!(m.to_json_string().unwrap(), r#"{"b":3,"a":2}"#);
//! ```

use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::{DecodeError, EncodeError};
use crate::value::Value;

/// Iterator over the values of an [`OrderedMap`], in key order.
pub type Values<'a> = indexmap::map::Values<'a, String, Value>;
/// Iterator over the entries of an [`OrderedMap`], in key order.
pub type Iter<'a> = indexmap::map::Iter<'a, String, Value>;
/// Owning iterator over the entries of an [`OrderedMap`], in key order.
pub type IntoIter = indexmap::map::IntoIter<String, Value>;

#[derive(Debug, Clone, Default)]
pub struct OrderedMap {
    entries: IndexMap<String, Value>,
}

impl OrderedMap {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Creates an empty map with room for `capacity` keys.
    ///
    /// The capacity only affects allocation, never behavior.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Sets `key` to `value`.
    ///
    /// A new key is appended to the end of the order. If the key already
    /// exists its position is left unchanged and only the value is replaced;
    /// the previous value is returned.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes `key` and returns its value. Does nothing if `key` is absent.
    ///
    /// The remaining keys keep their relative order.
    pub fn delete(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Keys in the order the encoder writes them.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> Values<'_> {
        self.entries.values()
    }

    pub fn iter(&self) -> Iter<'_> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Encodes the map to compact JSON bytes, keys in insertion order.
    pub fn to_json_vec(&self) -> Result<Vec<u8>, EncodeError> {
        crate::encode(self)
    }

    /// Encodes the map to a compact JSON string, keys in insertion order.
    pub fn to_json_string(&self) -> Result<String, EncodeError> {
        crate::encode_to_string(self)
    }
}

/// Equal when both maps hold the same entries in the same order.
impl PartialEq for OrderedMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl FromStr for OrderedMap {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::decode(s.as_bytes())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for OrderedMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for OrderedMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl IntoIterator for OrderedMap {
    type Item = (String, Value);
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a OrderedMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
