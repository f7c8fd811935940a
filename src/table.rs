//! The hybrid table type behind [`Value::Table`](crate::Value::Table).
//!
//! A LuaML table has two halves that live side by side:
//!
//! - the **array part**: positional entries in source order
//! - the **object part**: string keys mapped to values, backed by an
//!   [`IndexMap`] so that encoding is deterministic and follows insertion order
//!
//! A `{ ... }` block in a document only ever fills one of the halves (the
//! parser rejects blocks that mix them), while the root table of a document in
//! global mode may fill both.
//!
//! ## Examples
//!
//! ```rust
//! use serde_luaml::{Table, Value};
//!
//! let mut table = Table::new();
//! table.insert("name", Value::from("Alice"));
//! table.insert("age", Value::from(30));
//!
//! assert_eq!(table.len(), 2);
//! assert!(table.is_object());
//! assert_eq!(table.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::collections::HashMap;

/// A table with an ordered array part and an insertion-ordered object part.
///
/// Equality compares the array parts element by element and the object parts
/// as maps, so two tables holding the same keys in a different order are equal.
///
/// # Examples
///
/// ```rust
/// use serde_luaml::{Table, Value};
///
/// let list: Table = vec![Value::from(1), Value::from(2)].into_iter().collect();
/// assert!(list.is_array());
/// assert_eq!(list.get_index(1), Some(&Value::from(2)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    array: Vec<Value>,
    object: IndexMap<String, Value>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Table::default()
    }

    /// Creates a table whose array part is `values`.
    #[must_use]
    pub fn from_array(values: Vec<Value>) -> Self {
        Table {
            array: values,
            object: IndexMap::new(),
        }
    }

    /// Appends a positional entry to the array part.
    pub fn push(&mut self, value: Value) {
        self.array.push(value);
    }

    /// Inserts a keyed entry into the object part.
    ///
    /// If the key was already present its value is replaced (last write wins),
    /// the key keeps its original position, and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_luaml::{Table, Value};
    ///
    /// let mut table = Table::new();
    /// assert!(table.insert("key", Value::from(1)).is_none());
    /// assert_eq!(table.insert("key", Value::from(2)), Some(Value::from(1)));
    /// assert_eq!(table.get("key"), Some(&Value::from(2)));
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.object.insert(key.into(), value)
    }

    /// Returns the keyed entry for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.object.get(key)
    }

    /// Returns a mutable reference to the keyed entry for `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.object.get_mut(key)
    }

    /// Returns the positional entry at the zero-based `index`.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.array.get(index)
    }

    /// Removes a keyed entry, preserving the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.object.shift_remove(key)
    }

    /// The array part.
    #[must_use]
    pub fn array(&self) -> &[Value] {
        &self.array
    }

    /// The object part.
    #[must_use]
    pub fn object(&self) -> &IndexMap<String, Value> {
        &self.object
    }

    /// Total number of entries across both parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.array.len() + self.object.len()
    }

    /// Returns `true` if both parts are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.array.is_empty() && self.object.is_empty()
    }

    /// Returns `true` if the object part is empty. An empty table is both an
    /// array and an object.
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.object.is_empty()
    }

    /// Returns `true` if the array part is empty.
    #[must_use]
    pub fn is_object(&self) -> bool {
        self.array.is_empty()
    }

    /// Iterates the array part in order.
    pub fn values(&self) -> std::slice::Iter<'_, Value> {
        self.array.iter()
    }

    /// Iterates the object part in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.object.iter()
    }

    /// Iterates the keys of the object part in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.object.keys()
    }

    /// Splits the table into its array part and object part.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Value>, IndexMap<String, Value>) {
        (self.array, self.object)
    }
}

impl From<HashMap<String, Value>> for Table {
    fn from(map: HashMap<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl From<Vec<Value>> for Table {
    fn from(values: Vec<Value>) -> Self {
        Table::from_array(values)
    }
}

impl FromIterator<(String, Value)> for Table {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Table {
            array: Vec::new(),
            object: IndexMap::from_iter(iter),
        }
    }
}

impl FromIterator<Value> for Table {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Table::from_array(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins_keeps_position() {
        let mut table = Table::new();
        table.insert("a", Value::from(1));
        table.insert("b", Value::from(2));
        table.insert("a", Value::from(3));

        let keys: Vec<_> = table.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(table.get("a"), Some(&Value::from(3)));
    }

    #[test]
    fn test_equality_ignores_key_order() {
        let left: Table = vec![
            ("x".to_string(), Value::from(1)),
            ("y".to_string(), Value::from(2)),
        ]
        .into_iter()
        .collect();
        let right: Table = vec![
            ("y".to_string(), Value::from(2)),
            ("x".to_string(), Value::from(1)),
        ]
        .into_iter()
        .collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_shape_predicates() {
        let empty = Table::new();
        assert!(empty.is_array() && empty.is_object());

        let mut hybrid = Table::from_array(vec![Value::Nil]);
        assert!(hybrid.is_array());
        hybrid.insert("k", Value::Bool(true));
        assert!(!hybrid.is_array() && !hybrid.is_object());
        assert_eq!(hybrid.len(), 2);
    }
}
