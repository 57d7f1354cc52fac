use std::convert::Infallible;
use std::fmt;
use std::ops::Index;

use crate::compare::{Comparator, IntoOk, NaturalOrder};
use crate::tree::{Iter, RbTree};

/// Dictionary-style wrapper around [`RbTree`].
///
/// Lookups return `Result` because the comparator may fail. With an
/// infallible comparator such as [`NaturalOrder`] use
/// [`IntoOk::into_ok`], or the `Index`, `Extend` and `FromIterator` impls.
#[derive(Clone)]
pub struct RbDict<K, V, C = NaturalOrder> {
    tree: RbTree<K, V, C>,
}

impl<K: Ord, V> RbDict<K, V> {
    pub fn new() -> Self {
        Self { tree: RbTree::new() }
    }
}

impl<K: Ord, V> Default for RbDict<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> RbDict<K, V, C> {
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: RbTree::with_comparator(comparator),
        }
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        self.tree.iter()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.tree.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.tree.values()
    }

    pub fn items(&self) -> Vec<(&K, &V)> {
        self.tree.iter().collect()
    }

    pub fn tree(&self) -> &RbTree<K, V, C> {
        &self.tree
    }

    pub fn into_tree(self) -> RbTree<K, V, C> {
        self.tree
    }
}

impl<K, V, C: Comparator<K>> RbDict<K, V, C> {
    pub fn get(&self, key: &K) -> Result<Option<&V>, C::Error> {
        self.tree.get(key)
    }

    /// Value for `key`, or `default` when absent.
    pub fn get_or<'a>(&'a self, key: &K, default: &'a V) -> Result<&'a V, C::Error> {
        Ok(self.tree.get(key)?.unwrap_or(default))
    }

    pub fn get_mut(&mut self, key: &K) -> Result<Option<&mut V>, C::Error> {
        Ok(match self.tree.find_node(key)? {
            Some(node) => self.tree.value_mut(node),
            None => None,
        })
    }

    pub fn contains_key(&self, key: &K) -> Result<bool, C::Error> {
        self.tree.contains_key(key)
    }

    /// Stores `value` under `key` and returns the value it replaced.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, C::Error> {
        Ok(self.tree.insert_entry(key, value)?.1)
    }

    /// Removes `key` and returns its value; `None` if it was absent.
    pub fn remove(&mut self, key: &K) -> Result<Option<V>, C::Error> {
        self.tree.remove(key)
    }

    /// Returns the value for `key`, storing `value` first if it is absent.
    pub fn setdefault(&mut self, key: K, value: V) -> Result<&mut V, C::Error> {
        let node = match self.tree.find_node(&key)? {
            Some(node) => node,
            None => self.tree.insert(key, value)?,
        };
        Ok(self
            .tree
            .value_mut(node)
            .expect("node was just found or inserted"))
    }

    /// Inserts every pair, overwriting existing keys. Stops at the first
    /// comparator error; pairs before it stay inserted.
    pub fn update<I>(&mut self, other: I) -> Result<(), C::Error>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (k, v) in other {
            self.insert(k, v)?;
        }
        Ok(())
    }
}

impl<K, V, C> Index<&K> for RbDict<K, V, C>
where
    C: Comparator<K, Error = Infallible>,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if `key` is not present.
    fn index(&self, key: &K) -> &V {
        self.get(key).into_ok().expect("key not present in RbDict")
    }
}

impl<K, V, C> Extend<(K, V)> for RbDict<K, V, C>
where
    C: Comparator<K, Error = Infallible>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.update(iter).into_ok();
    }
}

impl<K, V, C> FromIterator<(K, V)> for RbDict<K, V, C>
where
    C: Comparator<K, Error = Infallible> + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::with_comparator(C::default());
        dict.extend(iter);
        dict
    }
}

impl<'a, K, V, C> IntoIterator for &'a RbDict<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for RbDict<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.tree == other.tree
    }
}

/// `{k: v, ...}` in key order, using the `Debug` form of keys and values.
impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Display for RbDict<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k:?}: {v:?}")?;
        }
        f.write_str("}")
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for RbDict<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RbDict {self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_entries_in_key_order() {
        let dict: RbDict<i32, &str> = [(3, "c"), (1, "a"), (2, "b")].into_iter().collect();
        assert_eq!(dict.to_string(), r#"{1: "a", 2: "b", 3: "c"}"#);
        assert_eq!(format!("{dict:?}"), r#"RbDict {1: "a", 2: "b", 3: "c"}"#);
        assert_eq!(RbDict::<i32, i32>::new().to_string(), "{}");
    }

    #[test]
    fn insert_compares_once_per_level() {
        use std::cell::Cell;
        use std::cmp::Ordering;

        let calls = Cell::new(0usize);
        let counting = |a: &i32, b: &i32| -> Result<Ordering, Infallible> {
            calls.set(calls.get() + 1);
            Ok(a.cmp(b))
        };
        let mut dict = RbDict::with_comparator(&counting);
        for k in 0..7 {
            dict.insert(k, k).into_ok();
        }
        let height = dict.tree().height();

        calls.set(0);
        assert_eq!(dict.insert(100, 0).into_ok(), None);
        assert!(calls.get() <= height, "{} comparisons", calls.get());

        calls.set(0);
        assert_eq!(dict.insert(3, 30).into_ok(), Some(3));
        assert!(calls.get() <= height, "{} comparisons", calls.get());
        assert_eq!(dict[&3], 30);
    }

    #[test]
    fn setdefault_keeps_existing_value() {
        let mut dict = RbDict::new();
        assert_eq!(*dict.setdefault("k", 1).into_ok(), 1);
        assert_eq!(*dict.setdefault("k", 2).into_ok(), 1);
        *dict.setdefault("k", 3).into_ok() += 10;
        assert_eq!(dict[&"k"], 11);
    }
}
