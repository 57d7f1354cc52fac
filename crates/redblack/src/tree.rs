use std::cmp::Ordering;
use std::fmt;

use log::trace;

use crate::arena::Arena;
use crate::compare::{Comparator, NaturalOrder};
use crate::types::{Color, NodeId, RbNode};
use crate::util;
use crate::validate::{assert_red_black_tree, InvariantViolation};

/// Red-black tree keyed through a caller-supplied [`Comparator`].
///
/// # Comparator failures
///
/// Every comparison an operation needs is made before the tree is touched,
/// so when the comparator returns an error the tree is left exactly as it
/// was. Insertion remembers the side of its last comparison instead of
/// comparing again when linking the new node.
///
/// # Handle stability
///
/// Removing a node that has two children moves its in-order successor's
/// entry into the removed node's slot and frees the successor's slot. After
/// [`remove_node`](Self::remove_node) the handle that pointed at the
/// successor is stale, and the handle of the removed key now reads the
/// successor's entry. Look keys up again after a removal instead of holding
/// on to handles.
///
/// # Concurrency
///
/// The tree is a plain in-process structure with no internal locking; it is
/// meant to be owned and mutated by one caller at a time.
#[derive(Clone)]
pub struct RbTree<K, V, C = NaturalOrder> {
    arena: Arena<K, V>,
    root: Option<u32>,
    len: usize,
    comparator: C,
}

impl<K: Ord, V> RbTree<K, V> {
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K: Ord, V> Default for RbTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> RbTree<K, V, C> {
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_capacity_and_comparator(0, comparator)
    }

    /// Pre-sizes node storage for `capacity` entries.
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            root: None,
            len: 0,
            comparator,
        }
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn root_node(&self) -> Option<NodeId> {
        self.root.map(|i| self.arena.id(i))
    }

    pub fn key(&self, node: NodeId) -> Option<&K> {
        self.arena.get(node).map(|n| &n.k)
    }

    pub fn value(&self, node: NodeId) -> Option<&V> {
        self.arena.get(node).map(|n| &n.v)
    }

    pub fn value_mut(&mut self, node: NodeId) -> Option<&mut V> {
        self.arena.get_mut(node).map(|n| &mut n.v)
    }

    pub fn entry(&self, node: NodeId) -> Option<(&K, &V)> {
        self.arena.get(node).map(|n| (&n.k, &n.v))
    }

    /// Overwrites the value of a live node; returns the previous value.
    pub fn set_value(&mut self, node: NodeId, value: V) -> Option<V> {
        self.value_mut(node).map(|v| std::mem::replace(v, value))
    }

    pub fn color(&self, node: NodeId) -> Option<Color> {
        self.arena.get(node).map(|n| n.color)
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        self.arena.resolve(node).is_some()
    }

    pub fn first_node(&self) -> Option<NodeId> {
        util::first(&self.arena, self.root).map(|i| self.arena.id(i))
    }

    pub fn last_node(&self) -> Option<NodeId> {
        util::last(&self.arena, self.root).map(|i| self.arena.id(i))
    }

    /// In-order successor; `None` after the last node or for a stale handle.
    pub fn next_node(&self, node: NodeId) -> Option<NodeId> {
        let i = self.arena.resolve(node)?;
        util::next(&self.arena, i).map(|i| self.arena.id(i))
    }

    /// In-order predecessor; `None` before the first node or for a stale handle.
    pub fn prev_node(&self, node: NodeId) -> Option<NodeId> {
        let i = self.arena.resolve(node)?;
        util::prev(&self.arena, i).map(|i| self.arena.id(i))
    }

    /// Removes `node` and returns its key/value.
    ///
    /// `None` and stale handles are ignored. See the type-level notes on
    /// handle stability.
    pub fn remove_node(&mut self, node: Option<NodeId>) -> Option<(K, V)> {
        let z = self.arena.resolve(node?)?;
        let spliced = util::remove(&mut self.arena, &mut self.root, z);
        let removed = self.arena.release(spliced);
        self.len -= 1;
        trace!("removed node {z} (slot {spliced} released), {} left", self.len);
        Some((removed.k, removed.v))
    }

    /// Drops every node. All outstanding handles become stale.
    pub fn clear(&mut self) {
        trace!("clearing tree of {} nodes", self.len);
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// In-order handles, walked through parent links.
    pub fn nodes(&self) -> Nodes<'_, K, V> {
        Nodes {
            arena: &self.arena,
            curr: util::first(&self.arena, self.root),
        }
    }

    /// In-order `(key, value)` pairs.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            arena: &self.arena,
            curr: util::first(&self.arena, self.root),
            remaining: self.len,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    /// Visits every node in order using an explicit ancestor stack rather
    /// than parent links.
    pub fn traverse<F: FnMut(NodeId)>(&self, mut visit: F) {
        let mut stack = Vec::new();
        let mut curr = self.root;
        loop {
            while let Some(i) = curr {
                stack.push(i);
                curr = self.arena[i].l;
            }
            let Some(i) = stack.pop() else {
                return;
            };
            visit(self.arena.id(i));
            curr = self.arena[i].r;
        }
    }

    /// [`traverse`](Self::traverse) collected into a `Vec`.
    pub fn nodes_by_traversal(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.len);
        self.traverse(|id| out.push(id));
        out
    }

    pub fn height(&self) -> usize {
        util::height(&self.arena, self.root)
    }

    /// Black nodes on any root-to-leaf path.
    pub fn black_height(&self) -> usize {
        util::black_height(&self.arena, self.root)
    }

    pub(crate) fn arena(&self) -> &Arena<K, V> {
        &self.arena
    }

    pub(crate) fn root_index(&self) -> Option<u32> {
        self.root
    }
}

impl<K, V, C: Comparator<K>> RbTree<K, V, C> {
    /// Inserts `key`, or overwrites the value of an equal key in place.
    ///
    /// Returns the handle of the new or reused node.
    pub fn insert(&mut self, key: K, value: V) -> Result<NodeId, C::Error> {
        Ok(self.insert_entry(key, value)?.0)
    }

    /// Like [`insert`](Self::insert), but also hands back the value an equal
    /// key held before.
    pub fn insert_entry(&mut self, key: K, value: V) -> Result<(NodeId, Option<V>), C::Error> {
        let mut parent = None;
        let mut went_left = false;
        let mut curr = self.root;
        while let Some(i) = curr {
            match self.comparator.compare(&key, &self.arena[i].k)? {
                Ordering::Equal => {
                    let old = std::mem::replace(&mut self.arena[i].v, value);
                    trace!("overwrote value of node {i}");
                    return Ok((self.arena.id(i), Some(old)));
                }
                Ordering::Less => {
                    went_left = true;
                    curr = self.arena[i].l;
                }
                Ordering::Greater => {
                    went_left = false;
                    curr = self.arena[i].r;
                }
            }
            parent = Some(i);
        }

        let id = self.arena.alloc(RbNode::new(key, value, parent));
        let x = id.index;
        match parent {
            None => self.root = Some(x),
            Some(p) if went_left => self.arena[p].l = Some(x),
            Some(p) => self.arena[p].r = Some(x),
        }
        self.len += 1;
        util::insert_fixup(&mut self.arena, &mut self.root, x);
        trace!("inserted node {x}, {} total", self.len);
        Ok((id, None))
    }

    fn find_index(&self, key: &K) -> Result<Option<u32>, C::Error> {
        let mut curr = self.root;
        while let Some(i) = curr {
            curr = match self.comparator.compare(key, &self.arena[i].k)? {
                Ordering::Equal => return Ok(Some(i)),
                Ordering::Less => self.arena[i].l,
                Ordering::Greater => self.arena[i].r,
            };
        }
        Ok(None)
    }

    pub fn find_node(&self, key: &K) -> Result<Option<NodeId>, C::Error> {
        Ok(self.find_index(key)?.map(|i| self.arena.id(i)))
    }

    pub fn get(&self, key: &K) -> Result<Option<&V>, C::Error> {
        Ok(self.find_index(key)?.map(|i| &self.arena[i].v))
    }

    pub fn contains_key(&self, key: &K) -> Result<bool, C::Error> {
        Ok(self.find_index(key)?.is_some())
    }

    /// Node with the smallest key strictly greater than `key`; `key` need not
    /// be present.
    pub fn next_node_by_key(&self, key: &K) -> Result<Option<NodeId>, C::Error> {
        let Some(mut curr) = self.root else {
            return Ok(None);
        };
        let found = loop {
            match self.comparator.compare(key, &self.arena[curr].k)? {
                Ordering::Equal => break util::next(&self.arena, curr),
                Ordering::Less => match self.arena[curr].l {
                    Some(l) => curr = l,
                    None => break Some(curr),
                },
                Ordering::Greater => match self.arena[curr].r {
                    Some(r) => curr = r,
                    None => break util::next(&self.arena, curr),
                },
            }
        };
        Ok(found.map(|i| self.arena.id(i)))
    }

    /// Node with the largest key strictly less than `key`; `key` need not be
    /// present.
    pub fn prev_node_by_key(&self, key: &K) -> Result<Option<NodeId>, C::Error> {
        let Some(mut curr) = self.root else {
            return Ok(None);
        };
        let found = loop {
            match self.comparator.compare(key, &self.arena[curr].k)? {
                Ordering::Equal => break util::prev(&self.arena, curr),
                Ordering::Less => match self.arena[curr].l {
                    Some(l) => curr = l,
                    None => break util::prev(&self.arena, curr),
                },
                Ordering::Greater => match self.arena[curr].r {
                    Some(r) => curr = r,
                    None => break Some(curr),
                },
            }
        };
        Ok(found.map(|i| self.arena.id(i)))
    }

    /// Looks `key` up and removes it, returning its value.
    pub fn remove(&mut self, key: &K) -> Result<Option<V>, C::Error> {
        let node = self.find_node(key)?;
        Ok(self.remove_node(node).map(|(_, v)| v))
    }

    /// Checks every red-black property plus key order and the node count.
    pub fn assert_valid(&self) -> Result<(), InvariantViolation> {
        assert_red_black_tree(&self.arena, self.root, self.len, &self.comparator)
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for RbTree<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Trees are equal when they hold the same entries in the same order.
impl<K: PartialEq, V: PartialEq, C> PartialEq for RbTree<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<'a, K, V, C> IntoIterator for &'a RbTree<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

/// Iterator returned by [`RbTree::nodes`].
pub struct Nodes<'a, K, V> {
    arena: &'a Arena<K, V>,
    curr: Option<u32>,
}

impl<K, V> Iterator for Nodes<'_, K, V> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let i = self.curr?;
        self.curr = util::next(self.arena, i);
        Some(self.arena.id(i))
    }
}

/// Iterator returned by [`RbTree::iter`].
pub struct Iter<'a, K, V> {
    arena: &'a Arena<K, V>,
    curr: Option<u32>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.curr?;
        self.curr = util::next(self.arena, i);
        self.remaining -= 1;
        let arena = self.arena;
        let node = &arena[i];
        Some((&node.k, &node.v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
