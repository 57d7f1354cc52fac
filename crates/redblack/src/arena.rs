//! Slot storage for tree nodes.
//!
//! Nodes live in a `Vec` of slots. Released slots go on a free list and are
//! reused by later allocations; each release bumps the slot's generation so
//! that a [`NodeId`] handed out earlier no longer resolves.

use std::mem;
use std::ops::{Index, IndexMut};

use crate::types::{NodeId, RbNode};

#[derive(Clone, Debug)]
struct Slot<K, V> {
    generation: u32,
    node: Option<RbNode<K, V>>,
}

#[derive(Clone, Debug)]
pub struct Arena<K, V> {
    slots: Vec<Slot<K, V>>,
    free: Vec<u32>,
}

impl<K, V> Default for Arena<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Arena<K, V> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Number of occupied slots.
    pub fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn alloc(&mut self, node: RbNode<K, V>) -> NodeId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(node);
            return NodeId {
                index,
                generation: slot.generation,
            };
        }
        let index = u32::try_from(self.slots.len()).expect("arena exceeds u32::MAX slots");
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        NodeId {
            index,
            generation: 0,
        }
    }

    /// Frees slot `index` and hands back its node.
    pub fn release(&mut self, index: u32) -> RbNode<K, V> {
        let slot = &mut self.slots[index as usize];
        let node = slot.node.take().expect("released slot is occupied");
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);
        node
    }

    /// Releases every occupied slot, invalidating all outstanding handles.
    pub fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.node.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index as u32);
            }
        }
    }

    /// Slot index of `id` if the handle is still live.
    pub fn resolve(&self, id: NodeId) -> Option<u32> {
        let slot = self.slots.get(id.index as usize)?;
        (slot.generation == id.generation && slot.node.is_some()).then_some(id.index)
    }

    /// Current handle for an occupied slot.
    pub fn id(&self, index: u32) -> NodeId {
        NodeId {
            index,
            generation: self.slots[index as usize].generation,
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&RbNode<K, V>> {
        let index = self.resolve(id)?;
        self.slots[index as usize].node.as_ref()
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut RbNode<K, V>> {
        let index = self.resolve(id)?;
        self.slots[index as usize].node.as_mut()
    }

    /// Exchanges the key/value payloads of two occupied slots, leaving links
    /// and colors in place.
    pub fn swap_entries(&mut self, a: u32, b: u32) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.slots.split_at_mut(hi as usize);
        let x = head[lo as usize]
            .node
            .as_mut()
            .expect("swapped slot is occupied");
        let y = tail[0].node.as_mut().expect("swapped slot is occupied");
        mem::swap(&mut x.k, &mut y.k);
        mem::swap(&mut x.v, &mut y.v);
    }
}

impl<K, V> Index<u32> for Arena<K, V> {
    type Output = RbNode<K, V>;

    fn index(&self, index: u32) -> &RbNode<K, V> {
        self.slots[index as usize]
            .node
            .as_ref()
            .expect("index refers to an occupied slot")
    }
}

impl<K, V> IndexMut<u32> for Arena<K, V> {
    fn index_mut(&mut self, index: u32) -> &mut RbNode<K, V> {
        self.slots[index as usize]
            .node
            .as_mut()
            .expect("index refers to an occupied slot")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(k: i32) -> RbNode<i32, i32> {
        RbNode::new(k, k * 10, None)
    }

    #[test]
    fn released_slots_are_reused_with_new_generation() {
        let mut arena = Arena::new();
        let a = arena.alloc(node(1));
        let b = arena.alloc(node(2));
        assert_eq!(arena.live(), 2);

        let released = arena.release(a.index);
        assert_eq!(released.k, 1);
        assert_eq!(arena.resolve(a), None);
        assert_eq!(arena.live(), 1);

        let c = arena.alloc(node(3));
        assert_eq!(c.index, a.index);
        assert_ne!(c, a);
        assert!(arena.get(a).is_none());
        assert_eq!(arena.get(c).map(|n| n.k), Some(3));
        assert_eq!(arena.get(b).map(|n| n.v), Some(20));
    }

    #[test]
    fn clear_invalidates_every_handle() {
        let mut arena = Arena::new();
        let ids: Vec<NodeId> = (0..4).map(|k| arena.alloc(node(k))).collect();
        arena.clear();
        assert_eq!(arena.live(), 0);
        assert!(ids.iter().all(|id| arena.resolve(*id).is_none()));

        let fresh = arena.alloc(node(9));
        assert!(ids.iter().all(|id| *id != fresh));
    }

    #[test]
    fn swap_entries_keeps_links() {
        let mut arena = Arena::new();
        let a = arena.alloc(node(1));
        let b = arena.alloc(node(2));
        arena[a.index].l = Some(b.index);
        arena.swap_entries(b.index, a.index);
        assert_eq!((arena[a.index].k, arena[a.index].v), (2, 20));
        assert_eq!((arena[b.index].k, arena[b.index].v), (1, 10));
        assert_eq!(arena[a.index].l, Some(b.index));
    }
}
