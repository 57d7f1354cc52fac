//! Node and handle definitions.
//!
//! Links are `Option<u32>` indices into an [`Arena`](crate::arena::Arena).
//! `None` plays the part of the black sentinel: it stands for every missing
//! child, the parent of the root, and the root of an empty tree.

use std::fmt;

/// Node color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Freshly inserted nodes are red.
    #[default]
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "RED",
            Color::Black => "BLACK",
        };
        f.pad(name)
    }
}

/// Parent / child links of a binary tree node.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// A stored key/value pair plus its red-black bookkeeping.
#[derive(Clone, Debug)]
pub struct RbNode<K, V> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub v: V,
    pub color: Color,
}

impl<K, V> RbNode<K, V> {
    /// A red, childless node hanging below `p`.
    pub fn new(k: K, v: V, p: Option<u32>) -> Self {
        Self {
            p,
            l: None,
            r: None,
            k,
            v,
            color: Color::Red,
        }
    }

    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

impl<K, V> Node for RbNode<K, V> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

/// Handle to a node of one particular tree.
///
/// A handle stays live until its node is removed or the tree is cleared.
/// After that every accessor treats it as absent, even if the slot is later
/// reused for a different entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl NodeId {
    /// Arena slot this handle points at.
    pub fn index(&self) -> u32 {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}
