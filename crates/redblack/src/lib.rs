//! Red-black tree with an ordered-dictionary wrapper.
//!
//! Nodes live in an arena and link to each other through `Option<u32>` slot
//! indices, so there are no owning parent/child cycles and no shared sentinel
//! object: `None` stands in for the black sentinel everywhere. Callers hold
//! [`NodeId`] handles, which go stale once their node is removed.
//!
//! Keys are ordered by a [`Comparator`], which may refuse to order two keys
//! by returning an error. Sweep-line callers rely on this to report
//! intersecting segments; the error is returned from whichever operation ran
//! into it and the tree is left untouched.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`RbNode`], [`Color`], [`NodeId`] |
//! | [`compare`] | [`Comparator`], [`NaturalOrder`], [`ThreeWay`], [`IntoOk`] |
//! | [`arena`] | Generational slot storage with a free list |
//! | [`util`] | Rotations, insert/remove fix-ups, in-order navigation |
//! | [`tree`] | [`RbTree`] |
//! | [`dict`] | [`RbDict`] |
//! | [`validate`] | [`assert_red_black_tree`], [`InvariantViolation`] |
//!
//! # Example
//!
//! ```
//! use redblack::{IntoOk, RbTree};
//!
//! let mut tree = RbTree::new();
//! for k in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(k, k * 10).into_ok();
//! }
//!
//! let seven = tree.next_node_by_key(&6).into_ok().unwrap();
//! assert_eq!(tree.key(seven), Some(&7));
//!
//! let five = tree.find_node(&5).into_ok();
//! tree.remove_node(five);
//! let keys: Vec<i32> = tree.keys().copied().collect();
//! assert_eq!(keys, vec![1, 3, 4, 7, 8, 9]);
//! tree.assert_valid().unwrap();
//! ```

pub mod arena;
pub mod compare;
pub mod dict;
mod print;
pub mod tree;
pub mod types;
pub mod util;
pub mod validate;

pub use compare::{Comparator, IntoOk, NaturalOrder, ThreeWay};
pub use dict::RbDict;
pub use tree::{Iter, Nodes, RbTree};
pub use types::{Color, NodeId, RbNode};
pub use validate::{assert_red_black_tree, InvariantViolation};
