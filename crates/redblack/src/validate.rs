//! Structural checks used by tests and by callers that want to verify a tree.

use std::cmp::Ordering;

use thiserror::Error;

use crate::arena::Arena;
use crate::compare::Comparator;
use crate::util::{first, next};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("root has a parent")]
    RootHasParent,
    #[error("root is not black")]
    RootNotBlack,
    #[error("child of node {0} does not point back to it")]
    BrokenParentLink(u32),
    #[error("red node {0} has a red child")]
    RedRed(u32),
    #[error("black height mismatch under node {node}: left {left}, right {right}")]
    BlackHeightMismatch { node: u32, left: usize, right: usize },
    #[error("keys out of order at node {0}")]
    OrderViolated(u32),
    #[error("tree records {recorded} nodes but {reachable} are reachable")]
    CountMismatch { recorded: usize, reachable: usize },
}

/// Verifies the red-black properties, strict key order and the node count.
pub fn assert_red_black_tree<K, V, C>(
    arena: &Arena<K, V>,
    root: Option<u32>,
    len: usize,
    comparator: &C,
) -> Result<(), InvariantViolation>
where
    C: Comparator<K>,
{
    let Some(root) = root else {
        return match len {
            0 => Ok(()),
            recorded => Err(InvariantViolation::CountMismatch {
                recorded,
                reachable: 0,
            }),
        };
    };

    if arena[root].p.is_some() {
        return Err(InvariantViolation::RootHasParent);
    }
    if !arena[root].is_black() {
        return Err(InvariantViolation::RootNotBlack);
    }

    fn black_height<K, V>(
        arena: &Arena<K, V>,
        node: Option<u32>,
    ) -> Result<usize, InvariantViolation> {
        let Some(node) = node else {
            return Ok(1);
        };
        let n = &arena[node];

        for child in [n.l, n.r].into_iter().flatten() {
            if arena[child].p != Some(node) {
                return Err(InvariantViolation::BrokenParentLink(node));
            }
            if n.is_red() && arena[child].is_red() {
                return Err(InvariantViolation::RedRed(node));
            }
        }

        let left = black_height(arena, n.l)?;
        let right = black_height(arena, n.r)?;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch { node, left, right });
        }
        Ok(left + usize::from(n.is_black()))
    }

    black_height(arena, Some(root))?;

    let mut reachable = 0;
    let mut prev: Option<u32> = None;
    let mut curr = first(arena, Some(root));
    while let Some(i) = curr {
        if let Some(p) = prev {
            let ordered = matches!(
                comparator.compare(&arena[p].k, &arena[i].k),
                Ok(Ordering::Less)
            );
            if !ordered {
                return Err(InvariantViolation::OrderViolated(i));
            }
        }
        reachable += 1;
        prev = Some(i);
        curr = next(arena, i);
    }

    if reachable != len || reachable != arena.live() {
        return Err(InvariantViolation::CountMismatch {
            recorded: len,
            reachable,
        });
    }
    Ok(())
}
