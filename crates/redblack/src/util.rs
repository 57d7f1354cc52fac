//! Arena-level red-black tree algorithms.
//!
//! Every function works on raw slot indices; `root` is threaded through as
//! `&mut Option<u32>` so rotations can move the root.

use crate::arena::Arena;
use crate::types::{Color, Node};

#[inline]
fn get_p<K, V>(arena: &Arena<K, V>, i: u32) -> Option<u32> {
    arena[i].p()
}

#[inline]
fn get_l<K, V>(arena: &Arena<K, V>, i: u32) -> Option<u32> {
    arena[i].l()
}

#[inline]
fn get_r<K, V>(arena: &Arena<K, V>, i: u32) -> Option<u32> {
    arena[i].r()
}

#[inline]
fn set_p<K, V>(arena: &mut Arena<K, V>, i: u32, v: Option<u32>) {
    arena[i].set_p(v);
}

#[inline]
fn set_l<K, V>(arena: &mut Arena<K, V>, i: u32, v: Option<u32>) {
    arena[i].set_l(v);
}

#[inline]
fn set_r<K, V>(arena: &mut Arena<K, V>, i: u32, v: Option<u32>) {
    arena[i].set_r(v);
}

/// Missing nodes count as black.
#[inline]
fn is_black<K, V>(arena: &Arena<K, V>, i: Option<u32>) -> bool {
    i.map_or(true, |i| arena[i].is_black())
}

#[inline]
fn paint<K, V>(arena: &mut Arena<K, V>, i: u32, color: Color) {
    arena[i].color = color;
}

/// Leftmost node under `root`.
pub fn first<K, V>(arena: &Arena<K, V>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node under `root`.
pub fn last<K, V>(arena: &Arena<K, V>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<K, V>(arena: &Arena<K, V>, mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    while let Some(p) = get_p(arena, curr) {
        if get_l(arena, p) == Some(curr) {
            return Some(p);
        }
        curr = p;
    }
    None
}

/// In-order predecessor.
pub fn prev<K, V>(arena: &Arena<K, V>, mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    while let Some(p) = get_p(arena, curr) {
        if get_r(arena, p) == Some(curr) {
            return Some(p);
        }
        curr = p;
    }
    None
}

/// Replaces `old` with `new` in the child slot of `parent` (or at the root).
fn relink<K, V>(
    arena: &mut Arena<K, V>,
    root: &mut Option<u32>,
    parent: Option<u32>,
    old: u32,
    new: Option<u32>,
) {
    match parent {
        None => *root = new,
        Some(p) => {
            if get_l(arena, p) == Some(old) {
                set_l(arena, p, new);
            } else {
                set_r(arena, p, new);
            }
        }
    }
}

/// ```text
///      X               Y
///     / \             / \
///   S1   Y    ->     X   S3
///       / \         / \
///     S2   S3     S1   S2
/// ```
pub fn rotate_left<K, V>(arena: &mut Arena<K, V>, root: &mut Option<u32>, x: u32) {
    let y = get_r(arena, x).expect("left rotation pivot has a right child");
    let s2 = get_l(arena, y);

    set_r(arena, x, s2);
    if let Some(s2) = s2 {
        set_p(arena, s2, Some(x));
    }

    let xp = get_p(arena, x);
    set_p(arena, y, xp);
    relink(arena, root, xp, x, Some(y));

    set_l(arena, y, Some(x));
    set_p(arena, x, Some(y));
}

/// Mirror of [`rotate_left`].
pub fn rotate_right<K, V>(arena: &mut Arena<K, V>, root: &mut Option<u32>, x: u32) {
    let y = get_l(arena, x).expect("right rotation pivot has a left child");
    let s2 = get_r(arena, y);

    set_l(arena, x, s2);
    if let Some(s2) = s2 {
        set_p(arena, s2, Some(x));
    }

    let xp = get_p(arena, x);
    set_p(arena, y, xp);
    relink(arena, root, xp, x, Some(y));

    set_r(arena, y, Some(x));
    set_p(arena, x, Some(y));
}

/// Restores the red-black properties after `x` was linked in as a red leaf.
pub fn insert_fixup<K, V>(arena: &mut Arena<K, V>, root: &mut Option<u32>, mut x: u32) {
    while let Some(p) = get_p(arena, x) {
        if arena[p].is_black() {
            break;
        }
        let g = get_p(arena, p).expect("a red node is never the root");

        if get_l(arena, g) == Some(p) {
            let red_uncle = get_r(arena, g).filter(|&u| arena[u].is_red());
            if let Some(u) = red_uncle {
                paint(arena, p, Color::Black);
                paint(arena, u, Color::Black);
                paint(arena, g, Color::Red);
                x = g;
                continue;
            }
            if get_r(arena, p) == Some(x) {
                x = p;
                rotate_left(arena, root, x);
            }
            let p = get_p(arena, x).expect("parent survives rotation");
            let g = get_p(arena, p).expect("grandparent survives rotation");
            paint(arena, p, Color::Black);
            paint(arena, g, Color::Red);
            rotate_right(arena, root, g);
        } else {
            let red_uncle = get_l(arena, g).filter(|&u| arena[u].is_red());
            if let Some(u) = red_uncle {
                paint(arena, p, Color::Black);
                paint(arena, u, Color::Black);
                paint(arena, g, Color::Red);
                x = g;
                continue;
            }
            if get_l(arena, p) == Some(x) {
                x = p;
                rotate_right(arena, root, x);
            }
            let p = get_p(arena, x).expect("parent survives rotation");
            let g = get_p(arena, p).expect("grandparent survives rotation");
            paint(arena, p, Color::Black);
            paint(arena, g, Color::Red);
            rotate_left(arena, root, g);
        }
    }

    if let Some(r) = *root {
        paint(arena, r, Color::Black);
    }
}

/// Unlinks `z` and returns the slot that was physically spliced out.
///
/// When `z` has two children its in-order successor is spliced out instead,
/// after the two nodes exchange key/value payloads. `z`'s slot then holds the
/// successor's entry and the returned slot holds `z`'s old entry. The caller
/// releases the returned slot.
pub fn remove<K, V>(arena: &mut Arena<K, V>, root: &mut Option<u32>, z: u32) -> u32 {
    let y = match (get_l(arena, z), get_r(arena, z)) {
        (Some(_), Some(r)) => first(arena, Some(r)).expect("right subtree is non-empty"),
        _ => z,
    };

    // y has at most one child; x takes y's place and may be None.
    let x = get_l(arena, y).or(get_r(arena, y));
    let x_parent = get_p(arena, y);
    if let Some(x) = x {
        set_p(arena, x, x_parent);
    }
    relink(arena, root, x_parent, y, x);

    if y != z {
        arena.swap_entries(y, z);
    }

    if arena[y].is_black() {
        remove_fixup(arena, root, x, x_parent);
    }

    set_p(arena, y, None);
    set_l(arena, y, None);
    set_r(arena, y, None);
    y
}

/// Restores the black height after a black node was spliced out.
///
/// `x` is the node that took its place and `parent` is x's parent. The
/// parent is tracked separately because `x` may be absent.
fn remove_fixup<K, V>(
    arena: &mut Arena<K, V>,
    root: &mut Option<u32>,
    mut x: Option<u32>,
    mut parent: Option<u32>,
) {
    while x != *root && is_black(arena, x) {
        let p = parent.expect("a non-root position has a parent");

        if get_l(arena, p) == x {
            let mut w = get_r(arena, p).expect("black height guarantees a sibling");
            if arena[w].is_red() {
                paint(arena, w, Color::Black);
                paint(arena, p, Color::Red);
                rotate_left(arena, root, p);
                w = get_r(arena, p).expect("black height guarantees a sibling");
            }

            if is_black(arena, get_l(arena, w)) && is_black(arena, get_r(arena, w)) {
                paint(arena, w, Color::Red);
                x = Some(p);
                parent = get_p(arena, p);
            } else {
                if is_black(arena, get_r(arena, w)) {
                    let wl = get_l(arena, w).expect("sibling has a red left child");
                    paint(arena, wl, Color::Black);
                    paint(arena, w, Color::Red);
                    rotate_right(arena, root, w);
                    w = get_r(arena, p).expect("black height guarantees a sibling");
                }
                let color = arena[p].color;
                paint(arena, w, color);
                paint(arena, p, Color::Black);
                let wr = get_r(arena, w).expect("sibling has a red right child");
                paint(arena, wr, Color::Black);
                rotate_left(arena, root, p);
                x = *root;
                parent = None;
            }
        } else {
            let mut w = get_l(arena, p).expect("black height guarantees a sibling");
            if arena[w].is_red() {
                paint(arena, w, Color::Black);
                paint(arena, p, Color::Red);
                rotate_right(arena, root, p);
                w = get_l(arena, p).expect("black height guarantees a sibling");
            }

            if is_black(arena, get_l(arena, w)) && is_black(arena, get_r(arena, w)) {
                paint(arena, w, Color::Red);
                x = Some(p);
                parent = get_p(arena, p);
            } else {
                if is_black(arena, get_l(arena, w)) {
                    let wr = get_r(arena, w).expect("sibling has a red right child");
                    paint(arena, wr, Color::Black);
                    paint(arena, w, Color::Red);
                    rotate_left(arena, root, w);
                    w = get_l(arena, p).expect("black height guarantees a sibling");
                }
                let color = arena[p].color;
                paint(arena, w, color);
                paint(arena, p, Color::Black);
                let wl = get_l(arena, w).expect("sibling has a red left child");
                paint(arena, wl, Color::Black);
                rotate_right(arena, root, p);
                x = *root;
                parent = None;
            }
        }
    }

    if let Some(x) = x {
        paint(arena, x, Color::Black);
    }
}

/// Conventional height; an empty tree has height 0.
pub fn height<K, V>(arena: &Arena<K, V>, node: Option<u32>) -> usize {
    node.map_or(0, |i| {
        1 + height(arena, get_l(arena, i)).max(height(arena, get_r(arena, i)))
    })
}

/// Black nodes on the leftmost path below and including `node`.
pub fn black_height<K, V>(arena: &Arena<K, V>, node: Option<u32>) -> usize {
    let mut count = 0;
    let mut curr = node;
    while let Some(i) = curr {
        if arena[i].is_black() {
            count += 1;
        }
        curr = get_l(arena, i);
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RbNode;

    /// Builds `2(1, 3)` by hand.
    fn three() -> (Arena<i32, ()>, Option<u32>, [u32; 3]) {
        let mut arena = Arena::new();
        let one = arena.alloc(RbNode::new(1, (), None)).index();
        let two = arena.alloc(RbNode::new(2, (), None)).index();
        let three = arena.alloc(RbNode::new(3, (), None)).index();
        arena[two].l = Some(one);
        arena[two].r = Some(three);
        arena[one].p = Some(two);
        arena[three].p = Some(two);
        (arena, Some(two), [one, two, three])
    }

    #[test]
    fn rotate_left_moves_root() {
        let (mut arena, mut root, [one, two, three]) = three();
        rotate_left(&mut arena, &mut root, two);
        assert_eq!(root, Some(three));
        assert_eq!(arena[three].l, Some(two));
        assert_eq!(arena[two].p, Some(three));
        assert_eq!(arena[two].l, Some(one));
        assert_eq!(arena[two].r, None);
        assert_eq!(arena[three].p, None);
    }

    #[test]
    fn rotate_right_then_left_restores_shape() {
        let (mut arena, mut root, [one, two, three]) = three();
        rotate_right(&mut arena, &mut root, two);
        assert_eq!(root, Some(one));
        rotate_left(&mut arena, &mut root, one);
        assert_eq!(root, Some(two));
        assert_eq!(arena[two].l, Some(one));
        assert_eq!(arena[two].r, Some(three));
        assert_eq!(arena[one].p, Some(two));
        assert_eq!(arena[three].p, Some(two));
    }

    #[test]
    fn navigation_walks_in_order() {
        let (arena, root, [one, two, three]) = three();
        assert_eq!(first(&arena, root), Some(one));
        assert_eq!(last(&arena, root), Some(three));
        assert_eq!(next(&arena, one), Some(two));
        assert_eq!(next(&arena, two), Some(three));
        assert_eq!(next(&arena, three), None);
        assert_eq!(prev(&arena, three), Some(two));
        assert_eq!(prev(&arena, one), None);
        assert_eq!(height(&arena, root), 2);
        assert_eq!(first::<i32, ()>(&arena, None), None);
    }
}
