use std::collections::VecDeque;
use std::fmt::{Debug, Write};

use crate::tree::RbTree;

impl<K: Debug, V: Debug, C> RbTree<K, V, C> {
    /// Breadth-first dump, one node per line.
    ///
    /// Nodes are numbered heap-style: the root is 1 and the children of node
    /// `n` are `2n` and `2n + 1`. Missing children are listed as sentinels
    /// when `show_sentinels` is set.
    ///
    /// ```text
    /// [1] [BLACK] 2 : "two"                2
    /// [2] [BLACK] 1 : "one"               / \
    /// [3] [BLACK] 4 : "four"             1   4
    /// [6] [ RED ] 3 : "three"               / \
    /// [7] [ RED ] 5 : "five"               3   5
    /// ```
    pub fn show(&self, show_sentinels: bool) -> String {
        let arena = self.arena();
        let width = (1u128 << self.height().min(127)).to_string().len();
        let mut out = String::new();
        let mut queue = VecDeque::from([(1u128, self.root_index())]);
        while let Some((num, node)) = queue.pop_front() {
            match node {
                Some(i) => {
                    let n = &arena[i];
                    let _ = writeln!(
                        out,
                        "[{num:>width$}] [{:^5}] {:?} : {:?}",
                        n.color, n.k, n.v
                    );
                    queue.push_back((2 * num, n.l));
                    queue.push_back((2 * num + 1, n.r));
                }
                None if show_sentinels => {
                    let _ = writeln!(out, "[{num:>width$}] [BLACK] None (sentinel node)");
                }
                None => {}
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::compare::IntoOk;
    use crate::tree::RbTree;

    #[test]
    fn show_numbers_nodes_breadth_first() {
        let mut tree = RbTree::new();
        for (k, v) in [(2, "two"), (1, "one"), (4, "four"), (3, "three"), (5, "five")] {
            tree.insert(k, v).into_ok();
        }
        let expected = concat!(
            "[1] [BLACK] 2 : \"two\"\n",
            "[2] [BLACK] 1 : \"one\"\n",
            "[3] [BLACK] 4 : \"four\"\n",
            "[6] [ RED ] 3 : \"three\"\n",
            "[7] [ RED ] 5 : \"five\"\n",
        );
        assert_eq!(tree.show(false), expected);
    }

    #[test]
    fn show_lists_sentinels_on_request() {
        let mut tree = RbTree::new();
        tree.insert(7, ()).into_ok();
        let expected = concat!(
            "[1] [BLACK] 7 : ()\n",
            "[2] [BLACK] None (sentinel node)\n",
            "[3] [BLACK] None (sentinel node)\n",
        );
        assert_eq!(tree.show(true), expected);
        assert_eq!(RbTree::<i32, ()>::new().show(false), "");
    }
}
