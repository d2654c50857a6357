use log::trace;

use super::{Color, NodeId, RBTree};

impl<K> RBTree<K> {
    /// Restores the red-black properties after `node` was linked in as a red leaf.
    ///
    /// The only possible violation is `node` and its parent both being red.
    /// Each round either pushes that violation two levels up (red uncle) or
    /// removes it with one or two rotations (black uncle).
    pub(super) fn fix_after_insert(&mut self, mut node: NodeId) {
        loop {
            let Some(parent) = self.at(node).parent else {
                // `node` is the root
                self.at_mut(node).color = Color::Black;
                return;
            };
            if self.at(parent).color.is_black() {
                return;
            }
            let Some(grandparent) = self.at(parent).parent else {
                // a red root: recoloring it is all that's needed
                self.at_mut(parent).color = Color::Black;
                return;
            };

            let parent_is_left = self.at(grandparent).left == Some(parent);
            let uncle = if parent_is_left {
                self.at(grandparent).right
            } else {
                self.at(grandparent).left
            };

            if let Some(uncle) = uncle.filter(|&u| self.at(u).color.is_red()) {
                trace!("red uncle {uncle}: recoloring, continuing from {grandparent}");
                self.at_mut(parent).color = Color::Black;
                self.at_mut(uncle).color = Color::Black;
                self.at_mut(grandparent).color = Color::Red;
                node = grandparent;
                continue;
            }

            // black (or missing) uncle. an inner grandchild first gets turned into an outer one
            let node_is_left = self.at(parent).left == Some(node);
            let parent = if node_is_left != parent_is_left {
                trace!("inner grandchild {node}: rotating it above {parent}");
                self.rotate_unchecked(node, parent);
                node
            } else {
                parent
            };

            trace!("outer grandchild: rotating {parent} above {grandparent}");
            self.at_mut(parent).color = Color::Black;
            self.at_mut(grandparent).color = Color::Red;
            self.rotate_unchecked(parent, grandparent);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::init_test_logging;

    fn colors_in_level_order(tree: &RBTree<i32>) -> Vec<(i32, Color)> {
        tree.level_order().map(|n| (*n.key(), n.color())).collect()
    }

    #[test]
    fn left_left_rotates_once() {
        init_test_logging();
        let mut tree = RBTree::new();
        for k in [3, 2, 1] {
            tree.insert(k).unwrap();
        }
        assert_eq!(
            colors_in_level_order(&tree),
            [(2, Color::Black), (1, Color::Red), (3, Color::Red)]
        );
    }

    #[test]
    fn right_right_rotates_once() {
        let mut tree = RBTree::new();
        for k in [1, 2, 3] {
            tree.insert(k).unwrap();
        }
        assert_eq!(
            colors_in_level_order(&tree),
            [(2, Color::Black), (1, Color::Red), (3, Color::Red)]
        );
    }

    #[test]
    fn inner_grandchildren_rotate_twice() {
        init_test_logging();
        for order in [[3, 1, 2], [1, 3, 2]] {
            let mut tree = RBTree::new();
            for k in order {
                tree.insert(k).unwrap();
            }
            assert_eq!(
                colors_in_level_order(&tree),
                [(2, Color::Black), (1, Color::Red), (3, Color::Red)],
                "insertion order {order:?}"
            );
        }
    }

    #[test]
    fn red_uncle_recolors_without_rotating() {
        init_test_logging();
        let mut tree = RBTree::new();
        for k in [7, 14, 18, 23] {
            tree.insert(k).unwrap();
        }
        // 23 lands under red 18 with red uncle 7: pure recolor, then the root is forced black
        assert_eq!(
            colors_in_level_order(&tree),
            [(14, Color::Black), (7, Color::Black), (18, Color::Black), (23, Color::Red)]
        );
    }

    #[test]
    fn recoloring_propagates_upwards() {
        init_test_logging();
        let mut tree = RBTree::new();
        for k in 1..=7 {
            tree.insert(k).unwrap();
        }
        assert_eq!(
            colors_in_level_order(&tree),
            [
                (2, Color::Black),
                (1, Color::Black),
                (4, Color::Red),
                (3, Color::Black),
                (6, Color::Black),
                (5, Color::Red),
                (7, Color::Red),
            ]
        );
        assert_eq!(tree.check_invariants(), Ok(1));
    }
}
