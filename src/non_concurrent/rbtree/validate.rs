use super::{InvariantViolation, RBTree};

impl<K: Ord> RBTree<K> {
    /// Checks every structural property the tree is supposed to uphold:
    /// black root, no red node with a red parent, equal black-height on every
    /// path, strictly ascending keys, and parent links that mirror child links.
    ///
    /// Returns the black-height of the root (black nodes on any path down from
    /// the root, not counting the root itself).
    pub fn check_invariants(&self) -> Result<usize, InvariantViolation> {
        let Some(root) = self.root else {
            return match self.len() {
                0 => Ok(0),
                n => Err(InvariantViolation::SizeMismatch { expected: n, reachable: 0 }),
            };
        };
        if self.at(root).parent.is_some() {
            return Err(InvariantViolation::BrokenParentLink { node: root });
        }
        if self.at(root).color.is_red() {
            return Err(InvariantViolation::RedRoot);
        }

        // pre-order walk: checks that only need a node and its parent
        let mut visited = Vec::with_capacity(self.len());
        let mut stack = vec![(root, None, None)];
        while let Some((id, lower, upper)) = stack.pop() {
            if visited.len() == self.len() {
                // more nodes than the arena holds means some node is linked twice
                return Err(InvariantViolation::SizeMismatch {
                    expected: self.len(),
                    reachable: visited.len() + 1,
                });
            }
            visited.push(id);
            let node = self.at(id);

            let in_order = lower.is_none_or(|lo: &K| *lo < node.key)
                && upper.is_none_or(|hi: &K| node.key < *hi);
            if !in_order {
                return Err(InvariantViolation::OutOfOrder { node: id });
            }

            for (child, lower, upper) in [
                (node.left, lower, Some(&node.key)),
                (node.right, Some(&node.key), upper),
            ] {
                let Some(child) = child else { continue };
                let child_node = self.at(child);
                if child_node.parent != Some(id) {
                    return Err(InvariantViolation::BrokenParentLink { node: child });
                }
                if node.color.is_red() && child_node.color.is_red() {
                    return Err(InvariantViolation::RedRedEdge { node: child });
                }
                stack.push((child, lower, upper));
            }
        }
        if visited.len() != self.len() {
            return Err(InvariantViolation::SizeMismatch {
                expected: self.len(),
                reachable: visited.len(),
            });
        }

        // reversed pre-order sees every child before its parent.
        // heights[i]: black nodes from node i (inclusive) down to any leaf
        let mut heights = vec![0; self.len()];
        for &id in visited.iter().rev() {
            let node = self.at(id);
            let left = node.left.map_or(0, |c| heights[c.index()]);
            let right = node.right.map_or(0, |c| heights[c.index()]);
            if left != right {
                return Err(InvariantViolation::BlackHeightMismatch { node: id, left, right });
            }
            heights[id.index()] = left + usize::from(node.color.is_black());
        }
        Ok(heights[root.index()] - 1)
    }
}
