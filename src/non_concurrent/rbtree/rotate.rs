use log::trace;

use super::{NodeId, RBTree, RotateError};

impl<K> RBTree<K> {
    /// Rotates `child` above `parent`.
    ///
    /// If `child` is the left child of `parent` this is a right rotation,
    /// otherwise a left rotation. `child` takes over `parent`'s position
    /// (possibly becoming the root) and the subtree between them changes sides.
    /// The in-order sequence of keys is preserved and no colors are touched, so
    /// calling this directly can leave the red-black properties broken.
    ///
    /// Fails with [`RotateError::InvalidRelationship`] without touching the tree
    /// unless `parent` is exactly `child`'s parent.
    pub fn rotate(&mut self, child: NodeId, parent: NodeId) -> Result<(), RotateError> {
        let related = self.contains_id(child)
            && self.contains_id(parent)
            && self.at(child).parent == Some(parent);
        if !related {
            return Err(RotateError::InvalidRelationship { child, parent });
        }
        self.rotate_unchecked(child, parent);
        Ok(())
    }

    /// Rotation without the relationship check.
    ///
    /// `parent` must be the parent of `child`.
    pub(super) fn rotate_unchecked(&mut self, child: NodeId, parent: NodeId) {
        debug_assert_eq!(self.at(child).parent, Some(parent));
        let grandparent = self.at(parent).parent;

        // the subtree that sits between `child` and `parent` in key order
        let inner = if self.at(parent).left == Some(child) {
            trace!("Rotating {child} right over {parent}");
            let inner = self.at(child).right;
            self.at_mut(parent).left = inner;
            self.at_mut(child).right = Some(parent);
            inner
        } else {
            trace!("Rotating {child} left over {parent}");
            let inner = self.at(child).left;
            self.at_mut(parent).right = inner;
            self.at_mut(child).left = Some(parent);
            inner
        };
        if let Some(inner) = inner {
            self.at_mut(inner).parent = Some(parent);
        }

        self.at_mut(parent).parent = Some(child);
        self.at_mut(child).parent = grandparent;
        match grandparent {
            None => self.root = Some(child),
            Some(g) => {
                let g = self.at_mut(g);
                if g.left == Some(parent) {
                    g.left = Some(child);
                } else {
                    g.right = Some(child);
                }
            }
        }
    }
}
