//! Preorder traversal with depth tracking

use super::arena::{NodeId, OrderedTree};

/// Preorder iterator over an [`OrderedTree`]
///
/// Visits a node, then its subtree left to right. When a subtree is exhausted
/// the walk resumes at the nearest right sibling of an ancestor. Each item
/// carries the node depth (`level`), the root being level 0.
pub struct Preorder<'a, T> {
    tree: &'a OrderedTree<T>,
    next: Option<NodeId>,
    level: usize,
}

impl<'a, T> Preorder<'a, T> {
    pub(super) fn new(tree: &'a OrderedTree<T>) -> Self {
        Self {
            tree,
            next: Some(tree.root()),
            level: 0,
        }
    }

    /// Depth of the node that the next call to `next` will yield
    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }

    fn advance_from(&mut self, node: NodeId) {
        if let Some(child) = self.tree.left_child(node) {
            self.level += 1;
            self.next = Some(child);
            return;
        }

        let mut current = node;
        loop {
            if let Some(sibling) = self.tree.right_sibling(current) {
                self.next = Some(sibling);
                return;
            }
            match self.tree.parent(current) {
                Some(parent) => {
                    self.level -= 1;
                    current = parent;
                }
                None => {
                    self.next = None;
                    return;
                }
            }
        }
    }
}

impl<T> Iterator for Preorder<'_, T> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        let level = self.level;
        self.advance_from(node);
        Some((node, level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //        r
    //      / | \
    //     a  d  e
    //    / \     \
    //   b   c     f
    fn sample_tree() -> OrderedTree<char> {
        let mut tree = OrderedTree::new('r');
        let root = tree.root();
        let a = tree.insert_left_child(root, 'a');
        let d = tree.insert_right_sibling(a, 'd').unwrap();
        let e = tree.insert_right_sibling(d, 'e').unwrap();
        let b = tree.insert_left_child(a, 'b');
        tree.insert_right_sibling(b, 'c').unwrap();
        tree.insert_left_child(e, 'f');
        tree
    }

    #[test]
    fn preorder_visits_in_order() {
        let tree = sample_tree();
        let order: String = tree.preorder().map(|(id, _)| *tree.get(id)).collect();
        assert_eq!(order, "rabcdef");
    }

    #[test]
    fn preorder_tracks_levels() {
        let tree = sample_tree();
        let levels: Vec<(char, usize)> = tree
            .preorder()
            .map(|(id, level)| (*tree.get(id), level))
            .collect();
        assert_eq!(
            levels,
            vec![
                ('r', 0),
                ('a', 1),
                ('b', 2),
                ('c', 2),
                ('d', 1),
                ('e', 1),
                ('f', 2)
            ]
        );
    }

    #[test]
    fn preorder_single_root() {
        let tree = OrderedTree::new(1_u8);
        let visited: Vec<_> = tree.preorder().collect();
        assert_eq!(visited, vec![(tree.root(), 0)]);
    }

    #[test]
    fn preorder_visits_every_node_once() {
        let tree = sample_tree();
        assert_eq!(tree.preorder().count(), tree.len());
    }
}
