//! Arena storage for [`OrderedTree`]

use super::preorder::Preorder;

/// Handle to a node inside an [`OrderedTree`]
///
/// Handles are only meaningful for the tree that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    parent: Option<NodeId>,
    first_child: Option<NodeId>,
    next_sibling: Option<NodeId>,
}

impl<T> Node<T> {
    const fn new(value: T, parent: Option<NodeId>, next_sibling: Option<NodeId>) -> Self {
        Self {
            value,
            parent,
            first_child: None,
            next_sibling,
        }
    }
}

/// Multiway tree with ordered children
///
/// Every node has a value, a link to its leftmost child, a link to its right
/// sibling and a link to its parent. The tree always has a root.
///
/// Cloning produces an independent deep copy.
///
/// # Examples
/// ```
/// use letters_solver::tree::OrderedTree;
///
/// let mut tree = OrderedTree::new('r');
/// let root = tree.root();
/// let b = tree.insert_left_child(root, 'b');
/// let a = tree.insert_left_child(root, 'a');
/// tree.insert_right_sibling(b, 'c').unwrap();
///
/// let children: Vec<char> = tree.children(root).map(|id| *tree.get(id)).collect();
/// assert_eq!(children, vec!['a', 'b', 'c']);
/// assert_eq!(tree.right_sibling(a), Some(b));
/// ```
#[derive(Debug, Clone)]
pub struct OrderedTree<T> {
    nodes: Vec<Node<T>>,
}

impl<T> OrderedTree<T> {
    /// Create a tree holding only a root
    #[must_use]
    pub fn new(root_value: T) -> Self {
        Self {
            nodes: vec![Node::new(root_value, None, None)],
        }
    }

    /// Drop every node and start over with a fresh root
    pub fn clear(&mut self, root_value: T) {
        self.nodes.clear();
        self.nodes.push(Node::new(root_value, None, None));
    }

    #[inline]
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes, root included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the root has no children
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes[0].first_child.is_none()
    }

    /// Value stored at `id`
    ///
    /// # Panics
    /// Panics if `id` does not belong to this tree.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &T {
        &self.nodes[id.0].value
    }

    /// Mutable value stored at `id`
    ///
    /// # Panics
    /// Panics if `id` does not belong to this tree.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.nodes[id.0].value
    }

    #[inline]
    #[must_use]
    pub fn left_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].first_child
    }

    #[inline]
    #[must_use]
    pub fn right_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].next_sibling
    }

    #[inline]
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Insert `value` as the leftmost child of `parent`
    ///
    /// Existing children are kept, shifted one place to the right.
    pub fn insert_left_child(&mut self, parent: NodeId, value: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        let old_first = self.nodes[parent.0].first_child;
        self.nodes.push(Node::new(value, Some(parent), old_first));
        self.nodes[parent.0].first_child = Some(id);
        id
    }

    /// Insert `value` immediately to the right of `node`
    ///
    /// Returns `None` when `node` is the root, which cannot have siblings.
    pub fn insert_right_sibling(&mut self, node: NodeId, value: T) -> Option<NodeId> {
        let parent = self.nodes[node.0].parent?;
        let id = NodeId(self.nodes.len());
        let old_next = self.nodes[node.0].next_sibling;
        self.nodes.push(Node::new(value, Some(parent), old_next));
        self.nodes[node.0].next_sibling = Some(id);
        Some(id)
    }

    /// Children of `id`, left to right
    #[must_use]
    pub fn children(&self, id: NodeId) -> Children<'_, T> {
        Children {
            tree: self,
            next: self.left_child(id),
        }
    }

    /// Every value in the tree in arena order, root first
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.nodes.iter().map(|node| &node.value)
    }

    /// Preorder walk from the root, yielding each node with its depth
    #[must_use]
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder::new(self)
    }
}

/// Iterator over the children of a node
pub struct Children<'a, T> {
    tree: &'a OrderedTree<T>,
    next: Option<NodeId>,
}

impl<T> Iterator for Children<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.right_sibling(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child_values(tree: &OrderedTree<u32>, id: NodeId) -> Vec<u32> {
        tree.children(id).map(|c| *tree.get(c)).collect()
    }

    #[test]
    fn new_tree_has_only_root() {
        let tree = OrderedTree::new(7_u32);
        assert_eq!(tree.len(), 1);
        assert!(tree.is_empty());
        assert_eq!(*tree.get(tree.root()), 7);
        assert_eq!(tree.parent(tree.root()), None);
        assert_eq!(tree.left_child(tree.root()), None);
        assert_eq!(tree.right_sibling(tree.root()), None);
    }

    #[test]
    fn insert_left_child_prepends() {
        let mut tree = OrderedTree::new(0_u32);
        let root = tree.root();
        tree.insert_left_child(root, 3);
        tree.insert_left_child(root, 2);
        tree.insert_left_child(root, 1);

        assert_eq!(child_values(&tree, root), vec![1, 2, 3]);
        assert!(!tree.is_empty());
    }

    #[test]
    fn insert_right_sibling_keeps_order() {
        let mut tree = OrderedTree::new(0_u32);
        let root = tree.root();
        let first = tree.insert_left_child(root, 1);
        tree.insert_right_sibling(first, 3).unwrap();
        let second = tree.insert_right_sibling(first, 2).unwrap();

        assert_eq!(child_values(&tree, root), vec![1, 2, 3]);
        assert_eq!(tree.parent(second), Some(root));
    }

    #[test]
    fn root_cannot_have_siblings() {
        let mut tree = OrderedTree::new(0_u32);
        let root = tree.root();
        assert_eq!(tree.insert_right_sibling(root, 1), None);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn parent_links_are_set() {
        let mut tree = OrderedTree::new(0_u32);
        let root = tree.root();
        let a = tree.insert_left_child(root, 1);
        let b = tree.insert_left_child(a, 2);
        let c = tree.insert_right_sibling(b, 3).unwrap();

        assert_eq!(tree.parent(a), Some(root));
        assert_eq!(tree.parent(b), Some(a));
        assert_eq!(tree.parent(c), Some(a));
    }

    #[test]
    fn clone_is_deep() {
        let mut tree = OrderedTree::new(0_u32);
        let root = tree.root();
        let a = tree.insert_left_child(root, 1);

        let mut copy = tree.clone();
        *copy.get_mut(a) = 42;
        copy.insert_left_child(root, 9);

        assert_eq!(*tree.get(a), 1);
        assert_eq!(child_values(&tree, root), vec![1]);
        assert_eq!(child_values(&copy, root), vec![9, 42]);
    }

    #[test]
    fn clear_resets_to_single_root() {
        let mut tree = OrderedTree::new(0_u32);
        let root = tree.root();
        tree.insert_left_child(root, 1);
        tree.clear(5);

        assert_eq!(tree.len(), 1);
        assert_eq!(*tree.get(tree.root()), 5);
        assert!(tree.is_empty());
    }

    #[test]
    fn values_cover_every_node() {
        let mut tree = OrderedTree::new(0_u32);
        let root = tree.root();
        let a = tree.insert_left_child(root, 1);
        tree.insert_left_child(a, 2);
        tree.insert_right_sibling(a, 3).unwrap();

        let sum: u32 = tree.values().sum();
        assert_eq!(sum, 6);
    }

    #[test]
    fn deep_chain_drops_without_recursion() {
        let mut tree = OrderedTree::new(0_u32);
        let mut current = tree.root();
        for i in 0..200_000 {
            current = tree.insert_left_child(current, i);
        }
        assert_eq!(tree.len(), 200_001);
        drop(tree);
    }
}
