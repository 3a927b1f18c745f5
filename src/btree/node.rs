/// A single node of an [`OrderedTree`](crate::OrderedTree).
///
/// The keys are sorted in ascending order.
/// Internal nodes own exactly one child more than they have keys, leaf nodes have no children.
#[derive(Debug, Clone)]
pub struct Node<E> {
    pub(crate) keys: Vec<E>,
    pub(crate) children: Vec<Node<E>>,
    pub(crate) is_leaf: bool,
}

impl<E> Node<E> {
    pub(crate) fn new_leaf() -> Node<E> {
        Node {
            keys: Vec::new(),
            children: Vec::new(),
            is_leaf: true,
        }
    }

    /// Creates an internal node with no keys that owns `child` as its only child.
    pub(crate) fn new_internal(child: Node<E>) -> Node<E> {
        Node {
            keys: Vec::new(),
            children: vec![child],
            is_leaf: false,
        }
    }

    /// Creates a node with the same leaf status that takes over the given keys and children.
    pub(crate) fn sibling(is_leaf: bool, keys: Vec<E>, children: Vec<Node<E>>) -> Node<E> {
        Node {
            keys,
            children,
            is_leaf,
        }
    }

    /// The sorted keys of this node.
    pub fn keys(&self) -> &[E] {
        &self.keys
    }

    /// The child nodes, empty for a leaf.
    pub fn children(&self) -> &[Node<E>] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// Number of keys in this node.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub(crate) fn is_full(&self, min_degree: usize) -> bool {
        self.keys.len() == max_keys(min_degree)
    }
}

impl<E> Node<E>
where
    E: Ord,
{
    /// Index of the first key that is not less than `element`.
    ///
    /// If the key at this index equals `element` it is stored in this node,
    /// otherwise the index is the child whose range brackets `element`.
    pub(crate) fn bracket(&self, element: &E) -> usize {
        self.keys.partition_point(|k| k < element)
    }
}

/// Maximum number of keys a node can hold for the given minimum degree.
pub(crate) fn max_keys(min_degree: usize) -> usize {
    2 * min_degree - 1
}

/// Minimum number of keys of a non-root node for the given minimum degree.
pub(crate) fn min_keys(min_degree: usize) -> usize {
    min_degree - 1
}
