use std::fmt::{self, Debug, Display};

use crate::{error::Result, BtreeConfig, Error};
use log::{debug, trace};

use node::{min_keys, Node};

mod levels;
pub(crate) mod node;

/// In-memory ordered set implemented as a B-tree.
///
/// Elements only need to implement [`Ord`].
/// Inserting an element that is already contained in the tree has no effect.
/// Deleting elements is explicitly not implemented.
///
/// Every node except the root holds between `t-1` and `2t-1` elements, where `t` is the
/// configured minimum degree. Full nodes are split on the way down during insertion,
/// so the tree only grows in height when the root itself is split.
pub struct OrderedTree<E> {
    root: Node<E>,
    config: BtreeConfig,
    nr_elements: usize,
    height: usize,
}

impl<E> OrderedTree<E>
where
    E: Ord,
{
    /// Create an empty tree with the given minimum degree.
    ///
    /// Fails if the minimum degree is less than 2.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ordered_btree::{Error, OrderedTree};
    ///
    /// fn main() -> std::result::Result<(), Error> {
    ///     let mut t = OrderedTree::new(3)?;
    ///     t.insert_all([5, 1, 3]);
    ///     assert!(t.contains(&3));
    ///     assert!(OrderedTree::<u32>::new(1).is_err());
    ///     Ok(())
    /// }
    /// ```
    pub fn new(min_degree: i64) -> Result<OrderedTree<E>> {
        if min_degree <= 1 {
            return Err(Error::MinDegreeTooSmall(min_degree));
        }
        let min_degree: usize = min_degree
            .try_into()
            .map_err(|_| Error::MinDegreeTooLarge(min_degree as u64))?;
        OrderedTree::with_config(BtreeConfig::default().min_degree(min_degree))
    }

    /// Create an empty tree with the given configuration.
    pub fn with_config(config: BtreeConfig) -> Result<OrderedTree<E>> {
        let min_degree = config.get_min_degree();
        if min_degree < 2 {
            return Err(Error::MinDegreeTooSmall(min_degree as i64));
        } else if min_degree > usize::MAX / 2 {
            return Err(Error::MinDegreeTooLarge(min_degree as u64));
        }

        // Always start with an empty leaf as root node
        Ok(OrderedTree {
            root: Node::new_leaf(),
            config,
            nr_elements: 0,
            height: 1,
        })
    }

    /// Searches for an element and returns the node and the position inside the node where it is stored.
    ///
    /// Returns `None` if the element is not part of the tree.
    pub fn find(&self, element: &E) -> Option<Location<'_, E>> {
        let mut node = &self.root;
        loop {
            let i = node.bracket(element);
            if i < node.keys.len() && node.keys[i] == *element {
                return Some(Location { node, index: i });
            }
            if node.is_leaf {
                return None;
            }
            // search in the child whose range brackets the element
            node = &node.children[i];
        }
    }

    /// Returns whether the tree contains the given element.
    pub fn contains(&self, element: &E) -> bool {
        self.find(element).is_some()
    }

    /// Insert a new element into the tree.
    ///
    /// Returns `false` and leaves the tree untouched if the element already exists.
    pub fn insert(&mut self, element: E) -> bool {
        if self.find(&element).is_some() {
            return false;
        }

        let min_degree = self.min_degree();
        if self.root.is_full(min_degree) {
            // Create a new root node with the old root as only child and split the old root
            let old_root = std::mem::replace(&mut self.root, Node::new_leaf());
            self.root = Node::new_internal(old_root);
            split_child(&mut self.root, 0, min_degree);
            self.height += 1;
            debug!("Split full root node, tree height is now {}", self.height);
        }
        insert_non_full(&mut self.root, element, min_degree);
        self.nr_elements += 1;
        true
    }

    /// Insert all elements in the given order.
    ///
    /// This is the same as calling [`insert`](Self::insert) for each element.
    pub fn insert_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = E>,
    {
        for e in elements {
            self.insert(e);
        }
    }
}

impl<E> OrderedTree<E> {
    /// Returns the number of distinct elements.
    pub fn len(&self) -> usize {
        self.nr_elements
    }

    /// Returns true if the tree does not contain any elements.
    pub fn is_empty(&self) -> bool {
        self.nr_elements == 0
    }

    /// Number of node levels, a tree with only a root node has height 1.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn min_degree(&self) -> usize {
        self.config.get_min_degree()
    }

    pub fn config(&self) -> &BtreeConfig {
        &self.config
    }

    pub fn root(&self) -> &Node<E> {
        &self.root
    }
}

impl<E> Extend<E> for OrderedTree<E>
where
    E: Ord,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<E> Debug for OrderedTree<E>
where
    E: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("min_degree", &self.min_degree())
            .field("len", &self.nr_elements)
            .field("height", &self.height)
            .field("root", &self.root)
            .finish()
    }
}

/// Inserts an element into a node that is known to have space left.
///
/// Full children are split before descending into them, so the recursion never reaches a full node.
fn insert_non_full<E>(node: &mut Node<E>, element: E, min_degree: usize)
where
    E: Ord,
{
    debug_assert!(
        !node.is_full(min_degree),
        "attempted to insert into a full node"
    );

    let mut i = node.bracket(&element);
    if node.is_leaf {
        // Moves the larger keys one position to the right
        node.keys.insert(i, element);
    } else {
        if node.children[i].is_full(min_degree) {
            split_child(node, i, min_degree);
            // The promoted median now separates the two halves
            if node.keys[i] < element {
                i += 1;
            }
        }
        insert_non_full(&mut node.children[i], element, min_degree);
    }
}

/// Splits the full child at `child_index` into two nodes with `t-1` keys each
/// and moves its median key into the parent.
fn split_child<E>(parent: &mut Node<E>, child_index: usize, min_degree: usize) {
    let child = &mut parent.children[child_index];
    debug_assert!(child.is_full(min_degree), "only full nodes can be split");

    let upper_keys = child.keys.split_off(min_degree);
    let upper_children = if child.is_leaf {
        Vec::new()
    } else {
        child.children.split_off(min_degree)
    };
    let median = child.keys.remove(min_degree - 1);
    debug_assert_eq!(min_keys(min_degree), child.keys.len());
    let sibling = Node::sibling(child.is_leaf, upper_keys, upper_children);

    parent.keys.insert(child_index, median);
    parent.children.insert(child_index + 1, sibling);

    trace!(
        "Split child {} into two nodes with {} keys",
        child_index,
        min_degree - 1
    );
}

/// Position of an element inside the tree: the node that stores it and its index in the node keys.
#[derive(Debug)]
pub struct Location<'a, E> {
    node: &'a Node<E>,
    index: usize,
}

impl<'a, E> Location<'a, E> {
    pub fn node(&self) -> &'a Node<E> {
        self.node
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The element stored at this location.
    pub fn key(&self) -> &'a E {
        &self.node.keys[self.index]
    }
}

impl<'a, E> Clone for Location<'a, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, E> Copy for Location<'a, E> {}

impl<'a, E> Display for Location<'a, E>
where
    E: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{:?}, {}>", self.node.keys, self.index)
    }
}
