use std::fmt::{self, Debug, Display};

use super::{node::Node, OrderedTree};

impl<E> OrderedTree<E> {
    /// Returns the keys of all nodes grouped by their depth.
    ///
    /// The first group only contains the root node, the last group contains the leaves.
    /// Inside a group, the nodes are ordered from left to right.
    pub fn levels(&self) -> Vec<Vec<&[E]>> {
        let mut result = Vec::with_capacity(self.height);
        let mut current: Vec<&Node<E>> = vec![&self.root];
        while !current.is_empty() {
            result.push(current.iter().map(|n| n.keys()).collect());
            current = current.into_iter().flat_map(|n| n.children()).collect();
        }
        result
    }
}

/// Prints one line per level with the keys of each node.
impl<E> Display for OrderedTree<E>
where
    E: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in self.levels() {
            for keys in level {
                write!(f, "{:?} ", keys)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
