mod btree;
mod error;

pub use btree::{node::Node, Location, OrderedTree};
pub use error::{Error, Result};
use serde_derive::{Deserialize, Serialize};

/// Configuration for an [`OrderedTree`].
///
/// Use the [`Default`] implementation and the builder methods to change the values.
/// The configuration is only validated when a tree is created from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BtreeConfig {
    min_degree: usize,
}

impl Default for BtreeConfig {
    fn default() -> Self {
        Self { min_degree: 32 }
    }
}

impl BtreeConfig {
    /// Set the minimum degree `t` of the B-tree.
    ///
    /// Every node except the root holds between `t-1` and `2t-1` keys.
    /// The minimum degree must be at least 2.
    pub fn min_degree(mut self, min_degree: usize) -> Self {
        self.min_degree = min_degree;
        self
    }

    pub fn get_min_degree(&self) -> usize {
        self.min_degree
    }
}
