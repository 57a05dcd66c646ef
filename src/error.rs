//! Error type for empty-container queries and invariant checks.

use thiserror::Error;

/// A specialized `Result` type for map and set operations.
pub type Result<T> = ::std::result::Result<T, Error>;

/// An error reported by a map or set.
///
/// Insertion and removal never fail. `Empty` is returned by the `try_*` accessors; every other
/// variant is reported by [`Map::check`](struct.Map.html#method.check) and indicates a broken
/// tree, which is a bug in this crate or a comparator that is not a total order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The map or set contains no entries.
    #[error("map is empty")]
    Empty,
    /// A key is out of order relative to one of its ancestors.
    #[error("keys are out of order")]
    Unordered,
    /// A red link leans right.
    #[error("red link leans right")]
    RedRightLink,
    /// A red node has a red left child.
    #[error("two consecutive red links")]
    ConsecutiveReds,
    /// A node's subtrees contain different numbers of black nodes on their paths to an empty
    /// link.
    #[error("unbalanced black height: left {left}, right {right}")]
    UnbalancedBlacks {
        /// The black height of the left subtree.
        left: usize,
        /// The black height of the right subtree.
        right: usize,
    },
    /// The root is red.
    #[error("root is red")]
    RedRoot,
    /// The cached length disagrees with the number of reachable nodes.
    #[error("length mismatch: cached {cached}, counted {counted}")]
    LenMismatch {
        /// The length recorded by the map.
        cached: usize,
        /// The number of nodes reachable from the root.
        counted: usize,
    },
}
