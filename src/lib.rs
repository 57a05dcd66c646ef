//! An ordered map and set based on a left-leaning red-black tree.
//!
//! Every path from the root of the tree to an empty subtree has the same number of black links,
//! red links lean left, and no path has two red links in a row. Together these keep the height
//! of a tree of `n` entries at most `2 * log2(n + 1)`, so searching, inserting and removing all
//! take logarithmic time.
//!
//! # Examples
//!
//! ```
//! let mut map = llrb::Map::new();
//!
//! for (i, word) in "the quick brown fox".split(' ').enumerate() {
//!     map.insert(word, i);
//! }
//!
//! assert_eq!(map.keys().cloned().collect::<Vec<_>>(), ["brown", "fox", "quick", "the"]);
//! assert_eq!(map.remove(&"quick"), Some(("quick", 1)));
//! assert!(map.check().is_ok());
//! ```

#![deny(missing_docs)]

mod error;
mod node;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;
#[cfg(feature = "quickcheck")]
mod quickcheck;

pub mod map;
pub mod set;

pub use error::{Error, Result};
pub use map::Map;
pub use node::Stats;
pub use set::Set;
