use compare::Compare;
use crate::error::{Error, Result};
use super::{Link, Node, is_red};
use super::Color::Red;

/// Shape statistics gathered by a successful invariant check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// The number of nodes in the tree.
    pub len: usize,
    /// The number of nodes on the longest path from the root to an empty link.
    pub height: usize,
    /// The number of black nodes on every path from the root to an empty link.
    pub black_height: usize,
    /// The number of red nodes in the tree.
    pub reds: usize,
}

/// Verifies the left-leaning red-black invariants of the tree rooted at `link`, except for the
/// color of the root itself.
pub fn check<K, V, C>(link: &Link<K, V>, cmp: &C) -> Result<Stats> where C: Compare<K> {
    let mut stats = Stats::default();
    let black_height = check_subtree(link, cmp, None, None, 1, &mut stats)?;
    Ok(Stats { black_height: black_height, ..stats })
}

// Returns the black height of the subtree. Every key in it must lie strictly between `lo` and
// `hi`, when present.
fn check_subtree<K, V, C>(link: &Link<K, V>, cmp: &C, lo: Option<&K>, hi: Option<&K>,
                          depth: usize, stats: &mut Stats) -> Result<usize>
    where C: Compare<K> {

    let node: &Node<K, V> = match *link {
        None => return Ok(0),
        Some(ref node) => node,
    };

    if lo.map_or(false, |lo| cmp.compares_ge(lo, &node.key)) ||
       hi.map_or(false, |hi| cmp.compares_le(hi, &node.key)) {
        return Err(Error::Unordered);
    }

    if is_red(&node.right) { return Err(Error::RedRightLink); }

    if node.color == Red {
        stats.reds += 1;
        if is_red(&node.left) { return Err(Error::ConsecutiveReds); }
    }

    stats.len += 1;
    if depth > stats.height { stats.height = depth; }

    let left = check_subtree(&node.left, cmp, lo, Some(&node.key), depth + 1, stats)?;
    let right = check_subtree(&node.right, cmp, Some(&node.key), hi, depth + 1, stats)?;

    if left != right { return Err(Error::UnbalancedBlacks { left: left, right: right }); }

    Ok(if node.color == Red { left } else { left + 1 })
}
