mod check;
mod iter;

#[cfg(test)]
mod test;

use compare::Compare;
use std::cmp::{self, Ordering};
use std::cmp::Ordering::*;
use std::mem::{replace, swap};
use self::Color::{Black, Red};

pub use self::check::{Stats, check};
pub use self::iter::Iter;

pub type Link<K, V> = Option<Box<Node<K, V>>>;

/// The color of a node, i.e. of the link from its parent to it.
///
/// An empty link counts as black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Glues the node to its parent, forming a 3-node or 4-node.
    Red,
    /// An ordinary link between 2-3-4 nodes.
    Black,
}

impl Color {
    fn flip(self) -> Self {
        match self {
            Red => Black,
            Black => Red,
        }
    }
}

#[derive(Clone)]
pub struct Node<K, V> {
    left: Link<K, V>,
    right: Link<K, V>,
    color: Color,
    key: K,
    value: V,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Node { left: None, right: None, color: Red, key: key, value: value }
    }

    pub fn color(&self) -> Color { self.color }

    pub fn key_value(&self) -> (&K, &V) { (&self.key, &self.value) }

    pub fn key_value_mut(&mut self) -> (&K, &mut V) { (&self.key, &mut self.value) }
}

fn is_red<K, V>(link: &Link<K, V>) -> bool {
    link.as_ref().map_or(false, |node| node.color == Red)
}

fn has_red_left<K, V>(link: &Link<K, V>) -> bool {
    link.as_ref().map_or(false, |node| is_red(&node.left))
}

// Lean a right-leaning red link to the left
fn rotate_left<K, V>(node: &mut Box<Node<K, V>>) {
    debug_assert!(is_red(&node.right), "rotate_left: right link is not red");

    if let Some(mut save) = node.right.take() {
        swap(&mut node.right, &mut save.left); // save.left now None
        save.color = node.color;
        node.color = Red;
        swap(node, &mut save);
        node.left = Some(save);
    }
}

// Lean a left-leaning red link to the right
fn rotate_right<K, V>(node: &mut Box<Node<K, V>>) {
    debug_assert!(is_red(&node.left), "rotate_right: left link is not red");

    if let Some(mut save) = node.left.take() {
        swap(&mut node.left, &mut save.right); // save.right now None
        save.color = node.color;
        node.color = Red;
        swap(node, &mut save);
        node.right = Some(save);
    }
}

// Split a 4-node, or the reverse: merge a node and its two children into a 4-node
fn flip_colors<K, V>(node: &mut Node<K, V>) {
    node.color = node.color.flip();
    if let Some(ref mut left) = node.left { left.color = left.color.flip(); }
    if let Some(ref mut right) = node.right { right.color = right.color.flip(); }
}

// Restore the left-leaning invariants at `node`, assuming they hold in both subtrees.
fn balance<K, V>(node: &mut Box<Node<K, V>>) {
    if is_red(&node.right) && !is_red(&node.left) { rotate_left(node); }
    if is_red(&node.left) && has_red_left(&node.left) { rotate_right(node); }
    if is_red(&node.left) && is_red(&node.right) { flip_colors(node); }
}

// Assuming `node` is red and both `node.left` and `node.left.left` are black, make
// `node.left` or one of its children red.
fn move_red_left<K, V>(node: &mut Box<Node<K, V>>) {
    flip_colors(node);

    if has_red_left(&node.right) {
        if let Some(ref mut right) = node.right { rotate_right(right); }
        rotate_left(node);
        flip_colors(node);
    }
}

// Assuming `node` is red and both `node.right` and `node.right.left` are black, make
// `node.right` or one of its children red.
fn move_red_right<K, V>(node: &mut Box<Node<K, V>>) {
    flip_colors(node);

    if has_red_left(&node.left) {
        rotate_right(node);
        flip_colors(node);
    }
}

fn set_black<K, V>(link: &mut Link<K, V>) {
    if let Some(ref mut root) = *link { root.color = Black; }
}

pub fn insert<K, V, C>(link: &mut Link<K, V>, cmp: &C, key: K, value: V) -> Option<V>
    where C: Compare<K> {

    let old_value = do_insert(link, cmp, key, value);
    set_black(link);
    old_value
}

fn do_insert<K, V, C>(link: &mut Link<K, V>, cmp: &C, key: K, value: V) -> Option<V>
    where C: Compare<K> {

    match *link {
        None => {
            *link = Some(Box::new(Node::new(key, value)));
            None
        }
        Some(ref mut node) => {
            let old_value = match cmp.compare(&key, &node.key) {
                Equal => return Some(replace(&mut node.value, value)),
                Less => do_insert(&mut node.left, cmp, key, value),
                Greater => do_insert(&mut node.right, cmp, key, value),
            };

            balance(node);
            old_value
        }
    }
}

// Detach the node at `link`, splicing its only child (if any) into its place.
fn unlink<K, V>(link: &mut Link<K, V>) -> Option<(K, V)> {
    link.take().map(|node| {
        let Node { left, right, key, value, .. } = *node;
        *link = left.or(right);
        (key, value)
    })
}

// Runs a top-down deletion from the root. If both of the root's children are black, the root
// is colored red first so the descent always starts in a 3-node or 4-node.
fn remove_from_root<K, V, F>(link: &mut Link<K, V>, delete: F) -> Option<(K, V)>
    where F: FnOnce(&mut Link<K, V>) -> Option<(K, V)> {

    if let Some(ref mut root) = *link {
        if !is_red(&root.left) && !is_red(&root.right) { root.color = Red; }
    }

    let key_value = delete(link);
    set_black(link);
    key_value
}

pub fn remove<K, V, C, Q: ?Sized>(link: &mut Link<K, V>, cmp: &C, key: &Q) -> Option<(K, V)>
    where C: Compare<Q, K> {

    // the descent recolors and rotates on its way down, so only start it for a present key
    if get(link, cmp, key).is_none() { return None; }
    remove_from_root(link, |link| delete(link, cmp, key))
}

pub fn remove_min<K, V>(link: &mut Link<K, V>) -> Option<(K, V)> {
    remove_from_root(link, delete_min)
}

pub fn remove_max<K, V>(link: &mut Link<K, V>) -> Option<(K, V)> {
    remove_from_root(link, delete_max)
}

fn delete<K, V, C, Q: ?Sized>(link: &mut Link<K, V>, cmp: &C, key: &Q) -> Option<(K, V)>
    where C: Compare<Q, K> {

    let node = link.as_mut()?;

    let key_value = if cmp.compares_lt(key, &node.key) {
        if !is_red(&node.left) && !has_red_left(&node.left) { move_red_left(node); }
        delete(&mut node.left, cmp, key)
    } else {
        if is_red(&node.left) { rotate_right(node); }

        if cmp.compares_eq(key, &node.key) && node.right.is_none() { return unlink(link); }

        if !is_red(&node.right) && !has_red_left(&node.right) { move_red_right(node); }

        if cmp.compares_eq(key, &node.key) {
            // replace the entry with its successor
            delete_min(&mut node.right).map(|(succ_key, succ_value)| {
                (replace(&mut node.key, succ_key), replace(&mut node.value, succ_value))
            })
        } else {
            delete(&mut node.right, cmp, key)
        }
    };

    balance(node);
    key_value
}

fn delete_min<K, V>(link: &mut Link<K, V>) -> Option<(K, V)> {
    match *link {
        Some(ref mut node) if node.left.is_some() => {
            if !is_red(&node.left) && !has_red_left(&node.left) { move_red_left(node); }
            let key_value = delete_min(&mut node.left);
            balance(node);
            key_value
        }
        _ => unlink(link),
    }
}

fn delete_max<K, V>(link: &mut Link<K, V>) -> Option<(K, V)> {
    let node = link.as_mut()?;

    if is_red(&node.left) { rotate_right(node); }

    if node.right.is_none() { return unlink(link); }

    if !is_red(&node.right) && !has_red_left(&node.right) { move_red_right(node); }
    let key_value = delete_max(&mut node.right);
    balance(node);
    key_value
}

pub fn get<'a, K, V, C, Q: ?Sized>(link: &'a Link<K, V>, cmp: &C, key: &Q)
    -> Option<&'a Node<K, V>> where C: Compare<Q, K> {

    let mut cur = link.as_deref();

    while let Some(node) = cur {
        cur = match cmp.compare(key, &node.key) {
            Equal => return Some(node),
            Less => node.left.as_deref(),
            Greater => node.right.as_deref(),
        };
    }

    None
}

pub fn get_mut<'a, K, V, C, Q: ?Sized>(link: &'a mut Link<K, V>, cmp: &C, key: &Q)
    -> Option<&'a mut Node<K, V>> where C: Compare<Q, K> {

    let mut cur = link.as_deref_mut();

    while let Some(node) = cur {
        match cmp.compare(key, &node.key) {
            Equal => return Some(node),
            Less => cur = node.left.as_deref_mut(),
            Greater => cur = node.right.as_deref_mut(),
        }
    }

    None
}

/// Returns the number of nodes on the longest path from the root to an empty link.
pub fn height<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| 1 + cmp::max(height(&node.left), height(&node.right)))
}

pub trait Dir {
    /// How a search key compares to a node lying in this direction from it.
    const TOWARD: Ordering;

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V>;
    fn forward_mut<K, V>(node: &mut Node<K, V>) -> &mut Link<K, V>;
    fn backward<K, V>(node: &Node<K, V>) -> &Link<K, V>;

    fn extremum<K, V>(link: &Link<K, V>) -> Option<&Node<K, V>> {
        let mut node = link.as_deref()?;
        while let Some(next) = Self::forward(node).as_deref() { node = next; }
        Some(node)
    }

    fn extremum_mut<K, V>(link: &mut Link<K, V>) -> Option<&mut Node<K, V>> {
        let mut node = link.as_deref_mut()?;
        while Self::forward(node).is_some() { node = Self::forward_mut(node).as_deref_mut()?; }
        Some(node)
    }

    /// Returns the node closest to `key` in this direction, or the node equal to `key` if
    /// `inclusive` is `true` and such a node exists.
    fn closest<'a, K, V, C, Q: ?Sized>(link: &'a Link<K, V>, cmp: &C, key: &Q, inclusive: bool)
        -> Option<&'a Node<K, V>> where C: Compare<Q, K> {

        let mut closest = None;
        let mut cur = link.as_deref();

        while let Some(node) = cur {
            let order = cmp.compare(key, &node.key);
            if inclusive && order == Equal { return Some(node); }

            cur = if order == Self::TOWARD {
                closest = Some(node);
                Self::backward(node).as_deref()
            } else {
                Self::forward(node).as_deref()
            };
        }

        closest
    }
}

pub enum Left {}

impl Dir for Left {
    const TOWARD: Ordering = Greater;

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V> { &node.left }
    fn forward_mut<K, V>(node: &mut Node<K, V>) -> &mut Link<K, V> { &mut node.left }
    fn backward<K, V>(node: &Node<K, V>) -> &Link<K, V> { &node.right }
}

pub enum Right {}

impl Dir for Right {
    const TOWARD: Ordering = Less;

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V> { &node.right }
    fn forward_mut<K, V>(node: &mut Node<K, V>) -> &mut Link<K, V> { &mut node.right }
    fn backward<K, V>(node: &Node<K, V>) -> &Link<K, V> { &node.left }
}
