use std::collections::VecDeque;
use super::Node;

/// A handle to a node that can be split into its entry and its children.
///
/// Splitting a shared or mutable reference borrows the fields disjointly, so the yielded entry
/// and the children outlive the handle itself.
pub trait Split: Sized {
    type Item;
    fn split(self) -> (Self::Item, Option<Self>, Option<Self>);
}

impl<'a, K, V> Split for &'a Node<K, V> {
    type Item = (&'a K, &'a V);

    fn split(self) -> ((&'a K, &'a V), Option<Self>, Option<Self>) {
        ((&self.key, &self.value), self.left.as_deref(), self.right.as_deref())
    }
}

impl<'a, K, V> Split for &'a mut Node<K, V> {
    type Item = (&'a K, &'a mut V);

    fn split(self) -> ((&'a K, &'a mut V), Option<Self>, Option<Self>) {
        let Node { ref key, ref mut value, ref mut left, ref mut right, .. } = *self;
        ((key, value), left.as_deref_mut(), right.as_deref_mut())
    }
}

impl<K, V> Split for Box<Node<K, V>> {
    type Item = (K, V);

    fn split(self) -> ((K, V), Option<Self>, Option<Self>) {
        let Node { key, value, left, right, .. } = *self;
        ((key, value), left, right)
    }
}

struct Frame<N> where N: Split {
    item: N::Item,
    left: Option<N>,
    right: Option<N>,
    left_taken: bool,
    right_taken: bool,
}

impl<N> Frame<N> where N: Split {
    fn new(node: N) -> Self {
        let (item, left, right) = node.split();
        Frame { item: item, left: left, right: right, left_taken: false, right_taken: false }
    }

    fn take_left(&mut self) -> Option<N> {
        self.left_taken = true;
        self.left.take()
    }

    fn take_right(&mut self) -> Option<N> {
        self.right_taken = true;
        self.right.take()
    }
}

impl<N> Clone for Frame<N> where N: Split + Clone, N::Item: Clone {
    fn clone(&self) -> Self {
        Frame {
            item: self.item.clone(),
            left: self.left.clone(),
            right: self.right.clone(),
            left_taken: self.left_taken,
            right_taken: self.right_taken,
        }
    }
}

enum Step<N> {
    Descend(Option<N>),
    Yield(Option<N>),
}

/// An in-order traversal that can be driven from both ends.
///
/// The back of the deque holds the ascending traversal's stack and the front holds the
/// descending one. A frame is only yielded once the subtree on the side it is being approached
/// from has been exhausted; the subtree on the other side, if not yet claimed by the opposite
/// end, is pushed in its place.
pub struct Iter<N> where N: Split {
    frames: VecDeque<Frame<N>>,
    len: usize,
}

impl<N> Iter<N> where N: Split {
    pub fn new(root: Option<N>, len: usize) -> Self {
        Iter { frames: root.into_iter().map(Frame::new).collect(), len: len }
    }
}

impl<N> Clone for Iter<N> where N: Split + Clone, N::Item: Clone {
    fn clone(&self) -> Self { Iter { frames: self.frames.clone(), len: self.len } }
}

impl<N> Iterator for Iter<N> where N: Split {
    type Item = N::Item;

    fn next(&mut self) -> Option<N::Item> {
        loop {
            let step = match self.frames.back_mut() {
                None => return None,
                Some(frame) if !frame.left_taken => Step::Descend(frame.take_left()),
                Some(frame) if !frame.right_taken => Step::Yield(frame.take_right()),
                Some(_) => Step::Yield(None),
            };

            match step {
                Step::Descend(child) => self.frames.extend(child.map(Frame::new)),
                Step::Yield(child) => {
                    let frame = self.frames.pop_back()?;
                    self.len -= 1;
                    self.frames.extend(child.map(Frame::new));
                    return Some(frame.item);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<N> DoubleEndedIterator for Iter<N> where N: Split {
    fn next_back(&mut self) -> Option<N::Item> {
        loop {
            let step = match self.frames.front_mut() {
                None => return None,
                Some(frame) if !frame.right_taken => Step::Descend(frame.take_right()),
                Some(frame) if !frame.left_taken => Step::Yield(frame.take_left()),
                Some(_) => Step::Yield(None),
            };

            match step {
                Step::Descend(child) =>
                    if let Some(node) = child { self.frames.push_front(Frame::new(node)); },
                Step::Yield(child) => {
                    let frame = self.frames.pop_front()?;
                    self.len -= 1;
                    if let Some(node) = child { self.frames.push_front(Frame::new(node)); }
                    return Some(frame.item);
                }
            }
        }
    }
}

impl<N> ExactSizeIterator for Iter<N> where N: Split {}
