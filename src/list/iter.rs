//! Chain iterators.
//!
//! [`Iter`] walks `next` links from the head and `prev` links from the tail,
//! so `.rev()` exercises the back-references.

use std::iter::FusedIterator;

use slab::Slab;

use crate::list::Node;

/// Ascending iterator over the values of an
/// [`OrderedLinkedSet`](crate::list::OrderedLinkedSet).
pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(
        nodes: &'a Slab<Node<T>>,
        head: Option<usize>,
        tail: Option<usize>,
        len: usize,
    ) -> Self {
        Self {
            nodes,
            front: head,
            back: tail,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}
