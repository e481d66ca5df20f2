//! Set node for slab-based storage.
//!
//! ## Design
//!
//! `Node` wraps a value with doubly-linked list pointers. The pointers are
//! slab keys, not references, so the chain owns nothing cyclic and removal
//! is a re-link of two keys.
//!
//! ## Sentinel
//!
//! `None` in a link is the sentinel: "no next node" on the tail and
//! "no previous node" on the head.
//!
//! ```text
//! None <- head <-> n1 <-> n2 <-> tail -> None
//! ```

/// Node stored in the slab.
///
/// `next` is the forward link walked by lookups and invariant checks.
/// `prev` is the non-owning back-reference used for reverse traversal and
/// for O(1) predecessor access on removal.
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// The element held by this node
    pub value: T,

    /// Next (larger) node, or `None` on the tail
    pub next: Option<usize>,

    /// Previous (smaller) node, or `None` on the head
    pub prev: Option<usize>,
}

impl<T> Node<T> {
    /// Create a new node (not yet linked)
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_linked_set::list::Node;
    ///
    /// let node = Node::new(5u64);
    ///
    /// assert!(node.next.is_none());
    /// assert!(node.prev.is_none());
    /// ```
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            value,
            next: None,
            prev: None,
        }
    }

    /// Check if this node has no neighbours
    ///
    /// True for a fresh node and for the only node of a one-element chain.
    #[inline]
    pub fn is_unlinked(&self) -> bool {
        self.next.is_none() && self.prev.is_none()
    }

    /// Detach the node from its neighbours' point of view
    #[inline]
    pub(crate) fn unlink(&mut self) {
        self.next = None;
        self.prev = None;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_new() {
        let node = Node::new(42u64);

        assert_eq!(node.value, 42);
        assert!(node.next.is_none());
        assert!(node.prev.is_none());
        assert!(node.is_unlinked());
    }

    #[test]
    fn test_node_linking() {
        let mut node = Node::new(1u64);

        node.next = Some(2);
        assert!(!node.is_unlinked());

        node.prev = Some(0);
        assert!(!node.is_unlinked());

        // Only one link
        node.next = None;
        assert!(!node.is_unlinked());

        node.unlink();
        assert!(node.is_unlinked());
    }
}
