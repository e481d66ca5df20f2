//! Ordered linked set implementation.
//!
//! ## Architecture
//!
//! The set combines two structures:
//!
//! - **Slab**: node storage; slab keys are the links of the chain
//! - **BTreeMap**: value to slab key index for lookup and predecessor search
//!
//! ## Chain
//!
//! Live nodes form one doubly-linked chain in ascending value order:
//!
//! ```text
//! head (smallest) <-> ... <-> tail (largest)
//! ```
//!
//! - Insert finds the predecessor in the index and links after it
//! - Remove re-points the predecessor to the successor and back
//! - The freed slab slot is reused by the next insert
//!
//! ## Example
//!
//! ```
//! use ordered_linked_set::OrderedLinkedSet;
//!
//! let mut set = OrderedLinkedSet::with_capacity(8);
//! set.insert(3u64).unwrap();
//! set.insert(1).unwrap();
//! set.insert(2).unwrap();
//!
//! set.remove(&2).unwrap();
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.to_vec(), vec![1, 3]);
//! ```

use std::collections::BTreeMap;
use std::fmt::{self, Debug};

use slab::Slab;
use tracing::debug;

use crate::error::{Result, SetError};
use crate::list::root::{compute_root, root_hex, RootBytes};
use crate::list::{Iter, Node};

/// Set of unique values kept in a slab-backed, ascending linked chain.
#[derive(Clone)]
pub struct OrderedLinkedSet<T> {
    /// Node storage
    /// Key: slab index, Value: Node
    nodes: Slab<Node<T>>,

    /// Value to slab key mapping
    index: BTreeMap<T, usize>,

    /// Smallest live node (slab key), `None` when empty
    head: Option<usize>,

    /// Largest live node (slab key), `None` when empty
    tail: Option<usize>,

    /// Number of live nodes
    len: usize,
}

impl<T> Default for OrderedLinkedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedLinkedSet<T> {
    /// Create a new empty set
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            index: BTreeMap::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Create a set with pre-allocated node capacity
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_linked_set::OrderedLinkedSet;
    ///
    /// let set: OrderedLinkedSet<u64> = OrderedLinkedSet::with_capacity(1_000);
    /// assert!(set.capacity() >= 1_000);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            index: BTreeMap::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Number of live nodes
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pre-allocated node slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    // ========================================================================
    // Chain Access
    // ========================================================================

    /// Smallest value
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.head.map(|key| &self.nodes[key].value)
    }

    /// Largest value
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.tail.map(|key| &self.nodes[key].value)
    }

    /// Slab key of the head node
    #[inline]
    pub fn head_key(&self) -> Option<usize> {
        self.head
    }

    /// Slab key of the tail node
    #[inline]
    pub fn tail_key(&self) -> Option<usize> {
        self.tail
    }

    /// Value stored at a slab key
    #[inline]
    pub fn get(&self, key: usize) -> Option<&T> {
        self.nodes.get(key).map(|node| &node.value)
    }

    /// Forward link of the node at `key`
    ///
    /// Returns `None` both for an unknown key and for the tail.
    #[inline]
    pub fn next_of(&self, key: usize) -> Option<usize> {
        self.nodes.get(key).and_then(|node| node.next)
    }

    /// Back link of the node at `key`
    #[inline]
    pub fn prev_of(&self, key: usize) -> Option<usize> {
        self.nodes.get(key).and_then(|node| node.prev)
    }

    /// Iterate values in ascending order; `.rev()` follows back links
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.head, self.tail, self.len)
    }

    /// Drop every node
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // ========================================================================
    // Linking
    // ========================================================================

    /// Link the fresh node `key` directly after `pred` (or at the head).
    fn link_after(&mut self, pred: Option<usize>, key: usize) {
        let next = match pred {
            Some(p) => self.nodes[p].next,
            None => self.head,
        };

        let node = &mut self.nodes[key];
        node.prev = pred;
        node.next = next;

        match pred {
            Some(p) => self.nodes[p].next = Some(key),
            None => self.head = Some(key),
        }
        match next {
            Some(n) => self.nodes[n].prev = Some(key),
            None => self.tail = Some(key),
        }
    }

    /// Re-point the neighbours of `key` at each other.
    fn unlink(&mut self, key: usize) {
        let node = &self.nodes[key];
        let prev_key = node.prev;
        let next_key = node.next;

        match prev_key {
            Some(prev) => self.nodes[prev].next = next_key,
            None => self.head = next_key,
        }
        match next_key {
            Some(next) => self.nodes[next].prev = prev_key,
            None => self.tail = prev_key,
        }

        self.nodes[key].unlink();
    }
}

impl<T: Ord + Clone + Debug> OrderedLinkedSet<T> {
    // ========================================================================
    // Set Operations
    // ========================================================================

    /// Insert a value at its ascending position
    ///
    /// # Returns
    ///
    /// The slab key of the new node
    ///
    /// # Errors
    ///
    /// [`SetError::DuplicateValue`] if the value is already present. The set
    /// is left unchanged.
    pub fn insert(&mut self, value: T) -> Result<usize> {
        if self.index.contains_key(&value) {
            return Err(SetError::duplicate(&value));
        }

        let pred = self.index.range::<T, _>(..&value).next_back().map(|(_, &key)| key);
        let key = self.nodes.insert(Node::new(value.clone()));
        self.link_after(pred, key);

        debug!(target: "ordered_set", ?value, key, ?pred, "inserted");
        self.index.insert(value, key);
        self.len += 1;

        Ok(key)
    }

    /// Remove a value, returning it
    ///
    /// # Errors
    ///
    /// [`SetError::NotFound`] if the value is absent. The set is left
    /// unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_linked_set::{OrderedLinkedSet, SetError};
    ///
    /// let mut set: OrderedLinkedSet<u64> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(set.remove(&2), Ok(2));
    /// assert!(matches!(set.remove(&2), Err(SetError::NotFound { .. })));
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<T> {
        let key = self
            .index
            .remove(value)
            .ok_or_else(|| SetError::not_found(value))?;

        self.unlink(key);
        let node = self.nodes.remove(key);
        self.len -= 1;

        debug!(target: "ordered_set", ?value, key, len = self.len, "removed");
        Ok(node.value)
    }

    /// Check membership
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.index.contains_key(value)
    }

    /// Slab key of the node holding `value`
    #[inline]
    pub fn get_key(&self, value: &T) -> Option<usize> {
        self.index.get(value).copied()
    }

    /// Insert every value, stopping at the first duplicate
    ///
    /// # Returns
    ///
    /// The number of values inserted
    pub fn try_extend<I: IntoIterator<Item = T>>(&mut self, values: I) -> Result<usize> {
        let mut inserted = 0;
        for value in values {
            self.insert(value)?;
            inserted += 1;
        }
        Ok(inserted)
    }

    /// Chain contents head to tail
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    // ========================================================================
    // Consistency
    // ========================================================================

    /// Walk the chain and verify every structural invariant
    ///
    /// # Errors
    ///
    /// [`SetError::InvariantViolation`] describing the first broken
    /// invariant found.
    pub fn check_invariants(&self) -> Result<()> {
        if self.nodes.len() != self.len {
            return Err(SetError::invariant(format!(
                "slab holds {} nodes, count is {}",
                self.nodes.len(),
                self.len
            )));
        }
        if self.index.len() != self.len {
            return Err(SetError::invariant(format!(
                "index holds {} values, count is {}",
                self.index.len(),
                self.len
            )));
        }

        let mut steps = 0;
        let mut prev: Option<usize> = None;
        let mut cursor = self.head;

        while let Some(key) = cursor {
            if steps == self.len {
                return Err(SetError::invariant(format!(
                    "chain from head does not terminate within {} nodes",
                    self.len
                )));
            }
            let node = self
                .nodes
                .get(key)
                .ok_or_else(|| SetError::invariant(format!("dangling link to key {key}")))?;

            if node.prev != prev {
                return Err(SetError::invariant(format!(
                    "back link of key {key} is {:?}, expected {prev:?}",
                    node.prev
                )));
            }
            if let Some(p) = prev {
                if self.nodes[p].value >= node.value {
                    return Err(SetError::invariant(format!(
                        "chain not strictly ascending at {:?} -> {:?}",
                        self.nodes[p].value, node.value
                    )));
                }
            }
            if self.index.get(&node.value) != Some(&key) {
                return Err(SetError::invariant(format!(
                    "index does not map {:?} to key {key}",
                    node.value
                )));
            }

            steps += 1;
            prev = Some(key);
            cursor = node.next;
        }

        if steps != self.len {
            return Err(SetError::invariant(format!(
                "chain reaches {steps} nodes, count is {}",
                self.len
            )));
        }
        if self.tail != prev {
            return Err(SetError::invariant(format!(
                "tail is {:?}, chain ends at {prev:?}",
                self.tail
            )));
        }

        Ok(())
    }
}

impl<T: RootBytes> OrderedLinkedSet<T> {
    // ========================================================================
    // State Root
    // ========================================================================

    /// SHA-256 over the chain contents in order
    ///
    /// Equal roots mean same elements in the same order.
    pub fn state_root(&self) -> [u8; 32] {
        compute_root(self.len, self.iter())
    }

    /// State root as a hex string
    pub fn state_root_hex(&self) -> String {
        root_hex(&self.state_root())
    }
}

impl<T: Debug> Debug for OrderedLinkedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a OrderedLinkedSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Duplicates are skipped, matching set semantics.
impl<T: Ord + Clone + Debug> Extend<T> for OrderedLinkedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            let _ = self.insert(value);
        }
    }
}

impl<T: Ord + Clone + Debug> FromIterator<T> for OrderedLinkedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
