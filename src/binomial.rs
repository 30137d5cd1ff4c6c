//! Binomial Heap implementation
//!
//! A binomial heap is a forest of binomial trees with:
//! - O(log n) worst-case insert, O(1) amortized
//! - O(log n) delete_min
//! - O(log n) merge of two forests
//!
//! # Algorithm Overview
//!
//! The forest keeps at most one tree per order, so the occupied slots spell
//! out the binary representation of the heap's length:
//!
//! ```text
//!   len = 10 = 0b1010  →  slots: [ -, B₁, -, B₃ ]
//! ```
//!
//! **Binomial Tree Bₖ**: Recursively defined:
//! - B₀ is a single node
//! - Bₖ is formed by concatenating two B_{k-1} trees
//! - Bₖ has exactly 2ᵏ nodes and C(k, d) nodes at depth d
//!
//! **Key Operations**:
//! - **Merge**: add two forests slot by slot, like binary addition with carry
//! - **Insert**: merge a forest holding a single B₀
//! - **Delete-min**: remove the smallest root and merge its children back in
//!
//! Every node lives in one slot-map arena owned by the heap (see
//! [`node`](crate::node)). Temporary forests built by insert and delete_min are
//! plain slot vectors over the same arena, so moving a tree between forests
//! moves a key and never copies a subtree.

use crate::config::{HeapConfig, MAX_SUPPORTED_ORDER};
use crate::level_order::{tree_lines, TREE_DELIMITER};
use crate::node::{self, Arena, NodeKey, Siblings};
use crate::traits::{Heap, HeapError, InvariantViolation, MergeError};
use slotmap::SecondaryMap;
use std::fmt;
use std::mem;
use tracing::{debug, trace, warn};

/// Slot vector indexed by order; slot i holds the root of the order-i tree
type Forest = Vec<Option<NodeKey>>;

/// Binomial Heap
///
/// # Example
///
/// ```rust
/// use binomial_queue::binomial::BinomialHeap;
///
/// let mut heap = BinomialHeap::new();
/// for key in [5, 1, 4, 2, 3] {
///     heap.insert(key).unwrap();
/// }
/// // 5 = 0b101
/// assert_eq!(heap.occupied_orders(), vec![0, 2]);
/// assert_eq!(heap.delete_min(), Some(1));
/// ```
pub struct BinomialHeap<K> {
    /// Node storage for every tree in the forest
    nodes: Arena<K>,
    /// Forest slots, `config.max_order` of them
    trees: Forest,
    len: usize,
    config: HeapConfig,
}

impl<K: Ord> BinomialHeap<K> {
    /// Creates an empty heap with the default configuration
    pub fn new() -> Self {
        Self::from_config(HeapConfig::default())
    }

    /// Creates an empty heap with the given configuration
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidMaxOrder`] if the configuration is invalid.
    pub fn with_config(config: HeapConfig) -> Result<Self, HeapError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    /// Creates an empty heap with `max_order` forest slots, holding at most
    /// `2^max_order - 1` keys
    pub fn with_max_order(max_order: usize) -> Result<Self, HeapError> {
        Self::with_config(HeapConfig::default().with_max_order(max_order))
    }

    fn from_config(config: HeapConfig) -> Self {
        Self {
            nodes: Arena::with_key(),
            trees: vec![None; config.max_order],
            len: 0,
            config,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of forest slots
    pub fn max_order(&self) -> usize {
        self.config.max_order
    }

    /// Maximum number of keys this heap can hold
    pub fn capacity(&self) -> u64 {
        self.config.capacity()
    }

    /// Orders of the trees currently in the forest, ascending
    ///
    /// These are exactly the set bits of [`len`](Self::len).
    pub fn occupied_orders(&self) -> Vec<usize> {
        self.occupied_slots()
    }

    /// Inserts a key
    ///
    /// **Time Complexity**: O(log n) worst-case, O(1) amortized
    ///
    /// **Algorithm**:
    /// 1. Allocate a single-node tree (B₀)
    /// 2. Place it in slot 0 of an otherwise empty temporary forest
    /// 3. Merge the temporary forest into this one
    ///
    /// A long carry chain (inserting into a heap of length 2ᵏ - 1) touches
    /// every slot; most inserts stop after the first empty slot.
    ///
    /// # Errors
    /// Returns [`HeapError::CapacityExceeded`] if the heap already holds
    /// [`capacity`](Self::capacity) keys. The heap is unchanged.
    pub fn insert(&mut self, key: K) -> Result<(), HeapError> {
        self.ensure_capacity(1)?;

        let node = node::allocate(&mut self.nodes, key);
        let mut singleton = self.empty_forest();
        singleton[0] = Some(node);

        self.merge_forest(&mut singleton);
        self.len += 1;
        Ok(())
    }

    /// Returns the minimum key without removing it
    ///
    /// **Time Complexity**: O(log n); roots are not ordered across slots, so
    /// every occupied slot is scanned.
    pub fn peek(&self) -> Option<&K> {
        let slot = self.min_slot()?;
        let root = self.trees[slot]?;
        Some(&self.nodes[root].key)
    }

    /// Removes and returns the minimum key
    ///
    /// Returns `None` and leaves the heap untouched if it is empty.
    ///
    /// **Time Complexity**: O(log n)
    ///
    /// **Algorithm**:
    /// 1. Scan the roots for the minimum; on equal keys the lowest slot wins
    /// 2. Detach that root from its slot and free it
    /// 3. Its children are binomial trees of orders 0..m; place each one,
    ///    detached from its siblings, into the slot matching its own order of
    ///    a temporary forest
    /// 4. Merge the temporary forest back into this one
    pub fn delete_min(&mut self) -> Option<K> {
        let slot = self.min_slot()?;
        let root = self.trees[slot].take()?;
        let removed = self.nodes.remove(root)?;

        let mut children = self.empty_forest();
        let mut next = removed.first_child;
        while let Some(child) = next {
            next = self.nodes[child].right_sibling;
            node::detach(&mut self.nodes, child);
            let order = self.nodes[child].order;
            children[order] = Some(child);
        }

        debug!(slot, order = removed.order, "extracted minimum root");
        self.merge_forest(&mut children);
        self.len -= 1;
        Some(removed.key)
    }

    /// Moves every key of `other` into this heap, leaving `other` empty
    ///
    /// **Time Complexity**: O(log n) to combine the forests, plus O(m) to move
    /// the nodes of the smaller heap (m keys) into the larger heap's arena.
    ///
    /// This heap keeps its own configuration; `other` keeps its configuration
    /// and can be reused.
    ///
    /// # Errors
    /// Returns [`HeapError::CapacityExceeded`] if the combined length exceeds
    /// this heap's capacity. Both heaps are unchanged in that case.
    pub fn append(&mut self, other: &mut Self) -> Result<(), HeapError> {
        if other.is_empty() {
            return Ok(());
        }
        self.ensure_capacity(other.len)?;

        // Keep the larger arena in place and move the smaller one
        if other.len > self.len {
            mem::swap(&mut self.nodes, &mut other.nodes);
            mem::swap(&mut self.trees, &mut other.trees);
            mem::swap(&mut self.len, &mut other.len);
            // Every tree fits below max_order after the capacity check, so
            // resizing only adds or drops empty slots
            self.trees.resize(self.config.max_order, None);
        }

        let moved = other.len;
        let mut remap: SecondaryMap<NodeKey, NodeKey> = SecondaryMap::with_capacity(moved);
        for (old, node) in other.nodes.drain() {
            remap.insert(old, self.nodes.insert(node));
        }
        for (_, &new) in remap.iter() {
            let node = &mut self.nodes[new];
            node.first_child = node.first_child.map(|k| remap[k]);
            node.right_sibling = node.right_sibling.map(|k| remap[k]);
            node.left_sibling = remap.get(node.left_sibling).copied().unwrap_or(new);
        }

        let mut incoming = self.empty_forest();
        for (order, root) in other.trees.iter_mut().enumerate() {
            if let Some(old) = root.take() {
                incoming[order] = Some(remap[old]);
            }
        }

        debug!(moved, len = self.len, "appending heap");
        self.merge_forest(&mut incoming);
        self.len += moved;

        other.trees = vec![None; other.config.max_order];
        other.len = 0;
        Ok(())
    }

    /// Merges `other` into this heap, consuming it
    ///
    /// Same as [`append`](Self::append), but takes `other` by value.
    ///
    /// # Errors
    /// Returns a [`MergeError`] carrying `other`, untouched, if the combined
    /// length exceeds this heap's capacity. This heap is unchanged.
    ///
    /// ```rust
    /// use binomial_queue::BinomialHeap;
    ///
    /// let mut small = BinomialHeap::with_max_order(1).unwrap();
    /// small.insert(1).unwrap();
    /// let mut other = BinomialHeap::new();
    /// other.insert(2).unwrap();
    ///
    /// let err = small.merge(other).unwrap_err();
    /// let (_, mut other) = err.into_parts();
    /// assert_eq!(other.delete_min(), Some(2));
    /// ```
    pub fn merge(&mut self, mut other: Self) -> Result<(), MergeError<Self>> {
        match self.append(&mut other) {
            Ok(()) => Ok(()),
            Err(error) => Err(MergeError { error, other }),
        }
    }

    /// Removes every key
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.trees.fill(None);
        self.len = 0;
    }

    /// Inserts keys in iteration order
    ///
    /// # Errors
    /// Stops at the first key that does not fit and returns
    /// [`HeapError::CapacityExceeded`]; keys inserted before it stay.
    pub fn try_extend<I: IntoIterator<Item = K>>(&mut self, keys: I) -> Result<(), HeapError> {
        for key in keys {
            self.insert(key)?;
        }
        Ok(())
    }

    /// Drains the heap into a vector in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<K> {
        let mut sorted = Vec::with_capacity(self.len);
        while let Some(key) = self.delete_min() {
            sorted.push(key);
        }
        sorted
    }

    /// Checks every structural invariant of the forest
    ///
    /// - the root in slot i has order i and no siblings
    /// - a node of order k has children of orders 0..k, in that order
    /// - the first child's back-pointer reaches the last child
    /// - no child key is smaller than its parent's
    /// - `len` equals the number of nodes reachable from the roots, and the
    ///   arena holds nothing else
    ///
    /// Trees are walked with an explicit stack, so depth is not limited by
    /// the call stack.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let mut counted = 0;

        for (slot, root) in self.trees.iter().enumerate() {
            let Some(root) = *root else { continue };
            let root_node = &self.nodes[root];
            if root_node.order != slot {
                return Err(InvariantViolation::SlotOrderMismatch {
                    slot,
                    order: root_node.order,
                });
            }
            if root_node.right_sibling.is_some() || root_node.left_sibling != root {
                return Err(InvariantViolation::RootNotDetached { slot });
            }

            let mut stack = vec![root];
            while let Some(parent) = stack.pop() {
                counted += 1;
                let parent_node = &self.nodes[parent];
                let children: Vec<NodeKey> =
                    Siblings::new(&self.nodes, parent_node.first_child).collect();

                let orders: Vec<usize> = children.iter().map(|&c| self.nodes[c].order).collect();
                if !orders.iter().copied().eq(0..parent_node.order) {
                    return Err(InvariantViolation::ChildOrders {
                        order: parent_node.order,
                        children: orders,
                    });
                }

                if let (Some(&first), Some(&last)) = (children.first(), children.last()) {
                    if self.nodes[first].left_sibling != last {
                        return Err(InvariantViolation::BrokenBackPointer);
                    }
                }

                for &child in &children {
                    if self.nodes[child].key < parent_node.key {
                        return Err(InvariantViolation::HeapOrder { slot });
                    }
                    stack.push(child);
                }
            }
        }

        if counted != self.len {
            return Err(InvariantViolation::LengthMismatch {
                len: self.len,
                counted,
            });
        }
        if self.nodes.len() != counted {
            return Err(InvariantViolation::LeakedNodes {
                allocated: self.nodes.len(),
                reachable: counted,
            });
        }
        Ok(())
    }

    fn empty_forest(&self) -> Forest {
        vec![None; self.trees.len()]
    }

    fn ensure_capacity(&self, additional: usize) -> Result<(), HeapError> {
        let requested = (self.len as u64).saturating_add(additional as u64);
        let capacity = self.capacity();
        if requested > capacity {
            warn!(requested, capacity, "binomial heap capacity exceeded");
            return Err(HeapError::CapacityExceeded {
                requested,
                capacity,
            });
        }
        Ok(())
    }

    /// Slot of the root with the smallest key; the lowest slot wins ties
    fn min_slot(&self) -> Option<usize> {
        let mut best: Option<(usize, &K)> = None;
        for (slot, root) in self.trees.iter().enumerate() {
            let Some(root) = *root else { continue };
            let key = &self.nodes[root].key;
            if best.map_or(true, |(_, min)| key < min) {
                best = Some((slot, key));
            }
        }
        best.map(|(slot, _)| slot)
    }

    /// Merges the trees of `other` (a forest over this heap's arena) into this
    /// heap's forest
    ///
    /// **Time Complexity**: O(max_order); each step is O(1)
    ///
    /// **Algorithm**: binary addition with carry. At each order i, from low to
    /// high, look at this heap's tree, `other`'s tree and the carry produced at
    /// order i-1:
    ///
    /// | this | other | carry | slot i becomes | new carry          |
    /// |------|-------|-------|----------------|--------------------|
    /// |  -   |   -   |   -   | -              | -                  |
    /// |  T   |   -   |   -   | T              | -                  |
    /// |  -   |   O   |   -   | O              | -                  |
    /// |  T   |   O   |   -   | -              | concat(T, O)       |
    /// |  -   |   -   |   C   | C              | -                  |
    /// |  T   |   -   |   C   | -              | concat(T, C)       |
    /// |  -   |   O   |   C   | -              | concat(O, C)       |
    /// |  T   |   O   |   C   | C              | concat(T, O)       |
    ///
    /// Afterwards every slot of `other` is empty. The caller updates `len` and
    /// has already checked capacity, so no carry survives the last slot.
    fn merge_forest(&mut self, other: &mut Forest) {
        let mut carry: Option<NodeKey> = None;

        for order in 0..self.trees.len() {
            let this = self.trees[order];
            let that = other.get(order).copied().flatten();

            match (this, that, carry) {
                (_, None, None) => continue,
                (None, Some(t2), None) => {
                    self.trees[order] = Some(t2);
                    other[order] = None;
                }
                (Some(t1), Some(t2), None) => {
                    carry = Some(node::concatenate_trees(&mut self.nodes, t1, t2));
                    self.trees[order] = None;
                    other[order] = None;
                }
                (None, None, Some(c)) => {
                    self.trees[order] = Some(c);
                    carry = None;
                }
                (Some(t1), None, Some(c)) => {
                    carry = Some(node::concatenate_trees(&mut self.nodes, t1, c));
                    self.trees[order] = None;
                }
                (None, Some(t2), Some(c)) => {
                    carry = Some(node::concatenate_trees(&mut self.nodes, t2, c));
                    other[order] = None;
                }
                (Some(t1), Some(t2), Some(c)) => {
                    self.trees[order] = Some(c);
                    carry = Some(node::concatenate_trees(&mut self.nodes, t1, t2));
                    other[order] = None;
                }
            }

            trace!(order, carry = carry.is_some(), "merge step");
        }

        debug_assert!(carry.is_none(), "carry out of the highest order slot");
        debug_assert!(other.iter().all(Option::is_none));
    }
}

impl<K: Ord + fmt::Display> BinomialHeap<K> {
    /// Level-order listing of the forest
    ///
    /// For each tree, lowest order first: one line per depth with the keys
    /// separated by single spaces, then a `---` delimiter line.
    ///
    /// ```rust
    /// use binomial_queue::binomial::BinomialHeap;
    ///
    /// let mut heap = BinomialHeap::new();
    /// heap.try_extend(1..=4).unwrap();
    /// assert_eq!(heap.level_order(), vec!["1", "2 3", "4", "---"]);
    /// ```
    pub fn level_order(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for root in self.trees.iter().flatten() {
            lines.extend(tree_lines(&self.nodes, *root));
            lines.push(TREE_DELIMITER.to_string());
        }
        lines
    }
}

impl<K: Ord + fmt::Display> fmt::Display for BinomialHeap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.level_order() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl<K> BinomialHeap<K> {
    fn occupied_slots(&self) -> Vec<usize> {
        self.trees
            .iter()
            .enumerate()
            .filter_map(|(order, root)| root.map(|_| order))
            .collect()
    }
}

impl<K> fmt::Debug for BinomialHeap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinomialHeap")
            .field("len", &self.len)
            .field("max_order", &self.config.max_order)
            .field("occupied_orders", &self.occupied_slots())
            .finish()
    }
}

impl<K: Ord> Default for BinomialHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for BinomialHeap<K> {
    /// Collects into a heap with [`MAX_SUPPORTED_ORDER`] slots, whose capacity
    /// cannot be reached by any in-memory heap
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut heap = Self::from_config(HeapConfig::default().with_max_order(MAX_SUPPORTED_ORDER));
        for key in iter {
            if heap.insert(key).is_err() {
                break;
            }
        }
        heap
    }
}

impl<K: Ord> Heap<K> for BinomialHeap<K> {
    fn new() -> Self {
        BinomialHeap::new()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn push(&mut self, key: K) -> Result<(), HeapError> {
        self.insert(key)
    }

    fn peek(&self) -> Option<&K> {
        BinomialHeap::peek(self)
    }

    fn pop(&mut self) -> Option<K> {
        self.delete_min()
    }

    fn merge(&mut self, other: Self) -> Result<(), MergeError<Self>> {
        BinomialHeap::merge(self, other)
    }
}
