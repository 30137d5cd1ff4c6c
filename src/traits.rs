//! Common traits and error types for the heap
//!
//! [`Heap`] mirrors the shape of Rust's standard heap API (`push`, `peek`,
//! `pop`) with two differences: it is a min-heap, and `push`/`merge` are
//! fallible because the forest has a bounded number of order slots.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// Holding `requested` keys would need a tree of order `>= max_order`
    #[error("capacity exceeded: {requested} keys requested, capacity is {capacity}")]
    CapacityExceeded {
        /// Number of keys the heap would hold after the operation
        requested: u64,
        /// Maximum number of keys the heap can hold
        capacity: u64,
    },
    /// The configured slot count is outside `1..=limit`
    #[error("invalid max order {max_order} (must be between 1 and {limit})")]
    InvalidMaxOrder {
        /// The rejected value
        max_order: usize,
        /// Largest accepted value
        limit: usize,
    },
}

/// A failed merge: the error, plus the heap that was to be merged in
///
/// The rejected heap is returned untouched so the caller keeps its keys.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct MergeError<H> {
    /// Why the merge was rejected
    pub error: HeapError,
    /// The heap passed to `merge`, unchanged
    pub other: H,
}

impl<H> MergeError<H> {
    /// Splits into the error and the rejected heap
    pub fn into_parts(self) -> (HeapError, H) {
        (self.error, self.other)
    }
}

/// A structural invariant found broken by
/// [`BinomialHeap::validate`](crate::binomial::BinomialHeap::validate)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// The root stored in slot `slot` has a different order
    #[error("root in slot {slot} has order {order}")]
    SlotOrderMismatch { slot: usize, order: usize },
    /// A forest root still has siblings attached
    #[error("root in slot {slot} is not detached from its siblings")]
    RootNotDetached { slot: usize },
    /// A node of order `order` does not have children of orders `0..order`
    #[error("node of order {order} has children of orders {children:?}")]
    ChildOrders { order: usize, children: Vec<usize> },
    /// The first child's back-pointer does not reach the last child
    #[error("first child's back-pointer does not reference the last sibling")]
    BrokenBackPointer,
    /// A child's key is smaller than its parent's
    #[error("heap order violated below a root in slot {slot}")]
    HeapOrder { slot: usize },
    /// The stored length disagrees with the forest
    #[error("length is {len} but the forest holds {counted} nodes")]
    LengthMismatch { len: usize, counted: usize },
    /// The arena holds nodes not reachable from any root
    #[error("arena holds {allocated} nodes but {reachable} are reachable")]
    LeakedNodes { allocated: usize, reachable: usize },
}

/// Base trait for mergeable min-heaps over plain ordered keys
///
/// # Example
///
/// ```rust
/// use binomial_queue::Heap;
/// use binomial_queue::binomial::BinomialHeap;
///
/// let mut heap = BinomialHeap::new();
/// heap.push(3).unwrap();
/// heap.push(1).unwrap();
/// heap.push(2).unwrap();
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<K: Ord>: Sized {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of keys in the heap
    fn len(&self) -> usize;

    /// Inserts a key
    ///
    /// # Errors
    /// Returns [`HeapError::CapacityExceeded`] if the heap is full. The heap is
    /// left unchanged in that case.
    fn push(&mut self, key: K) -> Result<(), HeapError>;

    /// Returns the minimum key without removing it
    fn peek(&self) -> Option<&K>;

    /// Removes and returns the minimum key, or `None` if the heap is empty
    fn pop(&mut self) -> Option<K>;

    /// Merges another heap into this one, consuming the other heap
    ///
    /// # Errors
    /// Returns a [`MergeError`] holding [`HeapError::CapacityExceeded`] and
    /// `other`, unchanged, if the combined heap would not fit. The receiver is
    /// unchanged too.
    fn merge(&mut self, other: Self) -> Result<(), MergeError<Self>>;
}
