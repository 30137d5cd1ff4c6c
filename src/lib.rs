//! Binomial Queue for Rust
//!
//! This crate provides a mergeable min-heap built from binomial trees: a forest
//! holding at most one tree per order, combined by carry propagation exactly
//! like binary addition.
//!
//! # Features
//!
//! - **Insert**: O(log n) worst-case, O(1) amortized
//! - **Delete-min**: O(log n)
//! - **Merge**: O(log n) forest combination
//! - **Tree concatenation**: O(1), using a circular back-pointer on each child list
//! - **Level-order dump**: one line per tree depth, for inspecting the forest
//!
//! Nodes are stored in a [`slotmap`] arena and linked by key, so the intrusive
//! sibling/child structure needs no `unsafe` and no reference counting.
//!
//! # Example
//!
//! ```rust
//! use binomial_queue::BinomialHeap;
//!
//! let mut heap = BinomialHeap::new();
//! heap.try_extend((1..=10).rev()).unwrap();
//!
//! // 10 = 0b1010
//! assert_eq!(heap.occupied_orders(), vec![1, 3]);
//! assert_eq!(heap.delete_min(), Some(1));
//! ```

pub mod binomial;
pub mod config;
pub mod level_order;
mod node;
pub mod queue;
pub mod traits;

pub use binomial::BinomialHeap;
pub use config::HeapConfig;
// Re-export the main trait for convenience
pub use traits::{Heap, HeapError, InvariantViolation, MergeError};
