//! Generic tests for Heap implementations
//!
//! These tests only use the trait interface, so they exercise the same
//! behavior any caller written against `Heap` relies on.

use binomial_queue::{BinomialHeap, Heap, HeapError};

/// Test that empty heap behaves correctly
fn test_empty_heap<H: Heap<i32>>() {
    let mut heap = H::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.pop(), None);
    assert!(heap.is_empty());
}

/// Test basic push and pop operations
fn test_basic_operations<H: Heap<&'static str>>() {
    let mut heap = H::new();

    heap.push("pear").unwrap();
    heap.push("apple").unwrap();
    heap.push("quince").unwrap();
    heap.push("fig").unwrap();

    assert!(!heap.is_empty());
    assert_eq!(heap.len(), 4);
    assert_eq!(heap.peek(), Some(&"apple"));

    assert_eq!(heap.pop(), Some("apple"));
    assert_eq!(heap.pop(), Some("fig"));
    assert_eq!(heap.pop(), Some("pear"));
    assert_eq!(heap.pop(), Some("quince"));
    assert_eq!(heap.pop(), None);
    assert!(heap.is_empty());
}

/// Test duplicate keys are all kept
fn test_duplicates<H: Heap<i32>>() {
    let mut heap = H::new();
    for key in [5, 5, 3, 3, 5, 3] {
        heap.push(key).unwrap();
    }

    let mut drained = Vec::new();
    while let Some(key) = heap.pop() {
        drained.push(key);
    }
    assert_eq!(drained, vec![3, 3, 3, 5, 5, 5]);
}

/// Test merging two heaps, including empty operands
fn test_merge<H: Heap<i32>>() {
    let mut heap1 = H::new();
    for key in [5, 3, 10] {
        heap1.push(key).unwrap();
    }
    let mut heap2 = H::new();
    for key in [1, 7, 4] {
        heap2.push(key).unwrap();
    }

    assert!(heap1.merge(heap2).is_ok());
    assert_eq!(heap1.len(), 6);
    assert_eq!(heap1.peek(), Some(&1));

    assert!(heap1.merge(H::new()).is_ok());
    assert_eq!(heap1.len(), 6);

    let mut empty = H::new();
    assert!(empty.merge(heap1).is_ok());
    assert_eq!(empty.len(), 6);

    let mut values = Vec::new();
    while let Some(key) = empty.pop() {
        values.push(key);
    }
    assert_eq!(values, vec![1, 3, 4, 5, 7, 10]);
}

/// Test interleaved push and pop
fn test_interleaved<H: Heap<i32>>() {
    let mut heap = H::new();
    heap.push(10).unwrap();
    heap.push(20).unwrap();
    assert_eq!(heap.pop(), Some(10));
    heap.push(5).unwrap();
    heap.push(15).unwrap();
    assert_eq!(heap.pop(), Some(5));
    assert_eq!(heap.pop(), Some(15));
    heap.push(1).unwrap();
    assert_eq!(heap.pop(), Some(1));
    assert_eq!(heap.pop(), Some(20));
    assert_eq!(heap.pop(), None);
}

/// Test negative and extreme keys
fn test_extreme_keys<H: Heap<i64>>() {
    let mut heap = H::new();
    for key in [0, i64::MAX, -1, i64::MIN, 42] {
        heap.push(key).unwrap();
    }
    assert_eq!(heap.pop(), Some(i64::MIN));
    assert_eq!(heap.pop(), Some(-1));
    assert_eq!(heap.pop(), Some(0));
    assert_eq!(heap.pop(), Some(42));
    assert_eq!(heap.pop(), Some(i64::MAX));
}

#[test]
fn test_binomial_empty() {
    test_empty_heap::<BinomialHeap<i32>>();
}

#[test]
fn test_binomial_basic() {
    test_basic_operations::<BinomialHeap<&'static str>>();
}

#[test]
fn test_binomial_duplicates() {
    test_duplicates::<BinomialHeap<i32>>();
}

#[test]
fn test_binomial_merge() {
    test_merge::<BinomialHeap<i32>>();
}

#[test]
fn test_binomial_interleaved() {
    test_interleaved::<BinomialHeap<i32>>();
}

#[test]
fn test_binomial_extreme_keys() {
    test_extreme_keys::<BinomialHeap<i64>>();
}

#[test]
fn test_binomial_merge_over_capacity() {
    let mut small = BinomialHeap::with_max_order(2).unwrap();
    small.push(1).unwrap();
    small.push(2).unwrap();

    let mut other = BinomialHeap::new();
    other.push(3).unwrap();
    other.push(4).unwrap();

    let err = Heap::merge(&mut small, other).unwrap_err();
    assert_eq!(
        err.error,
        HeapError::CapacityExceeded {
            requested: 4,
            capacity: 3
        }
    );
    assert_eq!(small.len(), 2);
    assert_eq!(small.pop(), Some(1));

    // The rejected heap comes back with its keys
    let mut returned = err.other;
    assert_eq!(returned.len(), 2);
    assert_eq!(returned.pop(), Some(3));
    assert_eq!(returned.pop(), Some(4));
}
