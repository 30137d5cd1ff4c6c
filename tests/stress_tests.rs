//! Stress tests that push the heap through long carry chains and large drains
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use binomial_queue::BinomialHeap;

/// Test massive numbers of inserts and deletes
#[test]
fn test_massive_operations() {
    let mut heap = BinomialHeap::new();

    for i in 0..10_000 {
        heap.insert(i).unwrap();
    }
    assert_eq!(heap.len(), 10_000);
    assert_eq!(heap.validate(), Ok(()));

    for i in 0..10_000 {
        assert_eq!(heap.delete_min(), Some(i));
    }
    assert!(heap.is_empty());
}

/// Test alternating insert and delete
#[test]
fn test_alternating_ops() {
    let mut heap = BinomialHeap::new();

    for i in 0..500 {
        heap.insert(i * 2).unwrap();
        heap.insert(i * 2 + 1).unwrap();
        assert_eq!(heap.delete_min(), Some(i));
    }
    assert_eq!(heap.len(), 500);
    assert_eq!(heap.validate(), Ok(()));

    let drained = heap.into_sorted_vec();
    assert_eq!(drained, (500..1000).collect::<Vec<_>>());
}

/// Every insert into a heap of length 2ᵏ - 1 carries through all k slots
#[test]
fn test_full_carry_chains() {
    let mut heap = BinomialHeap::new();
    for k in 1..=12 {
        while heap.len() < (1 << k) - 1 {
            heap.insert(heap.len() as i32).unwrap();
        }
        assert_eq!(heap.occupied_orders(), (0..k).collect::<Vec<_>>());

        heap.insert(-(k as i32)).unwrap();
        assert_eq!(heap.occupied_orders(), vec![k]);
        assert_eq!(heap.validate(), Ok(()));
        assert_eq!(heap.delete_min(), Some(-(k as i32)));
    }
}

/// Test repeated merges of many small heaps
#[test]
fn test_many_merges() {
    let mut total = BinomialHeap::new();
    for batch in 0..100 {
        let mut part = BinomialHeap::new();
        for i in 0..batch % 13 {
            part.insert(batch * 100 + i).unwrap();
        }
        total.append(&mut part).unwrap();
        assert!(part.is_empty());
    }
    assert_eq!(total.validate(), Ok(()));

    let drained = total.into_sorted_vec();
    assert!(drained.windows(2).all(|w| w[0] <= w[1]));
    let expected: usize = (0..100).map(|batch| batch % 13).sum();
    assert_eq!(drained.len(), expected);
}

/// Test pseudo-random keys with many duplicates
#[test]
fn test_scrambled_duplicates() {
    let mut heap = BinomialHeap::new();
    let mut reference = Vec::new();
    let mut state: u32 = 12345;
    for _ in 0..5_000 {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let key = (state >> 16) % 50;
        heap.insert(key).unwrap();
        reference.push(key);
    }
    reference.sort_unstable();

    assert_eq!(heap.validate(), Ok(()));
    assert_eq!(heap.into_sorted_vec(), reference);
}

/// Test clearing and reusing a large heap
#[test]
fn test_clear_and_reuse() {
    let mut heap = BinomialHeap::new();
    for round in 0..5 {
        heap.try_extend((0..2_000).rev()).unwrap();
        assert_eq!(heap.peek(), Some(&0));
        heap.clear();
        assert!(heap.is_empty(), "round {round}");
        assert_eq!(heap.validate(), Ok(()));
    }
}
