//! Intrusive binomial tree nodes and the tree concatenation primitive
//!
//! Nodes live in a [`SlotMap`] arena and refer to each other by [`NodeKey`]:
//!
//! - `first_child` and `right_sibling` are owning links: a root reaches its
//!   whole tree through them.
//! - `left_sibling` is a plain back-reference. A detached node points to
//!   itself, and the first child of a list points to the **last** child, which
//!   makes appending a child O(1). Only the first child's value is meaningful.
//!
//! ```text
//!   root ── first_child ──▶ c0 ──▶ c1 ──▶ c2 ──▶ None
//!                           │                ▲
//!                           └── left_sibling ┘
//! ```

use slotmap::{new_key_type, SlotMap};
use tracing::trace;

new_key_type! {
    /// Arena key addressing a [`HeapNode`]
    pub struct NodeKey;
}

/// Arena holding every node of one heap
pub type Arena<K> = SlotMap<NodeKey, HeapNode<K>>;

/// A binomial tree node
///
/// A node of order k roots a tree of exactly 2ᵏ nodes with k children of
/// orders 0, 1, ..., k-1 in sibling order (each concatenation appends the
/// newest, largest child at the end).
#[derive(Debug, Clone)]
pub struct HeapNode<K> {
    pub(crate) key: K,
    pub(crate) order: usize,
    pub(crate) first_child: Option<NodeKey>,
    pub(crate) right_sibling: Option<NodeKey>,
    pub(crate) left_sibling: NodeKey,
}

/// Allocates a detached order-0 node and returns its key
pub(crate) fn allocate<K>(arena: &mut Arena<K>, key: K) -> NodeKey {
    arena.insert_with_key(|this| HeapNode {
        key,
        order: 0,
        first_child: None,
        right_sibling: None,
        left_sibling: this,
    })
}

/// Resets a node's sibling links so it stands alone as a forest root
pub(crate) fn detach<K>(arena: &mut Arena<K>, node: NodeKey) {
    let n = &mut arena[node];
    n.right_sibling = None;
    n.left_sibling = node;
}

/// Concatenates two trees of the same order into one tree of order+1
///
/// **Time Complexity**: O(1)
///
/// The root with the smaller key wins and the other root becomes the winner's
/// new last child. On equal keys `a` wins.
///
/// The child list is extended without walking it:
/// 1. `loser.left_sibling` = current last child (`first.left_sibling`)
/// 2. `last.right_sibling` = loser
/// 3. `first.left_sibling` = loser
///
/// If the winner has order 0 it has no child list yet, and the loser becomes
/// its only child.
///
/// Both inputs must be detached roots of equal order.
pub(crate) fn concatenate_trees<K: Ord>(arena: &mut Arena<K>, a: NodeKey, b: NodeKey) -> NodeKey {
    debug_assert_eq!(arena[a].order, arena[b].order);

    let (winner, loser) = if arena[a].key > arena[b].key {
        (b, a)
    } else {
        (a, b)
    };

    match arena[winner].first_child {
        None => {
            arena[winner].first_child = Some(loser);
        }
        Some(first) => {
            let last = arena[first].left_sibling;
            arena[loser].left_sibling = last;
            arena[last].right_sibling = Some(loser);
            arena[first].left_sibling = loser;
        }
    }
    arena[winner].order += 1;

    trace!(order = arena[winner].order, "concatenated trees");
    winner
}

/// Iterates over a child list from the first child rightwards
pub(crate) struct Siblings<'a, K> {
    arena: &'a Arena<K>,
    next: Option<NodeKey>,
}

impl<'a, K> Siblings<'a, K> {
    pub(crate) fn new(arena: &'a Arena<K>, first: Option<NodeKey>) -> Self {
        Self { arena, next: first }
    }
}

impl<K> Iterator for Siblings<'_, K> {
    type Item = NodeKey;

    fn next(&mut self) -> Option<NodeKey> {
        let current = self.next?;
        self.next = self.arena[current].right_sibling;
        Some(current)
    }
}
