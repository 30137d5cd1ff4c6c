//! Level-order rendering of binomial trees
//!
//! A binomial tree of order k has exactly C(k, d) nodes at depth d, so a
//! breadth-first walk can split its output into one line per depth by counting
//! keys against the row of Pascal's triangle for k, without tracking depths.

use crate::node::{Arena, NodeKey, Siblings};
use crate::queue::BoundedQueue;
use std::fmt::Display;

/// Delimiter line emitted after each tree of the forest
pub const TREE_DELIMITER: &str = "---";

/// Number of ways to choose `r` items out of `n`
///
/// Returns 0 when `r > n`.
///
/// ```rust
/// use binomial_queue::level_order::binomial_coefficient;
///
/// assert_eq!(binomial_coefficient(4, 2), 6);
/// assert_eq!(binomial_coefficient(3, 5), 0);
/// ```
pub fn binomial_coefficient(n: usize, r: usize) -> u64 {
    if r > n {
        return 0;
    }
    let r = r.min(n - r);
    let mut result: u128 = 1;
    for i in 1..=r {
        // result * (n - r + i) / i stays integral: it is C(n - r + i, i)
        result = result * (n - r + i) as u128 / i as u128;
    }
    u64::try_from(result).unwrap_or(u64::MAX)
}

/// Renders the tree rooted at `root` one depth per line
///
/// The frontier queue holds sibling-list heads. Each dequeued head is walked
/// left to right; every node's key is printed and its first child (the head of
/// the next level's list) is enqueued. A line ends when the number of keys
/// printed reaches C(order, depth).
pub(crate) fn tree_lines<K: Display>(arena: &Arena<K>, root: NodeKey) -> Vec<String> {
    let order = arena[root].order;
    let widths: Vec<u64> = (0..=order).map(|d| binomial_coefficient(order, d)).collect();

    // Pending heads span at most two adjacent depths, each bounded by the
    // widest level of the tree.
    let frontier = usize::try_from(binomial_coefficient(order, order / 2))
        .unwrap_or(usize::MAX)
        .saturating_mul(2);
    let mut queue = BoundedQueue::with_capacity(frontier);
    queue.enqueue(root).expect("frontier bound");

    let mut lines = Vec::with_capacity(order + 1);
    let mut line: Vec<String> = Vec::new();
    let mut depth = 0;

    while let Some(head) = queue.dequeue() {
        for node in Siblings::new(arena, Some(head)) {
            if let Some(child) = arena[node].first_child {
                queue.enqueue(child).expect("frontier bound");
            }

            line.push(arena[node].key.to_string());
            if line.len() as u64 == widths[depth] {
                lines.push(line.join(" "));
                line.clear();
                depth += 1;
            }
        }
    }

    lines
}
