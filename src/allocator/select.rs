//! Top-K selection by ascending cost.
//!
//! # Algorithm
//! Partition with `select_nth_unstable_by` so the K cheapest items occupy
//! the front (O(n)), truncate, then sort only those K (O(K log K)).
//! The result is identical to sorting everything and taking K, up to
//! the order of equal-cost items, which is unspecified.

use std::cmp::Ordering;

use super::ScoredIndex;

fn by_cost(a: &ScoredIndex, b: &ScoredIndex) -> Ordering {
    a.cost.total_cmp(&b.cost)
}

/// Shrinks `items` to its `k` lowest-cost entries, in no particular order.
pub(crate) fn retain_cheapest(items: &mut Vec<ScoredIndex>, k: usize) {
    if k == 0 {
        items.clear();
    } else if k < items.len() {
        items.select_nth_unstable_by(k - 1, by_cost);
        items.truncate(k);
    }
}

/// Returns the `k` lowest-cost items, ascending by cost.
///
/// `k` larger than `items.len()` is clamped; `k == 0` yields nothing.
pub fn select_top_k(mut items: Vec<ScoredIndex>, k: usize) -> Vec<ScoredIndex> {
    retain_cheapest(&mut items, k);
    items.sort_unstable_by(by_cost);
    items
}
