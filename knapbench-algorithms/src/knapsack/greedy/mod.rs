//! Greedy heuristic for the 0/1 knapsack.
//!
//! # Description
//! Ranks items by value density (`value / weight`) and accepts each one, in that order,
//! whenever it still fits. Items that are skipped are never reconsidered.
//! Runs in O(n log n) and always returns a feasible solution, but not necessarily an
//! optimal one.
use knapbench_challenges::knapsack::{Challenge, Solution};

/// `challenge` must be valid (see [`Challenge::validate`]); invalid instances are not defended against.
pub fn solve_challenge(challenge: &Challenge) -> Solution {
    debug_assert!(challenge.validate().is_ok());
    // Pair every item with its value-to-weight ratio
    let mut item_ratios: Vec<(usize, f64)> = (0..challenge.num_items)
        .map(|i| {
            let ratio = challenge.values[i] as f64 / challenge.weights[i] as f64;
            (i, ratio)
        })
        .collect();

    // Stable sort: equal ratios keep their original index order
    item_ratios.sort_by(|a, b| b.1.total_cmp(&a.1));

    let max_weight = challenge.max_weight as u64;
    let mut selected_items = Vec::with_capacity(challenge.num_items);
    let mut total_weight = 0u64;
    for &(item, _) in &item_ratios {
        let weight = challenge.weights[item] as u64;
        if total_weight + weight <= max_weight {
            total_weight += weight;
            selected_items.push(item);
        }
    }

    Solution::from_items(challenge, selected_items)
}
