//! Exact 0/1 knapsack by dynamic programming.
//!
//! # Description
//! Fills the full `(n + 1) x (W + 1)` table where `dp[i][w]` is the best value reachable
//! with the first `i` items under capacity `w`, then walks it backwards to recover the
//! chosen items. O(n * W) time and space.
//!
//! Reconstruction records item `i - 1` only when `dp[i][w] != dp[i - 1][w]`, so when
//! including and excluding an item give the same value the item is left out.
use knapbench_challenges::{
    knapsack::{Challenge, Solution},
    KnapsackError,
};
use log::debug;

/// Largest table (in cells) allocated unless the caller asks for another limit.
pub const MAX_TABLE_CELLS: u64 = 1 << 27;

pub fn solve_challenge(challenge: &Challenge) -> Result<Solution, KnapsackError> {
    solve_challenge_with_limit(challenge, MAX_TABLE_CELLS)
}

pub fn solve_challenge_with_limit(
    challenge: &Challenge,
    max_cells: u64,
) -> Result<Solution, KnapsackError> {
    challenge.validate()?;
    let num_items = challenge.num_items;
    let max_weight = challenge.max_weight as usize;
    if num_items == 0 || max_weight == 0 {
        return Ok(Solution::empty());
    }

    let cells = challenge.table_cells();
    if cells > max_cells {
        return Err(KnapsackError::ResourceExhausted {
            cells,
            limit: max_cells,
        });
    }
    debug!(
        "Allocating DP table of {} x {} ({} cells)",
        num_items + 1,
        max_weight + 1,
        cells
    );

    // Row-major, row i holds dp[i][0..=max_weight]. Row 0 and column 0 stay zero.
    let width = max_weight + 1;
    let mut dp: Vec<u64> = Vec::new();
    dp.try_reserve_exact(cells as usize)
        .map_err(|_| KnapsackError::ResourceExhausted {
            cells,
            limit: max_cells,
        })?;
    dp.resize(cells as usize, 0);

    for i in 1..=num_items {
        let weight = challenge.weights[i - 1] as usize;
        let value = challenge.values[i - 1] as u64;
        let (prev_rows, rows) = dp.split_at_mut(i * width);
        let prev = &prev_rows[(i - 1) * width..];
        let row = &mut rows[..width];
        for w in 1..=max_weight {
            row[w] = if weight > w {
                prev[w]
            } else {
                prev[w].max(value + prev[w - weight])
            };
        }
    }

    // Backtrack from (n, max_weight)
    let mut selected_items = Vec::new();
    let mut w = max_weight;
    for i in (1..=num_items).rev() {
        if dp[i * width + w] != dp[(i - 1) * width + w] {
            selected_items.push(i - 1);
            w -= challenge.weights[i - 1] as usize;
        }
    }

    let solution = Solution::from_items(challenge, selected_items);
    debug_assert_eq!(solution.total_value, dp[num_items * width + max_weight]);
    Ok(solution)
}
