use crate::KnapsackError;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, ops::RangeInclusive};

pub const WEIGHT_RANGE: RangeInclusive<u32> = 1..=50;
pub const VALUE_RANGE: RangeInclusive<u32> = 10..=300;
/// Capacity is `CAPACITY_NUMERATOR / CAPACITY_DENOMINATOR` of the total weight, rounded down.
pub const CAPACITY_NUMERATOR: u64 = 3;
pub const CAPACITY_DENOMINATOR: u64 = 10;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub num_items: usize,
    pub weights: Vec<u32>,
    pub values: Vec<u32>,
    pub max_weight: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    pub items: Vec<usize>,
    pub total_value: u64,
    pub total_weight: u64,
}

impl Solution {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a solution from chosen item indices. Indices are sorted and the totals
    /// are derived from `challenge`, so they always agree with `items`.
    pub fn from_items(challenge: &Challenge, mut items: Vec<usize>) -> Self {
        items.sort_unstable();
        let total_weight = items.iter().map(|&i| challenge.weights[i] as u64).sum();
        let total_value = items.iter().map(|&i| challenge.values[i] as u64).sum();
        Self {
            items,
            total_value,
            total_weight,
        }
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }
}

impl Challenge {
    pub fn new(weights: Vec<u32>, values: Vec<u32>, max_weight: u32) -> Result<Self, KnapsackError> {
        let challenge = Self {
            num_items: weights.len(),
            weights,
            values,
            max_weight,
        };
        challenge.validate()?;
        Ok(challenge)
    }

    /// Rejects instances the solvers are not defined for: mismatched lengths or zero weights.
    pub fn validate(&self) -> Result<(), KnapsackError> {
        if self.weights.len() != self.num_items || self.values.len() != self.num_items {
            return Err(KnapsackError::InvalidInstance(format!(
                "{} items but {} weights and {} values",
                self.num_items,
                self.weights.len(),
                self.values.len()
            )));
        }
        if let Some(item) = self.weights.iter().position(|&w| w == 0) {
            return Err(KnapsackError::InvalidInstance(format!(
                "Item ({}) has zero weight",
                item
            )));
        }
        Ok(())
    }

    /// Samples an instance from `rng`. Weights, then values, are drawn uniformly from
    /// `WEIGHT_RANGE` and `VALUE_RANGE`.
    pub fn generate_instance<R: Rng>(num_items: usize, rng: &mut R) -> Self {
        let weights: Vec<u32> = (0..num_items)
            .map(|_| rng.gen_range(WEIGHT_RANGE))
            .collect();
        let values: Vec<u32> = (0..num_items)
            .map(|_| rng.gen_range(VALUE_RANGE))
            .collect();

        // 30% of the total weight keeps the instance tight enough for greedy to miss
        let total_weight: u64 = weights.iter().map(|&w| w as u64).sum();
        let max_weight = (total_weight * CAPACITY_NUMERATOR / CAPACITY_DENOMINATOR) as u32;

        Self {
            num_items,
            weights,
            values,
            max_weight,
        }
    }

    pub fn generate_seeded(num_items: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate_instance(num_items, &mut rng)
    }

    /// Number of cells in the `(n + 1) x (max_weight + 1)` dynamic programming table.
    pub fn table_cells(&self) -> u64 {
        (self.num_items as u64 + 1) * (self.max_weight as u64 + 1)
    }

    /// Checks that `solution` is feasible for this instance and returns its total value.
    pub fn evaluate_solution(&self, solution: &Solution) -> Result<u64, KnapsackError> {
        let selected_items: HashSet<usize> = solution.items.iter().cloned().collect();
        if selected_items.len() != solution.items.len() {
            return Err(KnapsackError::InvalidSolution(
                "Duplicate items selected.".to_string(),
            ));
        }

        let mut total_weight = 0u64;
        let mut total_value = 0u64;
        for &item in &solution.items {
            if item >= self.num_items {
                return Err(KnapsackError::InvalidSolution(format!(
                    "Item ({}) is out of bounds",
                    item
                )));
            }
            total_weight += self.weights[item] as u64;
            total_value += self.values[item] as u64;
        }

        if total_weight > self.max_weight as u64 {
            return Err(KnapsackError::InvalidSolution(format!(
                "Total weight ({}) exceeded max weight ({})",
                total_weight, self.max_weight
            )));
        }
        if total_weight != solution.total_weight || total_value != solution.total_value {
            return Err(KnapsackError::InvalidSolution(format!(
                "Reported totals (value {}, weight {}) do not match items (value {}, weight {})",
                solution.total_value, solution.total_weight, total_value, total_weight
            )));
        }
        Ok(total_value)
    }
}
