use crate::{ExperimentRecord, ExperimentSettings};
use anyhow::{anyhow, Context, Result};
use knapbench_algorithms::knapsack::{dynamic_programming, greedy};
use knapbench_challenges::knapsack::Challenge;
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};
use std::time::Instant;

/// Runs greedy and exact solvers side by side on generated instances.
///
/// The runner owns the random stream used when an experiment has no seed of its own,
/// so unseeded experiments continue one deterministic sequence.
pub struct ExperimentRunner {
    rng: StdRng,
    max_table_cells: u64,
}

impl ExperimentRunner {
    pub fn new(base_seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(base_seed),
            max_table_cells: dynamic_programming::MAX_TABLE_CELLS,
        }
    }

    pub fn from_settings(settings: &ExperimentSettings) -> Self {
        Self::new(settings.seed).with_max_table_cells(settings.max_table_cells)
    }

    pub fn with_max_table_cells(mut self, max_table_cells: u64) -> Self {
        self.max_table_cells = max_table_cells;
        self
    }

    pub fn run_experiment(&mut self, num_items: usize, seed: Option<u64>) -> Result<ExperimentRecord> {
        info!("Running experiment with {} items (seed {:?})", num_items, seed);
        let challenge = match seed {
            Some(seed) => Challenge::generate_seeded(num_items, seed),
            None => Challenge::generate_instance(num_items, &mut self.rng),
        };
        self.run_challenge(&challenge)
    }

    /// Solves `challenge` with both algorithms and builds its record.
    pub fn run_challenge(&self, challenge: &Challenge) -> Result<ExperimentRecord> {
        challenge.validate()?;
        debug!(
            "Instance has {} items, capacity {}",
            challenge.num_items, challenge.max_weight
        );

        let start = Instant::now();
        let greedy_solution = greedy::solve_challenge(challenge);
        let greedy_time = start.elapsed().as_secs_f64();

        let start = Instant::now();
        let exact_solution =
            dynamic_programming::solve_challenge_with_limit(challenge, self.max_table_cells)?;
        let dp_time = start.elapsed().as_secs_f64();

        challenge
            .evaluate_solution(&greedy_solution)
            .map_err(|e| anyhow!("Greedy solution rejected: {}", e))?;
        challenge
            .evaluate_solution(&exact_solution)
            .map_err(|e| anyhow!("Exact solution rejected: {}", e))?;

        let record = ExperimentRecord::new(
            challenge,
            &greedy_solution,
            greedy_time,
            &exact_solution,
            dp_time,
        );
        info!(
            "n={} greedy={} dp={} ratio={:.4} gap={:.2}%",
            record.num_items,
            record.greedy_value,
            record.dp_value,
            record.approximation_ratio,
            record.gap_percent
        );
        Ok(record)
    }

    /// Runs every size in `settings.sizes`, in order. `on_record` sees each record as soon
    /// as it is produced. The first failure aborts the batch.
    pub fn run_batch<F>(
        &mut self,
        settings: &ExperimentSettings,
        mut on_record: F,
    ) -> Result<Vec<ExperimentRecord>>
    where
        F: FnMut(&ExperimentRecord),
    {
        let mut records = Vec::with_capacity(settings.sizes.len());
        for &num_items in &settings.sizes {
            let seed = settings.seed_policy.seed_for(settings.seed, num_items);
            let record = self
                .run_experiment(num_items, seed)
                .with_context(|| format!("Experiment with {} items failed", num_items))?;
            on_record(&record);
            records.push(record);
        }
        Ok(records)
    }
}
