use anyhow::{anyhow, Result};
use knapbench_algorithms::knapsack::dynamic_programming::MAX_TABLE_CELLS;
use knapbench_utils::{dejsonify, read_inline_or_file};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, str::FromStr};

pub const DEFAULT_SIZES: [usize; 4] = [50, 100, 200, 500];
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_OUTPUT: &str = "resultados_experimentos.csv";

/// How each experiment in a batch picks its instance seed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeedPolicy {
    /// `seed + n_items`, so every size gets its own reproducible instance.
    #[default]
    PerSize,
    /// The same seed for every size.
    Fixed,
    /// No reseeding: all sizes draw from one stream started at `seed`.
    Stream,
}

impl SeedPolicy {
    pub fn seed_for(&self, seed: u64, num_items: usize) -> Option<u64> {
        match self {
            SeedPolicy::PerSize => Some(seed.wrapping_add(num_items as u64)),
            SeedPolicy::Fixed => Some(seed),
            SeedPolicy::Stream => None,
        }
    }
}

impl FromStr for SeedPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "per_size" => Ok(SeedPolicy::PerSize),
            "fixed" => Ok(SeedPolicy::Fixed),
            "stream" => Ok(SeedPolicy::Stream),
            _ => Err(anyhow!("Unknown seed policy '{}'", s)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ExperimentSettings {
    pub sizes: Vec<usize>,
    pub seed: u64,
    pub seed_policy: SeedPolicy,
    pub output: PathBuf,
    pub max_table_cells: u64,
}

impl Default for ExperimentSettings {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            seed: DEFAULT_SEED,
            seed_policy: SeedPolicy::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            max_table_cells: MAX_TABLE_CELLS,
        }
    }
}

/// Parses settings from a json string, or from a file when `settings` ends with `.json`.
pub fn load_settings(settings: &str) -> Result<ExperimentSettings> {
    let settings = read_inline_or_file(settings, ".json")?;
    dejsonify::<ExperimentSettings>(&settings)
        .map_err(|e| anyhow!("Failed to parse settings: {}", e))
}
