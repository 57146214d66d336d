use knapbench_challenges::knapsack::{Challenge, Solution};
use knapbench_utils::{safe_ratio, safe_ratio_f64, shortfall_percent};
use serde::{Deserialize, Serialize};

/// Version of the exported column layout. Bump when `ExperimentRecord` changes shape.
pub const RECORD_SCHEMA_VERSION: u32 = 1;

/// One row of the results table: a single instance solved by both algorithms.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExperimentRecord {
    #[serde(rename = "n_itens")]
    pub num_items: u64,
    #[serde(rename = "capacidade")]
    pub capacity: u64,
    #[serde(rename = "greedy_valor")]
    pub greedy_value: u64,
    #[serde(rename = "greedy_peso")]
    pub greedy_weight: u64,
    #[serde(rename = "greedy_itens")]
    pub greedy_items: u64,
    #[serde(rename = "greedy_tempo")]
    pub greedy_time: f64,
    #[serde(rename = "dp_valor")]
    pub dp_value: u64,
    #[serde(rename = "dp_peso")]
    pub dp_weight: u64,
    #[serde(rename = "dp_itens")]
    pub dp_items: u64,
    #[serde(rename = "dp_tempo")]
    pub dp_time: f64,
    #[serde(rename = "fator_aproximacao")]
    pub approximation_ratio: f64,
    #[serde(rename = "gap_percentual")]
    pub gap_percent: f64,
}

impl ExperimentRecord {
    pub const HEADER: [&'static str; 12] = [
        "n_itens",
        "capacidade",
        "greedy_valor",
        "greedy_peso",
        "greedy_itens",
        "greedy_tempo",
        "dp_valor",
        "dp_peso",
        "dp_itens",
        "dp_tempo",
        "fator_aproximacao",
        "gap_percentual",
    ];

    /// Builds the record for `challenge`. Times are in seconds. The two derived metrics
    /// only look at the solution values and are 0 when the optimum is 0.
    pub fn new(
        challenge: &Challenge,
        greedy: &Solution,
        greedy_time: f64,
        exact: &Solution,
        dp_time: f64,
    ) -> Self {
        Self {
            num_items: challenge.num_items as u64,
            capacity: challenge.max_weight as u64,
            greedy_value: greedy.total_value,
            greedy_weight: greedy.total_weight,
            greedy_items: greedy.num_items() as u64,
            greedy_time,
            dp_value: exact.total_value,
            dp_weight: exact.total_weight,
            dp_items: exact.num_items() as u64,
            dp_time,
            approximation_ratio: safe_ratio(greedy.total_value, exact.total_value),
            gap_percent: shortfall_percent(greedy.total_value, exact.total_value),
        }
    }

    /// How many times faster greedy ran than the DP. 0 when greedy took no measurable time.
    pub fn speedup(&self) -> f64 {
        safe_ratio_f64(self.dp_time, self.greedy_time)
    }

    pub fn greedy_is_optimal(&self) -> bool {
        self.greedy_value == self.dp_value
    }
}
