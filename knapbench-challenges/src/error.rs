use thiserror::Error;

/// Failures raised while building or solving a knapsack instance.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KnapsackError {
    #[error("Invalid instance: {0}")]
    InvalidInstance(String),

    #[error("Invalid solution: {0}")]
    InvalidSolution(String),

    #[error("DP table of {cells} cells exceeds the limit of {limit} cells")]
    ResourceExhausted { cells: u64, limit: u64 },
}
