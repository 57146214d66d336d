pub mod dynamic_programming;
pub mod greedy;
