/// `numerator / denominator` as `f64`, or 0 when the denominator is 0.
pub fn safe_ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Same as [`safe_ratio`] for measured quantities such as durations in seconds.
pub fn safe_ratio_f64(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Percentage by which `value` falls short of `reference`. 0 when `reference` is 0.
pub fn shortfall_percent(value: u64, reference: u64) -> f64 {
    if reference == 0 {
        0.0
    } else {
        100.0 * (reference as f64 - value as f64) / reference as f64
    }
}
