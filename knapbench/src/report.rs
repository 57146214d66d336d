use crate::{ExperimentRecord, ExperimentSettings};
use std::fmt::{self, Write};

const RULE_WIDTH: usize = 70;

fn rule(c: char) -> String {
    c.to_string().repeat(RULE_WIDTH)
}

pub fn write_banner(out: &mut impl Write, settings: &ExperimentSettings) -> fmt::Result {
    writeln!(out, "{}", rule('='))?;
    writeln!(out, " 0/1 KNAPSACK: GREEDY vs DYNAMIC PROGRAMMING")?;
    writeln!(out, "{}", rule('='))?;
    writeln!(
        out,
        "Seed: {} ({:?}), sizes: {:?}",
        settings.seed, settings.seed_policy, settings.sizes
    )?;
    writeln!(out, "{}", rule('='))?;
    Ok(())
}

/// Side by side comparison of both solvers for a single instance.
pub fn write_experiment(out: &mut impl Write, record: &ExperimentRecord) -> fmt::Result {
    writeln!(out, "\n{}", rule('='))?;
    writeln!(out, " EXPERIMENT: {} ITEMS", record.num_items)?;
    writeln!(out, "{}", rule('='))?;
    writeln!(out, "\nKnapsack capacity: {}", record.capacity)?;
    writeln!(out, "\n{:<25} {:>20} {:>20}", "Metric", "GREEDY", "DP (OPTIMAL)")?;
    writeln!(out, "{}", rule('-'))?;
    writeln!(
        out,
        "{:<25} {:>20} {:>20}",
        "Total value", record.greedy_value, record.dp_value
    )?;
    writeln!(
        out,
        "{:<25} {:>20} {:>20}",
        "Total weight", record.greedy_weight, record.dp_weight
    )?;
    writeln!(
        out,
        "{:<25} {:>20} {:>20}",
        "Items chosen", record.greedy_items, record.dp_items
    )?;
    writeln!(
        out,
        "{:<25} {:>19.6}s {:>19.6}s",
        "Execution time", record.greedy_time, record.dp_time
    )?;
    writeln!(out, "{}", rule('-'))?;
    writeln!(out, "\nQUALITY:")?;
    writeln!(
        out,
        "   Approximation factor (rho): {:.4}",
        record.approximation_ratio
    )?;
    writeln!(out, "   Optimality gap: {:.2}%", record.gap_percent)?;
    writeln!(
        out,
        "   Greedy reached {:.2}% of the optimal value",
        100.0 - record.gap_percent
    )?;
    if record.dp_time > 0.0 {
        writeln!(out, "\nTIME:")?;
        writeln!(
            out,
            "   Greedy speedup: {:.2}x faster than DP",
            record.speedup()
        )?;
    }
    Ok(())
}

/// Aggregate table over every experiment, followed by notes on the two algorithms.
pub fn write_summary(out: &mut impl Write, records: &[ExperimentRecord]) -> fmt::Result {
    writeln!(out, "\n\n{}", rule('='))?;
    writeln!(out, " SUMMARY - ALL EXPERIMENTS")?;
    writeln!(out, "{}", rule('='))?;
    writeln!(
        out,
        "\n{:<12} {:>12} {:>12} {:>15} {:>15}",
        "N items", "Greedy (s)", "DP (s)", "Gap (%)", "Factor rho"
    )?;
    writeln!(out, "{}", rule('-'))?;
    for record in records {
        writeln!(
            out,
            "{:<12} {:>12.6} {:>12.6} {:>15.2} {:>15.4}",
            record.num_items,
            record.greedy_time,
            record.dp_time,
            record.gap_percent,
            record.approximation_ratio
        )?;
    }
    let optimal = records.iter().filter(|r| r.greedy_is_optimal()).count();
    writeln!(
        out,
        "\nGreedy matched the optimum on {} of {} instances",
        optimal,
        records.len()
    )?;

    writeln!(out, "\n{}", rule('='))?;
    writeln!(out, " NOTES:")?;
    writeln!(out, "{}", rule('='))?;
    writeln!(out, "- Greedy: O(n log n), fast but not guaranteed optimal")?;
    writeln!(out, "- DP: O(n*W), exact, used as the baseline")?;
    writeln!(out, "- Factor rho: closer to 1.0 means a better approximation")?;
    writeln!(out, "- Gap: percentage shortfall of greedy against the optimum")?;
    writeln!(out, "{}", rule('='))?;
    Ok(())
}

// Writing into a String never fails
pub fn format_banner(settings: &ExperimentSettings) -> String {
    let mut out = String::new();
    write_banner(&mut out, settings).unwrap();
    out
}

pub fn format_experiment(record: &ExperimentRecord) -> String {
    let mut out = String::new();
    write_experiment(&mut out, record).unwrap();
    out
}

pub fn format_summary(records: &[ExperimentRecord]) -> String {
    let mut out = String::new();
    write_summary(&mut out, records).unwrap();
    out
}

pub fn print_banner(settings: &ExperimentSettings) {
    print!("{}", format_banner(settings));
}

pub fn print_experiment(record: &ExperimentRecord) {
    print!("{}", format_experiment(record));
}

pub fn print_summary(records: &[ExperimentRecord]) {
    print!("{}", format_summary(records));
}
