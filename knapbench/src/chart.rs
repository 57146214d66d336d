//! SVG charts built from experiment records.
//!
//! Every chart puts one category per instance size on the x axis. Files are plain SVG
//! so they open in any browser and can be dropped straight into a report.
use crate::ExperimentRecord;
use anyhow::{anyhow, Result};
use knapbench_utils::write_atomic;
use log::info;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 480.0;
const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 70.0;
const MARGIN_BOTTOM: f64 = 60.0;
/// Stand-in for zero durations on log-scale axes.
const MIN_LOG_VALUE: f64 = 1e-9;

const GREEDY_COLOR: &str = "#2ecc71";
const DP_COLOR: &str = "#e74c3c";
const RATIO_COLOR: &str = "#3498db";
const SPEEDUP_COLOR: &str = "#9b59b6";
const GAP_ZERO_COLOR: &str = "#27ae60";
const GAP_COLOR: &str = "#e67e22";

pub const EXECUTION_TIME_CHART: &str = "execution_time.svg";
pub const SPEEDUP_CHART: &str = "speedup.svg";
pub const APPROXIMATION_FACTOR_CHART: &str = "approximation_factor.svg";
pub const OPTIMALITY_GAP_CHART: &str = "optimality_gap.svg";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Scale {
    Linear,
    Log10,
}

struct Canvas {
    svg: String,
    categories: Vec<String>,
    y_min: f64,
    y_max: f64,
    scale: Scale,
}

impl Canvas {
    fn new(
        title: &str,
        x_label: &str,
        y_label: &str,
        categories: Vec<String>,
        y_range: (f64, f64),
        scale: Scale,
    ) -> Self {
        let mut canvas = Self {
            svg: String::new(),
            categories,
            y_min: y_range.0,
            y_max: y_range.1,
            scale,
        };
        canvas.header(title, x_label, y_label);
        canvas
    }

    fn push(&mut self, line: String) {
        self.svg.push_str(&line);
        self.svg.push('\n');
    }

    fn plot_width(&self) -> f64 {
        WIDTH - MARGIN_LEFT - MARGIN_RIGHT
    }

    fn plot_height(&self) -> f64 {
        HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
    }

    fn slot_width(&self) -> f64 {
        self.plot_width() / self.categories.len().max(1) as f64
    }

    fn x(&self, index: usize) -> f64 {
        MARGIN_LEFT + self.slot_width() * (index as f64 + 0.5)
    }

    fn project(&self, value: f64) -> f64 {
        match self.scale {
            Scale::Linear => value,
            Scale::Log10 => value.max(MIN_LOG_VALUE).log10(),
        }
    }

    fn y(&self, value: f64) -> f64 {
        let lo = self.project(self.y_min);
        let hi = self.project(self.y_max);
        let t = if hi > lo {
            (self.project(value) - lo) / (hi - lo)
        } else {
            0.0
        };
        MARGIN_TOP + self.plot_height() * (1.0 - t.clamp(0.0, 1.0))
    }

    fn ticks(&self) -> Vec<f64> {
        match self.scale {
            Scale::Linear => (0..=5)
                .map(|i| self.y_min + (self.y_max - self.y_min) * i as f64 / 5.0)
                .collect(),
            Scale::Log10 => {
                let lo = self.y_min.max(MIN_LOG_VALUE).log10().floor() as i32;
                let hi = self.y_max.max(MIN_LOG_VALUE).log10().ceil() as i32;
                (lo..=hi).map(|e| 10f64.powi(e)).collect()
            }
        }
    }

    fn header(&mut self, title: &str, x_label: &str, y_label: &str) {
        self.push(format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\" font-family=\"sans-serif\">"
        ));
        self.push("  <rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>".to_string());
        self.push(format!(
            "  <text x=\"{}\" y=\"30\" text-anchor=\"middle\" font-size=\"16\" font-weight=\"bold\">{}</text>",
            WIDTH / 2.0,
            escape(title)
        ));
        self.push(format!(
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"12\" font-weight=\"bold\">{}</text>",
            MARGIN_LEFT + self.plot_width() / 2.0,
            HEIGHT - 15.0,
            escape(x_label)
        ));
        self.push(format!(
            "  <text x=\"20\" y=\"{0}\" text-anchor=\"middle\" font-size=\"12\" font-weight=\"bold\" transform=\"rotate(-90 20 {0})\">{1}</text>",
            MARGIN_TOP + self.plot_height() / 2.0,
            escape(y_label)
        ));

        for tick in self.ticks() {
            let y = self.y(tick);
            self.push(format!(
                "  <line x1=\"{MARGIN_LEFT}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"#dddddd\"/>",
                WIDTH - MARGIN_RIGHT
            ));
            self.push(format!(
                "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"11\">{}</text>",
                MARGIN_LEFT - 8.0,
                y + 4.0,
                format_tick(tick, self.scale)
            ));
        }
        let labels: Vec<String> = self
            .categories
            .iter()
            .enumerate()
            .map(|(i, category)| {
                format!(
                    "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"11\">{}</text>",
                    self.x(i),
                    HEIGHT - MARGIN_BOTTOM + 18.0,
                    escape(category)
                )
            })
            .collect();
        for label in labels {
            self.push(label);
        }
        self.push(format!(
            "  <rect x=\"{MARGIN_LEFT}\" y=\"{MARGIN_TOP}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"none\" stroke=\"#333333\"/>",
            self.plot_width(),
            self.plot_height()
        ));
    }

    fn line(&mut self, values: &[f64], color: &str, label: Option<&str>) {
        let points: Vec<String> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| format!("{:.1},{:.1}", self.x(i), self.y(v)))
            .collect();
        self.push(format!(
            "  <polyline points=\"{}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"2\"/>",
            points.join(" ")
        ));
        for (i, &v) in values.iter().enumerate() {
            self.push(format!(
                "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"4\" fill=\"{color}\"/>",
                self.x(i),
                self.y(v)
            ));
        }
        if let Some(label) = label {
            self.annotate(values, label);
        }
    }

    fn bars(&mut self, values: &[f64], colors: &[&str], label: &str) {
        let bar_width = self.slot_width() * 0.6;
        let baseline = self.y(self.y_min);
        for (i, &v) in values.iter().enumerate() {
            let top = self.y(v);
            let color = colors[i % colors.len()];
            self.push(format!(
                "  <rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{color}\" stroke=\"#000000\"/>",
                self.x(i) - bar_width / 2.0,
                top,
                bar_width,
                (baseline - top).max(0.0)
            ));
        }
        self.annotate(values, label);
    }

    /// Writes each value above its point, `label` holding `{}` for the formatted value.
    fn annotate(&mut self, values: &[f64], label: &str) {
        for (i, &v) in values.iter().enumerate() {
            let text = label.replace("{}", &format_value(v));
            self.push(format!(
                "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"11\" font-weight=\"bold\">{}</text>",
                self.x(i),
                self.y(v) - 8.0,
                escape(&text)
            ));
        }
    }

    fn reference_line(&mut self, value: f64, color: &str, label: &str) {
        let y = self.y(value);
        self.push(format!(
            "  <line x1=\"{MARGIN_LEFT}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"{color}\" stroke-width=\"2\" stroke-dasharray=\"8,4\"/>",
            WIDTH - MARGIN_RIGHT
        ));
        self.push(format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"11\" fill=\"{color}\">{}</text>",
            WIDTH - MARGIN_RIGHT - 6.0,
            y - 6.0,
            escape(label)
        ));
    }

    fn legend(&mut self, entries: &[(&str, &str)]) {
        for (i, (name, color)) in entries.iter().enumerate() {
            let y = MARGIN_TOP + 18.0 + 18.0 * i as f64;
            self.push(format!(
                "  <rect x=\"{:.1}\" y=\"{:.1}\" width=\"12\" height=\"12\" fill=\"{color}\"/>",
                MARGIN_LEFT + 12.0,
                y - 10.0
            ));
            self.push(format!(
                "  <text x=\"{:.1}\" y=\"{y:.1}\" font-size=\"12\">{}</text>",
                MARGIN_LEFT + 30.0,
                escape(name)
            ));
        }
    }

    fn finish(mut self) -> String {
        self.svg.push_str("</svg>\n");
        self.svg
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn format_tick(value: f64, scale: Scale) -> String {
    match scale {
        Scale::Log10 => format!("1e{}", value.log10().round() as i32),
        Scale::Linear => format_value(value),
    }
}

fn format_value(value: f64) -> String {
    if value == 0.0 || value.abs() >= 100.0 {
        format!("{:.1}", value)
    } else if value.abs() >= 1.0 {
        format!("{:.2}", value)
    } else {
        format!("{:.4}", value)
    }
}

fn categories(records: &[ExperimentRecord]) -> Vec<String> {
    records.iter().map(|r| r.num_items.to_string()).collect()
}

fn max_or(values: &[f64], fallback: f64) -> f64 {
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if max.is_finite() && max > 0.0 {
        max
    } else {
        fallback
    }
}

pub fn execution_time_chart(records: &[ExperimentRecord]) -> String {
    let greedy: Vec<f64> = records.iter().map(|r| r.greedy_time).collect();
    let dp: Vec<f64> = records.iter().map(|r| r.dp_time).collect();
    let positive: Vec<f64> = greedy
        .iter()
        .chain(&dp)
        .cloned()
        .filter(|&t| t > 0.0)
        .collect();
    let lo = positive.iter().cloned().fold(f64::INFINITY, f64::min);
    let lo = if lo.is_finite() { lo } else { MIN_LOG_VALUE };
    let hi = max_or(&positive, lo);
    let y_min = 10f64.powi(lo.log10().floor() as i32);
    let mut y_max = 10f64.powi(hi.log10().ceil() as i32);
    if y_max <= y_min {
        y_max = y_min * 10.0;
    }

    let mut canvas = Canvas::new(
        "Execution time: Greedy vs DP (log scale)",
        "Number of items (n)",
        "Execution time (seconds)",
        categories(records),
        (y_min, y_max),
        Scale::Log10,
    );
    canvas.line(&greedy, GREEDY_COLOR, None);
    canvas.line(&dp, DP_COLOR, None);
    canvas.legend(&[("Greedy O(n log n)", GREEDY_COLOR), ("DP O(n*W)", DP_COLOR)]);
    canvas.finish()
}

pub fn speedup_chart(records: &[ExperimentRecord]) -> String {
    let speedups: Vec<f64> = records.iter().map(|r| r.speedup()).collect();
    let mut canvas = Canvas::new(
        "Greedy speedup (times faster than DP)",
        "Number of items (n)",
        "Speedup (DP / Greedy)",
        categories(records),
        (0.0, max_or(&speedups, 1.0) * 1.15),
        Scale::Linear,
    );
    canvas.bars(&speedups, &[SPEEDUP_COLOR], "{}x");
    canvas.finish()
}

pub fn approximation_factor_chart(records: &[ExperimentRecord]) -> String {
    let ratios: Vec<f64> = records.iter().map(|r| r.approximation_ratio).collect();
    let lowest = ratios.iter().cloned().fold(1.0, f64::min);
    let mut canvas = Canvas::new(
        "Greedy solution quality (rho = greedy value / optimal value)",
        "Number of items (n)",
        "Approximation factor (rho)",
        categories(records),
        ((lowest - 0.01).min(0.95), 1.02),
        Scale::Linear,
    );
    canvas.reference_line(1.0, "red", "rho = 1.0 (optimal)");
    canvas.line(&ratios, RATIO_COLOR, Some("{}"));
    canvas.finish()
}

pub fn optimality_gap_chart(records: &[ExperimentRecord]) -> String {
    let gaps: Vec<f64> = records.iter().map(|r| r.gap_percent).collect();
    let colors: Vec<&str> = gaps
        .iter()
        .map(|&g| if g == 0.0 { GAP_ZERO_COLOR } else { GAP_COLOR })
        .collect();
    let mut canvas = Canvas::new(
        "Distance from the optimum (0% gap means greedy found it)",
        "Number of items (n)",
        "Optimality gap (%)",
        categories(records),
        (0.0, max_or(&gaps, 1.0) * 1.15),
        Scale::Linear,
    );
    canvas.bars(&gaps, &colors, "{}%");
    canvas.finish()
}

/// Writes the four comparison charts into `out_dir` and returns their paths.
pub fn render_charts(records: &[ExperimentRecord], out_dir: &Path) -> Result<Vec<PathBuf>> {
    if records.is_empty() {
        return Err(anyhow!("No experiment records to plot"));
    }

    let charts = [
        (EXECUTION_TIME_CHART, execution_time_chart(records)),
        (SPEEDUP_CHART, speedup_chart(records)),
        (APPROXIMATION_FACTOR_CHART, approximation_factor_chart(records)),
        (OPTIMALITY_GAP_CHART, optimality_gap_chart(records)),
    ];
    let mut paths = Vec::with_capacity(charts.len());
    for (name, svg) in charts {
        let path = out_dir.join(name);
        write_atomic(&path, |w| {
            w.write_all(svg.as_bytes())?;
            Ok(())
        })?;
        info!("Chart saved: '{}'", path.display());
        paths.push(path);
    }
    Ok(paths)
}
