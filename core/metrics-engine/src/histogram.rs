//! FILENAME: core/metrics-engine/src/histogram.rs
//! Equal-width histogram over the derived delivery times.
//!
//! Unlike the categorical counts, a histogram's axis is continuous:
//! zero-count bins inside the data range are kept so the rendered
//! distribution has no gaps.

use serde::{Deserialize, Serialize};

/// One `[lower, upper)` bin; the last bin includes its upper bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub label: String,
    pub lower: f64,
    pub upper: f64,
    pub count: u64,
}

/// Equal-width bins covering `[min, max]` of the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Sum of all bin counts; equals the input length.
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|b| b.count).sum()
    }
}

/// Builds an equal-width histogram. Empty input or a zero bin count
/// yields an empty histogram; a single distinct value yields one
/// degenerate bin holding everything.
pub fn histogram(values: &[i64], bin_count: usize) -> Histogram {
    if values.is_empty() || bin_count == 0 {
        return Histogram::default();
    }

    let mut min = values[0];
    let mut max = values[0];
    for &value in values {
        min = min.min(value);
        max = max.max(value);
    }
    let start = min as f64;
    let end = max as f64;

    if start == end {
        return Histogram {
            bins: vec![HistogramBin {
                label: format_label(start, end),
                lower: start,
                upper: end,
                count: values.len() as u64,
            }],
        };
    }

    let interval = (end - start) / bin_count as f64;

    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|idx| {
            let lower = start + idx as f64 * interval;
            let upper = if idx + 1 == bin_count {
                end
            } else {
                start + (idx + 1) as f64 * interval
            };
            HistogramBin {
                label: format_label(lower, upper),
                lower,
                upper,
                count: 0,
            }
        })
        .collect();

    for &value in values {
        // The maximum lands exactly on bin_count; clamp it into the
        // last bin so the upper edge is inclusive.
        let idx = (((value as f64 - start) / interval).floor() as usize).min(bin_count - 1);
        bins[idx].count += 1;
    }

    Histogram { bins }
}

/// Bin label for axis ticks: whole-number bounds render without
/// decimals.
fn format_label(lower: f64, upper: f64) -> String {
    if lower.fract() == 0.0 && upper.fract() == 0.0 {
        format!("{}-{}", lower as i64, upper as i64)
    } else {
        format!("{:.2}-{:.2}", lower, upper)
    }
}
