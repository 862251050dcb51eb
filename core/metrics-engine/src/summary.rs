//! FILENAME: core/metrics-engine/src/summary.rs
//! Spread summary of the delivery times (box-plot feed).

use serde::{Deserialize, Serialize};

/// Five-number summary plus mean and sample standard deviation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadSummary {
    pub count: u64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

/// Summarizes the spread of the input; `None` for empty input.
///
/// Quartiles interpolate linearly between closest ranks. The standard
/// deviation is the sample deviation (n - 1), accumulated with
/// Welford's update for numerical stability.
pub fn spread(values: &[i64]) -> Option<SpreadSummary> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let sorted: Vec<f64> = sorted.into_iter().map(|v| v as f64).collect();

    let mut count = 0u64;
    let mut mean = 0.0;
    let mut m2 = 0.0;
    for &value in sorted.iter() {
        count += 1;
        let delta = value - mean;
        mean += delta / count as f64;
        m2 += delta * (value - mean);
    }
    let std_dev = if count > 1 {
        (m2 / (count - 1) as f64).sqrt()
    } else {
        0.0
    };

    Some(SpreadSummary {
        count,
        min: sorted[0],
        q1: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q3: quantile(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
        mean,
        std_dev,
    })
}

/// Linear interpolation between the closest ranks of an ascending
/// slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let rank = q * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
    }
}
