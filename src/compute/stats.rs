//! Sample statistics for judging generator output.
//!
//! These are quick sanity measures, not a randomness test battery.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Chi-squared critical value for 9 degrees of freedom at 95% confidence.
pub const CHI_SQUARED_CRITICAL_9DF: f64 = 16.92;

/// Bucket counts of `value % buckets` over all samples.
pub fn bucket_counts(samples: &[u64], buckets: usize) -> Vec<usize> {
    let mut counts = vec![0usize; buckets];
    if buckets == 0 {
        return counts;
    }
    for &v in samples {
        counts[(v % buckets as u64) as usize] += 1;
    }
    counts
}

/// Pearson chi-squared statistic of `counts` against a uniform expectation.
pub fn chi_squared_uniform(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    if counts.is_empty() || total == 0 {
        return 0.0;
    }
    let expected = total as f64 / counts.len() as f64;

    counts
        .iter()
        .map(|&c| {
            let diff = c as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

/// Number of samples with each of the low `width` bits set.
pub fn bit_frequencies(samples: &[u64], width: u32) -> Vec<usize> {
    let width = width.min(64) as usize;
    let mut counts = vec![0usize; width];
    for &v in samples {
        for (bit, count) in counts.iter_mut().enumerate() {
            *count += ((v >> bit) & 1) as usize;
        }
    }
    counts
}

/// Z-score of the number of ascending/descending runs.
///
/// Ties count as descending. Returns 0.0 for fewer than three samples.
pub fn runs_z_score(samples: &[u64]) -> f64 {
    let n = samples.len();
    if n < 3 {
        return 0.0;
    }

    let mut runs = 1usize;
    let mut ascending = samples[1] > samples[0];
    for pair in samples[1..].windows(2) {
        let up = pair[1] > pair[0];
        if up != ascending {
            runs += 1;
            ascending = up;
        }
    }

    let n = n as f64;
    let expected = (2.0 * n - 1.0) / 3.0;
    let variance = (16.0 * n - 29.0) / 90.0;
    (runs as f64 - expected) / variance.sqrt()
}

/// Lag-1 autocorrelation coefficient.
pub fn lag1_autocorrelation(samples: &[u64]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let xs: Vec<f64> = samples.iter().map(|&v| v as f64).collect();
    let mean = xs.iter().sum::<f64>() / xs.len() as f64;

    let variance: f64 = xs.iter().map(|x| (x - mean) * (x - mean)).sum();
    if variance == 0.0 {
        return 0.0;
    }
    let covariance: f64 = xs
        .windows(2)
        .map(|w| (w[0] - mean) * (w[1] - mean))
        .sum();
    covariance / variance
}

/// Number of samples equal to an earlier sample.
pub fn collisions(samples: &[u64]) -> usize {
    let mut seen = HashSet::with_capacity(samples.len());
    samples.iter().filter(|&&v| !seen.insert(v)).count()
}

/// Summary statistics for a batch of generated values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleStats {
    pub samples: usize,
    pub bits: u32,
    /// Counts of `value % 10`.
    pub buckets: Vec<usize>,
    pub chi_squared: f64,
    /// Whether `chi_squared` is below [`CHI_SQUARED_CRITICAL_9DF`].
    pub uniform: bool,
    /// Fraction of samples with each bit set, least significant first.
    pub bit_balance: Vec<f64>,
    pub runs_z: f64,
    pub autocorrelation: f64,
    pub collisions: usize,
    pub zeros: usize,
}

impl SampleStats {
    /// Compute statistics over `samples` produced at `bits` width.
    pub fn from_samples(samples: &[u64], bits: u32) -> Self {
        let buckets = bucket_counts(samples, 10);
        let chi_squared = chi_squared_uniform(&buckets);
        let total = samples.len().max(1) as f64;

        Self {
            samples: samples.len(),
            bits,
            uniform: chi_squared < CHI_SQUARED_CRITICAL_9DF,
            chi_squared,
            buckets,
            bit_balance: bit_frequencies(samples, bits)
                .into_iter()
                .map(|c| c as f64 / total)
                .collect(),
            runs_z: runs_z_score(samples),
            autocorrelation: lag1_autocorrelation(samples),
            collisions: collisions(samples),
            zeros: samples.iter().filter(|&&v| v == 0).count(),
        }
    }
}
