//! Descriptive statistics helpers.

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

/// Summary of a numeric sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Distribution {
    /// Sample size.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Middle value, or the mean of the two middle values.
    pub median: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

impl Distribution {
    /// Summarize a sample. An empty sample yields all zeros.
    #[must_use]
    pub fn of(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        Self {
            count: sorted.len(),
            mean: mean(&sorted).unwrap_or(0.0),
            median: median_sorted(&sorted),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
        }
    }
}

/// Arithmetic mean, `None` for an empty sample.
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn median_sorted(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 { (sorted[mid - 1] + sorted[mid]) / 2.0 } else { sorted[mid] }
}

/// Pearson correlation coefficient.
///
/// `None` when there are fewer than two points or either variable is constant.
#[must_use]
pub fn pearson(points: &[(f64, f64)]) -> Option<f64> {
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.1).sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for &(x, y) in points {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}

/// Least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearFit {
    /// Change in y per unit of x.
    pub slope: f64,
    /// y at x = 0.
    pub intercept: f64,
}

impl LinearFit {
    /// Fit a line through the points. `None` when x is constant or there are fewer than two points.
    #[must_use]
    pub fn fit(points: &[(f64, f64)]) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }

        let n = points.len() as f64;
        let mean_x = points.iter().map(|p| p.0).sum::<f64>() / n;
        let mean_y = points.iter().map(|p| p.1).sum::<f64>() / n;

        let (mut sxy, mut sxx) = (0.0, 0.0);
        for &(x, y) in points {
            sxy += (x - mean_x) * (y - mean_y);
            sxx += (x - mean_x) * (x - mean_x);
        }

        if sxx == 0.0 {
            return None;
        }
        let slope = sxy / sxx;
        Some(Self { slope, intercept: mean_y - slope * mean_x })
    }

    /// Evaluate the line at `x`.
    #[must_use]
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Equal-width histogram over `[min, max]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// Lower edge of the first bucket.
    pub min: f64,
    /// Upper edge of the last bucket.
    pub max: f64,
    /// Values per bucket.
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin values into `bins` equal-width buckets. The maximum lands in the last bucket.
    #[must_use]
    pub fn new(values: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let mut counts = vec![0; bins];

        if values.is_empty() {
            return Self { min: 0.0, max: 1.0, counts };
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let mut max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if max <= min {
            max = min + 1.0;
        }

        let mut histogram = Self { min, max, counts };
        for &v in values {
            let bin = histogram.bin_of(v);
            histogram.counts[bin] += 1;
        }
        histogram
    }

    /// Bucket index of `value`, clamped to the histogram range.
    #[must_use]
    pub fn bin_of(&self, value: f64) -> usize {
        let last = self.counts.len().saturating_sub(1);
        if value <= self.min {
            return 0;
        }
        (((value - self.min) / self.bin_width()).floor() as usize).min(last)
    }

    /// Width of one bucket.
    #[must_use]
    pub fn bin_width(&self) -> f64 {
        (self.max - self.min) / self.counts.len() as f64
    }

    /// `(start, end, count)` for every bucket.
    pub fn buckets(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        let width = self.bin_width();
        self.counts.iter().enumerate().map(move |(i, &c)| {
            let start = self.min + width * i as f64;
            (start, start + width, c)
        })
    }

    /// Largest bucket count.
    #[must_use]
    pub fn peak(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Count occurrences and order by count descending, then key ascending.
pub fn ranked_counts<K, I>(items: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Ord,
    I: IntoIterator<Item = K>,
{
    let mut counts: HashMap<K, usize> = HashMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }

    let mut ranked: Vec<_> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}
