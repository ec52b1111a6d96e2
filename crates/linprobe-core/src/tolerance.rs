//! Tolerance-aware closeness predicates and distinct-value counting.
//!
//! Every floating comparison in the workspace goes through one
//! [`Tolerance`] pair per tester invocation; nothing compares floats
//! exactly.

use serde::{Deserialize, Serialize};

use crate::batch::Batch;

fn default_rtol() -> f64 {
    1e-5
}

fn default_atol() -> f64 {
    1e-8
}

/// Relative/absolute tolerance pair for floating comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Relative tolerance, scaled by the magnitude of the reference value.
    #[serde(default = "default_rtol")]
    pub rtol: f64,
    /// Absolute tolerance floor.
    #[serde(default = "default_atol")]
    pub atol: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            rtol: default_rtol(),
            atol: default_atol(),
        }
    }
}

impl Tolerance {
    /// Creates a tolerance pair.
    pub fn new(rtol: f64, atol: f64) -> Self {
        Self { rtol, atol }
    }

    /// True iff `|a - b| <= atol + rtol * |b|`.
    ///
    /// Asymmetric in its arguments: `b` is the reference value.
    pub fn close(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.atol + self.rtol * b.abs()
    }

    /// True iff the slices have equal length and every pair of
    /// corresponding entries is [`close`](Self::close).
    pub fn all_close(&self, a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b.iter()).all(|(&x, &y)| self.close(x, y))
    }

    /// Batch form of [`all_close`](Self::all_close); shapes must match.
    pub fn batches_close(&self, a: &Batch, b: &Batch) -> bool {
        a.rows() == b.rows() && a.cols() == b.cols() && self.all_close(a.values(), b.values())
    }

    /// Counts tolerance-clusters among the given values.
    ///
    /// Collections of size zero or one return their own size. Otherwise the
    /// values are sorted and each element is merged into the previous
    /// cluster when it is [`close`](Self::close) to its immediate sorted
    /// predecessor. The clustering is sequential and non-transitive: a
    /// chain of near-equal values can collapse into fewer clusters than
    /// there are true equivalence classes. Accepted approximation.
    pub fn count_distinct(&self, values: &[f64]) -> usize {
        if values.len() < 2 {
            return values.len();
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let mut count = 1;
        for pair in sorted.windows(2) {
            if !self.close(pair[1], pair[0]) {
                count += 1;
            }
        }
        count
    }
}
