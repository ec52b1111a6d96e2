//! Sampler implementations backed by deterministic RNG streams.

use linprobe_core::{Batch, ErrorInfo, LinError, SampleRng, Sampler};

/// Standard normal sampler.
#[derive(Debug, Clone)]
pub struct GaussianSampler {
    rng: SampleRng,
}

impl GaussianSampler {
    /// Deterministic sampler seeded from a master seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SampleRng::from_seed(seed),
        }
    }

    /// Sampler seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: SampleRng::from_entropy(),
        }
    }

    /// Forks an independent deterministic sampler for the given stream.
    pub fn substream(&self, stream: u64) -> Self {
        Self {
            rng: self.rng.substream(stream),
        }
    }
}

impl Sampler for GaussianSampler {
    fn sample(&mut self, rows: usize, cols: usize) -> Batch {
        self.rng.gaussian_batch(rows, cols)
    }
}

/// Uniform sampler over the half-open interval `[low, high)`.
#[derive(Debug, Clone)]
pub struct UniformSampler {
    low: f64,
    high: f64,
    rng: SampleRng,
}

impl UniformSampler {
    /// Deterministic sampler over `[low, high)` seeded from a master seed.
    pub fn new(low: f64, high: f64, seed: u64) -> Result<Self, LinError> {
        Self::build(low, high, SampleRng::from_seed(seed))
    }

    /// Sampler over `[low, high)` seeded from OS entropy.
    pub fn from_entropy(low: f64, high: f64) -> Result<Self, LinError> {
        Self::build(low, high, SampleRng::from_entropy())
    }

    fn build(low: f64, high: f64, rng: SampleRng) -> Result<Self, LinError> {
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(LinError::Parameter(
                ErrorInfo::new("uniform-bounds-invalid", "uniform bounds must satisfy low < high")
                    .with_context("low", low.to_string())
                    .with_context("high", high.to_string()),
            ));
        }
        Ok(Self { low, high, rng })
    }

    /// Forks an independent deterministic sampler for the given stream.
    pub fn substream(&self, stream: u64) -> Self {
        Self {
            low: self.low,
            high: self.high,
            rng: self.rng.substream(stream),
        }
    }
}

impl Sampler for UniformSampler {
    fn sample(&mut self, rows: usize, cols: usize) -> Batch {
        self.rng.uniform_batch(self.low, self.high, rows, cols)
    }
}
