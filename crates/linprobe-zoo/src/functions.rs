//! Example functions to exercise the testers, plus the call-counting
//! oracle adapter.

use linprobe_core::{Batch, ErrorInfo, LinError, Oracle, SampleRng};
use rand::Rng;
use rand_distr::StandardNormal;

fn parameter_error(code: &str, message: &str) -> LinError {
    LinError::Parameter(ErrorInfo::new(code, message))
}

fn input_width_error(expected: usize, got: usize) -> LinError {
    LinError::Contract(
        ErrorInfo::new(
            "input-dim-mismatch",
            "batch width does not match the function's input dimension",
        )
        .with_context("expected", expected.to_string())
        .with_context("got", got.to_string()),
    )
}

/// Call-counting adapter around any oracle.
///
/// Counts `eval` invocations (one per batch, regardless of batch size) and
/// stays otherwise transparent.
#[derive(Debug)]
pub struct CountingOracle<F> {
    inner: F,
    calls: u64,
}

impl<F> CountingOracle<F> {
    /// Wraps an oracle with a zeroed counter.
    pub fn new(inner: F) -> Self {
        Self { inner, calls: 0 }
    }

    /// Number of `eval` calls since construction or the last reset.
    pub fn calls(&self) -> u64 {
        self.calls
    }

    /// Resets the counter to zero.
    pub fn reset_calls(&mut self) {
        self.calls = 0;
    }

    /// Unwraps the inner oracle.
    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<F: Oracle> Oracle for CountingOracle<F> {
    fn eval(&mut self, batch: &Batch) -> Result<Batch, LinError> {
        self.calls += 1;
        self.inner.eval(batch)
    }
}

/// `f(x) = c * x`; output width equals input width.
#[derive(Debug, Clone)]
pub struct ScalingMap {
    factor: f64,
}

impl ScalingMap {
    /// Scaling by a fixed factor.
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }
}

impl Oracle for ScalingMap {
    fn eval(&mut self, batch: &Batch) -> Result<Batch, LinError> {
        Ok(batch.scale(self.factor))
    }
}

/// `f(x) = x W` for a fixed `d x m` weight matrix.
#[derive(Debug, Clone)]
pub struct MatrixMap {
    weights: Batch,
}

impl MatrixMap {
    /// Linear map given by a `d x m` weight matrix.
    pub fn new(weights: Batch) -> Result<Self, LinError> {
        if weights.is_empty() {
            return Err(parameter_error(
                "weights-empty",
                "a linear map needs at least one weight",
            ));
        }
        Ok(Self { weights })
    }

    /// Single-output linear map `x -> <w, x>` from a weight vector.
    pub fn from_column(weights: &[f64]) -> Result<Self, LinError> {
        let column = Batch::from_vec(weights.len(), 1, weights.to_vec())?;
        Self::new(column)
    }

    fn apply(&self, batch: &Batch) -> Result<Batch, LinError> {
        if batch.cols() != self.weights.rows() {
            return Err(input_width_error(self.weights.rows(), batch.cols()));
        }
        let out_dim = self.weights.cols();
        Ok(Batch::from_fn(batch.rows(), out_dim, |r, c| {
            batch
                .row(r)
                .iter()
                .enumerate()
                .map(|(j, &v)| v * self.weights.row(j)[c])
                .sum()
        }))
    }
}

impl Oracle for MatrixMap {
    fn eval(&mut self, batch: &Batch) -> Result<Batch, LinError> {
        self.apply(batch)
    }
}

/// `x W` perturbed by per-entry gaussian noise of the given scale.
#[derive(Debug)]
pub struct NoisyLinear {
    map: MatrixMap,
    std: f64,
    rng: SampleRng,
}

impl NoisyLinear {
    /// Noisy linear map; `std` is the noise scale.
    pub fn new(weights: Batch, std: f64, seed: u64) -> Result<Self, LinError> {
        if !(std.is_finite() && std >= 0.0) {
            return Err(parameter_error(
                "noise-scale-invalid",
                "noise scale must be finite and non-negative",
            ));
        }
        Ok(Self {
            map: MatrixMap::new(weights)?,
            std,
            rng: SampleRng::from_seed(seed),
        })
    }
}

impl Oracle for NoisyLinear {
    fn eval(&mut self, batch: &Batch) -> Result<Batch, LinError> {
        let clean = self.map.apply(batch)?;
        Ok(clean.map(|v| v + self.rng.sample::<f64, _>(StandardNormal) * self.std))
    }
}

/// `x W`, with probability `p` of returning zeros for the whole call.
#[derive(Debug)]
pub struct CorruptedLinear {
    map: MatrixMap,
    p: f64,
    rng: SampleRng,
}

impl CorruptedLinear {
    /// Corrupted linear map; `p` is the per-call corruption probability.
    pub fn new(weights: Batch, p: f64, seed: u64) -> Result<Self, LinError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(parameter_error(
                "corruption-probability-invalid",
                "corruption probability must lie in [0, 1]",
            ));
        }
        Ok(Self {
            map: MatrixMap::new(weights)?,
            p,
            rng: SampleRng::from_seed(seed),
        })
    }
}

impl Oracle for CorruptedLinear {
    fn eval(&mut self, batch: &Batch) -> Result<Batch, LinError> {
        let clean = self.map.apply(batch)?;
        if self.rng.gen::<f64>() < self.p {
            Ok(Batch::zeros(clean.rows(), clean.cols()))
        } else {
            Ok(clean)
        }
    }
}

/// `f(x) = tanh(<w, x> / stretch)`; single output, near-linear for large
/// stretch.
#[derive(Debug, Clone)]
pub struct StretchedTanh {
    weights: Vec<f64>,
    stretch: f64,
}

impl StretchedTanh {
    /// Stretched tanh of a weighted sum.
    pub fn new(weights: Vec<f64>, stretch: f64) -> Result<Self, LinError> {
        if weights.is_empty() {
            return Err(parameter_error(
                "weights-empty",
                "a weighted sum needs at least one weight",
            ));
        }
        if !(stretch.is_finite() && stretch > 0.0) {
            return Err(parameter_error(
                "stretch-invalid",
                "stretch must be positive and finite",
            ));
        }
        Ok(Self { weights, stretch })
    }
}

impl Oracle for StretchedTanh {
    fn eval(&mut self, batch: &Batch) -> Result<Batch, LinError> {
        if batch.cols() != self.weights.len() {
            return Err(input_width_error(self.weights.len(), batch.cols()));
        }
        Ok(Batch::from_fn(batch.rows(), 1, |r, _| {
            let dot: f64 = batch
                .row(r)
                .iter()
                .zip(self.weights.iter())
                .map(|(&v, &w)| v * w)
                .sum();
            (dot / self.stretch).tanh()
        }))
    }
}

/// Elementwise squaring; the canonical nonlinear rejection target.
#[derive(Debug, Clone, Default)]
pub struct SquareMap;

impl Oracle for SquareMap {
    fn eval(&mut self, batch: &Batch) -> Result<Batch, LinError> {
        Ok(batch.map(|v| v * v))
    }
}
