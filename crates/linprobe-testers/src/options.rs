//! Tester configuration and fail-fast parameter validation.

use linprobe_core::{ErrorInfo, LinError, SampleRng, Tolerance};
use serde::{Deserialize, Serialize};

fn default_ball_radius() -> f64 {
    1.0 / 50.0
}

fn parameter_error(code: &str, message: impl Into<String>, value: f64) -> LinError {
    LinError::Parameter(ErrorInfo::new(code, message.into()).with_context("value", value.to_string()))
}

/// Parameters shared by the additivity and linearity testers.
///
/// `eps` and `confidence` feed logarithms and ceilings in the sample-count
/// formulas; both must lie strictly inside `(0, 1)`. [`validate`](Self::validate)
/// runs before any sampling or oracle query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestOptions {
    /// Closeness parameter: functions eps-far from every linear function
    /// are rejected with probability at least `confidence`.
    pub eps: f64,
    /// Probability floor for correct rejection.
    pub confidence: f64,
    /// Radius of the trusted L2 ball around the origin used by the squeeze
    /// step.
    #[serde(default = "default_ball_radius")]
    pub ball_radius: f64,
    /// Tolerance pair applied to every floating comparison in a run.
    #[serde(default)]
    pub tolerance: Tolerance,
    /// Master seed for the testers' internal reconstruction draws. `None`
    /// draws a fresh seed from the OS; fixing it makes a run reproducible.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl TestOptions {
    /// Creates options with the documented defaults for ball radius,
    /// tolerance, and seeding.
    pub fn new(eps: f64, confidence: f64) -> Self {
        Self {
            eps,
            confidence,
            ball_radius: default_ball_radius(),
            tolerance: Tolerance::default(),
            seed: None,
        }
    }

    /// Pins the internal reconstruction draws to a master seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the tolerance pair.
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Fails fast when any parameter lies outside its documented domain.
    pub fn validate(&self) -> Result<(), LinError> {
        if !(self.eps > 0.0 && self.eps < 1.0) {
            return Err(parameter_error(
                "eps-out-of-range",
                "eps must lie strictly in (0, 1)",
                self.eps,
            ));
        }
        if !(self.confidence > 0.0 && self.confidence < 1.0) {
            return Err(parameter_error(
                "confidence-out-of-range",
                "confidence must lie strictly in (0, 1)",
                self.confidence,
            ));
        }
        if !(self.ball_radius > 0.0 && self.ball_radius.is_finite()) {
            return Err(parameter_error(
                "ball-radius-invalid",
                "ball radius must be positive and finite",
                self.ball_radius,
            ));
        }
        Ok(())
    }

    /// RNG handle for the testers' internal standard normal draws.
    pub fn sample_rng(&self) -> SampleRng {
        match self.seed {
            Some(seed) => SampleRng::from_seed(seed),
            None => SampleRng::from_entropy(),
        }
    }
}
