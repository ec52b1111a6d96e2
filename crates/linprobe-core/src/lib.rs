#![deny(missing_docs)]
#![doc = "Core traits and numeric types shared by the linprobe property testers."]

pub mod batch;
pub mod errors;
pub mod rng;
pub mod tolerance;

pub use batch::{l2_norm, Batch};
pub use errors::{ErrorInfo, LinError};
pub use rng::{stream_seed, SampleRng};
pub use tolerance::Tolerance;

/// Black-box, query-only access to the function under test.
///
/// An oracle maps a batch of `n` row-vectors of dimension `d` to a batch of
/// `n` row-vectors of dimension `m`, where `m` is fixed by the oracle itself
/// and must be consistent across calls. Oracles may be intentionally
/// stochastic (noise-perturbed, randomly corrupted); the testers treat every
/// call as an independent query. Failures raised here propagate uncaught to
/// the caller of the tester.
pub trait Oracle {
    /// Evaluates the function on a batch of row-vector inputs.
    fn eval(&mut self, batch: &Batch) -> Result<Batch, LinError>;
}

impl<T: Oracle + ?Sized> Oracle for &mut T {
    fn eval(&mut self, batch: &Batch) -> Result<Batch, LinError> {
        (**self).eval(batch)
    }
}

/// Source of i.i.d. row-vector draws from a fixed, caller-chosen
/// distribution.
///
/// `sample(rows, cols)` must return a batch of exactly that shape, with rows
/// independent of each other and of every previous call. Determinism across
/// runs is a property of the concrete sampler (seeded construction), never a
/// requirement of this contract.
pub trait Sampler {
    /// Draws `rows` independent samples of dimension `cols`.
    fn sample(&mut self, rows: usize, cols: usize) -> Batch;
}

impl<T: Sampler + ?Sized> Sampler for &mut T {
    fn sample(&mut self, rows: usize, cols: usize) -> Batch {
        (**self).sample(rows, cols)
    }
}
