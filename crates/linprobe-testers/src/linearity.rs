//! Linearity testing via odd symmetrization.
//!
//! A continuous function that is eps-close to linear must be nearly odd,
//! so the tester first filters on `f(-x) = -f(x)` over sampled points, then
//! reduces to additivity testing of the exactly-odd symmetrized function
//! `g(x) = (f(x) - f(-x)) / 2`. The even component of a near-linear
//! continuous function is itself small, so the reduction does not change
//! the closeness parameter materially.

use linprobe_core::{Batch, LinError, Oracle, Sampler};

use crate::additivity::additivity_verdict;
use crate::contract::{eval_checked, sample_checked, ShapeContract};
use crate::options::TestOptions;

/// Odd part of a wrapped oracle: `g(x) = (f(x) - f(-x)) / 2`.
///
/// Exactly odd by construction; every evaluation costs two queries to the
/// wrapped function.
pub struct OddSymmetrized<'a, F: ?Sized> {
    inner: &'a mut F,
}

impl<'a, F: Oracle + ?Sized> OddSymmetrized<'a, F> {
    /// Wraps an oracle without taking ownership.
    pub fn new(inner: &'a mut F) -> Self {
        Self { inner }
    }
}

impl<F: Oracle + ?Sized> Oracle for OddSymmetrized<'_, F> {
    fn eval(&mut self, batch: &Batch) -> Result<Batch, LinError> {
        let plus = self.inner.eval(batch)?;
        let minus = self.inner.eval(&batch.neg())?;
        Ok(plus.sub(&minus)?.scale(0.5))
    }
}

/// Samples drawn for the oddness filter.
fn negativity_rows(eps: f64, confidence: f64) -> usize {
    (1.0 / eps * (1.0 / (1.0 - confidence)).ln()).ceil() as usize
}

/// Cheap necessary filter: a function close to linear must be nearly odd.
fn oddness_filter<F, S>(
    f: &mut F,
    contract: &mut ShapeContract,
    options: &TestOptions,
    sampler: &mut S,
) -> Result<bool, LinError>
where
    F: Oracle + ?Sized,
    S: Sampler + ?Sized,
{
    let rows = negativity_rows(options.eps, options.confidence);
    let x = sample_checked(sampler, rows, contract.input_dim())?;
    let f_x = eval_checked(f, &x, contract)?;
    let f_neg_x = eval_checked(f, &x.neg(), contract)?;
    Ok(options.tolerance.batches_close(&f_neg_x, &f_x.neg()))
}

/// Probabilistic linearity verdict for a black-box function.
///
/// Filters on oddness over points from the caller's sampler, symmetrizes,
/// and delegates to the additivity pipeline. Inherits the one-sided
/// guarantee of [`additivity_tester`](crate::additivity_tester): exactly
/// linear functions pass up to floating-tolerance effects, and functions
/// eps-far from every linear function under the sampling distribution fail
/// with probability at least `confidence`. Stateless across invocations
/// apart from the injected random sources.
pub fn linearity_tester<F, S>(
    f: &mut F,
    input_dim: usize,
    options: &TestOptions,
    sampler: &mut S,
) -> Result<bool, LinError>
where
    F: Oracle + ?Sized,
    S: Sampler + ?Sized,
{
    options.validate()?;
    let mut contract = ShapeContract::new(input_dim)?;
    let mut rng = options.sample_rng();

    if !oddness_filter(f, &mut contract, options, sampler)? {
        return Ok(false);
    }

    // The symmetrized function has the same output width as `f`, so the
    // pinned contract carries over to the delegated run.
    let mut odd = OddSymmetrized::new(f);
    additivity_verdict(&mut odd, &mut contract, options, sampler, &mut rng)
}
