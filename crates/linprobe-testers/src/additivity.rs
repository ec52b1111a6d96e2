//! Distribution-free additivity testing.
//!
//! Two layers: a cheap exact-additivity filter over necessary identities of
//! the Cauchy functional equation, and a per-point epsilon-additivity
//! reconstruction that squeezes the query point into a trusted ball around
//! the origin and certifies consistency across independent probes.

use linprobe_core::{l2_norm, Batch, LinError, Oracle, SampleRng, Sampler};

use crate::contract::{eval_checked, sample_checked, ShapeContract};
use crate::options::TestOptions;

/// Outcome of a single-point epsilon-additivity query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryVerdict {
    /// The probes failed to collapse to a single reconstructed value.
    Rejected,
    /// Reconstructed value of the function at the queried point.
    Accepted(Vec<f64>),
}

/// Rows per batch in the exact check. Each batch amplifies a per-trial
/// 1/100 false-accept probability down to `1 - confidence` overall.
fn exact_check_rows(confidence: f64) -> usize {
    ((1.0 / (1.0 - confidence)).ln() / (100.0f64 / 99.0).ln()).ceil() as usize + 1
}

/// Probe rows per point query.
fn point_query_rows(eps: f64) -> usize {
    (2.0 / eps).log2().ceil() as usize
}

/// Test points drawn from the caller's sampler.
fn survey_rows(eps: f64, confidence: f64) -> usize {
    (2.0 / eps * (1.0 / (1.0 - confidence)).ln()).ceil() as usize + 1
}

/// Smallest positive integer `k` such that `point / k` lies inside the
/// ball of the given radius around the origin.
///
/// Degree-1 homogeneous functions let the caller rescale any point into
/// the trusted neighbourhood and rescale the answer back.
pub fn squeeze_factor(point: &[f64], ball_radius: f64) -> usize {
    let norm = l2_norm(point);
    if norm <= ball_radius {
        1
    } else {
        (norm / ball_radius).ceil() as usize
    }
}

/// Checks three necessary identities of additive functions on independent
/// standard normal batches: `f(-x) = -f(x)`, `f(x - y) = f(x) - f(y)`, and
/// `f((x - y)/2) = f((x - z)/2) + f((z - y)/2)`.
///
/// Short-circuits on the first identity that fails beyond tolerance.
/// Necessary but not sufficient for exact additivity; this is the cheap
/// filter in front of the pointwise reconstruction.
pub fn exact_additivity_check<F>(
    f: &mut F,
    input_dim: usize,
    options: &TestOptions,
    rng: &mut SampleRng,
) -> Result<bool, LinError>
where
    F: Oracle + ?Sized,
{
    options.validate()?;
    let mut contract = ShapeContract::new(input_dim)?;
    exact_check_with(f, &mut contract, options, rng)
}

fn exact_check_with<F>(
    f: &mut F,
    contract: &mut ShapeContract,
    options: &TestOptions,
    rng: &mut SampleRng,
) -> Result<bool, LinError>
where
    F: Oracle + ?Sized,
{
    let rows = exact_check_rows(options.confidence);
    let dim = contract.input_dim();
    let x = rng.gaussian_batch(rows, dim);
    let y = rng.gaussian_batch(rows, dim);
    let z = rng.gaussian_batch(rows, dim);
    let tol = options.tolerance;

    let f_x = eval_checked(f, &x, contract)?;
    let f_neg_x = eval_checked(f, &x.neg(), contract)?;
    if !tol.batches_close(&f_neg_x, &f_x.neg()) {
        return Ok(false);
    }

    let f_y = eval_checked(f, &y, contract)?;
    let f_x_minus_y = eval_checked(f, &x.sub(&y)?, contract)?;
    if !tol.batches_close(&f_x_minus_y, &f_x.sub(&f_y)?) {
        return Ok(false);
    }

    let half_xy = eval_checked(f, &x.sub(&y)?.scale(0.5), contract)?;
    let half_xz = eval_checked(f, &x.sub(&z)?.scale(0.5), contract)?;
    let half_zy = eval_checked(f, &z.sub(&y)?.scale(0.5), contract)?;
    if !tol.batches_close(&half_xy, &half_xz.add(&half_zy)?) {
        return Ok(false);
    }

    Ok(true)
}

/// Single-point epsilon-additivity query.
///
/// Draws probe rows `x_i`, squeezes the point by `k`, and evaluates the
/// candidates `f(point/k - x_i) + f(x_i)`. For an exactly additive `f`
/// every candidate equals `f(point/k)` regardless of `x_i`, so collapse of
/// the candidates is used as a certificate: if the tolerance-distinct count
/// over all candidate entries exceeds the width of one output, the point is
/// rejected; otherwise the value is reconstructed from the first candidate
/// row and rescaled by `k`.
pub fn point_query_additive<F>(
    point: &[f64],
    f: &mut F,
    options: &TestOptions,
    rng: &mut SampleRng,
) -> Result<QueryVerdict, LinError>
where
    F: Oracle + ?Sized,
{
    options.validate()?;
    let mut contract = ShapeContract::new(point.len())?;
    point_query_with(point, f, &mut contract, options, rng)
}

fn point_query_with<F>(
    point: &[f64],
    f: &mut F,
    contract: &mut ShapeContract,
    options: &TestOptions,
    rng: &mut SampleRng,
) -> Result<QueryVerdict, LinError>
where
    F: Oracle + ?Sized,
{
    contract.check_point(point)?;
    let rows = point_query_rows(options.eps);
    let dim = contract.input_dim();
    let x = rng.gaussian_batch(rows, dim);
    let k = squeeze_factor(point, options.ball_radius) as f64;

    let shifted = Batch::from_fn(rows, dim, |r, c| point[c] / k - x.row(r)[c]);
    let f_shifted = eval_checked(f, &shifted, contract)?;
    let f_x = eval_checked(f, &x, contract)?;
    let candidates = f_shifted.add(&f_x)?;

    // The candidates must collapse to one value per output coordinate.
    if options.tolerance.count_distinct(candidates.values()) > candidates.cols() {
        return Ok(QueryVerdict::Rejected);
    }
    let reconstructed = candidates.row(0).iter().map(|v| k * v).collect();
    Ok(QueryVerdict::Accepted(reconstructed))
}

/// Probabilistic additivity verdict for a black-box function.
///
/// Runs the exact filter, then draws test points from the caller's sampler
/// and certifies each one through [`point_query_additive`], comparing the
/// reconstruction against a direct evaluation. Exactly additive functions
/// pass up to floating-tolerance effects; functions eps-far from every
/// linear function under the sampling distribution fail with probability at
/// least `confidence`.
pub fn additivity_tester<F, S>(
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
    additivity_verdict(f, &mut contract, options, sampler, &mut rng)
}

pub(crate) fn additivity_verdict<F, S>(
    f: &mut F,
    contract: &mut ShapeContract,
    options: &TestOptions,
    sampler: &mut S,
    rng: &mut SampleRng,
) -> Result<bool, LinError>
where
    F: Oracle + ?Sized,
    S: Sampler + ?Sized,
{
    if !exact_check_with(f, contract, options, rng)? {
        return Ok(false);
    }

    let rows = survey_rows(options.eps, options.confidence);
    let points = sample_checked(sampler, rows, contract.input_dim())?;
    for point in points.rows_iter() {
        match point_query_with(point, f, contract, options, rng)? {
            QueryVerdict::Rejected => return Ok(false),
            QueryVerdict::Accepted(reconstructed) => {
                let observed = eval_checked(f, &Batch::from_row(point), contract)?;
                if !options.tolerance.all_close(observed.values(), &reconstructed) {
                    return Ok(false);
                }
            }
        }
    }
    Ok(true)
}
