//! Shape-contract enforcement for oracles and samplers.
//!
//! A misbehaving collaborator surfaces as a structured
//! [`LinError::Contract`], never as a silent false verdict.

use linprobe_core::{Batch, ErrorInfo, LinError, Oracle, Sampler};

fn info(code: &str, message: impl Into<String>) -> ErrorInfo {
    ErrorInfo::new(code, message.into())
}

/// Tracks the oracle's output width across one tester invocation.
///
/// The width is pinned by the first observed response; any later call that
/// returns a different width, or fewer/more rows than were queried, is a
/// contract violation attributable to the caller's function.
#[derive(Debug)]
pub struct ShapeContract {
    input_dim: usize,
    output_dim: Option<usize>,
}

impl ShapeContract {
    /// Starts a contract for a function declared over `input_dim` columns.
    pub fn new(input_dim: usize) -> Result<Self, LinError> {
        if input_dim == 0 {
            return Err(LinError::Parameter(info(
                "input-dim-zero",
                "the function under test must take at least one input dimension",
            )));
        }
        Ok(Self {
            input_dim,
            output_dim: None,
        })
    }

    /// The declared input dimension.
    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    /// The output width, once pinned by the first observed response.
    pub fn output_dim(&self) -> Option<usize> {
        self.output_dim
    }

    /// Checks one oracle response against the number of rows queried and
    /// pins or re-checks the output width. Returns the width.
    pub fn observe(&mut self, queried_rows: usize, output: &Batch) -> Result<usize, LinError> {
        if output.rows() != queried_rows {
            return Err(LinError::Contract(
                info(
                    "row-count-mismatch",
                    "oracle returned a different number of rows than were queried",
                )
                .with_context("queried", queried_rows.to_string())
                .with_context("returned", output.rows().to_string()),
            ));
        }
        match self.output_dim {
            None => {
                if output.cols() == 0 {
                    return Err(LinError::Contract(info(
                        "empty-output",
                        "oracle returned zero-width rows",
                    )));
                }
                self.output_dim = Some(output.cols());
                Ok(output.cols())
            }
            Some(width) if width == output.cols() => Ok(width),
            Some(width) => Err(LinError::Contract(
                info(
                    "output-width-changed",
                    "oracle output width changed between calls",
                )
                .with_context("pinned", width.to_string())
                .with_context("returned", output.cols().to_string()),
            )),
        }
    }

    /// Checks that a query point matches the declared input dimension.
    pub fn check_point(&self, point: &[f64]) -> Result<(), LinError> {
        if point.len() != self.input_dim {
            return Err(LinError::Contract(
                info(
                    "point-dim-mismatch",
                    "query point does not match the declared input dimension",
                )
                .with_context("declared", self.input_dim.to_string())
                .with_context("point", point.len().to_string()),
            ));
        }
        Ok(())
    }
}

/// Evaluates the oracle and checks the response against the contract.
pub(crate) fn eval_checked<F>(
    f: &mut F,
    batch: &Batch,
    contract: &mut ShapeContract,
) -> Result<Batch, LinError>
where
    F: Oracle + ?Sized,
{
    let output = f.eval(batch)?;
    contract.observe(batch.rows(), &output)?;
    Ok(output)
}

/// Draws from the caller's sampler and checks the requested shape.
pub(crate) fn sample_checked<S>(
    sampler: &mut S,
    rows: usize,
    cols: usize,
) -> Result<Batch, LinError>
where
    S: Sampler + ?Sized,
{
    let batch = sampler.sample(rows, cols);
    if batch.rows() != rows || batch.cols() != cols {
        return Err(LinError::Contract(
            info(
                "sampler-shape-mismatch",
                "sampler returned a batch of the wrong shape",
            )
            .with_context("requested", format!("{rows}x{cols}"))
            .with_context("returned", format!("{}x{}", batch.rows(), batch.cols())),
        ));
    }
    Ok(batch)
}
