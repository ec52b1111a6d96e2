use linprobe_core::{Batch, ErrorInfo, LinError, Oracle, Sampler};
use linprobe_testers::{additivity_tester, TestOptions};
use linprobe_zoo::GaussianSampler;

/// Returns one column on the first call and two on every later call.
struct WidthFlipper {
    calls: u64,
}

impl Oracle for WidthFlipper {
    fn eval(&mut self, batch: &Batch) -> Result<Batch, LinError> {
        self.calls += 1;
        let cols = if self.calls == 1 { 1 } else { 2 };
        Ok(Batch::zeros(batch.rows(), cols))
    }
}

/// Swallows one row of every batch.
struct RowDropper;

impl Oracle for RowDropper {
    fn eval(&mut self, batch: &Batch) -> Result<Batch, LinError> {
        Ok(Batch::zeros(batch.rows().saturating_sub(1), batch.cols()))
    }
}

/// Fails on every evaluation.
struct Exploding;

impl Oracle for Exploding {
    fn eval(&mut self, _batch: &Batch) -> Result<Batch, LinError> {
        Err(LinError::Oracle(ErrorInfo::new(
            "evaluation-failed",
            "oracle deliberately failed",
        )))
    }
}

/// Ignores the requested shape.
struct StubbornSampler;

impl Sampler for StubbornSampler {
    fn sample(&mut self, _rows: usize, _cols: usize) -> Batch {
        Batch::zeros(1, 1)
    }
}

/// Behaves linearly, so the exact filter passes and the sampler is reached.
struct Identity;

impl Oracle for Identity {
    fn eval(&mut self, batch: &Batch) -> Result<Batch, LinError> {
        Ok(batch.clone())
    }
}

fn options() -> TestOptions {
    TestOptions::new(0.1, 0.9).with_seed(1)
}

#[test]
fn changing_output_width_is_a_contract_violation() {
    let mut f = WidthFlipper { calls: 0 };
    let mut sampler = GaussianSampler::seeded(1);
    let err = additivity_tester(&mut f, 3, &options(), &mut sampler).unwrap_err();
    assert!(matches!(err, LinError::Contract(_)));
    assert_eq!(err.info().code, "output-width-changed");
}

#[test]
fn dropping_rows_is_a_contract_violation() {
    let mut f = RowDropper;
    let mut sampler = GaussianSampler::seeded(1);
    let err = additivity_tester(&mut f, 3, &options(), &mut sampler).unwrap_err();
    assert_eq!(err.info().code, "row-count-mismatch");
}

#[test]
fn oracle_failures_propagate_uncaught() {
    let mut f = Exploding;
    let mut sampler = GaussianSampler::seeded(1);
    let err = additivity_tester(&mut f, 3, &options(), &mut sampler).unwrap_err();
    assert!(matches!(err, LinError::Oracle(_)));
    assert_eq!(err.info().code, "evaluation-failed");
}

#[test]
fn misshapen_sampler_output_is_a_contract_violation() {
    let mut f = Identity;
    let mut sampler = StubbornSampler;
    let err = additivity_tester(&mut f, 3, &options(), &mut sampler).unwrap_err();
    assert_eq!(err.info().code, "sampler-shape-mismatch");
}

#[test]
fn zero_input_dimension_is_refused() {
    let mut f = Identity;
    let mut sampler = GaussianSampler::seeded(1);
    let err = additivity_tester(&mut f, 0, &options(), &mut sampler).unwrap_err();
    assert_eq!(err.info().code, "input-dim-zero");
}
