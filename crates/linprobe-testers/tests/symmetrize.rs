use linprobe_core::{Oracle, SampleRng};
use linprobe_testers::{linearity_tester, OddSymmetrized, TestOptions};
use linprobe_zoo::{GaussianSampler, ScalingMap, SquareMap};

#[test]
fn odd_part_of_a_linear_map_is_the_map_itself() {
    let mut rng = SampleRng::from_seed(5);
    let batch = rng.gaussian_batch(8, 3);

    let mut f = ScalingMap::new(2.0);
    let direct = f.eval(&batch).unwrap();
    let mut odd = OddSymmetrized::new(&mut f);
    let symmetrized = odd.eval(&batch).unwrap();

    let tol = TestOptions::new(0.1, 0.9).tolerance;
    assert!(tol.batches_close(&symmetrized, &direct));
}

#[test]
fn odd_part_of_an_even_function_vanishes() {
    let mut rng = SampleRng::from_seed(5);
    let batch = rng.gaussian_batch(8, 4);

    let mut f = SquareMap;
    let mut odd = OddSymmetrized::new(&mut f);
    let symmetrized = odd.eval(&batch).unwrap();

    assert!(symmetrized.values().iter().all(|&v| v == 0.0));
}

#[test]
fn even_functions_fail_the_full_linearity_test() {
    // Squaring is purely even: the symmetrized function is identically
    // zero, but the oddness filter already rejects before the reduction.
    let options = TestOptions::new(0.1, 0.9).with_seed(61);
    let mut sampler = GaussianSampler::seeded(67);
    let mut f = SquareMap;
    assert!(!linearity_tester(&mut f, 4, &options, &mut sampler).unwrap());
}
