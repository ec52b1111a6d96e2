use linprobe_core::{l2_norm, Batch, LinError};

#[test]
fn from_vec_rejects_length_mismatch() {
    let err = Batch::from_vec(2, 3, vec![1.0; 5]).unwrap_err();
    assert!(matches!(err, LinError::Batch(_)));
    assert_eq!(err.info().code, "flat-length-mismatch");
    assert_eq!(err.info().context.get("len").map(String::as_str), Some("5"));
}

#[test]
fn row_access_follows_row_major_layout() {
    let batch = Batch::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(batch.row(0), &[1.0, 2.0, 3.0]);
    assert_eq!(batch.row(1), &[4.0, 5.0, 6.0]);
    let rows: Vec<&[f64]> = batch.rows_iter().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], &[4.0, 5.0, 6.0]);
}

#[test]
fn elementwise_arithmetic() {
    let a = Batch::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let b = Batch::from_vec(2, 2, vec![0.5, 0.5, 0.5, 0.5]).unwrap();
    assert_eq!(a.add(&b).unwrap().values(), &[1.5, 2.5, 3.5, 4.5]);
    assert_eq!(a.sub(&b).unwrap().values(), &[0.5, 1.5, 2.5, 3.5]);
    assert_eq!(a.neg().values(), &[-1.0, -2.0, -3.0, -4.0]);
    assert_eq!(a.scale(2.0).values(), &[2.0, 4.0, 6.0, 8.0]);
    assert_eq!(a.map(|v| v * v).values(), &[1.0, 4.0, 9.0, 16.0]);
}

#[test]
fn arithmetic_rejects_shape_mismatch() {
    let a = Batch::zeros(2, 2);
    let b = Batch::zeros(2, 3);
    let err = a.add(&b).unwrap_err();
    assert_eq!(err.info().code, "shape-mismatch");
    assert!(a.sub(&b).is_err());
}

#[test]
fn single_row_batches() {
    let point = Batch::from_row(&[1.0, -2.0, 2.0]);
    assert_eq!(point.rows(), 1);
    assert_eq!(point.cols(), 3);
    assert_eq!(point.row(0), &[1.0, -2.0, 2.0]);
}

#[test]
fn norm_of_points() {
    assert_eq!(l2_norm(&[3.0, 4.0]), 5.0);
    assert_eq!(l2_norm(&[0.0, 0.0]), 0.0);
    assert_eq!(l2_norm(&[]), 0.0);
}

#[test]
fn zero_width_batches_are_harmless() {
    let batch = Batch::zeros(3, 0);
    assert_eq!(batch.rows(), 3);
    assert!(batch.is_empty());
    assert_eq!(batch.rows_iter().count(), 3);
}
