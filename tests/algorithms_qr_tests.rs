use approx::assert_relative_eq;
use linreg_rs::prelude::*;

fn matrix(rows: &[&[f64]]) -> Matrix<f64> {
    Matrix::from_rows(rows).unwrap()
}

// ============================================================================
// Factor Fixture Tests
// ============================================================================

#[test]
fn test_qr_symmetric_3x3() {
    let a = matrix(&[&[1.0, 1.0, 0.0], &[1.0, 0.0, 1.0], &[0.0, 1.0, 1.0]]);

    let sqrt2 = 2.0f64.sqrt();
    let sqrt3 = 3.0f64.sqrt();
    let sqrt6 = 6.0f64.sqrt();
    let expected_q = matrix(&[
        &[1.0 / sqrt2, 1.0 / sqrt6, -1.0 / sqrt3],
        &[1.0 / sqrt2, -1.0 / sqrt6, 1.0 / sqrt3],
        &[0.0, 2.0 / sqrt6, 1.0 / sqrt3],
    ]);
    let expected_r = matrix(&[
        &[2.0 / sqrt2, 1.0 / sqrt2, 1.0 / sqrt2],
        &[0.0, 3.0 / sqrt6, 1.0 / sqrt6],
        &[0.0, 0.0, 2.0 / sqrt3],
    ]);

    let decomposition = QrDecomposition::new(a).unwrap();
    assert!(decomposition.q().approx_eq(&expected_q, DEFAULT_EPSILON).unwrap());
    assert!(decomposition.r().approx_eq(&expected_r, DEFAULT_EPSILON).unwrap());
}

#[test]
fn test_qr_classic_3x3() {
    let a = matrix(&[
        &[12.0, -51.0, 4.0],
        &[6.0, 167.0, -68.0],
        &[-4.0, 24.0, -41.0],
    ]);

    let expected_q = matrix(&[
        &[6.0 / 7.0, -69.0 / 175.0, -58.0 / 175.0],
        &[3.0 / 7.0, 158.0 / 175.0, 6.0 / 175.0],
        &[-2.0 / 7.0, 6.0 / 35.0, -33.0 / 35.0],
    ]);
    let expected_r = matrix(&[
        &[14.0, 21.0, -14.0],
        &[0.0, 175.0, -70.0],
        &[0.0, 0.0, 35.0],
    ]);

    let decomposition = QrDecomposition::new(a).unwrap();
    assert!(decomposition.q().approx_eq(&expected_q, DEFAULT_EPSILON).unwrap());
    assert!(decomposition.r().approx_eq(&expected_r, DEFAULT_EPSILON).unwrap());
}

// ============================================================================
// Structural Property Tests
// ============================================================================

#[test]
fn test_qr_product_reconstructs_input() {
    let a = matrix(&[
        &[12.0, -51.0, 4.0],
        &[6.0, 167.0, -68.0],
        &[-4.0, 24.0, -41.0],
    ]);
    let decomposition = QrDecomposition::new(a.clone()).unwrap();

    let product = decomposition.q().multiply(decomposition.r()).unwrap();
    assert!(product.approx_eq(&a, 1e-9).unwrap());
    assert_eq!(decomposition.matrix(), &a);
}

#[test]
fn test_qr_columns_are_orthonormal() {
    let a = matrix(&[
        &[1.0, 1.0],
        &[1.0, 2.0],
        &[1.0, 3.0],
        &[1.0, 4.0],
    ]);
    let decomposition = QrDecomposition::new(a).unwrap();

    // Q^t Q = I for a tall matrix with independent columns
    let q = decomposition.q();
    let gram = q.transpose().multiply(q).unwrap();
    assert!(gram.approx_eq(&Matrix::identity(2), 1e-9).unwrap());
}

#[test]
fn test_qr_rectangular_shapes() {
    let a = matrix(&[
        &[1.0, 0.5],
        &[1.0, 1.5],
        &[1.0, 4.0],
    ]);
    let decomposition = QrDecomposition::new(a).unwrap();

    assert_eq!(decomposition.q().rows(), 3);
    assert_eq!(decomposition.q().cols(), 2);
    assert_eq!(decomposition.r().rows(), 2);
    assert_eq!(decomposition.r().cols(), 2);
}

#[test]
fn test_qr_below_diagonal_entries_are_near_zero() {
    let a = matrix(&[
        &[12.0, -51.0, 4.0],
        &[6.0, 167.0, -68.0],
        &[-4.0, 24.0, -41.0],
    ]);
    let decomposition = QrDecomposition::new(a).unwrap();

    // R is populated entry-by-entry; below the diagonal the dots vanish
    // only by orthogonality, up to rounding.
    let r = decomposition.r();
    for i in 0..3 {
        for j in 0..i {
            assert_relative_eq!(r.get(i, j), 0.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_qr_single_column() {
    let a = Matrix::column(&[3.0, 4.0]).unwrap();
    let decomposition = QrDecomposition::new(a).unwrap();

    assert_relative_eq!(decomposition.q().get(0, 0), 0.6, epsilon = 1e-12);
    assert_relative_eq!(decomposition.q().get(1, 0), 0.8, epsilon = 1e-12);
    assert_relative_eq!(decomposition.r().get(0, 0), 5.0, epsilon = 1e-12);
}

// ============================================================================
// Degenerate Input Tests
// ============================================================================

#[test]
fn test_qr_dependent_columns_propagate_non_finite() {
    // Second column is exactly twice the first; the zero-norm residual
    // divides through instead of erroring.
    let a = matrix(&[&[1.0, 2.0], &[0.0, 0.0], &[0.0, 0.0]]);
    let decomposition = QrDecomposition::new(a).unwrap();

    let mut any_non_finite = false;
    for i in 0..3 {
        if !decomposition.q().get(i, 1).is_finite() {
            any_non_finite = true;
        }
    }
    assert!(any_non_finite);
}
