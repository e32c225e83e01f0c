use approx::assert_relative_eq;
use linreg_rs::prelude::*;

fn matrix(rows: &[&[f64]]) -> Matrix<f64> {
    Matrix::from_rows(rows).unwrap()
}

// ============================================================================
// Back Substitution Tests
// ============================================================================

#[test]
fn test_back_substitute_3x3() {
    let r = matrix(&[&[1.0, 2.0, 1.0], &[0.0, -4.0, 1.0], &[0.0, 0.0, -2.0]]);
    let c = Matrix::column(&[5.0, 2.0, 4.0]).unwrap();

    let x = back_substitute(&r, &c).unwrap();
    assert_relative_eq!(x.get(0, 0), 9.0);
    assert_relative_eq!(x.get(1, 0), -1.0);
    assert_relative_eq!(x.get(2, 0), -2.0);
}

#[test]
fn test_back_substitute_1x1() {
    let r = matrix(&[&[4.0]]);
    let c = Matrix::column(&[10.0]).unwrap();

    let x = back_substitute(&r, &c).unwrap();
    assert_relative_eq!(x.get(0, 0), 2.5);
}

#[test]
fn test_back_substitute_recovers_known_solution() {
    let r = matrix(&[&[2.0, 1.0, 3.0], &[0.0, 4.0, -1.0], &[0.0, 0.0, 5.0]]);
    let known = Matrix::column(&[1.0, 2.0, 3.0]).unwrap();

    let c = r.multiply(&known).unwrap();
    let x = back_substitute(&r, &c).unwrap();
    assert!(x.approx_eq(&known, 1e-12).unwrap());
}

#[test]
fn test_back_substitute_ignores_lower_triangle() {
    let r = matrix(&[&[1.0, 2.0, 1.0], &[0.0, -4.0, 1.0], &[0.0, 0.0, -2.0]]);
    let noisy = matrix(&[&[1.0, 2.0, 1.0], &[7.0, -4.0, 1.0], &[-3.0, 9.0, -2.0]]);
    let c = Matrix::column(&[5.0, 2.0, 4.0]).unwrap();

    let clean = back_substitute(&r, &c).unwrap();
    let from_noisy = back_substitute(&noisy, &c).unwrap();
    assert!(clean.approx_eq(&from_noisy, 1e-12).unwrap());
}

// ============================================================================
// Structural Error Tests
// ============================================================================

#[test]
fn test_back_substitute_non_square_is_rejected() {
    let r = matrix(&[&[1.0, 2.0, 3.0], &[0.0, 4.0, 5.0]]);
    let c = Matrix::column(&[1.0, 2.0]).unwrap();

    let err = back_substitute(&r, &c).unwrap_err();
    assert_eq!(
        err,
        RegressionError::DimensionMismatch {
            operation: "back_substitute",
            lhs: (2, 3),
            rhs: (2, 2),
        }
    );
}

#[test]
fn test_back_substitute_mismatched_column_is_rejected() {
    let r = matrix(&[&[1.0, 2.0], &[0.0, 3.0]]);
    let c = Matrix::column(&[1.0, 2.0, 3.0]).unwrap();

    let err = back_substitute(&r, &c).unwrap_err();
    assert_eq!(
        err,
        RegressionError::DimensionMismatch {
            operation: "back_substitute",
            lhs: (2, 2),
            rhs: (3, 1),
        }
    );
}

#[test]
fn test_back_substitute_non_column_rhs_is_rejected() {
    let r = matrix(&[&[1.0, 2.0], &[0.0, 3.0]]);
    let c = matrix(&[&[1.0, 2.0], &[3.0, 4.0]]);

    let err = back_substitute(&r, &c).unwrap_err();
    assert_eq!(
        err,
        RegressionError::DimensionMismatch {
            operation: "back_substitute",
            lhs: (2, 2),
            rhs: (2, 2),
        }
    );
}

// ============================================================================
// Degenerate Input Tests
// ============================================================================

#[test]
fn test_back_substitute_zero_diagonal_propagates_non_finite() {
    let r = matrix(&[&[1.0, 2.0], &[0.0, 0.0]]);
    let c = Matrix::column(&[1.0, 1.0]).unwrap();

    let x = back_substitute(&r, &c).unwrap();
    assert!(!x.get(1, 0).is_finite());
}
