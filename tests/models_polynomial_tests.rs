use approx::{assert_abs_diff_eq, assert_relative_eq};
use linreg_rs::prelude::*;

/// Points exactly on y = 1 + 2x + x^2.
fn quadratic_points() -> Vec<Point<f64>> {
    (0..6)
        .map(|i| {
            let x = i as f64;
            Point::new(x, 1.0 + 2.0 * x + x * x)
        })
        .collect()
}

// ============================================================================
// Fitting Tests
// ============================================================================

#[test]
fn test_fit_exact_quadratic() {
    let model = PolynomialRegression::new(quadratic_points(), 2).unwrap();

    let coefficients = model.coefficients();
    assert_eq!(coefficients.rows(), 3);
    assert_relative_eq!(coefficients.get(0, 0), 1.0, epsilon = 1e-7);
    assert_relative_eq!(coefficients.get(1, 0), 2.0, epsilon = 1e-7);
    assert_relative_eq!(coefficients.get(2, 0), 1.0, epsilon = 1e-7);

    assert_eq!(model.degree(), 2);
    assert_eq!(model.points().len(), 6);
    assert_abs_diff_eq!(model.rmse(), 0.0, epsilon = 1e-7);
}

#[test]
fn test_degree_zero_fits_mean_of_y() {
    let points = vec![Point::new(1.0, 2.0), Point::new(2.0, 4.0), Point::new(3.0, 6.0)];
    let model = PolynomialRegression::new(points, 0).unwrap();

    assert_eq!(model.coefficients().rows(), 1);
    assert_relative_eq!(model.coefficients().get(0, 0), 4.0, epsilon = 1e-12);
    assert_relative_eq!(model.predict(100.0), 4.0, epsilon = 1e-12);
}

#[test]
fn test_degree_one_matches_simple_regression() {
    let points = vec![
        Point::new(1.0, 1.0),
        Point::new(2.0, 3.0),
        Point::new(4.0, 3.0),
        Point::new(3.0, 2.0),
        Point::new(5.0, 5.0),
    ];
    let simple = SimpleLinearRegression::new(points.clone()).unwrap();
    let polynomial = PolynomialRegression::new(points, 1).unwrap();

    assert_relative_eq!(
        polynomial.coefficients().get(0, 0),
        simple.intercept(),
        epsilon = 1e-9
    );
    assert_relative_eq!(
        polynomial.coefficients().get(1, 0),
        simple.slope(),
        epsilon = 1e-9
    );
}

#[test]
fn test_coefficients_are_stable_across_reads() {
    let model = PolynomialRegression::new(quadratic_points(), 2).unwrap();
    let first = model.coefficients().clone();
    let second = model.coefficients().clone();
    assert_eq!(first, second);
}

// ============================================================================
// Prediction and Error Tests
// ============================================================================

#[test]
fn test_predict() {
    let model = PolynomialRegression::new(quadratic_points(), 2).unwrap();
    // 1 + 2*7 + 49
    assert_relative_eq!(model.predict(7.0), 64.0, epsilon = 1e-6);
    assert_relative_eq!(model.predict(0.0), 1.0, epsilon = 1e-7);
}

#[test]
fn test_rmse_on_held_out_points() {
    let model = PolynomialRegression::new(quadratic_points(), 2).unwrap();

    let held_out = vec![Point::new(0.5, 2.25), Point::new(1.5, 6.25)];
    assert_abs_diff_eq!(model.rmse_on(&held_out), 0.0, epsilon = 1e-7);

    // Shift one y by 2: rmse = sqrt(4 / 2)
    let shifted = vec![Point::new(0.5, 4.25), Point::new(1.5, 6.25)];
    assert_abs_diff_eq!(model.rmse_on(&shifted), 2.0f64.sqrt(), epsilon = 1e-6);
}

#[test]
fn test_underfit_degree_has_positive_training_error() {
    let model = PolynomialRegression::new(quadratic_points(), 1).unwrap();
    assert!(model.rmse() > 0.5);
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_negative_degree_is_rejected() {
    let err = PolynomialRegression::new(quadratic_points(), -1).unwrap_err();
    assert_eq!(err, RegressionError::InvalidDegree { degree: -1 });

    let err = PolynomialRegression::new(quadratic_points(), -7).unwrap_err();
    assert_eq!(err, RegressionError::InvalidDegree { degree: -7 });
}

#[test]
fn test_empty_points_are_rejected() {
    let err = PolynomialRegression::<f64>::new(vec![], 2).unwrap_err();
    assert_eq!(err, RegressionError::EmptyInput);
}

#[test]
fn test_degree_check_precedes_empty_check() {
    let err = PolynomialRegression::<f64>::new(vec![], -1).unwrap_err();
    assert_eq!(err, RegressionError::InvalidDegree { degree: -1 });
}

#[test]
fn test_non_finite_points_are_rejected() {
    let points = vec![Point::new(1.0, 1.0), Point::new(f64::NAN, 2.0)];
    let err = PolynomialRegression::new(points, 1).unwrap_err();
    assert!(matches!(err, RegressionError::InvalidNumericValue(_)));
}
