use approx::assert_relative_eq;
use linreg_rs::math::stats;
use linreg_rs::prelude::*;

// ============================================================================
// Mean Tests
// ============================================================================

#[test]
fn test_mean() {
    assert_relative_eq!(stats::mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
    assert_relative_eq!(stats::mean(&[1.0, 2.0, 3.0, 4.0, 4.0]), 2.8);
    assert_relative_eq!(stats::mean(&[7.5]), 7.5);
}

// ============================================================================
// Variance Tests
// ============================================================================

#[test]
fn test_variance_is_sum_of_squared_deviations() {
    // (1-3)^2 + (2-3)^2 + 0 + 1 + 4 = 10, not divided by n
    assert_relative_eq!(stats::variance(&[1.0, 2.0, 3.0, 4.0, 5.0]), 10.0);
}

#[test]
fn test_variance_of_constant_sequence_is_zero() {
    assert_relative_eq!(stats::variance(&[4.0, 4.0, 4.0]), 0.0);
}

// ============================================================================
// Covariance Tests
// ============================================================================

#[test]
fn test_covariance_is_sum_of_cross_deviations() {
    let xs = [1.0, 2.0, 4.0, 3.0, 5.0];
    let ys = [1.0, 3.0, 3.0, 2.0, 5.0];
    assert_relative_eq!(stats::covariance(&xs, &ys), 8.0, epsilon = 1e-12);
}

#[test]
fn test_covariance_of_points_matches_split_covariance() {
    let points = vec![
        Point::new(1.0, 1.0),
        Point::new(2.0, 3.0),
        Point::new(4.0, 3.0),
        Point::new(3.0, 2.0),
        Point::new(5.0, 5.0),
    ];
    assert_relative_eq!(stats::covariance_of_points(&points), 8.0, epsilon = 1e-12);
}

#[test]
fn test_covariance_of_variable_with_itself_is_variance() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_relative_eq!(
        stats::covariance(&values, &values),
        stats::variance(&values)
    );
}

// ============================================================================
// Point Helper Tests
// ============================================================================

#[test]
fn test_xs_of_and_ys_of_preserve_order() {
    let points = vec![Point::new(1.0, 10.0), Point::new(2.0, 20.0), Point::new(3.0, 30.0)];
    assert_eq!(stats::xs_of(&points), vec![1.0, 2.0, 3.0]);
    assert_eq!(stats::ys_of(&points), vec![10.0, 20.0, 30.0]);
}
