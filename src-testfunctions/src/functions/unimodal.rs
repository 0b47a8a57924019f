//! Unimodal test functions
//!
//! A single global minimum, but usually a narrow curved valley that is hard
//! to follow for direct-search methods.

use ndarray::Array1;

/// Rosenbrock function - narrow parabolic valley
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x1 in [-5, 5], x2 in [-2, 8] for the 2D reference problem
pub fn rosenbrock(x: &Array1<f64>) -> f64 {
    x.windows(2)
        .into_iter()
        .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rosenbrock_minimum() {
        let x = Array1::from(vec![1.0, 1.0]);
        assert_eq!(rosenbrock(&x), 0.0);
        let x = Array1::from(vec![1.0, 1.0, 1.0, 1.0]);
        assert_eq!(rosenbrock(&x), 0.0);
    }

    #[test]
    fn test_rosenbrock_2d_matches_closed_form() {
        let x = Array1::from(vec![-1.2, 1.0]);
        let expected = 100.0 * (1.0 - 1.44f64).powi(2) + (1.0 + 1.2f64).powi(2);
        assert!((rosenbrock(&x) - expected).abs() < 1e-12);
    }
}
