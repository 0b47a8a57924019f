//! Benchmark functions for the SCE-UA optimizer
//!
//! This library provides the reference problems used to exercise and validate
//! the Shuffled Complex Evolution optimizer. Functions are organized by
//! category:
//!
//! - **Unimodal**: Rosenbrock
//! - **Multimodal**: Goldstein-Price, six-hump camelback, Rastrigin, Griewank,
//!   Shekel, Hartman, Hosaki
//!
//! Every function has the signature `fn(&Array1<f64>) -> f64` and is pure.
//!
//! # Example
//!
//! ```rust
//! use ndarray::Array1;
//! use sce_testfunctions::*;
//!
//! let x = Array1::from_vec(vec![1.0, 1.0]);
//! assert_eq!(rosenbrock(&x), 0.0);
//!
//! // Get function metadata
//! let metadata = get_function_metadata();
//! let bounds = get_function_bounds("rosenbrock");
//! assert_eq!(bounds, Some(vec![(-5.0, 5.0), (-2.0, 8.0)]));
//! assert!(metadata.contains_key("shekel"));
//! ```

use ndarray::{Array1, Array2};
use std::collections::HashMap;

pub mod functions;
pub use functions::*;

/// Objective function signature shared by every benchmark
pub type TestFunction = fn(&Array1<f64>) -> f64;

/// Metadata for a benchmark function: bounds, known optima and a reference start
#[derive(Debug, Clone)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// The function itself
    pub function: TestFunction,
    /// Bounds for each dimension (min, max)
    pub bounds: Vec<(f64, f64)>,
    /// Global minima locations and values
    pub global_minima: Vec<(Vec<f64>, f64)>,
    /// Reference starting point (usually the known optimum)
    pub start: Vec<f64>,
    /// Description of the function
    pub description: String,
    /// Whether the function is multimodal
    pub multimodal: bool,
}

impl FunctionMetadata {
    /// Number of parameters of the reference problem
    pub fn dimension(&self) -> usize {
        self.bounds.len()
    }

    /// Best known objective value
    pub fn best_known_value(&self) -> Option<f64> {
        self.global_minima.iter().map(|(_, f)| *f).reduce(f64::min)
    }

    /// Lower bounds as an array
    pub fn lower(&self) -> Array1<f64> {
        self.bounds.iter().map(|(lo, _)| *lo).collect()
    }

    /// Upper bounds as an array
    pub fn upper(&self) -> Array1<f64> {
        self.bounds.iter().map(|(_, hi)| *hi).collect()
    }
}

/// Create bounds matrix for optimization (2 x n matrix)
/// bounds[[0, i]] = lower bound, bounds[[1, i]] = upper bound
pub fn create_bounds(n: usize, lower: f64, upper: f64) -> Array2<f64> {
    Array2::from_shape_fn((2, n), |(i, _)| if i == 0 { lower } else { upper })
}

/// Get metadata for all reference functions
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    let mut metadata = HashMap::new();

    metadata.insert(
        "goldstein_price".to_string(),
        FunctionMetadata {
            name: "goldstein_price".to_string(),
            function: goldstein_price,
            bounds: vec![(-2.0, 2.0); 2],
            global_minima: vec![(vec![0.0, -1.0], 3.0)],
            start: vec![0.0, -1.0],
            description: "2D multimodal function with deep local minima".to_string(),
            multimodal: true,
        },
    );

    metadata.insert(
        "rosenbrock".to_string(),
        FunctionMetadata {
            name: "rosenbrock".to_string(),
            function: rosenbrock,
            bounds: vec![(-5.0, 5.0), (-2.0, 8.0)],
            global_minima: vec![(vec![1.0, 1.0], 0.0)],
            start: vec![1.0, 1.0],
            description: "2D banana-shaped valley".to_string(),
            multimodal: false,
        },
    );

    metadata.insert(
        "six_hump_camelback".to_string(),
        FunctionMetadata {
            name: "six_hump_camelback".to_string(),
            function: six_hump_camelback,
            bounds: vec![(-5.0, 5.0), (-2.0, 2.0)],
            global_minima: vec![
                (vec![0.08983, -0.7126], -1.031628453489877),
                (vec![-0.08983, 0.7126], -1.031628453489877),
            ],
            start: vec![-0.08983, 0.7126],
            description: "2D function with six local minima, two of them global".to_string(),
            multimodal: true,
        },
    );

    metadata.insert(
        "rastrigin".to_string(),
        FunctionMetadata {
            name: "rastrigin".to_string(),
            function: rastrigin,
            bounds: vec![(-1.0, 1.0); 2],
            global_minima: vec![(vec![0.0, 0.0], -2.0)],
            start: vec![0.0, 0.0],
            description: "2D cosine variant with a regular grid of local minima".to_string(),
            multimodal: true,
        },
    );

    metadata.insert(
        "griewank".to_string(),
        FunctionMetadata {
            name: "griewank".to_string(),
            function: griewank,
            bounds: vec![(-600.0, 600.0); 10],
            global_minima: vec![(vec![0.0; 10], 0.0)],
            start: vec![0.0; 10],
            description: "10D function with a huge number of shallow local minima".to_string(),
            multimodal: true,
        },
    );

    metadata.insert(
        "griewank_2d".to_string(),
        FunctionMetadata {
            name: "griewank_2d".to_string(),
            function: griewank_2d,
            bounds: vec![(-600.0, 600.0); 2],
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            start: vec![0.0, 0.0],
            description: "2D Griewank with the steeper 1/200 quadratic term".to_string(),
            multimodal: true,
        },
    );

    metadata.insert(
        "shekel".to_string(),
        FunctionMetadata {
            name: "shekel".to_string(),
            function: shekel,
            bounds: vec![(0.0, 10.0); 4],
            global_minima: vec![(vec![4.0; 4], -10.5364098252)],
            start: vec![4.0; 4],
            description: "4D Shekel function with ten wells (m = 10)".to_string(),
            multimodal: true,
        },
    );

    metadata.insert(
        "hartman_3d".to_string(),
        FunctionMetadata {
            name: "hartman_3d".to_string(),
            function: hartman_3d,
            bounds: vec![(0.0, 1.0); 3],
            global_minima: vec![(vec![0.114614, 0.555649, 0.852547], -3.86278)],
            start: vec![0.114614, 0.555649, 0.852547],
            description: "3D Hartman function with four local minima".to_string(),
            multimodal: true,
        },
    );

    metadata.insert(
        "hartman".to_string(),
        FunctionMetadata {
            name: "hartman".to_string(),
            function: hartman_6d,
            bounds: vec![(0.0, 1.0); 6],
            global_minima: vec![(
                vec![0.201690, 0.150011, 0.476874, 0.275332, 0.311652, 0.657300],
                -3.322368011415515,
            )],
            start: vec![0.201, 0.150, 0.477, 0.275, 0.311, 0.657],
            description: "6D Hartman function with six local minima".to_string(),
            multimodal: true,
        },
    );

    metadata.insert(
        "hosaki".to_string(),
        FunctionMetadata {
            name: "hosaki".to_string(),
            function: hosaki,
            bounds: vec![(0.0, 5.0), (0.0, 6.0)],
            global_minima: vec![(vec![4.0, 2.0], -2.3458)],
            start: vec![4.0, 2.0],
            description: "2D function with one local and one global minimum".to_string(),
            multimodal: true,
        },
    );

    metadata
}

/// Names of the reference functions, sorted
pub fn function_names() -> Vec<String> {
    let mut names: Vec<String> = get_function_metadata().into_keys().collect();
    names.sort();
    names
}

/// Helper function to get bounds for a specific function from metadata
/// Returns None if function is not found in metadata
pub fn get_function_bounds(function_name: &str) -> Option<Vec<(f64, f64)>> {
    let metadata = get_function_metadata();
    metadata.get(function_name).map(|meta| meta.bounds.clone())
}

/// Helper function to get bounds as a Vec for optimization
/// Returns 2D default bounds if function is not found
pub fn get_function_bounds_vec(function_name: &str, default_bounds: (f64, f64)) -> Vec<(f64, f64)> {
    get_function_bounds(function_name).unwrap_or_else(|| vec![default_bounds; 2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_function_minima() {
        let metadata = get_function_metadata();
        let loose_tolerance = 1e-3;

        for (func_name, meta) in metadata.iter() {
            for (minimum_location, expected_value) in &meta.global_minima {
                let x = Array1::from_vec(minimum_location.clone());
                let actual_value = (meta.function)(&x);
                let error = (actual_value - expected_value).abs();

                let test_tolerance = if expected_value.abs() > 1.0 {
                    loose_tolerance * expected_value.abs()
                } else {
                    loose_tolerance
                };

                assert!(
                    error <= test_tolerance,
                    "Function {} failed: at {:?}, expected {:.10}, got {:.10}, error {:.2e} > tolerance {:.2e}",
                    func_name,
                    minimum_location,
                    expected_value,
                    actual_value,
                    error,
                    test_tolerance
                );
            }
        }
    }

    #[test]
    fn test_function_metadata_completeness() {
        let metadata = get_function_metadata();
        assert_eq!(metadata.len(), 10);

        for (name, meta) in metadata.iter() {
            assert_eq!(&meta.name, name);
            assert!(!meta.bounds.is_empty(), "Function {} has no bounds", name);
            assert!(!meta.description.is_empty(), "Function {} has no description", name);
            assert_eq!(meta.start.len(), meta.dimension(), "Function {} start has wrong size", name);

            for (lower, upper) in &meta.bounds {
                assert!(lower < upper, "Function {} has invalid bounds: {} >= {}", name, lower, upper);
            }

            for (location, _value) in &meta.global_minima {
                assert_eq!(location.len(), meta.dimension(), "Function {} minimum has wrong size", name);
                for (xi, (lo, hi)) in location.iter().zip(meta.bounds.iter()) {
                    assert!(xi >= lo && xi <= hi, "Function {} minimum outside bounds", name);
                }
            }
        }
    }

    #[test]
    fn test_bounds_helpers() {
        assert_eq!(get_function_bounds_vec("hosaki", (-1.0, 1.0)), vec![(0.0, 5.0), (0.0, 6.0)]);
        assert_eq!(get_function_bounds_vec("unknown", (-1.0, 1.0)), vec![(-1.0, 1.0); 2]);

        let b = create_bounds(3, -2.0, 4.0);
        assert_eq!(b.shape(), &[2, 3]);
        assert_eq!(b[[0, 2]], -2.0);
        assert_eq!(b[[1, 0]], 4.0);

        let meta = &get_function_metadata()["hosaki"];
        assert_eq!(meta.lower(), Array1::from(vec![0.0, 0.0]));
        assert_eq!(meta.upper(), Array1::from(vec![5.0, 6.0]));
        assert_eq!(meta.best_known_value(), Some(-2.3458));
    }

    #[test]
    fn test_function_names_sorted() {
        let names = function_names();
        assert_eq!(names.first().map(String::as_str), Some("goldstein_price"));
        assert!(names.windows(2).all(|w| w[0] < w[1]));
    }
}
