use ndarray::Array1;
use sce_ua::{SceConfigBuilder, SceError, ShuffledComplexEvolution, sceua, shuffled_complex_evolution};

fn sphere(x: &Array1<f64>) -> f64 {
	x.iter().map(|v| v * v).sum()
}

#[test]
fn test_bounds_length_mismatch() {
	let mut sce = ShuffledComplexEvolution::new(&sphere, Array1::zeros(2), Array1::ones(3));
	let err = sce.solve().unwrap_err();
	assert!(matches!(err, SceError::BoundsMismatch { lower_len: 2, upper_len: 3 }));
	assert!(err.is_bounds_error());
}

#[test]
fn test_empty_problem() {
	let err = shuffled_complex_evolution(&sphere, &[], SceConfigBuilder::new().build()).unwrap_err();
	assert!(matches!(err, SceError::EmptyProblem));
	assert!(err.is_dimension_error());
}

#[test]
fn test_inverted_or_non_finite_bounds() {
	let err = shuffled_complex_evolution(&sphere, &[(0.0, 1.0), (2.0, 2.0)], SceConfigBuilder::new().build())
		.unwrap_err();
	assert!(matches!(err, SceError::InvalidBounds { index: 1, .. }));

	let err = shuffled_complex_evolution(&sphere, &[(f64::NAN, 1.0)], SceConfigBuilder::new().build())
		.unwrap_err();
	assert!(matches!(err, SceError::InvalidBounds { index: 0, .. }));
	assert!(err.is_bounds_error());
}

#[test]
fn test_x0_dimension_mismatch() {
	let config = SceConfigBuilder::new().x0(Array1::from(vec![0.0, 0.0, 0.0])).build();
	let err = shuffled_complex_evolution(&sphere, &[(0.0, 1.0), (0.0, 1.0)], config).unwrap_err();
	assert!(matches!(err, SceError::X0DimensionMismatch { expected: 2, got: 3 }));
	assert!(err.is_dimension_error());
}

#[test]
fn test_invalid_configuration() {
	let bounds = [(0.0, 1.0), (0.0, 1.0)];

	let err = shuffled_complex_evolution(&sphere, &bounds, SceConfigBuilder::new().ngs(0).build()).unwrap_err();
	assert!(matches!(err, SceError::InvalidComplexCount { ngs: 0 }));
	assert!(err.is_config_error());

	let err = shuffled_complex_evolution(&sphere, &bounds, SceConfigBuilder::new().kstop(0).build()).unwrap_err();
	assert!(matches!(err, SceError::InvalidPlateauWindow { kstop: 0 }));
	assert!(err.is_config_error());

	let err =
		shuffled_complex_evolution(&sphere, &bounds, SceConfigBuilder::new().pcento(-1.0).build()).unwrap_err();
	assert!(matches!(err, SceError::InvalidThreshold { name: "pcento", .. }));

	let lower = Array1::from(vec![0.0, 0.0]);
	let upper = Array1::from(vec![1.0, 1.0]);
	let err = sceua(&lower, &lower, &upper, 100, 5, 0.1, f64::NAN, None, Some(1), false, sphere).unwrap_err();
	assert!(matches!(err, SceError::InvalidThreshold { name: "peps", .. }));
}

