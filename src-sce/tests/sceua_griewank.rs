use sce_testfunctions::{get_function_metadata, griewank, griewank_2d};
use sce_ua::{SceConfigBuilder, Termination, shuffled_complex_evolution};

#[test]
fn test_sceua_griewank_2d() {
	let bounds = vec![(-600.0, 600.0); 2];
	let config = SceConfigBuilder::new().seed(13).ngs(25).build();
	let report = shuffled_complex_evolution(&griewank_2d, &bounds, config).unwrap();
	assert!(report.fun < 0.1, "Solution quality too low: {}", report.fun);
}

#[test]
fn test_sceua_griewank_10d() {
	let meta = &get_function_metadata()["griewank"];
	assert_eq!(meta.dimension(), 10);
	let config = SceConfigBuilder::new().seed(29).build();
	let report = shuffled_complex_evolution(&griewank, &meta.bounds, config).unwrap();

	assert!(report.fun < 1.0, "Solution quality too low: {}", report.fun);
	assert!(!report.terminated_by(Termination::Callback));
	assert!(report.nfev <= 100_000 + 3 * 15 * 21);
}
