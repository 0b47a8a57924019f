use ndarray::Array1;
use sce_ua::{SceConfigBuilder, ShuffledComplexEvolution, Termination, shuffled_complex_evolution};

fn sphere(x: &Array1<f64>) -> f64 {
	x.iter().map(|v| v * v).sum()
}

#[test]
fn test_budget_below_population_size() {
	let lower = Array1::from(vec![-5.0, -5.0]);
	let upper = Array1::from(vec![5.0, 5.0]);
	let mut sce = ShuffledComplexEvolution::new(&sphere, lower, upper);
	*sce.config_mut() = SceConfigBuilder::new().seed(2).maxn(10).build();
	let report = sce.solve().unwrap();

	// 7 complexes of 5 members are evaluated anyway
	assert_eq!(report.nfev, 35);
	assert_eq!(report.nloop, 0);
	assert!(report.terminated_by(Termination::MaxEvaluations));
	assert!(!report.success);
	assert_eq!(report.history.len(), 1);

	let min_initial = report.population_values.iter().cloned().fold(f64::INFINITY, f64::min);
	assert_eq!(report.fun, min_initial);
	assert_eq!(report.fun, report.population_values[0]);
	assert_eq!(report.x, report.population.row(0));
}

#[test]
fn test_budget_overshoot_is_bounded_by_one_loop() {
	let bounds = vec![(-5.0, 5.0); 3];
	let config = SceConfigBuilder::new().seed(4).maxn(500).ngs(4).peps(0.0).pcento(0.0).build();
	let report = shuffled_complex_evolution(&sphere, &bounds, config).unwrap();

	assert!(report.terminated_by(Termination::MaxEvaluations));
	assert!(report.nfev >= 500);
	// one loop is 4 complexes x 7 steps x at most 3 evaluations
	assert!(report.nfev < 500 + 3 * 4 * 7);
	assert!(report.message.contains("maximum number of evaluations"));
}
