use ndarray::Array1;
use sce_testfunctions::shekel;
use sce_ua::{SceConfigBuilder, Termination, sceua, shuffled_complex_evolution};

const SHEKEL_MIN: f64 = -10.5364098252;

fn wide_box_run(seed: u64) -> sce_ua::SceReport {
	let lower = Array1::from(vec![0.0; 4]);
	let upper = Array1::from(vec![100.0; 4]);
	let x0 = Array1::from(vec![50.0; 4]);
	sceua(&x0, &lower, &upper, 100_000, 10, 0.001, 1e-5, None, Some(seed), false, shekel).unwrap()
}

#[test]
fn test_sceua_shekel_wide_box() {
	// the plateau stop can end a run in a shallow basin, seed 3 converges
	let report = wide_box_run(3);
	assert!((report.fun - SHEKEL_MIN).abs() < 0.1, "Solution quality too low: {}", report.fun);
	for &xi in report.x.iter() {
		assert!((xi - 4.0).abs() < 0.1, "x too far from 4: {}", xi);
	}
	// the best initial member is far from the optimum
	assert!(report.history[0].fun > SHEKEL_MIN + 0.1);
}

#[test]
fn test_sceua_shekel_wide_box_over_seeds() {
	let reports: Vec<_> = (1..=10).map(wide_box_run).collect();
	let hits = reports.iter().filter(|r| (r.fun - SHEKEL_MIN).abs() < 0.1).count();
	assert!(hits >= 5, "only {} of 10 seeds reached the global minimum", hits);
	for report in reports.iter().filter(|r| (r.fun - SHEKEL_MIN).abs() >= 0.1) {
		assert!(report.terminated_by(Termination::ObjectivePlateau), "{:?}", report.termination);
	}
}

#[test]
fn test_sceua_shekel_x0_seeded_verbatim() {
	let lower = Array1::from(vec![0.0; 4]);
	let upper = Array1::from(vec![100.0; 4]);
	let x0 = Array1::from(vec![4.0; 4]);
	let report = sceua(&x0, &lower, &upper, 5_000, 10, 0.001, 1e-5, None, Some(1), true, shekel).unwrap();

	let f_x0 = shekel(&x0);
	assert_eq!(report.history[0].fun, f_x0);
	assert_eq!(report.history[0].x, vec![4.0; 4]);
	assert!(report.fun <= f_x0);
}

#[test]
fn test_sceua_shekel() {
	let bounds = vec![(0.0, 10.0); 4];
	let config = SceConfigBuilder::new().seed(17).ngs(20).build();
	let report = shuffled_complex_evolution(&shekel, &bounds, config).unwrap();
	// other basins bottom out around -5.2
	assert!(report.fun < -10.0, "Solution quality too low: {}", report.fun);
}
