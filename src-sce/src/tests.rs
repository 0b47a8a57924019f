use ndarray::Array1;

use crate::{
	CallbackAction, OptimizationRecorder, SceConfigBuilder, SceIntermediate, ShuffledComplexEvolution,
	run_recorded_sce,
};

fn intermediate(nloop: usize, x: Vec<f64>, fun: f64) -> SceIntermediate {
	let n = x.len();
	SceIntermediate {
		nloop,
		nfev: 10 * (nloop + 1),
		x: Array1::from(x),
		fun,
		worst_x: Array1::zeros(n),
		worst_fun: fun + 1.0,
		gnrng: 0.5,
		criter_change: 1e5,
		xnstd: Array1::zeros(n),
	}
}

#[test]
fn test_optimization_recorder() {
	let recorder = OptimizationRecorder::new("test_function".to_string());
	let mut callback = recorder.create_callback();

	assert_eq!(callback(&intermediate(0, vec![1.0, 2.0], 5.0)), CallbackAction::Continue);
	assert_eq!(callback(&intermediate(1, vec![0.5, 1.0], 1.25)), CallbackAction::Continue);
	assert_eq!(callback(&intermediate(2, vec![0.5, 1.0], 1.25)), CallbackAction::Continue);

	let records = recorder.get_records();
	assert_eq!(records.len(), 3);
	assert_eq!(records[0].nloop, 0);
	assert_eq!(records[0].x, vec![1.0, 2.0]);
	assert_eq!(records[0].best_result, 5.0);
	assert_eq!(records[0].worst_result, 6.0);
	assert!(records[0].is_improvement);
	assert!(records[1].is_improvement);
	assert!(!records[2].is_improvement);

	assert_eq!(recorder.get_best_solution(), Some((vec![0.5, 1.0], 1.25)));
	recorder.clear();
	assert_eq!(recorder.num_loops(), 0);
	assert_eq!(recorder.get_best_solution(), None);
}

#[test]
fn test_recorder_csv_layout() {
	let dir = tempfile::tempdir().unwrap();
	let recorder = OptimizationRecorder::new("layout".to_string());
	let mut callback = recorder.create_callback();
	callback(&intermediate(0, vec![1.0, 2.0, 3.0], 4.0));
	callback(&intermediate(1, vec![0.0, 2.0, 3.0], 2.0));

	let path = recorder.save_to_csv(dir.path()).unwrap();
	let mut reader = csv::Reader::from_path(&path).unwrap();
	let header: Vec<String> = reader.headers().unwrap().iter().map(|s| s.to_string()).collect();
	assert_eq!(
		header,
		vec![
			"nloop",
			"nfev",
			"x0",
			"x1",
			"x2",
			"best_result",
			"worst_result",
			"gnrng",
			"criter_change",
			"is_improvement"
		]
	);
	let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
	assert_eq!(rows.len(), 2);
	assert_eq!(&rows[1][0], "1");
	assert_eq!(&rows[1][1], "20");
	assert_eq!(rows[1][5].parse::<f64>().unwrap(), 2.0);
	assert_eq!(&rows[1][9], "true");
}

#[test]
fn test_empty_recorder_writes_empty_file() {
	let dir = tempfile::tempdir().unwrap();
	let recorder = OptimizationRecorder::new("nothing".to_string());
	let path = recorder.save_to_csv(dir.path().join("nested")).unwrap();
	assert_eq!(std::fs::read_to_string(path).unwrap(), "");
}

#[test]
fn test_recorder_follows_solver() {
	let sphere = |x: &Array1<f64>| x.iter().map(|v| v * v).sum::<f64>();
	let recorder = OptimizationRecorder::new("sphere".to_string());
	let mut sce = ShuffledComplexEvolution::new(&sphere, Array1::from(vec![-1.0; 2]), Array1::from(vec![1.0; 2]));
	*sce.config_mut() = SceConfigBuilder::new().seed(1).maxn(1000).callback(recorder.create_callback()).build();
	let report = sce.solve().unwrap();

	let records = recorder.get_records();
	assert_eq!(records.len(), report.history.len());
	for (record, loop_record) in records.iter().zip(report.history.iter()) {
		assert_eq!(record.nloop, loop_record.nloop);
		assert_eq!(record.nfev, loop_record.nfev);
		assert_eq!(record.best_result, loop_record.fun);
	}
	assert!(records[0].is_improvement);
}

#[test]
fn test_recorded_optimization() {
	let dir = tempfile::tempdir().unwrap();
	let quadratic = |x: &Array1<f64>| x.iter().map(|v| v * v).sum::<f64>();
	let bounds = vec![(-5.0, 5.0), (-5.0, 5.0)];
	let config = SceConfigBuilder::new().seed(42).maxn(500).build();

	let (report, csv_path) = run_recorded_sce("quadratic", quadratic, &bounds, config, dir.path()).unwrap();
	assert!(std::path::Path::new(&csv_path).exists());
	let content = std::fs::read_to_string(&csv_path).unwrap();
	let lines: Vec<&str> = content.trim().lines().collect();
	assert!(lines[0].starts_with("nloop,nfev,x0,x1,best_result"));
	assert_eq!(lines.len(), report.history.len() + 1);
}
