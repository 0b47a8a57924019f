//! Recording wrapper for SCE-UA, mostly used by tests and benchmarks

use std::path::Path;

use ndarray::Array1;

use crate::recorder::OptimizationRecorder;
use crate::{CallbackAction, SceConfig, SceIntermediate, SceReport, shuffled_complex_evolution};

/// Run SCE-UA and record every shuffling loop to `<output_dir>/<function_name>.csv`
///
/// A callback already present in `config` still runs after the recorder
/// and may stop the search.
pub fn run_recorded_sce<F>(
	function_name: &str,
	func: F,
	bounds: &[(f64, f64)],
	mut config: SceConfig,
	output_dir: impl AsRef<Path>,
) -> Result<(SceReport, String), Box<dyn std::error::Error>>
where
	F: Fn(&Array1<f64>) -> f64,
{
	let recorder = OptimizationRecorder::new(function_name.to_string());
	let mut record = recorder.create_callback();
	let mut user_callback = config.callback.take();
	config.callback = Some(Box::new(move |intermediate: &SceIntermediate| {
		record(intermediate);
		match user_callback.as_mut() {
			Some(cb) => cb(intermediate),
			None => CallbackAction::Continue,
		}
	}));

	let report = shuffled_complex_evolution(&func, bounds, config)?;
	let csv_path = recorder.save_to_csv(output_dir)?;
	log::info!(
		"{}: f={:.6e} after {} evaluations, {} loops recorded in {}",
		function_name,
		report.fun,
		report.nfev,
		recorder.num_loops(),
		csv_path
	);
	Ok((report, csv_path))
}
