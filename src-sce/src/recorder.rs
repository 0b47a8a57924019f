use std::fs::create_dir_all;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

use crate::{CallbackAction, SceIntermediate};

/// Records optimization progress via SCE-UA callbacks
#[derive(Debug)]
pub struct OptimizationRecorder {
	/// Function name (used for CSV filename)
	function_name: String,
	/// Shared records storage
	records: Arc<Mutex<Vec<OptimizationRecord>>>,
	/// Best function value seen so far
	best_value: Arc<Mutex<Option<f64>>>,
}

/// A single shuffling loop record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationRecord {
	pub nloop: usize,
	/// Evaluations spent when the loop finished
	pub nfev: usize,
	/// Best x of the population
	pub x: Vec<f64>,
	pub best_result: f64,
	pub worst_result: f64,
	/// Normalized geometric range of the population
	pub gnrng: f64,
	pub criter_change: f64,
	/// Whether this loop improved the best known result
	pub is_improvement: bool,
}

impl OptimizationRecorder {
	/// Create a new optimization recorder for the given function
	pub fn new(function_name: String) -> Self {
		Self {
			function_name,
			records: Arc::new(Mutex::new(Vec::new())),
			best_value: Arc::new(Mutex::new(None)),
		}
	}

	pub fn function_name(&self) -> &str {
		&self.function_name
	}

	/// Create a callback function that records optimization progress
	pub fn create_callback(&self) -> Box<dyn FnMut(&SceIntermediate) -> CallbackAction + Send> {
		let records = self.records.clone();
		let best_value = self.best_value.clone();

		Box::new(move |intermediate: &SceIntermediate| -> CallbackAction {
			let mut best_guard = best_value.lock().unwrap_or_else(PoisonError::into_inner);
			let is_improvement = match *best_guard {
				Some(best) => intermediate.fun < best,
				None => true,
			};
			if is_improvement {
				*best_guard = Some(intermediate.fun);
			}
			drop(best_guard);

			records.lock().unwrap_or_else(PoisonError::into_inner).push(OptimizationRecord {
				nloop: intermediate.nloop,
				nfev: intermediate.nfev,
				x: intermediate.x.to_vec(),
				best_result: intermediate.fun,
				worst_result: intermediate.worst_fun,
				gnrng: intermediate.gnrng,
				criter_change: intermediate.criter_change,
				is_improvement,
			});

			CallbackAction::Continue
		})
	}

	/// Save all recorded loops to `<output_dir>/<function_name>.csv`
	///
	/// Columns are `nloop,nfev,x0..x{n-1},best_result,worst_result,gnrng,criter_change,is_improvement`.
	pub fn save_to_csv(&self, output_dir: impl AsRef<Path>) -> Result<String, Box<dyn std::error::Error>> {
		let output_dir = output_dir.as_ref();
		create_dir_all(output_dir)?;

		let filename = output_dir.join(format!("{}.csv", self.function_name));
		let mut writer = csv::Writer::from_path(&filename)?;

		let records_guard = self.records.lock().unwrap_or_else(PoisonError::into_inner);
		if let Some(first) = records_guard.first() {
			let mut header = vec!["nloop".to_string(), "nfev".to_string()];
			header.extend((0..first.x.len()).map(|i| format!("x{}", i)));
			header.extend(
				["best_result", "worst_result", "gnrng", "criter_change", "is_improvement"]
					.iter()
					.map(|s| s.to_string()),
			);
			writer.write_record(&header)?;

			for record in records_guard.iter() {
				let mut row = vec![record.nloop.to_string(), record.nfev.to_string()];
				row.extend(record.x.iter().map(|xi| format!("{:.16}", xi)));
				row.push(format!("{:.16}", record.best_result));
				row.push(format!("{:.16}", record.worst_result));
				row.push(format!("{:.16e}", record.gnrng));
				row.push(format!("{:.16e}", record.criter_change));
				row.push(record.is_improvement.to_string());
				writer.write_record(&row)?;
			}
		}
		writer.flush()?;

		Ok(filename.to_string_lossy().into_owned())
	}

	/// Get a copy of all recorded loops
	pub fn get_records(&self) -> Vec<OptimizationRecord> {
		self.records.lock().unwrap_or_else(PoisonError::into_inner).clone()
	}

	pub fn num_loops(&self) -> usize {
		self.records.lock().unwrap_or_else(PoisonError::into_inner).len()
	}

	/// Clear all recorded loops
	pub fn clear(&self) {
		self.records.lock().unwrap_or_else(PoisonError::into_inner).clear();
		*self.best_value.lock().unwrap_or_else(PoisonError::into_inner) = None;
	}

	/// Best point of the last recorded loop
	pub fn get_best_solution(&self) -> Option<(Vec<f64>, f64)> {
		let records_guard = self.records.lock().unwrap_or_else(PoisonError::into_inner);
		records_guard.last().map(|r| (r.x.clone(), r.best_result))
	}
}
