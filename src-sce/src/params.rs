//! Serializable SCE-UA parameters, loadable from JSON

use std::fs;
use std::path::{Path, PathBuf};

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::SceConfig;

/// Plain parameter set for SCE-UA
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceParams {
	/// Maximum number of objective evaluations
	pub maxn: usize,
	/// Window of shuffling loops for the plateau criterion
	pub kstop: usize,
	/// Percentage change threshold of the plateau criterion
	pub pcento: f64,
	/// Normalized geometric range threshold
	pub peps: f64,
	/// Number of complexes (None = dimension + 5)
	pub ngs: Option<usize>,
	pub seed: Option<u64>,
	/// Put the start point in the initial population
	pub include_x0: bool,
	pub plateau_stop: bool,
}

impl Default for SceParams {
	fn default() -> Self {
		Self {
			maxn: 100_000,
			kstop: 10,
			pcento: 0.001,
			peps: 0.00001,
			ngs: None,
			seed: None,
			include_x0: false,
			plateau_stop: true,
		}
	}
}

#[derive(Debug, Error)]
pub enum ParamsError {
	#[error("cannot read parameter file {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("invalid SCE-UA parameters: {0}")]
	Json(#[from] serde_json::Error),
}

impl SceParams {
	pub fn from_json_str(s: &str) -> Result<Self, ParamsError> {
		Ok(serde_json::from_str(s)?)
	}

	pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
		let path = path.as_ref();
		let content = fs::read_to_string(path)
			.map_err(|source| ParamsError::Io { path: path.to_path_buf(), source })?;
		Self::from_json_str(&content)
	}

	/// Build a configuration; `x0` is kept only when `include_x0` is set.
	pub fn to_config(&self, x0: Option<Array1<f64>>) -> SceConfig {
		SceConfig {
			maxn: self.maxn,
			kstop: self.kstop,
			pcento: self.pcento,
			peps: self.peps,
			ngs: self.ngs,
			seed: self.seed,
			x0: if self.include_x0 { x0 } else { None },
			plateau_stop: self.plateau_stop,
			disp: false,
			callback: None,
		}
	}
}
