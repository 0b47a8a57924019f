//! Error types for the SCE-UA optimizer.
//!
//! Problems with the inputs are reported before the first objective
//! evaluation. The only error that can surface mid-run is the exhaustion of
//! the simplex rank sampler.

use thiserror::Error;

/// Errors that can occur during an SCE-UA optimization.
#[derive(Debug, Error)]
pub enum SceError {
	/// Lower and upper bounds have different lengths.
	#[error("bounds mismatch: lower has {lower_len} elements, upper has {upper_len}")]
	BoundsMismatch {
		/// Length of the lower bounds array
		lower_len: usize,
		/// Length of the upper bounds array
		upper_len: usize,
	},

	/// Initial point has a different dimension than the bounds.
	#[error("x0 dimension mismatch: expected {expected}, got {got}")]
	X0DimensionMismatch {
		/// Expected dimension
		expected: usize,
		/// Actual dimension provided
		got: usize,
	},

	/// No parameters to optimize.
	#[error("empty problem: at least one parameter is required")]
	EmptyProblem,

	/// A lower bound is not strictly below its upper bound, or is not finite.
	#[error("invalid bounds at index {index}: lower ({lower}) must be finite and < upper ({upper})")]
	InvalidBounds {
		/// Index of the invalid bound pair
		index: usize,
		/// The lower bound value
		lower: f64,
		/// The upper bound value
		upper: f64,
	},

	/// Number of complexes must be at least one.
	#[error("invalid number of complexes: {ngs} (must be >= 1)")]
	InvalidComplexCount {
		/// The invalid complex count
		ngs: usize,
	},

	/// Population cannot hold a single simplex.
	#[error("population size ({npt}) is smaller than the simplex size ({nps})")]
	PopulationTooSmall {
		/// Population size
		npt: usize,
		/// Simplex size
		nps: usize,
	},

	/// The plateau window must cover at least one shuffling loop.
	#[error("invalid plateau window: kstop = {kstop} (must be >= 1)")]
	InvalidPlateauWindow {
		/// The invalid window
		kstop: usize,
	},

	/// A convergence threshold is negative or NaN.
	#[error("invalid threshold {name} = {value} (must be >= 0)")]
	InvalidThreshold {
		/// Name of the threshold
		name: &'static str,
		/// The invalid value
		value: f64,
	},

	/// The simplex sampler could not draw a distinct rank.
	#[error("simplex sampling exhausted: no distinct rank for position {position} after {attempts} draws")]
	SimplexSamplingExhausted {
		/// Simplex position being filled
		position: usize,
		/// Number of draws attempted
		attempts: usize,
	},
}

/// A specialized `Result` type for SCE-UA operations.
pub type Result<T> = std::result::Result<T, SceError>;

impl SceError {
	/// Returns `true` if this is a bounds-related error.
	pub fn is_bounds_error(&self) -> bool {
		matches!(self, SceError::BoundsMismatch { .. } | SceError::InvalidBounds { .. })
	}

	/// Returns `true` if this is a configuration-related error.
	///
	/// This includes complex count, population size, plateau window and
	/// threshold problems.
	pub fn is_config_error(&self) -> bool {
		matches!(
			self,
			SceError::InvalidComplexCount { .. }
				| SceError::PopulationTooSmall { .. }
				| SceError::InvalidPlateauWindow { .. }
				| SceError::InvalidThreshold { .. }
		)
	}

	/// Returns `true` if this is a dimension mismatch error.
	pub fn is_dimension_error(&self) -> bool {
		matches!(self, SceError::X0DimensionMismatch { .. } | SceError::EmptyProblem)
	}
}
