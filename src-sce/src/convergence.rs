//! Stopping criteria checked after initialization and every shuffling loop.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason for ending the search. Several can hold at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
	/// The evaluation count reached `maxn`
	MaxEvaluations,
	/// The population shrank below `peps` of the box (normalized geometric range)
	ParameterSpace,
	/// The best value changed by less than `pcento` percent over `kstop` loops
	ObjectivePlateau,
	/// The progress callback asked to stop
	Callback,
}

impl fmt::Display for Termination {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Termination::MaxEvaluations => write!(f, "maximum number of evaluations reached"),
			Termination::ParameterSpace => {
				write!(f, "population converged to a small parameter space")
			}
			Termination::ObjectivePlateau => {
				write!(f, "best value stopped improving by more than the threshold")
			}
			Termination::Callback => write!(f, "stopped by callback"),
		}
	}
}

/// Percentage change of the best value over a window of loop bests.
///
/// `100 * |last - first| / mean(|window|)`. A zero mean gives 0 when the
/// window is flat and infinity otherwise.
pub fn plateau_change(window: &[f64]) -> f64 {
	let (Some(first), Some(last)) = (window.first(), window.last()) else {
		return f64::INFINITY;
	};
	let change = (last - first).abs() * 100.0;
	let mean_abs = window.iter().map(|v| v.abs()).sum::<f64>() / window.len() as f64;
	if mean_abs > 0.0 {
		change / mean_abs
	} else if change == 0.0 {
		0.0
	} else {
		f64::INFINITY
	}
}

/// Tracks the loop bests and evaluates the three stopping criteria.
#[derive(Debug, Clone)]
pub(crate) struct ConvergenceMonitor {
	maxn: usize,
	kstop: usize,
	pcento: f64,
	peps: f64,
	plateau_stop: bool,
	criter: Vec<f64>,
	criter_change: f64,
}

impl ConvergenceMonitor {
	/// Value reported for the plateau change before `kstop` loops have run
	pub(crate) const INITIAL_CHANGE: f64 = 1e5;

	pub(crate) fn new(maxn: usize, kstop: usize, pcento: f64, peps: f64, plateau_stop: bool) -> Self {
		Self {
			maxn,
			kstop,
			pcento,
			peps,
			plateau_stop,
			criter: Vec::new(),
			criter_change: Self::INITIAL_CHANGE,
		}
	}

	/// Record the best value of a completed shuffling loop and return the
	/// current plateau change.
	pub(crate) fn record_loop(&mut self, bestf: f64) -> f64 {
		self.criter.push(bestf);
		if self.criter.len() >= self.kstop {
			let window = &self.criter[self.criter.len() - self.kstop..];
			self.criter_change = plateau_change(window);
		}
		self.criter_change
	}

	pub(crate) fn criter_change(&self) -> f64 {
		self.criter_change
	}

	fn plateau_reached(&self) -> bool {
		self.criter.len() >= self.kstop && self.criter_change < self.pcento
	}

	/// Criteria that currently hold.
	pub(crate) fn check(&self, nfev: usize, gnrng: f64) -> Vec<Termination> {
		let mut reasons = Vec::new();
		if nfev >= self.maxn {
			reasons.push(Termination::MaxEvaluations);
		}
		if gnrng < self.peps {
			reasons.push(Termination::ParameterSpace);
		}
		if self.plateau_reached() {
			if self.plateau_stop {
				reasons.push(Termination::ObjectivePlateau);
			} else {
				log::debug!(
					"best value improved by {:.3e}% over the last {} loops (below {}%), continuing",
					self.criter_change,
					self.kstop,
					self.pcento
				);
			}
		}
		reasons
	}
}
