//! Shuffled Complex Evolution (SCE-UA) global optimizer in pure Rust using ndarray
//!
//! SCE-UA (Duan, Sorooshian and Gupta) is a derivative-free method for
//! box-bounded minimization of functions that may be non-convex,
//! non-differentiable and multimodal, typically model calibration problems.
//!
//! Supported features:
//! - Box constraints (lower/upper bounds)
//! - Population split into `ngs` interleaved complexes of `2n+1` members
//! - Competitive Complex Evolution: rank-biased simplex sampling, reflection,
//!   contraction and random restarts
//! - Optional initial guess `x0` included in the initial population
//! - Three stopping criteria: evaluation budget, normalized geometric range of
//!   the population, relative improvement of the best value over `kstop` loops
//! - Per-loop history, progress callback and CSV recording
//! - Seeded `StdRng` or any caller-provided `rand::Rng`

use std::fmt;

use log::{Level, info, warn};
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub mod cce;
pub mod complex;
pub mod convergence;
pub mod error;
pub mod evolve;
pub mod init_random;
pub mod metadata;
pub mod objective;
pub mod params;
pub mod population;
pub mod recorder;
pub mod run_recorded;
pub mod shuffled_complex_evolution;
pub mod simplex;

pub use complex::ComplexLayout;
pub use convergence::Termination;
pub use error::{Result, SceError};
pub use evolve::CceStats;
pub use params::{ParamsError, SceParams};
pub use population::Population;
pub use recorder::{OptimizationRecord, OptimizationRecorder};
pub use run_recorded::run_recorded_sce;
pub use shuffled_complex_evolution::{sceua, shuffled_complex_evolution};

use convergence::ConvergenceMonitor;
use evolve::evolve_complex;
use objective::CountedObjective;

/// Configuration for the SCE-UA optimizer
pub struct SceConfig {
	/// Maximum number of objective evaluations
	pub maxn: usize,
	/// Number of shuffling loops the best value must stagnate over
	pub kstop: usize,
	/// Percentage change of the best value below which the search has converged
	pub pcento: f64,
	/// Normalized geometric range below which the population has converged
	pub peps: f64,
	/// Number of complexes (None = dimension + 5)
	pub ngs: Option<usize>,
	pub seed: Option<u64>,
	/// Optional initial guess, put in the initial population as is
	pub x0: Option<Array1<f64>>,
	/// Stop when the plateau criterion holds; otherwise it is only logged
	pub plateau_stop: bool,
	/// Report every shuffling loop at info level instead of debug
	pub disp: bool,
	/// Optional per-loop callback (may stop early)
	pub callback: Option<Box<dyn FnMut(&SceIntermediate) -> CallbackAction>>,
}

impl Default for SceConfig {
	fn default() -> Self {
		SceParams::default().to_config(None)
	}
}

/// Fluent builder for `SceConfig` for ergonomic configuration.
pub struct SceConfigBuilder {
	cfg: SceConfig,
}

impl Default for SceConfigBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl SceConfigBuilder {
	pub fn new() -> Self {
		Self { cfg: SceConfig::default() }
	}
	pub fn maxn(mut self, v: usize) -> Self {
		self.cfg.maxn = v;
		self
	}
	pub fn kstop(mut self, v: usize) -> Self {
		self.cfg.kstop = v;
		self
	}
	pub fn pcento(mut self, v: f64) -> Self {
		self.cfg.pcento = v;
		self
	}
	pub fn peps(mut self, v: f64) -> Self {
		self.cfg.peps = v;
		self
	}
	pub fn ngs(mut self, v: usize) -> Self {
		self.cfg.ngs = Some(v);
		self
	}
	pub fn seed(mut self, v: u64) -> Self {
		self.cfg.seed = Some(v);
		self
	}
	pub fn x0(mut self, v: Array1<f64>) -> Self {
		self.cfg.x0 = Some(v);
		self
	}
	pub fn plateau_stop(mut self, v: bool) -> Self {
		self.cfg.plateau_stop = v;
		self
	}
	pub fn disp(mut self, v: bool) -> Self {
		self.cfg.disp = v;
		self
	}
	pub fn callback(mut self, cb: Box<dyn FnMut(&SceIntermediate) -> CallbackAction>) -> Self {
		self.cfg.callback = Some(cb);
		self
	}
	pub fn build(self) -> SceConfig {
		self.cfg
	}
}

/// Best point after a shuffling loop (loop 0 is the initial population)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopRecord {
	pub nloop: usize,
	pub x: Vec<f64>,
	pub fun: f64,
	/// Evaluations spent so far
	pub nfev: usize,
}

/// Information passed to the callback after initialization and each loop
#[derive(Debug, Clone)]
pub struct SceIntermediate {
	pub nloop: usize,
	pub nfev: usize,
	pub x: Array1<f64>,
	pub fun: f64,
	pub worst_x: Array1<f64>,
	pub worst_fun: f64,
	/// Normalized geometric range of the population
	pub gnrng: f64,
	/// Percentage change of the best value over the last `kstop` loops
	pub criter_change: f64,
	/// Standard deviation of every parameter over the population
	pub xnstd: Array1<f64>,
}

/// Action returned by callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
	Continue,
	Stop,
}

/// Result/Report of an SCE-UA optimization run
#[derive(Clone)]
pub struct SceReport {
	pub x: Array1<f64>,
	pub fun: f64,
	/// True unless the run only ended because the budget ran out
	pub success: bool,
	pub message: String,
	pub termination: Vec<Termination>,
	/// Completed shuffling loops
	pub nloop: usize,
	pub nfev: usize,
	pub gnrng: f64,
	pub criter_change: f64,
	pub history: Vec<LoopRecord>,
	pub cce_stats: CceStats,
	pub population: Array2<f64>,
	pub population_values: Array1<f64>,
}

impl SceReport {
	pub fn terminated_by(&self, reason: Termination) -> bool {
		self.termination.contains(&reason)
	}
}

impl fmt::Debug for SceReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SceReport")
			.field("x", &self.x.to_vec())
			.field("fun", &self.fun)
			.field("success", &self.success)
			.field("message", &self.message)
			.field("termination", &self.termination)
			.field("nloop", &self.nloop)
			.field("nfev", &self.nfev)
			.field("gnrng", &self.gnrng)
			.field("criter_change", &self.criter_change)
			.field("history", &format!("len={}", self.history.len()))
			.field(
				"population",
				&format!("{}x{}", self.population.nrows(), self.population.ncols()),
			)
			.finish()
	}
}

/// SCE-UA optimizer
pub struct ShuffledComplexEvolution<'a, F>
where
	F: Fn(&Array1<f64>) -> f64,
{
	func: &'a F,
	lower: Array1<f64>,
	upper: Array1<f64>,
	config: SceConfig,
}

impl<'a, F> ShuffledComplexEvolution<'a, F>
where
	F: Fn(&Array1<f64>) -> f64,
{
	/// Create a new optimizer with objective `func` and bounds [lower, upper]
	pub fn new(func: &'a F, lower: Array1<f64>, upper: Array1<f64>) -> Self {
		Self { func, lower, upper, config: SceConfig::default() }
	}

	/// Mutable access to configuration
	pub fn config_mut(&mut self) -> &mut SceConfig {
		&mut self.config
	}

	/// Check bounds and configuration, and derive the population layout.
	pub fn validate(&self) -> Result<ComplexLayout> {
		let n = self.lower.len();
		if self.upper.len() != n {
			return Err(SceError::BoundsMismatch { lower_len: n, upper_len: self.upper.len() });
		}
		if n == 0 {
			return Err(SceError::EmptyProblem);
		}
		for (index, (&lower, &upper)) in self.lower.iter().zip(self.upper.iter()).enumerate() {
			if !(lower.is_finite() && upper.is_finite() && lower < upper) {
				return Err(SceError::InvalidBounds { index, lower, upper });
			}
		}
		if let Some(x0) = &self.config.x0 {
			if x0.len() != n {
				return Err(SceError::X0DimensionMismatch { expected: n, got: x0.len() });
			}
		}
		if self.config.kstop < 1 {
			return Err(SceError::InvalidPlateauWindow { kstop: self.config.kstop });
		}
		for (name, value) in [("pcento", self.config.pcento), ("peps", self.config.peps)] {
			if value.is_nan() || value < 0.0 {
				return Err(SceError::InvalidThreshold { name, value });
			}
		}
		ComplexLayout::new(n, self.config.ngs.unwrap_or(n + 5))
	}

	/// Run the optimization with the configured seed and return a report
	pub fn solve(&mut self) -> Result<SceReport> {
		let mut rng: StdRng = match self.config.seed {
			Some(s) => StdRng::seed_from_u64(s),
			None => {
				let mut thread_rng = rand::rng();
				StdRng::from_rng(&mut thread_rng)
			}
		};
		self.solve_with_rng(&mut rng)
	}

	/// Run the optimization drawing every random number from `rng`
	pub fn solve_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<SceReport> {
		let layout = self.validate()?;
		let lower = self.lower.clone();
		let upper = self.upper.clone();

		info!(
			"SCE-UA init: {} parameters, {} complexes of {} members, population={}, maxn={}",
			layout.nopt, layout.ngs, layout.npg, layout.npt, self.config.maxn
		);
		if let Some(x0) = &self.config.x0 {
			let inside = x0.iter().enumerate().all(|(j, &v)| v >= lower[j] && v <= upper[j]);
			if !inside {
				warn!("x0 lies outside the bounds and is evaluated as given");
			}
		}

		let mut objective = CountedObjective::new(self.func);
		let mut pop = Population::initialize(
			layout.npt,
			&lower,
			&upper,
			self.config.x0.as_ref(),
			&mut objective,
			rng,
		);

		let mut monitor = ConvergenceMonitor::new(
			self.config.maxn,
			self.config.kstop,
			self.config.pcento,
			self.config.peps,
			self.config.plateau_stop,
		);
		let mut history = Vec::new();
		let mut stats = CceStats::default();
		let mut nloop = 0;
		let mut gnrng = pop.gnrng(&lower, &upper);

		let mut termination = monitor.check(objective.nfev(), gnrng);
		termination.extend(self.report_loop(
			nloop,
			&pop,
			objective.nfev(),
			gnrng,
			monitor.criter_change(),
			&mut history,
		));

		while termination.is_empty() {
			nloop += 1;

			for igs in 0..layout.ngs {
				let mut complex = layout.extract(&pop, igs);
				evolve_complex(&mut complex, &layout, &lower, &upper, &mut objective, rng, &mut stats)?;
				layout.recombine(&mut pop, igs, &complex);
			}

			// Shuffle the complexes
			pop.sort();
			gnrng = pop.gnrng(&lower, &upper);
			let criter_change = monitor.record_loop(pop.best().1);

			termination = monitor.check(objective.nfev(), gnrng);
			termination.extend(self.report_loop(
				nloop,
				&pop,
				objective.nfev(),
				gnrng,
				criter_change,
				&mut history,
			));
		}

		let success = termination.iter().any(|t| *t != Termination::MaxEvaluations);
		let message = termination.iter().map(|t| t.to_string()).collect::<Vec<_>>().join("; ");
		let (best_x, best_f) = pop.best();

		info!(
			"SCE-UA finished after {} loops and {} evaluations: {} (best_f={:.6e}, gnrng={:.3e}, change over {} loops={:.3e}%)",
			nloop,
			objective.nfev(),
			message,
			best_f,
			gnrng,
			self.config.kstop,
			monitor.criter_change()
		);

		Ok(SceReport {
			x: best_x.to_owned(),
			fun: best_f,
			success,
			message,
			termination,
			nloop,
			nfev: objective.nfev(),
			gnrng,
			criter_change: monitor.criter_change(),
			history,
			cce_stats: stats,
			population: pop.x,
			population_values: pop.f,
		})
	}

	/// Record the loop in the history, log it and run the callback.
	fn report_loop(
		&mut self,
		nloop: usize,
		pop: &Population,
		nfev: usize,
		gnrng: f64,
		criter_change: f64,
		history: &mut Vec<LoopRecord>,
	) -> Option<Termination> {
		let (best_x, best_f) = pop.best();
		let (worst_x, worst_f) = pop.worst();
		history.push(LoopRecord { nloop, x: best_x.to_vec(), fun: best_f, nfev });

		let level = if self.config.disp { Level::Info } else { Level::Debug };
		log::log!(
			level,
			"SCE-UA loop {:4}  nfev={:7}  best_f={:.6e}  worst_f={:.6e}  gnrng={:.3e}  best_x={:?}",
			nloop,
			nfev,
			best_f,
			worst_f,
			gnrng,
			best_x.to_vec()
		);

		let cb = self.config.callback.as_mut()?;
		let intermediate = SceIntermediate {
			nloop,
			nfev,
			x: best_x.to_owned(),
			fun: best_f,
			worst_x: worst_x.to_owned(),
			worst_fun: worst_f,
			gnrng,
			criter_change,
			xnstd: pop.xnstd(),
		};
		match cb(&intermediate) {
			CallbackAction::Stop => Some(Termination::Callback),
			CallbackAction::Continue => None,
		}
	}
}

#[cfg(test)]
mod tests;
