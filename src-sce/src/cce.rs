//! Competitive Complex Evolution step: one new point for a simplex.
//!
//! The worst simplex member is reflected through the centroid of the others.
//! A reflection that leaves the box is replaced by a uniform random point
//! before it is evaluated. If the candidate does not beat the worst value, a
//! contraction halfway to the centroid is tried, then a random point.

use ndarray::{Array1, Axis};
use rand::Rng;

use crate::init_random::uniform_point;
use crate::objective::CountedObjective;
use crate::simplex::Simplex;

/// Reflection coefficient
pub const ALPHA: f64 = 1.0;
/// Contraction coefficient
pub const BETA: f64 = 0.5;

/// Which stage produced the accepted point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CceStep {
	/// The reflection improved on the worst point
	Reflection,
	/// The reflection left the box; the random replacement was accepted
	OutOfBounds,
	/// The contraction improved on the worst point
	Contraction,
	/// Both attempts failed; a random point was taken
	Random,
}

/// New point produced by one CCE step.
#[derive(Debug, Clone)]
pub struct CceOutcome {
	pub x: Array1<f64>,
	pub f: f64,
	pub step: CceStep,
	/// Objective evaluations spent by this step (1 to 3)
	pub nfev: usize,
}

fn outside(x: &Array1<f64>, lower: &Array1<f64>, upper: &Array1<f64>) -> bool {
	x.iter().zip(lower.iter().zip(upper.iter())).any(|(&v, (&lo, &hi))| v < lo || v > hi)
}

/// Generate the replacement for the worst member of `simplex`.
///
/// "Improves" means strictly lower than the worst value of the simplex.
pub(crate) fn cce<F, R>(
	simplex: &Simplex,
	lower: &Array1<f64>,
	upper: &Array1<f64>,
	objective: &mut CountedObjective<'_, F>,
	rng: &mut R,
) -> CceOutcome
where
	F: Fn(&Array1<f64>) -> f64,
	R: Rng + ?Sized,
{
	let nps = simplex.s.nrows();
	let sw = simplex.s.row(nps - 1).to_owned();
	let fw = simplex.sf[nps - 1];
	let ce = simplex
		.s
		.slice(ndarray::s![..nps - 1, ..])
		.mean_axis(Axis(0))
		.unwrap_or_else(|| sw.clone());

	let nfev0 = objective.nfev();

	let mut snew = &ce + &((&ce - &sw) * ALPHA);
	let mut step = CceStep::Reflection;
	if outside(&snew, lower, upper) {
		snew = uniform_point(lower, upper, rng);
		step = CceStep::OutOfBounds;
	}
	let mut fnew = objective.eval(&snew);

	if fnew >= fw {
		snew = &sw + &((&ce - &sw) * BETA);
		fnew = objective.eval(&snew);
		step = CceStep::Contraction;

		if fnew >= fw {
			snew = uniform_point(lower, upper, rng);
			fnew = objective.eval(&snew);
			step = CceStep::Random;
		}
	}

	log::trace!("cce: {:?} f={:.6e} (worst {:.6e})", step, fnew, fw);

	CceOutcome { x: snew, f: fnew, step, nfev: objective.nfev() - nfev0 }
}
