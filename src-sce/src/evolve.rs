use ndarray::Array1;
use rand::Rng;

use crate::cce::{CceStep, cce};
use crate::complex::ComplexLayout;
use crate::error::Result;
use crate::objective::CountedObjective;
use crate::population::Population;
use crate::simplex::{Simplex, sample_simplex_ranks};

/// Tally of the CCE stages taken while evolving complexes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CceStats {
	pub reflections: usize,
	pub out_of_bounds: usize,
	pub contractions: usize,
	pub random: usize,
}

impl CceStats {
	fn record(&mut self, step: CceStep) {
		match step {
			CceStep::Reflection => self.reflections += 1,
			CceStep::OutOfBounds => self.out_of_bounds += 1,
			CceStep::Contraction => self.contractions += 1,
			CceStep::Random => self.random += 1,
		}
	}

	/// Number of CCE steps recorded
	pub fn steps(&self) -> usize {
		self.reflections + self.out_of_bounds + self.contractions + self.random
	}
}

/// Evolve one sorted complex for `nspl` simplex steps, keeping it sorted.
pub(crate) fn evolve_complex<F, R>(
	complex: &mut Population,
	layout: &ComplexLayout,
	lower: &Array1<f64>,
	upper: &Array1<f64>,
	objective: &mut CountedObjective<'_, F>,
	rng: &mut R,
	stats: &mut CceStats,
) -> Result<()>
where
	F: Fn(&Array1<f64>) -> f64,
	R: Rng + ?Sized,
{
	for _ in 0..layout.nspl {
		let ranks = sample_simplex_ranks(layout.npg, layout.nps, rng)?;
		let simplex = Simplex::select(complex, ranks);
		let outcome = cce(&simplex, lower, upper, objective, rng);
		stats.record(outcome.step);
		simplex.replace_worst(complex, &outcome.x, outcome.f);
		complex.sort();
	}
	Ok(())
}
