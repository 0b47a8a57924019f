//! Partition of the population into interleaved complexes.
//!
//! Complex `igs` owns population rows `igs, igs + ngs, igs + 2*ngs, ...`.
//! Since the population is sorted, every complex receives members from the
//! whole quality range.

use ndarray::Axis;

use crate::error::{Result, SceError};
use crate::population::Population;

/// Sizes derived from the problem dimension and the number of complexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexLayout {
	/// Number of parameters
	pub nopt: usize,
	/// Number of complexes
	pub ngs: usize,
	/// Members per complex (`2 * nopt + 1`)
	pub npg: usize,
	/// Members per simplex (`nopt + 1`)
	pub nps: usize,
	/// Evolution steps per complex and shuffling loop (`npg`)
	pub nspl: usize,
	/// Population size (`ngs * npg`)
	pub npt: usize,
}

impl ComplexLayout {
	pub fn new(nopt: usize, ngs: usize) -> Result<Self> {
		if nopt == 0 {
			return Err(SceError::EmptyProblem);
		}
		if ngs < 1 {
			return Err(SceError::InvalidComplexCount { ngs });
		}
		let npg = 2 * nopt + 1;
		let nps = nopt + 1;
		let npt = npg.checked_mul(ngs).ok_or(SceError::InvalidComplexCount { ngs })?;
		if npt < nps {
			return Err(SceError::PopulationTooSmall { npt, nps });
		}
		Ok(Self { nopt, ngs, npg, nps, nspl: npg, npt })
	}

	/// Population rows owned by complex `igs`, in order.
	pub fn positions(&self, igs: usize) -> Vec<usize> {
		(0..self.npg).map(|k| k * self.ngs + igs).collect()
	}

	/// Copy complex `igs` out of the population.
	pub fn extract(&self, pop: &Population, igs: usize) -> Population {
		let rows = self.positions(igs);
		Population::new(pop.x.select(Axis(0), &rows), pop.f.select(Axis(0), &rows))
	}

	/// Write an evolved complex back to the rows it was taken from.
	pub fn recombine(&self, pop: &mut Population, igs: usize, complex: &Population) {
		for (k, row) in self.positions(igs).into_iter().enumerate() {
			pop.x.row_mut(row).assign(&complex.x.row(k));
			pop.f[row] = complex.f[k];
		}
	}
}
