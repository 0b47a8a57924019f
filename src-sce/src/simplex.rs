//! Rank-biased simplex selection inside a complex.
//!
//! Ranks are drawn from a triangular distribution that puts more weight on
//! the better members: rank `k` (0-based) has probability
//! `2 * (npg - k) / (npg * (npg + 1))`.

use ndarray::{Array1, Array2, Axis};
use rand::Rng;

use crate::error::{Result, SceError};
use crate::population::Population;

/// Maximum number of draws when looking for a rank not yet in the simplex.
pub const MAX_RANK_DRAWS: usize = 1000;

/// Inverse transform of the triangular rank distribution for `u` in `[0, 1)`.
pub fn triangular_rank(npg: usize, u: f64) -> usize {
	let n = npg as f64;
	let r = (n + 0.5 - ((n + 0.5).powi(2) - n * (n + 1.0) * u).sqrt()).floor();
	(r.max(0.0) as usize).min(npg - 1)
}

/// Sample `nps` distinct ranks in `0..npg`, sorted ascending.
///
/// Rank 0, the best member of the complex, is always part of the simplex.
pub fn sample_simplex_ranks<R: Rng + ?Sized>(npg: usize, nps: usize, rng: &mut R) -> Result<Vec<usize>> {
	debug_assert!(nps <= npg);
	let mut lcs = Vec::with_capacity(nps);
	lcs.push(0usize);
	for position in 1..nps {
		let mut picked = None;
		for _ in 0..MAX_RANK_DRAWS {
			let rank = triangular_rank(npg, rng.random::<f64>());
			if !lcs.contains(&rank) {
				picked = Some(rank);
				break;
			}
		}
		match picked {
			Some(rank) => lcs.push(rank),
			None => {
				return Err(SceError::SimplexSamplingExhausted { position, attempts: MAX_RANK_DRAWS });
			}
		}
	}
	lcs.sort_unstable();
	Ok(lcs)
}

/// Simplex members copied out of a sorted complex.
#[derive(Debug, Clone)]
pub struct Simplex {
	/// Rank of each member inside the complex, ascending
	pub ranks: Vec<usize>,
	/// Member coordinates; the last row is the worst member
	pub s: Array2<f64>,
	/// Member values, ascending
	pub sf: Array1<f64>,
}

impl Simplex {
	pub fn select(complex: &Population, ranks: Vec<usize>) -> Self {
		let s = complex.x.select(Axis(0), &ranks);
		let sf = complex.f.select(Axis(0), &ranks);
		Self { ranks, s, sf }
	}

	/// Replace the worst member in the complex by a new point.
	pub fn replace_worst(&self, complex: &mut Population, snew: &Array1<f64>, fnew: f64) {
		let worst = self.ranks[self.ranks.len() - 1];
		complex.x.row_mut(worst).assign(snew);
		complex.f[worst] = fnew;
	}
}
