//! Population storage: points, objective values and the statistics the
//! convergence monitor needs.

use ndarray::{Array1, Array2, ArrayView1, Axis};
use rand::Rng;

use crate::init_random::init_random;
use crate::objective::CountedObjective;

/// A set of points with their objective values, one row per member.
///
/// Used both for the whole population and for a single complex.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
	/// Member coordinates (members x parameters)
	pub x: Array2<f64>,
	/// Objective value of each member
	pub f: Array1<f64>,
}

/// Indices that sort `f` ascending. Stable, any NaN sorts last.
pub(crate) fn argsort(f: &Array1<f64>) -> Vec<usize> {
	let key = |v: f64| if v.is_nan() { f64::INFINITY } else { v };
	let mut idx: Vec<usize> = (0..f.len()).collect();
	idx.sort_by(|&a, &b| {
		key(f[a]).total_cmp(&key(f[b])).then_with(|| f[a].is_nan().cmp(&f[b].is_nan()))
	});
	idx
}

impl Population {
	pub fn new(x: Array2<f64>, f: Array1<f64>) -> Self {
		debug_assert_eq!(x.nrows(), f.len());
		Self { x, f }
	}

	/// Draw, evaluate and sort the initial population.
	///
	/// When `x0` is given it replaces the first drawn point as is, without
	/// clipping it to the bounds.
	pub(crate) fn initialize<F, R>(
		npt: usize,
		lower: &Array1<f64>,
		upper: &Array1<f64>,
		x0: Option<&Array1<f64>>,
		objective: &mut CountedObjective<'_, F>,
		rng: &mut R,
	) -> Self
	where
		F: Fn(&Array1<f64>) -> f64,
		R: Rng + ?Sized,
	{
		let mut x = init_random(npt, lower, upper, rng);
		if let Some(x0) = x0 {
			x.row_mut(0).assign(x0);
		}
		let f: Array1<f64> = x.rows().into_iter().map(|row| objective.eval(&row.to_owned())).collect();
		let mut pop = Self::new(x, f);
		pop.sort();
		pop
	}

	/// Number of members
	pub fn len(&self) -> usize {
		self.f.len()
	}

	pub fn is_empty(&self) -> bool {
		self.f.is_empty()
	}

	/// Reorder members by ascending objective value.
	pub fn sort(&mut self) {
		let idx = argsort(&self.f);
		self.x = self.x.select(Axis(0), &idx);
		self.f = self.f.select(Axis(0), &idx);
	}

	pub fn is_sorted(&self) -> bool {
		self.f.windows(2).into_iter().all(|w| w[0] <= w[1])
	}

	/// First member; the best one once sorted.
	pub fn best(&self) -> (ArrayView1<'_, f64>, f64) {
		(self.x.row(0), self.f[0])
	}

	/// Last member; the worst one once sorted.
	pub fn worst(&self) -> (ArrayView1<'_, f64>, f64) {
		let last = self.len() - 1;
		(self.x.row(last), self.f[last])
	}

	/// Normalized geometric mean of the parameter ranges.
	///
	/// `exp(mean(ln((max_j - min_j) / (upper_j - lower_j))))`. A parameter
	/// with zero spread drives the result to zero.
	pub fn gnrng(&self, lower: &Array1<f64>, upper: &Array1<f64>) -> f64 {
		let n = self.x.ncols();
		let sum_log: f64 = self
			.x
			.axis_iter(Axis(1))
			.enumerate()
			.map(|(j, col)| {
				let max = col.fold(f64::NEG_INFINITY, |a, &b| a.max(b));
				let min = col.fold(f64::INFINITY, |a, &b| a.min(b));
				((max - min) / (upper[j] - lower[j])).ln()
			})
			.sum();
		(sum_log / n as f64).exp()
	}

	/// Standard deviation of every parameter across the members.
	pub fn xnstd(&self) -> Array1<f64> {
		self.x.std_axis(Axis(0), 0.0)
	}
}
