use ndarray::Array1;

/// Objective function paired with the number of times it has been called.
///
/// Every evaluation in a run goes through `eval`, so `nfev` is both the
/// budget counter and the cost reported to the caller.
pub(crate) struct CountedObjective<'a, F>
where
	F: Fn(&Array1<f64>) -> f64,
{
	func: &'a F,
	nfev: usize,
}

impl<'a, F> CountedObjective<'a, F>
where
	F: Fn(&Array1<f64>) -> f64,
{
	pub(crate) fn new(func: &'a F) -> Self {
		Self { func, nfev: 0 }
	}

	pub(crate) fn eval(&mut self, x: &Array1<f64>) -> f64 {
		self.nfev += 1;
		(self.func)(x)
	}

	pub(crate) fn nfev(&self) -> usize {
		self.nfev
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_counts_every_call() {
		let f = |x: &Array1<f64>| x.sum();
		let mut objective = CountedObjective::new(&f);
		assert_eq!(objective.nfev(), 0);
		assert_eq!(objective.eval(&Array1::from(vec![1.0, 2.0])), 3.0);
		objective.eval(&Array1::zeros(2));
		assert_eq!(objective.nfev(), 2);
	}
}
