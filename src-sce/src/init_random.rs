use ndarray::{Array1, Array2};
use rand::Rng;

/// Draw `npt` points uniformly inside the box, one row per point.
///
/// Coordinates are drawn row by row, so the stream consumption is
/// `npt * n` uniforms in a fixed order.
pub(crate) fn init_random<R: Rng + ?Sized>(
	npt: usize,
	lower: &Array1<f64>,
	upper: &Array1<f64>,
	rng: &mut R,
) -> Array2<f64> {
	let n = lower.len();
	let mut pop = Array2::<f64>::zeros((npt, n));
	for i in 0..npt {
		for j in 0..n {
			let u: f64 = rng.random::<f64>();
			pop[(i, j)] = lower[j] + u * (upper[j] - lower[j]);
		}
	}
	pop
}

/// Draw one point uniformly inside the box.
pub(crate) fn uniform_point<R: Rng + ?Sized>(
	lower: &Array1<f64>,
	upper: &Array1<f64>,
	rng: &mut R,
) -> Array1<f64> {
	Array1::from_shape_fn(lower.len(), |j| lower[j] + rng.random::<f64>() * (upper[j] - lower[j]))
}
