use ndarray::Array1;

use crate::error::{Result, SceError};
use crate::{SceConfig, SceConfigBuilder, SceReport, ShuffledComplexEvolution};

/// Convenience function taking bounds as `(lower, upper)` pairs
pub fn shuffled_complex_evolution<F>(func: &F, bounds: &[(f64, f64)], config: SceConfig) -> Result<SceReport>
where
	F: Fn(&Array1<f64>) -> f64,
{
	let lower = Array1::from_iter(bounds.iter().map(|(l, _)| *l));
	let upper = Array1::from_iter(bounds.iter().map(|(_, u)| *u));
	let mut sce = ShuffledComplexEvolution::new(func, lower, upper);
	*sce.config_mut() = config;
	sce.solve()
}

/// Minimize `objective` over the box `[lower, upper]` starting from `x0`.
///
/// `x0` fixes the dimension and is put in the initial population as is when
/// `include_x0` is true. `ngs` defaults to the dimension plus 5. A missing
/// `seed` draws one from the thread generator.
#[allow(clippy::too_many_arguments)]
pub fn sceua<F>(
	x0: &Array1<f64>,
	lower: &Array1<f64>,
	upper: &Array1<f64>,
	maxn: usize,
	kstop: usize,
	pcento: f64,
	peps: f64,
	ngs: Option<usize>,
	seed: Option<u64>,
	include_x0: bool,
	objective: F,
) -> Result<SceReport>
where
	F: Fn(&Array1<f64>) -> f64,
{
	if x0.len() != lower.len() {
		return Err(SceError::X0DimensionMismatch { expected: lower.len(), got: x0.len() });
	}
	let mut builder = SceConfigBuilder::new().maxn(maxn).kstop(kstop).pcento(pcento).peps(peps);
	if let Some(ngs) = ngs {
		builder = builder.ngs(ngs);
	}
	if let Some(seed) = seed {
		builder = builder.seed(seed);
	}
	if include_x0 {
		builder = builder.x0(x0.clone());
	}

	let mut sce = ShuffledComplexEvolution::new(&objective, lower.clone(), upper.clone());
	*sce.config_mut() = builder.build();
	sce.solve()
}
