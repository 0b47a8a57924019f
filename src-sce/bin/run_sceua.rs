use clap::Parser;
use ndarray::Array1;

use sce_testfunctions::{FunctionMetadata, function_names, get_function_metadata};
use sce_ua::{SceParams, SceReport, run_recorded_sce, shuffled_complex_evolution};

/// CLI arguments for running SCE-UA on the benchmark functions
#[derive(Parser)]
#[command(name = "run_sceua")]
#[command(about = "Minimize the reference benchmark functions with SCE-UA")]
struct Args {
	/// Functions to run (comma-separated), if empty runs all
	#[arg(short, long)]
	functions: Option<String>,

	/// JSON file with SCE-UA parameters
	#[arg(short, long)]
	params: Option<String>,

	/// Maximum number of evaluations (overrides the parameter file)
	#[arg(long)]
	maxn: Option<usize>,

	/// Number of complexes (overrides the parameter file)
	#[arg(long)]
	ngs: Option<usize>,

	/// Random seed (overrides the parameter file)
	#[arg(short, long)]
	seed: Option<u64>,

	/// Put the reference start point in the initial population
	#[arg(long)]
	include_x0: bool,

	/// Directory where per-loop CSV records are written
	#[arg(short, long)]
	record_dir: Option<String>,

	/// Log every shuffling loop at info level
	#[arg(long)]
	disp: bool,

	/// List the available functions and exit
	#[arg(long)]
	list: bool,
}

fn run_one(
	meta: &FunctionMetadata,
	params: &SceParams,
	disp: bool,
	record_dir: Option<&str>,
) -> Result<SceReport, Box<dyn std::error::Error>> {
	let mut config = params.to_config(Some(Array1::from(meta.start.clone())));
	config.disp = disp;
	let report = match record_dir {
		Some(dir) => run_recorded_sce(&meta.name, meta.function, &meta.bounds, config, dir)?.0,
		None => shuffled_complex_evolution(&meta.function, &meta.bounds, config)?,
	};
	Ok(report)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
	let args = Args::parse();

	if args.list {
		let metadata = get_function_metadata();
		for name in function_names() {
			if let Some(meta) = metadata.get(&name) {
				println!("{:<20} {}-D  {}", name, meta.dimension(), meta.description);
			}
		}
		return Ok(());
	}

	let mut params = match &args.params {
		Some(path) => SceParams::from_json_file(path)?,
		None => SceParams::default(),
	};
	if let Some(maxn) = args.maxn {
		params.maxn = maxn;
	}
	if args.ngs.is_some() {
		params.ngs = args.ngs;
	}
	if args.seed.is_some() {
		params.seed = args.seed;
	}
	params.include_x0 |= args.include_x0;

	let names: Vec<String> = match &args.functions {
		Some(list) => list.split(',').map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect(),
		None => function_names(),
	};

	let metadata = get_function_metadata();
	println!(
		"{:<20} {:>14} {:>14} {:>8} {:>6}  {}",
		"function", "best_f", "known_f", "nfev", "loops", "termination"
	);
	for name in &names {
		let Some(meta) = metadata.get(name) else {
			log::error!("unknown function '{}', see --list", name);
			continue;
		};
		match run_one(meta, &params, args.disp, args.record_dir.as_deref()) {
			Ok(report) => {
				let known = meta.best_known_value().map(|f| format!("{:.6e}", f)).unwrap_or_default();
				println!(
					"{:<20} {:>14.6e} {:>14} {:>8} {:>6}  {}",
					name, report.fun, known, report.nfev, report.nloop, report.message
				);
			}
			Err(e) => log::error!("{}: {}", name, e),
		}
	}

	Ok(())
}
