//! Offline trainer: builds the bigram model artifact from text corpora.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use dga_detect_core::io::build_output_path;
use dga_detect_core::model::trainer::{DEFAULT_PRIOR, Trainer};

#[derive(Parser, Debug)]
#[command(
	name = "dga-detect-train",
	about = "Train the bigram gibberish model from text corpora",
	version
)]
struct Args {
	/// Frequency corpus: one line of ordinary text per line
	#[arg(short, long)]
	corpus: PathBuf,

	/// Labeled plausible lines for threshold calibration
	#[arg(short, long)]
	good: PathBuf,

	/// Labeled gibberish lines for threshold calibration
	#[arg(short, long)]
	bad: PathBuf,

	/// Output artifact path (default: corpus path with the .dat extension)
	#[arg(short, long)]
	output: Option<PathBuf>,

	/// Additive smoothing prior seeded into every transition count
	#[arg(long, default_value_t = DEFAULT_PRIOR)]
	prior: u64,
}

fn main() -> anyhow::Result<()> {
	env_logger::init();
	let args = Args::parse();

	let output = match args.output {
		Some(path) => path,
		None => build_output_path(&args.corpus, "dat")?,
	};

	let model = Trainer::new()
		.with_prior(args.prior)
		.train_files(&args.corpus, &args.good, &args.bad)
		.context("training failed")?;

	model
		.save(&output)
		.with_context(|| format!("failed to write model artifact {}", output.display()))?;

	info!("calibrated threshold: {:.6}", model.threshold());
	println!("Model training complete. Saved as '{}'.", output.display());
	Ok(())
}
