//! DGA domain-name detection CLI.
//!
//! Classifies registrable labels against a trained model artifact,
//! either one label at a time or a file of labels with an aggregate
//! JSON report. Label extraction (subdomain/TLD stripping, punycode,
//! Tor suffixes) is the caller's job: inputs are already-extracted
//! registrable labels.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgGroup, Parser};
use log::warn;
use serde::Serialize;

use dga_detect_core::io::read_lines;
use dga_detect_core::model::detector::{
	Detector, HIGH_CONSONANTS, HIGH_ENTROPY, LONG_NAME, Verdict,
};

/// Labels shorter than this are skipped rather than classified: the
/// zero-transition sentinel makes very short input score as plausible,
/// so short labels carry no usable signal.
const DEFAULT_MIN_LENGTH: usize = 6;

#[derive(Parser, Debug)]
#[command(
	name = "dga-detect",
	about = "DGA domain-name detection",
	version,
	arg_required_else_help = true,
	group(ArgGroup::new("input").required(true).args(["domain", "file"]))
)]
struct Args {
	/// Registrable label to check (e.g. "example" from www.example.co.uk)
	#[arg(short, long, conflicts_with = "file")]
	domain: Option<String>,

	/// File with labels, one per line
	#[arg(short, long)]
	file: Option<PathBuf>,

	/// Trained model artifact
	#[arg(short, long, default_value = "gib_model.dat")]
	model: PathBuf,

	/// Aggregate JSON report path (file mode only)
	#[arg(short, long, default_value = "dga_domains.json")]
	output: PathBuf,

	/// Skip labels shorter than this many characters
	#[arg(long, default_value_t = DEFAULT_MIN_LENGTH)]
	min_length: usize,
}

/// One entry of the aggregate report.
#[derive(Debug, Serialize)]
struct Record {
	domain: String,
	#[serde(flatten)]
	verdict: Verdict,
}

fn main() -> anyhow::Result<()> {
	env_logger::init();
	let args = Args::parse();

	let detector = Detector::load(&args.model)
		.with_context(|| format!("failed to load model artifact {}", args.model.display()))?;

	if let Some(domain) = &args.domain {
		if let Some(record) = analyze(&detector, domain, args.min_length) {
			print_verdict(&record);
		}
		return Ok(());
	}

	if let Some(file) = &args.file {
		let labels = read_lines(file)
			.with_context(|| format!("failed to read label file {}", file.display()))?;

		let mut records = Vec::new();
		for label in &labels {
			println!("Processing domain: {label}");
			if let Some(record) = analyze(&detector, label, args.min_length) {
				print_verdict(&record);
				records.push(record);
			}
		}

		let out = File::create(&args.output)
			.with_context(|| format!("failed to create report {}", args.output.display()))?;
		serde_json::to_writer_pretty(BufWriter::new(out), &records)
			.context("failed to serialize the report")?;
		println!("Report written to {}.", args.output.display());
	}

	Ok(())
}

/// Classifies one label, or skips it when below the minimum length.
fn analyze(detector: &Detector, label: &str, min_length: usize) -> Option<Record> {
	let label = label.trim();
	if label.is_empty() {
		return None;
	}
	if label.chars().count() < min_length {
		warn!("short label ignored: {label}");
		println!("Short labels are ignored...");
		return None;
	}

	Some(Record {
		domain: label.to_owned(),
		verdict: detector.classify(label),
	})
}

/// Prints a human-readable summary, echoing each advisory flag.
fn print_verdict(record: &Record) {
	let verdict = &record.verdict;

	if let Some(entropy) = verdict.high_entropy {
		println!(
			"High entropy (>{HIGH_ENTROPY}) is a strong indicator of a generated domain. \
			 This domain scored: {entropy:.3}"
		);
	}
	if let Some(consonants) = verdict.high_consonants {
		println!(
			"A high consonant count (>{HIGH_CONSONANTS}) is an indicator of a generated domain. \
			 This domain scored: {consonants}"
		);
	}
	if let Some(length) = verdict.long_name {
		println!(
			"A long name (>{LONG_NAME}) can also indicate a generated domain. \
			 This domain scored: {length}"
		);
	}

	if verdict.is_gibberish {
		println!(
			"Domain {} is likely DGA! (score {:.6})",
			record.domain, verdict.score
		);
	} else {
		println!(
			"Domain {} looks legitimate (score {:.6}).",
			record.domain, verdict.score
		);
	}
}
