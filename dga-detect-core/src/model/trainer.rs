//! Corpus training and decision-threshold calibration.

use std::path::Path;
use std::sync::mpsc;
use std::thread;

use log::{debug, info};

use crate::error::TrainError;
use crate::io;

use super::artifact::Model;
use super::counts::CountMatrix;
use super::transition_matrix::TransitionMatrix;

/// Default additive-smoothing prior seeded into every transition count.
pub const DEFAULT_PRIOR: u64 = 10;

/// Corpus chunks per CPU when counting across worker threads.
const CHUNK_FACTOR: usize = 8;

/// Builds a [`Model`] from a frequency corpus and labeled example sets.
///
/// # Responsibilities
/// - Accumulate smoothed bigram counts over the corpus
/// - Row-normalize the counts into log probabilities
/// - Calibrate the decision threshold from the labeled sets
///
/// The trainer is a one-shot batch computation: it owns nothing beyond
/// its settings, and the returned [`Model`] is the only artifact that
/// outlives a run. A failed run returns an error and nothing else.
#[derive(Debug, Clone)]
pub struct Trainer {
	prior: u64,
}

impl Default for Trainer {
	fn default() -> Self {
		Self { prior: DEFAULT_PRIOR }
	}
}

impl Trainer {
	/// Creates a trainer with the default smoothing prior.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the additive-smoothing prior.
	///
	/// Values below 1 are clamped to 1: with a zero prior an unseen
	/// transition would reach probability zero and scoring would diverge.
	pub fn with_prior(mut self, prior: u64) -> Self {
		self.prior = prior.max(1);
		self
	}

	/// Trains a model from in-memory corpus lines.
	///
	/// # Parameters
	/// - `corpus`: lines used for bigram frequency counting.
	/// - `good`: labeled plausible lines used for calibration.
	/// - `bad`: labeled gibberish lines used for calibration.
	///
	/// # Behavior
	/// - Splits the corpus into chunks (CPU cores * factor) and counts
	///   each chunk on its own thread; partials are merged into a
	///   prior-seeded accumulator, so the split never changes the result.
	/// - Row-normalizes the counts into a log-probability matrix.
	/// - Scores both labeled sets against that matrix and requires every
	///   good line to score strictly above every bad line; the threshold
	///   is the midpoint between the worst good and the best bad score.
	///
	/// # Errors
	/// - [`TrainError::EmptySet`] if the corpus or a labeled set has no lines.
	/// - [`TrainError::Calibration`] if the labeled sets overlap in score space.
	pub fn train(
		&self,
		corpus: &[String],
		good: &[String],
		bad: &[String],
	) -> Result<Model, TrainError> {
		if corpus.is_empty() {
			return Err(TrainError::EmptySet("corpus"));
		}
		if good.is_empty() {
			return Err(TrainError::EmptySet("good"));
		}
		if bad.is_empty() {
			return Err(TrainError::EmptySet("bad"));
		}

		let matrix = self.count_corpus(corpus).into_log_probs();
		let threshold = calibrate(&matrix, good, bad)?;

		info!("trained on {} corpus lines, threshold {threshold:.6}", corpus.len());
		Ok(Model::new(matrix, threshold))
	}

	/// Trains a model from line-oriented corpus files.
	///
	/// # Errors
	/// [`TrainError::Io`] if a file cannot be read, plus everything
	/// [`Trainer::train`] raises.
	pub fn train_files(
		&self,
		corpus: impl AsRef<Path>,
		good: impl AsRef<Path>,
		bad: impl AsRef<Path>,
	) -> Result<Model, TrainError> {
		let corpus = io::read_lines(corpus)?;
		let good = io::read_lines(good)?;
		let bad = io::read_lines(bad)?;
		self.train(&corpus, &good, &bad)
	}

	/// Counts corpus bigrams across worker threads.
	///
	/// Each chunk is counted into an unseeded partial accumulator;
	/// partials are collected over a channel and merged into a
	/// prior-seeded accumulator, so the prior is applied exactly once.
	fn count_corpus(&self, corpus: &[String]) -> CountMatrix {
		let chunks = num_cpus::get() * CHUNK_FACTOR;
		let chunk_size = corpus.len().div_ceil(chunks).max(1);

		let (tx, rx) = mpsc::channel();
		thread::scope(|scope| {
			for chunk in corpus.chunks(chunk_size) {
				let tx = tx.clone();
				scope.spawn(move || {
					let mut partial = CountMatrix::empty();
					for line in chunk {
						partial.record_line(line);
					}
					let _ = tx.send(partial);
				});
			}
		});
		drop(tx);

		let mut counts = CountMatrix::with_prior(self.prior);
		for partial in rx.iter() {
			counts.merge(&partial);
		}

		debug!("counted {} corpus lines (chunk size {chunk_size})", corpus.len());
		counts
	}
}

/// Scores both labeled sets and derives the decision threshold.
///
/// Required invariant for a usable model: every good line scores
/// strictly above every bad line. Otherwise the matrix cannot be trusted
/// to separate the classes, and calibration fails instead of picking an
/// arbitrary cutoff.
fn calibrate(
	matrix: &TransitionMatrix,
	good: &[String],
	bad: &[String],
) -> Result<f64, TrainError> {
	let min_good = scores(matrix, good).fold(f64::INFINITY, f64::min);
	let max_bad = scores(matrix, bad).fold(f64::NEG_INFINITY, f64::max);

	debug!("calibration: min good {min_good:.6}, max bad {max_bad:.6}");

	if min_good <= max_bad {
		return Err(TrainError::Calibration { min_good, max_bad });
	}
	Ok((min_good + max_bad) / 2.0)
}

fn scores<'a>(
	matrix: &'a TransitionMatrix,
	lines: &'a [String],
) -> impl Iterator<Item = f64> + 'a {
	lines.iter().map(|line| matrix.avg_transition_prob(line))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::TrainError;

	fn lines(raw: &[&str]) -> Vec<String> {
		raw.iter().map(|s| (*s).to_owned()).collect()
	}

	#[test]
	fn test_empty_inputs_are_rejected() {
		let trainer = Trainer::new();
		let some = lines(&["hello world"]);

		assert!(matches!(
			trainer.train(&[], &some, &some),
			Err(TrainError::EmptySet("corpus"))
		));
		assert!(matches!(
			trainer.train(&some, &[], &some),
			Err(TrainError::EmptySet("good"))
		));
		assert!(matches!(
			trainer.train(&some, &some, &[]),
			Err(TrainError::EmptySet("bad"))
		));
	}

	#[test]
	fn test_identical_sets_fail_calibration() {
		// Every good and bad line scores identically, so no threshold
		// can separate them and training must refuse.
		let trainer = Trainer::new();
		let corpus = lines(&["the quick brown fox jumps over the lazy dog"]);
		let same = lines(&["hello"]);

		assert!(matches!(
			trainer.train(&corpus, &same, &same),
			Err(TrainError::Calibration { .. })
		));
	}

	#[test]
	fn test_calibration_error_carries_scores() {
		let trainer = Trainer::new();
		let corpus = lines(&["some ordinary text for counting"]);
		let same = lines(&["overlap"]);

		match trainer.train(&corpus, &same, &same) {
			Err(TrainError::Calibration { min_good, max_bad }) => {
				assert_eq!(min_good, max_bad);
			}
			other => panic!("expected calibration failure, got {other:?}"),
		}
	}

	#[test]
	fn test_prior_is_clamped() {
		// A zero prior is clamped to 1, so scoring stays finite even for
		// transitions absent from the corpus.
		let trainer = Trainer::new().with_prior(0);
		let corpus = lines(&["aaaa aaaa aaaa"]);
		let model = trainer
			.train(&corpus, &lines(&["aaaa"]), &lines(&["zxqw"]))
			.expect("training should succeed");

		let score = model.score("zxqw");
		assert!(score.is_finite());
		assert!(score > 0.0);
	}

	#[test]
	fn test_training_is_deterministic_across_chunking() {
		let corpus: Vec<String> = (0..100)
			.map(|i| format!("line number {i} with some shared english words"))
			.collect();
		let good = lines(&["english", "shared", "number"]);
		let bad = lines(&["zxqwvj", "qqxzvw"]);

		let first = Trainer::new().train(&corpus, &good, &bad).unwrap();
		let second = Trainer::new().train(&corpus, &good, &bad).unwrap();
		assert_eq!(first, second);
	}
}
