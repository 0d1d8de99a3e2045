//! The combined classifier producing per-label verdicts.

use std::path::Path;

use serde::Serialize;

use crate::error::ModelError;

use super::alphabet;
use super::artifact::Model;
use super::features::FeatureSet;

/// Entropy above this is a strong generated-name indicator.
pub const HIGH_ENTROPY: f64 = 3.8;

/// Consonant counts above this are flagged.
pub const HIGH_CONSONANTS: usize = 7;

/// Label lengths above this are flagged.
pub const LONG_NAME: usize = 12;

/// Classification result for one candidate label.
///
/// `is_gibberish` is the model's binary decision. The three flags are
/// advisory structural signals, each carrying the offending feature
/// value when set; they corroborate a verdict for a human analyst but
/// never change it. `degenerate` marks labels that produced no
/// scoreable transition, where the sentinel score of 1.0 carries no
/// evidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
	pub is_gibberish: bool,
	pub score: f64,
	pub degenerate: bool,
	pub high_entropy: Option<f64>,
	pub high_consonants: Option<usize>,
	pub long_name: Option<usize>,
}

/// Classifies candidate labels against a trained model.
///
/// # Responsibilities
/// - Score the label's transition statistics against the model threshold
/// - Compute the structural heuristics independently
/// - Combine both tracks into a [`Verdict`]
///
/// The two tracks stay separate on purpose: the statistical model makes
/// the decision, the heuristics explain it, and neither is folded into
/// the other.
#[derive(Debug, Clone)]
pub struct Detector {
	model: Model,
}

impl Detector {
	/// Wraps an already-loaded model.
	pub fn new(model: Model) -> Self {
		Self { model }
	}

	/// Loads the model artifact at `path` and wraps it.
	///
	/// # Errors
	/// Propagates [`ModelError`]. There is no meaningful classification
	/// without a model, so callers should treat this as fatal to their
	/// session.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
		Ok(Self::new(Model::load(path)?))
	}

	/// Classifies one candidate label.
	///
	/// Never fails: degenerate input (empty, too short, or filtered to
	/// nothing by normalization) yields a valid low-confidence verdict
	/// with the 1.0 sentinel score and the `degenerate` marker set,
	/// rather than an error. A classifier fed attacker-controlled
	/// strings must not have a crashing path.
	pub fn classify(&self, label: &str) -> Verdict {
		let score = self.model.score(label);
		let features = FeatureSet::extract(label);

		Verdict {
			is_gibberish: score <= self.model.threshold(),
			score,
			degenerate: alphabet::ngrams(2, label).next().is_none(),
			high_entropy: (features.entropy > HIGH_ENTROPY).then_some(features.entropy),
			high_consonants: (features.consonants > HIGH_CONSONANTS).then_some(features.consonants),
			long_name: (features.length > LONG_NAME).then_some(features.length),
		}
	}

	/// The wrapped model.
	pub fn model(&self) -> &Model {
		&self.model
	}
}
