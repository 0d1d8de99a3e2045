//! The persisted model: transition matrix plus calibrated threshold.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

use super::transition_matrix::TransitionMatrix;

/// A trained gibberish model.
///
/// Built once by the trainer, immutable afterwards. Scoring takes
/// `&self` only, so one loaded model can be shared read-only across
/// arbitrarily many concurrent classification calls without locking.
///
/// The persisted form is a compact `postcard` blob holding the full
/// log-probability grid and the threshold; [`Model::load`] reconstructs
/// the exact values or reports a recoverable [`ModelError`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Model {
	matrix: TransitionMatrix,
	threshold: f64,
}

impl Model {
	pub(crate) fn new(matrix: TransitionMatrix, threshold: f64) -> Self {
		Self { matrix, threshold }
	}

	/// Loads a model artifact from disk.
	///
	/// # Errors
	/// - [`ModelError::Io`] if the artifact is missing or unreadable.
	/// - [`ModelError::Decode`] if the bytes are not a valid artifact.
	/// - [`ModelError::Dimensions`] if the decoded matrix is not square
	///   of the alphabet size.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
		let bytes = fs::read(&path)?;
		let model: Self = postcard::from_bytes(&bytes)?;
		model.matrix.check_dimensions()?;

		info!(
			"loaded model from {} (threshold {:.6})",
			path.as_ref().display(),
			model.threshold
		);
		Ok(model)
	}

	/// Serializes the model to a compact binary artifact.
	///
	/// # Errors
	/// [`ModelError::Io`] if the file cannot be written.
	pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ModelError> {
		let bytes = postcard::to_stdvec(self)?;
		fs::write(&path, bytes)?;

		info!("saved model to {}", path.as_ref().display());
		Ok(())
	}

	/// Geometric-mean transition probability of `text` under this model.
	pub fn score(&self, text: &str) -> f64 {
		self.matrix.avg_transition_prob(text)
	}

	/// Whether `text` scores at or below the calibrated threshold.
	///
	/// Equality counts as gibberish: the threshold is an inclusive upper
	/// bound for exclusion from the plausible class.
	pub fn is_gibberish(&self, text: &str) -> bool {
		self.score(text) <= self.threshold
	}

	/// The calibrated decision threshold.
	pub fn threshold(&self) -> f64 {
		self.threshold
	}

	/// The log-probability transition matrix.
	pub fn matrix(&self) -> &TransitionMatrix {
		&self.matrix
	}
}
