//! Log-probability transition matrix and geometric-mean scoring.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

use super::alphabet::{self, SYMBOL_COUNT};

/// Square matrix of natural-log bigram transition probabilities.
///
/// Cell `[i][j]` holds `ln P(symbol j follows symbol i)`, estimated from
/// the training corpus with additive smoothing.
///
/// ## Invariants
/// - `cells.len() == SYMBOL_COUNT * SYMBOL_COUNT`, row-major
/// - Each row exponentiates to a probability distribution summing to 1
/// - No cell is `-inf` (smoothing keeps every count above zero)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TransitionMatrix {
	cells: Vec<f64>,
}

impl TransitionMatrix {
	/// Wraps row-major log-probability cells.
	pub(crate) fn from_cells(cells: Vec<f64>) -> Self {
		debug_assert_eq!(cells.len(), SYMBOL_COUNT * SYMBOL_COUNT);
		Self { cells }
	}

	/// Log probability of `b` following `a`.
	///
	/// Returns `None` if either symbol is outside the alphabet.
	pub fn log_prob(&self, a: char, b: char) -> Option<f64> {
		let i = alphabet::index(a)?;
		let j = alphabet::index(b)?;
		Some(self.cells[i * SYMBOL_COUNT + j])
	}

	/// Geometric-mean transition probability of `text`.
	///
	/// Sums the log probability of every bigram of the normalized text,
	/// divides by the transition count, and converts back out of log
	/// space. Deterministic and total: a text with no scoreable
	/// transition (too short, or entirely filtered out by normalization)
	/// yields the sentinel `1.0`, which callers should gate behind a
	/// minimum-length check before trusting.
	pub fn avg_transition_prob(&self, text: &str) -> f64 {
		let mut log_prob = 0.0;
		let mut transition_ct = 0u32;

		for (a, b) in alphabet::bigrams(text) {
			if let Some(lp) = self.log_prob(a, b) {
				log_prob += lp;
				transition_ct += 1;
			}
		}

		(log_prob / f64::from(transition_ct.max(1))).exp()
	}

	/// Checks that the matrix has exactly `SYMBOL_COUNT`^2 cells.
	///
	/// Used when loading a persisted artifact, where the cell vector
	/// length comes from untrusted bytes.
	pub(crate) fn check_dimensions(&self) -> Result<(), ModelError> {
		let expected = SYMBOL_COUNT * SYMBOL_COUNT;
		if self.cells.len() != expected {
			return Err(ModelError::Dimensions { expected, actual: self.cells.len() });
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::counts::CountMatrix;

	fn uniform_matrix() -> TransitionMatrix {
		CountMatrix::with_prior(1).into_log_probs()
	}

	#[test]
	fn test_log_prob_uniform() {
		let matrix = uniform_matrix();
		let expected = (1.0 / SYMBOL_COUNT as f64).ln();
		assert!((matrix.log_prob('a', 'b').unwrap() - expected).abs() < 1e-12);
		assert!(matrix.log_prob('a', '1').is_none());
	}

	#[test]
	fn test_avg_transition_prob_uniform() {
		let matrix = uniform_matrix();
		// Every transition has probability 1/27, so the geometric mean
		// is 1/27 regardless of length.
		let expected = 1.0 / SYMBOL_COUNT as f64;
		assert!((matrix.avg_transition_prob("abcdef") - expected).abs() < 1e-12);
	}

	#[test]
	fn test_zero_transition_sentinel() {
		let matrix = uniform_matrix();
		assert_eq!(matrix.avg_transition_prob(""), 1.0);
		assert_eq!(matrix.avg_transition_prob("x"), 1.0);
		assert_eq!(matrix.avg_transition_prob("12345"), 1.0);
	}

	#[test]
	fn test_scoring_is_deterministic() {
		let mut counts = CountMatrix::with_prior(10);
		counts.record_line("determinism is a property worth testing");
		let matrix = counts.into_log_probs();

		let first = matrix.avg_transition_prob("property");
		let second = matrix.avg_transition_prob("property");
		assert_eq!(first, second);
	}

	#[test]
	fn test_check_dimensions() {
		assert!(uniform_matrix().check_dimensions().is_ok());

		let truncated = TransitionMatrix { cells: vec![0.0; 3] };
		assert!(matches!(
			truncated.check_dimensions(),
			Err(ModelError::Dimensions { actual: 3, .. })
		));
	}
}
