//! Smoothed bigram count accumulation.

use super::alphabet::{self, SYMBOL_COUNT};
use super::transition_matrix::TransitionMatrix;

/// Accumulates bigram transition counts during training.
///
/// A `CountMatrix` is an explicit local accumulator: worker threads count
/// their corpus chunk into an unseeded accumulator, partials are merged
/// into a single prior-seeded one, and only the finished matrix leaves
/// the training scope. No global state is mutated at any point.
///
/// ## Invariants
/// - The matrix is square of size `SYMBOL_COUNT`
/// - A prior-seeded accumulator has every cell >= prior, so every
///   transition keeps a nonzero probability after normalization
#[derive(Debug, Clone)]
pub struct CountMatrix {
	cells: Vec<u64>,
}

impl CountMatrix {
	/// Creates an accumulator with every cell at zero.
	///
	/// Used for per-chunk partial counts that are later merged into a
	/// prior-seeded accumulator.
	pub fn empty() -> Self {
		Self { cells: vec![0; SYMBOL_COUNT * SYMBOL_COUNT] }
	}

	/// Creates an accumulator with every cell seeded to `prior`.
	///
	/// Laplace-style additive smoothing: transitions never observed in
	/// the corpus keep a small nonzero count, so no log probability
	/// diverges to `-inf`.
	pub fn with_prior(prior: u64) -> Self {
		Self { cells: vec![prior; SYMBOL_COUNT * SYMBOL_COUNT] }
	}

	/// Records one observed transition from `a` to `b`.
	///
	/// Symbols outside the alphabet are ignored; the normalizer never
	/// produces them.
	pub fn record(&mut self, a: char, b: char) {
		if let (Some(i), Some(j)) = (alphabet::index(a), alphabet::index(b)) {
			self.cells[i * SYMBOL_COUNT + j] += 1;
		}
	}

	/// Records every bigram of one corpus line.
	pub fn record_line(&mut self, line: &str) {
		for (a, b) in alphabet::bigrams(line) {
			self.record(a, b);
		}
	}

	/// Merges another accumulator into this one by summing cells.
	///
	/// Merging is count-exact: splitting a corpus into chunks, counting
	/// each chunk separately and merging yields the same accumulator as
	/// a single pass.
	pub fn merge(&mut self, other: &Self) {
		for (cell, addition) in self.cells.iter_mut().zip(&other.cells) {
			*cell += addition;
		}
	}

	/// Row-normalizes the counts into a log-probability matrix.
	///
	/// Each cell becomes `ln(count / row_sum)`, so every row of the
	/// result exponentiates to a probability distribution summing to 1.
	/// The accumulator must be prior-seeded; a zero cell would produce
	/// `-inf`.
	pub fn into_log_probs(self) -> TransitionMatrix {
		let mut cells = Vec::with_capacity(self.cells.len());
		for row in self.cells.chunks(SYMBOL_COUNT) {
			let row_sum: u64 = row.iter().sum();
			let row_sum = row_sum as f64;
			for count in row {
				cells.push((*count as f64 / row_sum).ln());
			}
		}
		TransitionMatrix::from_cells(cells)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_record_and_merge_are_count_exact() {
		let mut single = CountMatrix::empty();
		single.record_line("domain name");
		single.record_line("another line");

		let mut first = CountMatrix::empty();
		first.record_line("domain name");
		let mut second = CountMatrix::empty();
		second.record_line("another line");
		first.merge(&second);

		assert_eq!(single.cells, first.cells);
	}

	#[test]
	fn test_record_ignores_foreign_symbols() {
		let mut counts = CountMatrix::empty();
		counts.record('1', 'a');
		counts.record('a', '!');
		assert!(counts.cells.iter().all(|c| *c == 0));
	}

	#[test]
	fn test_prior_seeds_every_cell() {
		let counts = CountMatrix::with_prior(10);
		assert!(counts.cells.iter().all(|c| *c == 10));
	}

	#[test]
	fn test_log_prob_rows_sum_to_one() {
		let mut counts = CountMatrix::with_prior(10);
		counts.record_line("the quick brown fox jumps over the lazy dog");
		let matrix = counts.into_log_probs();

		for a in alphabet::ACCEPTED_SYMBOLS.chars() {
			let row_sum: f64 = alphabet::ACCEPTED_SYMBOLS
				.chars()
				.map(|b| matrix.log_prob(a, b).unwrap().exp())
				.sum();
			assert!((row_sum - 1.0).abs() < 1e-9, "row {a:?} sums to {row_sum}");
		}
	}
}
