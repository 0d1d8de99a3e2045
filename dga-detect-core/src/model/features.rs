//! Structural heuristics over the raw candidate label.

use std::collections::HashMap;

use serde::Serialize;

/// Letters counted by the consonant-density heuristic.
const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";

/// Structural features of a candidate label.
///
/// Computed over the raw label, not the normalized form: entropy over
/// the empirical character distribution, consonant count, and character
/// length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureSet {
	pub entropy: f64,
	pub consonants: usize,
	pub length: usize,
}

impl FeatureSet {
	/// Extracts the feature set of `label`.
	pub fn extract(label: &str) -> Self {
		Self {
			entropy: entropy(label),
			consonants: count_consonants(label),
			length: label.chars().count(),
		}
	}
}

/// Shannon entropy of `label` in bits.
///
/// Measures the randomness of the character distribution. Returns `0.0`
/// for the empty string.
pub fn entropy(label: &str) -> f64 {
	let length = label.chars().count();
	if length == 0 {
		return 0.0;
	}

	let mut frequencies: HashMap<char, usize> = HashMap::new();
	for c in label.chars() {
		*frequencies.entry(c).or_insert(0) += 1;
	}

	let length = length as f64;
	-frequencies
		.values()
		.map(|count| {
			let p = *count as f64 / length;
			p * p.log2()
		})
		.sum::<f64>()
}

/// Number of consonants in `label`, case-insensitive.
pub fn count_consonants(label: &str) -> usize {
	label
		.chars()
		.filter(|c| CONSONANTS.contains(c.to_ascii_lowercase()))
		.count()
}
