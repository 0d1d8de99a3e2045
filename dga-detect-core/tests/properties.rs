//! Property-based checks over arbitrary candidate strings.

use std::sync::OnceLock;

use proptest::prelude::*;

use dga_detect_core::model::alphabet::{ngrams, normalize};
use dga_detect_core::model::artifact::Model;
use dga_detect_core::model::features::{count_consonants, entropy};
use dga_detect_core::model::trainer::Trainer;

const CORPUS: &str = include_str!("fixtures/corpus.txt");
const GOOD: &str = include_str!("fixtures/good.txt");
const BAD: &str = include_str!("fixtures/bad.txt");

fn fixture_model() -> &'static Model {
	static MODEL: OnceLock<Model> = OnceLock::new();
	MODEL.get_or_init(|| {
		let lines = |raw: &str| raw.lines().map(str::to_owned).collect::<Vec<_>>();
		Trainer::new()
			.train(&lines(CORPUS), &lines(GOOD), &lines(BAD))
			.expect("fixture corpora must calibrate")
	})
}

proptest! {
	#[test]
	fn entropy_is_never_negative(label in ".*") {
		prop_assert!(entropy(&label) >= 0.0);
	}

	#[test]
	fn consonants_are_bounded_by_length(label in ".*") {
		let consonants = count_consonants(&label);
		prop_assert!(consonants <= label.chars().count());
	}

	#[test]
	fn normalize_is_idempotent(text in ".*") {
		let once: String = normalize(&text).into_iter().collect();
		let twice: String = normalize(&once).into_iter().collect();
		prop_assert_eq!(once, twice);
	}

	#[test]
	fn ngram_count_matches_window_arithmetic(text in ".*", n in 1usize..5) {
		let symbols = normalize(&text).len();
		let expected = (symbols + 1).saturating_sub(n);
		prop_assert_eq!(ngrams(n, &text).count(), expected);
	}

	#[test]
	fn scores_are_probabilities(label in ".*") {
		let score = fixture_model().score(&label);
		prop_assert!(score > 0.0 && score <= 1.0, "score {} out of range", score);
	}

	#[test]
	fn scoring_is_deterministic(label in ".*") {
		let model = fixture_model();
		prop_assert_eq!(model.score(&label), model.score(&label));
	}
}
