//! Fixed symbol set, input normalization and n-gram extraction.

/// Symbols accepted by the model: the 26 lowercase ASCII letters and space.
///
/// Everything else (digits, punctuation, non-ASCII) is dropped during
/// normalization, which keeps the transition matrix small and ignores
/// infrequent symbols.
pub const ACCEPTED_SYMBOLS: &str = "abcdefghijklmnopqrstuvwxyz ";

/// Number of accepted symbols; the transition matrix is square of this size.
pub const SYMBOL_COUNT: usize = 27;

/// Returns the matrix index of an accepted symbol.
///
/// The alphabet is small and static, so the lookup is a range match on
/// the character code rather than a hash map.
///
/// Returns `None` for symbols outside the alphabet.
pub fn index(symbol: char) -> Option<usize> {
	match symbol {
		'a'..='z' => Some(symbol as usize - 'a' as usize),
		' ' => Some(SYMBOL_COUNT - 1),
		_ => None,
	}
}

/// Lowercases the input and keeps only accepted symbols.
///
/// Characters outside the alphabet are silently dropped, not replaced,
/// so the result may be shorter than the input or empty. Idempotent:
/// normalizing an already-normalized string changes nothing.
pub fn normalize(text: &str) -> Vec<char> {
	text.chars()
		.map(|c| c.to_ascii_lowercase())
		.filter(|c| index(*c).is_some())
		.collect()
}

/// Iterator over the overlapping n-length windows of a normalized string.
///
/// Produced by [`ngrams`]. The sequence is finite, ordered left to right,
/// and empty when the normalized input is shorter than `n`. The iterator
/// is a pure function of its input: calling [`ngrams`] again restarts
/// from scratch, and no state outlives a single extraction.
#[derive(Debug, Clone)]
pub struct Ngrams {
	symbols: Vec<char>,
	n: usize,
	start: usize,
}

impl Iterator for Ngrams {
	type Item = String;

	fn next(&mut self) -> Option<String> {
		if self.n == 0 || self.start + self.n > self.symbols.len() {
			return None;
		}
		let gram = self.symbols[self.start..self.start + self.n].iter().collect();
		self.start += 1;
		Some(gram)
	}
}

/// Extracts all n-length contiguous windows from `text` after normalization.
///
/// A window starts at every index from `0` to `len - n` inclusive. Inputs
/// that normalize to fewer than `n` symbols yield an empty sequence
/// rather than failing.
pub fn ngrams(n: usize, text: &str) -> Ngrams {
	Ngrams { symbols: normalize(text), n, start: 0 }
}

/// Extracts the ordered bigrams of `text` after normalization.
///
/// Convenience over [`ngrams`] for the transition model, yielding symbol
/// pairs instead of strings.
pub fn bigrams(text: &str) -> impl Iterator<Item = (char, char)> {
	ngrams(2, text).filter_map(|gram| {
		let mut symbols = gram.chars();
		Some((symbols.next()?, symbols.next()?))
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_index_covers_alphabet() {
		for (expected, symbol) in ACCEPTED_SYMBOLS.chars().enumerate() {
			assert_eq!(index(symbol), Some(expected));
		}
		assert_eq!(index('0'), None);
		assert_eq!(index('-'), None);
		assert_eq!(index('é'), None);
	}

	#[test]
	fn test_normalize_filters_and_lowercases() {
		assert_eq!(normalize("Hello, World!"), "hello world".chars().collect::<Vec<_>>());
		assert_eq!(normalize("123-456"), Vec::<char>::new());
		assert_eq!(normalize(""), Vec::<char>::new());
	}

	#[test]
	fn test_normalize_idempotent() {
		let once: String = normalize("Example.co.uk 2024").into_iter().collect();
		let twice: String = normalize(&once).into_iter().collect();
		assert_eq!(once, twice);
	}

	#[test]
	fn test_ngrams_windows() {
		let grams: Vec<String> = ngrams(2, "abcd").collect();
		assert_eq!(grams, vec!["ab", "bc", "cd"]);

		let grams: Vec<String> = ngrams(3, "a-b-c-d").collect();
		assert_eq!(grams, vec!["abc", "bcd"]);
	}

	#[test]
	fn test_ngrams_short_input_is_empty() {
		assert_eq!(ngrams(2, "a").count(), 0);
		assert_eq!(ngrams(2, "42!").count(), 0);
		assert_eq!(ngrams(5, "abc").count(), 0);
	}

	#[test]
	fn test_ngrams_restartable() {
		let first: Vec<String> = ngrams(2, "domain").collect();
		let second: Vec<String> = ngrams(2, "domain").collect();
		assert_eq!(first, second);
	}

	#[test]
	fn test_bigrams_pairs() {
		let pairs: Vec<(char, char)> = bigrams("a b").collect();
		assert_eq!(pairs, vec![('a', ' '), (' ', 'b')]);
	}
}
