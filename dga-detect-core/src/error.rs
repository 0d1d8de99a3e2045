use thiserror::Error;

/// Errors raised while training a model.
///
/// Any of these aborts the training run entirely: no partial or
/// miscalibrated model is ever returned or persisted.
#[derive(Debug, Error)]
pub enum TrainError {
	/// The labeled sets overlap in score space: the worst "good" line does
	/// not score strictly above the best "bad" line, so no threshold can
	/// separate the classes on this data. The caller must supply
	/// better-curated corpora.
	#[error("calibration failed: min good score {min_good} <= max bad score {max_bad}")]
	Calibration { min_good: f64, max_bad: f64 },

	/// The corpus or a labeled set contained no lines.
	#[error("{0} set is empty")]
	EmptySet(&'static str),

	/// Reading a corpus file failed.
	#[error("corpus I/O error: {0}")]
	Io(#[from] std::io::Error),
}

/// Errors raised while loading or saving a model artifact.
///
/// Load failures are recoverable values, never panics: a missing or
/// corrupt artifact must not crash the host, but classification without a
/// valid model is meaningless, so callers should treat them as fatal to
/// their own session.
#[derive(Debug, Error)]
pub enum ModelError {
	/// The artifact could not be read or written.
	#[error("model artifact I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// The artifact bytes could not be decoded.
	#[error("malformed model artifact: {0}")]
	Decode(#[from] postcard::Error),

	/// The decoded matrix is not |alphabet| x |alphabet|.
	#[error("model matrix has {actual} cells, expected {expected}")]
	Dimensions { expected: usize, actual: usize },
}
