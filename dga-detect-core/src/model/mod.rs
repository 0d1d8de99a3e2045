//! Top-level module for the gibberish detection system.
//!
//! This module provides a bigram-based statistical classifier, including:
//! - A fixed 27-symbol alphabet with normalization and n-gram extraction (`alphabet`)
//! - Smoothed bigram count accumulation (`counts`)
//! - The log-probability transition matrix and scorer (`transition_matrix`)
//! - Corpus training and threshold calibration (`trainer`)
//! - The persisted model artifact (`artifact`)
//! - Structural heuristics over raw labels (`features`)
//! - The combined verdict classifier (`detector`)

/// Fixed symbol set, input normalization and n-gram extraction.
///
/// Everything downstream operates on the normalized symbol stream this
/// module produces.
pub mod alphabet;

/// Smoothed bigram count accumulation.
///
/// A local accumulator seeded with an additive prior; partial accumulators
/// can be merged, which supports chunked parallel counting.
pub mod counts;

/// Log-probability transition matrix and geometric-mean scoring.
pub mod transition_matrix;

/// Corpus training and decision-threshold calibration.
///
/// One-shot batch computation producing the immutable model artifact.
pub mod trainer;

/// The persisted model: transition matrix plus calibrated threshold.
///
/// Handles artifact save/load and threshold-based scoring.
pub mod artifact;

/// Structural heuristics: entropy, consonant density, length.
pub mod features;

/// The combined classifier producing per-label verdicts.
pub mod detector;
