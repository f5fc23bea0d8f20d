//! Error taxonomy for the analysis core
//!
//! Every error is raised eagerly at the boundary of the offending operation;
//! no component retries internally or returns partial results. Data-quality
//! failures (too few samples, irregular spacing) must reach the caller, who
//! decides whether to re-run the capture.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Too few samples for the requested transform.
    #[error("insufficient data: {context} (got {got}, need at least {need})")]
    InsufficientData {
        context: &'static str,
        got: usize,
        need: usize,
    },

    /// Timestamp spacing fails the uniformity tolerance.
    #[error("irregular sampling: {reason} (interval CV {cv:.4}, tolerance {tolerance:.4})")]
    IrregularSampling {
        reason: &'static str,
        cv: f32,
        tolerance: f32,
    },

    /// Out-of-range window/overlap/ratio argument.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Two spectrograms with mismatched frequency axes cannot be compared.
    #[error("incompatible spectra: {0}")]
    IncompatibleSpectra(String),

    /// Decompression encountered a malformed frame.
    #[error("capture codec corruption: {0}")]
    CodecCorruption(String),

    /// A capture file could not be parsed into samples.
    #[error("capture format error at line {line}: {reason}")]
    CaptureFormat { line: usize, reason: String },

    #[error("capture i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
