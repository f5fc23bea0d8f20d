//! Vibrocheckr - Diagnose mechanical vibration in 3D-printer motion systems
//!
//! Analyzes accelerometer captures to find the resonance frequencies used to
//! tune motion-smoothing filters, and to localize which mechanical element
//! (belt, axis, frame) produces unwanted vibration.
//!
//! ## Pipeline
//!
//! Raw 3-axis samples are projected onto named mechanical directions
//! (physical axes, belt diagonals), each projection goes through a windowed
//! time-frequency estimate, resonance peaks are extracted from the averaged
//! spectrum, and coupled belt pairs are cross-correlated to expose tension
//! asymmetry. Every stage is a pure function over the shared read-only
//! capture, so directions are analyzed in parallel with no coordination.
//!
//! ## Module Structure
//!
//! - `core` - projection, spectrogram, peak detection, belt correlation,
//!   capture ingestion, and the persistence codec
//! - `cli` - command-line front-end
//! - `config` - direction tables, kinematics catalogs, analysis settings
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vibrocheckr::config::Kinematics;
//! use vibrocheckr::core::{capture, VibrationAnalyzer};
//!
//! let samples = capture::load_capture(path)?;
//! let report = VibrationAnalyzer::new(Kinematics::Corexy).analyze(&samples)?;
//!
//! for dir in &report.directions {
//!     println!("{}: {} peak(s)", dir.direction_name, dir.peaks.len());
//! }
//! ```
//!
//! ## Degenerate captures
//!
//! A silent capture yields `Peaks::Silent` and a zero-variance spectrum
//! yields `Correlation::Undefined` - both are documented outcomes, never
//! errors. Data-quality failures (too few samples, irregular spacing,
//! out-of-order timestamps) fail eagerly so the caller can re-acquire.

// Core analysis functionality
pub mod core;

// Command-line interface
pub mod cli;

// Direction tables and analysis settings
pub mod config;

// Re-export commonly used types at crate root for convenience
pub use config::{AnalysisSettings, AxisDirection, Kinematics};
pub use core::{
    AnalysisError, BeltPairReport, Correlation, CorrelationAnalyzer, CorrelationResult,
    DirectionReport, Peaks, ProjectedSeries, ResonanceDetector, ResonancePeak, Sample,
    SessionReport, Spectrogram, SpectrogramEngine, TensionMatch, VibrationAnalyzer,
};
