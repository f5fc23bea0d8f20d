//! Analysis settings with documented defaults
//!
//! The tolerance constants are empirically chosen starting points, so every
//! one of them stays overridable; nothing in the core hard-codes them.

use serde::Serialize;

use crate::core::dsp::windows::{Taper, DEFAULT_KAISER_BETA};

/// Default STFT window length in samples.
pub const DEFAULT_WINDOW_SIZE: usize = 256;
/// Default fractional overlap between adjacent windows.
pub const DEFAULT_OVERLAP: f32 = 0.5;
/// Peak candidates below this fraction of the strongest bin are noise.
pub const DEFAULT_MIN_AMPLITUDE_RATIO: f32 = 0.1;
/// Maximum coefficient of variation of inter-sample intervals.
pub const DEFAULT_SAMPLING_TOLERANCE: f32 = 0.05;
/// Fraction of the larger magnitude beyond which two belts diverge.
pub const DEFAULT_DIVERGENCE_THRESHOLD: f32 = 0.2;

/// Tunable parameters consumed by the analysis pipeline
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnalysisSettings {
    /// STFT window length in samples (>= 4, <= series length)
    pub window_size: usize,
    /// Fractional overlap between adjacent windows, in [0, 1)
    pub overlap: f32,
    /// Minimum peak amplitude as a fraction of the strongest bin
    pub min_amplitude_ratio: f32,
    /// Maximum interval coefficient of variation accepted as uniform
    pub sampling_tolerance: f32,
    /// Normalized magnitude difference beyond which belts diverge
    pub divergence_threshold: f32,
    /// Taper applied to each analysis segment
    #[serde(skip)]
    pub taper: Taper,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            overlap: DEFAULT_OVERLAP,
            min_amplitude_ratio: DEFAULT_MIN_AMPLITUDE_RATIO,
            sampling_tolerance: DEFAULT_SAMPLING_TOLERANCE,
            divergence_threshold: DEFAULT_DIVERGENCE_THRESHOLD,
            taper: Taper::Kaiser(DEFAULT_KAISER_BETA),
        }
    }
}

impl AnalysisSettings {
    pub fn window_size(mut self, size: usize) -> Self {
        self.window_size = size;
        self
    }

    pub fn overlap(mut self, overlap: f32) -> Self {
        self.overlap = overlap;
        self
    }

    pub fn min_amplitude_ratio(mut self, ratio: f32) -> Self {
        self.min_amplitude_ratio = ratio;
        self
    }

    pub fn sampling_tolerance(mut self, tolerance: f32) -> Self {
        self.sampling_tolerance = tolerance;
        self
    }

    pub fn divergence_threshold(mut self, threshold: f32) -> Self {
        self.divergence_threshold = threshold;
        self
    }

    pub fn taper(mut self, taper: Taper) -> Self {
        self.taper = taper;
        self
    }
}
