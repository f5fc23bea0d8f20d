//! Belt-pair frequency-response comparison
//!
//! Two mechanically coupled belts should answer the same excitation with
//! the same spectrum. The comparison produces both a single Pearson
//! coefficient over the averaged spectra and the list of frequencies where
//! the two responses diverge locally, so uneven tension shows up even when
//! the overall shapes still correlate well.

use serde::Serialize;

use crate::config::directions::AxisDirection;

use super::dsp::stats;
use super::error::{AnalysisError, Result};
use super::spectrogram::Spectrogram;

/// Pearson correlation outcome for a belt pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Correlation {
    /// Coefficient in [-1, 1]
    Coefficient(f32),
    /// At least one spectrum had zero variance; correlation is undefined
    /// for a constant signal
    Undefined,
}

impl Correlation {
    /// Scalar form for the reporting boundary: `Undefined` maps to 0.0.
    pub fn value(&self) -> f32 {
        match self {
            Correlation::Coefficient(c) => *c,
            Correlation::Undefined => 0.0,
        }
    }
}

/// Result of comparing two belts' frequency responses
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationResult {
    pub direction_a: AxisDirection,
    pub direction_b: AxisDirection,
    pub correlation: Correlation,
    /// Frequencies (ascending, Hz) where the normalized magnitude
    /// difference exceeds the divergence threshold
    pub diverging_frequencies: Vec<f32>,
}

impl CorrelationResult {
    /// Coefficient with `Undefined` mapped to 0.0.
    pub fn coefficient(&self) -> f32 {
        self.correlation.value()
    }
}

/// Bins carrying less than this fraction of the stronger belt's peak
/// magnitude are spectral-leakage noise; comparing them bin-by-bin would
/// flag divergence everywhere the capture is quiet.
const DIVERGENCE_NOISE_FLOOR: f32 = 0.01;

/// Compares paired belt spectrograms for mechanical asymmetry
pub struct CorrelationAnalyzer {
    divergence_threshold: f32,
}

impl CorrelationAnalyzer {
    pub fn new(divergence_threshold: f32) -> Self {
        Self {
            divergence_threshold,
        }
    }

    /// Compare two spectrograms computed over the same frequency axis.
    pub fn compare(
        &self,
        direction_a: &AxisDirection,
        spec_a: &Spectrogram,
        direction_b: &AxisDirection,
        spec_b: &Spectrogram,
    ) -> Result<CorrelationResult> {
        if spec_a.frequencies() != spec_b.frequencies() {
            return Err(AnalysisError::IncompatibleSpectra(format!(
                "frequency axes differ ({} vs {} bins); both belts must be \
                 analyzed with the same window size and sample rate",
                spec_a.frequencies().len(),
                spec_b.frequencies().len()
            )));
        }

        let avg_a = spec_a.time_averaged_magnitude();
        let avg_b = spec_b.time_averaged_magnitude();

        let correlation = match stats::pearson(&avg_a, &avg_b) {
            Some(r) => Correlation::Coefficient(r),
            None => Correlation::Undefined,
        };

        let scale = avg_a
            .iter()
            .zip(&avg_b)
            .map(|(&a, &b)| a.max(b))
            .fold(0.0f32, f32::max);
        let noise_floor = DIVERGENCE_NOISE_FLOOR * scale;

        let diverging_frequencies = spec_a
            .frequencies()
            .iter()
            .zip(avg_a.iter().zip(&avg_b))
            .filter(|(_, (&a, &b))| {
                let larger = a.max(b);
                larger > noise_floor && (a - b).abs() > self.divergence_threshold * larger
            })
            .map(|(&f, _)| f)
            .collect();

        Ok(CorrelationResult {
            direction_a: direction_a.clone(),
            direction_b: direction_b.clone(),
            correlation,
            diverging_frequencies,
        })
    }
}
