//! Per-capture analysis runs
//!
//! One run takes a completed sample batch and produces a `SessionReport`:
//! every configured direction goes through projection, spectrogram, and
//! peak detection; coupled layouts additionally correlate their belt pair.
//! Each direction's run is purely functional over the shared read-only
//! sample slice, so directions fan out across worker threads with no
//! coordination.

use chrono::Utc;
use log::{debug, info};
use rayon::prelude::*;

use crate::config::directions::Kinematics;
use crate::config::settings::AnalysisSettings;

use super::capture::Sample;
use super::correlation::CorrelationAnalyzer;
use super::error::{AnalysisError, Result};
use super::projector::project;
use super::report::{BeltPairReport, DirectionReport, SessionReport};
use super::resonance::ResonanceDetector;
use super::spectrogram::{Spectrogram, SpectrogramEngine};

/// Analyzer configured for one kinematic layout
pub struct VibrationAnalyzer {
    kinematics: Kinematics,
    settings: AnalysisSettings,
}

impl VibrationAnalyzer {
    pub fn new(kinematics: Kinematics) -> Self {
        Self {
            kinematics,
            settings: AnalysisSettings::default(),
        }
    }

    pub fn with_settings(kinematics: Kinematics, settings: AnalysisSettings) -> Self {
        Self {
            kinematics,
            settings,
        }
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Run the full pipeline over one capture batch.
    pub fn analyze(&self, samples: &[Sample]) -> Result<SessionReport> {
        let directions = self.kinematics.directions();
        info!(
            "analyzing {} samples across {} directions ({})",
            samples.len(),
            directions.len(),
            self.kinematics
        );

        let engine = SpectrogramEngine::new(self.settings.window_size, self.settings.overlap)
            .with_taper(self.settings.taper);
        let detector = ResonanceDetector::new(self.settings.min_amplitude_ratio);

        // Directions are independent over the shared read-only capture.
        let per_direction: Vec<(DirectionReport, Spectrogram)> = directions
            .par_iter()
            .map(|direction| {
                let series = project(samples, direction, self.settings.sampling_tolerance)?;
                let spectrogram = engine.compute(&series)?;
                let peaks = detector.detect(&spectrogram);
                debug!(
                    "{}: {} peak(s){}",
                    direction.name(),
                    peaks.as_slice().len(),
                    if peaks.is_silent() { " (silent)" } else { "" }
                );
                let report =
                    DirectionReport::new(direction.name().to_string(), series.sample_rate(), peaks);
                Ok::<_, AnalysisError>((report, spectrogram))
            })
            .collect::<Result<_>>()?;

        let belt_pairs = match self.kinematics.belt_pair() {
            Some((belt_a, belt_b)) => {
                let find = |name: &str| {
                    per_direction
                        .iter()
                        .find(|(r, _)| r.direction_name == name)
                        .map(|(_, s)| s)
                        .ok_or_else(|| {
                            AnalysisError::IncompatibleSpectra(format!(
                                "no spectrogram for belt {}",
                                name
                            ))
                        })
                };
                let spec_a = find(belt_a.name())?;
                let spec_b = find(belt_b.name())?;

                let result = CorrelationAnalyzer::new(self.settings.divergence_threshold)
                    .compare(&belt_a, spec_a, &belt_b, spec_b)?;
                info!(
                    "belt pair {}/{}: coefficient {:.3}, {} diverging bin(s)",
                    belt_a.name(),
                    belt_b.name(),
                    result.coefficient(),
                    result.diverging_frequencies.len()
                );
                vec![BeltPairReport::new(result)]
            }
            None => Vec::new(),
        };

        Ok(SessionReport {
            generated_at: Utc::now(),
            settings: self.settings,
            directions: per_direction.into_iter().map(|(r, _)| r).collect(),
            belt_pairs,
        })
    }
}
