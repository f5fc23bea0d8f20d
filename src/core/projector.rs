//! Projection of 3-axis samples onto a mechanical direction
//!
//! The projector turns a raw capture into the 1-D scalar series the spectral
//! stages consume. It is a pure function of its inputs: the same capture can
//! be projected onto every configured direction concurrently, because no
//! stage ever mutates the shared sample slice.

use log::debug;

use crate::config::directions::AxisDirection;

use super::capture::Sample;
use super::dsp::stats;
use super::error::{AnalysisError, Result};

/// A capture projected onto one direction, with its derived sample rate
#[derive(Debug, Clone)]
pub struct ProjectedSeries {
    direction: AxisDirection,
    values: Vec<f32>,
    sample_rate: f32,
}

impl ProjectedSeries {
    pub fn direction(&self) -> &AxisDirection {
        &self.direction
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Project `samples` onto `direction`.
///
/// Each output value is the dot product of the sample's acceleration vector
/// with the direction's unit vector, so the transform is linear and
/// order-preserving. The sample rate is derived from the median inter-sample
/// interval; spacing whose coefficient of variation exceeds
/// `sampling_tolerance` fails instead of being resampled.
pub fn project(
    samples: &[Sample],
    direction: &AxisDirection,
    sampling_tolerance: f32,
) -> Result<ProjectedSeries> {
    if samples.len() < 2 {
        return Err(AnalysisError::InsufficientData {
            context: "projection needs at least two samples to derive a rate",
            got: samples.len(),
            need: 2,
        });
    }

    let mut intervals = Vec::with_capacity(samples.len() - 1);
    for pair in samples.windows(2) {
        let dt = pair[1].timestamp - pair[0].timestamp;
        if dt <= 0.0 {
            return Err(AnalysisError::IrregularSampling {
                reason: "timestamps are not strictly increasing",
                cv: f32::INFINITY,
                tolerance: sampling_tolerance,
            });
        }
        intervals.push(dt as f32);
    }

    let cv = stats::coefficient_of_variation(&intervals);
    if cv > sampling_tolerance {
        return Err(AnalysisError::IrregularSampling {
            reason: "inter-sample spacing is not uniform",
            cv,
            tolerance: sampling_tolerance,
        });
    }

    let median_interval = stats::median(&intervals);
    let sample_rate = 1.0 / median_interval;

    let [ux, uy, uz] = direction.unit_vector();
    let values: Vec<f32> = samples
        .iter()
        .map(|s| s.accel[0] * ux + s.accel[1] * uy + s.accel[2] * uz)
        .collect();

    debug!(
        "projected {} samples onto {} at {:.1} Hz (interval CV {:.4})",
        values.len(),
        direction.name(),
        sample_rate,
        cv
    );

    Ok(ProjectedSeries {
        direction: direction.clone(),
        values,
        sample_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::directions::standard_direction;

    fn uniform_samples(n: usize, rate: f64) -> Vec<Sample> {
        (0..n)
            .map(|i| {
                let t = i as f64 / rate;
                Sample::new(t, [t.sin() as f32, (2.0 * t).cos() as f32, 0.25])
            })
            .collect()
    }

    #[test]
    fn test_single_sample_is_insufficient() {
        let dir = standard_direction("axis_x").unwrap();
        let samples = uniform_samples(1, 100.0);
        assert!(matches!(
            project(&samples, &dir, 0.05),
            Err(AnalysisError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_negated_direction_negates_values() {
        let dir = standard_direction("belt_a").unwrap();
        let samples = uniform_samples(64, 100.0);

        let forward = project(&samples, &dir, 0.05).unwrap();
        let backward = project(&samples, &dir.negated(), 0.05).unwrap();

        for (f, b) in forward.values().iter().zip(backward.values()) {
            assert!((f + b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_sample_rate_from_median_interval() {
        let samples = uniform_samples(100, 250.0);
        let dir = standard_direction("axis_y").unwrap();
        let series = project(&samples, &dir, 0.05).unwrap();
        assert!((series.sample_rate() - 250.0).abs() < 0.5);
    }

    #[test]
    fn test_out_of_order_timestamps_rejected() {
        let dir = standard_direction("axis_x").unwrap();
        let mut samples = uniform_samples(10, 100.0);
        samples.swap(3, 4);
        assert!(matches!(
            project(&samples, &dir, 0.05),
            Err(AnalysisError::IrregularSampling { .. })
        ));
    }

    #[test]
    fn test_duplicate_timestamps_rejected() {
        let dir = standard_direction("axis_x").unwrap();
        let mut samples = uniform_samples(10, 100.0);
        samples[5].timestamp = samples[4].timestamp;
        assert!(project(&samples, &dir, 0.05).is_err());
    }

    #[test]
    fn test_jitter_beyond_tolerance_rejected() {
        let dir = standard_direction("axis_x").unwrap();
        let samples: Vec<Sample> = (0..50)
            .map(|i| {
                let jitter = if i % 2 == 0 { 0.0 } else { 0.004 };
                Sample::new(i as f64 * 0.01 + jitter, [1.0, 0.0, 0.0])
            })
            .collect();
        assert!(matches!(
            project(&samples, &dir, 0.05),
            Err(AnalysisError::IrregularSampling { reason: _, cv, .. }) if cv > 0.05
        ));
    }

    #[test]
    fn test_small_jitter_within_tolerance_accepted() {
        let dir = standard_direction("axis_x").unwrap();
        let samples: Vec<Sample> = (0..50)
            .map(|i| {
                let jitter = if i % 2 == 0 { 0.0 } else { 0.0001 };
                Sample::new(i as f64 * 0.01 + jitter, [1.0, 0.0, 0.0])
            })
            .collect();
        let series = project(&samples, &dir, 0.05).unwrap();
        assert!((series.sample_rate() - 100.0).abs() < 5.0);
    }
}
