//! Windowed time-frequency magnitude estimation
//!
//! Slides a fixed-length tapered segment across a projected series and
//! records the magnitude spectrum of each segment. The final partial
//! segment is dropped rather than zero-padded: padding would inject
//! spurious low-frequency energy exactly where belt resonances live.

use log::debug;

use super::dsp::windows::Taper;
use super::dsp::SpectrumProcessor;
use super::error::{AnalysisError, Result};
use super::projector::ProjectedSeries;

/// Magnitude over time and frequency for one projected series
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrogram {
    frequencies: Vec<f32>,
    time_bins: Vec<f32>,
    magnitude: Vec<Vec<f32>>,
}

impl Spectrogram {
    /// Frequency axis in Hz, strictly ascending, `window_size/2 + 1` bins.
    pub fn frequencies(&self) -> &[f32] {
        &self.frequencies
    }

    /// Center time of each analysis segment, seconds from series start.
    pub fn time_bins(&self) -> &[f32] {
        &self.time_bins
    }

    /// One magnitude row per time bin, one column per frequency bin.
    pub fn magnitude(&self) -> &[Vec<f32>] {
        &self.magnitude
    }

    /// Width of one frequency bin in Hz.
    pub fn bin_width(&self) -> f32 {
        if self.frequencies.len() < 2 {
            return 0.0;
        }
        self.frequencies[1] - self.frequencies[0]
    }

    /// Magnitude per frequency bin averaged across all time bins. This is
    /// the stable view the peak detector and the belt comparator work on;
    /// averaging suppresses transient artifacts that only appear in a few
    /// segments.
    pub fn time_averaged_magnitude(&self) -> Vec<f32> {
        let bins = self.frequencies.len();
        let mut avg = vec![0.0f32; bins];
        if self.magnitude.is_empty() {
            return avg;
        }
        for row in &self.magnitude {
            for (acc, &m) in avg.iter_mut().zip(row) {
                *acc += m;
            }
        }
        let n = self.magnitude.len() as f32;
        for acc in &mut avg {
            *acc /= n;
        }
        avg
    }
}

/// STFT engine with fixed window length and overlap
pub struct SpectrogramEngine {
    window_size: usize,
    overlap: f32,
    taper: Taper,
}

impl SpectrogramEngine {
    pub fn new(window_size: usize, overlap: f32) -> Self {
        Self {
            window_size,
            overlap,
            taper: Taper::default(),
        }
    }

    pub fn with_taper(mut self, taper: Taper) -> Self {
        self.taper = taper;
        self
    }

    /// Compute the spectrogram of `series`.
    ///
    /// Deterministic: identical inputs always produce bit-identical grids.
    pub fn compute(&self, series: &ProjectedSeries) -> Result<Spectrogram> {
        let n = series.len();
        if self.window_size < 4 {
            return Err(AnalysisError::InvalidParameter(format!(
                "window_size must be >= 4, got {}",
                self.window_size
            )));
        }
        if self.window_size > n {
            return Err(AnalysisError::InvalidParameter(format!(
                "window_size {} exceeds series length {}",
                self.window_size, n
            )));
        }
        if !(0.0..1.0).contains(&self.overlap) {
            return Err(AnalysisError::InvalidParameter(format!(
                "overlap must be in [0, 1), got {}",
                self.overlap
            )));
        }

        let step = ((self.window_size as f32) * (1.0 - self.overlap)).round() as usize;
        let step = step.max(1);
        let sample_rate = series.sample_rate();

        let mut processor = SpectrumProcessor::new(self.window_size, self.taper);
        let mut magnitude = Vec::new();
        let mut time_bins = Vec::new();

        let values = series.values();
        let mut start = 0;
        while start + self.window_size <= n {
            let segment = &values[start..start + self.window_size];
            magnitude.push(processor.magnitude_spectrum(segment));
            let center = start as f32 + self.window_size as f32 / 2.0;
            time_bins.push(center / sample_rate);
            start += step;
        }

        let resolution = sample_rate / self.window_size as f32;
        let frequencies: Vec<f32> = (0..processor.num_bins())
            .map(|i| i as f32 * resolution)
            .collect();

        debug!(
            "spectrogram for {}: {} segments x {} bins (step {}, {:.2} Hz resolution)",
            series.direction().name(),
            time_bins.len(),
            frequencies.len(),
            step,
            resolution
        );

        Ok(Spectrogram {
            frequencies,
            time_bins,
            magnitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::directions::standard_direction;
    use crate::core::capture::Sample;
    use crate::core::projector::project;
    use std::f64::consts::PI;

    fn sine_series(n: usize, rate: f64, freq: f64) -> ProjectedSeries {
        let samples: Vec<Sample> = (0..n)
            .map(|i| {
                let t = i as f64 / rate;
                Sample::new(t, [(2.0 * PI * freq * t).sin() as f32, 0.0, 0.0])
            })
            .collect();
        let dir = standard_direction("axis_x").unwrap();
        project(&samples, &dir, 0.05).unwrap()
    }

    #[test]
    fn test_frequency_axis_shape() {
        let series = sine_series(200, 100.0, 25.0);
        let spec = SpectrogramEngine::new(64, 0.5).compute(&series).unwrap();

        assert_eq!(spec.frequencies().len(), 33); // 64/2 + 1
        assert!((spec.frequencies()[32] - 50.0).abs() < 1e-3); // Nyquist
        for pair in spec.frequencies().windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_grid_invariants() {
        let series = sine_series(300, 200.0, 40.0);
        let spec = SpectrogramEngine::new(128, 0.25).compute(&series).unwrap();

        assert_eq!(spec.magnitude().len(), spec.time_bins().len());
        for row in spec.magnitude() {
            assert_eq!(row.len(), spec.frequencies().len());
            assert!(row.iter().all(|&m| m >= 0.0));
        }
    }

    #[test]
    fn test_partial_final_segment_dropped() {
        // 200 samples, window 64, no overlap: segments at 0, 64, 128; the
        // remainder at 192 is 8 samples short and must not appear.
        let series = sine_series(200, 100.0, 10.0);
        let spec = SpectrogramEngine::new(64, 0.0).compute(&series).unwrap();
        assert_eq!(spec.time_bins().len(), 3);
    }

    #[test]
    fn test_deterministic() {
        let series = sine_series(256, 100.0, 25.0);
        let engine = SpectrogramEngine::new(64, 0.5);
        let a = engine.compute(&series).unwrap();
        let b = engine.compute(&series).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_window_larger_than_series_rejected() {
        let series = sine_series(50, 100.0, 10.0);
        assert!(matches!(
            SpectrogramEngine::new(64, 0.5).compute(&series),
            Err(AnalysisError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_tiny_window_and_bad_overlap_rejected() {
        let series = sine_series(50, 100.0, 10.0);
        assert!(SpectrogramEngine::new(2, 0.5).compute(&series).is_err());
        assert!(SpectrogramEngine::new(16, 1.0).compute(&series).is_err());
        assert!(SpectrogramEngine::new(16, -0.1).compute(&series).is_err());
    }
}
