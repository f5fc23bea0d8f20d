//! Real-input FFT with taper application
//!
//! Wraps a `realfft` plan so repeated segments of the same length reuse the
//! plan and scratch buffers. Real input yields exactly `len/2 + 1` output
//! bins, which is the frequency-axis contract of the spectrogram engine.

use num_complex::Complex;
use realfft::{RealFftPlanner, RealToComplex};
use std::sync::Arc;

use super::windows::{taper_coefficients, Taper};

/// Magnitude spectrum computation for fixed-length real segments
pub struct SpectrumProcessor {
    fft: Arc<dyn RealToComplex<f32>>,
    taper: Vec<f32>,
    input: Vec<f32>,
    output: Vec<Complex<f32>>,
    segment_len: usize,
}

impl SpectrumProcessor {
    pub fn new(segment_len: usize, taper: Taper) -> Self {
        let mut planner = RealFftPlanner::<f32>::new();
        let fft = planner.plan_fft_forward(segment_len);
        let input = fft.make_input_vec();
        let output = fft.make_output_vec();
        Self {
            fft,
            taper: taper_coefficients(segment_len, taper),
            input,
            output,
            segment_len,
        }
    }

    /// Magnitude spectrum of one tapered segment. `segment` must be exactly
    /// `segment_len` samples; the spectrogram engine guarantees this by
    /// dropping the final partial segment.
    pub fn magnitude_spectrum(&mut self, segment: &[f32]) -> Vec<f32> {
        debug_assert_eq!(segment.len(), self.segment_len);

        for ((dst, &s), &w) in self.input.iter_mut().zip(segment).zip(&self.taper) {
            *dst = s * w;
        }

        self.fft
            .process(&mut self.input, &mut self.output)
            .expect("buffer sizes are fixed by the planner");

        self.output.iter().map(|c| c.norm()).collect()
    }

    /// Number of frequency bins produced per segment (`segment_len/2 + 1`).
    pub fn num_bins(&self) -> usize {
        self.segment_len / 2 + 1
    }

    pub fn segment_len(&self) -> usize {
        self.segment_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_bin_count() {
        let mut p = SpectrumProcessor::new(64, Taper::default());
        let segment = vec![0.0f32; 64];
        assert_eq!(p.magnitude_spectrum(&segment).len(), 33);
        assert_eq!(p.num_bins(), 33);
    }

    #[test]
    fn test_tone_lands_in_expected_bin() {
        // 8 cycles over 64 samples lands exactly in bin 8
        let segment: Vec<f32> = (0..64)
            .map(|i| (2.0 * PI * 8.0 * i as f32 / 64.0).sin())
            .collect();
        let mut p = SpectrumProcessor::new(64, Taper::Hann);
        let mags = p.magnitude_spectrum(&segment);

        let peak_bin = mags
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(peak_bin, 8);
    }
}
