//! Tapering window functions
//!
//! Applied to each analysis segment before the transform to reduce spectral
//! leakage at segment boundaries. Kaiser with beta = 8 is the default shape
//! for resonance work: sidelobes land well below the peak-candidate
//! threshold, so belt harmonics are not mistaken for leakage.

use std::f32::consts::PI;

/// Default Kaiser shape parameter.
pub const DEFAULT_KAISER_BETA: f32 = 8.0;

/// Window shapes supported by the spectrogram engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Taper {
    Hann,
    Kaiser(f32), // Beta parameter
}

impl Default for Taper {
    fn default() -> Self {
        Taper::Kaiser(DEFAULT_KAISER_BETA)
    }
}

/// Compute taper coefficients for a segment of `len` samples
pub fn taper_coefficients(len: usize, taper: Taper) -> Vec<f32> {
    if len == 0 {
        return Vec::new();
    }
    let n = (len - 1).max(1) as f32;
    (0..len)
        .map(|i| {
            let x = i as f32;
            match taper {
                Taper::Hann => 0.5 * (1.0 - (2.0 * PI * x / n).cos()),
                Taper::Kaiser(beta) => {
                    let alpha = n / 2.0;
                    let ratio = (x - alpha) / alpha;
                    let arg = beta * (1.0 - ratio * ratio).max(0.0).sqrt();
                    bessel_i0(arg) / bessel_i0(beta)
                }
            }
        })
        .collect()
}

/// Modified Bessel function I0 (for the Kaiser window)
fn bessel_i0(x: f32) -> f32 {
    let mut sum = 1.0f32;
    let mut term = 1.0f32;
    let x2 = x * x;

    for k in 1..50 {
        term *= x2 / (4.0 * k as f32 * k as f32);
        sum += term;
        if term < 1e-10 {
            break;
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kaiser_symmetric_and_peaked() {
        let w = taper_coefficients(65, Taper::default());
        assert!((w[32] - 1.0).abs() < 1e-6); // unity at center
        for i in 0..32 {
            assert!((w[i] - w[64 - i]).abs() < 1e-6);
        }
        assert!(w[0] < 0.01); // heavily attenuated edges
    }

    #[test]
    fn test_hann_window() {
        let w = taper_coefficients(5, Taper::Hann);
        assert!(w[0].abs() < 0.01);
        assert!((w[2] - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_degenerate_lengths() {
        assert!(taper_coefficients(0, Taper::default()).is_empty());
        assert_eq!(taper_coefficients(1, Taper::Hann).len(), 1);
    }
}
