//! Resonance peak extraction
//!
//! Works on the time-averaged magnitude spectrum so only frequencies that
//! persist across a majority of segments register as peaks; transient rattle
//! in a single segment averages away. A capture with no energy at all is a
//! meaningful outcome (`Peaks::Silent`), not an error.

use serde::Serialize;

use super::spectrogram::Spectrogram;

/// A persistent local maximum in the averaged spectrum
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResonancePeak {
    /// Peak center frequency in Hz
    pub frequency: f32,
    /// Averaged magnitude at the peak bin
    pub amplitude: f32,
    /// Width between the two half-power crossings, Hz
    pub half_power_width: f32,
}

/// Peak detection outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Peaks {
    /// No spectral energy at all (silent capture)
    Silent,
    /// Peaks ordered by descending amplitude
    Detected(Vec<ResonancePeak>),
}

impl Peaks {
    pub fn is_silent(&self) -> bool {
        matches!(self, Peaks::Silent)
    }

    /// Detected peaks, empty for a silent capture.
    pub fn as_slice(&self) -> &[ResonancePeak] {
        match self {
            Peaks::Silent => &[],
            Peaks::Detected(peaks) => peaks,
        }
    }
}

/// Extracts stable resonance peaks from a spectrogram
pub struct ResonanceDetector {
    min_amplitude_ratio: f32,
}

impl ResonanceDetector {
    pub fn new(min_amplitude_ratio: f32) -> Self {
        Self {
            min_amplitude_ratio,
        }
    }

    /// Detect peaks in `spectrogram`, ordered by descending amplitude.
    pub fn detect(&self, spectrogram: &Spectrogram) -> Peaks {
        let avg = spectrogram.time_averaged_magnitude();
        let frequencies = spectrogram.frequencies();
        let bin_width = spectrogram.bin_width();

        let max_mag = avg.iter().cloned().fold(0.0f32, f32::max);
        if max_mag <= 0.0 {
            return Peaks::Silent;
        }

        let floor = self.min_amplitude_ratio * max_mag;

        // Strict local maxima above the noise floor. Edge bins have only one
        // neighbor and never qualify.
        let mut candidates: Vec<(usize, f32)> = Vec::new();
        for i in 1..avg.len().saturating_sub(1) {
            if avg[i] > avg[i - 1] && avg[i] > avg[i + 1] && avg[i] > floor {
                candidates.push((i, avg[i]));
            }
        }

        // Merge peaks closer than two bin widths, keeping the stronger one;
        // an amplitude tie keeps the lower frequency.
        candidates.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        let mut kept: Vec<(usize, f32)> = Vec::new();
        for (bin, amp) in candidates {
            let too_close = kept
                .iter()
                .any(|&(kept_bin, _)| bin.abs_diff(kept_bin) <= 2);
            if !too_close {
                kept.push((bin, amp));
            }
        }

        let peaks: Vec<ResonancePeak> = kept
            .into_iter()
            .map(|(bin, amp)| ResonancePeak {
                frequency: frequencies[bin],
                amplitude: amp,
                half_power_width: half_power_width(&avg, frequencies, bin, bin_width),
            })
            .collect();

        Peaks::Detected(peaks)
    }
}

/// Width between the half-power crossings around `peak_bin`, interpolating
/// linearly between the last bin above half power and the first below it.
/// A side that never crosses clamps at the spectrum edge.
fn half_power_width(avg: &[f32], frequencies: &[f32], peak_bin: usize, bin_width: f32) -> f32 {
    let half = avg[peak_bin] / 2.0;

    let right = {
        let mut crossing = frequencies[frequencies.len() - 1];
        for j in peak_bin + 1..avg.len() {
            if avg[j] < half {
                let prev = avg[j - 1];
                let frac = (prev - half) / (prev - avg[j]);
                crossing = frequencies[j - 1] + frac * bin_width;
                break;
            }
        }
        crossing
    };

    let left = {
        let mut crossing = frequencies[0];
        for j in (0..peak_bin).rev() {
            if avg[j] < half {
                let prev = avg[j + 1];
                let frac = (prev - half) / (prev - avg[j]);
                crossing = frequencies[j + 1] - frac * bin_width;
                break;
            }
        }
        crossing
    };

    (right - left).max(0.0)
}
