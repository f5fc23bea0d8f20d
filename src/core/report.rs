//! Reporting boundary
//!
//! Plain serializable structures handed to whatever rendering layer sits on
//! top: per-direction peak lists and per-belt-pair correlation outcomes,
//! nothing that requires this crate's types to interpret.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::settings::AnalysisSettings;

use super::correlation::CorrelationResult;
use super::resonance::{Peaks, ResonancePeak};

/// Analysis outcome for a single mechanical direction
#[derive(Debug, Clone, Serialize)]
pub struct DirectionReport {
    pub direction_name: String,
    pub sample_rate: f32,
    /// True when the capture carried no spectral energy in this direction
    pub silent: bool,
    /// Peaks ordered by descending amplitude; empty for a silent capture
    pub peaks: Vec<ResonancePeak>,
}

impl DirectionReport {
    pub fn new(direction_name: String, sample_rate: f32, peaks: Peaks) -> Self {
        Self {
            direction_name,
            sample_rate,
            silent: peaks.is_silent(),
            peaks: peaks.as_slice().to_vec(),
        }
    }
}

/// How well a belt pair's responses match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TensionMatch {
    /// Responses track closely; tension looks even
    Good,
    /// Noticeable asymmetry worth a second capture
    Fair,
    /// Strong asymmetry; check belt tension and pulleys
    Poor,
}

impl TensionMatch {
    /// Classify a correlation coefficient. Thresholds follow the rule of
    /// thumb used for belt comparison: above 0.9 the belts are considered
    /// matched, below 0.7 the asymmetry is mechanical, not noise.
    pub fn from_coefficient(coefficient: f32) -> Self {
        if coefficient >= 0.9 {
            TensionMatch::Good
        } else if coefficient >= 0.7 {
            TensionMatch::Fair
        } else {
            TensionMatch::Poor
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TensionMatch::Good => "✓",
            TensionMatch::Fair => "~",
            TensionMatch::Poor => "✗",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TensionMatch::Good => "belt responses match",
            TensionMatch::Fair => "mild belt asymmetry",
            TensionMatch::Poor => "significant belt asymmetry",
        }
    }
}

/// Correlation outcome for one analyzed belt pair
#[derive(Debug, Clone, Serialize)]
pub struct BeltPairReport {
    pub belt_pair: (String, String),
    pub verdict: TensionMatch,
    pub correlation: CorrelationResult,
}

impl BeltPairReport {
    pub fn new(correlation: CorrelationResult) -> Self {
        Self {
            belt_pair: (
                correlation.direction_a.name().to_string(),
                correlation.direction_b.name().to_string(),
            ),
            verdict: TensionMatch::from_coefficient(correlation.coefficient()),
            correlation,
        }
    }
}

/// Complete result of one analysis run
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub generated_at: DateTime<Utc>,
    pub settings: AnalysisSettings,
    pub directions: Vec<DirectionReport>,
    pub belt_pairs: Vec<BeltPairReport>,
}

impl SessionReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_thresholds() {
        assert_eq!(TensionMatch::from_coefficient(0.97), TensionMatch::Good);
        assert_eq!(TensionMatch::from_coefficient(0.8), TensionMatch::Fair);
        assert_eq!(TensionMatch::from_coefficient(0.3), TensionMatch::Poor);
        assert_eq!(TensionMatch::from_coefficient(0.0), TensionMatch::Poor);
    }
}
