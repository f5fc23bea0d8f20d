//! Accelerometer capture ingestion
//!
//! The acquisition layer delivers a completed, ordered batch of timestamped
//! 3-axis samples before analysis begins. On disk that batch is a CSV file
//! (`time,accel_x,accel_y,accel_z`, `#`-prefixed comment lines tolerated),
//! optionally zstd-compressed as `.csv.zst` through the capture codec.

use log::debug;
use std::path::Path;

use super::codec;
use super::error::{AnalysisError, Result};

/// One accelerometer sample: monotonic timestamp in seconds plus raw
/// acceleration on the three sensor axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp: f64,
    pub accel: [f32; 3],
}

impl Sample {
    pub fn new(timestamp: f64, accel: [f32; 3]) -> Self {
        Self { timestamp, accel }
    }
}

/// Load a capture file, decompressing `.zst` transparently.
pub fn load_capture(path: &Path) -> Result<Vec<Sample>> {
    let raw = std::fs::read(path)?;
    let text = if path.extension().and_then(|e| e.to_str()) == Some("zst") {
        let decompressed = codec::decompress(&raw)?;
        String::from_utf8(decompressed).map_err(|e| AnalysisError::CaptureFormat {
            line: 0,
            reason: format!("decompressed capture is not UTF-8: {}", e),
        })?
    } else {
        String::from_utf8(raw).map_err(|e| AnalysisError::CaptureFormat {
            line: 0,
            reason: format!("capture is not UTF-8: {}", e),
        })?
    };

    let samples = parse_capture(&text)?;
    debug!(
        "loaded {} samples from {} ({:.2}s span)",
        samples.len(),
        path.display(),
        samples
            .last()
            .zip(samples.first())
            .map(|(last, first)| last.timestamp - first.timestamp)
            .unwrap_or(0.0)
    );
    Ok(samples)
}

/// Parse capture CSV text into samples.
///
/// Each data row is `time,accel_x,accel_y,accel_z`. Blank lines, lines
/// starting with `#`, and a leading non-numeric header row are skipped.
/// Anything else malformed fails the whole capture; a partially parsed
/// capture is worse than none.
pub fn parse_capture(text: &str) -> Result<Vec<Sample>> {
    let mut samples = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != 4 {
            // Tolerate a single header row like "time,accel_x,accel_y,accel_z"
            return Err(AnalysisError::CaptureFormat {
                line: idx + 1,
                reason: format!("expected 4 fields, got {}", fields.len()),
            });
        }

        if samples.is_empty() && fields[0].parse::<f64>().is_err() {
            continue; // header row
        }

        let parse_f64 = |s: &str| {
            s.parse::<f64>().map_err(|_| AnalysisError::CaptureFormat {
                line: idx + 1,
                reason: format!("not a number: {:?}", s),
            })
        };

        let timestamp = parse_f64(fields[0])?;
        let accel = [
            parse_f64(fields[1])? as f32,
            parse_f64(fields[2])? as f32,
            parse_f64(fields[3])? as f32,
        ];
        samples.push(Sample::new(timestamp, accel));
    }

    Ok(samples)
}

/// Serialize samples back to capture CSV (used by `--archive` spooling).
pub fn to_csv(samples: &[Sample]) -> String {
    let mut out = String::with_capacity(samples.len() * 32 + 32);
    out.push_str("time,accel_x,accel_y,accel_z\n");
    for s in samples {
        out.push_str(&format!(
            "{:.6},{},{},{}\n",
            s.timestamp, s.accel[0], s.accel[1], s.accel[2]
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_header_and_comments() {
        let text = "# adxl345 capture\ntime,accel_x,accel_y,accel_z\n0.000,1.0,2.0,3.0\n0.001,4.0,5.0,6.0\n";
        let samples = parse_capture(text).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].accel, [1.0, 2.0, 3.0]);
        assert!((samples[1].timestamp - 0.001).abs() < 1e-12);
    }

    #[test]
    fn test_malformed_row_fails_whole_capture() {
        let text = "0.000,1.0,2.0,3.0\n0.001,oops,5.0,6.0\n";
        let err = parse_capture(text).unwrap_err();
        match err {
            AnalysisError::CaptureFormat { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wrong_field_count_fails() {
        let text = "0.000,1.0,2.0\n";
        assert!(parse_capture(text).is_err());
    }

    #[test]
    fn test_csv_round_trip() {
        let samples = vec![
            Sample::new(0.0, [0.5, -0.25, 9.81]),
            Sample::new(0.01, [0.625, 0.0, 9.75]),
        ];
        let parsed = parse_capture(&to_csv(&samples)).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].accel, samples[1].accel);
    }
}
