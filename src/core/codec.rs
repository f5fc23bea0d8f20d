//! Capture persistence codec
//!
//! Lossless, frame-delimited compression for raw capture bytes so long
//! accelerometer sessions can be archived and reprocessed offline. This is
//! a pass-through persistence concern: the analysis pipeline never sees
//! compressed data.

use std::io::Write;

use super::error::{AnalysisError, Result};

/// Zstd compression level for archived captures.
const ZSTD_LEVEL: i32 = 3;

/// Compress raw capture bytes into a zstd frame.
pub fn compress(raw: &[u8]) -> Result<Vec<u8>> {
    zstd::encode_all(raw, ZSTD_LEVEL)
        .map_err(|e| AnalysisError::CodecCorruption(format!("encode failed: {}", e)))
}

/// Decompress a zstd frame back to the original bytes.
///
/// Round trip is byte-exact; a malformed or truncated frame surfaces as
/// `CodecCorruption` rather than partial output.
pub fn decompress(frames: &[u8]) -> Result<Vec<u8>> {
    zstd::decode_all(frames)
        .map_err(|e| AnalysisError::CodecCorruption(format!("malformed frame: {}", e)))
}

/// Streaming variant: spool raw capture bytes into `sink` as a zstd frame.
/// Used by `--archive` so multi-minute captures never need a second
/// in-memory copy.
pub fn compress_into<W: Write>(raw: &[u8], sink: W) -> Result<()> {
    let mut encoder = zstd::stream::Encoder::new(sink, ZSTD_LEVEL)
        .map_err(|e| AnalysisError::CodecCorruption(format!("encoder init failed: {}", e)))?;
    encoder.write_all(raw)?;
    encoder
        .finish()
        .map_err(|e| AnalysisError::CodecCorruption(format!("encode failed: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_is_byte_exact() {
        let data: Vec<u8> = (0..4096u32).map(|i| (i * 31 % 251) as u8).collect();
        let compressed = compress(&data).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn test_empty_input_round_trips() {
        let compressed = compress(&[]).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_garbage_frame_is_corruption() {
        let err = decompress(b"not a zstd frame").unwrap_err();
        assert!(matches!(err, AnalysisError::CodecCorruption(_)));
    }

    #[test]
    fn test_truncated_frame_is_corruption() {
        let compressed = compress(b"a capture that will be cut short").unwrap();
        let truncated = &compressed[..compressed.len() / 2];
        assert!(decompress(truncated).is_err());
    }

    #[test]
    fn test_streaming_matches_one_shot() {
        let data = b"time,accel_x,accel_y,accel_z\n0.0,1.0,2.0,3.0\n".repeat(64);
        let mut spooled = Vec::new();
        compress_into(&data, &mut spooled).unwrap();
        assert_eq!(decompress(&spooled).unwrap(), data);
    }
}
