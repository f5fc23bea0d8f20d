// tests/codec_test.rs
//
// Capture codec boundary: byte-exact round trips, corruption handling, and
// archive spooling to disk.

use vibrocheckr::core::codec;
use vibrocheckr::core::AnalysisError;

#[test]
fn round_trip_arbitrary_bytes() {
    let cases: Vec<Vec<u8>> = vec![
        Vec::new(),
        vec![0u8],
        vec![0xff; 1024],
        (0..=255u8).cycle().take(10_000).collect(),
        b"time,accel_x,accel_y,accel_z\n0.0,0.1,0.2,9.8\n".to_vec(),
    ];

    for data in cases {
        let compressed = codec::compress(&data).unwrap();
        let restored = codec::decompress(&compressed).unwrap();
        assert_eq!(restored, data, "round trip must be byte-exact");
    }
}

#[test]
fn compression_actually_shrinks_repetitive_captures() {
    let csv = "0.001,0.125,0.250,9.810\n".repeat(4096);
    let compressed = codec::compress(csv.as_bytes()).unwrap();
    assert!(compressed.len() < csv.len() / 4);
}

#[test]
fn corrupted_frame_reports_codec_corruption() {
    let mut compressed = codec::compress(b"a healthy capture frame").unwrap();
    // Damage the frame header
    compressed[0] ^= 0xa5;
    let err = codec::decompress(&compressed).unwrap_err();
    assert!(matches!(err, AnalysisError::CodecCorruption(_)));
}

#[test]
fn archive_spool_to_disk_round_trips() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("capture.csv.zst");

    let raw = b"0.0,1.0,2.0,3.0\n0.01,1.1,2.1,3.1\n".repeat(128);
    let sink = std::fs::File::create(&path).expect("create");
    codec::compress_into(&raw, sink).unwrap();

    let spooled = std::fs::read(&path).expect("read");
    assert_eq!(codec::decompress(&spooled).unwrap(), raw);
}
