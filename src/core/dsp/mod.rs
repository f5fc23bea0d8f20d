//! Digital signal processing utilities

pub mod fft;
pub mod stats;
pub mod windows;

pub use fft::SpectrumProcessor;
pub use windows::{Taper, DEFAULT_KAISER_BETA};
