//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

use crate::config::directions::Kinematics;
use crate::config::settings::{self, AnalysisSettings};
use crate::core::dsp::windows::{Taper, DEFAULT_KAISER_BETA};

#[derive(Parser, Debug)]
#[command(name = "vibrocheckr")]
#[command(about = "Diagnose resonances and belt asymmetry from accelerometer captures")]
pub struct Args {
    /// Capture file (.csv / .csv.zst) or directory of captures
    #[arg(short, long)]
    pub input: PathBuf,

    /// Kinematic layout of the machine
    #[arg(short, long, value_enum, default_value_t = Kinematics::Corexy)]
    pub kinematics: Kinematics,

    /// STFT window length in samples
    #[arg(short, long, default_value_t = settings::DEFAULT_WINDOW_SIZE)]
    pub window_size: usize,

    /// Fractional overlap between adjacent windows, in [0, 1)
    #[arg(long, default_value_t = settings::DEFAULT_OVERLAP)]
    pub overlap: f32,

    /// Minimum peak amplitude as a fraction of the strongest bin
    #[arg(long, default_value_t = settings::DEFAULT_MIN_AMPLITUDE_RATIO)]
    pub min_amplitude_ratio: f32,

    /// Maximum coefficient of variation of inter-sample intervals
    #[arg(long, default_value_t = settings::DEFAULT_SAMPLING_TOLERANCE)]
    pub sampling_tolerance: f32,

    /// Normalized magnitude difference beyond which belts diverge
    #[arg(long, default_value_t = settings::DEFAULT_DIVERGENCE_THRESHOLD)]
    pub divergence_threshold: f32,

    /// Kaiser taper shape parameter
    #[arg(long, default_value_t = DEFAULT_KAISER_BETA)]
    pub kaiser_beta: f32,

    /// Emit the session report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Archive raw captures as .csv.zst next to the originals
    #[arg(long)]
    pub archive: bool,

    /// Verbose output (peak tables, diverging frequencies)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Analysis settings assembled from the CLI overrides.
    pub fn settings(&self) -> AnalysisSettings {
        AnalysisSettings::default()
            .window_size(self.window_size)
            .overlap(self.overlap)
            .min_amplitude_ratio(self.min_amplitude_ratio)
            .sampling_tolerance(self.sampling_tolerance)
            .divergence_threshold(self.divergence_threshold)
            .taper(Taper::Kaiser(self.kaiser_beta))
    }
}
