//! Configuration module for vibrocheckr

pub mod directions;
pub mod settings;

pub use directions::{standard_direction, standard_directions, AxisDirection, Kinematics};
pub use settings::AnalysisSettings;
