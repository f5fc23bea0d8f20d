//! Mechanical direction tables
//!
//! A direction maps the 3-axis accelerometer frame onto one named mechanical
//! element: a physical axis or a belt diagonal. The standard tables cover
//! Cartesian axes plus the belt diagonals of CoreXY and CoreXZ kinematics.
//! Loaded once at startup and never mutated afterwards.

use serde::Serialize;
use std::fmt;

use crate::core::error::AnalysisError;

/// A named unit vector in the accelerometer frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisDirection {
    name: String,
    unit_vector: [f32; 3],
}

impl AxisDirection {
    /// Build a direction from any non-zero vector; the stored vector is
    /// normalized so projections are in the same units as the raw samples.
    pub fn new(name: impl Into<String>, vector: [f32; 3]) -> Result<Self, AnalysisError> {
        let norm = (vector[0] * vector[0] + vector[1] * vector[1] + vector[2] * vector[2]).sqrt();
        if norm < 1e-9 {
            return Err(AnalysisError::InvalidParameter(format!(
                "direction vector must be non-zero, got {:?}",
                vector
            )));
        }
        Ok(Self {
            name: name.into(),
            unit_vector: [vector[0] / norm, vector[1] / norm, vector[2] / norm],
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_vector(&self) -> [f32; 3] {
        self.unit_vector
    }

    /// Same direction, opposite sign. Projections negate element-wise.
    pub fn negated(&self) -> Self {
        let v = self.unit_vector;
        Self {
            name: self.name.clone(),
            unit_vector: [-v[0], -v[1], -v[2]],
        }
    }
}

impl fmt::Display for AxisDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Kinematic layouts with predefined direction tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Kinematics {
    /// Independent X/Y axes, no belt coupling
    Cartesian,
    /// Diagonal A/B belts (most common coupled layout)
    Corexy,
    /// Diagonal belts in the X/Z plane
    Corexz,
}

impl Kinematics {
    /// Directions analyzed for this layout. Physical axes are always
    /// included; coupled layouts add their belt diagonals.
    pub fn directions(&self) -> Vec<AxisDirection> {
        let mut set = vec![direction("axis_x"), direction("axis_y")];
        match self {
            Kinematics::Cartesian => {}
            Kinematics::Corexy => {
                set.push(direction("belt_a"));
                set.push(direction("belt_b"));
            }
            Kinematics::Corexz => {
                set.push(direction("belt_x"));
                set.push(direction("belt_z"));
            }
        }
        set
    }

    /// The belt pair whose responses are cross-correlated, if the layout
    /// has coupled belts.
    pub fn belt_pair(&self) -> Option<(AxisDirection, AxisDirection)> {
        match self {
            Kinematics::Cartesian => None,
            Kinematics::Corexy => Some((direction("belt_a"), direction("belt_b"))),
            Kinematics::Corexz => Some((direction("belt_x"), direction("belt_z"))),
        }
    }
}

impl fmt::Display for Kinematics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Kinematics::Cartesian => "cartesian",
            Kinematics::Corexy => "corexy",
            Kinematics::Corexz => "corexz",
        };
        write!(f, "{}", s)
    }
}

/// Standard direction table: physical axes and the belt diagonals of both
/// supported coupled layouts.
const STANDARD_DIRECTIONS: [(&str, [f32; 3]); 6] = [
    ("axis_x", [1.0, 0.0, 0.0]),
    ("axis_y", [0.0, 1.0, 0.0]),
    ("belt_a", [1.0, -1.0, 0.0]),
    ("belt_b", [1.0, 1.0, 0.0]),
    ("belt_x", [1.0, 0.0, 1.0]),
    ("belt_z", [-1.0, 0.0, 1.0]),
];

/// Look up a standard direction by name.
pub fn standard_direction(name: &str) -> Option<AxisDirection> {
    STANDARD_DIRECTIONS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(n, v)| AxisDirection::new(*n, *v).expect("standard table vectors are non-zero"))
}

/// All standard directions, in table order.
pub fn standard_directions() -> Vec<AxisDirection> {
    STANDARD_DIRECTIONS
        .iter()
        .map(|(n, v)| AxisDirection::new(*n, *v).expect("standard table vectors are non-zero"))
        .collect()
}

fn direction(name: &str) -> AxisDirection {
    standard_direction(name).expect("kinematics tables only reference standard names")
}
