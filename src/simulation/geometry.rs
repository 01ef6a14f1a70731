//! Minimal 3D geometry shared by the step functions
//!
//! Positions live in the scene as `Vec3` points; the step functions only
//! ever need separations and single-axis displacement vectors.

use nalgebra::Vector3;
use serde::Deserialize;

pub type Vec3 = Vector3<f64>;

/// Euclidean distance between two points
pub fn distance(p: Vec3, q: Vec3) -> f64 {
    (q - p).norm()
}

/// Axis a pairwise force step displaces its pair along
/// `axis: x|y|z` in scenario files, default y
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    #[default]
    Y,
    Z,
}

impl Axis {
    /// Displacement of magnitude `d` along this axis
    pub fn displacement(self, d: f64) -> Vec3 {
        match self {
            Axis::X => Vec3::new(d, 0.0, 0.0),
            Axis::Y => Vec3::new(0.0, d, 0.0),
            Axis::Z => Vec3::new(0.0, 0.0, d),
        }
    }
}
