//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – run length
//! - [`BodyConfig`]       – one renderable body per entry
//! - [`StepConfig`]       – step functions to register, in file order
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   t_end: 10.0              # simulated seconds to run
//!
//! bodies:
//!   - name: p1
//!     shape: sphere          # or "cube"
//!     size: 2.0
//!     mass: 0.5              # optional, required for pairwise_force
//!     position: [0.0, 2.0, 1.0]
//!     radius_mode: exact     # or "floor", default exact
//!   - name: p2
//!     shape: sphere
//!     size: 2.0
//!     mass: 0.5
//!     position: [0.0, -2.0, 1.0]
//!
//! steps:
//!   - pairwise_force:
//!       p1: p1
//!       p2: p2
//!       bond_energy: 2.0     # well depth e, default 0.065
//!       axis: y              # default y
//!   - contact:
//!       p1: p1
//!       p2: p2
//! ```
//!
//! Step order in the file is registration order; the scheduler breaks
//! equal due times in that order. Scenario building maps these types into
//! runtime structs and validates them.

use serde::Deserialize;

use crate::host::scene::PrimitiveKind;
use crate::simulation::geometry::Axis;
use crate::simulation::params::{DEFAULT_BOND_ENERGY, DEFAULT_GRAVITY};

/// How a body's radius derives from its primitive size
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RadiusMode {
    #[default]
    #[serde(rename = "exact")] // radius = size / 2
    Exact,

    #[serde(rename = "floor")] // radius = floor(size / 2)
    Floor,
}

/// Global run parameters
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // simulated seconds to run
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String, // stable identity, also the scene object name
    pub shape: PrimitiveKind, // sphere or cube
    pub size: f64, // primitive size, must be > 0
    #[serde(default)]
    pub mass: Option<f64>, // required only by pairwise_force bindings
    pub position: [f64; 3], // initial position in scene units
    #[serde(default)]
    pub radius_mode: RadiusMode, // exact (default) or floor
}

/// One step-function registration
/// The tag selects the step, the fields bind bodies and constants to it
#[derive(Deserialize, Debug, Clone)]
pub enum StepConfig {
    #[serde(rename = "pairwise_force")]
    PairwiseForce {
        p1: String, // supplies contact distance, mass, and velocity
        p2: String, // moved mirror-image to p1
        #[serde(default = "default_bond_energy")]
        bond_energy: f64, // well depth e
        #[serde(default)]
        axis: Axis, // axis the pair moves along
    },

    #[serde(rename = "floor_gravity")]
    FloorGravity {
        #[serde(default = "default_gravity")]
        gravity: f64, // vertical acceleration, negative is down
    },

    #[serde(rename = "contact")]
    Contact {
        p1: String, // its radius sets the contact threshold
        p2: String, // flagged together with p1
    },

    #[serde(rename = "free_flight")]
    FreeFlight {
        body: String, // moved each tick until its contact flag latches
        delta: [f64; 3], // fixed per-tick displacement
    },
}

fn default_bond_energy() -> f64 {
    DEFAULT_BOND_ENERGY
}

fn default_gravity() -> f64 {
    DEFAULT_GRAVITY
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // run length
    pub bodies: Vec<BodyConfig>, // bodies that define the initial scene
    // steps parse in the `- step_name: { .. }` map form, not `!step_name` tags
    #[serde(with = "serde_yaml::with::singleton_map_recursive")]
    pub steps: Vec<StepConfig>, // step functions to register, in order
}
