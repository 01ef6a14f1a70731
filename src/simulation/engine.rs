//! Runtime step bindings
//!
//! `Engine` holds the step functions a scenario registered, each bound to
//! concrete body ids and constants when the scenario was built.
//! `StepBinding::run` dispatches one tick of one binding.

use crate::error::Result;
use crate::host::scene::Scene;
use crate::simulation::geometry::{Axis, Vec3};
use crate::simulation::integrator::{
    contact_step, floor_gravity_step, free_flight_step, pairwise_force_step,
};
use crate::simulation::states::{BodyId, System};

/// One registered step function with its bound arguments
#[derive(Debug, Clone)]
pub enum StepBinding {
    PairwiseForce {
        p1: BodyId,
        p2: BodyId,
        bond_energy: f64,
        axis: Axis,
    },
    FloorGravity {
        gravity: f64,
    },
    Contact {
        p1: BodyId,
        p2: BodyId,
    },
    FreeFlight {
        body: BodyId,
        delta: Vec3,
    },
}

impl StepBinding {
    /// Run one tick of this binding; returns the delay until the next
    pub fn run<S: Scene>(&self, sys: &mut System, scene: &mut S) -> Result<f64> {
        match *self {
            StepBinding::PairwiseForce {
                p1,
                p2,
                bond_energy,
                axis,
            } => pairwise_force_step(sys, scene, p1, p2, bond_energy, axis),
            StepBinding::FloorGravity { gravity } => floor_gravity_step(sys, scene, gravity),
            StepBinding::Contact { p1, p2 } => contact_step(sys, scene, p1, p2),
            StepBinding::FreeFlight { body, delta } => free_flight_step(sys, scene, body, delta),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Engine {
    pub steps: Vec<StepBinding>, // registration order, also dispatch tie order
}
