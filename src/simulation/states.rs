//! Core state types for the simulation
//!
//! `Body` mirrors one renderable object in the scene: identity, primitive
//! size, scalar velocity, and the latched contact flag. `System` owns the
//! body collection plus the sample recorder; all mutation goes through the
//! step functions.

use crate::configuration::config::RadiusMode;
use crate::host::scene::ObjectHandle;
use crate::simulation::recorder::SampleRecorder;

/// Index of a body inside its owning `System`
///
/// Handed out when a scenario is built; step bindings hold these instead
/// of name strings so per-tick dispatch never does a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub(crate) usize);

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String, // stable identity, matches the scene object
    pub size: f64, // primitive size, always > 0
    pub mass: Option<f64>, // only pairwise force bindings need one
    pub velocity: f64, // scalar speed along whichever axis a step moves it
    pub collided: bool, // latched by contact, gates free flight only
    pub radius_mode: RadiusMode, // how radius derives from size
    pub handle: ObjectHandle, // renderable counterpart
}

impl Body {
    /// Radius derived from `size` per the body's radius mode
    pub fn radius(&self) -> f64 {
        match self.radius_mode {
            RadiusMode::Exact => self.size / 2.0,
            RadiusMode::Floor => (self.size / 2.0).floor(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection the step functions index into
    pub recorder: SampleRecorder, // per-tick force/potential samples
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            recorder: SampleRecorder::new(),
        }
    }

    /// Look a body up by name; the id stays valid for the system's life
    pub fn body_id(&self, name: &str) -> Option<BodyId> {
        self.bodies.iter().position(|b| b.name == name).map(BodyId)
    }

    pub fn body(&self, id: BodyId) -> &Body {
        &self.bodies[id.0]
    }

    pub fn body_mut(&mut self, id: BodyId) -> &mut Body {
        &mut self.bodies[id.0]
    }
}
