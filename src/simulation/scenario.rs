//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine step bindings (`Engine`)
//! - run parameters (`Parameters`)
//! - system state (`System` with bodies created in the scene)
//! - the scene the bodies render into
//!
//! Building validates everything the step functions later rely on:
//! positive sizes, unique names, known binding targets, and a mass
//! wherever a pairwise force needs one.

use log::debug;

use crate::configuration::config::{BodyConfig, ScenarioConfig, StepConfig};
use crate::error::{Error, Result};
use crate::host::scene::Scene;
use crate::host::timers::Timers;
use crate::simulation::engine::{Engine, StepBinding};
use crate::simulation::geometry::Vec3;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System};

/// Fully-initialized runtime bundle
///
/// Owns everything a run needs: bindings, parameters, body state, and the
/// scene. The timer registry drives it through `run_step`.
#[derive(Debug)]
pub struct Scenario<S: Scene> {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub scene: S,
}

impl<S: Scene> Scenario<S> {
    pub fn build_scenario(cfg: ScenarioConfig, mut scene: S) -> Result<Self> {
        // Bodies: map `BodyConfig` -> runtime `Body`, creating one scene
        // object each
        let mut bodies: Vec<Body> = Vec::with_capacity(cfg.bodies.len());
        for bc in &cfg.bodies {
            let body = build_body(bc, &bodies, &mut scene)?;
            bodies.push(body);
        }

        let system = System::new(bodies);

        // Parameters (runtime) from ParametersConfig
        let parameters = Parameters {
            t_end: cfg.parameters.t_end,
        };

        // Engine: resolve step configs to bindings over body ids
        let mut steps = Vec::with_capacity(cfg.steps.len());
        for sc in &cfg.steps {
            steps.push(build_binding(sc, &system)?);
        }
        let engine = Engine { steps };

        Ok(Self {
            engine,
            parameters,
            system,
            scene,
        })
    }

    /// Run one tick of one binding; the timer callbacks land here
    pub fn run_step(&mut self, binding: &StepBinding) -> Result<f64> {
        binding.run(&mut self.system, &mut self.scene)
    }

    /// Register every engine binding with the timer registry, in order
    pub fn register_steps(&self, timers: &mut Timers<Self>)
    where
        S: 'static,
    {
        for binding in self.engine.steps.iter().cloned() {
            timers.register(move |scenario: &mut Self| scenario.run_step(&binding));
        }
    }
}

/// Validate one body config and create its scene object
///
/// A stale scene object with the same name is deleted first, then the
/// primitive is created fresh at the configured position.
fn build_body<S: Scene>(bc: &BodyConfig, built: &[Body], scene: &mut S) -> Result<Body> {
    if bc.size <= 0.0 {
        return Err(Error::InvalidSize {
            name: bc.name.clone(),
            size: bc.size,
        });
    }
    if built.iter().any(|b| b.name == bc.name) {
        return Err(Error::DuplicateBody(bc.name.clone()));
    }

    if scene.contains(&bc.name) {
        scene.delete_object(&bc.name)?;
    }

    let position = Vec3::new(bc.position[0], bc.position[1], bc.position[2]);
    let handle = scene.create_primitive(bc.shape, &bc.name, bc.size, position)?;
    debug!("created {:?} `{}` size {} at {:?}", bc.shape, bc.name, bc.size, bc.position);

    Ok(Body {
        name: bc.name.clone(),
        size: bc.size,
        mass: bc.mass,
        velocity: 0.0,
        collided: false,
        radius_mode: bc.radius_mode,
        handle,
    })
}

/// Resolve one step config to a binding over body ids
fn build_binding(sc: &StepConfig, system: &System) -> Result<StepBinding> {
    let resolve = |name: &str| {
        system
            .body_id(name)
            .ok_or_else(|| Error::UnknownBody(name.to_string()))
    };

    Ok(match sc {
        StepConfig::PairwiseForce {
            p1,
            p2,
            bond_energy,
            axis,
        } => {
            let p1 = resolve(p1)?;
            let p2 = resolve(p2)?;
            // The step divides by p1's mass every tick; reject up front
            if system.body(p1).mass.is_none() {
                return Err(Error::MissingMass(system.body(p1).name.clone()));
            }
            StepBinding::PairwiseForce {
                p1,
                p2,
                bond_energy: *bond_energy,
                axis: *axis,
            }
        }
        StepConfig::FloorGravity { gravity } => StepBinding::FloorGravity { gravity: *gravity },
        StepConfig::Contact { p1, p2 } => StepBinding::Contact {
            p1: resolve(p1)?,
            p2: resolve(p2)?,
        },
        StepConfig::FreeFlight { body, delta } => StepBinding::FreeFlight {
            body: resolve(body)?,
            delta: Vec3::new(delta[0], delta[1], delta[2]),
        },
    })
}
