//! Fixed-step step functions driven by the timer registry
//!
//! Each function advances its slice of the simulation by one `TICK` of
//! simulated time and returns the delay until it wants to run again, which
//! is always `TICK`. Bindings to concrete bodies happen once when the
//! scenario registers them; per-tick work is index lookups only.
//!
//! Velocity updates are semi-implicit Euler: kick the velocity from the
//! force first, then drift the position with the fresh velocity.

use crate::error::{Error, Result};
use crate::host::scene::Scene;
use crate::simulation::forces::{intermolecular_force, lennard_jones_potential};
use crate::simulation::geometry::{distance, Axis, Vec3};
use crate::simulation::params::TICK;
use crate::simulation::states::{BodyId, System};

/// Advance the designated pair one tick under the Lennard-Jones force
///
/// `p1` supplies the contact distance (2 * its radius), the mass, and the
/// integrated velocity; `p2` mirrors p1's displacement. Motion is
/// restricted to `axis`. Records one force and one potential sample.
pub fn pairwise_force_step<S: Scene>(
    sys: &mut System,
    scene: &mut S,
    p1: BodyId,
    p2: BodyId,
    bond_energy: f64,
    axis: Axis,
) -> Result<f64> {
    let h1 = sys.body(p1).handle.clone();
    let h2 = sys.body(p2).handle.clone();

    // Contact distance a is twice p1's radius; p2's size does not enter
    let a = 2.0 * sys.body(p1).radius();

    // Current separation of the pair
    let r = distance(scene.position(&h1)?, scene.position(&h2)?);

    let force = intermolecular_force(r, a, bond_energy);
    let potential = lennard_jones_potential(r, a, bond_energy);

    // One sample of each per tick, in tick order
    sys.recorder.record_force(r, force);
    sys.recorder.record_potential(r, potential);

    // Kick: v_n+1 = v_n + (F / m) * dt, with p1's mass only
    let mass = sys
        .body(p1)
        .mass
        .ok_or_else(|| Error::MissingMass(sys.body(p1).name.clone()))?;
    let body = sys.body_mut(p1);
    body.velocity += force / mass * TICK;

    // Drift: d = v_n+1 * dt, applied +d to p1 and -d to p2 along the axis.
    // The 1-D projection is sign-blind to which side of p1 p2 sits on.
    let d = body.velocity * TICK;
    scene.translate(&h1, axis.displacement(d))?;
    scene.translate(&h2, axis.displacement(-d))?;

    Ok(TICK)
}

/// Advance every body one tick of constant vertical gravity with a floor
///
/// The velocity integrates every tick; the displacement is gated by the
/// floor predicate z - radius > 0. A body that has reached the floor keeps
/// its z while its velocity keeps integrating.
pub fn floor_gravity_step<S: Scene>(sys: &mut System, scene: &mut S, gravity: f64) -> Result<f64> {
    for body in sys.bodies.iter_mut() {
        let z = scene.position(&body.handle)?.z;

        // Kick: v_n+1 = v_n + g * dt
        body.velocity += gravity * TICK;

        // Drift only while above the floor at z = 0
        if z - body.radius() > 0.0 {
            let dz = body.velocity * TICK;
            scene.translate(&body.handle, Vec3::new(0.0, 0.0, dz))?;
        }
    }

    Ok(TICK)
}

/// Latch the contact flag once the pair is within contact distance
///
/// The threshold is 2 * p1's radius, not the sum of the radii. Both bodies
/// get flagged; the flag is never cleared.
pub fn contact_step<S: Scene>(sys: &mut System, scene: &S, p1: BodyId, p2: BodyId) -> Result<f64> {
    let r = distance(
        scene.position(&sys.body(p1).handle)?,
        scene.position(&sys.body(p2).handle)?,
    );

    if r <= 2.0 * sys.body(p1).radius() {
        sys.body_mut(p1).collided = true;
        sys.body_mut(p2).collided = true;
    }

    Ok(TICK)
}

/// Move a body by a fixed delta while its contact flag is unset
///
/// The collided latch gates this step and nothing else.
pub fn free_flight_step<S: Scene>(
    sys: &mut System,
    scene: &mut S,
    body: BodyId,
    delta: Vec3,
) -> Result<f64> {
    if !sys.body(body).collided {
        scene.translate(&sys.body(body).handle, delta)?;
    }

    Ok(TICK)
}
