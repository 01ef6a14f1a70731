//! Numerical parameters for the simulation
//!
//! `TICK` is the fixed timestep every step function advances by and the
//! delay every step callback returns. `Parameters` holds the per-scenario
//! runtime settings.

/// Fixed timestep in seconds; one step callback covers exactly one tick
pub const TICK: f64 = 1.0 / 60.0;

/// Default well depth `e` for the pairwise force step
pub const DEFAULT_BOND_ENERGY: f64 = 0.065;

/// Default vertical acceleration for the floor gravity step
pub const DEFAULT_GRAVITY: f64 = -9.8;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // simulated seconds to run
}
