pub mod simulation;
pub mod configuration;
pub mod host;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, BodyId, System};
pub use simulation::geometry::{distance, Axis, Vec3};
pub use simulation::forces::{intermolecular_force, lennard_jones_potential};
pub use simulation::integrator::{contact_step, floor_gravity_step, free_flight_step, pairwise_force_step};
pub use simulation::params::{Parameters, DEFAULT_BOND_ENERGY, DEFAULT_GRAVITY, TICK};
pub use simulation::recorder::{Sample, SampleRecorder};
pub use simulation::engine::{Engine, StepBinding};
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, ParametersConfig, RadiusMode, ScenarioConfig, StepConfig};

pub use host::scene::{MemoryScene, ObjectHandle, PrimitiveKind, Scene, SceneObject};
pub use host::timers::Timers;

pub use benchmark::benchmark::{bench_floor_gravity, bench_pairwise_step};

pub use error::{Error, Result};
