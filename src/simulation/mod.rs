pub mod geometry;
pub mod states;
pub mod params;
pub mod forces;
pub mod recorder;
pub mod integrator;
pub mod engine;
pub mod scenario;
