pub mod scene;
pub mod timers;
