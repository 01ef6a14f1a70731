//! Crate-wide error type
//!
//! One policy everywhere: invalid input is rejected where it enters, and a
//! step that touches a missing scene object aborts. Nothing is silently
//! recovered.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("scene has no object named `{0}`")]
    ObjectMissing(String),

    #[error("scene already has an object named `{0}`")]
    ObjectExists(String),

    #[error("body `{name}` has non-positive size {size}")]
    InvalidSize { name: String, size: f64 },

    #[error("scenario defines body `{0}` more than once")]
    DuplicateBody(String),

    #[error("step binding refers to unknown body `{0}`")]
    UnknownBody(String),

    #[error("body `{0}` has no mass but a pairwise force step divides by it")]
    MissingMass(String),
}
