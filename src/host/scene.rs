//! Renderable-scene collaborator
//!
//! The simulation never talks to a renderer directly; it goes through the
//! `Scene` trait, which covers exactly the capabilities body construction
//! and the step functions need. `MemoryScene` is the in-process
//! implementation used by the binary, the benchmarks, and the tests.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::simulation::geometry::Vec3;

/// Primitive shapes the scene knows how to create
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Sphere,
    Cube,
}

/// Opaque reference to one scene object
///
/// Objects are keyed by name; a handle stays valid until its object is
/// deleted, after which scene calls through it fail fast.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectHandle(String);

impl ObjectHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Capabilities the simulation needs from a renderable scene
pub trait Scene {
    /// Create a primitive and return its handle
    /// Fails if an object with the same name already exists
    fn create_primitive(
        &mut self,
        kind: PrimitiveKind,
        name: &str,
        size: f64,
        position: Vec3,
    ) -> Result<ObjectHandle>;

    /// True if an object with this name exists
    fn contains(&self, name: &str) -> bool;

    /// Remove an object by name
    fn delete_object(&mut self, name: &str) -> Result<()>;

    /// Current position of an object
    fn position(&self, handle: &ObjectHandle) -> Result<Vec3>;

    /// Move an object by a delta
    fn translate(&mut self, handle: &ObjectHandle, delta: Vec3) -> Result<()>;
}

/// What the scene keeps per object: exactly what the simulation reads back
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub kind: PrimitiveKind,
    pub size: f64,
    pub position: Vec3,
}

/// In-memory scene: a name-keyed object table standing in for a renderer
#[derive(Debug, Default)]
pub struct MemoryScene {
    objects: HashMap<String, SceneObject>,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Read access for inspection in tests and dumps
    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.get(name)
    }
}

impl Scene for MemoryScene {
    fn create_primitive(
        &mut self,
        kind: PrimitiveKind,
        name: &str,
        size: f64,
        position: Vec3,
    ) -> Result<ObjectHandle> {
        if self.objects.contains_key(name) {
            return Err(Error::ObjectExists(name.to_string()));
        }

        self.objects.insert(
            name.to_string(),
            SceneObject {
                kind,
                size,
                position,
            },
        );

        Ok(ObjectHandle::new(name))
    }

    fn contains(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    fn delete_object(&mut self, name: &str) -> Result<()> {
        self.objects
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| Error::ObjectMissing(name.to_string()))
    }

    fn position(&self, handle: &ObjectHandle) -> Result<Vec3> {
        self.objects
            .get(handle.name())
            .map(|obj| obj.position)
            .ok_or_else(|| Error::ObjectMissing(handle.name().to_string()))
    }

    fn translate(&mut self, handle: &ObjectHandle, delta: Vec3) -> Result<()> {
        let obj = self
            .objects
            .get_mut(handle.name())
            .ok_or_else(|| Error::ObjectMissing(handle.name().to_string()))?;

        obj.position += delta;
        Ok(())
    }
}
