use ai_core::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named patrol checkpoint placed in the level.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CheckpointMarker {
    pub name: String,
    pub position: Vec3,
}

impl CheckpointMarker {
    pub fn new(name: impl Into<String>, position: Vec3) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// Read-only view of the level an agent lives in.
pub trait Environment {
    /// Every checkpoint marker in the level, in no particular order.
    fn checkpoint_markers(&self) -> Vec<CheckpointMarker>;

    /// Where a fleeing agent runs to, if the level defines one.
    fn safe_location(&self) -> Option<Vec3>;
}

impl<E: Environment + ?Sized> Environment for Box<E> {
    fn checkpoint_markers(&self) -> Vec<CheckpointMarker> {
        (**self).checkpoint_markers()
    }

    fn safe_location(&self) -> Option<Vec3> {
        (**self).safe_location()
    }
}

/// Environment backed by plain data; what the simulator and tests load levels into.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct StaticEnvironment {
    pub checkpoints: Vec<CheckpointMarker>,
    pub safe_location: Option<Vec3>,
}

impl StaticEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_checkpoint(mut self, name: impl Into<String>, position: Vec3) -> Self {
        self.checkpoints.push(CheckpointMarker::new(name, position));
        self
    }

    pub fn with_safe_location(mut self, position: Vec3) -> Self {
        self.safe_location = Some(position);
        self
    }
}

impl Environment for StaticEnvironment {
    fn checkpoint_markers(&self) -> Vec<CheckpointMarker> {
        self.checkpoints.clone()
    }

    fn safe_location(&self) -> Option<Vec3> {
        self.safe_location
    }
}
