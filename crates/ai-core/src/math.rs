//! Small 3D helpers shared by perception and navigation.
//!
//! Conventions: `+Y` is up and an identity rotation faces `+Z`.

pub use glam::{Quat, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Vectors shorter than this are treated as "no direction".
pub const DIRECTION_EPSILON: f32 = 1.0e-6;

/// World-space position and orientation of an agent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Pose {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    /// A pose at `position` turned to face `direction` around the up axis.
    pub fn facing(position: Vec3, direction: Vec3) -> Self {
        Self {
            position,
            rotation: yaw_rotation(direction).unwrap_or(Quat::IDENTITY),
        }
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

/// Unsigned angle between two vectors, in degrees (`0..=180`).
///
/// Returns `0` when either vector is degenerate.
pub fn unsigned_angle_deg(a: Vec3, b: Vec3) -> f32 {
    let denom = (a.length_squared() * b.length_squared()).sqrt();
    if denom < DIRECTION_EPSILON * DIRECTION_EPSILON {
        return 0.0;
    }
    let cos = (a.dot(b) / denom).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// Rotation around `+Y` that faces `direction` projected onto the ground plane.
pub fn yaw_rotation(direction: Vec3) -> Option<Quat> {
    let flat = Vec3::new(direction.x, 0.0, direction.z);
    if flat.length_squared() < DIRECTION_EPSILON {
        return None;
    }
    Some(Quat::from_rotation_y(flat.x.atan2(flat.z)))
}

/// Spherical interpolation from `current` toward `target`, `t` clamped to `[0, 1]`.
pub fn smooth_rotate(current: Quat, target: Quat, t: f32) -> Quat {
    current.slerp(target, t.clamp(0.0, 1.0)).normalize()
}

/// Rotate `current` toward `target` by at most `max_degrees`.
pub fn rotate_towards(current: Quat, target: Quat, max_degrees: f32) -> Quat {
    let angle = current.angle_between(target).to_degrees();
    if angle <= max_degrees.max(0.0) || angle <= f32::EPSILON {
        return target;
    }
    smooth_rotate(current, target, max_degrees.max(0.0) / angle)
}
