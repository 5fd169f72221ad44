use ai_core::math::{rotate_towards, yaw_rotation};
use ai_core::{Pose, Quat, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::NavAgent;

/// Default cruise speed, units per second.
pub const DEFAULT_SPEED: f32 = 3.5;
/// Default turning speed, degrees per second.
pub const DEFAULT_TURN_RATE: f32 = 120.0;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavPath {
    pub points: Vec<Vec3>,
}

impl NavPath {
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    pub fn straight(start: Vec3, goal: Vec3) -> Self {
        Self::new(vec![start, goal])
    }

    pub fn goal(&self) -> Option<Vec3> {
        self.points.last().copied()
    }
}

/// Straight-line reference implementation of [`NavAgent`].
///
/// The first destination requested while no path exists resolves on the next [`step`]; later
/// destinations re-path immediately so `has_path` stays true while an agent keeps chasing a moving
/// goal. Movement walks the path at `speed * dt` and turns the body toward the direction of travel
/// by at most `turn_rate * dt` degrees.
///
/// [`step`]: KinematicNavAgent::step
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KinematicNavAgent {
    pose: Pose,
    speed: f32,
    turn_rate: f32,
    halted: bool,
    pending: Option<Vec3>,
    path: Option<NavPath>,
    next_index: usize,
}

impl KinematicNavAgent {
    pub fn new(pose: Pose) -> Self {
        Self {
            pose,
            speed: DEFAULT_SPEED,
            turn_rate: DEFAULT_TURN_RATE,
            halted: false,
            pending: None,
            path: None,
            next_index: 1,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_turn_rate(mut self, degrees_per_second: f32) -> Self {
        self.turn_rate = degrees_per_second;
        self
    }

    pub fn path(&self) -> Option<&NavPath> {
        self.path.as_ref()
    }

    pub fn destination(&self) -> Option<Vec3> {
        self.pending.or_else(|| self.path.as_ref().and_then(NavPath::goal))
    }

    pub fn is_path_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the current path and any pending request.
    pub fn reset_path(&mut self) {
        self.pending = None;
        self.path = None;
        self.next_index = 1;
    }

    /// Advance the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        if let Some(goal) = self.pending.take() {
            self.path = Some(NavPath::straight(self.pose.position, goal));
            self.next_index = 1;
        }

        if self.halted {
            return;
        }

        let Some(path) = &self.path else {
            return;
        };

        let dt = dt.max(0.0);
        let mut remaining = self.speed.max(0.0) * dt;
        let mut current = self.pose.position;
        let mut heading = None;

        while self.next_index < path.points.len() && remaining > 0.0 {
            let target = path.points[self.next_index];
            let to_target = target - current;
            let dist = to_target.length();

            if dist <= f32::EPSILON {
                self.next_index += 1;
                continue;
            }

            heading = Some(to_target);

            if remaining >= dist {
                current = target;
                self.next_index += 1;
                remaining -= dist;
                continue;
            }

            current += to_target * (remaining / dist);
            break;
        }

        self.pose.position = current;
        if let Some(facing) = heading.and_then(yaw_rotation) {
            self.pose.rotation = rotate_towards(self.pose.rotation, facing, self.turn_rate * dt);
        }
    }
}

impl NavAgent for KinematicNavAgent {
    fn pose(&self) -> Pose {
        self.pose
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.pose.rotation = rotation;
    }

    fn set_destination(&mut self, destination: Vec3) {
        if self.path.is_some() {
            self.path = Some(NavPath::straight(self.pose.position, destination));
            self.next_index = 1;
        } else {
            self.pending = Some(destination);
        }
    }

    fn has_path(&self) -> bool {
        self.path.is_some()
    }

    fn remaining_distance(&self) -> f32 {
        if self.pending.is_some() {
            return f32::INFINITY;
        }
        let Some(path) = &self.path else {
            return 0.0;
        };

        let mut total = 0.0;
        let mut from = self.pose.position;
        for &point in path.points.iter().skip(self.next_index) {
            total += from.distance(point);
            from = point;
        }
        total
    }

    fn speed(&self) -> f32 {
        self.speed
    }

    fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    fn is_halted(&self) -> bool {
        self.halted
    }

    fn set_movement_halted(&mut self, halted: bool) {
        self.halted = halted;
    }

    fn turn_rate(&self) -> f32 {
        self.turn_rate
    }

    fn set_turn_rate(&mut self, degrees_per_second: f32) {
        self.turn_rate = degrees_per_second;
    }
}
