use ai_core::{Pose, Quat, Vec3};

/// Handle to the path-following component attached to one agent.
///
/// Implementations own the agent's body: whatever moves the agent along its path is also what
/// reports its pose. Queries return immediately; path computation may complete on a later frame,
/// in which case `has_path` stays `false` until it does.
pub trait NavAgent {
    fn pose(&self) -> Pose;

    /// Overwrite the facing, e.g. to aim while movement is halted.
    fn set_rotation(&mut self, rotation: Quat);

    fn set_destination(&mut self, destination: Vec3);

    fn has_path(&self) -> bool;

    /// Distance left along the current path. Backends report `f32::INFINITY` while a requested
    /// path is still pending.
    fn remaining_distance(&self) -> f32;

    fn speed(&self) -> f32;

    fn set_speed(&mut self, speed: f32);

    fn is_halted(&self) -> bool;

    fn set_movement_halted(&mut self, halted: bool);

    /// Maximum turning speed, degrees per second.
    fn turn_rate(&self) -> f32;

    fn set_turn_rate(&mut self, degrees_per_second: f32);
}

impl<N: NavAgent + ?Sized> NavAgent for Box<N> {
    fn pose(&self) -> Pose {
        (**self).pose()
    }

    fn set_rotation(&mut self, rotation: Quat) {
        (**self).set_rotation(rotation)
    }

    fn set_destination(&mut self, destination: Vec3) {
        (**self).set_destination(destination)
    }

    fn has_path(&self) -> bool {
        (**self).has_path()
    }

    fn remaining_distance(&self) -> f32 {
        (**self).remaining_distance()
    }

    fn speed(&self) -> f32 {
        (**self).speed()
    }

    fn set_speed(&mut self, speed: f32) {
        (**self).set_speed(speed)
    }

    fn is_halted(&self) -> bool {
        (**self).is_halted()
    }

    fn set_movement_halted(&mut self, halted: bool) {
        (**self).set_movement_halted(halted)
    }

    fn turn_rate(&self) -> f32 {
        (**self).turn_rate()
    }

    fn set_turn_rate(&mut self, degrees_per_second: f32) {
        (**self).set_turn_rate(degrees_per_second)
    }
}
