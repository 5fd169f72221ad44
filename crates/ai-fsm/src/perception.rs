use ai_core::math::unsigned_angle_deg;
use ai_core::{Pose, Vec3};

use crate::config::PerceptionConfig;

/// Cone and distance tests of an agent against a target position.
///
/// Stateless: every query is evaluated from the poses it is handed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Perception {
    config: PerceptionConfig,
}

impl Perception {
    pub fn new(config: PerceptionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PerceptionConfig {
        &self.config
    }

    /// Target within `visibility_distance` and inside the forward vision cone.
    pub fn can_see_target(&self, agent: &Pose, target: Vec3) -> bool {
        let to_target = target - agent.position;
        to_target.length() < self.config.visibility_distance
            && unsigned_angle_deg(to_target, agent.forward()) < self.config.visibility_half_angle_deg
    }

    /// Target within `surprise_distance` and positioned behind the agent.
    ///
    /// The cone is measured on the vector from the target to the agent, so it is centred on the
    /// agent's back.
    pub fn is_target_behind_and_close(&self, agent: &Pose, target: Vec3) -> bool {
        let from_target = agent.position - target;
        from_target.length() < self.config.surprise_distance
            && unsigned_angle_deg(from_target, agent.forward()) < self.config.surprise_half_angle_deg
    }

    /// Target within `attack_range` and inside the forward vision cone.
    pub fn can_attack_target(&self, agent: &Pose, target: Vec3) -> bool {
        let to_target = target - agent.position;
        to_target.length() < self.config.attack_range
            && unsigned_angle_deg(to_target, agent.forward()) < self.config.visibility_half_angle_deg
    }
}
