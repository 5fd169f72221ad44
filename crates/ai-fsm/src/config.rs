#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{FsmError, FsmResult};

/// Tunables for one behavior controller.
///
/// Every section falls back to its defaults when omitted from a serialized config.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct FsmConfig {
    pub perception: PerceptionConfig,
    pub motion: MotionConfig,
    pub chances: ChanceConfig,
}

impl FsmConfig {
    pub fn validate(&self) -> FsmResult<()> {
        self.perception.validate()?;
        self.motion.validate()?;
        self.chances.validate()
    }
}

/// Vision and attack cone parameters. Distances are world units, angles are half-angles in
/// degrees measured from the agent's forward vector.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct PerceptionConfig {
    /// Maximum distance at which the target can be seen.
    pub visibility_distance: f32,
    /// Half-angle of the vision cone.
    pub visibility_half_angle_deg: f32,
    /// A target closer than this, behind the agent, counts as an ambush.
    pub surprise_distance: f32,
    /// Half-angle of the rear cone used by the ambush check.
    pub surprise_half_angle_deg: f32,
    /// Maximum distance at which the agent will attack.
    pub attack_range: f32,
}

impl Default for PerceptionConfig {
    fn default() -> Self {
        Self {
            visibility_distance: 10.0,
            visibility_half_angle_deg: 30.0,
            surprise_distance: 2.0,
            surprise_half_angle_deg: 30.0,
            attack_range: 7.0,
        }
    }
}

impl PerceptionConfig {
    pub fn validate(&self) -> FsmResult<()> {
        positive("perception.visibility_distance", self.visibility_distance)?;
        positive("perception.surprise_distance", self.surprise_distance)?;
        positive("perception.attack_range", self.attack_range)?;
        half_angle(
            "perception.visibility_half_angle_deg",
            self.visibility_half_angle_deg,
        )?;
        half_angle(
            "perception.surprise_half_angle_deg",
            self.surprise_half_angle_deg,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct MotionConfig {
    /// Cruise speed while patrolling.
    pub patrol_speed: f32,
    /// Cruise speed while chasing the target.
    pub pursue_speed: f32,
    /// Cruise speed while running to the safe location.
    pub flee_speed: f32,
    /// Added to the navigation turn rate while fleeing, degrees per second.
    pub flee_turn_rate_boost: f32,
    /// Slerp factor per second used to face the target while attacking.
    pub attack_turn_speed: f32,
    /// Remaining path distance under which a destination counts as reached.
    pub arrival_tolerance: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            patrol_speed: 2.0,
            pursue_speed: 5.0,
            flee_speed: 6.0,
            flee_turn_rate_boost: 5.0,
            attack_turn_speed: 2.0,
            arrival_tolerance: 1.0,
        }
    }
}

impl MotionConfig {
    pub fn validate(&self) -> FsmResult<()> {
        non_negative("motion.patrol_speed", self.patrol_speed)?;
        non_negative("motion.pursue_speed", self.pursue_speed)?;
        non_negative("motion.flee_speed", self.flee_speed)?;
        non_negative("motion.flee_turn_rate_boost", self.flee_turn_rate_boost)?;
        positive("motion.attack_turn_speed", self.attack_turn_speed)?;
        positive("motion.arrival_tolerance", self.arrival_tolerance)
    }
}

/// Odds of a Bernoulli trial: a uniform draw in `[0, range)` succeeds when it is below
/// `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Chance {
    pub threshold: u32,
    pub range: u32,
}

impl Chance {
    pub const NEVER: Chance = Chance::new(0, 1);

    pub const fn new(threshold: u32, range: u32) -> Self {
        Self { threshold, range }
    }

    /// Expected per-trial success rate. `0.0` for an empty range.
    pub fn probability(self) -> f64 {
        if self.range == 0 {
            return 0.0;
        }
        f64::from(self.threshold.min(self.range)) / f64::from(self.range)
    }

    fn validate(self, field: &'static str) -> FsmResult<()> {
        if self.range == 0 {
            return Err(FsmError::invalid(field, "range must be non-zero"));
        }
        if self.threshold > self.range {
            return Err(FsmError::invalid(
                field,
                format!(
                    "threshold {} exceeds range {}",
                    self.threshold, self.range
                ),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ChanceConfig {
    /// Per-tick odds that an idle agent starts patrolling.
    pub idle_to_patrol: Chance,
    /// Per-tick odds that a patrolling agent stops to idle.
    pub patrol_to_idle: Chance,
}

impl Default for ChanceConfig {
    fn default() -> Self {
        Self {
            idle_to_patrol: Chance::new(2, 100),
            patrol_to_idle: Chance::new(1, 1000),
        }
    }
}

impl ChanceConfig {
    pub fn validate(&self) -> FsmResult<()> {
        self.idle_to_patrol.validate("chances.idle_to_patrol")?;
        self.patrol_to_idle.validate("chances.patrol_to_idle")
    }
}

fn positive(field: &'static str, value: f32) -> FsmResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FsmError::invalid(
            field,
            format!("expected a positive finite value, got {value}"),
        ))
    }
}

fn non_negative(field: &'static str, value: f32) -> FsmResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(FsmError::invalid(
            field,
            format!("expected a non-negative finite value, got {value}"),
        ))
    }
}

fn half_angle(field: &'static str, degrees: f32) -> FsmResult<()> {
    if degrees > 0.0 && degrees <= 180.0 {
        Ok(())
    } else {
        Err(FsmError::invalid(
            field,
            format!("half-angle must lie in (0, 180] degrees, got {degrees}"),
        ))
    }
}
