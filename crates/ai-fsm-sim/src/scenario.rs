//! Scenario files: the level, one NPC, a scripted player route and FSM tuning.

use std::path::Path;

use ai_core::Vec3;
use ai_fsm::{FsmConfig, StaticEnvironment};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Session seed for every random roll.
    pub seed: u64,
    /// Number of ticks to simulate.
    pub ticks: u64,
    /// Seconds per tick.
    pub dt: f32,
    pub npc: NpcSpawn,
    pub player: PlayerRoute,
    pub level: StaticEnvironment,
    pub fsm: FsmConfig,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            seed: 7,
            ticks: 1_200,
            dt: 0.05,
            npc: NpcSpawn::default(),
            player: PlayerRoute::default(),
            level: StaticEnvironment::new()
                .with_checkpoint("cp-01", Vec3::new(0.0, 0.0, 15.0))
                .with_checkpoint("cp-02", Vec3::new(15.0, 0.0, 15.0))
                .with_checkpoint("cp-03", Vec3::new(15.0, 0.0, 0.0))
                .with_checkpoint("cp-04", Vec3::new(0.0, 0.0, 0.0))
                .with_safe_location(Vec3::new(-25.0, 0.0, -25.0)),
            fsm: FsmConfig::default(),
        }
    }
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario from {}", path.display()))?;
        let scenario = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse scenario from {}", path.display()))?;
        Ok(scenario)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let scenario: Self = serde_yaml::from_str(content)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            bail!("dt must be a positive number of seconds, got {}", self.dt);
        }
        if self.player.speed < 0.0 {
            bail!("player speed must not be negative, got {}", self.player.speed);
        }
        self.fsm.validate().context("Invalid fsm section")?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NpcSpawn {
    pub id: u64,
    pub position: Vec3,
    /// Initial facing; only the ground-plane component is used.
    pub facing: Vec3,
    /// Base turning speed of the navigation agent, degrees per second.
    pub turn_rate: f32,
    /// Attach a sound source for the attack cue.
    pub audio: bool,
}

impl Default for NpcSpawn {
    fn default() -> Self {
        Self {
            id: 1,
            position: Vec3::new(0.0, 0.0, 0.0),
            facing: Vec3::Z,
            turn_rate: 120.0,
            audio: true,
        }
    }
}

/// Piecewise-linear path the player walks at constant speed, looping back to its start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerRoute {
    pub speed: f32,
    pub route: Vec<Vec3>,
}

impl Default for PlayerRoute {
    fn default() -> Self {
        Self {
            speed: 1.5,
            route: vec![
                Vec3::new(30.0, 0.0, 30.0),
                Vec3::new(7.5, 0.0, 18.0),
                Vec3::new(-10.0, 0.0, 5.0),
                Vec3::new(7.5, 0.0, -4.0),
            ],
        }
    }
}

impl PlayerRoute {
    /// Player position `seconds` into the run.
    pub fn position_at(&self, seconds: f32) -> Vec3 {
        let Some(&start) = self.route.first() else {
            return Vec3::ZERO;
        };

        let legs = || {
            self.route
                .iter()
                .zip(self.route.iter().cycle().skip(1))
                .map(|(&a, &b)| (a, b))
        };
        let lap: f32 = legs().map(|(a, b)| a.distance(b)).sum();
        if lap <= f32::EPSILON || self.speed <= 0.0 {
            return start;
        }

        let mut travelled = (seconds.max(0.0) * self.speed) % lap;
        for (a, b) in legs() {
            let len = a.distance(b);
            if travelled <= len {
                return if len <= f32::EPSILON {
                    a
                } else {
                    a.lerp(b, travelled / len)
                };
            }
            travelled -= len;
        }
        start
    }
}
