//! Behavior modes and the enter/update/exit lifecycle every mode runs through.

mod attack;
mod flee;
mod idle;
mod patrol;
mod pursue;

use std::fmt;

use ai_core::{DeterministicRng, LifecyclePhase, Pose, TickContext, Transition, Vec3};
use ai_nav::NavAgent;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{Chance, FsmConfig};
use crate::handles::{Animator, AudioCue};
use crate::perception::Perception;
use crate::waypoints::WaypointRegistry;
use crate::world::Environment;

pub use attack::Attack;
pub use flee::Flee;
pub use idle::Idle;
pub use patrol::Patrol;
pub use pursue::Pursue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum BehaviorMode {
    Idle,
    Patrol,
    Pursue,
    Attack,
    Flee,
}

impl BehaviorMode {
    pub const ALL: [BehaviorMode; 5] = [
        BehaviorMode::Idle,
        BehaviorMode::Patrol,
        BehaviorMode::Pursue,
        BehaviorMode::Attack,
        BehaviorMode::Flee,
    ];

    /// Stable numeric code, used as a trace payload.
    pub fn code(self) -> u64 {
        match self {
            BehaviorMode::Idle => 0,
            BehaviorMode::Patrol => 1,
            BehaviorMode::Pursue => 2,
            BehaviorMode::Attack => 3,
            BehaviorMode::Flee => 4,
        }
    }

    pub fn from_code(code: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            BehaviorMode::Idle => "idle",
            BehaviorMode::Patrol => "patrol",
            BehaviorMode::Pursue => "pursue",
            BehaviorMode::Attack => "attack",
            BehaviorMode::Flee => "flee",
        }
    }
}

impl fmt::Display for BehaviorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a state may read or drive during one `process` call.
pub struct StateContext<'a> {
    pub tick: &'a TickContext,
    /// Stable id of the agent, for logging.
    pub npc: u64,
    pub nav: &'a mut dyn NavAgent,
    pub anim: &'a mut dyn Animator,
    pub audio: Option<&'a mut dyn AudioCue>,
    /// Target pose sampled at the start of the tick.
    pub target: Pose,
    pub waypoints: &'a WaypointRegistry,
    pub environment: &'a dyn Environment,
    pub perception: &'a Perception,
    pub config: &'a FsmConfig,
    pub rng: &'a mut dyn DeterministicRng,
}

impl StateContext<'_> {
    pub fn agent_pose(&self) -> Pose {
        self.nav.pose()
    }

    pub fn target_position(&self) -> Vec3 {
        self.target.position
    }

    pub fn can_see_target(&self) -> bool {
        self.perception
            .can_see_target(&self.nav.pose(), self.target.position)
    }

    pub fn is_target_behind_and_close(&self) -> bool {
        self.perception
            .is_target_behind_and_close(&self.nav.pose(), self.target.position)
    }

    pub fn can_attack_target(&self) -> bool {
        self.perception
            .can_attack_target(&self.nav.pose(), self.target.position)
    }

    /// `true` once the navigation handle has a path and less than the arrival tolerance left on it.
    pub fn has_arrived(&self) -> bool {
        self.nav.has_path() && self.nav.remaining_distance() < self.config.motion.arrival_tolerance
    }

    pub fn roll(&mut self, chance: Chance) -> bool {
        self.rng.roll(chance.threshold, chance.range)
    }
}

/// Hooks of one behavior mode.
///
/// `enter` runs exactly once before the first `update`, `exit` exactly once after the last.
/// Returning [`Transition::To`] from `enter` skips `update` entirely.
pub trait Lifecycle {
    fn enter(&mut self, _cx: &mut StateContext<'_>) -> Transition<BehaviorMode> {
        Transition::Stay
    }

    fn update(&mut self, cx: &mut StateContext<'_>) -> Transition<BehaviorMode>;

    fn exit(&mut self, _cx: &mut StateContext<'_>) {}
}

#[derive(Debug, Clone)]
enum Behavior {
    Idle(Idle),
    Patrol(Patrol),
    Pursue(Pursue),
    Attack(Attack),
    Flee(Flee),
}

impl Behavior {
    fn new(mode: BehaviorMode) -> Self {
        match mode {
            BehaviorMode::Idle => Behavior::Idle(Idle),
            BehaviorMode::Patrol => Behavior::Patrol(Patrol::default()),
            BehaviorMode::Pursue => Behavior::Pursue(Pursue),
            BehaviorMode::Attack => Behavior::Attack(Attack::default()),
            BehaviorMode::Flee => Behavior::Flee(Flee::default()),
        }
    }

    fn mode(&self) -> BehaviorMode {
        match self {
            Behavior::Idle(_) => BehaviorMode::Idle,
            Behavior::Patrol(_) => BehaviorMode::Patrol,
            Behavior::Pursue(_) => BehaviorMode::Pursue,
            Behavior::Attack(_) => BehaviorMode::Attack,
            Behavior::Flee(_) => BehaviorMode::Flee,
        }
    }

    fn hooks(&mut self) -> &mut dyn Lifecycle {
        match self {
            Behavior::Idle(s) => s,
            Behavior::Patrol(s) => s,
            Behavior::Pursue(s) => s,
            Behavior::Attack(s) => s,
            Behavior::Flee(s) => s,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Enter,
    Update,
    Exit(BehaviorMode),
}

/// Outcome of [`State::process`].
#[derive(Debug)]
#[must_use]
pub enum Step {
    /// The same instance, still in charge.
    Running(State),
    /// A freshly built successor that has already run its `enter` hook.
    Handoff(State),
}

impl Step {
    pub fn state(&self) -> &State {
        match self {
            Step::Running(state) | Step::Handoff(state) => state,
        }
    }

    pub fn into_state(self) -> State {
        match self {
            Step::Running(state) | Step::Handoff(state) => state,
        }
    }

    pub fn is_handoff(&self) -> bool {
        matches!(self, Step::Handoff(_))
    }
}

/// One activation of a behavior mode.
///
/// A new instance is built for every transition; `process` consumes the instance so a finished
/// state cannot be driven again.
#[derive(Debug, Clone)]
pub struct State {
    stage: Stage,
    behavior: Behavior,
}

impl Default for State {
    fn default() -> Self {
        State::new(BehaviorMode::Idle)
    }
}

impl State {
    pub fn new(mode: BehaviorMode) -> Self {
        Self {
            stage: Stage::Enter,
            behavior: Behavior::new(mode),
        }
    }

    pub fn mode(&self) -> BehaviorMode {
        self.behavior.mode()
    }

    pub fn phase(&self) -> LifecyclePhase {
        match self.stage {
            Stage::Enter => LifecyclePhase::Enter,
            Stage::Update => LifecyclePhase::Update,
            Stage::Exit(_) => LifecyclePhase::Exit,
        }
    }

    /// The successor decided on, once a transition has been requested.
    pub fn pending(&self) -> Option<BehaviorMode> {
        match self.stage {
            Stage::Exit(next) => Some(next),
            _ => None,
        }
    }

    /// Current patrol waypoint, while patrolling a non-empty route.
    pub fn waypoint_index(&self) -> Option<usize> {
        match &self.behavior {
            Behavior::Patrol(patrol) => patrol.index(),
            _ => None,
        }
    }

    /// Destination of a fleeing agent.
    pub fn safe_location(&self) -> Option<Vec3> {
        match &self.behavior {
            Behavior::Flee(flee) => flee.safe_location(),
            _ => None,
        }
    }

    /// Run at most one pass of enter, update and exit.
    ///
    /// The phases fall through within a single call: a fresh state enters and updates in the same
    /// tick, and a transition requested by either hook exits immediately. On exit the successor is
    /// built and entered before it is returned, so the new mode's setup is visible as soon as the
    /// handoff happens.
    pub fn process(mut self, cx: &mut StateContext<'_>) -> Step {
        if self.stage == Stage::Enter {
            self.enter(cx);
        }

        if self.stage == Stage::Update {
            if let Transition::To(next) = self.behavior.hooks().update(cx) {
                self.stage = Stage::Exit(next);
            }
        }

        let Stage::Exit(next) = self.stage else {
            return Step::Running(self);
        };

        tracing::trace!(npc = cx.npc, mode = %self.mode(), "exit");
        self.behavior.hooks().exit(cx);

        let mut successor = State::new(next);
        successor.enter(cx);
        Step::Handoff(successor)
    }

    fn enter(&mut self, cx: &mut StateContext<'_>) {
        tracing::trace!(npc = cx.npc, mode = %self.mode(), "enter");
        self.stage = match self.behavior.hooks().enter(cx) {
            Transition::Stay => Stage::Update,
            Transition::To(next) => Stage::Exit(next),
        };
    }
}
