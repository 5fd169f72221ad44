#![allow(dead_code)]

use std::sync::Arc;

use ai_core::{DeterministicRng, Pose, Quat, SequenceRng, TickContext, Vec3};
use ai_fsm::{
    AgentContext, AudioCue, Controller, FsmConfig, Perception, State, StateContext,
    StaticEnvironment, Step, TriggerSet, WaypointRegistry,
};
use ai_nav::NavAgent;

/// Navigation double whose path state is set directly by the test.
#[derive(Debug, Clone)]
pub struct ScriptedNav {
    pub pose: Pose,
    pub destinations: Vec<Vec3>,
    pub has_path: bool,
    pub remaining: f32,
    pub speed: f32,
    pub halted: bool,
    pub turn_rate: f32,
}

impl Default for ScriptedNav {
    fn default() -> Self {
        Self {
            pose: Pose::default(),
            destinations: Vec::new(),
            has_path: true,
            remaining: 5.0,
            speed: 3.5,
            halted: false,
            turn_rate: 120.0,
        }
    }
}

impl ScriptedNav {
    pub fn destination(&self) -> Option<Vec3> {
        self.destinations.last().copied()
    }
}

impl NavAgent for ScriptedNav {
    fn pose(&self) -> Pose {
        self.pose
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.pose.rotation = rotation;
    }

    fn set_destination(&mut self, destination: Vec3) {
        self.destinations.push(destination);
    }

    fn has_path(&self) -> bool {
        self.has_path
    }

    fn remaining_distance(&self) -> f32 {
        self.remaining
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

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingAudio {
    pub plays: u32,
    pub stops: u32,
}

impl RecordingAudio {
    pub fn is_playing(&self) -> bool {
        self.plays > self.stops
    }
}

impl AudioCue for RecordingAudio {
    fn play(&mut self) {
        self.plays += 1;
    }

    fn stop(&mut self) {
        self.stops += 1;
    }
}

pub const SAFE_LOCATION: Vec3 = Vec3::new(-20.0, 0.0, -20.0);

/// Three checkpoints around the origin, registered out of name order.
pub fn environment() -> StaticEnvironment {
    StaticEnvironment::new()
        .with_checkpoint("cp-b", Vec3::new(10.0, 0.0, 10.0))
        .with_checkpoint("cp-a", Vec3::new(0.0, 0.0, 10.0))
        .with_checkpoint("cp-c", Vec3::new(10.0, 0.0, 0.0))
        .with_safe_location(SAFE_LOCATION)
}

/// A target the agent at the origin facing +Z can neither see nor be ambushed by.
pub fn far_behind() -> Pose {
    Pose::at(Vec3::new(0.0, 0.0, -50.0))
}

pub fn ahead(distance: f32) -> Pose {
    Pose::at(Vec3::new(0.0, 0.0, distance))
}

/// Everything a [`State`] needs, owned in one place so single states can be driven directly.
pub struct Rig {
    pub tick: TickContext,
    pub nav: ScriptedNav,
    pub anim: TriggerSet,
    pub audio: Option<RecordingAudio>,
    pub target: Pose,
    pub waypoints: WaypointRegistry,
    pub environment: StaticEnvironment,
    pub perception: Perception,
    pub config: FsmConfig,
    pub rng: Box<dyn DeterministicRng>,
}

impl Rig {
    /// Default config, a rng that never wins a roll and a target far out of sight.
    pub fn new() -> Self {
        let environment = environment();
        let config = FsmConfig::default();
        Self {
            tick: TickContext::new(0, 0.1, 42),
            nav: ScriptedNav::default(),
            anim: TriggerSet::new(),
            audio: Some(RecordingAudio::default()),
            target: far_behind(),
            waypoints: WaypointRegistry::from_environment(&environment),
            environment,
            perception: Perception::new(config.perception),
            config,
            rng: Box::new(SequenceRng::always_high()),
        }
    }

    pub fn process(&mut self, state: State) -> Step {
        let mut cx = StateContext {
            tick: &self.tick,
            npc: 1,
            nav: &mut self.nav,
            anim: &mut self.anim,
            audio: self
                .audio
                .as_mut()
                .map(|audio| audio as &mut dyn AudioCue),
            target: self.target,
            waypoints: &self.waypoints,
            environment: &self.environment,
            perception: &self.perception,
            config: &self.config,
            rng: &mut *self.rng,
        };
        let step = state.process(&mut cx);
        self.tick = self.tick.next();
        step
    }

    /// Enter `mode` and run its first update, asserting it is still in charge afterwards.
    pub fn settle(&mut self, state: State) -> State {
        let mode = state.mode();
        match self.process(state) {
            Step::Running(state) => state,
            Step::Handoff(next) => panic!("{mode} handed off to {} on entry", next.mode()),
        }
    }
}

pub type TestController = Controller<ScriptedNav, TriggerSet, Pose, RecordingAudio>;

pub fn controller(id: u64, nav: ScriptedNav, target: Pose) -> TestController {
    let environment = environment();
    let waypoints = Arc::new(WaypointRegistry::from_environment(&environment));
    let context = AgentContext::new(nav, TriggerSet::new(), target).with_audio(RecordingAudio::default());
    Controller::new(id, context, waypoints, Arc::new(environment))
}
