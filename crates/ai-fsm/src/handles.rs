use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock};

use ai_core::Pose;

/// Animation trigger names understood by every animator the states drive.
pub mod triggers {
    pub const IDLE: &str = "idle";
    pub const WALKING: &str = "walking";
    pub const RUNNING: &str = "running";
    pub const SHOOTING: &str = "shooting";

    pub const ALL: [&str; 4] = [IDLE, WALKING, RUNNING, SHOOTING];
}

pub trait Animator {
    fn set_trigger(&mut self, name: &str);
    fn clear_trigger(&mut self, name: &str);
}

impl<A: Animator + ?Sized> Animator for Box<A> {
    fn set_trigger(&mut self, name: &str) {
        (**self).set_trigger(name)
    }

    fn clear_trigger(&mut self, name: &str) {
        (**self).clear_trigger(name)
    }
}

/// A looping sound attached to the agent, e.g. gunfire.
pub trait AudioCue {
    fn play(&mut self);
    fn stop(&mut self);
}

impl<S: AudioCue + ?Sized> AudioCue for Box<S> {
    fn play(&mut self) {
        (**self).play()
    }

    fn stop(&mut self) {
        (**self).stop()
    }
}

/// Placeholder audio type for agents built without a sound source.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SilentCue;

impl AudioCue for SilentCue {
    fn play(&mut self) {}
    fn stop(&mut self) {}
}

/// Anything with a world pose the agent can look at.
pub trait Spatial {
    fn pose(&self) -> Pose;
}

impl Spatial for Pose {
    fn pose(&self) -> Pose {
        *self
    }
}

impl<T: Spatial + ?Sized> Spatial for Box<T> {
    fn pose(&self) -> Pose {
        (**self).pose()
    }
}

/// A pose written by the host and read by one or more controllers.
#[derive(Debug, Default, Clone)]
pub struct SharedPose(Arc<RwLock<Pose>>);

impl SharedPose {
    pub fn new(pose: Pose) -> Self {
        Self(Arc::new(RwLock::new(pose)))
    }

    pub fn set(&self, pose: Pose) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = pose;
    }
}

impl Spatial for SharedPose {
    fn pose(&self) -> Pose {
        *self.0.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerCall {
    Set(String),
    Clear(String),
}

/// Reference [`Animator`]: the set of active triggers plus every call in order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TriggerSet {
    active: BTreeSet<String>,
    history: Vec<TriggerCall>,
}

impl TriggerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.active.contains(name)
    }

    pub fn active(&self) -> impl Iterator<Item = &str> + '_ {
        self.active.iter().map(String::as_str)
    }

    pub fn history(&self) -> &[TriggerCall] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl Animator for TriggerSet {
    fn set_trigger(&mut self, name: &str) {
        self.active.insert(name.to_owned());
        self.history.push(TriggerCall::Set(name.to_owned()));
    }

    fn clear_trigger(&mut self, name: &str) {
        self.active.remove(name);
        self.history.push(TriggerCall::Clear(name.to_owned()));
    }
}

/// The collaborators of one agent, owned by its controller and lent to each state in turn.
///
/// The navigation handle also carries the agent's own pose.
#[derive(Debug, Clone)]
pub struct AgentContext<N, A, T, S = SilentCue> {
    pub nav: N,
    pub anim: A,
    pub target: T,
    pub audio: Option<S>,
}

impl<N, A, T> AgentContext<N, A, T> {
    pub fn new(nav: N, anim: A, target: T) -> Self {
        Self {
            nav,
            anim,
            target,
            audio: None,
        }
    }
}

impl<N, A, T, S> AgentContext<N, A, T, S> {
    pub fn with_audio<S2>(self, audio: S2) -> AgentContext<N, A, T, S2> {
        AgentContext {
            nav: self.nav,
            anim: self.anim,
            target: self.target,
            audio: Some(audio),
        }
    }
}
