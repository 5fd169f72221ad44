//! Per-agent behavior state machine for non-player characters.
//!
//! Five modes (idle, patrol, pursue, attack, flee) share one enter/update/exit lifecycle. A
//! [`Controller`] owns an agent's collaborators ([`AgentContext`]) and the current [`State`],
//! and advances it once per tick; states decide transitions from cone-based [`Perception`]
//! queries, the shared [`WaypointRegistry`] and seeded random rolls.
//!
//! The crate never touches an engine directly. Navigation, animation, audio and the level are
//! reached through the [`NavAgent`](ai_nav::NavAgent), [`Animator`], [`AudioCue`] and
//! [`Environment`] traits.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod error;
pub mod handles;
pub mod perception;
pub mod state;
pub mod waypoints;
pub mod world;

pub use config::{Chance, ChanceConfig, FsmConfig, MotionConfig, PerceptionConfig};
pub use controller::{tick_controllers, Controller, ModeStats, TRANSITION_STREAM, TRANSITION_TAG};
pub use error::{FsmError, FsmResult};
pub use handles::{
    triggers, AgentContext, Animator, AudioCue, SharedPose, SilentCue, Spatial, TriggerCall,
    TriggerSet,
};
pub use perception::Perception;
pub use state::{BehaviorMode, Lifecycle, State, StateContext, Step};
pub use waypoints::{WaypointCell, WaypointRegistry};
pub use world::{CheckpointMarker, Environment, StaticEnvironment};
