//! Umbrella crate that re-exports the `ai-*` building blocks.
//!
//! Enable `fsm` (on by default) for the NPC behavior state machine; `core`, `nav` and `tools`
//! expose the deterministic kernel, the navigation seam and trace sinks on their own.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use ai_core as core;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use ai_tools as tools;

#[cfg(feature = "nav")]
#[cfg_attr(docsrs, doc(cfg(feature = "nav")))]
pub use ai_nav as nav;

#[cfg(feature = "fsm")]
#[cfg_attr(docsrs, doc(cfg(feature = "fsm")))]
pub use ai_fsm as fsm;

/// The handful of names most hosts need to spawn and tick an NPC.
#[cfg(feature = "fsm")]
#[cfg_attr(docsrs, doc(cfg(feature = "fsm")))]
pub mod prelude {
    pub use ai_core::{Pose, TickContext, Vec3};
    pub use ai_fsm::{
        tick_controllers, AgentContext, Animator, AudioCue, BehaviorMode, Controller,
        Environment, FsmConfig, Spatial, WaypointCell, WaypointRegistry,
    };
    pub use ai_nav::NavAgent;
}
