//! Navigation seam: the per-agent handle trait and a kinematic reference agent.
//!
//! Path planning is left to the host engine; this crate only fixes the queries an AI controller
//! issues each tick.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod kinematic;

pub use agent::NavAgent;
pub use kinematic::{KinematicNavAgent, NavPath};
