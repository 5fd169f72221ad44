//! Headless driver for the NPC behavior state machine.
//!
//! Loads a YAML [`Scenario`], runs one controller against the reference navigation agent and
//! animator, and reports how the NPC spent its time.

#![forbid(unsafe_code)]

pub mod run;
pub mod scenario;

pub use run::{simulate, LoggedCue, Report, TransitionRecord};
pub use scenario::{NpcSpawn, PlayerRoute, Scenario};
