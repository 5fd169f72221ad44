//! Deterministic, engine-agnostic AI kernel primitives.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod lifecycle;
pub mod math;
pub mod rng;
pub mod tick;

pub use lifecycle::{LifecyclePhase, Transition};
pub use math::{Pose, Quat, Vec3};
pub use rng::{DeterministicRng, SequenceRng, SplitMix64};
pub use tick::TickContext;
