//! Tooling primitives for deterministic game AI.
//!
//! This crate is intentionally lightweight and engine-agnostic. Higher-level integrations
//! (inspectors, debug drawing) should live in dedicated adapter crates.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{
    NullTraceSink, SharedTraceLog, TraceEvent, TraceLog, TraceSink, TracingSink, VecTraceSink,
};
