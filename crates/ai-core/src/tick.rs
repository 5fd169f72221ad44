use crate::{rng, SplitMix64};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub tick: u64,
    pub dt_seconds: f32,
    pub seed: u64,
}

impl TickContext {
    pub fn new(tick: u64, dt_seconds: f32, seed: u64) -> Self {
        Self {
            tick,
            dt_seconds,
            seed,
        }
    }

    /// The context for the following frame, keeping `dt_seconds` and `seed`.
    pub fn next(self) -> Self {
        Self {
            tick: self.tick.wrapping_add(1),
            ..self
        }
    }

    /// Per-agent, per-tick generator.
    ///
    /// Two calls with the same `(seed, tick, agent, stream)` yield identical sequences, so replays
    /// do not depend on the order agents are ticked in.
    pub fn rng_for_agent(&self, agent: u64, stream: u64) -> SplitMix64 {
        let seed = rng::derive_seed(self.seed ^ rng::mix64(self.tick), agent, stream);
        SplitMix64::new(seed)
    }
}
