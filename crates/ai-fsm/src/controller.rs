use std::sync::Arc;

use ai_core::{DeterministicRng, LifecyclePhase, TickContext};
use ai_nav::NavAgent;
use ai_tools::{NullTraceSink, TraceEvent, TraceSink};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::FsmConfig;
use crate::error::FsmResult;
use crate::handles::{AgentContext, Animator, AudioCue, SilentCue, Spatial};
use crate::perception::Perception;
use crate::state::{BehaviorMode, State, StateContext, Step};
use crate::waypoints::WaypointRegistry;
use crate::world::Environment;

/// Trace tag of a mode change; `a` is the previous mode code, `b` the new one.
pub const TRANSITION_TAG: &str = "fsm.transition";

/// RNG stream the per-tick transition rolls are drawn from.
pub const TRANSITION_STREAM: u64 = 0x0F5A_0001;

/// Time spent in each mode and the number of mode changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ModeStats {
    ticks: [u64; 5],
    transitions: u64,
}

impl ModeStats {
    /// Ticks whose `process` call started in `mode`.
    pub fn ticks_in(&self, mode: BehaviorMode) -> u64 {
        self.ticks[mode.code() as usize]
    }

    pub fn total_ticks(&self) -> u64 {
        self.ticks.iter().sum()
    }

    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    fn record(&mut self, mode: BehaviorMode, handoff: bool) {
        self.ticks[mode.code() as usize] += 1;
        if handoff {
            self.transitions += 1;
        }
    }
}

/// Drives one agent's behavior state machine, one `process` call per tick.
pub struct Controller<N, A, T, S = SilentCue> {
    id: u64,
    context: AgentContext<N, A, T, S>,
    state: State,
    waypoints: Arc<WaypointRegistry>,
    environment: Arc<dyn Environment + Send + Sync>,
    config: FsmConfig,
    perception: Perception,
    rng: Option<Box<dyn DeterministicRng + Send>>,
    trace: Box<dyn TraceSink + Send>,
    stats: ModeStats,
}

impl<N, A, T, S> Controller<N, A, T, S>
where
    N: NavAgent,
    A: Animator,
    T: Spatial,
    S: AudioCue,
{
    /// A controller in a fresh Idle state, using the default config.
    pub fn new(
        id: u64,
        context: AgentContext<N, A, T, S>,
        waypoints: Arc<WaypointRegistry>,
        environment: Arc<dyn Environment + Send + Sync>,
    ) -> Self {
        let config = FsmConfig::default();
        Self {
            id,
            context,
            state: State::new(BehaviorMode::Idle),
            waypoints,
            environment,
            perception: Perception::new(config.perception),
            config,
            rng: None,
            trace: Box::new(NullTraceSink),
            stats: ModeStats::default(),
        }
    }

    pub fn with_config(mut self, config: FsmConfig) -> FsmResult<Self> {
        config.validate()?;
        self.perception = Perception::new(config.perception);
        self.config = config;
        Ok(self)
    }

    /// Draw transition rolls from `rng` instead of the per-tick generator derived from the
    /// session seed.
    pub fn with_rng(mut self, rng: impl DeterministicRng + Send + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    pub fn with_trace_sink(mut self, sink: impl TraceSink + Send + 'static) -> Self {
        self.trace = Box::new(sink);
        self
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn mode(&self) -> BehaviorMode {
        self.state.mode()
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.state.phase()
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn config(&self) -> &FsmConfig {
        &self.config
    }

    pub fn waypoints(&self) -> &Arc<WaypointRegistry> {
        &self.waypoints
    }

    pub fn stats(&self) -> &ModeStats {
        &self.stats
    }

    pub fn context(&self) -> &AgentContext<N, A, T, S> {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut AgentContext<N, A, T, S> {
        &mut self.context
    }

    pub fn into_context(self) -> AgentContext<N, A, T, S> {
        self.context
    }

    /// Advance the state machine by one tick and return the mode in charge afterwards.
    pub fn tick(&mut self, ctx: &TickContext) -> BehaviorMode {
        let mut derived = ctx.rng_for_agent(self.id, TRANSITION_STREAM);
        let rng: &mut dyn DeterministicRng = match self.rng.as_mut() {
            Some(rng) => &mut **rng,
            None => &mut derived,
        };

        let from = self.state.mode();
        let state = std::mem::take(&mut self.state);

        let mut cx = StateContext {
            tick: ctx,
            npc: self.id,
            nav: &mut self.context.nav,
            anim: &mut self.context.anim,
            audio: self
                .context
                .audio
                .as_mut()
                .map(|audio| audio as &mut dyn AudioCue),
            target: self.context.target.pose(),
            waypoints: &self.waypoints,
            environment: self.environment.as_ref(),
            perception: &self.perception,
            config: &self.config,
            rng,
        };

        let step = state.process(&mut cx);
        let handoff = step.is_handoff();
        self.state = step.into_state();
        self.stats.record(from, handoff);

        if handoff {
            let to = self.state.mode();
            tracing::debug!(npc = self.id, tick = ctx.tick, %from, %to, "behavior transition");
            self.trace.emit(
                TraceEvent::new(ctx.tick, TRANSITION_TAG)
                    .with_a(from.code())
                    .with_b(to.code()),
            );
        }

        self.state.mode()
    }
}

/// Tick every controller once, in ascending id order.
pub fn tick_controllers<N, A, T, S>(ctx: &TickContext, controllers: &mut [Controller<N, A, T, S>])
where
    N: NavAgent,
    A: Animator,
    T: Spatial,
    S: AudioCue,
{
    controllers.sort_by_key(|c| c.id);
    for controller in controllers.iter_mut() {
        controller.tick(ctx);
    }
}
