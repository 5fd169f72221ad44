use std::fmt;
use std::sync::Arc;

use ai_core::{Pose, TickContext};
use ai_fsm::{
    AgentContext, AudioCue, BehaviorMode, Controller, ModeStats, SharedPose, TriggerSet,
    WaypointRegistry, TRANSITION_TAG,
};
use ai_nav::{KinematicNavAgent, NavAgent};
use ai_tools::SharedTraceLog;
use anyhow::{Context, Result};
use serde::Serialize;

use crate::scenario::Scenario;

/// Attack sound that only reports itself in the log.
#[derive(Debug, Default)]
pub struct LoggedCue {
    npc: u64,
    playing: bool,
}

impl LoggedCue {
    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl AudioCue for LoggedCue {
    fn play(&mut self) {
        self.playing = true;
        tracing::info!(npc = self.npc, "gunfire starts");
    }

    fn stop(&mut self) {
        self.playing = false;
        tracing::info!(npc = self.npc, "gunfire stops");
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionRecord {
    pub tick: u64,
    pub from: BehaviorMode,
    pub to: BehaviorMode,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub ticks: u64,
    pub dt: f32,
    pub final_mode: BehaviorMode,
    pub transitions: Vec<TransitionRecord>,
    pub stats: ModeStats,
}

impl Report {
    /// Seconds spent in `mode`.
    pub fn seconds_in(&self, mode: BehaviorMode) -> f32 {
        self.stats.ticks_in(mode) as f32 * self.dt
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "NPC behavior summary")?;
        writeln!(f, "====================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Ticks: {} ({:.1}s), transitions: {}, final mode: {}",
            self.ticks,
            self.ticks as f32 * self.dt,
            self.stats.transitions(),
            self.final_mode
        )?;
        writeln!(f)?;
        for mode in BehaviorMode::ALL {
            let ticks = self.stats.ticks_in(mode);
            let share = if self.ticks == 0 {
                0.0
            } else {
                100.0 * ticks as f32 / self.ticks as f32
            };
            writeln!(
                f,
                "  {:<7} {:>6} ticks {:>7.1}s {:>5.1}%",
                mode.name(),
                ticks,
                self.seconds_in(mode),
                share
            )?;
        }
        Ok(())
    }
}

/// Run `scenario` for `ticks` ticks against the reference collaborators.
pub fn simulate(scenario: &Scenario, ticks: u64) -> Result<Report> {
    let spawn = &scenario.npc;
    let nav = KinematicNavAgent::new(Pose::facing(spawn.position, spawn.facing))
        .with_turn_rate(spawn.turn_rate);
    let player = SharedPose::new(Pose::at(scenario.player.position_at(0.0)));

    let context = AgentContext::new(nav, TriggerSet::new(), player.clone());
    let context = if spawn.audio {
        context.with_audio(LoggedCue {
            npc: spawn.id,
            playing: false,
        })
    } else {
        AgentContext {
            nav: context.nav,
            anim: context.anim,
            target: context.target,
            audio: None,
        }
    };

    let level = scenario.level.clone();
    let waypoints = Arc::new(WaypointRegistry::from_environment(&level));
    let log = SharedTraceLog::new();

    let mut npc = Controller::new(spawn.id, context, waypoints, Arc::new(level))
        .with_config(scenario.fsm)
        .context("Invalid fsm config")?
        .with_trace_sink(log.clone());

    let mut ctx = TickContext::new(0, scenario.dt, scenario.seed);
    for _ in 0..ticks {
        let seconds = ctx.tick as f32 * ctx.dt_seconds;
        player.set(Pose::at(scenario.player.position_at(seconds)));

        npc.tick(&ctx);
        npc.context_mut().nav.step(ctx.dt_seconds);
        ctx = ctx.next();
    }

    let transitions = log
        .snapshot()
        .with_tag(TRANSITION_TAG)
        .filter_map(|event| {
            Some(TransitionRecord {
                tick: event.tick,
                from: BehaviorMode::from_code(event.a)?,
                to: BehaviorMode::from_code(event.b)?,
            })
        })
        .collect();

    let pose = npc.context().nav.pose();
    tracing::debug!(
        npc = spawn.id,
        x = pose.position.x,
        z = pose.position.z,
        "simulation finished"
    );

    Ok(Report {
        ticks,
        dt: scenario.dt,
        final_mode: npc.mode(),
        transitions,
        stats: *npc.stats(),
    })
}
