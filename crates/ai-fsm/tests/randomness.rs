mod common;

use ai_core::TickContext;
use ai_fsm::{BehaviorMode, Chance, FsmConfig, State, TRANSITION_STREAM, TRANSITION_TAG};
use ai_tools::SharedTraceLog;

use common::{controller, far_behind, Rig, ScriptedNav};

#[test]
fn idle_to_patrol_rate_converges_on_two_percent() {
    let mut rig = Rig::new();
    let trials = 50_000u64;
    let mut started = 0u64;

    for tick in 0..trials {
        let ctx = TickContext::new(tick, 0.1, 0xC0FFEE);
        rig.rng = Box::new(ctx.rng_for_agent(7, TRANSITION_STREAM));
        rig.anim.clear_history();

        if rig.process(State::new(BehaviorMode::Idle)).state().mode() == BehaviorMode::Patrol {
            started += 1;
        }
    }

    let rate = started as f64 / trials as f64;
    assert!((0.017..=0.023).contains(&rate), "rate {rate}");
}

#[test]
fn controller_rolls_once_per_idle_tick() {
    let mut config = FsmConfig::default();
    config.chances.patrol_to_idle = Chance::new(1, 1);

    let log = SharedTraceLog::new();
    let mut npc = controller(11, ScriptedNav::default(), far_behind())
        .with_config(config)
        .expect("valid config")
        .with_trace_sink(log.clone());

    let mut ctx = TickContext::new(0, 0.05, 99);
    for _ in 0..40_000 {
        npc.tick(&ctx);
        ctx = ctx.next();
    }

    let idle_ticks = npc.stats().ticks_in(BehaviorMode::Idle);
    let snapshot = log.snapshot();
    let started = snapshot
        .with_tag(TRANSITION_TAG)
        .filter(|e| e.a == BehaviorMode::Idle.code() && e.b == BehaviorMode::Patrol.code())
        .count();

    let rate = started as f64 / idle_ticks as f64;
    assert!((0.016..=0.024).contains(&rate), "rate {rate}");
}

#[test]
fn same_seed_replays_the_same_history() {
    let run = |seed: u64| {
        let mut npc = controller(5, ScriptedNav::default(), far_behind());
        let mut ctx = TickContext::new(0, 0.05, seed);
        let mut modes = Vec::with_capacity(3_000);
        for _ in 0..3_000 {
            modes.push(npc.tick(&ctx));
            ctx = ctx.next();
        }
        modes
    };

    let a = run(1234);
    assert_eq!(a, run(1234));
    assert_ne!(a, run(4321));
    assert!(a.contains(&BehaviorMode::Patrol));
}
