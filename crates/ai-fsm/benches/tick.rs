use std::sync::Arc;

use ai_core::{Pose, TickContext, Vec3};
use ai_fsm::{
    tick_controllers, AgentContext, Controller, Perception, PerceptionConfig, SharedPose,
    StaticEnvironment, TriggerSet, WaypointRegistry,
};
use ai_nav::{KinematicNavAgent, NavAgent};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn level() -> StaticEnvironment {
    (0..8)
        .fold(StaticEnvironment::new(), |env, i| {
            let angle = i as f32 * std::f32::consts::TAU / 8.0;
            env.with_checkpoint(
                format!("cp-{i:02}"),
                Vec3::new(20.0 * angle.cos(), 0.0, 20.0 * angle.sin()),
            )
        })
        .with_safe_location(Vec3::new(-40.0, 0.0, -40.0))
}

fn bench_perception(c: &mut Criterion) {
    let mut group = c.benchmark_group("ai-fsm/perception");
    let perception = Perception::new(PerceptionConfig::default());
    let agent = Pose::facing(Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0));

    group.bench_function("all_predicates", |b| {
        let mut t = 0.0f32;
        b.iter(|| {
            t += 0.01;
            let target = Vec3::new(8.0 * t.cos(), 0.0, 8.0 * t.sin());
            black_box((
                perception.can_see_target(&agent, target),
                perception.is_target_behind_and_close(&agent, target),
                perception.can_attack_target(&agent, target),
            ))
        })
    });

    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("ai-fsm/tick");
    let env = level();
    let waypoints = Arc::new(WaypointRegistry::from_environment(&env));
    let env = Arc::new(env);

    group.bench_function("single_controller", |b| {
        let target = SharedPose::new(Pose::at(Vec3::new(0.0, 0.0, -30.0)));
        let context = AgentContext::new(
            KinematicNavAgent::new(Pose::default()),
            TriggerSet::new(),
            target.clone(),
        );
        let mut npc = Controller::new(1, context, Arc::clone(&waypoints), env.clone());
        let mut ctx = TickContext::new(0, 0.016, 3);
        b.iter(|| {
            let t = ctx.tick as f32 * 0.01;
            target.set(Pose::at(Vec3::new(12.0 * t.cos(), 0.0, 12.0 * t.sin())));
            black_box(npc.tick(&ctx));
            npc.context_mut().nav.step(ctx.dt_seconds);
            ctx = ctx.next();
        })
    });

    group.bench_function("batch_256", |b| {
        let target = SharedPose::new(Pose::at(Vec3::new(5.0, 0.0, 5.0)));
        let mut npcs: Vec<_> = (0..256u64)
            .map(|id| {
                let spawn = Vec3::new((id % 16) as f32 * 3.0, 0.0, (id / 16) as f32 * 3.0);
                let context = AgentContext::new(
                    KinematicNavAgent::new(Pose::at(spawn)),
                    TriggerSet::new(),
                    target.clone(),
                );
                Controller::new(id, context, Arc::clone(&waypoints), env.clone())
            })
            .collect();
        let mut ctx = TickContext::new(0, 0.016, 11);
        b.iter(|| {
            tick_controllers(&ctx, &mut npcs);
            for npc in npcs.iter_mut() {
                npc.context_mut().nav.step(ctx.dt_seconds);
            }
            black_box(npcs[0].context().nav.pose());
            ctx = ctx.next();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_perception, bench_tick);
criterion_main!(benches);
