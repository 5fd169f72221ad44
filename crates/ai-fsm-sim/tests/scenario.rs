use std::path::Path;

use ai_core::Vec3;
use ai_fsm::{BehaviorMode, Chance};
use ai_fsm_sim::{simulate, PlayerRoute, Scenario};

#[test]
fn built_in_scenario_is_valid_and_roundtrips() {
    let scenario = Scenario::default();
    scenario.validate().expect("built-in scenario validates");

    let yaml = scenario.to_yaml().expect("encode");
    let back = Scenario::from_yaml(&yaml).expect("decode");
    assert_eq!(back, scenario);
}

#[test]
fn partial_yaml_falls_back_to_defaults() {
    let scenario = Scenario::from_yaml(
        r#"
seed: 99
fsm:
  perception:
    attack_range: 4.0
"#,
    )
    .expect("parse");

    assert_eq!(scenario.seed, 99);
    assert_eq!(scenario.ticks, Scenario::default().ticks);
    assert_eq!(scenario.fsm.perception.attack_range, 4.0);
    assert_eq!(scenario.fsm.perception.visibility_distance, 10.0);
    assert_eq!(scenario.level, Scenario::default().level);
}

#[test]
fn invalid_tuning_is_rejected() {
    let err = Scenario::from_yaml(
        r#"
fsm:
  chances:
    patrol_to_idle: { threshold: 5, range: 0 }
"#,
    )
    .expect_err("zero range must be rejected");

    let chain = format!("{err:#}");
    assert!(chain.contains("chances.patrol_to_idle"), "{chain}");
}

#[test]
fn missing_file_reports_its_path() {
    let err = Scenario::load(Path::new("does/not/exist.yaml")).expect_err("missing file");
    assert!(err.to_string().contains("does/not/exist.yaml"));
}

#[test]
fn bundled_scenario_parses() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios/ambush.yaml");
    let scenario = Scenario::load(&path).expect("bundled scenario");

    assert_eq!(scenario.seed, 21);
    assert_eq!(scenario.level.checkpoints.len(), 4);
    assert_eq!(scenario.fsm.chances.idle_to_patrol, Chance::new(5, 100));
    assert_eq!(scenario.fsm.chances.patrol_to_idle, Chance::new(1, 1000));
}

#[test]
fn player_route_loops_at_constant_speed() {
    let route = PlayerRoute {
        speed: 2.0,
        route: vec![Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0)],
    };

    assert_eq!(route.position_at(0.0), Vec3::ZERO);
    assert!(route.position_at(1.0).distance(Vec3::new(2.0, 0.0, 0.0)) < 1e-5);
    assert!(route.position_at(3.0).distance(Vec3::new(2.0, 0.0, 0.0)) < 1e-5);
    assert!(route.position_at(4.0).distance(Vec3::ZERO) < 1e-5);
}

#[test]
fn degenerate_routes_stand_still() {
    let empty = PlayerRoute {
        speed: 1.0,
        route: Vec::new(),
    };
    assert_eq!(empty.position_at(10.0), Vec3::ZERO);

    let single = PlayerRoute {
        speed: 1.0,
        route: vec![Vec3::new(1.0, 0.0, 1.0)],
    };
    assert_eq!(single.position_at(10.0), Vec3::new(1.0, 0.0, 1.0));
}

#[test]
fn simulation_is_reproducible() {
    let scenario = Scenario::default();
    let a = simulate(&scenario, 600).expect("simulate");
    let b = simulate(&scenario, 600).expect("simulate");

    assert_eq!(a, b);
    assert_eq!(a.stats.total_ticks(), 600);
    assert_eq!(a.stats.transitions() as usize, a.transitions.len());
}

#[test]
fn transitions_chain_from_idle() {
    let report = simulate(&Scenario::default(), 2_000).expect("simulate");

    let mut mode = BehaviorMode::Idle;
    for t in &report.transitions {
        assert_eq!(t.from, mode, "tick {}", t.tick);
        assert_ne!(t.from, t.to);
        mode = t.to;
    }
    assert_eq!(mode, report.final_mode);
}

#[test]
fn summary_lists_every_mode() {
    let report = simulate(&Scenario::default(), 100).expect("simulate");
    let text = report.to_string();

    for mode in BehaviorMode::ALL {
        assert!(text.contains(mode.name()), "{text}");
    }
}
