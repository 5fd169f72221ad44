#![cfg(feature = "serde")]

use ai_tools::{TraceEvent, TraceLog};

#[test]
fn trace_log_json_roundtrip() {
    let log = TraceLog {
        events: vec![
            TraceEvent::new(1, "fsm.transition").with_a(0).with_b(1),
            TraceEvent::new(2, "fsm.waypoint").with_a(7).with_b(2),
            TraceEvent::new(3, "fsm.transition").with_a(1).with_b(2),
        ],
    };

    let json = serde_json::to_string(&log).expect("serialize");
    let roundtrip: TraceLog = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(roundtrip, log);
}
