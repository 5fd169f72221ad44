use ai_core::{DeterministicRng, SequenceRng, SplitMix64, TickContext};

#[test]
fn split_mix_is_deterministic_for_same_seed() {
    let mut a = SplitMix64::new(7);
    let mut b = SplitMix64::new(7);
    for _ in 0..64 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn next_below_stays_in_range() {
    let mut rng = SplitMix64::new(99);
    for _ in 0..10_000 {
        assert!(rng.next_below(100) < 100);
    }
    assert_eq!(rng.next_below(0), 0);
}

#[test]
fn roll_with_zero_range_never_succeeds() {
    let mut rng = SequenceRng::always_low();
    assert!(!rng.roll(5, 0));
}

#[test]
fn sequence_rng_forces_roll_outcomes() {
    let mut low = SequenceRng::always_low();
    let mut high = SequenceRng::always_high();
    assert!(low.roll(2, 100));
    assert!(!high.roll(2, 100));
    assert_eq!(high.next_below(100), 99);
}

#[test]
fn roll_rate_matches_threshold() {
    let mut rng = SplitMix64::new(1234);
    let trials = 200_000;
    let hits = (0..trials).filter(|_| rng.roll(2, 100)).count();
    let rate = hits as f64 / trials as f64;
    assert!((rate - 0.02).abs() < 0.002, "rate was {rate}");
}

#[test]
fn tick_rng_differs_between_ticks_and_agents() {
    let ctx = TickContext::new(10, 0.1, 42);
    let a = ctx.rng_for_agent(1, 0).next_u64();
    let b = ctx.next().rng_for_agent(1, 0).next_u64();
    let c = ctx.rng_for_agent(2, 0).next_u64();
    let again = ctx.rng_for_agent(1, 0).next_u64();

    assert_ne!(a, b);
    assert_ne!(a, c);
    assert_eq!(a, again);
}
