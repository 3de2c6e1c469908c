// Host-side tests for constants and their relationships.

use ripple_pulse::constants::*;
use ripple_pulse::{ChannelNames, PhaseDurations};

#[test]
#[allow(clippy::assertions_on_constants)]
fn timeline_constants_are_consistent() {
    assert!(DEFAULT_TOTAL_DURATION_SEC >= MIN_TOTAL_DURATION_SEC);
    assert!(DEFAULT_EXPLODE_FRACTION > 0.0 && DEFAULT_EXPLODE_FRACTION < 1.0);
    // Both phases of the shortest cycle are still longer than the floor
    assert!(MIN_TOTAL_DURATION_SEC * DEFAULT_EXPLODE_FRACTION > PHASE_DURATION_EPSILON_SEC);
    assert!(PHASE_DURATION_EPSILON_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn default_look_shrinks_while_held_and_grows_on_explode() {
    assert!(DEFAULT_HOLD_BASE_SCALE_MUL < 1.0);
    assert!(DEFAULT_HOLD_BASE_SCALE_MUL - DEFAULT_HOLD_PULSE_AMP > MIN_HOLD_SCALE_MUL);
    assert!(DEFAULT_EXPLODE_SCALE_MUL > 1.0);
    assert!(DEFAULT_EXPLODE_EDGE_SOFTNESS_MUL > 1.0);
    assert!(DEFAULT_EXPLODE_RIPPLE_AMP > FALLBACK_RIPPLE_AMP);
    assert!(DEFAULT_EXPLODE_RIPPLE_FREQ > FALLBACK_RIPPLE_FREQ);
    assert!(DEFAULT_EXPLODE_RIPPLE_SHARP > FALLBACK_RIPPLE_SHARP);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn unit_range_constants_stay_in_range() {
    for v in [
        DEFAULT_HOLD_ALPHA_MUL,
        DEFAULT_EXPLODE_SHADING,
        DEFAULT_EXPLODE_MIN_ALPHA,
        FALLBACK_SHADING,
        FALLBACK_ALPHA,
    ] {
        assert!((0.0..=1.0).contains(&v), "{v} outside [0, 1]");
    }
    assert!(FALLBACK_TINT.iter().all(|c| *c == 1.0));
}

#[test]
fn default_durations_match_documented_timeline() {
    let d = PhaseDurations::split(DEFAULT_TOTAL_DURATION_SEC, DEFAULT_EXPLODE_FRACTION);
    assert!((d.explode - 0.2).abs() < 1e-6);
    assert!((d.settle - 1.8).abs() < 1e-6);
}

#[test]
fn default_channel_names_are_distinct() {
    let names = ChannelNames::default();
    let mut all = vec![
        names.color,
        names.shading,
        names.edge_softness,
        names.ripple_amp,
        names.ripple_freq,
        names.ripple_sharp,
    ];
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 6);
}
