// Host-side tests for configuration parsing and the duration split.
#![cfg(feature = "serde")]

use glam::Vec4;
use rand::prelude::*;
use ripple_pulse::constants::*;
use ripple_pulse::{ConfigError, Easing, PhaseDurations, PulseConfig};

#[test]
fn split_is_positive_and_sums_to_total() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let total: f32 = rng.gen_range(MIN_TOTAL_DURATION_SEC..30.0);
        let fraction: f32 = rng.gen_range(0.0..=1.0);
        let d = PhaseDurations::split(total, fraction);
        assert!(d.explode > 0.0 && d.settle > 0.0, "{total} {fraction} -> {d:?}");
        if fraction > 0.0 && fraction < 1.0 && total * fraction.min(1.0 - fraction) > 0.001 {
            assert!(
                (d.total() - total).abs() <= total * 1e-6,
                "{total} {fraction} -> {d:?}"
            );
        }
    }
}

#[test]
fn split_clamps_fraction_out_of_range() {
    assert_eq!(PhaseDurations::split(1.0, -0.5), PhaseDurations::split(1.0, 0.0));
    assert_eq!(PhaseDurations::split(1.0, 7.0), PhaseDurations::split(1.0, 1.0));
}

#[test]
fn empty_document_yields_defaults() {
    let c = PulseConfig::from_toml_str("").unwrap();
    assert_eq!(c.total_duration, DEFAULT_TOTAL_DURATION_SEC);
    assert_eq!(c.explode_fraction, DEFAULT_EXPLODE_FRACTION);
    assert_eq!(c.channels.shading, SHADING_PARAM);
    assert!(matches!(c.explode_ease, Easing::EaseInOut));
}

#[test]
fn document_overrides_selected_fields() {
    let src = r#"
        total_duration = 3.0
        explode_fraction = 0.25
        hold_pulse_hz = 2.0
        explode_ease = "ease_out"
        settle_ease = { cubic_bezier = [0.25, 0.1, 0.25, 1.0] }

        [channels]
        shading = "u_shading"

        [color_override]
        enabled = true
        color = [1.0, 0.5, 0.0, 1.0]
    "#;
    let c = PulseConfig::from_toml_str(src).unwrap();
    assert_eq!(c.total_duration, 3.0);
    assert_eq!(c.hold_pulse_hz, 2.0);
    assert!(matches!(c.explode_ease, Easing::EaseOut));
    assert!(matches!(c.settle_ease, Easing::CubicBezier(..)));
    assert_eq!(c.channels.shading, "u_shading");
    assert_eq!(c.channels.color, COLOR_PARAM);
    assert!(c.color_override.enabled);
    assert_eq!(c.color_override.color, Vec4::new(1.0, 0.5, 0.0, 1.0));

    let d = c.durations();
    assert!((d.explode - 0.75).abs() < 1e-6);
    assert!((d.settle - 2.25).abs() < 1e-6);
}

#[test]
fn parsed_values_are_sanitized() {
    let c = PulseConfig::from_toml_str("total_duration = 0.0\nexplode_min_alpha = 2.0").unwrap();
    assert_eq!(c.total_duration, MIN_TOTAL_DURATION_SEC);
    assert_eq!(c.explode_min_alpha, 1.0);
}

#[test]
fn malformed_document_is_a_parse_error() {
    let err = PulseConfig::from_toml_str("total_duration = \"long\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = PulseConfig::load("/definitely/not/here/pulse.toml").unwrap_err();
    match err {
        ConfigError::Io { path, .. } => assert!(path.ends_with("pulse.toml")),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn io_error_keeps_its_source() {
    let err = PulseConfig::load("/definitely/not/here/pulse.toml").unwrap_err();
    let source = std::error::Error::source(&err).expect("io source");
    assert!(source.downcast_ref::<std::io::Error>().is_some());
    assert!(err.to_string().contains("pulse.toml"));
}
