//! Controller configuration.
//!
//! Invalid values are never rejected. [`PulseConfig::sanitized`] clamps or
//! floors them so the controller always has a usable timeline, and the
//! derived phase durations come from [`PhaseDurations::split`].

use crate::constants::*;
use crate::easing::Easing;
use glam::Vec4;

#[cfg(feature = "serde")]
use std::path::Path;

/// Shader parameter names for the six material channels.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChannelNames {
    pub color: String,
    pub shading: String,
    pub edge_softness: String,
    pub ripple_amp: String,
    pub ripple_freq: String,
    pub ripple_sharp: String,
}

impl Default for ChannelNames {
    fn default() -> Self {
        Self {
            color: COLOR_PARAM.to_owned(),
            shading: SHADING_PARAM.to_owned(),
            edge_softness: EDGE_SOFTNESS_PARAM.to_owned(),
            ripple_amp: RIPPLE_AMP_PARAM.to_owned(),
            ripple_freq: RIPPLE_FREQ_PARAM.to_owned(),
            ripple_sharp: RIPPLE_SHARP_PARAM.to_owned(),
        }
    }
}

/// Replaces the sampled base color while keeping the animated alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColorOverride {
    pub enabled: bool,
    pub color: Vec4,
}

impl Default for ColorOverride {
    fn default() -> Self {
        Self {
            enabled: false,
            color: Vec4::ONE,
        }
    }
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PulseConfig {
    /// Seconds from release to rest
    pub total_duration: f32,
    /// Share of `total_duration` spent exploding, 0..1
    pub explode_fraction: f32,

    pub hold_base_scale_mul: f32,
    pub hold_pulse_amp: f32,
    pub hold_pulse_hz: f32,
    pub hold_alpha_mul: f32,

    pub explode_scale_mul: f32,
    pub explode_shading: f32,
    pub explode_min_alpha: f32,
    pub explode_edge_softness_mul: f32,
    pub explode_ripple_amp: f32,
    pub explode_ripple_freq: f32,
    pub explode_ripple_sharp: f32,

    pub explode_ease: Easing,
    pub settle_ease: Easing,

    pub channels: ChannelNames,
    pub color_override: ColorOverride,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            total_duration: DEFAULT_TOTAL_DURATION_SEC,
            explode_fraction: DEFAULT_EXPLODE_FRACTION,
            hold_base_scale_mul: DEFAULT_HOLD_BASE_SCALE_MUL,
            hold_pulse_amp: DEFAULT_HOLD_PULSE_AMP,
            hold_pulse_hz: DEFAULT_HOLD_PULSE_HZ,
            hold_alpha_mul: DEFAULT_HOLD_ALPHA_MUL,
            explode_scale_mul: DEFAULT_EXPLODE_SCALE_MUL,
            explode_shading: DEFAULT_EXPLODE_SHADING,
            explode_min_alpha: DEFAULT_EXPLODE_MIN_ALPHA,
            explode_edge_softness_mul: DEFAULT_EXPLODE_EDGE_SOFTNESS_MUL,
            explode_ripple_amp: DEFAULT_EXPLODE_RIPPLE_AMP,
            explode_ripple_freq: DEFAULT_EXPLODE_RIPPLE_FREQ,
            explode_ripple_sharp: DEFAULT_EXPLODE_RIPPLE_SHARP,
            explode_ease: Easing::default(),
            settle_ease: Easing::default(),
            channels: ChannelNames::default(),
            color_override: ColorOverride::default(),
        }
    }
}

impl PulseConfig {
    /// Clamp every out-of-range value into its valid range.
    pub fn sanitized(mut self) -> Self {
        self.total_duration = clamp_total_duration(self.total_duration);
        self.explode_fraction = clamp_fraction(self.explode_fraction);
        self.hold_alpha_mul = clamp01_or(self.hold_alpha_mul, DEFAULT_HOLD_ALPHA_MUL);
        self.explode_shading = clamp01_or(self.explode_shading, DEFAULT_EXPLODE_SHADING);
        self.explode_min_alpha = clamp01_or(self.explode_min_alpha, DEFAULT_EXPLODE_MIN_ALPHA);
        self
    }

    pub fn durations(&self) -> PhaseDurations {
        PhaseDurations::split(self.total_duration, self.explode_fraction)
    }

    /// Parse a TOML document; keys that are absent keep their defaults.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: PulseConfig = toml::from_str(src)?;
        Ok(config.sanitized())
    }

    #[cfg(feature = "serde")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&src)
    }
}

/// Floor a requested total duration; NaN falls back to the default.
pub fn clamp_total_duration(seconds: f32) -> f32 {
    if seconds.is_nan() {
        DEFAULT_TOTAL_DURATION_SEC
    } else {
        seconds.max(MIN_TOTAL_DURATION_SEC)
    }
}

fn clamp_fraction(fraction: f32) -> f32 {
    clamp01_or(fraction, DEFAULT_EXPLODE_FRACTION)
}

#[inline]
fn clamp01_or(v: f32, fallback: f32) -> f32 {
    if v.is_nan() {
        fallback
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Explode and settle lengths derived from one total duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseDurations {
    pub explode: f32,
    pub settle: f32,
}

impl PhaseDurations {
    /// Split `total` by `fraction`. Both parts are floored at
    /// [`PHASE_DURATION_EPSILON_SEC`] so progress never divides by zero.
    pub fn split(total: f32, fraction: f32) -> Self {
        let explode = (total * clamp_fraction(fraction)).max(PHASE_DURATION_EPSILON_SEC);
        let settle = (total - explode).max(PHASE_DURATION_EPSILON_SEC);
        Self { explode, settle }
    }

    pub fn total(&self) -> f32 {
        self.explode + self.settle
    }
}

#[cfg(feature = "serde")]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
