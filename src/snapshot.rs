//! Point-in-time captures of every animated channel.
//!
//! The controller keeps two of these: the baseline (the object's home look,
//! sampled when a hold starts) and the phase start (the look observed when
//! exploding begins). Interpolation only ever blends snapshots; live sink
//! values are read at the sampling instants and nowhere else.

use crate::config::{ChannelNames, ColorOverride, PulseConfig};
use crate::constants::*;
use crate::lerp::Blend;
use crate::sink::{MaterialSink, TransformSink};
use glam::{Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub amplitude: f32,
    pub frequency: f32,
    pub sharpness: f32,
}

impl Blend for Ripple {
    fn blend(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            amplitude: f32::blend(&from.amplitude, &to.amplitude, t),
            frequency: f32::blend(&from.frequency, &to.frequency, t),
            sharpness: f32::blend(&from.sharpness, &to.sharpness, t),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    pub scale: Vec3,
    pub shading: f32,
    pub edge_softness: f32,
    pub alpha: f32,
    pub ripple: Ripple,
    /// Base color without alpha; carried through blends unchanged
    pub tint: Vec3,
}

impl Blend for Snapshot {
    fn blend(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            scale: Vec3::blend(&from.scale, &to.scale, t),
            shading: f32::blend(&from.shading, &to.shading, t),
            edge_softness: f32::blend(&from.edge_softness, &to.edge_softness, t),
            alpha: f32::blend(&from.alpha, &to.alpha, t),
            ripple: Ripple::blend(&from.ripple, &to.ripple, t),
            tint: to.tint,
        }
    }
}

impl Snapshot {
    /// Capture the home look from the object's current state.
    ///
    /// Channels the material does not hold, or holds as non-finite values,
    /// take the documented fallbacks. A stored zero is kept as zero.
    /// Color alpha that is not positive becomes 1.
    pub fn sample_baseline<T, M>(transform: &T, material: &M, names: &ChannelNames) -> Self
    where
        T: TransformSink + ?Sized,
        M: MaterialSink + ?Sized,
    {
        let (tint, alpha) = match material.get_color(&names.color) {
            Some(c) if c.is_finite() => {
                let alpha = if c.w > 0.0 { c.w } else { FALLBACK_ALPHA };
                (c.truncate(), alpha)
            }
            _ => (Vec3::from_array(FALLBACK_TINT), FALLBACK_ALPHA),
        };
        let float_or =
            |name: &str, fallback: f32| finite(material.get_float(name)).unwrap_or(fallback);
        Self {
            scale: transform.scale(),
            shading: float_or(&names.shading, FALLBACK_SHADING),
            edge_softness: float_or(&names.edge_softness, FALLBACK_EDGE_SOFTNESS),
            alpha,
            ripple: Ripple {
                amplitude: float_or(&names.ripple_amp, FALLBACK_RIPPLE_AMP),
                frequency: float_or(&names.ripple_freq, FALLBACK_RIPPLE_FREQ),
                sharpness: float_or(&names.ripple_sharp, FALLBACK_RIPPLE_SHARP),
            },
            tint,
        }
    }

    /// Capture whatever the object shows right now as a phase start.
    ///
    /// Unlike [`Snapshot::sample_baseline`] there are no constant fallbacks:
    /// a channel the sink cannot report continues from `baseline`.
    pub fn sample_current<T, M>(
        transform: &T,
        material: &M,
        names: &ChannelNames,
        baseline: &Snapshot,
    ) -> Self
    where
        T: TransformSink + ?Sized,
        M: MaterialSink + ?Sized,
    {
        let float_or =
            |name: &str, fallback: f32| finite(material.get_float(name)).unwrap_or(fallback);
        let color = material.get_color(&names.color).filter(|c| c.is_finite());
        Self {
            scale: transform.scale(),
            shading: float_or(&names.shading, baseline.shading),
            edge_softness: float_or(&names.edge_softness, baseline.edge_softness),
            alpha: match color {
                Some(c) if c.w > 0.0 => c.w,
                _ => baseline.alpha,
            },
            ripple: Ripple {
                amplitude: float_or(&names.ripple_amp, baseline.ripple.amplitude),
                frequency: float_or(&names.ripple_freq, baseline.ripple.frequency),
                sharpness: float_or(&names.ripple_sharp, baseline.ripple.sharpness),
            },
            tint: color.map_or(baseline.tint, |c| c.truncate()),
        }
    }

    /// The look while the hold input is down, `time` seconds into the clock.
    ///
    /// Only scale and alpha move; everything else stays at the baseline.
    pub fn held(&self, config: &PulseConfig, time: f64) -> Self {
        let phase = time * std::f64::consts::TAU * config.hold_pulse_hz as f64;
        let pulse = phase.sin() as f32 * config.hold_pulse_amp;
        let mul = (config.hold_base_scale_mul + pulse).max(MIN_HOLD_SCALE_MUL);
        Self {
            scale: self.scale * mul,
            alpha: self.alpha * config.hold_alpha_mul,
            ..*self
        }
    }

    /// The peak of the explode phase for this baseline.
    pub fn explode_target(&self, config: &PulseConfig) -> Self {
        Self {
            scale: self.scale * config.explode_scale_mul,
            shading: config.explode_shading,
            edge_softness: self.edge_softness * config.explode_edge_softness_mul,
            alpha: config.explode_min_alpha,
            ripple: Ripple {
                amplitude: config.explode_ripple_amp,
                frequency: config.explode_ripple_freq,
                sharpness: config.explode_ripple_sharp,
            },
            tint: self.tint,
        }
    }

    /// Write scale once and each material channel once.
    pub fn apply<T, M>(
        &self,
        transform: &mut T,
        material: &mut M,
        names: &ChannelNames,
        color_override: &ColorOverride,
    ) where
        T: TransformSink + ?Sized,
        M: MaterialSink + ?Sized,
    {
        transform.set_scale(self.scale);
        material.set_float(&names.shading, self.shading);
        material.set_float(&names.edge_softness, self.edge_softness);
        material.set_float(&names.ripple_amp, self.ripple.amplitude);
        material.set_float(&names.ripple_freq, self.ripple.frequency);
        material.set_float(&names.ripple_sharp, self.ripple.sharpness);
        material.set_color(&names.color, self.color(color_override));
    }

    /// RGBA written to the color channel.
    pub fn color(&self, color_override: &ColorOverride) -> Vec4 {
        let rgb = if color_override.enabled {
            color_override.color.truncate()
        } else {
            self.tint
        };
        rgb.extend(self.alpha)
    }
}

#[inline]
fn finite(v: Option<f32>) -> Option<f32> {
    v.filter(|x| x.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{PropertyBlock, TransformState};

    #[test]
    fn held_scale_never_collapses() {
        let base = Snapshot::sample_baseline(
            &TransformState::default(),
            &PropertyBlock::new(),
            &ChannelNames::default(),
        );
        let config = PulseConfig {
            hold_base_scale_mul: -2.0,
            ..PulseConfig::default()
        };
        let held = base.held(&config, 0.3);
        assert_eq!(held.scale, Vec3::splat(MIN_HOLD_SCALE_MUL));
    }

    #[test]
    fn color_override_keeps_animated_alpha() {
        let snap = Snapshot {
            scale: Vec3::ONE,
            shading: 0.0,
            edge_softness: 0.01,
            alpha: 0.4,
            ripple: Ripple {
                amplitude: 0.06,
                frequency: 8.0,
                sharpness: 2.0,
            },
            tint: Vec3::new(0.2, 0.3, 0.4),
        };
        let over = ColorOverride {
            enabled: true,
            color: Vec4::new(1.0, 0.0, 0.0, 0.9),
        };
        assert_eq!(snap.color(&over), Vec4::new(1.0, 0.0, 0.0, 0.4));
        assert_eq!(snap.color(&ColorOverride::default()), Vec4::new(0.2, 0.3, 0.4, 0.4));
    }
}
