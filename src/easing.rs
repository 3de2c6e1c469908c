//! Easing curves that remap normalized phase progress.
//!
//! A curve takes `u` in \[0, 1\] and returns the interpolation factor used by
//! the controller. The result is not required to stay inside \[0, 1\]: a
//! curve that overshoots makes every channel extrapolate past its target.
//!
//! ## Built-in curves
//!
//! - [`Easing::Linear`] - constant speed
//! - [`Easing::EaseIn`] - starts slow, ends fast
//! - [`Easing::EaseOut`] - starts fast, ends slow
//! - [`Easing::EaseInOut`] - smooth start and end (the default)
//! - [`Easing::CubicBezier`] - CSS-style cubic bezier curve
//! - [`Easing::Custom`] - injected function

use std::sync::Arc;

/// Remapping of normalized time onto an interpolation factor
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
    /// CSS cubic-bezier curve (x1, y1, x2, y2)
    CubicBezier(f32, f32, f32, f32),
    /// Injected curve; may overshoot
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl Easing {
    /// Evaluate the curve at `u`.
    ///
    /// Built-in curves map 0 to 0 and 1 to 1 exactly so a phase that runs to
    /// completion lands on its targets.
    pub fn evaluate(&self, u: f32) -> f32 {
        match self {
            Easing::Linear => u,
            Easing::EaseIn => u * u,
            Easing::EaseOut => u * (2.0 - u),
            Easing::EaseInOut => smoothstep(u),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                if u <= 0.0 {
                    0.0
                } else if u >= 1.0 {
                    1.0
                } else {
                    cubic_bezier(u, *x1, *y1, *x2, *y2)
                }
            }
            Easing::Custom(f) => f(u),
        }
    }

    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        Easing::Custom(Arc::new(f))
    }
}

impl std::fmt::Debug for Easing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Easing::Linear => write!(f, "Linear"),
            Easing::EaseIn => write!(f, "EaseIn"),
            Easing::EaseOut => write!(f, "EaseOut"),
            Easing::EaseInOut => write!(f, "EaseInOut"),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "CubicBezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
            Easing::Custom(_) => write!(f, "Custom"),
        }
    }
}

// Hermite ease with zero tangents at both ends
#[inline]
fn smoothstep(u: f32) -> f32 {
    u * u * (3.0 - 2.0 * u)
}

/// Solve x(t) = u with Newton-Raphson, then return y(t).
/// Assumes x1, x2 in [0, 1].
fn cubic_bezier(u: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let mut t = u;
    for _ in 0..8 {
        let x = bezier_component(t, x1, x2) - u;
        let slope = bezier_slope(t, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        t -= x / slope;
    }
    bezier_component(t, y1, y2)
}

#[inline]
fn bezier_component(t: f32, p1: f32, p2: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t
}

#[inline]
fn bezier_slope(t: f32, p1: f32, p2: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_curves_pin_endpoints() {
        let curves = [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::CubicBezier(0.25, 0.1, 0.25, 1.0),
        ];
        for c in &curves {
            assert_eq!(c.evaluate(0.0), 0.0, "{c:?} at 0");
            assert_eq!(c.evaluate(1.0), 1.0, "{c:?} at 1");
        }
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let e = Easing::EaseInOut;
        assert!((e.evaluate(0.5) - 0.5).abs() < 1e-6);
        assert!((e.evaluate(0.25) + e.evaluate(0.75) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn ease_in_and_out_bend_opposite_ways() {
        assert!(Easing::EaseIn.evaluate(0.5) < 0.5);
        assert!(Easing::EaseOut.evaluate(0.5) > 0.5);
    }

    #[test]
    fn custom_curve_may_overshoot() {
        let back = Easing::custom(|u| u + 0.5 * (u * std::f32::consts::PI).sin());
        assert!(back.evaluate(0.6) > 1.0);
        assert_eq!(back.evaluate(1.0), 1.0 + 0.5 * std::f32::consts::PI.sin());
    }
}
