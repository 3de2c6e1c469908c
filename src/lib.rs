//! Input-driven pulse, explode and settle animation for a single
//! ripple-shaded object.
//!
//! While a hold input is down the object shrinks slightly and pulses. On
//! release it bursts outward (larger scale, stronger shading, softer edges,
//! boosted ripples, lower alpha) and then settles back to the look it had
//! before the hold. All of this is driven by [`PulseController::tick`] once
//! per frame against a [`TransformSink`] and a [`MaterialSink`].
//!
//! The crate does not depend on an engine: the in-memory [`TransformState`]
//! and [`PropertyBlock`] sinks can be packed into GPU uniforms with
//! [`RippleUniforms`], or the traits can be implemented over any renderer.

pub mod clock;
pub mod config;
pub mod constants;
pub mod controller;
pub mod easing;
pub mod input;
pub mod lerp;
pub mod sink;
pub mod snapshot;
pub mod uniforms;

pub use clock::{FrameClock, FrameTime};
#[cfg(feature = "serde")]
pub use config::ConfigError;
pub use config::{ChannelNames, ColorOverride, PhaseDurations, PulseConfig};
pub use controller::{Phase, PulseController};
pub use easing::Easing;
pub use input::{is_hold_key, EdgeDetector, EdgeQueue, HoldEdge};
pub use lerp::Blend;
pub use sink::{MaterialSink, ParamValue, PropertyBlock, TransformSink, TransformState};
pub use snapshot::{Ripple, Snapshot};
pub use uniforms::RippleUniforms;
