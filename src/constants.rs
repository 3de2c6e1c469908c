/// Timeline, sampling and default tuning constants.
///
/// These constants express intended behavior (floors, fallbacks, default
/// targets) and keep magic numbers out of the controller.
// Timeline
pub const DEFAULT_TOTAL_DURATION_SEC: f32 = 2.0;
pub const DEFAULT_EXPLODE_FRACTION: f32 = 0.10; // share of the cycle spent exploding
pub const MIN_TOTAL_DURATION_SEC: f32 = 0.05; // floor for externally set durations
pub const PHASE_DURATION_EPSILON_SEC: f32 = 0.0001; // keeps elapsed/duration finite

// Holding pulse
pub const DEFAULT_HOLD_BASE_SCALE_MUL: f32 = 0.96; // <1 shrinks slightly while held
pub const DEFAULT_HOLD_PULSE_AMP: f32 = 0.02;
pub const DEFAULT_HOLD_PULSE_HZ: f32 = 1.2;
pub const DEFAULT_HOLD_ALPHA_MUL: f32 = 1.0;
pub const MIN_HOLD_SCALE_MUL: f32 = 0.01; // avoids inverted or collapsed geometry

// Explode targets
pub const DEFAULT_EXPLODE_SCALE_MUL: f32 = 1.35;
pub const DEFAULT_EXPLODE_SHADING: f32 = 1.0;
pub const DEFAULT_EXPLODE_MIN_ALPHA: f32 = 0.35;
pub const DEFAULT_EXPLODE_EDGE_SOFTNESS_MUL: f32 = 3.0;
pub const DEFAULT_EXPLODE_RIPPLE_AMP: f32 = 0.12;
pub const DEFAULT_EXPLODE_RIPPLE_FREQ: f32 = 12.0;
pub const DEFAULT_EXPLODE_RIPPLE_SHARP: f32 = 4.0;

// Sampling fallbacks for channels the material does not hold
pub const FALLBACK_SHADING: f32 = 0.0;
pub const FALLBACK_EDGE_SOFTNESS: f32 = 0.01;
pub const FALLBACK_RIPPLE_AMP: f32 = 0.06;
pub const FALLBACK_RIPPLE_FREQ: f32 = 8.0;
pub const FALLBACK_RIPPLE_SHARP: f32 = 2.0;
pub const FALLBACK_ALPHA: f32 = 1.0;
pub const FALLBACK_TINT: [f32; 3] = [1.0, 1.0, 1.0]; // white

// Default shader parameter names
pub const COLOR_PARAM: &str = "_MainColor";
pub const SHADING_PARAM: &str = "_Diffuse";
pub const EDGE_SOFTNESS_PARAM: &str = "_EdgeSoftness";
pub const RIPPLE_AMP_PARAM: &str = "_RippleAmp";
pub const RIPPLE_FREQ_PARAM: &str = "_RippleFreq";
pub const RIPPLE_SHARP_PARAM: &str = "_RippleSharp";
