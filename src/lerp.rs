use glam::Vec3;

/// Types the controller can blend between two values.
///
/// `t = 0.0` returns `from`, `t = 1.0` returns `to`; `t` outside \[0, 1\]
/// extrapolates. The `from·(1−t) + to·t` form reproduces both endpoints
/// bit-exactly, which the settle snap and the explode targets rely on.
pub trait Blend {
    fn blend(from: &Self, to: &Self, t: f32) -> Self;
}

impl Blend for f32 {
    #[inline]
    fn blend(from: &Self, to: &Self, t: f32) -> Self {
        from * (1.0 - t) + to * t
    }
}

impl Blend for Vec3 {
    #[inline]
    fn blend(from: &Self, to: &Self, t: f32) -> Self {
        *from * (1.0 - t) + *to * t
    }
}
