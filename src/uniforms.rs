use crate::config::ChannelNames;
use crate::constants::*;
use crate::sink::{MaterialSink, PropertyBlock};
use glam::Vec3;

/// Ripple material parameters laid out for a uniform buffer.
///
/// Sixteen-byte aligned; the trailing padding keeps the block a multiple of
/// a vec4 as WGSL uniform layout requires.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RippleUniforms {
    pub color: [f32; 4],
    pub shading: f32,
    pub edge_softness: f32,
    pub ripple_amp: f32,
    pub ripple_freq: f32,
    pub ripple_sharp: f32,
    pub _pad: [f32; 3],
}

impl RippleUniforms {
    /// Pack the channels stored in `block`; missing ones use the sampling
    /// fallbacks so an untouched block still renders.
    pub fn from_block(block: &PropertyBlock, names: &ChannelNames) -> Self {
        let color = block
            .get_color(&names.color)
            .unwrap_or_else(|| Vec3::from_array(FALLBACK_TINT).extend(FALLBACK_ALPHA));
        let float = |name: &str, fallback: f32| block.get_float(name).unwrap_or(fallback);
        Self {
            color: color.to_array(),
            shading: float(&names.shading, FALLBACK_SHADING),
            edge_softness: float(&names.edge_softness, FALLBACK_EDGE_SOFTNESS),
            ripple_amp: float(&names.ripple_amp, FALLBACK_RIPPLE_AMP),
            ripple_freq: float(&names.ripple_freq, FALLBACK_RIPPLE_FREQ),
            ripple_sharp: float(&names.ripple_sharp, FALLBACK_RIPPLE_SHARP),
            _pad: [0.0; 3],
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn layout_is_vec4_aligned() {
        assert_eq!(std::mem::size_of::<RippleUniforms>() % 16, 0);
        assert_eq!(std::mem::size_of::<RippleUniforms>(), 48);
    }

    #[test]
    fn packs_stored_channels() {
        let names = ChannelNames::default();
        let block = PropertyBlock::new()
            .with_color(&names.color, Vec4::new(0.1, 0.2, 0.3, 0.5))
            .with_float(&names.ripple_freq, 10.0);
        let u = RippleUniforms::from_block(&block, &names);
        assert_eq!(u.color, [0.1, 0.2, 0.3, 0.5]);
        assert_eq!(u.ripple_freq, 10.0);
        assert_eq!(u.ripple_amp, FALLBACK_RIPPLE_AMP);
        assert_eq!(u.as_bytes().len(), 48);
    }
}
