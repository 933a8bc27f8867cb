//! Color blending and byte quantization shared by shading and output.

use super::vec3::Color;

/// Blend two colors channel by channel: `a * (1 - t) + b * t`.
#[inline(always)]
pub fn lerp_color(a: Color, b: Color, t: f64) -> Color {
    a.scale(1.0 - t) + b.scale(t)
}

/// Quantize a [0, 1] channel to a byte via `floor(255.99 * v)`.
///
/// Out-of-range input is clamped first; NaN maps to 0.
#[inline(always)]
pub fn channel_to_byte(v: f64) -> u8 {
    (255.99 * v.clamp(0.0, 1.0)).floor() as u8
}

/// Quantize a color into an opaque RGBA texel.
#[inline]
pub fn color_to_rgba(c: Color) -> [u8; 4] {
    [
        channel_to_byte(c.x),
        channel_to_byte(c.y),
        channel_to_byte(c.z),
        255,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec3::Vec3;

    #[test]
    fn test_lerp_color() {
        let c = lerp_color(Vec3::ZERO, Vec3::new(10.0, 2.0, -4.0), 0.5);
        assert!((c.x - 5.0).abs() < 1e-10);
        assert!((c.y - 1.0).abs() < 1e-10);
        assert!((c.z + 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_channel_to_byte() {
        assert_eq!(channel_to_byte(0.0), 0);
        assert_eq!(channel_to_byte(1.0), 255);
        assert_eq!(channel_to_byte(0.5), 127);
        assert_eq!(channel_to_byte(1.5), 255);
        assert_eq!(channel_to_byte(-0.2), 0);
        assert_eq!(channel_to_byte(f64::NAN), 0);
    }

    #[test]
    fn test_color_to_rgba_is_opaque() {
        let px = color_to_rgba(Vec3::new(0.75, 0.85, 1.0));
        assert_eq!(px, [191, 217, 255, 255]);
    }
}
