//! Color values and display conversion.
//!
//! Colors are linear RGB triples stored in a [`Vec3A`]. Channels are
//! unbounded while shading accumulates light and are only brought into
//! display range at output time.

use glam::Vec3A;

/// RGB color type using Vec3A for SIMD optimization.
pub type Color = Vec3A;

/// Pure white.
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

/// Middle grey.
pub const GREY: Color = Color::new(0.5, 0.5, 0.5);

/// Pure black.
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

/// Clamp a channel's high side to 1.0.
///
/// Negative channels pass through unchanged; the integer cast in
/// [`to_display`] saturates them to 0 at the boundary.
pub fn legalize(d: f32) -> f32 {
    if d > 1.0 {
        1.0
    } else {
        d
    }
}

/// Convert a linear color to displayable 8-bit channels.
///
/// Each channel is legalized, scaled by 255, and floored.
pub fn to_display(c: Color) -> [u8; 3] {
    [
        (legalize(c.x) * 255.0) as u8,
        (legalize(c.y) * 255.0) as u8,
        (legalize(c.z) * 255.0) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legalize_clamps_high_side_only() {
        assert_eq!(legalize(2.5), 1.0);
        assert_eq!(legalize(0.25), 0.25);
        assert_eq!(legalize(-0.5), -0.5);
    }

    #[test]
    fn test_to_display_scales_and_floors() {
        assert_eq!(to_display(Color::new(2.0, 1.0, 0.5)), [255, 255, 127]);
    }

    #[test]
    fn test_to_display_saturates_negative_channels() {
        assert_eq!(to_display(Color::new(-1.0, 0.0, 1.0)), [0, 0, 255]);
    }
}
