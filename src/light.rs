//! Point light sources.

use glam::Vec3A;

use crate::color::Color;

/// Point light with a color and a world-space position.
///
/// Scenes hold lights in an ordered list with no uniqueness constraint;
/// duplicate lights simply contribute twice.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    /// Color of the light.
    pub color: Color,
    /// Position of the light in world coordinates.
    pub position: Vec3A,
}

impl Light {
    /// Create a new point light.
    pub fn new(color: Color, position: Vec3A) -> Self {
        Self { color, position }
    }
}
