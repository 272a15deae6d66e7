//! Camera basis derivation and eye-ray generation.

use glam::Vec3A;

use crate::ray::Ray;

/// Pinhole camera described by an eye position and a view basis.
///
/// The basis is derived from an eye point, a look-at point, and an up hint
/// via [`Camera::set_eye`]; it is never set directly by callers. A freshly
/// constructed (or reset) camera is fully zeroed, which yields degenerate
/// but well-defined rays: non-finite components are legitimate values here,
/// not errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Camera {
    /// Eye position in world space.
    pub eye: Vec3A,
    /// Vertical field of view in radians.
    pub fov: f32,
    /// Unit vector from the eye toward the look-at point.
    forward: Vec3A,
    /// Unit vector pointing to the camera's right.
    right: Vec3A,
    /// Unit vector pointing up in the image plane.
    up: Vec3A,
}

impl Camera {
    /// Create a zeroed camera.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the camera basis from eye position, look-at point, and up
    /// hint.
    ///
    /// The basis is orthonormal for any up hint not parallel to the view
    /// direction: forward points at the target, right is the normalized
    /// cross product with the hint, and up completes the frame.
    pub fn set_eye(&mut self, eye: Vec3A, look_at: Vec3A, up_hint: Vec3A) {
        self.eye = eye;
        self.forward = (look_at - eye).normalize();
        self.right = self.forward.cross(up_hint).normalize();
        self.up = self.right.cross(self.forward);
    }

    /// Set the vertical field of view, given in degrees, stored in radians.
    pub fn set_fov(&mut self, degrees: f32) {
        self.fov = degrees.to_radians();
    }

    /// Build the ray through the center of pixel (i, j) of a
    /// width x height image.
    ///
    /// Pixel (0, 0) is the top-left corner. The ray grid spans
    /// tan(fov / 2) half-extents vertically, aspect-corrected
    /// horizontally, so the look-at point projects to the image center.
    /// Deterministic, no failure mode; fov = 0 collapses every ray onto
    /// the forward axis.
    pub fn eye_ray(&self, i: u32, j: u32, width: u32, height: u32) -> Ray {
        let half_extent = (self.fov / 2.0).tan();
        let aspect = width as f32 / height as f32;

        let u = (2.0 * (i as f32 + 0.5) / width as f32 - 1.0) * half_extent * aspect;
        let v = (1.0 - 2.0 * (j as f32 + 0.5) / height as f32) * half_extent;

        Ray::new(self.eye, u * self.right + v * self.up + self.forward)
    }
}
