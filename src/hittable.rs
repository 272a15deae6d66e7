//! Ray-object intersection system.
//!
//! Defines the Hittable trait for scene geometry and HitRecord for storing
//! intersection data handed to the shader.

use glam::Vec3A;

use crate::interval::Interval;
use crate::ray::Ray;
use crate::sphere::Surface;

/// Ray-object intersection information.
///
/// Transient: produced by intersection testing, consumed by shading,
/// never persisted.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    /// Point where the ray intersects the surface
    pub point: Vec3A,
    /// Outward unit normal at the intersection point
    pub normal: Vec3A,
    /// Ray parameter at the intersection point
    pub t: f32,
    /// Shading data of the sphere that owns the point
    pub surface: Surface,
}

/// Trait for objects that can be intersected by rays.
///
/// Must be thread-safe (Sync + Send) so scenes can be rendered in
/// parallel across pixels.
pub trait Hittable: Sync + Send {
    /// Test for the nearest intersection within the given parameter range.
    ///
    /// Returns `None` when the ray does not meet the object inside the
    /// range; intersections at or behind the range minimum are rejected.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord>;
}
