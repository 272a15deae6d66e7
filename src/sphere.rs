//! Sphere primitive for ray casting.
//!
//! Implements ray-sphere intersection using the half-b form of the
//! quadratic formula.

use glam::Vec3A;

use crate::color::Color;
use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::ray::Ray;

/// Shading data of a sphere, carried by value into hit records.
#[derive(Debug, Clone, Copy)]
pub struct Surface {
    /// Diffuse color of the surface.
    pub color: Color,

    /// How much of the scene's ambient light combines with the diffuse
    /// color.
    pub k_ambient: f32,

    /// Brightness of the (white) specular highlight.
    ///
    /// Accepted by the scene API and stored, but the shader implements no
    /// specular term and never reads it.
    pub k_specular: f32,

    /// Tightness of the specular highlight. Unused, see `k_specular`.
    pub specular_pow: f32,
}

/// Sphere defined by center, radius, and surface data.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,

    /// Radius of the sphere. Expected positive; this is a precondition of
    /// the scene API, not enforced here.
    pub radius: f32,

    /// Shading data used when the sphere is hit.
    pub surface: Surface,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3A, radius: f32, surface: Surface) -> Self {
        Self {
            center,
            radius,
            surface,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        // Vector from ray origin to sphere center
        let oc = self.center - r.origin;

        // Quadratic equation coefficients, half-b form
        let a = r.direction.length_squared();
        let h = r.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Take the nearest root inside the valid range; the far root only
        // applies when the origin sits inside the sphere.
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let point = r.at(root);
        Some(HitRecord {
            point,
            normal: (point - self.center) / self.radius,
            t: root,
            surface: self.surface,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_surface(color: Color) -> Surface {
        Surface {
            color,
            k_ambient: 1.0,
            k_specular: 0.0,
            specular_pow: 0.0,
        }
    }

    fn full_range() -> Interval {
        Interval::new(1e-3, f32::INFINITY)
    }

    #[test]
    fn test_ray_from_center_hits_at_radius() {
        let sphere = Sphere::new(Vec3A::ZERO, 2.0, plain_surface(Color::ONE));
        for dir in [
            Vec3A::new(0.0, 0.0, 1.0),
            Vec3A::new(0.0, 3.0, 0.0),
            Vec3A::new(1.0, 1.0, 1.0),
        ] {
            let ray = Ray::new(Vec3A::ZERO, dir);
            let rec = sphere.hit(&ray, full_range()).unwrap();
            assert!((rec.point.distance(ray.origin) - sphere.radius).abs() < 1e-4);
        }
    }

    #[test]
    fn test_nearest_root_wins_from_outside() {
        let sphere = Sphere::new(Vec3A::new(0.0, 0.0, -5.0), 1.0, plain_surface(Color::ONE));
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let rec = sphere.hit(&ray, full_range()).unwrap();
        // Front surface at z = -4, not the back surface at z = -6.
        assert!((rec.t - 4.0).abs() < 1e-4);
        assert!((rec.normal - Vec3A::new(0.0, 0.0, 1.0)).length() < 1e-4);
    }

    #[test]
    fn test_hits_behind_origin_are_rejected() {
        let sphere = Sphere::new(Vec3A::new(0.0, 0.0, 5.0), 1.0, plain_surface(Color::ONE));
        // The sphere sits behind the ray.
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        assert!(sphere.hit(&ray, full_range()).is_none());
    }

    #[test]
    fn test_negative_discriminant_misses() {
        let sphere = Sphere::new(Vec3A::new(0.0, 10.0, 0.0), 1.0, plain_surface(Color::ONE));
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, 1.0));
        assert!(sphere.hit(&ray, full_range()).is_none());
    }

    #[test]
    fn test_normal_is_unit_and_outward() {
        let sphere = Sphere::new(Vec3A::ZERO, 3.0, plain_surface(Color::ONE));
        let ray = Ray::new(Vec3A::new(0.0, 0.0, 10.0), Vec3A::new(0.0, 0.0, -1.0));
        let rec = sphere.hit(&ray, full_range()).unwrap();
        assert!((rec.normal.length() - 1.0).abs() < 1e-4);
        assert!(rec.normal.dot(ray.direction) < 0.0);
    }
}
