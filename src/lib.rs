//! Spherecast ray caster
//!
//! Renders scenes of spheres lit by point and ambient lights using
//! per-pixel ray casting with local (ambient + Lambertian) shading.
//! Outputs PNG and EXR formats with optional progressive TEV display.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod cli;
pub mod color;
pub mod display;
pub mod hittable;
pub mod interval;
pub mod light;
pub mod logger;
pub mod output;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod shade;
pub mod sphere;

/// Vector algebra assumptions the renderer relies on.
#[cfg(test)]
mod tests {
    use glam::Vec3A;

    #[test]
    fn test_normalize_yields_unit_length() {
        for v in [
            Vec3A::new(3.0, 4.0, 0.0),
            Vec3A::new(-1.0, 2.0, -7.5),
            Vec3A::new(0.0, 0.0, 1e-4),
        ] {
            let n = v.normalize();
            assert!((n.length() - 1.0).abs() < 1e-5);
            assert!((n.dot(n) - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_normalize_zero_is_degenerate_not_fatal() {
        // A zero-length direction is a legitimate degenerate input; it
        // must produce non-finite components, not a panic.
        let n = Vec3A::ZERO.normalize();
        assert!(!n.is_finite());
    }

    #[test]
    fn test_cross_is_antisymmetric() {
        let a = Vec3A::new(1.0, 2.0, 3.0);
        let b = Vec3A::new(-4.0, 0.5, 2.0);
        assert!((a.cross(b) + b.cross(a)).length() < 1e-6);
    }

    #[test]
    fn test_cross_is_right_handed() {
        let x = Vec3A::X;
        let y = Vec3A::Y;
        assert!((x.cross(y) - Vec3A::Z).length() < 1e-6);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let v = Vec3A::new(5.0, -2.0, 9.0);
        assert_eq!(v.distance(v), 0.0);
    }
}
