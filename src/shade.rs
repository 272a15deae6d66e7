//! Local illumination: ambient plus Lambertian diffuse.

use crate::color::Color;
use crate::hittable::HitRecord;
use crate::light::Light;

/// Shade a surface hit under the given lights.
///
/// The accumulator starts from the ambient contribution scaled by the
/// surface's ambient coefficient, then adds one Lambertian term per light:
/// the diffuse color times the light color times `max(0, n . l)`. Lights
/// are not shadow-tested, so every light reaches every hit point, and
/// there is no specular term. The result is unclamped; display conversion
/// happens at output time.
pub fn shade(rec: &HitRecord, lights: &[Light], ambient: Color) -> Color {
    let mut color = ambient * rec.surface.k_ambient * rec.surface.color;

    for light in lights {
        let l = (light.position - rec.point).normalize();
        let lightness = rec.normal.dot(l).max(0.0);
        color += rec.surface.color * light.color * lightness;
    }

    color
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;
    use crate::sphere::Surface;
    use glam::Vec3A;

    fn hit_at_north_pole(albedo: Color, k_ambient: f32) -> HitRecord {
        HitRecord {
            point: Vec3A::new(0.0, 0.0, 1.0),
            normal: Vec3A::new(0.0, 0.0, 1.0),
            t: 1.0,
            surface: Surface {
                color: albedo,
                k_ambient,
                k_specular: 0.0,
                specular_pow: 0.0,
            },
        }
    }

    #[test]
    fn test_light_along_normal_gives_full_diffuse() {
        let rec = hit_at_north_pole(Color::new(1.0, 0.0, 0.0), 0.0);
        let lights = [Light::new(color::WHITE, Vec3A::new(0.0, 0.0, 5.0))];
        let shaded = shade(&rec, &lights, color::BLACK);
        assert!((shaded.x - 1.0).abs() < 1e-5);
        assert_eq!(shaded.y, 0.0);
        assert_eq!(shaded.z, 0.0);
    }

    #[test]
    fn test_light_below_horizon_contributes_nothing() {
        let rec = hit_at_north_pole(color::WHITE, 0.0);
        let lights = [Light::new(color::WHITE, Vec3A::new(0.0, 0.0, -5.0))];
        assert_eq!(shade(&rec, &lights, color::BLACK), color::BLACK);
    }

    #[test]
    fn test_colocated_lights_sum_linearly() {
        let rec = hit_at_north_pole(color::WHITE, 0.0);
        let position = Vec3A::new(1.0, 2.0, 5.0);

        let split = [
            Light::new(Color::new(0.3, 0.2, 0.1), position),
            Light::new(Color::new(0.4, 0.3, 0.2), position),
        ];
        let merged = [Light::new(Color::new(0.7, 0.5, 0.3), position)];

        let a = shade(&rec, &split, color::BLACK);
        let b = shade(&rec, &merged, color::BLACK);
        assert!((a - b).length() < 1e-5);
    }

    #[test]
    fn test_ambient_term_is_scaled_by_coefficient() {
        let rec = hit_at_north_pole(Color::new(1.0, 0.0, 0.0), 0.5);
        let shaded = shade(&rec, &[], Color::new(0.5, 0.5, 0.5));
        assert!((shaded - Color::new(0.25, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_no_lights_and_no_ambient_is_black() {
        let rec = hit_at_north_pole(color::WHITE, 1.0);
        assert_eq!(shade(&rec, &[], color::BLACK), color::BLACK);
    }
}
