//! Scene state and the scene-construction API.
//!
//! One [`Scene`] struct holds everything a render pass reads: the sphere
//! and light lists, the ambient and background colors, and the camera.
//! All mutation happens through the construction API strictly before
//! rendering starts; the renderer only ever borrows the scene immutably.

use glam::Vec3A;
use log::debug;

use crate::camera::Camera;
use crate::color::Color;
use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::light::Light;
use crate::ray::Ray;
use crate::sphere::{Sphere, Surface};

/// Complete description of a renderable scene.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Ordered sphere list. Duplicates are allowed.
    pub spheres: Vec<Sphere>,
    /// Ordered point-light list. No fixed cap; well over ten lights are
    /// supported.
    pub lights: Vec<Light>,
    /// The single ambient light color. Last write wins.
    pub ambient: Color,
    /// Color returned for rays that hit nothing.
    pub background: Color,
    /// Active camera configuration.
    pub camera: Camera,
}

impl Scene {
    /// Create an empty scene with everything zeroed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all scene contents.
    ///
    /// Spheres, lights, ambient and background colors, and the camera
    /// basis all return to their zero/empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
        debug!("scene reset");
    }

    /// Append a point light with color (r, g, b) at position (x, y, z).
    pub fn add_light(&mut self, r: f32, g: f32, b: f32, x: f32, y: f32, z: f32) {
        self.lights
            .push(Light::new(Color::new(r, g, b), Vec3A::new(x, y, z)));
    }

    /// Replace the ambient light color. Idempotent; multiple calls keep
    /// only the last value.
    pub fn set_ambient_light(&mut self, r: f32, g: f32, b: f32) {
        self.ambient = Color::new(r, g, b);
    }

    /// Set the background color for the scene.
    pub fn set_background(&mut self, r: f32, g: f32, b: f32) {
        self.background = Color::new(r, g, b);
    }

    /// Set the vertical field of view in degrees (stored in radians).
    pub fn set_fov(&mut self, degrees: f32) {
        self.camera.set_fov(degrees);
    }

    /// Position the camera and derive its view basis.
    pub fn set_eye(&mut self, eye: Vec3A, look_at: Vec3A, up_hint: Vec3A) {
        self.camera.set_eye(eye, look_at, up_hint);
    }

    /// Append a sphere centered at (x, y, z) with the given radius,
    /// diffuse color (dr, dg, db), and shading coefficients.
    ///
    /// The radius is expected to be positive; zero-radius spheres are
    /// never intersected.
    #[allow(clippy::too_many_arguments)]
    pub fn add_sphere(
        &mut self,
        x: f32,
        y: f32,
        z: f32,
        radius: f32,
        dr: f32,
        dg: f32,
        db: f32,
        k_ambient: f32,
        k_specular: f32,
        specular_pow: f32,
    ) {
        self.spheres.push(Sphere::new(
            Vec3A::new(x, y, z),
            radius,
            Surface {
                color: Color::new(dr, dg, db),
                k_ambient,
                k_specular,
                specular_pow,
            },
        ));
        debug!("scene now holds {} spheres", self.spheres.len());
    }
}

impl Hittable for Scene {
    /// Nearest hit across all spheres.
    ///
    /// The valid range shrinks to the closest accepted intersection so
    /// far, so the final record is the nearest hit in front of the ray
    /// origin regardless of sphere order.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;
        let mut closest_so_far = ray_t.max;

        for sphere in &self.spheres {
            if let Some(rec) = sphere.hit(r, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}
