//! Frame driver: turns a scene into pixels.

use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use crate::color::{self, Color};
use crate::display::PixelSink;
use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::scene::Scene;
use crate::shade::shade;

/// Ray parameter below which intersections are rejected.
///
/// Excludes hits behind the ray origin as well as the origin itself.
const T_MIN: f32 = 1e-3;

/// Renders a scene into a fixed-size pixel grid.
///
/// Each renderer owns its scene, so independent scenes can render
/// concurrently without shared state.
pub struct Renderer {
    /// The scene to render. Read-only once rendering starts.
    pub scene: Scene,
    /// Rendered image width in pixel count.
    pub image_width: u32,
    /// Rendered image height in pixel count.
    pub image_height: u32,
}

impl Renderer {
    /// Create a renderer for the given scene and image dimensions.
    pub fn new(scene: Scene, image_width: u32, image_height: u32) -> Self {
        Self {
            scene,
            image_width,
            image_height,
        }
    }

    /// Color of pixel (i, j), a pure function of the immutable scene.
    ///
    /// Builds the eye ray, finds the nearest sphere intersection, and
    /// shades it; rays that hit nothing take the background color.
    pub fn pixel_color(&self, i: u32, j: u32) -> Color {
        let ray = self
            .scene
            .camera
            .eye_ray(i, j, self.image_width, self.image_height);

        match self.scene.hit(&ray, Interval::new(T_MIN, f32::INFINITY)) {
            Some(rec) => shade(&rec, &self.scene.lights, self.scene.ambient),
            None => self.scene.background,
        }
    }

    /// Render the full frame in parallel into an HDR framebuffer.
    ///
    /// Pixels are independent pure functions, so the work is distributed
    /// across CPU cores; the result is identical to sequential evaluation.
    pub fn render(&self) -> ImageBuffer<Rgb<f32>, Vec<f32>> {
        let mut image: ImageBuffer<Rgb<f32>, Vec<f32>> =
            ImageBuffer::new(self.image_width, self.image_height);

        info!("Rendering using {} CPU cores...", rayon::current_num_threads());
        let generation_start = std::time::Instant::now();
        let pb = ProgressBar::new(self.image_width as u64 * self.image_height as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40} {pos}/{len} ETA: {eta}")
                .unwrap(),
        );

        image.enumerate_pixels_mut().par_bridge().for_each(|(i, j, pixel)| {
            let c = self.pixel_color(i, j);
            *pixel = Rgb([c.x, c.y, c.z]);
            pb.inc(1);
        });

        pb.finish();
        info!("Frame rendered in {:.2?}", generation_start.elapsed());

        image
    }

    /// Render sequentially in raster order, emitting one display-converted
    /// pixel at a time to the given surface.
    ///
    /// Rows complete in increasing order (top to bottom, left to right
    /// within a row), so progressive surfaces reveal the image
    /// deterministically.
    pub fn render_to(&self, sink: &mut dyn PixelSink) {
        for j in 0..self.image_height {
            for i in 0..self.image_width {
                sink.put_pixel(i, j, color::to_display(self.pixel_color(i, j)));
            }
            sink.end_row(j);
        }
    }
}
