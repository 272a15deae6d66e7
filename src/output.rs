//! # Output Module
//!
//! File export for rendered frames:
//! - PNG export with display conversion to 8-bit channels
//! - EXR export preserving the full f32 linear values
//!
//! Both functions log failures and return; file I/O problems never reach
//! the rendering core.

use exr::prelude::*;
use image::{ImageBuffer, Rgb};
use log::{info, warn};

use crate::color::{self, Color};

/// Save an f32 RGB framebuffer as an 8-bit PNG.
///
/// Channels are display-converted the same way the renderer's pixel sinks
/// convert them: the high side clamps to 1.0, then scales by 255 and
/// floors. No gamma curve is applied, so the file matches what a
/// progressive surface displayed during rendering.
///
/// # Errors
///
/// Logs a warning for I/O errors (bad path, permissions, disk space) but
/// does not panic.
pub fn save_image_as_png(
    image: &ImageBuffer<Rgb<f32>, Vec<f32>>,
    output_path: &str,
    width: u32,
    height: u32,
) {
    let u8_image: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_fn(width, height, |x, y| {
        let pixel = image.get_pixel(x, y);
        Rgb(color::to_display(Color::new(pixel[0], pixel[1], pixel[2])))
    });

    match u8_image.save(output_path) {
        Ok(_) => info!("Image saved as {}", output_path),
        Err(e) => warn!("Failed to save image: {}", e),
    }
}

/// Save an f32 RGB framebuffer as EXR with full HDR precision.
///
/// Linear light values are written untouched, so channels above 1.0
/// survive for post-processing or viewing in an HDR-aware viewer.
///
/// # Errors
///
/// Logs a warning for I/O errors but does not panic.
pub fn save_image_as_exr(
    image: &ImageBuffer<Rgb<f32>, Vec<f32>>,
    output_path: &str,
    width: u32,
    height: u32,
) {
    let pixels = image
        .pixels()
        .map(|rgb| (rgb[0], rgb[1], rgb[2]))
        .collect::<Vec<(f32, f32, f32)>>();

    let result = write_rgb_file(output_path, width as usize, height as usize, |x, y| {
        let index = y * (width as usize) + x;
        pixels[index]
    });

    match result {
        Ok(_) => info!("HDR image saved as EXR: {}", output_path),
        Err(e) => warn!("Failed to save EXR image: {}", e),
    }
}
