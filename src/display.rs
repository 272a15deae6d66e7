//! Output surfaces that receive finished pixels.
//!
//! The renderer hands each display-converted pixel to a [`PixelSink`] in
//! raster order. Surfaces never report errors back to the core; socket
//! problems are logged and further writes become no-ops.

use std::net::TcpStream;

use image::{ImageBuffer, Rgb};
use log::{debug, warn};
use tev_client::{PacketCreateImage, PacketUpdateImage, TevClient};

/// Receives one finished pixel at a time, in raster order.
pub trait PixelSink {
    /// Accept the display-converted pixel at (x, y).
    fn put_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]);

    /// Called after the last pixel of row `y`. Progressive surfaces flush
    /// here; the default does nothing.
    fn end_row(&mut self, _y: u32) {}
}

/// In-memory surface backed by an 8-bit image buffer.
pub struct ImageSurface {
    /// The accumulated image.
    pub image: ImageBuffer<Rgb<u8>, Vec<u8>>,
}

impl ImageSurface {
    /// Create a zeroed surface of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: ImageBuffer::new(width, height),
        }
    }
}

impl PixelSink for ImageSurface {
    fn put_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        self.image.put_pixel(x, y, Rgb(rgb));
    }
}

/// Surface that streams finished rows to a running TEV viewer.
///
/// Connects on creation and sends one image-update packet per completed
/// row, so the image reveals top to bottom while rendering progresses.
pub struct TevSurface {
    client: Option<TevClient>,
    width: u32,
    /// Interleaved RGB of the row currently being filled.
    row: Vec<f32>,
}

impl TevSurface {
    const IMAGE_NAME: &'static str = "spherecast";

    /// Connect to a TEV instance and create the image there.
    ///
    /// The address gets the default port 14158 when none is given. A
    /// failed connection is logged with a warning and yields a surface
    /// that silently drops all pixels.
    pub fn connect(address: &str, width: u32, height: u32) -> Self {
        // Add default port if not specified
        let address = if address.contains(':') {
            address.to_string()
        } else {
            format!("{}:14158", address)
        };

        debug!("Attempting to connect to TEV at {}", address);

        let client = match TcpStream::connect(&address) {
            Ok(stream) => {
                if let Err(e) = stream.set_nodelay(true) {
                    debug!("Failed to set TCP_NODELAY: {}", e);
                }

                let mut client = TevClient::wrap(stream);
                let create_packet = PacketCreateImage {
                    image_name: Self::IMAGE_NAME,
                    width,
                    height,
                    channel_names: &["R", "G", "B"],
                    grab_focus: true,
                };
                match client.send(create_packet) {
                    Ok(_) => {
                        debug!("Image created in TEV successfully");
                        Some(client)
                    }
                    Err(e) => {
                        warn!("Failed to create image in TEV: {}", e);
                        None
                    }
                }
            }
            Err(e) => {
                warn!("Failed to connect to TEV on {}: {}", address, e);
                None
            }
        };

        Self {
            client,
            width,
            row: vec![0.0; width as usize * 3],
        }
    }

    /// True when the TEV connection is up and rows are being sent.
    pub fn is_connected(&self) -> bool {
        self.client.is_some()
    }
}

impl PixelSink for TevSurface {
    fn put_pixel(&mut self, x: u32, _y: u32, rgb: [u8; 3]) {
        let base = x as usize * 3;
        self.row[base] = rgb[0] as f32 / 255.0;
        self.row[base + 1] = rgb[1] as f32 / 255.0;
        self.row[base + 2] = rgb[2] as f32 / 255.0;
    }

    fn end_row(&mut self, y: u32) {
        let Some(client) = self.client.as_mut() else {
            return;
        };

        // The row buffer is interleaved RGB; channel offsets and strides
        // describe that layout to TEV.
        let update_packet = PacketUpdateImage {
            image_name: Self::IMAGE_NAME,
            grab_focus: false,
            channel_names: &["R", "G", "B"],
            x: 0,
            y,
            width: self.width,
            height: 1,
            channel_offsets: &[0, 1, 2],
            channel_strides: &[3, 3, 3],
            data: &self.row,
        };

        if let Err(e) = client.send(update_packet) {
            warn!("Failed to send row {} to TEV: {}", y, e);
            self.client = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_surface_stores_pixels() {
        let mut surface = ImageSurface::new(4, 2);
        surface.put_pixel(3, 1, [10, 20, 30]);
        surface.end_row(1);
        assert_eq!(surface.image.get_pixel(3, 1).0, [10, 20, 30]);
        assert_eq!(surface.image.get_pixel(0, 0).0, [0, 0, 0]);
    }

    #[test]
    fn test_tev_surface_survives_failed_connection() {
        // Nothing listens on the discard port; the surface must come up
        // disconnected and swallow writes without panicking.
        let mut surface = TevSurface::connect("127.0.0.1:9", 4, 4);
        assert!(!surface.is_connected());
        surface.put_pixel(0, 0, [255, 0, 0]);
        surface.end_row(0);
    }
}
