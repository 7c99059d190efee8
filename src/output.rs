//! # Output Module
//!
//! Consumers of the rendered HDR buffer. The renderer produces un-clamped
//! linear f32 RGB; everything display-related happens here:
//! - PNG export with clamping and sRGB gamma correction
//! - EXR export preserving full linear precision
//! - Real-time visualization via TEV (The EXR Viewer) over TCP
//!
//! All failures log warnings and return; none of them abort a render that
//! already completed.

use exr::prelude::*;
use image::{ImageBuffer, Rgb};
use log::{debug, info, warn};
use std::net::TcpStream;
use tev_client::{PacketCreateImage, PacketUpdateImage, TevClient};

/// Send an f32 RGB image to TEV for real-time visualization
///
/// Connects to a running TEV instance, creates a named image, and streams
/// the pixel data. TEV expects planar channel data (RRR...GGG...BBB...),
/// so the interleaved buffer is rearranged before transmission.
///
/// `tev_address` may omit the port; TEV's default 14158 is appended.
pub fn send_image_to_tev(
    image: &ImageBuffer<Rgb<f32>, Vec<f32>>,
    tev_address: &str,
    width: u32,
    height: u32,
) {
    // Add default port if not specified
    let tev_address = if tev_address.contains(':') {
        tev_address.to_string()
    } else {
        format!("{}:14158", tev_address)
    };

    debug!("Attempting to connect to TEV at {}", tev_address);

    match TcpStream::connect(&tev_address) {
        Ok(stream) => {
            if let Err(e) = stream.set_nodelay(true) {
                debug!("Failed to set TCP_NODELAY: {}", e);
            }

            let mut client = TevClient::wrap(stream);

            let create_packet = PacketCreateImage {
                image_name: "prismray_output",
                width,
                height,
                channel_names: &["R", "G", "B"],
                grab_focus: true,
            };

            if let Err(e) = client.send(create_packet) {
                warn!("Failed to create image in TEV: {}", e);
                return;
            }

            // Rearrange interleaved RGB into planar channel layout
            let pixel_count = (width * height) as usize;
            let mut rgb_data = Vec::with_capacity(pixel_count * 3);
            for channel in 0..3 {
                for pixel in image.pixels() {
                    rgb_data.push(pixel[channel]);
                }
            }

            debug!(
                "Sending {} pixels to TEV ({:.1} MB)",
                pixel_count,
                rgb_data.len() as f32 * 4.0 / 1_000_000.0
            );
            let start_time = std::time::Instant::now();

            let update_packet = PacketUpdateImage {
                image_name: "prismray_output",
                grab_focus: false,
                channel_names: &["R", "G", "B"],
                x: 0,
                y: 0,
                width,
                height,
                channel_offsets: &[0, (width * height) as u64, (2 * width * height) as u64],
                channel_strides: &[1, 1, 1],
                data: &rgb_data,
            };

            match client.send(update_packet) {
                Ok(_) => info!(
                    "Image data sent to TEV at {} in {:.2?}",
                    tev_address,
                    start_time.elapsed()
                ),
                Err(e) => warn!("Failed to send image data to TEV: {}", e),
            }
        }
        Err(e) => warn!("Failed to connect to TEV on {}: {}", tev_address, e),
    }
}

/// Save an f32 RGB image as PNG with tone mapping and gamma correction
///
/// Channels are clamped to [0, 1] (over-bright areas saturate to white),
/// converted with the standard sRGB transfer curve, and scaled to 8-bit.
/// I/O errors log a warning instead of panicking.
pub fn save_image_as_png(
    image: &ImageBuffer<Rgb<f32>, Vec<f32>>,
    output_path: &str,
    width: u32,
    height: u32,
) {
    let u8_image: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_fn(width, height, |x, y| {
        let pixel = image.get_pixel(x, y);

        // sRGB transfer: linear portion for dark values, power curve above
        let linear_to_gamma = |linear: f32| -> f32 {
            if linear <= 0.0 {
                0.0
            } else if linear <= 0.0031308 {
                12.92 * linear
            } else {
                1.055 * linear.powf(1.0 / 2.4) - 0.055
            }
        };

        Rgb([
            (linear_to_gamma(pixel[0].clamp(0.0, 1.0)) * 255.0) as u8,
            (linear_to_gamma(pixel[1].clamp(0.0, 1.0)) * 255.0) as u8,
            (linear_to_gamma(pixel[2].clamp(0.0, 1.0)) * 255.0) as u8,
        ])
    });

    match u8_image.save(output_path) {
        Ok(_) => info!("Image saved as {}", output_path),
        Err(e) => warn!("Failed to save image: {}", e),
    }
}

/// Save an f32 RGB image as EXR with full HDR precision
///
/// Writes linear light values with no tone mapping or gamma, 32-bit float
/// per channel. The right format for post-processing or viewing in TEV.
/// I/O errors log a warning instead of panicking.
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
