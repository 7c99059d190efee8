//! Frame renderer: pixel iteration and supersampling.
//!
//! Renders one frame as a pure function of (scene, options, seed) into a
//! caller-owned HDR buffer. Pixels are independent, so the loop runs in
//! parallel with per-pixel random streams; the buffer layout fixes the
//! output order regardless of completion order.

use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use crate::options::RenderOptions;
use crate::random;
use crate::scene::Scene;
use crate::shade;
use crate::sphere::Color;

/// Caller-owned HDR frame buffer: row-major linear RGB, un-clamped floats.
pub type Frame = ImageBuffer<Rgb<f32>, Vec<f32>>;

/// Renders frames with a fixed random seed.
///
/// The seed is the only state; a renderer can be reused across frames and
/// always produces the same buffer for the same scene and options.
#[derive(Debug, Clone)]
pub struct Renderer {
    seed: u64,
}

impl Renderer {
    /// Create a renderer with the given sampling seed.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Render one frame into `frame`.
    ///
    /// Buffer rows run top to bottom while image-plane coordinates run
    /// bottom to top, so row y maps to plane row `height - 1 - y`. With
    /// antialiasing and depth of field both off, each pixel is a single
    /// ray through its center at the primary recursion budget; otherwise
    /// the supersampled path runs at the reduced budget.
    pub fn render(&self, scene: &Scene, options: &RenderOptions, frame: &mut Frame) {
        let width = frame.width();
        let height = frame.height();

        info!(
            "Rendering {}x{} on {} CPU cores...",
            width,
            height,
            rayon::current_num_threads()
        );
        let start = std::time::Instant::now();
        let pb = ProgressBar::new(width as u64 * height as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40} {pos}/{len} ETA: {eta}")
                .unwrap(),
        );

        frame.enumerate_pixels_mut().par_bridge().for_each(|(x, y, pixel)| {
            let j = height - 1 - y;
            let mut rng = random::pixel_rng(self.seed, (y * width + x) as u64);

            let color = if options.supersamples() {
                self.supersample(scene, options, x, j, width, height, &mut rng)
            } else {
                let ray = scene
                    .camera
                    .ray_through(x, j, (0.5, 0.5), scene.camera.eye, width, height);
                shade::cast_ray(scene, options, &ray, options.primary_depth)
            };

            *pixel = Rgb([color.x, color.y, color.z]);
            pb.inc(1);
        });

        pb.finish();
        info!("Frame rendered in {:.2?}", start.elapsed());
    }

    /// Average `grid`^2 jittered sub-samples for one pixel.
    ///
    /// Each sub-sample lands uniformly inside its own grid cell. With
    /// depth of field on, the ray origin is displaced on the lens plane by
    /// the same offsets, which leaves the focal plane sharp and smears
    /// everything off it.
    #[allow(clippy::too_many_arguments)]
    fn supersample(
        &self,
        scene: &Scene,
        options: &RenderOptions,
        i: u32,
        j: u32,
        width: u32,
        height: u32,
        rng: &mut rand_chacha::ChaCha20Rng,
    ) -> Color {
        let grid = options.supersample_grid.max(1);
        let mut accumulated = Color::ZERO;

        for p in 0..grid {
            for q in 0..grid {
                let offset = (
                    (p as f32 + random::jitter(rng)) / grid as f32,
                    (q as f32 + random::jitter(rng)) / grid as f32,
                );

                let origin = if options.depth_of_field {
                    scene.camera.lens_origin(offset)
                } else {
                    scene.camera.eye
                };

                let ray = scene.camera.ray_through(i, j, offset, origin, width, height);
                accumulated += shade::cast_ray(scene, options, &ray, options.supersample_depth);
            }
        }

        accumulated / (grid * grid) as f32
    }
}
