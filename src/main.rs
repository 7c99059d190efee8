use clap::Parser;
use glam::Vec3A;
use log::info;

mod cli;
mod logger;
mod output;

use cli::Args;
use logger::init_logger;
use output::{save_image_as_exr, save_image_as_png, send_image_to_tev};
use prismray::camera::{Camera, ImagePlane};
use prismray::options::RenderOptions;
use prismray::renderer::{Frame, Renderer};
use prismray::scene::{Scene, SceneError};
use prismray::sphere::{Color, Sphere};

/// Build the classic five-sphere demonstration scene.
///
/// Camera at (5,0,0) looking down -x with z up, square image plane of
/// half-extent 4 at focal distance 10. Three directional lights (unit
/// vectors toward the light); how many are active is a render option.
fn create_scene() -> Result<Scene, SceneError> {
    let camera = Camera::new(
        Vec3A::new(5.0, 0.0, 0.0),
        Vec3A::new(-1.0, 0.0, 0.0),
        Vec3A::new(0.0, 0.0, 1.0),
        ImagePlane::square(4.0),
        10.0,
    )?;

    let lights = vec![
        Vec3A::new(0.0, 1.0, 1.0),
        Vec3A::new(0.0, 1.0, -1.0),
        Vec3A::new(1.0, -1.0, -1.0),
    ];

    let spheres = vec![
        Sphere::new(
            Vec3A::new(-2.0, -1.0, 1.0),
            1.0,
            Color::new(1.0, 1.0, 0.0),
            0,
            1.0,
            true,
        ),
        Sphere::new(
            Vec3A::new(2.0, -1.0, -1.0),
            1.0,
            Color::new(0.0, 0.0, 1.0),
            1,
            1.0,
            true,
        ),
        // The one refractive sphere in the scene.
        Sphere::new(
            Vec3A::new(0.0, -1.0, 1.0),
            1.0,
            Color::new(0.0, 1.0, 0.0),
            2,
            1.2,
            false,
        ),
        Sphere::new(
            Vec3A::new(1.0, 1.0, -1.0),
            1.0,
            Color::splat(180.0 / 255.0),
            3,
            1.0,
            true,
        ),
        Sphere::new(
            Vec3A::new(0.0, 1.0, 1.0),
            1.0,
            Color::new(1.0, 0.0, 0.0),
            4,
            1.0,
            true,
        ),
    ];

    Scene::new(camera, lights, 0.7, Color::ZERO, spheres)
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    // Log application startup with version information
    info!(
        "PrismRay - Git Version {} ({})",
        env!("GIT_HASH"),
        env!("GIT_DATE")
    );

    if args.width == 0 || args.height == 0 {
        log::error!("Image dimensions must be non-zero");
        std::process::exit(1);
    }

    let scene = match create_scene() {
        Ok(scene) => scene,
        Err(e) => {
            log::error!("Invalid scene: {}", e);
            std::process::exit(1);
        }
    };

    let options = RenderOptions {
        antialias: args.antialias,
        depth_of_field: args.depth_of_field,
        reflection: args.reflection,
        transparency: args.transparency,
        active_lights: args.lights as usize,
        primary_depth: args.depth,
        supersample_grid: args.grid,
        ..RenderOptions::default()
    };

    info!(
        "Image resolution: {}x{}, supersampling: {}",
        args.width,
        args.height,
        if options.supersamples() {
            format!("{0}x{0} grid", options.supersample_grid)
        } else {
            "off".to_string()
        }
    );

    let renderer = Renderer::new(args.seed);
    let mut frame = Frame::new(args.width, args.height);
    renderer.render(&scene, &options, &mut frame);

    // Send image to TEV if requested
    let should_send_to_tev = args.tev || args.tev_address.is_some();
    if should_send_to_tev {
        let tev_address = args.tev_address.as_deref().unwrap_or("localhost:14158");
        send_image_to_tev(&frame, tev_address, args.width, args.height);
    }

    // Save image based on file extension
    if args.output.ends_with(".exr") {
        save_image_as_exr(&frame, &args.output, args.width, args.height);
    } else if args.output.ends_with(".png") {
        save_image_as_png(&frame, &args.output, args.width, args.height);
    } else {
        log::error!(
            "Unsupported file extension '{}'. Only .png and .exr formats are supported.",
            std::path::Path::new(&args.output)
                .extension()
                .unwrap_or_default()
                .to_string_lossy()
        );
        std::process::exit(1);
    }
}
