use clap::Parser;
use glam::Vec3A;
use log::info;

use spherecast::cli::Args;
use spherecast::display::TevSurface;
use spherecast::logger::init_logger;
use spherecast::output::{save_image_as_exr, save_image_as_png};
use spherecast::renderer::Renderer;
use spherecast::scene::Scene;

/// Build the demo scene: a ground sphere and three colored spheres lit by
/// two point lights and a dim ambient term.
fn create_scene() -> Scene {
    let mut scene = Scene::new();
    scene.reset();

    scene.set_background(0.1, 0.1, 0.15);
    scene.set_ambient_light(0.2, 0.2, 0.2);
    scene.set_fov(60.0);
    scene.set_eye(
        Vec3A::new(0.0, 1.5, 6.0),
        Vec3A::new(0.0, 0.0, 0.0),
        Vec3A::new(0.0, 1.0, 0.0),
    );

    // Key light and a dim red fill from the left
    scene.add_light(1.0, 1.0, 1.0, 5.0, 5.0, 5.0);
    scene.add_light(0.4, 0.1, 0.1, -5.0, 2.0, 3.0);

    // Ground sphere
    scene.add_sphere(0.0, -100.5, 0.0, 100.0, 0.5, 0.5, 0.5, 1.0, 0.0, 0.0);

    // Three feature spheres
    scene.add_sphere(0.0, 0.0, 0.0, 1.0, 0.8, 0.2, 0.2, 1.0, 0.0, 0.0);
    scene.add_sphere(-2.2, 0.0, -1.0, 1.0, 0.2, 0.7, 0.2, 1.0, 0.0, 0.0);
    scene.add_sphere(2.2, 0.0, -1.0, 1.0, 0.2, 0.3, 0.8, 1.0, 0.0, 0.0);

    scene
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    // Log application startup with version information
    info!("Spherecast - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));
    info!("Image resolution: {}x{}", args.width, args.height);

    let renderer = Renderer::new(create_scene(), args.width, args.height);

    // Progressive display streams display-converted rows to TEV as they
    // finish, top to bottom, before the file render below.
    let should_send_to_tev = args.tev || args.tev_address.is_some();
    if should_send_to_tev {
        let tev_address = args.tev_address.as_deref().unwrap_or("localhost:14158");
        info!("Streaming rows to TEV at {}...", tev_address);
        let mut surface = TevSurface::connect(tev_address, args.width, args.height);
        renderer.render_to(&mut surface);
    }

    let image = renderer.render();

    // Save image based on file extension
    if args.output.ends_with(".exr") {
        save_image_as_exr(&image, &args.output, args.width, args.height);
    } else if args.output.ends_with(".png") {
        save_image_as_png(&image, &args.output, args.width, args.height);
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
