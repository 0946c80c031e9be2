use std::process;

use clap::Parser;
use glam::DVec3;
use log::{error, info};

use phongtrace::config::{validate_image, ImageConfig, SceneFile};
use phongtrace::{Camera, Framebuffer, ImageSink, RayTracer, RenderSettings, Result, Scene};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

/// Camera matching the built-in demo scene
fn create_camera() -> Camera {
    Camera {
        position: DVec3::new(0.0, 1.0, -8.0),
        direction: DVec3::new(0.0, -0.1, 1.0).normalize(),
        up: DVec3::Y,
        view_plane_distance: 1.6,
        view_plane_width: 2.0,
        view_plane_height: 1.5,
        front_plane_distance: 0.0,
        back_plane_distance: 1000.0,
    }
}

/// Load the scene file, or the demo scene, and apply command line overrides.
fn load(args: &Args) -> Result<(Scene, Camera, RenderSettings)> {
    let (scene, camera, mut settings) = match &args.scene {
        Some(path) => {
            info!("Loading scene from {}", path.display());
            SceneFile::load(path)?.into_parts()?
        }
        None => {
            info!("No scene file given, using the built-in demo scene");
            let settings = RenderSettings {
                width: 800,
                height: 600,
                ..RenderSettings::default()
            };
            (Scene::demo(), create_camera(), settings)
        }
    };

    settings.width = args.width.unwrap_or(settings.width);
    settings.height = args.height.unwrap_or(settings.height);
    settings.parallel = !args.single_threaded;
    settings.progress = !args.no_progress;
    validate_image(&ImageConfig {
        width: settings.width,
        height: settings.height,
        background: settings.background,
    })?;

    Ok((scene, camera, settings))
}

fn run(args: &Args) -> Result<()> {
    let (scene, camera, settings) = load(args)?;
    info!("Image resolution: {}x{}", settings.width, settings.height);

    let mut framebuffer = Framebuffer::new(settings.width, settings.height);
    RayTracer::new(&scene).render(&camera, &settings, &mut framebuffer);
    framebuffer.store(&args.output)
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("phongtrace - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    if let Err(e) = run(&args) {
        error!("{}", e);
        process::exit(1);
    }
}
