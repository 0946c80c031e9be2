use std::path::Path;

use approx::assert_abs_diff_eq;
use glam::DVec3;

use phongtrace::shading::light_contribution;
use phongtrace::sphere::Sphere;
use phongtrace::{Camera, Color, Framebuffer, ImageSink, Light, Material, RayTracer, RenderSettings, Result, Scene};

const BACKGROUND: Color = Color::new(0.0, 0.0, 0.5);
const CENTER: [(u32, u32); 4] = [(1, 1), (1, 2), (2, 1), (2, 2)];
const MISSING_CORNERS: [(u32, u32); 3] = [(0, 0), (0, 3), (3, 0)];

/// Collects every `set_pixel` call in order.
#[derive(Default)]
struct Recorder {
    calls: Vec<(u32, u32, Color)>,
    stored: std::cell::Cell<usize>,
}

impl ImageSink for Recorder {
    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.calls.push((x, y, color));
    }

    fn store(&self, _destination: &Path) -> Result<()> {
        self.stored.set(self.stored.get() + 1);
        Ok(())
    }
}

fn unit_sphere_scene() -> Scene {
    let mut scene = Scene::new();
    scene.add(Box::new(Sphere::new(
        DVec3::ZERO,
        1.0,
        Material::uniform(Color::splat(0.2), 10.0),
    )));
    scene.add_light(Light::white(DVec3::new(0.0, 5.0, -5.0), 0.2));
    scene
}

fn camera() -> Camera {
    Camera {
        position: DVec3::new(0.0, 0.0, -5.0),
        direction: DVec3::Z,
        up: DVec3::Y,
        view_plane_distance: 4.0,
        view_plane_width: 2.0,
        view_plane_height: 2.0,
        front_plane_distance: 0.0,
        back_plane_distance: 1000.0,
    }
}

fn settings() -> RenderSettings {
    RenderSettings {
        width: 4,
        height: 4,
        background: BACKGROUND,
        parallel: false,
        progress: false,
    }
}

#[test]
fn center_pixels_hit_with_diffuse_light() {
    let scene = unit_sphere_scene();
    let camera = camera();
    let settings = settings();

    for (i, j) in CENTER {
        let ray = camera.primary_ray(i, j, settings.width, settings.height);
        let hit = scene.find_nearest(&ray, camera.clip_window());
        assert!(hit.is_hit(), "pixel ({i}, {j}) should hit the sphere");

        let terms = light_contribution(&scene, &hit, camera.position, &scene.lights[0]);
        assert!(terms.diffuse.x > 0.0, "pixel ({i}, {j}) should receive diffuse light");
    }
}

#[test]
fn end_to_end_single_sphere() {
    let scene = unit_sphere_scene();
    let mut framebuffer = Framebuffer::new(4, 4);
    RayTracer::new(&scene).render(&camera(), &settings(), &mut framebuffer);

    for (i, j) in CENTER {
        let color = framebuffer.pixel(i, j);
        assert_ne!(color, DVec3::new(0.0, 0.0, 0.5));
        // More than the ambient term alone
        assert!(color.x > 0.04, "pixel ({i}, {j}) = {color:?}");
    }
    for (i, j) in MISSING_CORNERS {
        let color = framebuffer.pixel(i, j);
        assert_abs_diff_eq!(color.x, BACKGROUND.x, epsilon = 1e-6);
        assert_abs_diff_eq!(color.y, BACKGROUND.y, epsilon = 1e-6);
        assert_abs_diff_eq!(color.z, BACKGROUND.z, epsilon = 1e-6);
    }
}

#[test]
fn center_ray_color_matches_hand_computation() {
    let scene = unit_sphere_scene();
    let color = RayTracer::new(&scene).trace_pixel(&camera(), &settings(), 2, 2);

    // Hit at (0, 0, -1), N = -Z, L = normalize(0, 5, -4), V = -Z
    let l = DVec3::new(0.0, 5.0, -4.0).normalize();
    let n = DVec3::NEG_Z;
    let r = (2.0 * n.dot(l) * n - l).normalize();
    let expected = 0.04 + 0.04 * n.dot(l) + 0.04 * r.dot(n).powf(10.0);

    assert_abs_diff_eq!(color.x, expected, epsilon = 1e-9);
    assert_abs_diff_eq!(color.y, expected, epsilon = 1e-9);
}

#[test]
fn every_pixel_is_set_once_in_raster_order() {
    let scene = unit_sphere_scene();
    let mut recorder = Recorder::default();
    RayTracer::new(&scene).render(&camera(), &settings(), &mut recorder);
    recorder.store(Path::new("unused.png")).unwrap();

    let order: Vec<(u32, u32)> = recorder.calls.iter().map(|(x, y, _)| (*x, *y)).collect();
    let expected: Vec<(u32, u32)> = (0..4).flat_map(|y| (0..4).map(move |x| (x, y))).collect();
    assert_eq!(order, expected);
    assert_eq!(recorder.stored.get(), 1);
}

#[test]
fn empty_light_list_shades_hits_black() {
    let mut scene = unit_sphere_scene();
    scene.lights.clear();
    let mut framebuffer = Framebuffer::new(4, 4);
    RayTracer::new(&scene).render(&camera(), &settings(), &mut framebuffer);

    assert_eq!(framebuffer.pixel(2, 2), Color::ZERO);
    assert_eq!(framebuffer.pixel(0, 0), BACKGROUND);
}

#[test]
fn rendered_png_quantizes_background() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sphere.png");

    let scene = unit_sphere_scene();
    let mut framebuffer = Framebuffer::new(4, 4);
    RayTracer::new(&scene).render(&camera(), &settings(), &mut framebuffer);
    framebuffer.store(&path).unwrap();

    let png = image::open(&path).unwrap().to_rgb8();
    assert_eq!(png.get_pixel(0, 0).0, [0, 0, 128]);
    assert_ne!(png.get_pixel(2, 2).0, [0, 0, 128]);
}
