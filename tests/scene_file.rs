use std::io::Write;
use std::path::Path;

use phongtrace::config::SceneFile;
use phongtrace::{Color, Error, ImageSink, RayTracer, RenderSettings, Result, Scene};

const DEMO: &str = include_str!("../scenes/demo.toml");

#[derive(Default)]
struct Pixels(Vec<Color>);

impl ImageSink for Pixels {
    fn set_pixel(&mut self, _x: u32, _y: u32, color: Color) {
        self.0.push(color);
    }

    fn store(&self, _destination: &Path) -> Result<()> {
        Ok(())
    }
}

#[test]
fn demo_file_matches_builtin_demo() {
    let (from_file, camera, settings) = SceneFile::from_toml(DEMO).unwrap().into_parts().unwrap();
    let builtin = Scene::demo();

    assert_eq!(settings.width, 800);
    assert_eq!(settings.height, 600);
    assert_eq!(from_file.geometries.len(), builtin.geometries.len());
    assert_eq!(from_file.lights, builtin.lights);

    let small = RenderSettings {
        width: 32,
        height: 24,
        parallel: false,
        progress: false,
        ..settings
    };
    let mut a = Pixels::default();
    let mut b = Pixels::default();
    RayTracer::new(&from_file).render(&camera, &small, &mut a);
    RayTracer::new(&builtin).render(&camera, &small, &mut b);

    assert_eq!(a.0.len(), 32 * 24);
    assert_eq!(a.0, b.0);
    assert!(a.0.iter().any(|c| *c != small.background));
}

#[test]
fn load_reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DEMO.as_bytes()).unwrap();

    let scene = SceneFile::load(file.path()).unwrap();
    assert_eq!(scene.geometries.len(), 4);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = SceneFile::load(Path::new("does/not/exist.toml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn missing_camera_is_a_parse_error() {
    let err = SceneFile::from_toml("[image]\nwidth = 4\nheight = 4\n").unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}
