use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use whitted::core::{Camera, Colour, Transformation, Vec3f};
use whitted::geom::{Cube, Plane, SceneObject, Sphere};
use whitted::material::{Finish, ImageBuffer, ImagePigment, LightSource, Pigment, Texture};
use whitted::render::{ExrWriter, Film, Scene, DEFAULT_MAX_RECURSION_DEPTH};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DemoScene {
    /// A single red sphere.
    OneSphere,
    /// Four glossy spheres over a checkered floor.
    FourSpheres,
    /// A partly reflective sphere over a checkered floor.
    MirroredSphere,
    /// A refracting sphere over a checkered floor.
    GlassSphere,
    /// A blue cube lit by two lights.
    OneCube,
    /// A scaled and tilted floor plane.
    JustAPlane,
    /// Two parallel mirrors facing each other.
    FacingMirrors,
}

#[derive(Parser, Debug)]
#[command(name = "whitted")]
#[command(about = "Renders one of the built-in demo scenes", long_about = None)]
struct Args {
    /// Scene to render
    #[arg(short, long, value_enum, default_value_t = DemoScene::FourSpheres)]
    scene: DemoScene,

    #[arg(long, default_value_t = 640)]
    width: usize,

    #[arg(long, default_value_t = 400)]
    height: usize,

    /// Maximum number of reflection and refraction bounces
    #[arg(short, long, default_value_t = DEFAULT_MAX_RECURSION_DEPTH)]
    depth: usize,

    /// Output file; .exr writes unclamped floats, anything else goes through the image encoder
    #[arg(short, long, default_value = "out.png")]
    output: PathBuf,

    /// Draw object wireframes over the render
    #[arg(long)]
    wireframe: bool,

    /// Image to use as the floor pigment instead of a checkerboard
    #[arg(long)]
    texture: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let floor = match &args.texture {
        Some(path) => Pigment::Image(ImagePigment::with_scale(load_image(path)?, 1.0)?),
        None => checkers()?,
    };

    let aspect = args.width as f64 / args.height.max(1) as f64;
    let mut scene = build_scene(args.scene, floor, aspect)?;
    log::info!("rendering {:?} at {}x{}", args.scene, args.width, args.height);

    let mut film = scene.render(args.width, args.height, args.depth)?;
    if args.wireframe {
        scene.overlay_wireframe(&mut film, Colour::new(0.0, 1.0, 0.0))?;
    }

    save(&film, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    log::info!("wrote {}", args.output.display());
    Ok(())
}

fn load_image(path: &Path) -> Result<Arc<ImageBuffer>> {
    let img = image::open(path)
        .with_context(|| format!("failed to read texture {}", path.display()))?
        .to_rgb8();
    let pixels = img.pixels()
        .map(|p| ((p[0] as u32) << 16) | ((p[1] as u32) << 8) | (p[2] as u32))
        .collect();
    Ok(Arc::new(ImageBuffer::new(img.width() as usize, img.height() as usize, pixels)?))
}

fn save(film: &Film, path: &Path) -> Result<()> {
    let is_exr = path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("exr"));
    if is_exr {
        let mut writer = ExrWriter::new();
        writer.update(film)?;
        writer.save(path)?;
    }
    else {
        let img = image::RgbImage::from_raw(
                film.width() as u32, film.height() as u32, film.to_rgb8())
            .ok_or_else(|| anyhow!("film does not fit an RGB image"))?;
        img.save(path)?;
    }
    Ok(())
}

fn checkers() -> Result<Pigment> {
    Ok(Pigment::checkered(Colour::new(0.5, 0.5, 0.5), Colour::WHITE, 1.0)?)
}

fn glossy(colour: Colour) -> Texture {
    Texture::new(Pigment::solid(colour))
        .with_finish(Finish::Diffuse(1.0))
        .with_finish(Finish::Ambient(0.1))
        .with_finish(Finish::specular(1.0, 100.0))
}

fn floor_at(height: f64, pigment: Pigment) -> Result<SceneObject> {
    let plane = Plane::new(Vec3f::new(0.0, height, 0.0), Vec3f::y_axis(), Vec3f::z_axis())?;
    Ok(SceneObject::new(plane)
        .with_texture(Texture::new(pigment)
            .with_finish(Finish::Diffuse(1.0))
            .with_finish(Finish::Ambient(0.05))))
}

fn build_scene(demo: DemoScene, floor: Pigment, aspect: f64) -> Result<Scene> {
    let mut scene = Scene::new();
    let key_light = LightSource::new(Vec3f::new(-3.0, 3.0, 3.0), 4.0)?;

    match demo {
        DemoScene::OneSphere => {
            scene.set_camera(Camera::new(
                Vec3f::new(0.0, 0.0, 5.0), Vec3f::zero(), Vec3f::y_axis(), 1.0, aspect)?);
            scene.add_light_source(key_light);
            scene.add_object(SceneObject::new(Sphere::new(Vec3f::zero(), 0.4)?)
                .with_texture(Texture::new(Pigment::solid(Colour::new(1.0, 0.0, 0.0)))
                    .with_finish(Finish::Diffuse(1.0))
                    .with_finish(Finish::Ambient(0.1))));
        }
        DemoScene::FourSpheres => {
            scene.set_camera(Camera::new(
                Vec3f::new(-1.0, 2.0, 5.0), Vec3f::zero(), Vec3f::y_axis(), 1.0, aspect)?);
            scene.add_light_source(key_light);
            let spheres = [
                (Vec3f::new(-1.0, 0.0, 0.0), Colour::new(1.0, 0.0, 0.0)),
                (Vec3f::new(0.0, 0.0, 1.0), Colour::new(0.0, 1.0, 0.0)),
                (Vec3f::new(0.0, 0.0, -1.0), Colour::new(0.0, 0.0, 1.0)),
                (Vec3f::new(1.0, 0.0, 0.0), Colour::new(1.0, 1.0, 0.0)),
            ];
            for &(centre, colour) in spheres.iter() {
                scene.add_object(SceneObject::new(Sphere::new(centre, 0.4)?)
                    .with_texture(glossy(colour)));
            }
            scene.add_object(floor_at(-0.4, floor)?);
        }
        DemoScene::MirroredSphere => {
            scene.set_camera(Camera::new(
                Vec3f::new(-1.0, 1.0, 3.0), Vec3f::zero(), Vec3f::y_axis(), 1.0, aspect)?);
            scene.add_light_source(key_light);
            scene.add_object(SceneObject::new(Sphere::new(Vec3f::zero(), 0.4)?)
                .with_texture(Texture::new(Pigment::solid(Colour::new(1.0, 0.0, 1.0)))
                    .with_finish(Finish::Ambient(0.1))
                    .with_finish(Finish::Mirror(0.2))
                    .with_finish(Finish::Diffuse(0.8))
                    .with_finish(Finish::specular(1.0, 100.0))));
            scene.add_object(floor_at(-0.4, floor)?);
        }
        DemoScene::GlassSphere => {
            scene.set_camera(Camera::new(
                Vec3f::new(0.0, 0.0, 2.0), Vec3f::zero(), Vec3f::y_axis(), 1.0, aspect)?);
            scene.add_light_source(LightSource::new(Vec3f::new(-1.0, 3.0, 1.0), 4.0)?);
            scene.add_object(SceneObject::new(Sphere::new(Vec3f::zero(), 0.4)?)
                .with_texture(Texture::new(Pigment::solid(Colour::WHITE))
                    .with_finish(Finish::transparent(1.1)?)));
            scene.add_object(floor_at(-0.4, floor)?);
        }
        DemoScene::OneCube => {
            scene.set_camera(Camera::new(
                Vec3f::new(1.0, 1.0, -2.0), Vec3f::zero(), Vec3f::y_axis(), 1.0, aspect)?);
            scene.add_light_source(LightSource::new(Vec3f::new(-3.0, 3.0, -3.0), 4.0)?);
            scene.add_light_source(LightSource::new(Vec3f::new(6.0, 6.0, -3.0), 4.0)?);
            scene.add_object(SceneObject::new(Cube::new(Vec3f::zero(), 0.5)?)
                .with_texture(Texture::new(Pigment::solid(Colour::new(0.0, 0.0, 1.0)))
                    .with_finish(Finish::Diffuse(1.0))
                    .with_finish(Finish::Ambient(0.1))));
            scene.add_object(floor_at(-0.25, floor)?);
        }
        DemoScene::JustAPlane => {
            scene.set_camera(Camera::new(
                Vec3f::new(0.0, -3.0, 1.0), Vec3f::zero(), Vec3f::z_axis(), 1.0, aspect)?);
            scene.add_light_source(LightSource::new(Vec3f::new(-3.0, -3.0, 3.0), 4.0)?);
            let tilt = Transformation::rotation(Vec3f::y_axis(), std::f64::consts::PI / 16.0)?;
            let plane = Plane::new(Vec3f::zero(), Vec3f::z_axis(), Vec3f::y_axis())?;
            scene.add_object(SceneObject::new(plane)
                .with_texture(Texture::new(floor)
                    .with_finish(Finish::Diffuse(1.0))
                    .with_finish(Finish::Ambient(0.1)))
                .with_transformation(Transformation::scale(2.0, 1.0, 1.0)?)
                .with_transformation(tilt));
        }
        DemoScene::FacingMirrors => {
            let look_at = Vec3f::new(0.3, 0.3, -1.0);
            scene.set_camera(Camera::new(
                Vec3f::new(0.0, 0.5, 0.0), look_at, Vec3f::y_axis(), 1.0, aspect)?);
            scene.add_light_source(LightSource::new(Vec3f::new(0.0, 2.0, 0.0), 3.0)?);
            for &(z, normal) in [(-1.5, Vec3f::z_axis()), (1.5, -Vec3f::z_axis())].iter() {
                let mirror = Plane::new(Vec3f::new(0.0, 0.0, z), normal, Vec3f::y_axis())?;
                scene.add_object(SceneObject::new(mirror)
                    .with_texture(Texture::new(Pigment::solid(Colour::new(0.8, 0.9, 1.0)))
                        .with_finish(Finish::Ambient(0.05))
                        .with_finish(Finish::Mirror(0.85))));
            }
            scene.add_object(SceneObject::new(Sphere::new(Vec3f::new(0.3, 0.3, -0.8), 0.3)?)
                .with_texture(glossy(Colour::new(1.0, 0.4, 0.0))));
            scene.add_object(floor_at(-0.4, floor)?);
        }
    }

    Ok(scene)
}
