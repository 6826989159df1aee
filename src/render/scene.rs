use crate::core::{Camera, Colour, Error, Ray, Result, Vec3f};
use crate::geom::{Hit, SceneObject};
use crate::material::{LightSource, ShadingContext, Tracer};
use crate::render::{overlay, Film};

use std::time::Instant;

pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 10;

/**
 * Objects, lights, and a camera. The scene is built up front and is read-only while tracing;
 * per-ray state lives in the Hit values and depth counts passed down the call stack.
 */
#[derive(Clone, Debug)]
pub struct Scene {
    camera: Option<Camera>,
    lights: Vec<LightSource>,
    objects: Vec<SceneObject>,
    background: Colour,
    max_recursion_depth: usize,
}

impl Scene {
    pub fn new() -> Scene {
        Scene {
            camera: None,
            lights: vec![],
            objects: vec![],
            background: Colour::BLACK,
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
        }
    }

    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    pub fn add_light_source(&mut self, light: LightSource) {
        self.lights.push(light);
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = Some(camera);
    }

    pub fn set_background(&mut self, colour: Colour) {
        self.background = colour;
    }

    pub fn set_max_recursion_depth(&mut self, depth: usize) {
        self.max_recursion_depth = depth;
    }

    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    pub fn lights(&self) -> &[LightSource] {
        &self.lights
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn background(&self) -> Colour {
        self.background
    }

    pub fn max_recursion_depth(&self) -> usize {
        self.max_recursion_depth
    }

    /**
     * Finds the closest object along the ray with a linear scan. On exact ties the object added
     * first wins.
     */
    pub fn nearest_hit(&self, ray: &Ray) -> Option<(usize, Hit)> {
        let mut nearest: Option<(usize, Hit)> = None;
        for (i, object) in self.objects.iter().enumerate() {
            if let Some(hit) = object.intersect(ray) {
                if nearest.as_ref().map_or(true, |(_, n)| hit.distance < n.distance) {
                    nearest = Some((i, hit));
                }
            }
        }
        nearest
    }

    /**
     * Lights that can see point. A light is hidden when the ray from the point toward it strikes
     * any object at all, including objects beyond the light.
     */
    pub fn visible_lights(&self, point: &Vec3f) -> Vec<&LightSource> {
        self.lights.iter()
            .filter(|light| !self.is_occluded(point, &light.location()))
            .collect()
    }

    fn is_occluded(&self, point: &Vec3f, target: &Vec3f) -> bool {
        let to_target = *target - *point;
        // A light sitting on the point has no direction to test.
        if to_target.magnitude_squared() == 0.0 {
            return false;
        }
        let ray = Ray::new(*point, to_target.normalized());
        self.objects.iter().any(|object| object.distance(&ray).is_finite())
    }

    /**
     * Colour seen along ray. depth counts the reflections and refractions between the camera and
     * this ray; past the scene's limit the background is returned instead of tracing further.
     */
    pub fn trace_ray(&self, ray: &Ray, depth: usize) -> Colour {
        if depth > self.max_recursion_depth {
            log::warn!("max recursion depth {} exceeded", self.max_recursion_depth);
            return self.background;
        }

        match self.nearest_hit(ray) {
            Some((i, hit)) => self.shade(&self.objects[i], &hit, depth),
            None => self.background,
        }
    }

    fn shade(&self, object: &SceneObject, hit: &Hit, depth: usize) -> Colour {
        let ctx = ShadingContext::new(self, hit, depth);
        object.textures().iter()
            .fold(Colour::BLACK, |colour, texture| texture.layer(&ctx, colour))
    }

    /**
     * Traces one primary ray per pixel. Fails when no camera has been set or the raster is
     * empty.
     */
    pub fn render(&mut self, width: usize, height: usize, max_recursion_depth: usize)
        -> Result<Film>
    {
        let camera = self.camera.clone().ok_or(Error::MissingCamera)?;
        let mut film = Film::new(width, height)?;
        self.max_recursion_depth = max_recursion_depth;

        log::debug!("rendering {}x{}, {} objects, {} lights, depth {}",
            width, height, self.objects.len(), self.lights.len(), max_recursion_depth);
        let start = Instant::now();

        for (x, y) in film.coords() {
            let ray = camera.get_ray(width, height, x, y);
            let colour = self.trace_ray(&ray, 0);
            film.set(x, y, colour);
        }

        log::info!("rendered {}x{} in {:.2?}", width, height, start.elapsed());
        Ok(film)
    }

    /** Draws every object's wireframe over the film, as seen through the scene camera. */
    pub fn overlay_wireframe(&self, film: &mut Film, colour: Colour) -> Result<()> {
        let camera = self.camera.as_ref().ok_or(Error::MissingCamera)?;
        overlay::overlay_wireframe(film, camera, &self.objects, colour);
        Ok(())
    }
}

impl Default for Scene {
    fn default() -> Scene {
        Scene::new()
    }
}

impl Tracer for Scene {
    fn trace_ray(&self, ray: &Ray, depth: usize) -> Colour {
        Scene::trace_ray(self, ray, depth)
    }

    fn visible_lights(&self, point: &Vec3f) -> Vec<&LightSource> {
        Scene::visible_lights(self, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Plane, Sphere};
    use crate::material::{Finish, Pigment, Texture};
    use approx::assert_abs_diff_eq;

    fn matte(colour: Colour) -> Texture {
        Texture::new(Pigment::solid(colour))
            .with_finish(Finish::Diffuse(1.0))
            .with_finish(Finish::Ambient(0.1))
    }

    fn ball(centre: Vec3f, radius: f64) -> SceneObject {
        SceneObject::new(Sphere::new(centre, radius).unwrap())
            .with_texture(matte(Colour::new(1.0, 0.0, 0.0)))
    }

    fn mirror_plane(point: Vec3f, normal: Vec3f) -> SceneObject {
        SceneObject::new(Plane::new(point, normal, Vec3f::y_axis()).unwrap())
            .with_texture(Texture::new(Pigment::solid(Colour::WHITE))
                .with_finish(Finish::Ambient(0.1))
                .with_finish(Finish::Mirror(0.9)))
    }

    fn facing_mirrors() -> Scene {
        let mut scene = Scene::new();
        scene.add_object(mirror_plane(Vec3f::new(0.0, 0.0, -1.0), Vec3f::z_axis()));
        scene.add_object(mirror_plane(Vec3f::new(0.0, 0.0, 1.0), -Vec3f::z_axis()));
        scene
    }

    #[test]
    fn miss_returns_background() {
        let mut scene = Scene::new();
        scene.set_background(Colour::new(0.1, 0.2, 0.3));
        scene.add_object(ball(Vec3f::zero(), 1.0));
        let ray = Ray::new(Vec3f::new(0.0, 5.0, 5.0), Vec3f::new(0.0, 0.0, -1.0));
        assert_eq!(scene.trace_ray(&ray, 0), Colour::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn nearest_hit_picks_closest_object() {
        let mut scene = Scene::new();
        scene.add_object(ball(Vec3f::new(0.0, 0.0, -5.0), 1.0));
        scene.add_object(ball(Vec3f::new(0.0, 0.0, -2.0), 0.5));
        scene.add_object(ball(Vec3f::new(0.0, 0.0, -2.0), 0.5));
        let ray = Ray::new(Vec3f::zero(), Vec3f::new(0.0, 0.0, -1.0));
        let (i, hit) = scene.nearest_hit(&ray).unwrap();
        // Exact ties go to the first object added.
        assert_eq!(i, 1);
        assert_abs_diff_eq!(hit.distance, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn any_object_along_the_light_ray_casts_shadow() {
        let point = Vec3f::new(0.0, 1e-5, 0.0);
        let mut scene = Scene::new();
        scene.add_light_source(LightSource::new(Vec3f::new(0.0, 4.0, 0.0), 4.0).unwrap());
        scene.add_object(SceneObject::new(
            Plane::new(Vec3f::zero(), Vec3f::y_axis(), Vec3f::z_axis()).unwrap()));
        assert_eq!(scene.visible_lights(&point).len(), 1);

        let mut shadowed = scene.clone();
        shadowed.add_object(ball(Vec3f::new(0.0, 2.0, 0.0), 0.5));
        assert!(shadowed.visible_lights(&point).is_empty());

        let mut beyond = scene.clone();
        beyond.add_object(ball(Vec3f::new(0.0, 6.0, 0.0), 0.5));
        assert!(beyond.visible_lights(&point).is_empty());

        let mut aside = scene.clone();
        aside.add_object(ball(Vec3f::new(3.0, 2.0, 0.0), 0.5));
        assert_eq!(aside.visible_lights(&point).len(), 1);
    }

    #[test]
    fn shadowed_floor_is_darker() {
        let mut scene = Scene::new();
        scene.add_light_source(LightSource::new(Vec3f::new(0.0, 4.0, 0.0), 4.0).unwrap());
        scene.add_object(SceneObject::new(
                Plane::new(Vec3f::zero(), Vec3f::y_axis(), Vec3f::z_axis()).unwrap())
            .with_texture(matte(Colour::WHITE)));
        let ray = Ray::new(Vec3f::new(0.0, 1.0, 3.0), Vec3f::new(0.0, -1.0, -3.0).normalized());
        let lit = scene.trace_ray(&ray, 0);

        scene.add_object(ball(Vec3f::new(0.0, 2.0, 0.0), 0.5));
        let shadowed = scene.trace_ray(&ray, 0);
        assert!(shadowed.r < lit.r);
        assert_abs_diff_eq!(shadowed.r, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn facing_mirrors_stop_at_depth_limit() {
        let mut scene = facing_mirrors();
        let ray = Ray::new(Vec3f::zero(), Vec3f::new(0.0, 0.0, -1.0));

        // Each bounce adds 0.1 ambient and passes 0.9 of what lies beyond; the depth limit
        // cuts the series off after depth + 1 surfaces.
        for &depth in &[0usize, 3, 10] {
            scene.set_max_recursion_depth(depth);
            let c = scene.trace_ray(&ray, 0);
            let expected = 1.0 - 0.9f64.powi(depth as i32 + 1);
            assert_abs_diff_eq!(c.r, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn exceeding_depth_returns_background() {
        let mut scene = facing_mirrors();
        scene.set_background(Colour::new(0.0, 0.0, 1.0));
        scene.set_max_recursion_depth(2);
        let ray = Ray::new(Vec3f::zero(), Vec3f::new(0.0, 0.0, -1.0));
        assert_eq!(scene.trace_ray(&ray, 3), Colour::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn object_without_textures_is_black() {
        let mut scene = Scene::new();
        scene.set_background(Colour::WHITE);
        scene.add_object(SceneObject::new(Sphere::new(Vec3f::zero(), 1.0).unwrap()));
        let ray = Ray::new(Vec3f::new(0.0, 0.0, 5.0), Vec3f::new(0.0, 0.0, -1.0));
        assert_eq!(scene.trace_ray(&ray, 0), Colour::BLACK);
    }

    #[test]
    fn render_without_camera_fails() {
        let mut scene = Scene::new();
        scene.add_object(ball(Vec3f::zero(), 1.0));
        assert!(matches!(scene.render(4, 4, 5), Err(Error::MissingCamera)));
    }

    #[test]
    fn failed_render_leaves_depth_budget_alone() {
        let mut scene = Scene::new();
        scene.set_max_recursion_depth(7);
        assert!(scene.render(4, 4, 2).is_err());
        assert_eq!(scene.max_recursion_depth(), 7);

        scene.set_camera(Camera::new(
            Vec3f::new(0.0, 0.0, 5.0), Vec3f::zero(), Vec3f::y_axis(), 1.0, 1.0).unwrap());
        assert!(matches!(scene.render(0, 4, 2), Err(Error::EmptyRaster {..})));
        assert_eq!(scene.max_recursion_depth(), 7);
    }

    #[test]
    fn render_fills_every_pixel() {
        let mut scene = Scene::new();
        scene.set_background(Colour::new(0.0, 0.0, 0.5));
        scene.add_light_source(LightSource::new(Vec3f::new(0.0, 0.0, 5.0), 5.0).unwrap());
        scene.add_object(ball(Vec3f::zero(), 0.5));
        scene.set_camera(Camera::new(
            Vec3f::new(0.0, 0.0, 5.0), Vec3f::zero(), Vec3f::y_axis(), 1.0, 1.0).unwrap());

        let film = scene.render(9, 9, 4).unwrap();
        assert_eq!(scene.max_recursion_depth(), 4);
        assert_eq!(film.get(0, 0), Colour::new(0.0, 0.0, 0.5));
        let centre = film.get(4, 4);
        assert!(centre.r > 0.5);
        assert_eq!(centre.b, 0.0);
        assert!(film.pixels().iter().all(|c| c.is_finite()));
    }
}
