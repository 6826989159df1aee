use crate::core::{Colour, Ray, Vec3f};
use crate::geom::Hit;
use crate::material::LightSource;

use std::cell::OnceCell;

/**
 * The parts of a scene that finishes call back into: recursive tracing for reflection and
 * refraction, and shadow queries for lighting.
 */
pub trait Tracer {
    /** Colour seen along ray, which is depth bounces away from the camera. */
    fn trace_ray(&self, ray: &Ray, depth: usize) -> Colour;

    /** Lights with an unobstructed line of sight to point. Not subject to any depth limit. */
    fn visible_lights(&self, point: &Vec3f) -> Vec<&LightSource>;
}

/**
 * Everything a finish sees while shading one hit. The visible light set is computed on first
 * use and shared by every finish layered at this hit.
 */
pub struct ShadingContext<'a> {
    tracer: &'a dyn Tracer,
    hit: &'a Hit,
    depth: usize,
    lights: OnceCell<Vec<&'a LightSource>>,
}

impl<'a> ShadingContext<'a> {
    pub fn new(tracer: &'a dyn Tracer, hit: &'a Hit, depth: usize) -> ShadingContext<'a> {
        ShadingContext {tracer, hit, depth, lights: OnceCell::new()}
    }

    pub fn hit(&self) -> &Hit {
        self.hit
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn visible_lights(&self) -> &[&'a LightSource] {
        self.lights.get_or_init(|| self.tracer.visible_lights(&self.hit.reflection_origin()))
    }

    /** Traces a secondary ray spawned at this hit, one bounce deeper. */
    pub fn trace(&self, ray: &Ray) -> Colour {
        self.tracer.trace_ray(ray, self.depth + 1)
    }
}
