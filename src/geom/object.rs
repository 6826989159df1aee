use crate::core::{Ray, Transformation, Xform};
use crate::geom::prim::{Edge, Hit, Prim, Shape};
use crate::material::Texture;

/**
 * A primitive placed in a scene: its shape, the transformations taking the shape's frame to
 * the world, and the textures layered over its surface in the order they were added.
 */
#[derive(Clone, Debug)]
pub struct SceneObject {
    shape: Shape,
    xform: Xform,
    textures: Vec<Texture>,
}

impl SceneObject {
    pub fn new<S: Into<Shape>>(shape: S) -> SceneObject {
        SceneObject {
            shape: shape.into(),
            xform: Xform::identity(),
            textures: vec![],
        }
    }

    pub fn with_texture(mut self, texture: Texture) -> SceneObject {
        self.add_texture(texture);
        self
    }

    pub fn with_transformation(mut self, t: Transformation) -> SceneObject {
        self.add_transformation(t);
        self
    }

    pub fn add_texture(&mut self, texture: Texture) {
        self.textures.push(texture);
    }

    /** Appends a transformation; it applies after all previously added ones. */
    pub fn add_transformation(&mut self, t: Transformation) {
        self.xform.push(t);
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn textures(&self) -> &[Texture] {
        &self.textures
    }

    /**
     * Intersects a world-space ray with the object, returning the closest hit strictly in front
     * of the ray origin.
     */
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        if self.xform.is_identity() {
            let surface = self.shape.intersect_local(ray)?;
            return Some(Hit::new(*ray, &surface, surface.point, surface.normal));
        }

        let local_ray = self.xform.untransform_ray(ray);
        let surface = self.shape.intersect_local(&local_ray)?;
        let point = ray.at(surface.t);
        let normal = self.xform.transform_normal(&surface.normal).normalized();
        Some(Hit::new(*ray, &surface, point, normal))
    }

    /** Distance along the ray to the closest hit, or infinity on a miss. */
    pub fn distance(&self, ray: &Ray) -> f64 {
        self.intersect(ray).map_or(f64::INFINITY, |hit| hit.distance)
    }

    /** World-space wireframe edges. */
    pub fn wireframe(&self) -> Vec<Edge> {
        let edges = self.shape.wireframe_local();
        if self.xform.is_identity() {
            return edges;
        }
        edges.into_iter()
            .map(|[a, b]| [self.xform.transform(&a), self.xform.transform(&b)])
            .collect()
    }
}
