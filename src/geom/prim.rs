use crate::core::{Ray, Vec3f, EPSILON};
use crate::geom::{Cube, Plane, Sphere};

/// A wireframe edge between two points.
pub type Edge = [Vec3f; 2];

pub trait Prim {
    /**
     * Intersects the given ray in the prim's own frame and returns the closest intersection
     * strictly in front of the ray origin, if any. The ray direction need not be unit length;
     * the returned distance is the ray parameter, not a Euclidean length.
     */
    fn intersect_local(&self, ray: &Ray) -> Option<SurfaceHit>;

    /** Edges outlining the prim in its own frame, for debug overlays. */
    fn wireframe_local(&self) -> Vec<Edge>;
}

/// Properties of the prim surface at the point of an intersection, in the prim's frame.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceHit {
    pub t: f64,
    pub point: Vec3f,
    /// Outward unit normal.
    pub normal: Vec3f,
    pub u: f64,
    pub v: f64,
}

/// The closed set of primitives a scene object can be built from.
#[derive(Clone, Debug)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Cube(Cube),
}

impl Prim for Shape {
    fn intersect_local(&self, ray: &Ray) -> Option<SurfaceHit> {
        match self {
            Shape::Sphere(s) => s.intersect_local(ray),
            Shape::Plane(p) => p.intersect_local(ray),
            Shape::Cube(c) => c.intersect_local(ray),
        }
    }

    fn wireframe_local(&self) -> Vec<Edge> {
        match self {
            Shape::Sphere(s) => s.wireframe_local(),
            Shape::Plane(p) => p.wireframe_local(),
            Shape::Cube(c) => c.wireframe_local(),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(s: Sphere) -> Shape { Shape::Sphere(s) }
}

impl From<Plane> for Shape {
    fn from(p: Plane) -> Shape { Shape::Plane(p) }
}

impl From<Cube> for Shape {
    fn from(c: Cube) -> Shape { Shape::Cube(c) }
}

/**
 * Everything shading needs to know about one ray striking one object, in world space.
 * A Hit is a plain value owned by whoever traced the ray, so nested traces never disturb the
 * collision data of an enclosing one.
 */
#[derive(Clone, Copy, Debug)]
pub struct Hit {
    /// Parametric distance along the incident ray.
    pub distance: f64,
    pub incident: Ray,
    pub point: Vec3f,
    /// Outward unit normal.
    pub normal: Vec3f,
    pub u: f64,
    pub v: f64,
    /// True when the incident ray struck the surface from the inside.
    pub internal: bool,
}

impl Hit {
    pub fn new(incident: Ray, surface: &SurfaceHit, point: Vec3f, normal: Vec3f) -> Hit {
        Hit {
            distance: surface.t,
            incident,
            point,
            normal,
            u: surface.u,
            v: surface.v,
            internal: incident.direction.dot(&normal) > 0.0,
        }
    }

    /** The hit point pushed onto the side of the surface the incident ray came from. */
    pub fn reflection_origin(&self) -> Vec3f {
        if self.internal {
            self.point - self.normal * EPSILON
        }
        else {
            self.point + self.normal * EPSILON
        }
    }

    /** The hit point pushed through to the far side of the surface. */
    pub fn transmission_origin(&self) -> Vec3f {
        if self.internal {
            self.point + self.normal * EPSILON
        }
        else {
            self.point - self.normal * EPSILON
        }
    }

    /** Mirror direction of the incident ray about the normal. */
    pub fn reflected_direction(&self) -> Vec3f {
        self.incident.direction.reflect(&self.normal)
    }

    pub fn reflected_ray(&self) -> Ray {
        Ray::new(self.reflection_origin(), self.reflected_direction())
    }
}
