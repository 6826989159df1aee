use crate::core::error::{check_positive, Error, Result};
use crate::core::quat::Quat;
use crate::core::ray::Ray;
use crate::core::Vec3f;

/** One step of an object-to-world transformation. */
#[derive(Clone, Copy, Debug)]
pub enum Transformation {
    Translation(Vec3f),
    Rotation(Quat),
    Scale(Vec3f),
}

impl Transformation {
    pub fn translation(delta: Vec3f) -> Transformation {
        Transformation::Translation(delta)
    }

    /** Right-handed rotation by angle radians about axis. */
    pub fn rotation(axis: Vec3f, angle: f64) -> Result<Transformation> {
        if axis.is_nearly_zero() {
            return Err(Error::DegenerateVector("rotation axis"));
        }
        Ok(Transformation::Rotation(Quat::from_axis_angle(&axis, angle)))
    }

    /** Per-axis scale; every factor must be positive. */
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Result<Transformation> {
        Ok(Transformation::Scale(Vec3f::new(
            check_positive("scale factor", sx)?,
            check_positive("scale factor", sy)?,
            check_positive("scale factor", sz)?)))
    }

    fn apply_point(&self, v: &Vec3f) -> Vec3f {
        match *self {
            Transformation::Translation(delta) => *v + delta,
            _ => self.apply_dir(v),
        }
    }

    fn unapply_point(&self, v: &Vec3f) -> Vec3f {
        match *self {
            Transformation::Translation(delta) => *v - delta,
            _ => self.unapply_dir(v),
        }
    }

    fn apply_dir(&self, v: &Vec3f) -> Vec3f {
        match *self {
            Transformation::Translation(_) => *v,
            Transformation::Rotation(q) => q.rotate(v),
            Transformation::Scale(s) => v.comp_mult(&s),
        }
    }

    fn unapply_dir(&self, v: &Vec3f) -> Vec3f {
        match *self {
            Transformation::Translation(_) => *v,
            Transformation::Rotation(q) => q.conjugate().rotate(v),
            Transformation::Scale(s) => v.comp_div(&s),
        }
    }

    // Normals transform by the inverse transpose.
    fn apply_normal(&self, v: &Vec3f) -> Vec3f {
        match *self {
            Transformation::Translation(_) => *v,
            Transformation::Rotation(q) => q.rotate(v),
            Transformation::Scale(s) => v.comp_div(&s),
        }
    }
}

/**
 * An ordered chain of transformations taking object space to world space. Steps apply in the
 * order they were pushed.
 */
#[derive(Clone, Debug, Default)]
pub struct Xform {
    steps: Vec<Transformation>,
}

impl Xform {
    pub fn identity() -> Xform {
        Xform {steps: vec![]}
    }

    pub fn push(&mut self, t: Transformation) {
        self.steps.push(t);
    }

    pub fn is_identity(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn transform(&self, v: &Vec3f) -> Vec3f {
        self.steps.iter().fold(*v, |acc, t| t.apply_point(&acc))
    }

    pub fn untransform(&self, v: &Vec3f) -> Vec3f {
        self.steps.iter().rev().fold(*v, |acc, t| t.unapply_point(&acc))
    }

    pub fn transform_dir(&self, v: &Vec3f) -> Vec3f {
        self.steps.iter().fold(*v, |acc, t| t.apply_dir(&acc))
    }

    pub fn untransform_dir(&self, v: &Vec3f) -> Vec3f {
        self.steps.iter().rev().fold(*v, |acc, t| t.unapply_dir(&acc))
    }

    /** Maps an object-space normal to world space. The result is not renormalized. */
    pub fn transform_normal(&self, v: &Vec3f) -> Vec3f {
        self.steps.iter().fold(*v, |acc, t| t.apply_normal(&acc))
    }

    /**
     * Maps a world ray into object space. The direction keeps whatever length the chain gives
     * it, so parametric distances along the object-space ray equal those along the world ray.
     */
    pub fn untransform_ray(&self, r: &Ray) -> Ray {
        Ray::new(self.untransform(&r.origin), self.untransform_dir(&r.direction))
    }
}
