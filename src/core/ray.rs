use crate::core::Vec3f;
use std::fmt;
use std::fmt::Display;

/**
 * A ray with an origin and a direction. Anything that measures angles or light intensity
 * against the direction expects it to be unit length; the constructor does not normalize.
 */
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3f,
    pub direction: Vec3f,
}

impl Ray {
    pub fn new(origin: Vec3f, direction: Vec3f) -> Ray {
        Ray {origin, direction}
    }

    pub fn at(&self, k: f64) -> Vec3f {
        self.origin + self.direction * k
    }
}

impl Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Ray {{origin: {}, direction: {}}}", self.origin, self.direction)
    }
}
