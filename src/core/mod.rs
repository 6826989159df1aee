mod camera;
pub use crate::core::camera::Camera;

mod colour;
pub use crate::core::colour::Colour;

mod error;
pub use crate::core::error::{check_positive, Error, Result};

mod math;
pub use crate::core::math::*;

mod quat;
pub use crate::core::quat::Quat;

mod ray;
pub use crate::core::ray::Ray;

mod vector;
pub use crate::core::vector::Vec3;
pub type Vec3f = vector::Vec3<f64>;

mod xform;
pub use crate::core::xform::{Transformation, Xform};
