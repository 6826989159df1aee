//! A Whitted-style recursive ray tracer: spheres, planes, and cubes lit by point lights, shaded
//! with layered pigments and finishes, with mirror reflection and refraction.

pub mod core;
pub mod geom;
pub mod material;
pub mod render;
