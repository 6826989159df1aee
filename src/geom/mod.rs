mod cube;
pub use crate::geom::cube::Cube;

mod object;
pub use crate::geom::object::SceneObject;

mod plane;
pub use crate::geom::plane::Plane;

mod prim;
pub use crate::geom::prim::{Edge, Hit, Prim, Shape, SurfaceHit};

mod sphere;
pub use crate::geom::sphere::Sphere;
