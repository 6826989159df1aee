mod finish;
pub use crate::material::finish::Finish;

mod light;
pub use crate::material::light::{Falloff, LightSource};

mod pigment;
pub use crate::material::pigment::{ImageBuffer, ImagePigment, Pigment};

mod shading;
pub use crate::material::shading::{ShadingContext, Tracer};

mod texture;
pub use crate::material::texture::Texture;
