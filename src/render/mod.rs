mod exr;
pub use crate::render::exr::ExrWriter;

mod film;
pub use crate::render::film::Film;

mod overlay;
pub use crate::render::overlay::overlay_wireframe;

mod scene;
pub use crate::render::scene::{Scene, DEFAULT_MAX_RECURSION_DEPTH};
