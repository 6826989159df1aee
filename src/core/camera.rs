use crate::core::error::{Error, Result};
use crate::core::ray::Ray;
use crate::core::Vec3f;

/** Perspective pinhole camera. */
#[derive(Clone, Debug)]
pub struct Camera {
    /** Position of the eye. */
    location: Vec3f,
    /** Unit view direction. */
    direction: Vec3f,
    /** Unit vector towards the top of the frame, orthogonal to direction. */
    up: Vec3f,
    /** Unit vector towards the right of the frame, orthogonal to direction and up. */
    right: Vec3f,
    /**
     * Tangent-of-angle spanned by the full frame height, i.e. the top edge of the frame sits
     * at tan(theta) = fov_up / 2 above the view direction.
     */
    fov_up: f64,
    /** Same as fov_up, across the frame width. */
    fov_right: f64,
}

impl Camera {
    /**
     * Creates a camera at location aimed at look_at. The up vector only needs to be roughly
     * upwards; the true up and right vectors are derived from it so that the frame is
     * orthonormal and the view direction is preserved exactly.
     */
    pub fn new(location: Vec3f, look_at: Vec3f, up: Vec3f, fov_up: f64, fov_right: f64)
        -> Result<Camera>
    {
        for &fov in &[fov_up, fov_right] {
            if !(fov > 0.0 && fov.is_finite()) {
                return Err(Error::InvalidFov(fov));
            }
        }
        if up.is_nearly_zero() {
            return Err(Error::DegenerateVector("camera up vector"));
        }

        let view = look_at - location;
        if view.is_nearly_zero() {
            return Err(Error::DegenerateCamera("look-at point coincides with location"));
        }
        let direction = view.normalized();

        let side = direction.cross(&up.normalized());
        if side.is_nearly_zero() {
            return Err(Error::DegenerateCamera("up vector is parallel to view direction"));
        }
        let right = side.normalized();
        let up = right.cross(&direction);

        Ok(Camera {location, direction, up, right, fov_up, fov_right})
    }

    pub fn location(&self) -> Vec3f {
        self.location
    }

    pub fn direction(&self) -> Vec3f {
        self.direction
    }

    pub fn up(&self) -> Vec3f {
        self.up
    }

    pub fn right(&self) -> Vec3f {
        self.right
    }

    /**
     * Computes the primary ray through pixel (x, y) of a width x height raster. Rows run top to
     * bottom, so the vertical offset is negated relative to the up vector.
     */
    pub fn get_ray(&self, width: usize, height: usize, x: usize, y: usize) -> Ray {
        let tan_up = self.fov_up * (0.5 - y as f64 / height as f64);
        let tan_right = self.fov_right * (x as f64 / width as f64 - 0.5);

        let direction = self.direction + self.up * tan_up + self.right * tan_right;
        Ray::new(self.location, direction.normalized())
    }

    /**
     * Projects a world point back to pixel coordinates; the approximate inverse of get_ray().
     * Returns None for points on or behind the image plane through the eye. Coordinates may
     * fall outside the raster.
     */
    pub fn get_pixel(&self, width: usize, height: usize, point: &Vec3f) -> Option<(i64, i64)> {
        let l = *point - self.location;

        let lu = l.dot(&self.up);
        let lr = l.dot(&self.right);
        let lp = l.dot(&self.direction);
        if lp <= 0.0 {
            return None;
        }

        let x = (width as f64 * (lr / lp / self.fov_right + 0.5)).round();
        let y = (height as f64 * (-lu / lp / self.fov_up + 0.5)).round();
        Some((x as i64, y as i64))
    }
}
