use crate::core::{Error, Ray, Result, Vec3f};
use crate::geom::prim::{Edge, Prim, SurfaceHit};

/**
 * An infinite plane through a point. The north and east tangents span the plane and define the
 * (u, v) coordinates used for pigment mapping.
 */
#[derive(Clone, Debug)]
pub struct Plane {
    point: Vec3f,
    normal: Vec3f,
    north: Vec3f,
    east: Vec3f,
}

impl Plane {
    /**
     * Creates a plane through point with the given normal. Only the component of north that
     * lies in the plane matters; it orients the (u, v) coordinate system.
     */
    pub fn new(point: Vec3f, normal: Vec3f, north: Vec3f) -> Result<Plane> {
        if normal.is_nearly_zero() {
            return Err(Error::DegenerateVector("plane normal"));
        }
        let normal = normal.normalized();

        let east = north.cross(&normal);
        if east.is_nearly_zero() {
            return Err(Error::DegenerateVector("plane north tangent"));
        }
        let east = east.normalized();
        let north = normal.cross(&north.cross(&normal)).normalized();

        Ok(Plane {point, normal, north, east})
    }

    pub fn point(&self) -> Vec3f {
        self.point
    }

    pub fn normal(&self) -> Vec3f {
        self.normal
    }

    pub fn north(&self) -> Vec3f {
        self.north
    }

    pub fn east(&self) -> Vec3f {
        self.east
    }
}

impl Prim for Plane {
    fn intersect_local(&self, ray: &Ray) -> Option<SurfaceHit> {
        let t = self.normal.dot(&(self.point - ray.origin)) / self.normal.dot(&ray.direction);

        // Parallel rays give an infinite or NaN t.
        if !(t > 0.0 && t.is_finite()) {
            return None;
        }

        let point = ray.at(t);
        let q = point - self.point;
        Some(SurfaceHit {
            t,
            point,
            normal: self.normal,
            u: q.dot(&self.north),
            v: q.dot(&self.east),
        })
    }

    fn wireframe_local(&self) -> Vec<Edge> {
        let n = self.north * 0.5;
        let e = self.east * 0.5;
        let a = self.point + n + e;
        let b = self.point + n - e;
        let c = self.point - n - e;
        let d = self.point - n + e;
        vec![[a, b], [b, c], [c, d], [d, a]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn floor() -> Plane {
        Plane::new(Vec3f::zero(), Vec3f::y_axis(), Vec3f::z_axis()).unwrap()
    }

    #[test]
    fn straight_down_hit() {
        let ray = Ray::new(Vec3f::new(0.0, 5.0, 0.0), Vec3f::new(0.0, -1.0, 0.0));
        let hit = floor().intersect_local(&ray).unwrap();
        assert_abs_diff_eq!(hit.t, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hit.u, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hit.v, 0.0, epsilon = 1e-12);
        assert_eq!(hit.normal, Vec3f::y_axis());
    }

    #[test]
    fn uv_follow_tangents() {
        let ray = Ray::new(Vec3f::new(2.0, 5.0, 3.0), Vec3f::new(0.0, -1.0, 0.0));
        let hit = floor().intersect_local(&ray).unwrap();
        // North is +z, east is north x normal = +z x +y = -x.
        assert_abs_diff_eq!(hit.u, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hit.v, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn parallel_ray_misses() {
        let ray = Ray::new(Vec3f::new(0.0, 1.0, 0.0), Vec3f::x_axis());
        assert!(floor().intersect_local(&ray).is_none());
        let in_plane = Ray::new(Vec3f::zero(), Vec3f::x_axis());
        assert!(floor().intersect_local(&in_plane).is_none());
    }

    #[test]
    fn plane_behind_ray_misses() {
        let ray = Ray::new(Vec3f::new(0.0, 5.0, 0.0), Vec3f::y_axis());
        assert!(floor().intersect_local(&ray).is_none());
    }

    #[test]
    fn tangent_basis_is_orthonormal() {
        let p = Plane::new(Vec3f::zero(), Vec3f::new(1.0, 1.0, 0.0), Vec3f::y_axis()).unwrap();
        assert_abs_diff_eq!(p.north().dot(&p.normal()), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.east().dot(&p.normal()), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.north().dot(&p.east()), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.north().magnitude(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.normal().magnitude(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn rejects_degenerate_construction() {
        assert!(Plane::new(Vec3f::zero(), Vec3f::zero(), Vec3f::z_axis()).is_err());
        assert!(Plane::new(Vec3f::zero(), Vec3f::y_axis(), Vec3f::y_axis()).is_err());
    }
}
