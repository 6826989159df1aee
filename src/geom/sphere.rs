use crate::core::{check_positive, Ray, Result, Vec3f};
use crate::geom::prim::{Edge, Prim, SurfaceHit};

use std::f64::consts::PI;

const LONGITUDE_LINES: usize = 50;
const LONGITUDE_STEPS: usize = 20;

#[derive(Clone, Debug)]
pub struct Sphere {
    centre: Vec3f,
    radius: f64,
}

impl Sphere {
    pub fn new(centre: Vec3f, radius: f64) -> Result<Sphere> {
        Ok(Sphere {centre, radius: check_positive("sphere radius", radius)?})
    }

    pub fn centre(&self) -> Vec3f {
        self.centre
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /**
     * Longitude about the Y axis and latitude above the XZ plane, both as arc lengths so that
     * pigments tile at the same scale as on a plane.
     */
    fn surface_coords(&self, unit: &Vec3f) -> (f64, f64) {
        let mut longitude = unit.z.atan2(unit.x);
        if longitude < 0.0 {
            longitude += 2.0 * PI;
        }
        let latitude = unit.y.max(-1.0).min(1.0).asin();
        (self.radius * longitude, self.radius * latitude)
    }

    fn point_at(&self, theta: f64, phi: f64) -> Vec3f {
        self.centre + Vec3f::new(
            phi.sin() * theta.cos(),
            phi.cos(),
            phi.sin() * theta.sin()) * self.radius
    }
}

impl Prim for Sphere {
    fn intersect_local(&self, ray: &Ray) -> Option<SurfaceHit> {
        let displacement = ray.origin - self.centre;
        let l = &ray.direction;

        // |O + tD - C|^2 = r^2, see
        // <http://en.wikipedia.org/wiki/Line%E2%80%93sphere_intersection>
        let a = l.dot(l);
        let b = 2.0 * l.dot(&displacement);
        let c = displacement.dot(&displacement) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_discriminant = discriminant.sqrt();
        let t_near = (-b - sqrt_discriminant) / (2.0 * a);
        let t_far = (-b + sqrt_discriminant) / (2.0 * a);

        // Near before far because we want the closest isect in front of us.
        let t = if t_near > 0.0 {
            t_near
        }
        else if t_far > 0.0 {
            t_far
        }
        else {
            return None;
        };

        let point = ray.at(t);
        let normal = (point - self.centre).normalized();
        let (u, v) = self.surface_coords(&normal);
        Some(SurfaceHit {t, point, normal, u, v})
    }

    fn wireframe_local(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(LONGITUDE_LINES * LONGITUDE_STEPS);
        for i in 0..LONGITUDE_LINES {
            let theta = 2.0 * PI * i as f64 / LONGITUDE_LINES as f64;
            for j in 0..LONGITUDE_STEPS {
                let phi = PI * j as f64 / LONGITUDE_STEPS as f64;
                let phi_next = PI * (j + 1) as f64 / LONGITUDE_STEPS as f64;
                edges.push([self.point_at(theta, phi), self.point_at(theta, phi_next)]);
            }
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sphere() -> Sphere {
        Sphere::new(Vec3f::zero(), 0.4).unwrap()
    }

    #[test]
    fn head_on_hit() {
        let ray = Ray::new(Vec3f::new(0.0, 0.0, 5.0), Vec3f::new(0.0, 0.0, -1.0));
        let hit = sphere().intersect_local(&ray).unwrap();
        assert_abs_diff_eq!(hit.t, 4.6, epsilon = 1e-12);
        assert_abs_diff_eq!(hit.normal.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hit.normal.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hit.normal.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn miss_when_discriminant_negative() {
        let ray = Ray::new(Vec3f::new(0.0, 1.0, 5.0), Vec3f::new(0.0, 0.0, -1.0));
        assert!(sphere().intersect_local(&ray).is_none());
    }

    #[test]
    fn miss_when_sphere_is_behind() {
        let ray = Ray::new(Vec3f::new(0.0, 0.0, 5.0), Vec3f::new(0.0, 0.0, 1.0));
        assert!(sphere().intersect_local(&ray).is_none());
    }

    #[test]
    fn from_inside_returns_far_root() {
        let ray = Ray::new(Vec3f::zero(), Vec3f::new(1.0, 0.0, 0.0));
        let hit = sphere().intersect_local(&ray).unwrap();
        assert_abs_diff_eq!(hit.t, 0.4, epsilon = 1e-12);
        // Outward normal, same way the ray is going.
        assert!(hit.normal.dot(&ray.direction) > 0.0);
    }

    #[test]
    fn unnormalized_direction_scales_distance() {
        let ray = Ray::new(Vec3f::new(0.0, 0.0, 5.0), Vec3f::new(0.0, 0.0, -2.0));
        let hit = sphere().intersect_local(&ray).unwrap();
        assert_abs_diff_eq!(hit.t, 2.3, epsilon = 1e-12);
    }

    #[test]
    fn surface_coords_are_arc_lengths() {
        let s = Sphere::new(Vec3f::zero(), 2.0).unwrap();
        let ray = Ray::new(Vec3f::new(0.0, 0.0, 5.0), Vec3f::new(0.0, 0.0, -1.0));
        let hit = s.intersect_local(&ray).unwrap();
        assert_abs_diff_eq!(hit.u, 2.0 * 0.5 * PI, epsilon = 1e-12);
        assert_abs_diff_eq!(hit.v, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn rejects_non_positive_radius() {
        assert!(Sphere::new(Vec3f::zero(), 0.0).is_err());
        assert!(Sphere::new(Vec3f::zero(), -1.0).is_err());
    }

    #[test]
    fn wireframe_points_lie_on_surface() {
        let s = Sphere::new(Vec3f::new(1.0, 2.0, 3.0), 0.5).unwrap();
        let edges = s.wireframe_local();
        assert_eq!(edges.len(), LONGITUDE_LINES * LONGITUDE_STEPS);
        for edge in &edges {
            for p in edge {
                assert_abs_diff_eq!((*p - s.centre()).magnitude(), 0.5, epsilon = 1e-12);
            }
        }
    }
}
