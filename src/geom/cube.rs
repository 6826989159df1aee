use crate::core::{check_positive, Ray, Result, Vec3f};
use crate::geom::prim::{Edge, Prim, SurfaceHit};

/** An axis-aligned cube, intersected as the closest of its six bounded face planes. */
#[derive(Clone, Debug)]
pub struct Cube {
    centre: Vec3f,
    side: f64,
}

/// Axis index and outward sign of each face.
const FACES: [(usize, f64); 6] = [
    (0, 1.0), (0, -1.0),
    (1, 1.0), (1, -1.0),
    (2, 1.0), (2, -1.0),
];

fn axis(i: usize) -> Vec3f {
    match i {
        0 => Vec3f::x_axis(),
        1 => Vec3f::y_axis(),
        _ => Vec3f::z_axis(),
    }
}

impl Cube {
    pub fn new(centre: Vec3f, side: f64) -> Result<Cube> {
        Ok(Cube {centre, side: check_positive("cube side", side)?})
    }

    pub fn centre(&self) -> Vec3f {
        self.centre
    }

    pub fn side(&self) -> f64 {
        self.side
    }

    fn vertex(&self, sx: f64, sy: f64, sz: f64) -> Vec3f {
        self.centre + Vec3f::new(sx, sy, sz) * (0.5 * self.side)
    }
}

impl Prim for Cube {
    fn intersect_local(&self, ray: &Ray) -> Option<SurfaceHit> {
        let half = 0.5 * self.side;
        let mut closest: Option<SurfaceHit> = None;

        for &(i, sign) in FACES.iter() {
            let normal = axis(i) * sign;
            let face_centre = self.centre + normal * half;

            let t = normal.dot(&(face_centre - ray.origin)) / normal.dot(&ray.direction);
            if !(t > 0.0 && t.is_finite()) {
                continue;
            }
            if closest.as_ref().map_or(false, |c| c.t <= t) {
                continue;
            }

            let point = ray.at(t);
            let delta = point - face_centre;
            let (ui, vi) = ((i + 1) % 3, (i + 2) % 3);
            if delta[ui].abs() > half || delta[vi].abs() > half {
                continue;
            }

            closest = Some(SurfaceHit {t, point, normal, u: delta[ui], v: delta[vi]});
        }

        closest
    }

    fn wireframe_local(&self) -> Vec<Edge> {
        let top = [
            self.vertex(1.0, 1.0, 1.0),
            self.vertex(-1.0, 1.0, 1.0),
            self.vertex(-1.0, -1.0, 1.0),
            self.vertex(1.0, -1.0, 1.0),
        ];
        let bottom = [
            self.vertex(1.0, 1.0, -1.0),
            self.vertex(-1.0, 1.0, -1.0),
            self.vertex(-1.0, -1.0, -1.0),
            self.vertex(1.0, -1.0, -1.0),
        ];

        let mut edges = Vec::with_capacity(12);
        for k in 0..4 {
            edges.push([top[k], top[(k + 1) % 4]]);
            edges.push([bottom[k], bottom[(k + 1) % 4]]);
            edges.push([top[k], bottom[k]]);
        }
        edges
    }
}
