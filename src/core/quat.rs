use crate::core::vector::Vec3;

/** Rotation quaternion. */
#[derive(Clone, Copy, Debug)]
pub struct Quat {
    pub real: f64,
    pub imaginary: Vec3<f64>,
}

impl Quat {
    /**
     * The quaternion rotating by angle radians about axis (right-handed).
     * The axis is normalized here; a zero axis yields NaN components.
     */
    pub fn from_axis_angle(axis: &Vec3<f64>, angle: f64) -> Quat {
        let half = 0.5 * angle;
        Quat {real: half.cos(), imaginary: axis.normalized() * half.sin()}
    }

    pub fn conjugate(&self) -> Quat {
        Quat {real: self.real, imaginary: -self.imaginary}
    }

    /** Rotates v by this quaternion, which must be unit length. */
    pub fn rotate(&self, v: &Vec3<f64>) -> Vec3<f64> {
        let t = self.imaginary.cross(v) * 2.0;
        *v + t * self.real + self.imaginary.cross(&t)
    }
}
