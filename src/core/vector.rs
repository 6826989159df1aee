use crate::core::math;

use num::traits::Float;
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, Sub, Mul, Div, Neg, Index};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec3<T> where T: Float {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vec3<T> where T: Float {
    pub fn new(x: T, y: T, z: T) -> Vec3<T> {
        Vec3 {x, y, z}
    }

    pub fn zero() -> Vec3<T> {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    pub fn x_axis() -> Vec3<T> {
        Self::new(T::one(), T::zero(), T::zero())
    }

    pub fn y_axis() -> Vec3<T> {
        Self::new(T::zero(), T::one(), T::zero())
    }

    pub fn z_axis() -> Vec3<T> {
        Self::new(T::zero(), T::zero(), T::one())
    }

    pub fn comp_mult(&self, other: &Vec3<T>) -> Vec3<T> {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    pub fn comp_div(&self, other: &Vec3<T>) -> Vec3<T> {
        Self::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }

    pub fn cross(&self, other: &Vec3<T>) -> Vec3<T> {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x)
    }

    pub fn dot(&self, other: &Vec3<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn magnitude_squared(&self) -> T {
        self.dot(self)
    }

    pub fn magnitude(&self) -> T {
        T::sqrt(self.dot(self))
    }

    /**
     * Returns the unit vector in the same direction. The zero vector has no direction, so
     * normalizing it yields NaN components; callers that can see a zero vector should check
     * is_nearly_zero() first.
     */
    pub fn normalized(&self) -> Vec3<T> {
        let length = self.magnitude();
        Self::new(self.x / length, self.y / length, self.z / length)
    }
}

impl<T> Display for Vec3<T> where T: Float + Display {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl<T> Index<usize> for Vec3<T> where T: Float {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of range: {}", i),
        }
    }
}

impl<T> Add for Vec3<T> where T: Float {
    type Output = Vec3<T>;
    fn add(self, rhs: Vec3<T>) -> Vec3<T> {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T> Sub for Vec3<T> where T: Float {
    type Output = Vec3<T>;
    fn sub(self, rhs: Vec3<T>) -> Vec3<T> {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T> Mul<T> for Vec3<T> where T: Float {
    type Output = Vec3<T>;
    fn mul(self, rhs: T) -> Vec3<T> {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3<f64>> for f64 {
    type Output = Vec3<f64>;
    fn mul(self, rhs: Vec3<f64>) -> Vec3<f64> { rhs * self }
}

impl<T> Div<T> for Vec3<T> where T: Float {
    type Output = Vec3<T>;
    fn div(self, rhs: T) -> Vec3<T> {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl<T> Neg for Vec3<T> where T: Float {
    type Output = Vec3<T>;
    fn neg(self) -> Vec3<T> {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Vec3<f64> {
    /**
     * Determines whether a vec's magnitude is zero, within a small epsilon.
     */
    pub fn is_nearly_zero(&self) -> bool {
        math::is_nearly_zero(self.dot(self))
    }

    /**
     * Same as GLSL reflect.
     * See <https://www.opengl.org/sdk/docs/man4/html/reflect.xhtml>.
     *
     * @param n the normal at the surface over which to reflect
     * @returns the outgoing reflection vector
     */
    pub fn reflect(&self, n: &Vec3<f64>) -> Vec3<f64> {
        *self - (*n * (2.0 * n.dot(self)))
    }

    /**
     * Same as GLSL refract, except that total internal reflection yields None instead of the
     * zero vector.
     * See <https://www.opengl.org/sdk/docs/man4/html/refract.xhtml>.
     *
     * @param n   the normal at the surface to refract across;
     *            the normal points from the transmitting medium towards the
     *            incident medium
     * @param eta the ratio of the incoming IOR over the transmitting IOR
     * @returns   the outgoing refraction vector
     */
    pub fn refract(&self, n: &Vec3<f64>, eta: f64) -> Option<Vec3<f64>> {
        let d = n.dot(self);
        let k = 1.0 - eta * eta * (1.0 - d * d);
        if k < 0.0 {
            None
        }
        else {
            Some((*self * eta) - *n * (eta * d + k.sqrt()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    type V = Vec3<f64>;

    #[test]
    fn arithmetic_is_componentwise() {
        let a = V::new(1.0, 2.0, 3.0);
        let b = V::new(-1.0, 0.5, 2.0);
        assert_eq!(a + b, V::new(0.0, 2.5, 5.0));
        assert_eq!(a - b, V::new(2.0, 1.5, 1.0));
        assert_eq!(a * 2.0, V::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(-a, V::new(-1.0, -2.0, -3.0));
        assert_eq!(a.comp_mult(&b), V::new(-1.0, 1.0, 6.0));
    }

    #[test]
    fn cross_follows_right_hand_rule() {
        assert_eq!(V::x_axis().cross(&V::y_axis()), V::z_axis());
        assert_eq!(V::y_axis().cross(&V::z_axis()), V::x_axis());
    }

    #[test]
    fn reflect_flips_normal_component() {
        let d = V::new(1.0, -1.0, 0.0).normalized();
        let r = d.reflect(&V::y_axis());
        assert_abs_diff_eq!(r.x, d.x, epsilon = 1e-12);
        assert_abs_diff_eq!(r.y, -d.y, epsilon = 1e-12);
    }

    #[test]
    fn refract_reports_total_internal_reflection() {
        // Leaving glass at a grazing angle.
        let d = V::new(0.9, -0.1, 0.0).normalized();
        assert!(d.refract(&V::y_axis(), 1.5).is_none());

        // Straight through at normal incidence.
        let straight = V::new(0.0, -1.0, 0.0).refract(&V::y_axis(), 1.0 / 1.5).unwrap();
        assert_abs_diff_eq!(straight.y, -1.0, epsilon = 1e-12);
    }
}
