/**
 * The distance that secondary ray origins are pushed off a surface along its normal so that
 * they do not immediately strike the surface they just left.
 */
pub const EPSILON: f64 = 1.0e-5;

pub fn clamp<T>(x: T, a: T, b: T) -> T where T: PartialOrd {
    if x < a {
        a
    }
    else if x > b {
        b
    }
    else {
        x
    }
}

pub fn clamp_unit(x: f64) -> f64 {
    clamp(x, 0.0, 1.0)
}

/**
 * Linearly interpolates between x and y. Where a = 0, x is returned, and
 * where a = 1, y is returned. If a < 0 or a > 1, this function will
 * extrapolate.
 */
pub fn lerp(x: f64, y: f64, a: f64) -> f64 {
    x + a * (y - x)
}

/**
 * Determines whether a number is zero, within a small epsilon.
 */
pub fn is_nearly_zero(x: f64) -> bool {
    f64::abs(x) < f64::EPSILON
}

pub fn row_col(index: usize, width: usize) -> (usize, usize) {
    (index / width, index % width)
}

pub fn index(row: usize, col: usize, width: usize) -> usize {
    row * width + col
}
