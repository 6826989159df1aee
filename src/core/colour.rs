use crate::core::math;

use std::fmt;
use std::fmt::Display;
use std::ops::{Add, Sub, Mul};

/**
 * An RGB colour. Channels are unclamped while shading (lights brighter than 1.0 and
 * accumulated highlights are legal) and only clamped to [0, 1] on 8-bit export.
 */
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Colour {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Colour {
    pub const BLACK: Colour = Colour {r: 0.0, g: 0.0, b: 0.0};
    pub const WHITE: Colour = Colour {r: 1.0, g: 1.0, b: 1.0};

    pub fn new(r: f64, g: f64, b: f64) -> Colour {
        Colour {r, g, b}
    }

    /** Unpacks a 0xRRGGBB integer. Bits above the low 24 are ignored. */
    pub fn from_rgb24(c: u32) -> Colour {
        Colour {
            r: ((c >> 16) & 0xff) as f64 / 255.0,
            g: ((c >> 8) & 0xff) as f64 / 255.0,
            b: (c & 0xff) as f64 / 255.0,
        }
    }

    pub fn scale(&self, k: f64) -> Colour {
        Colour::new(self.r * k, self.g * k, self.b * k)
    }

    /** Component-wise multiplication, i.e. light passing through a coloured filter. */
    pub fn filter(&self, other: &Colour) -> Colour {
        Colour::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }

    /** Linear blend; t = 0 yields self and t = 1 yields other. */
    pub fn mix(&self, other: &Colour, t: f64) -> Colour {
        Colour::new(
            math::lerp(self.r, other.r, t),
            math::lerp(self.g, other.g, t),
            math::lerp(self.b, other.b, t))
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /** Clamps each channel to [0, 1] and quantizes to 8 bits. */
    pub fn to_rgb8(&self) -> [u8; 3] {
        [to_channel8(self.r), to_channel8(self.g), to_channel8(self.b)]
    }

    /** Packs the clamped 8-bit channels into 0xRRGGBB. */
    pub fn to_rgb24(&self) -> u32 {
        let [r, g, b] = self.to_rgb8();
        ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
    }
}

fn to_channel8(x: f64) -> u8 {
    // NaN clamps to black.
    if x.is_nan() {
        0
    }
    else {
        (math::clamp_unit(x) * 255.0).round() as u8
    }
}

impl Add for Colour {
    type Output = Colour;
    fn add(self, rhs: Colour) -> Colour {
        Colour::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Sub for Colour {
    type Output = Colour;
    fn sub(self, rhs: Colour) -> Colour {
        Colour::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Mul<f64> for Colour {
    type Output = Colour;
    fn mul(self, rhs: f64) -> Colour {
        self.scale(rhs)
    }
}

impl Default for Colour {
    fn default() -> Colour {
        Colour::BLACK
    }
}

impl Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}
