use crate::core::{check_positive, Colour, Error, Result};

use std::sync::Arc;

/**
 * A decoded image supplied by the caller: row-major pixels from the top-left corner, each packed
 * as 0xRRGGBB.
 */
#[derive(Clone, Debug)]
pub struct ImageBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl ImageBuffer {
    pub fn new(width: usize, height: usize, pixels: Vec<u32>) -> Result<ImageBuffer> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidImage(format!("empty {}x{} image", width, height)));
        }
        if pixels.len() != width * height {
            return Err(Error::InvalidImage(format!(
                "{} pixels supplied for a {}x{} image", pixels.len(), width, height)));
        }
        Ok(ImageBuffer {width, height, pixels})
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rgb24(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }
}

/**
 * An image tiled across (u, v) space. One copy of the image covers scale_u by scale_v surface
 * units and is centred on the origin.
 */
#[derive(Clone, Debug)]
pub struct ImagePigment {
    image: Arc<ImageBuffer>,
    scale_u: f64,
    scale_v: f64,
}

impl ImagePigment {
    pub fn new(image: Arc<ImageBuffer>, scale_u: f64, scale_v: f64) -> Result<ImagePigment> {
        Ok(ImagePigment {
            image,
            scale_u: check_positive("image pigment u scale", scale_u)?,
            scale_v: check_positive("image pigment v scale", scale_v)?,
        })
    }

    /** Sizes the image so that its longer side spans scale units, keeping its aspect ratio. */
    pub fn with_scale(image: Arc<ImageBuffer>, scale: f64) -> Result<ImagePigment> {
        let scale = check_positive("image pigment scale", scale)?;
        let max_dim = image.width.max(image.height) as f64;
        let scale_u = image.width as f64 / max_dim * scale;
        let scale_v = image.height as f64 / max_dim * scale;
        ImagePigment::new(image, scale_u, scale_v)
    }

    fn colour_at(&self, u: f64, v: f64) -> Colour {
        let w = self.image.width as f64;
        let h = self.image.height as f64;
        let x = wrap((w * u / self.scale_u + 0.5 * w).floor(), self.image.width);
        let y = wrap((h * v / self.scale_v + 0.5 * h).floor(), self.image.height);
        Colour::from_rgb24(self.image.rgb24(x, y))
    }
}

/// Wraps a (possibly negative) pixel coordinate into [0, n).
fn wrap(i: f64, n: usize) -> usize {
    if !i.is_finite() {
        return 0;
    }
    let i = i.rem_euclid(n as f64) as usize;
    // rem_euclid can round up to n for tiny negative inputs.
    i.min(n - 1)
}

/** Base colour of a surface as a function of its (u, v) coordinates. */
#[derive(Clone, Debug)]
pub enum Pigment {
    Solid(Colour),
    /// Squares of alternating colours; the pattern repeats every period units in u and v.
    Checkered { a: Colour, b: Colour, period: f64 },
    Image(ImagePigment),
}

impl Pigment {
    pub fn solid(colour: Colour) -> Pigment {
        Pigment::Solid(colour)
    }

    pub fn checkered(a: Colour, b: Colour, period: f64) -> Result<Pigment> {
        Ok(Pigment::Checkered {a, b, period: check_positive("checker period", period)?})
    }

    pub fn colour_at(&self, u: f64, v: f64) -> Colour {
        match self {
            Pigment::Solid(c) => *c,
            Pigment::Checkered {a, b, period} => {
                let su = checker_phase(u, *period);
                let sv = checker_phase(v, *period);
                if (su < 0.5 && sv < 0.5) || (su > 0.5 && sv > 0.5) {
                    *a
                }
                else {
                    *b
                }
            }
            Pigment::Image(image) => image.colour_at(u, v),
        }
    }
}

/// Position within one period, mirrored for negative coordinates so the tiling has no seam at 0.
fn checker_phase(x: f64, period: f64) -> f64 {
    let phase = (x / period).abs() % 1.0;
    if x < 0.0 {
        1.0 - phase
    }
    else {
        phase
    }
}
