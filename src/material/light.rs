use crate::core::{check_positive, Colour, Result, Vec3f};

/// How a light's intensity varies with distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Falloff {
    InverseSquare,
    Constant,
}

/** A point light source. */
#[derive(Clone, Debug)]
pub struct LightSource {
    location: Vec3f,
    colour: Colour,
    intensity_scale: f64,
    falloff: Falloff,
}

impl LightSource {
    /**
     * A white light with inverse-square falloff. The intensity scale is squared, so a scale of 4
     * gives an intensity of 1 at a distance of 4.
     */
    pub fn new(location: Vec3f, intensity_scale: f64) -> Result<LightSource> {
        Ok(LightSource {
            location,
            colour: Colour::WHITE,
            intensity_scale: check_positive("light intensity scale", intensity_scale)?,
            falloff: Falloff::InverseSquare,
        })
    }

    pub fn with_colour(mut self, colour: Colour) -> LightSource {
        self.colour = colour;
        self
    }

    pub fn with_falloff(mut self, falloff: Falloff) -> LightSource {
        self.falloff = falloff;
        self
    }

    pub fn location(&self) -> Vec3f {
        self.location
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    pub fn falloff(&self) -> Falloff {
        self.falloff
    }

    /** Intensity arriving at a point dist_sq (squared distance) away from the light. */
    pub fn intensity(&self, dist_sq: f64) -> f64 {
        let scale_sq = self.intensity_scale * self.intensity_scale;
        match self.falloff {
            Falloff::InverseSquare => scale_sq / dist_sq,
            Falloff::Constant => scale_sq,
        }
    }
}
