use crate::core::Colour;
use crate::material::{Finish, Pigment, ShadingContext};

/** A pigment together with the finishes that light it, applied in the order they were added. */
#[derive(Clone, Debug)]
pub struct Texture {
    pigment: Pigment,
    finishes: Vec<Finish>,
}

impl Texture {
    pub fn new(pigment: Pigment) -> Texture {
        Texture {pigment, finishes: vec![]}
    }

    pub fn with_finish(mut self, finish: Finish) -> Texture {
        self.finishes.push(finish);
        self
    }

    pub fn pigment(&self) -> &Pigment {
        &self.pigment
    }

    pub fn finishes(&self) -> &[Finish] {
        &self.finishes
    }

    /** Folds this texture's finishes over the colour accumulated by earlier textures. */
    pub fn layer(&self, ctx: &ShadingContext, colour: Colour) -> Colour {
        let hit = ctx.hit();
        let pigment = self.pigment.colour_at(hit.u, hit.v);
        self.finishes.iter().fold(colour, |acc, finish| finish.layer(ctx, pigment, acc))
    }
}
