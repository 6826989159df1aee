use crate::core::{check_positive, Colour, Ray, Result};
use crate::material::ShadingContext;

/**
 * One shading term. Each finish takes the pigment colour and the colour accumulated by the
 * finishes before it, and returns the new accumulated colour.
 */
#[derive(Clone, Debug, PartialEq)]
pub enum Finish {
    /// Constant fill light proportional to the pigment.
    Ambient(f64),
    /// Lambertian reflection of every visible light, filtered by the pigment.
    Diffuse(f64),
    /// Phong highlights in the light's own colour.
    Specular { strength: f64, tightness: f64 },
    /// Perfect reflection of the rest of the scene.
    Mirror(f64),
    /// Refraction through the surface with the given index of refraction relative to the
    /// surrounding space.
    Transparent { ior: f64 },
}

impl Finish {
    pub fn specular(strength: f64, tightness: f64) -> Finish {
        Finish::Specular {strength, tightness}
    }

    pub fn transparent(ior: f64) -> Result<Finish> {
        Ok(Finish::Transparent {ior: check_positive("index of refraction", ior)?})
    }

    pub fn layer(&self, ctx: &ShadingContext, pigment: Colour, colour: Colour) -> Colour {
        match *self {
            Finish::Ambient(k) => colour + pigment * k,
            Finish::Diffuse(k) => colour + pigment.filter(&diffuse_light(ctx)) * k,
            Finish::Specular {strength, tightness} => {
                colour + specular_light(ctx, tightness) * strength
            }
            Finish::Mirror(k) => colour + ctx.trace(&ctx.hit().reflected_ray()) * k,
            Finish::Transparent {ior} => {
                colour + ctx.trace(&refracted_ray(ctx, ior)).filter(&pigment)
            }
        }
    }
}

fn diffuse_light(ctx: &ShadingContext) -> Colour {
    let hit = ctx.hit();
    let mut total = Colour::BLACK;

    for light in ctx.visible_lights() {
        let to_light = light.location() - hit.point;
        let dist_sq = to_light.magnitude_squared();
        if dist_sq == 0.0 {
            continue;
        }
        let cos_theta = to_light.normalized().dot(&hit.normal);
        if cos_theta > 0.0 {
            total = total + light.colour() * (light.intensity(dist_sq) * cos_theta);
        }
    }

    total
}

fn specular_light(ctx: &ShadingContext, tightness: f64) -> Colour {
    let hit = ctx.hit();
    let reflected = hit.reflected_direction();
    let mut total = Colour::BLACK;

    for light in ctx.visible_lights() {
        let to_light = light.location() - hit.point;
        let dist_sq = to_light.magnitude_squared();
        if dist_sq == 0.0 {
            continue;
        }
        let cos_phi = to_light.normalized().dot(&reflected);
        if cos_phi > 0.0 {
            total = total + light.colour() * (light.intensity(dist_sq) * cos_phi.powf(tightness));
        }
    }

    total
}

/**
 * Snell's law refraction through the surface. The ratio of indices flips when the ray leaves the
 * object. Past the critical angle the incident direction carries on unchanged.
 */
fn refracted_ray(ctx: &ShadingContext, ior: f64) -> Ray {
    let hit = ctx.hit();
    let incident = hit.incident.direction.normalized();

    let (normal, eta) = if hit.internal {
        (-hit.normal, ior)
    }
    else {
        (hit.normal, 1.0 / ior)
    };

    let direction = incident.refract(&normal, eta).unwrap_or(incident);
    Ray::new(hit.transmission_origin(), direction)
}
