use crate::core::{Camera, Colour};
use crate::geom::SceneObject;
use crate::render::Film;

/// Edges projecting further than this many raster sizes off screen are skipped.
const MAX_OFFSCREEN: i64 = 8;

/**
 * Projects the wireframe of every object through the camera and draws it over the film. Edges
 * with an endpoint behind the camera are skipped.
 */
pub fn overlay_wireframe(film: &mut Film, camera: &Camera, objects: &[SceneObject],
    colour: Colour)
{
    let (width, height) = (film.width(), film.height());
    let limit = MAX_OFFSCREEN * width.max(height) as i64;
    let mut drawn = 0usize;

    for object in objects {
        for [a, b] in object.wireframe() {
            let (p0, p1) = match (camera.get_pixel(width, height, &a),
                                  camera.get_pixel(width, height, &b)) {
                (Some(p0), Some(p1)) => (p0, p1),
                _ => continue,
            };
            let far = |(x, y): (i64, i64)| x.abs() > limit || y.abs() > limit;
            if far(p0) || far(p1) {
                continue;
            }
            draw_line(film, p0, p1, colour);
            drawn += 1;
        }
    }

    log::debug!("drew {} wireframe edges", drawn);
}

/// Bresenham's line algorithm, clipped to the film.
fn draw_line(film: &mut Film, (x0, y0): (i64, i64), (x1, y1): (i64, i64), colour: Colour) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        film.set_clipped(x, y, colour);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec3f;
    use crate::geom::{Cube, Sphere};

    fn lit(film: &Film) -> usize {
        film.pixels().iter().filter(|&&c| c == Colour::WHITE).count()
    }

    #[test]
    fn bresenham_covers_both_endpoints() {
        let mut film = Film::new(10, 10).unwrap();
        draw_line(&mut film, (1, 1), (8, 4), Colour::WHITE);
        assert_eq!(film.get(1, 1), Colour::WHITE);
        assert_eq!(film.get(8, 4), Colour::WHITE);
        // One pixel per column along the major axis.
        assert_eq!(lit(&film), 8);
    }

    #[test]
    fn lines_are_clipped_to_the_film() {
        let mut film = Film::new(4, 4).unwrap();
        draw_line(&mut film, (-5, 2), (10, 2), Colour::WHITE);
        assert_eq!(lit(&film), 4);
    }

    #[test]
    fn cube_outline_lands_in_frame() {
        let camera = Camera::new(
            Vec3f::new(0.0, 0.0, 5.0), Vec3f::zero(), Vec3f::y_axis(), 1.0, 1.0).unwrap();
        let cube = SceneObject::new(Cube::new(Vec3f::zero(), 1.0).unwrap());
        let mut film = Film::new(32, 32).unwrap();
        overlay_wireframe(&mut film, &camera, &[cube], Colour::WHITE);
        assert!(lit(&film) > 0);
        // The centre of the face is not on any edge.
        assert_eq!(film.get(16, 16), Colour::BLACK);
    }

    #[test]
    fn edges_behind_camera_are_skipped() {
        let camera = Camera::new(
            Vec3f::new(0.0, 0.0, 5.0), Vec3f::zero(), Vec3f::y_axis(), 1.0, 1.0).unwrap();
        let behind = SceneObject::new(Sphere::new(Vec3f::new(0.0, 0.0, 10.0), 1.0).unwrap());
        let mut film = Film::new(16, 16).unwrap();
        overlay_wireframe(&mut film, &camera, &[behind], Colour::WHITE);
        assert_eq!(lit(&film), 0);
    }
}
