use crate::core::{index, row_col, Colour, Error, Result};

/**
 * The rendered raster: one unclamped colour per pixel, stored row-major from the top-left
 * corner.
 */
#[derive(Clone, Debug)]
pub struct Film {
    width: usize,
    height: usize,
    pixels: Vec<Colour>,
}

impl Film {
    pub fn new(width: usize, height: usize) -> Result<Film> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyRaster {width, height});
        }
        Ok(Film {width, height, pixels: vec![Colour::BLACK; width * height]})
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    pub fn get(&self, x: usize, y: usize) -> Colour {
        self.pixels[index(y, x, self.width)]
    }

    pub fn set(&mut self, x: usize, y: usize, colour: Colour) {
        let i = index(y, x, self.width);
        self.pixels[i] = colour;
    }

    /** Like set(), but silently ignores coordinates outside the raster. */
    pub fn set_clipped(&mut self, x: i64, y: i64, colour: Colour) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.set(x as usize, y as usize, colour);
        }
    }

    /** Yields (x, y) for every pixel in raster order. */
    pub fn coords(&self) -> impl Iterator<Item = (usize, usize)> {
        let width = self.width;
        (0..self.width * self.height).map(move |i| {
            let (row, col) = row_col(i, width);
            (col, row)
        })
    }

    /** Clamped 8-bit RGB bytes, three per pixel, ready for an image encoder. */
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for pixel in &self.pixels {
            bytes.extend_from_slice(&pixel.to_rgb8());
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_use_column_then_row() {
        let mut film = Film::new(3, 2).unwrap();
        film.set(2, 1, Colour::WHITE);
        assert_eq!(film.get(2, 1), Colour::WHITE);
        assert_eq!(film.pixels()[5], Colour::WHITE);
        assert_eq!(film.get(1, 1), Colour::BLACK);
    }

    #[test]
    fn coords_cover_raster_in_order() {
        let film = Film::new(2, 2).unwrap();
        let coords: Vec<_> = film.coords().collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn rgb8_export_clamps() {
        let mut film = Film::new(2, 1).unwrap();
        film.set(0, 0, Colour::new(3.0, 0.5, -1.0));
        assert_eq!(film.to_rgb8(), vec![255, 128, 0, 0, 0, 0]);
    }

    #[test]
    fn clipped_writes_outside_are_ignored() {
        let mut film = Film::new(2, 2).unwrap();
        film.set_clipped(-1, 0, Colour::WHITE);
        film.set_clipped(0, 2, Colour::WHITE);
        film.set_clipped(1, 1, Colour::WHITE);
        let lit = film.pixels().iter().filter(|&&c| c == Colour::WHITE).count();
        assert_eq!(lit, 1);
    }

    #[test]
    fn empty_raster_is_rejected() {
        assert!(Film::new(0, 4).is_err());
    }
}
