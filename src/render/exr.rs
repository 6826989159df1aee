use crate::core::{index, Result};
use crate::render::Film;

use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::path::Path;
use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};

const MAGIC_NUMBER: i32 = 20000630;
const VERSION: i32 = 2;
const PIXEL_TYPE_FLOAT: i32 = 2;
const COMPRESSION_NONE: u8 = 0;
const LINE_ORDER_INCREASING_Y: u8 = 0;

/**
 * Encodes a Film as an uncompressed scanline OpenEXR image with 32-bit float RGB channels.
 * Values are written unclamped, so highlights brighter than white survive.
 */
pub struct ExrWriter {
    buffer: Vec<u8>,
    width: usize,
    height: usize,
    data_offset: usize,
}

impl ExrWriter {
    pub fn new() -> ExrWriter {
        ExrWriter {
            buffer: vec![],
            width: 0,
            height: 0,
            data_offset: 0,
        }
    }

    fn write_header(&mut self) -> io::Result<()> {
        self.buffer.write_i32::<LittleEndian>(MAGIC_NUMBER)?;
        self.buffer.write_i32::<LittleEndian>(VERSION)
    }

    fn write_str(&mut self, s: &str) {
        self.buffer.extend_from_slice(s.as_bytes());
        self.buffer.push(0);
    }

    fn write_channels_attr(&mut self) -> io::Result<()> {
        self.write_str("channels");
        self.write_str("chlist");

        let size: i32 =
                2 * 3 +  // Three channels named B, G, R, plus a null-terminator for each.
                16 * 3 + // Four ints (16 bytes) of data per channel.
                1;       // One extra null byte.
        self.buffer.write_i32::<LittleEndian>(size)?;

        for channel in ["B", "G", "R"].iter() {
            self.write_str(channel);
            self.buffer.write_i32::<LittleEndian>(PIXEL_TYPE_FLOAT)?;
            self.buffer.write_i32::<LittleEndian>(0)?; // pLinear and reserved
            self.buffer.write_i32::<LittleEndian>(1)?; // xSampling
            self.buffer.write_i32::<LittleEndian>(1)?; // ySampling
        }
        self.buffer.push(0); // Null terminator.
        Ok(())
    }

    fn write_compression_attr(&mut self) -> io::Result<()> {
        self.write_str("compression");
        self.write_str("compression");
        self.buffer.write_i32::<LittleEndian>(1)?; // Size = 1 byte.
        self.buffer.push(COMPRESSION_NONE);
        Ok(())
    }

    fn write_window_attrs(&mut self, width: usize, height: usize) -> io::Result<()> {
        let size = 4 * 4; // 4 ints = 16 bytes.
        let window = [0, 0, width as i32 - 1, height as i32 - 1];

        for name in ["dataWindow", "displayWindow"].iter() {
            self.write_str(name);
            self.write_str("box2i");
            self.buffer.write_i32::<LittleEndian>(size)?;
            for i in window.iter() {
                self.buffer.write_i32::<LittleEndian>(*i)?;
            }
        }
        Ok(())
    }

    fn write_line_order_attr(&mut self) -> io::Result<()> {
        self.write_str("lineOrder");
        self.write_str("lineOrder");
        self.buffer.write_i32::<LittleEndian>(1)?; // Size = 1 byte.
        self.buffer.push(LINE_ORDER_INCREASING_Y);
        Ok(())
    }

    fn write_pixel_aspect_ratio_attr(&mut self) -> io::Result<()> {
        self.write_str("pixelAspectRatio");
        self.write_str("float");
        self.buffer.write_i32::<LittleEndian>(4)?; // 1 float = 4 bytes.
        self.buffer.write_f32::<LittleEndian>(1.0)
    }

    fn write_screen_window_attrs(&mut self, width: usize) -> io::Result<()> {
        self.write_str("screenWindowCenter");
        self.write_str("v2f");
        self.buffer.write_i32::<LittleEndian>(8)?; // 2 floats = 8 bytes.
        self.buffer.write_f32::<LittleEndian>(0.0)?;
        self.buffer.write_f32::<LittleEndian>(0.0)?;

        self.write_str("screenWindowWidth");
        self.write_str("float");
        self.buffer.write_i32::<LittleEndian>(4)?; // 1 float = 4 bytes.
        self.buffer.write_f32::<LittleEndian>(width as f32)
    }

    fn write_line_offset_table(&mut self, film: &Film) -> io::Result<()> {
        let table_size = 8 * film.height(); // 1 ulong (8 bytes) per line.
        let data_offset = self.buffer.len() + table_size;
        let line_size = line_size(film);

        for y in 0..film.height() {
            let line_offset = data_offset + y * line_size;
            self.buffer.write_u64::<LittleEndian>(line_offset as u64)?;
        }

        debug_assert!(self.buffer.len() == data_offset);
        Ok(())
    }

    fn write_channels(&mut self, film: &Film) {
        let line_size = line_size(film);
        let data_size = film.height() * line_size;
        let width = film.width();

        self.buffer.resize(self.data_offset + data_size, 0);
        let data = &mut self.buffer[self.data_offset..(self.data_offset + data_size)];

        for (y, line) in data.chunks_mut(line_size).enumerate() {
            LittleEndian::write_i32(&mut line[0..4], y as i32); // Scan line number.
            LittleEndian::write_u32(&mut line[4..8], line_size as u32 - 8); // Bytes in line.

            // Channels are stored in alphabetical order, each as a contiguous run.
            let first_pixel = index(y, 0, width);
            for i in 0..width {
                let pixel = film.pixels()[first_pixel + i];
                let b = 8 + i * 4;
                let g = 8 + (width + i) * 4;
                let r = 8 + (2 * width + i) * 4;
                LittleEndian::write_f32(&mut line[b..(b + 4)], pixel.b as f32);
                LittleEndian::write_f32(&mut line[g..(g + 4)], pixel.g as f32);
                LittleEndian::write_f32(&mut line[r..(r + 4)], pixel.r as f32);
            }
        }
    }

    /**
     * Encodes the film into the internal buffer. The header is only rebuilt when the film
     * dimensions change, so repeated updates of one film just overwrite the pixel data.
     */
    pub fn update(&mut self, film: &Film) -> Result<()> {
        if self.width != film.width() || self.height != film.height() {
            self.buffer.clear();
            self.width = film.width();
            self.height = film.height();

            // Begin header.
            self.write_header()?;
            self.write_channels_attr()?;
            self.write_compression_attr()?;
            self.write_window_attrs(film.width(), film.height())?;
            self.write_line_order_attr()?;
            self.write_pixel_aspect_ratio_attr()?;
            self.write_screen_window_attrs(film.width())?;
            self.buffer.push(0); // End header.

            self.write_line_offset_table(film)?;
            self.data_offset = self.buffer.len();
        }

        self.write_channels(film);
        Ok(())
    }

    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(&self.buffer)?;
        Ok(())
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path.as_ref())?;
        self.write_to(&mut file)?;
        log::debug!("wrote {} bytes of EXR to {}", self.buffer.len(), path.as_ref().display());
        Ok(())
    }
}

impl Default for ExrWriter {
    fn default() -> ExrWriter {
        ExrWriter::new()
    }
}

/// Scan line number (int); bytes in line (uint); RGB (3 floats * 4 bytes) per pixel.
fn line_size(film: &Film) -> usize {
    4 + 4 + film.width() * 4 * 3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Colour;

    fn header_size(w: &ExrWriter) -> usize {
        w.data_offset - 8 * w.height
    }

    #[test]
    fn starts_with_magic_and_version() {
        let film = Film::new(4, 3).unwrap();
        let mut w = ExrWriter::new();
        w.update(&film).unwrap();
        assert_eq!(LittleEndian::read_i32(&w.bytes()[0..4]), MAGIC_NUMBER);
        assert_eq!(LittleEndian::read_i32(&w.bytes()[4..8]), VERSION);
    }

    #[test]
    fn size_matches_header_table_and_scanlines() {
        let film = Film::new(4, 3).unwrap();
        let mut w = ExrWriter::new();
        w.update(&film).unwrap();
        let expected = header_size(&w) + 8 * 3 + 3 * (8 + 4 * 12);
        assert_eq!(w.bytes().len(), expected);
    }

    #[test]
    fn pixels_are_stored_unclamped_per_channel() {
        let mut film = Film::new(2, 2).unwrap();
        film.set(1, 1, Colour::new(2.5, 0.25, -1.0));
        let mut w = ExrWriter::new();
        w.update(&film).unwrap();

        let line = w.data_offset + line_size(&film);
        let data = &w.bytes()[line..];
        assert_eq!(LittleEndian::read_i32(&data[0..4]), 1);
        // B run, G run, R run, second pixel in each.
        assert_eq!(LittleEndian::read_f32(&data[12..16]), -1.0);
        assert_eq!(LittleEndian::read_f32(&data[20..24]), 0.25);
        assert_eq!(LittleEndian::read_f32(&data[28..32]), 2.5);
    }

    #[test]
    fn offset_table_points_at_scanlines() {
        let film = Film::new(3, 2).unwrap();
        let mut w = ExrWriter::new();
        w.update(&film).unwrap();
        let table = w.data_offset - 16;
        let first = LittleEndian::read_u64(&w.bytes()[table..table + 8]) as usize;
        let second = LittleEndian::read_u64(&w.bytes()[table + 8..table + 16]) as usize;
        assert_eq!(first, w.data_offset);
        assert_eq!(second - first, line_size(&film));
    }

    #[test]
    fn updating_same_size_film_reuses_header() {
        let mut film = Film::new(2, 1).unwrap();
        let mut w = ExrWriter::new();
        w.update(&film).unwrap();
        let len = w.bytes().len();
        film.set(0, 0, Colour::WHITE);
        w.update(&film).unwrap();
        assert_eq!(w.bytes().len(), len);

        let mut out = vec![];
        w.write_to(&mut out).unwrap();
        assert_eq!(out.as_slice(), w.bytes());
    }
}
