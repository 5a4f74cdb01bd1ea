/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! In-memory RGB image
//!
//! Pixels are stored row-major in a single vector, row 0 first,
//! left to right within a row.
use crate::errors::ImageErrors;

/// A single RGB pixel
///
/// Channels are kept as signed integers, the decoder does not clamp what
/// it reads and filters only clamp where their formula asks for it.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Color {
    pub red:   i32,
    pub green: i32,
    pub blue:  i32
}

impl Color {
    pub const fn new(red: i32, green: i32, blue: i32) -> Color {
        Color { red, green, blue }
    }
    /// A color whose three channels hold `value`
    pub const fn splat(value: i32) -> Color {
        Color::new(value, value, value)
    }
    pub const fn channels(&self) -> [i32; 3] {
        [self.red, self.green, self.blue]
    }
}

/// A width x height grid of colors
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PixelBuffer {
    width:  usize,
    height: usize,
    pixels: Vec<Color>
}

impl PixelBuffer {
    /// Create an image with every pixel set to black
    pub fn new(width: usize, height: usize) -> PixelBuffer {
        PixelBuffer {
            width,
            height,
            pixels: vec![Color::default(); width * height]
        }
    }

    /// Create an image from pixels already laid out in row-major order
    ///
    /// # Errors
    /// [`ImageErrors::DimensionsMisMatch`] if `pixels.len()` is not
    /// `width * height`
    pub fn from_pixels(
        width: usize, height: usize, pixels: Vec<Color>
    ) -> Result<PixelBuffer, ImageErrors> {
        let expected = width * height;

        if pixels.len() != expected {
            return Err(ImageErrors::DimensionsMisMatch(expected, pixels.len()));
        }
        Ok(PixelBuffer {
            width,
            height,
            pixels
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "Pixel ({x},{y}) outside of {}x{} image",
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// Get the color at column `x`, row `y`
    ///
    /// # Panics
    /// If the coordinate lies outside the image
    pub fn get(&self, x: usize, y: usize) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// # Panics
    /// If the coordinate lies outside the image
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut Color {
        let index = self.index(x, y);
        &mut self.pixels[index]
    }

    /// # Panics
    /// If the coordinate lies outside the image
    pub fn set(&mut self, x: usize, y: usize, color: Color) {
        *self.get_mut(x, y) = color;
    }

    /// All pixels, row-major
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        // chunks_exact panics on zero, an empty image simply has no rows
        self.pixels.chunks_exact(self.width.max(1))
    }
}

#[cfg(test)]
mod tests {
    use crate::image::{Color, PixelBuffer};

    #[test]
    fn new_buffer_is_black() {
        let image = PixelBuffer::new(3, 2);

        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.pixels().len(), 6);
        assert!(image.pixels().iter().all(|x| *x == Color::default()));
    }

    #[test]
    fn set_addresses_row_major() {
        let mut image = PixelBuffer::new(3, 2);
        image.set(2, 1, Color::new(1, 2, 3));

        assert_eq!(image.pixels()[5], Color::new(1, 2, 3));
        assert_eq!(image.get(2, 1), Color::new(1, 2, 3));

        let rows: Vec<&[Color]> = image.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][2], Color::new(1, 2, 3));
    }

    #[test]
    fn from_pixels_checks_length() {
        assert!(PixelBuffer::from_pixels(2, 2, vec![Color::default(); 3]).is_err());
        assert!(PixelBuffer::from_pixels(2, 2, vec![Color::default(); 4]).is_ok());
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_get_panics() {
        let image = PixelBuffer::new(2, 2);
        let _ = image.get(2, 0);
    }

}
