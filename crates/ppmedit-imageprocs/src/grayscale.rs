/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Convert an image to grayscale by averaging channels
use ppmedit_core::errors::ImageErrors;
use ppmedit_core::image::{Color, PixelBuffer};
use ppmedit_core::traits::OperationsTrait;

/// Convert RGB data to grayscale
///
/// Every channel of a pixel is replaced by the mean of its
/// three channels
///
/// ```text
/// gray = clamp(floor((R + G + B) / 3), 0, 255)
/// ```
#[derive(Default)]
pub struct Grayscale;

impl Grayscale {
    #[must_use]
    pub fn new() -> Grayscale {
        Self
    }
}

impl OperationsTrait for Grayscale {
    fn name(&self) -> &'static str {
        "Grayscale"
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors> {
        grayscale(image.pixels_mut());
        Ok(())
    }
}

pub fn grayscale(pixels: &mut [Color]) {
    for pixel in pixels.iter_mut() {
        let sum = i64::from(pixel.red) + i64::from(pixel.green) + i64::from(pixel.blue);
        // in range after the clamp
        #[allow(clippy::cast_possible_truncation)]
        let gray = sum.div_euclid(3).clamp(0, 255) as i32;

        *pixel = Color::splat(gray);
    }
}

#[cfg(test)]
mod tests {
    use ppmedit_core::image::Color;

    use crate::grayscale::grayscale;

    #[test]
    fn mean_is_floored() {
        let mut pixels = [Color::new(10, 20, 31), Color::new(0, 0, 2)];
        grayscale(&mut pixels);

        assert_eq!(pixels, [Color::splat(20), Color::splat(0)]);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        let mut pixels = [Color::new(400, 400, 400), Color::new(-9, -9, 0)];
        grayscale(&mut pixels);

        assert_eq!(pixels, [Color::splat(255), Color::splat(0)]);
    }
}
