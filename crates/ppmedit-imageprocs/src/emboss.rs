/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Emboss: highlight edges against the up-left neighbour
use log::trace;
use ppmedit_core::errors::ImageErrors;
use ppmedit_core::image::{Color, PixelBuffer};
use ppmedit_core::traits::OperationsTrait;

/// Emboss an image
///
/// Each pixel is compared with the pixel diagonally above and to its left.
/// The channel difference with the largest magnitude (red first, then
/// green, then blue on ties) is added to mid gray.
///
/// ```text
/// gray = clamp(128 + diff, 0, 255)
/// ```
///
/// Pixels on the top row or left column have no such neighbour and
/// become 128.
#[derive(Default)]
pub struct Emboss;

impl Emboss {
    #[must_use]
    pub fn new() -> Emboss {
        Self
    }
}

impl OperationsTrait for Emboss {
    fn name(&self) -> &'static str {
        "Emboss"
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors> {
        // neighbours must be read before they are overwritten
        trace!("Taking a snapshot of the source pixels");
        let source = image.clone();

        emboss(&source, image.pixels_mut());
        Ok(())
    }
}

/// Largest magnitude difference between `current` and `neighbour`
///
/// Later channels only replace the result when strictly larger.
fn largest_difference(current: Color, neighbour: Color) -> i64 {
    let mut diff = 0_i64;

    for (c, n) in current.channels().into_iter().zip(neighbour.channels()) {
        let delta = i64::from(c) - i64::from(n);

        if delta.abs() > diff.abs() {
            diff = delta;
        }
    }
    diff
}

/// Emboss `source` writing the result into `out`
///
/// `out` must hold `width * height` pixels, it may not alias `source`
pub fn emboss(source: &PixelBuffer, out: &mut [Color]) {
    let (width, height) = source.dimensions();

    assert_eq!(out.len(), width * height, "Output does not match source dimensions");

    for y in 0..height {
        for x in 0..width {
            let diff = if x > 0 && y > 0 {
                largest_difference(source.get(x, y), source.get(x - 1, y - 1))
            } else {
                0
            };
            #[allow(clippy::cast_possible_truncation)]
            let gray = (128 + diff).clamp(0, 255) as i32;

            out[y * width + x] = Color::splat(gray);
        }
    }
}
