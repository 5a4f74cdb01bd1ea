/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Horizontal motion blur
use log::debug;
use ppmedit_core::errors::ImageErrors;
use ppmedit_core::image::{Color, PixelBuffer};
use ppmedit_core::traits::OperationsTrait;

/// Blur each pixel with the pixels to its right
///
/// A pixel becomes the average of itself and up to `length - 1`
/// pixels after it on the same row. The window shrinks at the right
/// edge and the average is always taken over the pixels actually used.
///
/// ```text
/// window = [x, min(width - 1, x + length - 1)]
/// ```
///
/// A length below 1 leaves the image untouched.
pub struct MotionBlur {
    length: i64
}

impl MotionBlur {
    #[must_use]
    pub fn new(length: i64) -> MotionBlur {
        MotionBlur { length }
    }
}

impl OperationsTrait for MotionBlur {
    fn name(&self) -> &'static str {
        "Motion blur"
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors> {
        if self.length < 1 {
            debug!("Motion blur length {} is below 1, skipping", self.length);
            return Ok(());
        }
        let length = usize::try_from(self.length).unwrap_or(usize::MAX);

        let source = image.clone();
        motion_blur(&source, image.pixels_mut(), length);

        Ok(())
    }
}

#[derive(Copy, Clone, Default)]
struct Accumulator {
    red:   i64,
    green: i64,
    blue:  i64
}

impl Accumulator {
    fn add(&mut self, color: Color) {
        self.red += i64::from(color.red);
        self.green += i64::from(color.green);
        self.blue += i64::from(color.blue);
    }

    fn remove(&mut self, color: Color) {
        self.red -= i64::from(color.red);
        self.green -= i64::from(color.green);
        self.blue -= i64::from(color.blue);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn average(&self, count: usize) -> Color {
        // a mean of i32 values fits back into an i32
        let count = count as i64;

        Color::new(
            self.red.div_euclid(count) as i32,
            self.green.div_euclid(count) as i32,
            self.blue.div_euclid(count) as i32
        )
    }
}

/// Motion blur `source` into `out` with a window of `length` pixels
///
/// `out` must hold `width * height` pixels. A zero length is a no-op.
pub fn motion_blur(source: &PixelBuffer, out: &mut [Color], length: usize) {
    let width = source.width();

    assert_eq!(
        out.len(),
        width * source.height(),
        "Output does not match source dimensions"
    );

    if width == 0 || length == 0 {
        return;
    }
    let length = length.min(width);

    for (in_row, out_row) in source.rows().zip(out.chunks_exact_mut(width)) {
        // running sum over in_row[x..=end], like a box blur window
        let mut sum = Accumulator::default();

        for color in &in_row[..length] {
            sum.add(*color);
        }

        for (x, out_pixel) in out_row.iter_mut().enumerate() {
            let end = (x + length - 1).min(width - 1);

            *out_pixel = sum.average(end - x + 1);

            sum.remove(in_row[x]);

            if let Some(next) = in_row.get(x + length) {
                sum.add(*next);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ppmedit_core::image::{Color, PixelBuffer};

    use crate::motion_blur::motion_blur;

    fn ramp() -> PixelBuffer {
        let pixels = [0, 10, 20, 30, 40].map(Color::splat).to_vec();
        PixelBuffer::from_pixels(5, 1, pixels).unwrap()
    }

    #[test]
    fn window_shrinks_at_the_edge() {
        let source = ramp();
        let mut out = vec![Color::default(); 5];

        motion_blur(&source, &mut out, 3);

        // [0,10,20] [10,20,30] [20,30,40] [30,40] [40]
        let expected = [10, 20, 30, 35, 40].map(Color::splat);
        assert_eq!(out, expected);
    }

    #[test]
    fn length_longer_than_row() {
        let source = ramp();
        let mut out = vec![Color::default(); 5];

        motion_blur(&source, &mut out, 100);

        let expected = [20, 25, 30, 35, 40].map(Color::splat);
        assert_eq!(out, expected);
    }

    #[test]
    fn rows_do_not_mix() {
        let pixels = vec![
            Color::splat(0),
            Color::splat(100),
            Color::splat(50),
            Color::splat(51),
        ];
        let source = PixelBuffer::from_pixels(2, 2, pixels).unwrap();
        let mut out = vec![Color::default(); 4];

        motion_blur(&source, &mut out, 2);

        let expected = [50, 100, 50, 51].map(Color::splat);
        assert_eq!(out, expected);
    }
}
