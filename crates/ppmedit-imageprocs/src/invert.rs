/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use ppmedit_core::errors::ImageErrors;
use ppmedit_core::image::{Color, PixelBuffer};
use ppmedit_core::traits::OperationsTrait;

/// Invert
#[derive(Default)]
pub struct Invert;

impl Invert {
    #[must_use]
    pub fn new() -> Invert {
        Self
    }
}

impl OperationsTrait for Invert {
    fn name(&self) -> &'static str {
        "Invert"
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors> {
        invert(image.pixels_mut())
    }
}

///Invert a pixel
///
/// The formula for inverting a pixel
///  is `pixel[x,y] = 255-pixel[x,y]`, applied to each channel
///
/// # Errors
/// [`ImageErrors::ChannelOverflow`] if a channel is so negative that
/// `255 - channel` does not fit in an `i32`. Pixels are left untouched
/// in that case.
pub fn invert(pixels: &mut [Color]) -> Result<(), ImageErrors> {
    // decoded channels are not clamped, check before touching anything
    if let Some(value) = pixels
        .iter()
        .flat_map(Color::channels)
        .find(|c| c.checked_neg().and_then(|n| n.checked_add(255)).is_none())
    {
        return Err(ImageErrors::ChannelOverflow("Invert", 255 - i64::from(value)));
    }

    pixels.iter_mut().for_each(|x| {
        *x = Color::new(255 - x.red, 255 - x.green, 255 - x.blue);
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use ppmedit_core::errors::ImageErrors;
    use ppmedit_core::image::Color;

    use crate::invert::invert;

    #[test]
    fn extreme_channels() {
        let mut pixels = [Color::new(i32::MAX, 0, 0)];
        invert(&mut pixels).unwrap();
        assert_eq!(pixels, [Color::new(255 - i32::MAX, 255, 255)]);

        let mut pixels = [Color::new(0, 0, 0), Color::new(7, i32::MIN, 0)];
        let err = invert(&mut pixels).unwrap_err();

        assert!(matches!(
            err,
            ImageErrors::ChannelOverflow("Invert", x) if x == 255 - i64::from(i32::MIN)
        ));
        assert_eq!(pixels, [Color::new(0, 0, 0), Color::new(7, i32::MIN, 0)]);
    }
}
