/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};
use ppmedit_core::errors::ImageErrors;
use ppmedit_core::image::{Color, PixelBuffer};
use ppmedit_imageprocs::filter::apply;

fn random_image(seed: u64, width: usize, height: usize) -> PixelBuffer {
    let mut rng = WyRand::new_seed(seed);
    let mut image = PixelBuffer::new(width, height);

    for pixel in image.pixels_mut() {
        *pixel = Color::new(
            i32::from(rng.generate::<u8>()),
            i32::from(rng.generate::<u8>()),
            i32::from(rng.generate::<u8>())
        );
    }
    image
}

fn two_pixel_row() -> PixelBuffer {
    PixelBuffer::from_pixels(2, 1, vec![Color::splat(10), Color::splat(20)]).unwrap()
}

#[test]
fn invert_two_pixels() {
    let mut image = two_pixel_row();
    apply(&mut image, "invert", &[]).unwrap();

    assert_eq!(image.pixels(), &[Color::splat(245), Color::splat(235)]);
}

#[test]
fn grayscale_keeps_gray_pixels() {
    let mut image = two_pixel_row();
    apply(&mut image, "grayscale", &[]).unwrap();

    assert_eq!(image, two_pixel_row());
}

#[test]
fn invert_twice_is_identity() {
    let original = random_image(1, 13, 7);
    let mut image = original.clone();

    apply(&mut image, "invert", &[]).unwrap();
    assert_ne!(image, original);
    apply(&mut image, "invert", &[]).unwrap();

    assert_eq!(image, original);
}

#[test]
fn grayscale_is_idempotent() {
    let mut once = random_image(2, 9, 11);
    apply(&mut once, "greyscale", &[]).unwrap();

    let mut twice = once.clone();
    apply(&mut twice, "grayscale", &[]).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn motion_blur_length_one_is_identity() {
    let original = random_image(3, 8, 8);
    let mut image = original.clone();

    apply(&mut image, "motionblur", &[1]).unwrap();
    assert_eq!(image, original);
}

#[test]
fn motion_blur_below_one_is_a_no_op() {
    let original = random_image(4, 5, 3);

    for length in [0, -3] {
        let mut image = original.clone();
        apply(&mut image, "motionblur", &[length]).unwrap();

        assert_eq!(image, original);
    }
}

#[test]
fn motion_blur_gray_ramp() {
    let pixels = [0, 10, 20, 30, 40].map(Color::splat).to_vec();
    let mut image = PixelBuffer::from_pixels(5, 1, pixels).unwrap();

    apply(&mut image, "motionblur", &[3]).unwrap();

    assert_eq!(image.get(0, 0), Color::splat(10));
}

#[test]
fn motion_blur_two_wide_window() {
    let pixels = vec![Color::splat(0), Color::splat(10), Color::splat(20)];
    let mut image = PixelBuffer::from_pixels(3, 1, pixels).unwrap();

    apply(&mut image, "motionblur", &[2]).unwrap();

    assert_eq!(image.pixels(), &[Color::splat(5), Color::splat(15), Color::splat(20)]);
}

#[test]
fn emboss_single_pixel() {
    let mut image = PixelBuffer::from_pixels(1, 1, vec![Color::new(3, 200, 90)]).unwrap();
    apply(&mut image, "emboss", &[]).unwrap();

    assert_eq!(image.get(0, 0), Color::splat(128));
}

#[test]
fn emboss_edges_are_mid_gray() {
    let mut image = random_image(5, 6, 4);
    apply(&mut image, "emboss", &[]).unwrap();

    for x in 0..6 {
        assert_eq!(image.get(x, 0), Color::splat(128));
    }
    for y in 0..4 {
        assert_eq!(image.get(0, y), Color::splat(128));
    }
}

#[test]
fn emboss_reads_original_pixels() {
    // 2x2 diagonal: (1,1) compares against the untouched (0,0)
    let pixels = vec![
        Color::splat(100),
        Color::splat(0),
        Color::splat(0),
        Color::new(150, 90, 100),
    ];
    let mut image = PixelBuffer::from_pixels(2, 2, pixels).unwrap();

    apply(&mut image, "emboss", &[]).unwrap();

    // largest |delta| is red: 150 - 100 = 50
    assert_eq!(image.get(1, 1), Color::splat(178));
}

#[test]
fn emboss_clamps() {
    let pixels = vec![
        Color::splat(255),
        Color::splat(0),
        Color::splat(0),
        Color::splat(0),
    ];
    let mut image = PixelBuffer::from_pixels(2, 2, pixels).unwrap();

    apply(&mut image, "emboss", &[]).unwrap();

    assert_eq!(image.get(1, 1), Color::splat(0));
}

#[test]
fn emboss_is_independent_of_traversal_order() {
    let original = random_image(6, 10, 10);

    let mut image = original.clone();
    apply(&mut image, "emboss", &[]).unwrap();

    for y in 1..10 {
        for x in 1..10 {
            let current = original.get(x, y);
            let neighbour = original.get(x - 1, y - 1);

            let mut diff = 0_i32;
            for (c, n) in current.channels().into_iter().zip(neighbour.channels()) {
                if (c - n).abs() > diff.abs() {
                    diff = c - n;
                }
            }
            assert_eq!(image.get(x, y), Color::splat((128 + diff).clamp(0, 255)));
        }
    }
}

#[test]
fn invert_channel_that_cannot_be_negated() {
    let mut image = PixelBuffer::from_pixels(1, 1, vec![Color::new(i32::MIN, 0, 0)]).unwrap();

    let err = apply(&mut image, "invert", &[]).unwrap_err();

    assert!(matches!(err, ImageErrors::ChannelOverflow("Invert", _)));
    assert_eq!(image.get(0, 0), Color::new(i32::MIN, 0, 0));
}
