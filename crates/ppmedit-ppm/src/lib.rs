/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A plain text Portable Pixmap (P3) decoder and encoder
//!
//! The decoder treats the file as a stream of whitespace separated
//! tokens, so values may be split across lines in any way. Comments
//! start with `#` and run to the end of the line.
//!
//! # Example
//! ```
//! use ppmedit_ppm::{PPMDecoder, PPMEncoder};
//!
//! let mut decoder = PPMDecoder::new("P3\n2 1\n255\n10 10 10 20 20 20");
//! let image = decoder.decode().unwrap();
//!
//! assert_eq!(image.dimensions(), (2, 1));
//! assert_eq!(
//!     PPMEncoder::new(&image).encode(),
//!     "P3\n2 1\n255\n10 10 10 20 20 20\n"
//! );
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc
)]

pub use decoder::*;
pub use encoder::*;
pub use options::DecoderOptions;

mod decoder;
mod encoder;
mod options;
mod tokens;

/// Decode a P3 file with default options
///
/// # Errors
/// See [`PPMDecoder::decode`]
pub fn decode_ppm(data: &str) -> Result<ppmedit_core::image::PixelBuffer, PPMDecodeErrors> {
    PPMDecoder::new(data).decode()
}

/// Encode an image as a P3 file
pub fn encode_ppm(image: &ppmedit_core::image::PixelBuffer) -> String {
    PPMEncoder::new(image).encode()
}
