/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::Write as _;
use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::io::{Error, Write};

use ppmedit_core::image::PixelBuffer;

/// Errors occurring during encoding
pub enum PPMEncodeErrors {
    IOErrors(io::Error)
}

impl From<io::Error> for PPMEncodeErrors {
    fn from(err: Error) -> Self {
        PPMEncodeErrors::IOErrors(err)
    }
}

impl Debug for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PPMEncodeErrors::IOErrors(ref err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl std::error::Error for PPMEncodeErrors {}

/// A P3 encoder
///
/// Writes the magic number, dimensions and max value on their own
/// lines followed by one line per image row.
///
/// ```text
/// P3
/// 2 1
/// 255
/// 10 10 10 20 20 20
/// ```
pub struct PPMEncoder<'a> {
    image: &'a PixelBuffer
}

impl<'a> PPMEncoder<'a> {
    pub fn new(image: &'a PixelBuffer) -> PPMEncoder<'a> {
        PPMEncoder { image }
    }

    fn header(&self) -> String {
        let (width, height) = self.image.dimensions();
        format!("P3\n{width} {height}\n255\n")
    }

    /// Encode the image into a string
    pub fn encode(&self) -> String {
        let mut out = self.header();

        for row in self.image.rows() {
            for (pos, color) in row.iter().enumerate() {
                if pos != 0 {
                    out.push(' ');
                }
                // writing to a String never fails
                let _ = write!(out, "{} {} {}", color.red, color.green, color.blue);
            }
            out.push('\n');
        }
        out
    }

    /// Encode the image and write it to `writer`
    ///
    /// # Errors
    /// If writing fails
    pub fn encode_to<W: Write>(&self, writer: &mut W) -> Result<(), PPMEncodeErrors> {
        writer.write_all(self.encode().as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
