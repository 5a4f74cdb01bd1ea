/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use log::{info, warn};
use ppmedit_core::image::{Color, PixelBuffer};

use crate::options::DecoderOptions;
use crate::tokens::{Token, TokenStream};

/// Errors raised when the input is not a valid P3 file
pub enum PPMDecodeErrors {
    /// The stream ended before this header field was read
    MissingHeaderField(&'static str),
    /// A header field was present but its value is unusable
    InvalidHeader(String),
    /// A token that should be an integer is not one
    InvalidToken { line: usize, token: String },
    /// The number of channel values does not make up
    /// `width * height` pixels, expected, found
    PixelCountMismatch { expected: usize, found: usize },
    /// Dimension exceeds the configured limit, maximum, found
    LargeDimensions(usize, usize)
}

impl Debug for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingHeaderField(field) => {
                writeln!(f, "Invalid header, reason: missing {field}")
            }
            Self::InvalidHeader(val) => {
                writeln!(f, "Invalid header, reason: {val}")
            }
            Self::InvalidToken { line, token } => {
                writeln!(f, "Expected an integer on line {line} but found `{token}`")
            }
            Self::PixelCountMismatch { expected, found } => {
                writeln!(
                    f,
                    "Expected {expected} channel values but found {found}, \
                     the values do not match the image dimensions"
                )
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
        }
    }
}

impl Display for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl std::error::Error for PPMDecodeErrors {}

/// An instance of a PPM decoder
///
/// The decoder can decode the plain text P3 format
pub struct PPMDecoder<'a> {
    width:           usize,
    height:          usize,
    max_value:       i64,
    decoded_headers: bool,
    tokens:          TokenStream<'a>,
    options:         DecoderOptions
}

impl<'a> PPMDecoder<'a> {
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data: P3 encoded text
    ///
    /// # Example
    /// ```
    /// use ppmedit_ppm::PPMDecoder;
    /// let mut decoder = PPMDecoder::new("NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a str) -> PPMDecoder<'a> {
        PPMDecoder::new_with_options(DecoderOptions::default(), data)
    }

    /// Create a new PPM decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - data: P3 encoded text
    pub fn new_with_options(options: DecoderOptions, data: &'a str) -> PPMDecoder<'a> {
        PPMDecoder {
            width: 0,
            height: 0,
            max_value: 0,
            decoded_headers: false,
            tokens: TokenStream::new(data),
            options
        }
    }

    /// Read PPM headers and store them in internal state
    ///
    /// Calling this more than once is a no-op.
    ///
    /// # Errors
    /// If a header field is missing, is not an integer, or the
    /// dimensions are zero or above the configured limits
    pub fn read_headers(&mut self) -> Result<(), PPMDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        let magic = self
            .tokens
            .next()
            .ok_or(PPMDecodeErrors::MissingHeaderField("magic number"))?;

        if magic.text != "P3" {
            if self.options.get_strict_mode() {
                let msg = format!("Expected magic number P3 but got `{}`", magic.text);
                return Err(PPMDecodeErrors::InvalidHeader(msg));
            }
            warn!("Expected magic number P3 but got `{}`, continuing", magic.text);
        }

        self.width = self.header_integer("width")?;
        self.height = self.header_integer("height")?;

        if self.width == 0 || self.height == 0 {
            let msg = format!(
                "Image dimensions must be positive, found {}x{}",
                self.width, self.height
            );
            return Err(PPMDecodeErrors::InvalidHeader(msg));
        }
        if self.width > self.options.get_max_width() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.get_max_width(),
                self.width
            ));
        }
        if self.height > self.options.get_max_height() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.get_max_height(),
                self.height
            ));
        }

        let max_value = self.next_header_token("max value")?;
        self.max_value = parse_token(max_value)?;

        if self.max_value != 255 {
            if self.options.get_strict_mode() {
                let msg = format!("Expected max value 255 but got {}", self.max_value);
                return Err(PPMDecodeErrors::InvalidHeader(msg));
            }
            warn!("Expected max value 255 but got {}, ignoring it", self.max_value);
        }

        info!("Width: {}, height: {}", self.width, self.height);
        info!("Max value: {}", self.max_value);

        self.decoded_headers = true;

        Ok(())
    }

    fn next_header_token(&mut self, field: &'static str) -> Result<Token<'a>, PPMDecodeErrors> {
        self.tokens
            .next()
            .ok_or(PPMDecodeErrors::MissingHeaderField(field))
    }

    fn header_integer(&mut self, field: &'static str) -> Result<usize, PPMDecodeErrors> {
        let token = self.next_header_token(field)?;
        parse_token(token)
    }

    /// Return image dimensions or none if headers aren't decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }

    /// Return the max value read from the header or none
    /// if headers aren't decoded
    pub const fn max_value(&self) -> Option<i64> {
        if self.decoded_headers {
            Some(self.max_value)
        } else {
            None
        }
    }

    /// Decode a P3 file into a [`PixelBuffer`]
    ///
    /// Channel values are stored as read, they are not clamped
    /// to the max value.
    ///
    /// # Errors
    /// - Header errors, see [`read_headers`](Self::read_headers)
    /// - [`PPMDecodeErrors::InvalidHeader`] if `width * height * 3`
    ///   overflows a `usize`
    /// - [`PPMDecodeErrors::InvalidToken`] on a non integer channel value
    /// - [`PPMDecodeErrors::PixelCountMismatch`] if the values do
    ///   not fill exactly `width * height` pixels
    pub fn decode(&mut self) -> Result<PixelBuffer, PPMDecodeErrors> {
        self.read_headers()?;

        let expected = self
            .width
            .checked_mul(self.height)
            .and_then(|x| x.checked_mul(3))
            .ok_or_else(|| {
                PPMDecodeErrors::InvalidHeader(format!(
                    "Image of {}x{} pixels is too large to address",
                    self.width, self.height
                ))
            })?;
        // grow with the data, the header alone can claim gigabytes
        let mut channels = Vec::new();

        for token in self.tokens.by_ref() {
            channels.push(parse_token::<i32>(token)?);
        }

        if channels.len() != expected {
            return Err(PPMDecodeErrors::PixelCountMismatch {
                expected,
                found: channels.len()
            });
        }

        let mut image = PixelBuffer::new(self.width, self.height);

        for (pixel, rgb) in image.pixels_mut().iter_mut().zip(channels.chunks_exact(3)) {
            *pixel = Color::new(rgb[0], rgb[1], rgb[2]);
        }

        Ok(image)
    }
}

fn parse_token<T: std::str::FromStr>(token: Token) -> Result<T, PPMDecodeErrors> {
    token
        .text
        .parse::<T>()
        .map_err(|_| PPMDecodeErrors::InvalidToken {
            line:  token.line,
            token: token.text.to_string()
        })
}

#[cfg(test)]
mod tests {
    use ppmedit_core::image::Color;

    use crate::{DecoderOptions, PPMDecodeErrors, PPMDecoder};

    #[test]
    fn headers_before_decode() {
        let mut decoder = PPMDecoder::new("P3\n3 2\n255\n");

        assert_eq!(decoder.dimensions(), None);
        decoder.read_headers().unwrap();
        assert_eq!(decoder.dimensions(), Some((3, 2)));
        assert_eq!(decoder.max_value(), Some(255));
    }

    #[test]
    fn tokens_may_span_lines() {
        let image = PPMDecoder::new("P3 2\n1\n255 1\n2\n3 4 5\n\n6\n")
            .decode()
            .unwrap();

        assert_eq!(image.get(0, 0), Color::new(1, 2, 3));
        assert_eq!(image.get(1, 0), Color::new(4, 5, 6));
    }

    #[test]
    fn values_are_not_clamped() {
        let image = PPMDecoder::new("P3\n1 1\n255\n300 -2 7").decode().unwrap();

        assert_eq!(image.get(0, 0), Color::new(300, -2, 7));
    }

    #[test]
    fn zero_width_is_rejected() {
        let err = PPMDecoder::new("P3\n0 1\n255\n").decode().unwrap_err();

        assert!(matches!(err, PPMDecodeErrors::InvalidHeader(_)));
    }

    #[test]
    fn strict_mode_rejects_other_magic() {
        let options = DecoderOptions::default().set_strict_mode(true);
        let err = PPMDecoder::new_with_options(options, "P6\n1 1\n255\n1 2 3")
            .decode()
            .unwrap_err();

        assert!(matches!(err, PPMDecodeErrors::InvalidHeader(_)));
        // lenient mode only warns
        assert!(PPMDecoder::new("P6\n1 1\n255\n1 2 3").decode().is_ok());
    }

    #[test]
    fn large_dimensions() {
        let options = DecoderOptions::default().set_max_width(4);
        let err = PPMDecoder::new_with_options(options, "P3\n5 1\n255\n")
            .decode()
            .unwrap_err();

        assert!(matches!(err, PPMDecodeErrors::LargeDimensions(4, 5)));
    }

    #[test]
    fn sample_count_overflow() {
        let options = DecoderOptions::default()
            .set_max_width(usize::MAX)
            .set_max_height(usize::MAX);
        let mut decoder =
            PPMDecoder::new_with_options(options, "P3\n4294967296 4294967296\n255\n1 2 3");

        let err = decoder.decode().unwrap_err();

        assert!(matches!(err, PPMDecodeErrors::InvalidHeader(_)), "{err:?}");
    }
}
