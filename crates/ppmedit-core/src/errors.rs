/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image processing
use std::fmt::{Debug, Display, Formatter};

/// All errors that can occur when building or manipulating a [`PixelBuffer`]
///
/// [`PixelBuffer`]: crate::image::PixelBuffer
pub enum ImageErrors {
    /// The number of pixels does not match `width * height`,
    /// expected, found
    DimensionsMisMatch(usize, usize),
    /// No filter is registered under this name
    UnknownFilter(String),
    /// A filter was given the wrong number of parameters
    WrongParameterCount {
        filter:   &'static str,
        expected: usize,
        found:    usize
    },
    /// A channel result does not fit in a channel,
    /// operation, value
    ChannelOverflow(&'static str, i64)
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DimensionsMisMatch(expected, found) => {
                write!(
                    f,
                    "Dimensions mismatch, expected {expected} pixels but found {found}"
                )
            }
            Self::UnknownFilter(name) => {
                write!(f, "Unknown filter `{name}`")
            }
            Self::WrongParameterCount {
                filter,
                expected,
                found
            } => {
                write!(
                    f,
                    "Filter {filter} expects {expected} parameter(s) but {found} were given"
                )
            }
            Self::ChannelOverflow(operation, value) => {
                write!(f, "{operation} produced channel value {value} which does not fit in a channel")
            }
        }
    }
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self}")
    }
}

impl std::error::Error for ImageErrors {}

#[cfg(test)]
mod tests {
    use crate::errors::ImageErrors;

    #[test]
    fn display_has_no_trailing_newline() {
        let err = ImageErrors::UnknownFilter("sepia".to_string());

        assert_eq!(err.to_string(), "Unknown filter `sepia`");
        assert_eq!(format!("{err:?}"), "Unknown filter `sepia`\n");
    }
}
