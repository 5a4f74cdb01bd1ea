/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Look up filters by name and apply them
use std::fmt::{Display, Formatter};

use log::debug;
use ppmedit_core::errors::ImageErrors;
use ppmedit_core::image::PixelBuffer;
use ppmedit_core::traits::OperationsTrait;

use crate::emboss::Emboss;
use crate::grayscale::Grayscale;
use crate::invert::Invert;
use crate::motion_blur::MotionBlur;

/// Every filter name accepted by [`Filter::from_name`]
pub const FILTER_NAMES: [&str; 5] = ["grayscale", "greyscale", "invert", "emboss", "motionblur"];

/// A filter together with its parameters
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Filter {
    Grayscale,
    Invert,
    Emboss,
    MotionBlur { length: i64 }
}

impl Filter {
    /// Number of numeric parameters the filter called `name` takes
    ///
    /// Returns `None` for unknown filters
    pub fn expected_parameters(name: &str) -> Option<usize> {
        match name {
            "grayscale" | "greyscale" | "invert" | "emboss" => Some(0),
            "motionblur" => Some(1),
            _ => None
        }
    }

    /// Create a filter from its command line name and parameters
    ///
    /// # Errors
    /// - [`ImageErrors::UnknownFilter`] if no filter has this name
    /// - [`ImageErrors::WrongParameterCount`] if `params` does not
    ///   hold exactly the number of parameters the filter takes
    pub fn from_name(name: &str, params: &[i64]) -> Result<Filter, ImageErrors> {
        let expected = Filter::expected_parameters(name)
            .ok_or_else(|| ImageErrors::UnknownFilter(name.to_string()))?;

        if params.len() != expected {
            return Err(ImageErrors::WrongParameterCount {
                filter: Filter::canonical_name(name),
                expected,
                found: params.len()
            });
        }

        let filter = match name {
            "grayscale" | "greyscale" => Filter::Grayscale,
            "invert" => Filter::Invert,
            "emboss" => Filter::Emboss,
            _ => Filter::MotionBlur { length: params[0] }
        };
        Ok(filter)
    }

    fn canonical_name(name: &str) -> &'static str {
        match name {
            "grayscale" | "greyscale" => "grayscale",
            "invert" => "invert",
            "emboss" => "emboss",
            _ => "motionblur"
        }
    }

    /// Build the operation that implements this filter
    pub fn operation(&self) -> Box<dyn OperationsTrait> {
        match *self {
            Filter::Grayscale => Box::new(Grayscale::new()),
            Filter::Invert => Box::new(Invert::new()),
            Filter::Emboss => Box::new(Emboss::new()),
            Filter::MotionBlur { length } => Box::new(MotionBlur::new(length))
        }
    }

    /// Run the filter on `image` in place
    ///
    /// # Errors
    /// Propagates errors from the underlying operation
    pub fn execute(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors> {
        debug!("Running {self} filter");
        self.operation().execute(image)
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grayscale => write!(f, "grayscale"),
            Self::Invert => write!(f, "invert"),
            Self::Emboss => write!(f, "emboss"),
            Self::MotionBlur { length } => write!(f, "motionblur (length {length})")
        }
    }
}

/// Apply the filter called `name` to `image` in place
///
/// # Example
/// ```
/// use ppmedit_core::image::{Color, PixelBuffer};
/// use ppmedit_imageprocs::filter::apply;
///
/// let mut image = PixelBuffer::new(1, 1);
/// apply(&mut image, "emboss", &[]).unwrap();
///
/// assert_eq!(image.get(0, 0), Color::splat(128));
/// assert!(apply(&mut image, "sepia", &[]).is_err());
/// ```
///
/// # Errors
/// See [`Filter::from_name`]
pub fn apply(image: &mut PixelBuffer, name: &str, params: &[i64]) -> Result<(), ImageErrors> {
    Filter::from_name(name, params)?.execute(image)
}
