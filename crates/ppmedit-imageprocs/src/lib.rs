/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for `ppmedit`
//!
//! Every filter implements the `OperationsTrait` defined by ppmedit-core,
//! and [`filter::Filter`] maps command line names to them.
//!
//! # Example
//! - Invert an image
//! ```
//! use ppmedit_core::image::{Color, PixelBuffer};
//! use ppmedit_core::traits::OperationsTrait;
//! use ppmedit_imageprocs::invert::Invert;
//!
//! let mut image = PixelBuffer::new(2, 2);
//! Invert::new().execute(&mut image).unwrap();
//!
//! assert_eq!(image.get(1, 1), Color::splat(255));
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
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc
)]

pub mod emboss;
pub mod filter;
pub mod grayscale;
pub mod invert;
pub mod motion_blur;
