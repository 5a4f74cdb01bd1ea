/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core primitives shared by the ppmedit crates
//!
//! This crate holds the in-memory image representation used by the codec
//! and the filters, along with the trait every filter implements and the
//! errors they share.
//!
//! # Example
//! ```
//! use ppmedit_core::image::{Color, PixelBuffer};
//!
//! let mut image = PixelBuffer::new(2, 1);
//! image.set(1, 0, Color::splat(20));
//!
//! assert_eq!(image.get(1, 0), Color::new(20, 20, 20));
//! assert_eq!(image.get(0, 0), Color::default());
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

pub mod errors;
pub mod image;
pub mod traits;
