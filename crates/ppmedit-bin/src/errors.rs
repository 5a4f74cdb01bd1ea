/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors that stop a workflow
use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::path::PathBuf;

use ppmedit_core::errors::ImageErrors;
use ppmedit_ppm::{PPMDecodeErrors, PPMEncodeErrors};

/// Every error that can abort a run after its arguments were accepted
pub enum WorkflowErrors {
    /// The input is not a valid P3 file
    FormatError(PPMDecodeErrors),
    FilterError(ImageErrors),
    EncodeError(PPMEncodeErrors),
    IoError(PathBuf, io::Error),
    /// Input and output name the same file
    SamePath(PathBuf)
}

impl Debug for WorkflowErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FormatError(err) => writeln!(f, "Malformed PPM file: {err:?}"),
            Self::FilterError(err) => writeln!(f, "Filter failed: {err}"),
            Self::EncodeError(err) => writeln!(f, "Could not encode image: {err:?}"),
            Self::IoError(path, err) => writeln!(f, "I/O error on {path:?}: {err}"),
            Self::SamePath(path) => {
                writeln!(f, "Cannot use {path:?} as both input and output")
            }
        }
    }
}

impl Display for WorkflowErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl std::error::Error for WorkflowErrors {}

impl From<PPMDecodeErrors> for WorkflowErrors {
    fn from(err: PPMDecodeErrors) -> Self {
        WorkflowErrors::FormatError(err)
    }
}

impl From<ImageErrors> for WorkflowErrors {
    fn from(err: ImageErrors) -> Self {
        WorkflowErrors::FilterError(err)
    }
}

impl From<PPMEncodeErrors> for WorkflowErrors {
    fn from(err: PPMEncodeErrors) -> Self {
        WorkflowErrors::EncodeError(err)
    }
}
