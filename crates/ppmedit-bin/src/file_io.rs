/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{read_to_string, OpenOptions};
use std::io::BufWriter;
use std::path::Path;

use log::info;
use ppmedit_core::image::PixelBuffer;
use ppmedit_ppm::PPMEncoder;

use crate::errors::WorkflowErrors;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> WorkflowErrors {
    let path = path.to_path_buf();
    move |err| WorkflowErrors::IoError(path, err)
}

/// Read the whole input file to memory
pub(crate) fn read_input(path: &Path) -> Result<String, WorkflowErrors> {
    info!("Reading file {:?} to memory", path);
    read_to_string(path).map_err(io_error(path))
}

/// Encode `image` and write it to `path`, replacing any existing file
pub(crate) fn write_output(path: &Path, image: &PixelBuffer) -> Result<(), WorkflowErrors> {
    let (width, height) = image.dimensions();
    info!("Writing {width}x{height} image to {:?}", path);

    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)
        .map_err(io_error(path))?;

    let mut buf_writer = BufWriter::new(file);

    PPMEncoder::new(image).encode_to(&mut buf_writer)?;

    Ok(())
}
