/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits implemented by image operations
use log::trace;

use crate::errors::ImageErrors;
use crate::image::PixelBuffer;

/// This encapsulates an image operation.
///
/// All filters that can be applied to a [`PixelBuffer`]
/// implement this trait.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Run the operation on the image, modifying it in place
    ///
    /// Implementors should put their logic here, callers go through
    /// [`execute`](OperationsTrait::execute)
    ///
    /// # Errors
    /// Any operation error will be propagated to the caller
    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors>;

    /// Execute the operation on the image
    ///
    /// # Arguments
    /// - image: A mutable reference to an image which
    /// this operation will manipulate
    ///
    /// # Errors
    /// Any operation error will be propagated to the caller
    fn execute(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();

        trace!("Running {} on a {width}x{height} image", self.name());

        let start = std::time::Instant::now();
        self.execute_impl(image)?;

        trace!("Finished {} in {:?}", self.name(), start.elapsed());
        Ok(())
    }
}
