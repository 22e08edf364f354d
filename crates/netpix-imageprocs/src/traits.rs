/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::{debug, trace};
use netpix_core::buffer::PixelBuffer;
use netpix_core::colorspace::ColorSpace;
use netpix_core::errors::ImageErrors;

/// This encapsulates an image operation.
///
/// All transforms implement this so that a caller can
/// run any of them without knowing which one it holds.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Execute the operation on the image
    ///
    /// Implementations can assume the colorspace is one of
    /// [`supported_colorspaces`](Self::supported_colorspaces),
    /// callers should use [`execute`](Self::execute) which checks it.
    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors>;

    /// Colorspaces this operation understands
    fn supported_colorspaces(&self) -> &'static [ColorSpace] {
        &[ColorSpace::RGB, ColorSpace::Luma]
    }

    /// Run the operation after checking the image colorspace
    ///
    /// # Errors
    /// - [`ImageErrors::WrongColorspace`] if the image colorspace is
    ///   not supported
    /// - Any error returned by the operation itself
    fn execute(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors> {
        let colorspace = image.colorspace();
        let supported = self.supported_colorspaces();

        if !supported.contains(&colorspace) {
            let expected = supported.first().copied().unwrap_or(colorspace);
            return Err(ImageErrors::WrongColorspace(expected, colorspace));
        }
        trace!("Running {}", self.name());

        let start = std::time::Instant::now();

        self.execute_impl(image)?;

        debug!(
            "Finished running {} in {} ms",
            self.name(),
            start.elapsed().as_millis()
        );
        Ok(())
    }
}
