/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Brighten or darken an image by a constant
use netpix_core::buffer::PixelBuffer;
use netpix_core::errors::ImageErrors;

use crate::traits::OperationsTrait;
use crate::utils::clamp_i32;

/// Add a constant to every sample, clamping the result
/// to `0..=255`
///
/// Negative values darken the image.
#[derive(Copy, Clone, Debug)]
pub struct Brighten {
    value: i32
}

impl Brighten {
    #[must_use]
    pub fn new(value: i32) -> Brighten {
        Brighten { value }
    }
}

impl OperationsTrait for Brighten {
    fn name(&self) -> &'static str {
        "Brighten"
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors> {
        for channel in image.channels_mut() {
            brighten(channel, self.value);
        }
        Ok(())
    }
}

pub fn brighten(channel: &mut [u8], value: i32) {
    channel
        .iter_mut()
        .for_each(|x| *x = clamp_i32(i32::from(*x).saturating_add(value)));
}
