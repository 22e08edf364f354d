/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Stretch the contrast of a grayscale image
//!
//! The darkest sample is sent to 0 and the brightest to 255,
//! everything in between is scaled linearly.
use log::trace;
use netpix_core::buffer::PixelBuffer;
use netpix_core::colorspace::ColorSpace;
use netpix_core::errors::ImageErrors;

use crate::traits::OperationsTrait;
use crate::utils::clamp_byte;

/// Linear contrast stretch over the full `0..=255` range
///
/// Only works on grayscale images, convert with
/// [`Grayscale`](crate::grayscale::Grayscale) first.
#[derive(Default, Copy, Clone)]
pub struct StretchContrast;

impl StretchContrast {
    #[must_use]
    pub fn new() -> StretchContrast {
        Self
    }
}

impl OperationsTrait for StretchContrast {
    fn name(&self) -> &'static str {
        "Stretch Contrast"
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors> {
        for channel in image.channels_mut() {
            stretch_contrast(channel)?;
        }
        Ok(())
    }

    fn supported_colorspaces(&self) -> &'static [ColorSpace] {
        &[ColorSpace::Luma]
    }
}

/// Stretch `channel` in place so its minimum becomes 0 and its maximum 255
///
/// An empty channel is left alone.
///
/// # Errors
/// [`ImageErrors::ArithmeticError`] if every sample has the same value,
/// there is no range to stretch.
pub fn stretch_contrast(channel: &mut [u8]) -> Result<(), ImageErrors> {
    let (Some(min), Some(max)) = (channel.iter().min().copied(), channel.iter().max().copied())
    else {
        return Ok(());
    };

    if max == min {
        return Err(ImageErrors::ArithmeticError(
            "Cannot stretch contrast, all samples have the same value"
        ));
    }
    let scale = 255.0 / f64::from(max - min);

    trace!("Contrast range {min}..={max}, scale {scale}");

    for pixel in channel.iter_mut() {
        *pixel = clamp_byte(scale * f64::from(*pixel - min));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use netpix_core::errors::ImageErrors;

    use crate::contrast::stretch_contrast;

    #[test]
    fn full_range_is_unchanged() {
        let mut data = [0, 17, 128, 255];

        stretch_contrast(&mut data).unwrap();
        assert_eq!(data, [0, 17, 128, 255]);
    }

    #[test]
    fn narrow_range_is_scaled() {
        let mut data = [0, 10, 25, 51];

        stretch_contrast(&mut data).unwrap();
        assert_eq!(data, [0, 50, 125, 255]);
    }

    #[test]
    fn flat_channel_is_an_error() {
        let mut data = [9; 16];

        assert!(matches!(
            stretch_contrast(&mut data),
            Err(ImageErrors::ArithmeticError(_))
        ));
        assert_eq!(data, [9; 16]);
    }
}
