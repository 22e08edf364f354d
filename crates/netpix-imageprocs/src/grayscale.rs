/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Convert an RGB image to grayscale
//!
//! The gray value is a weighted sum of the three planes
//!
//! ```text
//! gray = 0.3 * r + 0.6 * g + 0.1 * b
//! ```
//!
//! After conversion the image has a single plane.
use netpix_core::buffer::PixelBuffer;
use netpix_core::colorspace::ColorSpace;
use netpix_core::errors::ImageErrors;

use crate::traits::OperationsTrait;
use crate::utils::clamp_byte;

const RED_WEIGHT: f64 = 0.3;
const GREEN_WEIGHT: f64 = 0.6;
const BLUE_WEIGHT: f64 = 0.1;

/// Convert RGB to a single gray plane
///
/// Running it on an image that is already grayscale does nothing.
#[derive(Default, Copy, Clone)]
pub struct Grayscale;

impl Grayscale {
    #[must_use]
    pub fn new() -> Grayscale {
        Self
    }
}

impl OperationsTrait for Grayscale {
    fn name(&self) -> &'static str {
        "Grayscale"
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors> {
        if image.colorspace() == ColorSpace::Luma {
            return Ok(());
        }
        let (red, rest) = image.channels_mut().split_at_mut(1);

        if let [green, blue] = rest {
            rgb_to_grayscale(&mut red[0], green, blue);
        }
        image.narrow_colorspace(ColorSpace::Luma)
    }
}

/// Compute gray values into `red`, which is both an input
/// and the output plane.
pub fn rgb_to_grayscale(red: &mut [u8], green: &[u8], blue: &[u8]) {
    for ((r, g), b) in red.iter_mut().zip(green).zip(blue) {
        *r = to_gray(*r, *g, *b);
    }
}

#[inline]
fn to_gray(r: u8, g: u8, b: u8) -> u8 {
    clamp_byte(RED_WEIGHT * f64::from(r) + GREEN_WEIGHT * f64::from(g) + BLUE_WEIGHT * f64::from(b))
}
