/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! 3x3 integer convolution
//!
//! Used for sharpening and smoothing. Each output sample is computed
//! from the original plane, never from already filtered neighbours.
//!
//! The outermost rows and columns have no full neighbourhood and are set to 0.
use netpix_core::buffer::PixelBuffer;
use netpix_core::errors::ImageErrors;

use crate::traits::OperationsTrait;
use crate::utils::clamp_i32;

#[rustfmt::skip]
const SHARPEN: [i32; 9] = [
     0, -1,  0,
    -1,  5, -1,
     0, -1,  0
];

const SMOOTH: [i32; 9] = [1; 9];

/// Convolve every plane with a 3x3 kernel
///
/// The weighted sum is divided by `divisor` using integer division
/// and then clamped.
#[derive(Copy, Clone, Debug)]
pub struct Convolve {
    name:    &'static str,
    weights: [i32; 9],
    divisor: i32
}

impl Convolve {
    /// Five times the center minus the four direct neighbours
    #[must_use]
    pub fn sharpen() -> Convolve {
        Convolve {
            name:    "Sharpen",
            weights: SHARPEN,
            divisor: 1
        }
    }

    /// Mean of the 3x3 neighbourhood
    #[must_use]
    pub fn smooth() -> Convolve {
        Convolve {
            name:    "Smooth",
            weights: SMOOTH,
            divisor: 9
        }
    }
}

impl OperationsTrait for Convolve {
    fn name(&self) -> &'static str {
        self.name
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors> {
        let (rows, cols) = image.dimensions();

        for channel in image.channels_mut() {
            let mut out_channel = vec![0; channel.len()];

            convolve_3x3(channel, &mut out_channel, cols, rows, &self.weights, self.divisor);

            *channel = out_channel;
        }
        Ok(())
    }
}

/// Convolve `in_channel` into `out_channel`
///
/// Border samples of `out_channel` are set to zero, so are all samples
/// of images with fewer than three rows or columns.
pub fn convolve_3x3(
    in_channel: &[u8], out_channel: &mut [u8], width: usize, height: usize, weights: &[i32; 9],
    divisor: i32
) {
    out_channel.fill(0);

    if width < 3 || height < 3 {
        return;
    }
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let mut sum = 0_i32;

            for (k, weight) in weights.iter().enumerate() {
                let row = y + k / 3 - 1;
                let col = x + k % 3 - 1;

                sum += weight * i32::from(in_channel[row * width + col]);
            }
            out_channel[y * width + x] = clamp_i32(sum / divisor);
        }
    }
}
