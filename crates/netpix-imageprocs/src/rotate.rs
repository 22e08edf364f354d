/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Rotate an image by 90 degrees
//!
//! A quarter turn swaps the number of rows and columns so
//! the result is written into new planes.
//!
//! ```text
//!  clockwise      counter clockwise
//! [1,2,3]    [4,1]       [3,6]
//! [4,5,6] -> [5,2]       [2,5]
//!            [6,3]       [1,4]
//! ```
use netpix_core::buffer::PixelBuffer;
use netpix_core::errors::ImageErrors;

use crate::traits::OperationsTrait;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RotateDirection {
    Clockwise,
    CounterClockwise
}

/// Rotate an image a quarter turn
pub struct Rotate {
    direction: RotateDirection
}

impl Rotate {
    #[must_use]
    pub fn new(direction: RotateDirection) -> Rotate {
        Rotate { direction }
    }
}

impl OperationsTrait for Rotate {
    fn name(&self) -> &'static str {
        match self.direction {
            RotateDirection::Clockwise => "Rotate clockwise",
            RotateDirection::CounterClockwise => "Rotate counter clockwise"
        }
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors> {
        let (rows, cols) = image.dimensions();

        let mut planes = Vec::with_capacity(image.channels().len());

        for channel in image.channels() {
            let mut out_channel = vec![0; channel.len()];

            match self.direction {
                RotateDirection::Clockwise => rotate_90(channel, &mut out_channel, cols, rows),
                RotateDirection::CounterClockwise => {
                    rotate_270(channel, &mut out_channel, cols, rows);
                }
            }
            planes.push(out_channel);
        }
        // columns become rows
        image.replace_planes(cols, rows, planes)
    }
}

/// Rotate clockwise, `out_image` has `height` columns and `width` rows
pub fn rotate_90<T: Copy>(in_image: &[T], out_image: &mut [T], width: usize, height: usize) {
    if width == 0 {
        return;
    }
    // the lowest pixel of a column becomes the first pixel of a row
    for (i, row) in in_image.chunks_exact(width).enumerate() {
        for (j, pixel) in row.iter().enumerate() {
            out_image[j * height + (height - 1 - i)] = *pixel;
        }
    }
}

/// Rotate counter clockwise
pub fn rotate_270<T: Copy>(in_image: &[T], out_image: &mut [T], width: usize, height: usize) {
    if width == 0 {
        return;
    }
    for (i, row) in in_image.chunks_exact(width).enumerate() {
        for (j, pixel) in row.iter().enumerate() {
            out_image[(width - 1 - j) * height + i] = *pixel;
        }
    }
}
