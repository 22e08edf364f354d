/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Crop an image
//!
//! A crop is a view into a sub-image copied out into new planes
//!
//! ```text
//!    cols ──────────────────────────────►
//! │ ┌─────────────────────────────────────┐
//! │ │                                     │
//! │ │ (row,col)     width                 │
//! │ │     ┌────────────────────┐          │
//! │ │   h │                    │          │
//! │ │   e │  CROPPED IMAGE     │          │
//! │ │   i │                    │          │
//! │ │   g │                    │          │
//! │ │   h │                    │          │
//! │ │   t └────────────────────┘          │
//! ▼ │                                     │
//!   └─────────────────────────────────────┘
//! ```
//!
//! Requests that spill over the image edge are pulled back inside
//! rather than rejected, only the starting corner has to lie inside.
use netpix_core::buffer::PixelBuffer;
use netpix_core::errors::ImageErrors;

use crate::traits::OperationsTrait;

/// Crop out a part of an image
///
/// # Example
/// Take a 2x2 icon from the top left corner
/// ```
/// use netpix_core::buffer::PixelBuffer;
/// use netpix_core::colorspace::ColorSpace;
/// use netpix_core::errors::ImageErrors;
/// use netpix_imageprocs::crop::Crop;
/// use netpix_imageprocs::traits::OperationsTrait;
///
/// let mut image = PixelBuffer::fill([255; 3], 10, 10, ColorSpace::RGB)?;
/// Crop::new(0, 0, 2, 2).execute(&mut image)?;
///
/// assert_eq!(image.dimensions(), (2, 2));
/// # Ok::<(), ImageErrors>(())
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Crop {
    row:    usize,
    col:    usize,
    height: usize,
    width:  usize
}

impl Crop {
    /// Create a new crop operation
    ///
    /// # Arguments
    /// - row, col: top left corner of the cropped image
    /// - height, width: size of the cropped image
    #[must_use]
    pub fn new(row: usize, col: usize, height: usize, width: usize) -> Crop {
        Crop {
            row,
            col,
            height,
            width
        }
    }

    /// Pull the requested region inside an image of `rows` x `cols`
    ///
    /// Returns `(row, col, height, width)`.
    ///
    /// # Errors
    /// [`ImageErrors::OutOfBounds`] if the top left corner is outside the image
    pub fn clamp_to(&self, rows: usize, cols: usize) -> Result<(usize, usize, usize, usize), ImageErrors> {
        if self.row >= rows || self.col >= cols {
            return Err(ImageErrors::OutOfBounds((self.row, self.col), (rows, cols)));
        }
        let (mut row, mut col) = (self.row, self.col);
        let (mut height, mut width) = (self.height, self.width);

        if height > rows {
            height = rows;
            row = 0;
        }
        if width > cols {
            width = cols;
            col = 0;
        }
        if row + height > rows {
            row = rows - height;
        }
        if col + width > cols {
            col = cols - width;
        }
        Ok((row, col, height, width))
    }
}

impl OperationsTrait for Crop {
    fn name(&self) -> &'static str {
        "Crop"
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors> {
        let (rows, cols) = image.dimensions();
        let (row, col, height, width) = self.clamp_to(rows, cols)?;

        let mut planes = Vec::with_capacity(image.channels().len());

        for channel in image.channels() {
            let mut new_vec = vec![0; height * width];

            crop(channel, cols, &mut new_vec, width, height, col, row);

            planes.push(new_vec);
        }
        image.replace_planes(height, width, planes)
    }
}

/// Crop an image channel
///
/// # Arguments
///
/// * `in_image`:   Input image channel
/// * `in_width`:   Input width
/// * `out_image`:  Output image channel
/// * `out_width`:  Output width
/// * `out_height`: Output height
/// * `x`:  column offset
/// * `y`:  row offset
///
/// Rows that would read past the input are left untouched.
pub fn crop<T: Copy>(
    in_image: &[T], in_width: usize, out_image: &mut [T], out_width: usize, out_height: usize,
    x: usize, y: usize
) {
    if in_width == 0 || out_width == 0 {
        return;
    }

    for (single_in_width, single_out_width) in in_image
        .chunks_exact(in_width)
        .skip(y)
        .take(out_height)
        .zip(out_image.chunks_exact_mut(out_width))
    {
        if let Some(v) = single_in_width.get(x..x + out_width) {
            single_out_width.copy_from_slice(v);
        }
    }
}
