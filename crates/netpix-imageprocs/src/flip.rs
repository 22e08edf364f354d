/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Flip filter: mirror an image around one of its axes.
//!
use netpix_core::buffer::PixelBuffer;
use netpix_core::errors::ImageErrors;

use crate::traits::OperationsTrait;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FlipDirection {
    /// Reflect the pixels around the central x-axis,
    /// the top row becomes the bottom row
    ///
    /// ```text
    ///
    ///old image     new image
    /// ┌─────────┐   ┌──────────┐
    /// │a b c d e│   │f g h i j │
    /// │f g h i j│   │a b c d e │
    /// └─────────┘   └──────────┘
    /// ```
    ///
    Horizontal,
    /// Reflect the pixels around the central y-axis,
    /// the left column becomes the right column
    ///```text
    ///old image     new image
    ///┌─────────┐   ┌──────────┐
    ///│a b c d e│   │e d c b a │
    ///│f g h i j│   │j i h g f │
    ///└─────────┘   └──────────┘
    ///```
    Vertical
}

/// Flip an image to a certain direction
pub struct Flip {
    flip_direction: FlipDirection
}

impl Flip {
    /// Create a new flip operation
    #[must_use]
    pub fn new(flip_direction: FlipDirection) -> Flip {
        Self { flip_direction }
    }
}

impl OperationsTrait for Flip {
    fn name(&self) -> &'static str {
        match self.flip_direction {
            FlipDirection::Horizontal => "Flip horizontal",
            FlipDirection::Vertical => "Flip vertical"
        }
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors> {
        let width = image.cols();

        if width == 0 {
            return Ok(());
        }
        for channel in image.channels_mut() {
            match self.flip_direction {
                FlipDirection::Horizontal => flip_rows(channel, width),
                FlipDirection::Vertical => flip_columns(channel, width)
            }
        }
        Ok(())
    }
}

/// Swap row `i` with row `height - 1 - i`
///
/// A middle row of an odd height image stays in place.
pub fn flip_rows<T: Copy + Default>(channel: &mut [T], width: usize) {
    // split the image in half, walk the top half forward
    // and the bottom half backwards
    let len = channel.len();

    let (top, bottom) = channel.split_at_mut(len / 2);

    let mut stride = vec![T::default(); width];

    for (t, b) in top
        .chunks_exact_mut(width)
        .zip(bottom.rchunks_exact_mut(width))
    {
        stride.copy_from_slice(t);
        t.copy_from_slice(b);
        b.copy_from_slice(&stride);
    }
}

/// Swap column `j` with column `width - 1 - j` in every row
pub fn flip_columns<T: Copy>(channel: &mut [T], width: usize) {
    for row in channel.chunks_exact_mut(width) {
        row.reverse();
    }
}
