/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Flood fill
//!
//! Replaces the 4-connected region of pixels sharing the color of the
//! start pixel with a new color. Neighbours are visited up, right, down
//! then left using an explicit worklist, so large regions cannot exhaust
//! the call stack.
use log::trace;
use netpix_core::buffer::PixelBuffer;
use netpix_core::errors::ImageErrors;

use crate::traits::OperationsTrait;

/// Fill the region connected to `(row, col)` with `color`
///
/// For grayscale images only `color[0]` is used.
#[derive(Copy, Clone, Debug)]
pub struct FloodFill {
    row:   usize,
    col:   usize,
    color: [u8; 3]
}

impl FloodFill {
    #[must_use]
    pub fn new(row: usize, col: usize, color: [u8; 3]) -> FloodFill {
        FloodFill { row, col, color }
    }
}

impl OperationsTrait for FloodFill {
    fn name(&self) -> &'static str {
        "Flood fill"
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors> {
        let filled = flood_fill(image, self.row, self.col, self.color)?;

        trace!("Flood fill replaced {filled} pixels");

        Ok(())
    }
}

/// Flood fill `image` starting at `(row, col)`
///
/// Returns the number of pixels that changed color. Pixel colors are
/// compared on the planes the image has.
///
/// # Errors
/// [`ImageErrors::OutOfBounds`] if the start pixel is outside the image
pub fn flood_fill(
    image: &mut PixelBuffer, row: usize, col: usize, color: [u8; 3]
) -> Result<usize, ImageErrors> {
    let (rows, cols) = image.dimensions();

    if !image.in_bounds(row, col) {
        return Err(ImageErrors::OutOfBounds((row, col), (rows, cols)));
    }
    let components = image.colorspace().num_components();
    let same = |a: [u8; 3], b: [u8; 3]| a[..components] == b[..components];

    let start = image.pixel(row, col);

    if same(start, color) {
        return Ok(0);
    }
    let mut filled = 0;
    let mut stack = vec![(row, col)];

    while let Some((r, c)) = stack.pop() {
        // already filled pixels no longer match the start color
        if !same(image.pixel(r, c), start) {
            continue;
        }
        image.set_pixel(r, c, color);
        filled += 1;

        // pushed in reverse so the pixel above is visited first
        if c > 0 {
            stack.push((r, c - 1));
        }
        if r + 1 < rows {
            stack.push((r + 1, c));
        }
        if c + 1 < cols {
            stack.push((r, c + 1));
        }
        if r > 0 {
            stack.push((r - 1, c));
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use netpix_core::buffer::PixelBuffer;
    use netpix_core::colorspace::ColorSpace;
    use netpix_core::errors::ImageErrors;

    use crate::flood_fill::flood_fill;

    const WHITE: [u8; 3] = [255; 3];
    const BLACK: [u8; 3] = [0; 3];
    const RED: [u8; 3] = [255, 0, 0];

    /// A white image with a black vertical wall in column 2
    fn walled() -> PixelBuffer {
        PixelBuffer::from_fn(4, 5, ColorSpace::RGB, |_, c| if c == 2 { BLACK } else { WHITE }).unwrap()
    }

    #[test]
    fn fill_stops_at_other_colors() {
        let mut image = walled();

        assert_eq!(flood_fill(&mut image, 1, 0, RED).unwrap(), 8);

        for row in 0..4 {
            assert_eq!(image.pixel(row, 1), RED);
            assert_eq!(image.pixel(row, 2), BLACK);
            assert_eq!(image.pixel(row, 3), WHITE);
        }
    }

    #[test]
    fn diagonal_pixels_are_not_connected() {
        let mut image = PixelBuffer::from_fn(2, 2, ColorSpace::RGB, |r, c| {
            if r == c {
                WHITE
            } else {
                BLACK
            }
        })
        .unwrap();

        assert_eq!(flood_fill(&mut image, 0, 0, RED).unwrap(), 1);
        assert_eq!(image.pixel(1, 1), WHITE);
    }

    #[test]
    fn same_color_is_a_no_op() {
        let mut image = walled();
        let copy = image.clone();

        assert_eq!(flood_fill(&mut image, 0, 0, WHITE).unwrap(), 0);
        assert_eq!(image, copy);
    }

    #[test]
    fn whole_image_fill() {
        let mut image = PixelBuffer::fill(WHITE, 50, 60, ColorSpace::RGB).unwrap();

        assert_eq!(flood_fill(&mut image, 49, 59, RED).unwrap(), 3000);
        assert!(image.channels()[0].iter().all(|x| *x == 255));
        assert!(image.channels()[1].iter().all(|x| *x == 0));
    }

    #[test]
    fn grayscale_compares_one_plane() {
        let mut image = PixelBuffer::fill([7; 3], 3, 3, ColorSpace::Luma).unwrap();

        // green and blue are ignored for gray images
        assert_eq!(flood_fill(&mut image, 0, 0, [7, 1, 2]).unwrap(), 0);
        assert_eq!(flood_fill(&mut image, 0, 0, [9, 1, 2]).unwrap(), 9);
        assert_eq!(image.pixel(2, 2), [9; 3]);
    }

    #[test]
    fn start_outside_is_out_of_bounds() {
        let mut image = walled();

        assert!(matches!(
            flood_fill(&mut image, 0, 5, RED),
            Err(ImageErrors::OutOfBounds((0, 5), (4, 5)))
        ));
    }
}
