/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single image in memory
//!
//! An image is represented as
//!
//! - separated planes
//!     - of 8 bit samples
//!         - representing a colorspace
//!             - with the same number of rows and columns
//!
//! Each plane is a contiguous row-major vector, the sample at `(row, col)`
//! lives at `row * cols + col`.
use crate::colorspace::{Channel, ColorSpace};
use crate::errors::ImageErrors;

/// An image held as separate 8 bit planes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    rows:       usize,
    cols:       usize,
    comments:   Vec<Vec<u8>>,
    colorspace: ColorSpace,
    planes:     Vec<Vec<u8>>
}

/// Allocate a zeroed plane, reporting failure instead of aborting
fn alloc_plane(rows: usize, cols: usize) -> Result<Vec<u8>, ImageErrors> {
    let length = rows
        .checked_mul(cols)
        .ok_or(ImageErrors::AllocationError(rows, cols))?;

    let mut plane = Vec::new();

    plane
        .try_reserve_exact(length)
        .map_err(|_| ImageErrors::AllocationError(rows, cols))?;
    plane.resize(length, 0);

    Ok(plane)
}

impl PixelBuffer {
    /// Create a new zero filled buffer
    ///
    /// # Errors
    /// [`ImageErrors::AllocationError`] if `rows * cols` overflows or the
    /// planes cannot be allocated. No partially allocated buffer is returned.
    pub fn new(rows: usize, cols: usize, colorspace: ColorSpace) -> Result<PixelBuffer, ImageErrors> {
        let mut planes = Vec::with_capacity(colorspace.num_components());

        for _ in 0..colorspace.num_components() {
            planes.push(alloc_plane(rows, cols)?);
        }

        Ok(PixelBuffer {
            rows,
            cols,
            comments: vec![],
            colorspace,
            planes
        })
    }

    /// Create a buffer where every plane is filled with the matching
    /// component of `pixel`
    ///
    /// For [`ColorSpace::Luma`] only `pixel[0]` is used.
    pub fn fill(
        pixel: [u8; 3], rows: usize, cols: usize, colorspace: ColorSpace
    ) -> Result<PixelBuffer, ImageErrors> {
        let mut buffer = PixelBuffer::new(rows, cols, colorspace)?;

        for (plane, value) in buffer.planes.iter_mut().zip(pixel) {
            plane.fill(value);
        }
        Ok(buffer)
    }

    /// Create a buffer from a function
    ///
    /// The function receives `(row, col)` and returns the
    /// red, green and blue samples for that position. For
    /// grayscale buffers only the first sample is kept.
    pub fn from_fn<F>(
        rows: usize, cols: usize, colorspace: ColorSpace, func: F
    ) -> Result<PixelBuffer, ImageErrors>
    where
        F: Fn(usize, usize) -> [u8; 3]
    {
        let mut buffer = PixelBuffer::new(rows, cols, colorspace)?;

        for row in 0..rows {
            for col in 0..cols {
                buffer.set_pixel(row, col, func(row, col));
            }
        }
        Ok(buffer)
    }

    /// Number of rows (image height)
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (image width)
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Return `(rows, cols)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    /// Header comment lines, each including its leading `#`
    /// but without a line break.
    ///
    /// Lines are raw bytes, they need not be valid UTF-8.
    pub fn comments(&self) -> &[Vec<u8>] {
        &self.comments
    }

    pub fn comments_mut(&mut self) -> &mut Vec<Vec<u8>> {
        &mut self.comments
    }

    /// Whether `(row, col)` addresses a sample inside the image
    pub const fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Return a reference to a single plane
    ///
    /// # Errors
    /// [`ImageErrors::ChannelNotPresent`] if the colorspace has no such plane
    pub fn channel(&self, channel: Channel) -> Result<&[u8], ImageErrors> {
        self.planes
            .get(channel.index())
            .map(Vec::as_slice)
            .ok_or(ImageErrors::ChannelNotPresent(channel.index(), self.colorspace))
    }

    pub fn channel_mut(&mut self, channel: Channel) -> Result<&mut [u8], ImageErrors> {
        let colorspace = self.colorspace;

        self.planes
            .get_mut(channel.index())
            .map(Vec::as_mut_slice)
            .ok_or(ImageErrors::ChannelNotPresent(channel.index(), colorspace))
    }

    /// Return references to all planes present in the buffer
    pub fn channels(&self) -> &[Vec<u8>] {
        &self.planes
    }

    /// Return a mutable view into the buffer's planes
    pub fn channels_mut(&mut self) -> &mut [Vec<u8>] {
        &mut self.planes
    }

    /// Return the samples at `(row, col)` as `[r, g, b]`
    ///
    /// Grayscale buffers return the gray value replicated three times.
    ///
    /// # Panics
    /// If the coordinate is out of bounds
    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        let offset = row * self.cols + col;

        match self.colorspace {
            ColorSpace::RGB => [
                self.planes[0][offset],
                self.planes[1][offset],
                self.planes[2][offset]
            ],
            ColorSpace::Luma => [self.planes[0][offset]; 3]
        }
    }

    /// Set the samples at `(row, col)`
    ///
    /// Grayscale buffers only store `pixel[0]`.
    ///
    /// # Panics
    /// If the coordinate is out of bounds
    pub fn set_pixel(&mut self, row: usize, col: usize, pixel: [u8; 3]) {
        let offset = row * self.cols + col;

        for (plane, value) in self.planes.iter_mut().zip(pixel) {
            plane[offset] = value;
        }
    }

    /// Swap out every plane and the dimensions in one step
    ///
    /// Used by operations that change the image size.
    ///
    /// # Errors
    /// [`ImageErrors::DimensionsMisMatch`] if the plane count does not match
    /// the colorspace or a plane length is not `rows * cols`. The buffer is
    /// left untouched on error.
    pub fn replace_planes(
        &mut self, rows: usize, cols: usize, planes: Vec<Vec<u8>>
    ) -> Result<(), ImageErrors> {
        if planes.len() != self.colorspace.num_components() {
            return Err(ImageErrors::DimensionsMisMatch(
                self.colorspace.num_components(),
                planes.len()
            ));
        }
        let expected = rows
            .checked_mul(cols)
            .ok_or(ImageErrors::AllocationError(rows, cols))?;

        if let Some(plane) = planes.iter().find(|x| x.len() != expected) {
            return Err(ImageErrors::DimensionsMisMatch(expected, plane.len()));
        }
        self.rows = rows;
        self.cols = cols;
        self.planes = planes;

        Ok(())
    }

    /// Change the colorspace, keeping only the planes the new
    /// colorspace uses.
    ///
    /// # Errors
    /// [`ImageErrors::WrongColorspace`] when widening, e.g. from Luma to RGB,
    /// since the missing planes have no defined content.
    pub fn narrow_colorspace(&mut self, colorspace: ColorSpace) -> Result<(), ImageErrors> {
        if colorspace.num_components() > self.planes.len() {
            return Err(ImageErrors::WrongColorspace(self.colorspace, colorspace));
        }
        self.planes.truncate(colorspace.num_components());
        self.colorspace = colorspace;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::buffer::PixelBuffer;
    use crate::colorspace::{Channel, ColorSpace};
    use crate::errors::ImageErrors;

    #[test]
    fn new_buffer_is_zeroed() {
        let buffer = PixelBuffer::new(3, 4, ColorSpace::RGB).unwrap();

        assert_eq!(buffer.dimensions(), (3, 4));
        assert_eq!(buffer.channels().len(), 3);
        assert!(buffer.channels().iter().all(|x| x.len() == 12));
        assert!(buffer.channels().iter().flatten().all(|x| *x == 0));
    }

    #[test]
    fn overflowing_dimensions_fail_allocation() {
        let result = PixelBuffer::new(usize::MAX, 2, ColorSpace::RGB);

        assert!(matches!(result, Err(ImageErrors::AllocationError(_, 2))));
    }

    #[test]
    fn pixel_access_is_row_major() {
        let buffer = PixelBuffer::from_fn(2, 3, ColorSpace::RGB, |row, col| {
            [row as u8, col as u8, (row * 3 + col) as u8]
        })
        .unwrap();

        assert_eq!(buffer.pixel(1, 2), [1, 2, 5]);
        assert_eq!(buffer.channel(Channel::Blue).unwrap(), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn luma_buffer_has_no_green_plane() {
        let buffer = PixelBuffer::fill([7, 8, 9], 2, 2, ColorSpace::Luma).unwrap();

        assert_eq!(buffer.pixel(0, 0), [7, 7, 7]);
        assert!(matches!(
            buffer.channel(Channel::Green),
            Err(ImageErrors::ChannelNotPresent(1, ColorSpace::Luma))
        ));
    }

    #[test]
    fn replace_planes_rejects_bad_lengths() {
        let mut buffer = PixelBuffer::new(2, 2, ColorSpace::Luma).unwrap();

        assert!(buffer.replace_planes(3, 1, vec![vec![0; 2]]).is_err());
        assert_eq!(buffer.dimensions(), (2, 2));

        buffer.replace_planes(3, 1, vec![vec![1; 3]]).unwrap();
        assert_eq!(buffer.dimensions(), (3, 1));
    }

    #[test]
    fn equality_covers_samples_and_comments() {
        let a = PixelBuffer::fill([1, 2, 3], 2, 2, ColorSpace::RGB).unwrap();
        let mut b = a.clone();

        assert_eq!(a, b);

        b.comments_mut().push(b"# edited".to_vec());
        assert_ne!(a, b);

        let mut c = a.clone();
        c.set_pixel(1, 1, [3, 2, 1]);
        assert_ne!(a, c);
    }
}
