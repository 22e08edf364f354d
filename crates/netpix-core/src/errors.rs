/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible while creating or manipulating a pixel buffer
use core::fmt::{Debug, Display, Formatter};

use crate::colorspace::ColorSpace;

/// All errors that can occur while allocating a buffer
/// or running an operation on it.
pub enum ImageErrors {
    /// Planes of `rows` x `cols` samples could not be allocated
    AllocationError(usize, usize),
    /// Operation expected a colorspace but found another
    WrongColorspace(ColorSpace, ColorSpace),
    /// Plane index is not present in a buffer of the given colorspace
    ChannelNotPresent(usize, ColorSpace),
    /// A numeric operation has no defined result, e.g. a division by zero
    ArithmeticError(&'static str),
    /// A coordinate `(row, col)` lies outside an image of `(rows, cols)`
    OutOfBounds((usize, usize), (usize, usize)),
    /// A plane length does not match the buffer dimensions
    DimensionsMisMatch(usize, usize)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AllocationError(rows, cols) => {
                writeln!(f, "Could not allocate planes for a {rows}x{cols} image")
            }
            Self::WrongColorspace(expected, found) => {
                writeln!(f, "Expected {expected:?} colorspace but found {found:?}")
            }
            Self::ChannelNotPresent(index, colorspace) => {
                writeln!(
                    f,
                    "Channel {index} is not present in an image with {colorspace:?} colorspace"
                )
            }
            Self::ArithmeticError(reason) => writeln!(f, "Arithmetic error: {reason}"),
            Self::OutOfBounds((row, col), (rows, cols)) => {
                writeln!(
                    f,
                    "Coordinate ({row},{col}) is outside an image with {rows} rows and {cols} columns"
                )
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(f, "Dimensions mismatch, expected {expected} but found {found}")
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ImageErrors {}
