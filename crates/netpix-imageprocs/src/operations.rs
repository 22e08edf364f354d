/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Runtime selection of a single transform
use netpix_core::buffer::PixelBuffer;
use netpix_core::colorspace::Channel;
use netpix_core::errors::ImageErrors;

use crate::brighten::Brighten;
use crate::contrast::StretchContrast;
use crate::convolve::Convolve;
use crate::crop::Crop;
use crate::flip::{Flip, FlipDirection};
use crate::flood_fill::FloodFill;
use crate::grayscale::Grayscale;
use crate::invert::Invert;
use crate::remove_channel::RemoveChannel;
use crate::rotate::{Rotate, RotateDirection};
use crate::traits::OperationsTrait;

/// A transform picked by the user
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Operation {
    /// Add a constant to every sample
    Brighten(i32),
    Negate,
    Grayscale,
    /// Grayscale followed by a contrast stretch
    Contrast,
    Sharpen,
    Smooth,
    /// Top and bottom swap
    FlipHorizontal,
    /// Left and right swap
    FlipVertical,
    RotateCW,
    RotateCCW,
    Crop {
        row:    usize,
        col:    usize,
        height: usize,
        width:  usize
    },
    RemoveChannel(Channel),
    FloodFill {
        row:   usize,
        col:   usize,
        color: [u8; 3]
    }
}

impl Operation {
    /// The operations to run, in order, to carry out this transform
    pub fn operations(&self) -> Vec<Box<dyn OperationsTrait>> {
        match *self {
            Self::Brighten(value) => vec![Box::new(Brighten::new(value))],
            Self::Negate => vec![Box::new(Invert::new())],
            Self::Grayscale => vec![Box::new(Grayscale::new())],
            Self::Contrast => vec![Box::new(Grayscale::new()), Box::new(StretchContrast::new())],
            Self::Sharpen => vec![Box::new(Convolve::sharpen())],
            Self::Smooth => vec![Box::new(Convolve::smooth())],
            Self::FlipHorizontal => vec![Box::new(Flip::new(FlipDirection::Horizontal))],
            Self::FlipVertical => vec![Box::new(Flip::new(FlipDirection::Vertical))],
            Self::RotateCW => vec![Box::new(Rotate::new(RotateDirection::Clockwise))],
            Self::RotateCCW => vec![Box::new(Rotate::new(RotateDirection::CounterClockwise))],
            Self::Crop {
                row,
                col,
                height,
                width
            } => vec![Box::new(Crop::new(row, col, height, width))],
            Self::RemoveChannel(channel) => vec![Box::new(RemoveChannel::new(channel))],
            Self::FloodFill { row, col, color } => vec![Box::new(FloodFill::new(row, col, color))]
        }
    }

    /// Apply the transform to `image`
    ///
    /// Stops at the first failing step, the image may then hold
    /// the result of the steps before it.
    pub fn execute(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors> {
        for operation in self.operations() {
            operation.execute(image)?;
        }
        Ok(())
    }

    /// Whether the result should be written as a gray format
    pub const fn output_colorspace_is_gray(&self) -> bool {
        matches!(self, Self::Grayscale | Self::Contrast)
    }
}
