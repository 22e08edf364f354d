/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image colorspace information

/// Colorspaces a pixel buffer can be in
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ColorSpace {
    /// Red, Green, Blue
    RGB,
    /// A single gray plane
    Luma
}

impl ColorSpace {
    /// Number of color planes present for a certain colorspace
    ///
    /// E.g. RGB returns 3 since it contains R,G and B colors to make up a pixel
    pub const fn num_components(&self) -> usize {
        match self {
            Self::RGB => 3,
            Self::Luma => 1
        }
    }
}

/// Index of a single color plane inside an RGB buffer
///
/// For grayscale buffers, [`Channel::Red`] addresses the gray plane.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Channel {
    Red,
    Green,
    Blue
}

impl Channel {
    /// Position of this channel in the buffer's plane list
    pub const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2
        }
    }
}
