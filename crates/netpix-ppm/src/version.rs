/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Display, Formatter};

use netpix_core::colorspace::ColorSpace;

/// How pixel samples are laid out after the header
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Encoding {
    /// Decimal text, whitespace separated
    Ascii,
    /// Raw bytes, one per sample
    Binary
}

/// Netpbm formats understood by this crate
///
/// The magic number decides both the header text and
/// how the payload is encoded.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PPMVersion {
    /// ASCII grayscale
    P2,
    /// ASCII color
    P3,
    /// Binary grayscale
    P5,
    /// Binary color
    P6
}

impl PPMVersion {
    /// Magic number written at the start of the header
    pub const fn magic(self) -> &'static str {
        match self {
            Self::P2 => "P2",
            Self::P3 => "P3",
            Self::P5 => "P5",
            Self::P6 => "P6"
        }
    }

    /// Match a magic number token
    ///
    /// All four variants are recognised here, the decoder
    /// decides which of them it accepts as input.
    pub fn from_magic(token: &[u8]) -> Option<PPMVersion> {
        match token {
            b"P2" => Some(Self::P2),
            b"P3" => Some(Self::P3),
            b"P5" => Some(Self::P5),
            b"P6" => Some(Self::P6),
            _ => None
        }
    }

    /// Pick the output format for a colorspace and encoding
    pub const fn for_output(colorspace: ColorSpace, encoding: Encoding) -> PPMVersion {
        match (colorspace, encoding) {
            (ColorSpace::RGB, Encoding::Ascii) => Self::P3,
            (ColorSpace::RGB, Encoding::Binary) => Self::P6,
            (ColorSpace::Luma, Encoding::Ascii) => Self::P2,
            (ColorSpace::Luma, Encoding::Binary) => Self::P5
        }
    }

    pub const fn encoding(self) -> Encoding {
        match self {
            Self::P2 | Self::P3 => Encoding::Ascii,
            Self::P5 | Self::P6 => Encoding::Binary
        }
    }

    pub const fn is_ascii(self) -> bool {
        matches!(self.encoding(), Encoding::Ascii)
    }

    pub const fn is_grayscale(self) -> bool {
        matches!(self, Self::P2 | Self::P5)
    }

    /// Colorspace of the samples this format stores
    pub const fn colorspace(self) -> ColorSpace {
        if self.is_grayscale() {
            ColorSpace::Luma
        } else {
            ColorSpace::RGB
        }
    }

    /// Conventional file extension, `pgm` for gray and `ppm` for color
    pub const fn extension(self) -> &'static str {
        if self.is_grayscale() {
            "pgm"
        } else {
            "ppm"
        }
    }
}

impl Display for PPMVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.magic())
    }
}
