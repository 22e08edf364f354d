/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::path::PathBuf;

use netpix_core::errors::ImageErrors;
use netpix_ppm::{PPMDecodeErrors, PPMEncodeErrors};

/// Everything that can stop the command line tool
pub enum AppErrors {
    FileOpenError(PathBuf, io::Error),
    Decode(PPMDecodeErrors),
    Encode(PPMEncodeErrors),
    Operation(ImageErrors),
    Generic(String)
}

impl Debug for AppErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileOpenError(path, err) => {
                writeln!(f, "Could not open {path:?}, reason: {err}")
            }
            Self::Decode(err) => writeln!(f, "Decoding failed: {err:?}"),
            Self::Encode(err) => writeln!(f, "Encoding failed: {err:?}"),
            Self::Operation(err) => writeln!(f, "Operation failed: {err:?}"),
            Self::Generic(reason) => writeln!(f, "{reason}")
        }
    }
}

impl Display for AppErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for AppErrors {}

impl From<PPMDecodeErrors> for AppErrors {
    fn from(err: PPMDecodeErrors) -> Self {
        AppErrors::Decode(err)
    }
}

impl From<PPMEncodeErrors> for AppErrors {
    fn from(err: PPMEncodeErrors) -> Self {
        AppErrors::Encode(err)
    }
}

impl From<ImageErrors> for AppErrors {
    fn from(err: ImageErrors) -> Self {
        AppErrors::Operation(err)
    }
}

impl From<String> for AppErrors {
    fn from(reason: String) -> Self {
        AppErrors::Generic(reason)
    }
}
