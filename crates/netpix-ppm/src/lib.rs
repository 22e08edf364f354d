/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A Netpbm decoder and encoder
//!
//! The decoder reads P3 (ASCII) and P6 (binary) color images, header
//! comments included, into a [`PixelBuffer`](netpix_core::buffer::PixelBuffer).
//!
//! The encoder writes a buffer back as P3, P6, P2 (ASCII gray) or
//! P5 (binary gray).
//!
//! # Example
//! - Decode an ASCII image and write it back as binary
//! ```
//! use netpix_ppm::{PPMDecoder, PPMEncoder, PPMVersion};
//!
//! let mut decoder = PPMDecoder::new(b"P3\n1 1\n255\n10 20 30\n");
//! let image = decoder.decode().unwrap();
//!
//! let mut output = vec![];
//! PPMEncoder::new(&mut output).encode(&image, PPMVersion::P6).unwrap();
//!
//! assert_eq!(output, b"P6\n1 1\n255\n\x0a\x14\x1e");
//! ```
#![warn(clippy::correctness, clippy::perf, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

pub use decoder::{PPMDecodeErrors, PPMDecoder};
pub use encoder::{encode_to_vec, PPMEncodeErrors, PPMEncoder};
pub use version::{Encoding, PPMVersion};

mod decoder;
mod encoder;
mod version;
