/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel transforms for `netpix`
//!
//! Every transform works on a [`PixelBuffer`](netpix_core::buffer::PixelBuffer)
//! in place and implements [`OperationsTrait`](traits::OperationsTrait).
//! The [`Operation`](operations::Operation) enum picks one of them at runtime.
//!
//! # Example
//! - Negate a white image
//! ```
//! use netpix_core::buffer::PixelBuffer;
//! use netpix_core::colorspace::ColorSpace;
//! use netpix_imageprocs::invert::Invert;
//! use netpix_imageprocs::traits::OperationsTrait;
//!
//! let mut image = PixelBuffer::fill([255; 3], 2, 2, ColorSpace::RGB).unwrap();
//! Invert::new().execute(&mut image).unwrap();
//!
//! assert!(image.channels().iter().flatten().all(|x| *x == 0));
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::panic
)]
#![allow(
    clippy::similar_names,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod brighten;
pub mod contrast;
pub mod convolve;
pub mod crop;
pub mod flip;
pub mod flood_fill;
pub mod grayscale;
pub mod invert;
pub mod operations;
pub mod remove_channel;
pub mod rotate;
pub mod traits;
pub mod utils;
