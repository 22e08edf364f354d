/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all netpix libraries
//!
//! This crate provides the pieces the codec and the image
//! processing routines agree on
//!
//! - A planar pixel buffer holding 8 bit samples
//! - Colorspace information for that buffer
//! - A byte reader for parsing header text and raw payloads
//! - Decoder options
//! - Errors raised while allocating or manipulating a buffer
//!
//! # Features
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
#![warn(clippy::correctness, clippy::perf, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

pub mod buffer;
pub mod bytestream;
pub mod colorspace;
pub mod errors;
pub mod options;
pub mod serde;
