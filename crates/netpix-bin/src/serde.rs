/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use netpix_ppm::PPMVersion;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Header facts of a single file, printed by `--probe`
pub struct Metadata<'a> {
    file:     &'a Path,
    size:     u64,
    version:  PPMVersion,
    rows:     usize,
    cols:     usize,
    comments: &'a [Vec<u8>]
}

impl<'a> Metadata<'a> {
    pub fn new(
        file: &'a Path, size: u64, version: PPMVersion, dimensions: (usize, usize),
        comments: &'a [Vec<u8>]
    ) -> Metadata<'a> {
        Metadata {
            file,
            size,
            version,
            rows: dimensions.0,
            cols: dimensions.1,
            comments
        }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // json strings must be valid UTF-8
        let comments: Vec<_> = self
            .comments
            .iter()
            .map(|x| String::from_utf8_lossy(x))
            .collect();

        let mut state = serializer.serialize_struct("ImageMetadata", 8)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("format", self.version.magic())?;
        state.serialize_field("encoding", if self.version.is_ascii() { "ascii" } else { "binary" })?;
        state.serialize_field("colorspace", &self.version.colorspace())?;
        state.serialize_field("width", &self.cols)?;
        state.serialize_field("height", &self.rows)?;
        state.serialize_field("comments", &comments)?;

        state.end()
    }
}
