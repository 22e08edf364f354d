/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use netpix_core::buffer::PixelBuffer;
use netpix_core::options::DecoderOptions;
use netpix_ppm::{PPMDecoder, PPMEncoder, PPMVersion};

use crate::errors::AppErrors;

/// An image file on disk waiting to be decoded
pub struct NetpixFile {
    file_path: PathBuf,
    options:   DecoderOptions
}

impl NetpixFile {
    pub fn new(file_path: PathBuf, options: DecoderOptions) -> NetpixFile {
        NetpixFile { file_path, options }
    }

    /// Read the whole file into memory
    pub fn read(&self) -> Result<Vec<u8>, AppErrors> {
        let data = std::fs::read(&self.file_path)
            .map_err(|err| AppErrors::FileOpenError(self.file_path.clone(), err))?;

        info!("Read {} bytes from {:?}", data.len(), self.file_path);

        Ok(data)
    }

    /// Decode the file, returning the image and the format it was stored in
    pub fn into_image(self) -> Result<(PixelBuffer, PPMVersion), AppErrors> {
        let data = self.read()?;

        let mut decoder = PPMDecoder::new_with_options(self.options, &data);
        let image = decoder.decode()?;

        let version = decoder
            .version()
            .ok_or_else(|| AppErrors::Generic("Decoder did not report a format".to_string()))?;

        Ok((image, version))
    }
}

/// Encode `image` as `version` into a new file at `path`
///
/// Returns the number of bytes written.
pub fn write_image(path: &Path, image: &PixelBuffer, version: PPMVersion) -> Result<usize, AppErrors> {
    let file = File::create(path).map_err(|err| AppErrors::FileOpenError(path.to_path_buf(), err))?;

    let mut buf_writer = BufWriter::new(file);

    let size = PPMEncoder::new(&mut buf_writer).encode(image, version)?;

    buf_writer
        .flush()
        .map_err(|err| AppErrors::Encode(err.into()))?;

    info!("Wrote {size} bytes to {path:?}");

    Ok(size)
}
