/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::ArgMatches;
use netpix_core::options::DecoderOptions;
use netpix_ppm::PPMDecoder;

use crate::errors::AppErrors;
use crate::file_io::NetpixFile;
use crate::serde::Metadata;

/// Probe the input file, extract header metadata, and print it to standard output.
pub fn probe_input_files(args: &ArgMatches) -> Result<(), AppErrors> {
    let in_file = args
        .get_one::<PathBuf>("in")
        .ok_or_else(|| AppErrors::Generic("No input file given".to_string()))?;

    // only headers are read so size limits don't matter
    let options = DecoderOptions::default()
        .set_max_height(usize::MAX)
        .set_max_width(usize::MAX);

    let data = NetpixFile::new(in_file.clone(), options).read()?;

    let mut decoder = PPMDecoder::new_with_options(options, &data);
    decoder.decode_headers()?;

    if let (Some(version), Some(dimensions)) = (decoder.version(), decoder.dimensions()) {
        let metadata = Metadata::new(
            in_file,
            data.len() as u64,
            version,
            dimensions,
            decoder.comments()
        );
        let json = serde_json::to_string_pretty(&metadata)
            .map_err(|err| AppErrors::Generic(err.to_string()))?;

        println!("{json}");
    }
    Ok(())
}
