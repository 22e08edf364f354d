/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{info, trace};
use netpix_core::colorspace::ColorSpace;
use netpix_ppm::PPMVersion;

use crate::cmd_parsers::get_decoder_options;
use crate::cmd_parsers::global_options::CmdOptions;
use crate::cmd_parsers::operations::parse_operation;
use crate::errors::AppErrors;
use crate::file_io::{write_image, NetpixFile};

/// Append the conventional extension of `version` to `basename`
///
/// The extension is appended, not substituted, so `a.b` becomes `a.b.ppm`.
pub(crate) fn output_path(basename: &Path, version: PPMVersion) -> PathBuf {
    let mut name = OsString::from(basename.as_os_str());

    name.push(".");
    name.push(version.extension());

    PathBuf::from(name)
}

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), AppErrors> {
    info!("Creating workflows from input");

    let in_file = args
        .get_one::<PathBuf>("in")
        .ok_or_else(|| AppErrors::Generic("No input file given".to_string()))?;

    // parse before touching the file so bad arguments fail fast
    let operation = parse_operation(args)?;

    let options = get_decoder_options(args);
    let (mut image, input_version) = NetpixFile::new(in_file.clone(), options).into_image()?;

    info!(
        "Decoded {input_version} image with {} rows and {} columns",
        image.rows(),
        image.cols()
    );

    if let Some(operation) = operation {
        info!("Running {operation:?}");
        operation.execute(&mut image)?;
    } else {
        trace!("No operation requested, only converting");
    }

    let encoding = cmd_opts.encoding.unwrap_or(input_version.encoding());

    let colorspace = match operation {
        Some(op) if op.output_colorspace_is_gray() => ColorSpace::Luma,
        _ => ColorSpace::RGB
    };
    let version = PPMVersion::for_output(colorspace, encoding);

    let out_file = if cmd_opts.in_place {
        in_file.clone()
    } else {
        let basename = args
            .get_one::<PathBuf>("out")
            .ok_or_else(|| AppErrors::Generic("No output basename given".to_string()))?;

        output_path(basename, version)
    };
    info!("Writing {version} image to {out_file:?}");

    write_image(&out_file, &image, version)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use netpix_ppm::PPMVersion;

    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::parse_options;
    use crate::errors::AppErrors;
    use crate::workflow::{create_and_exec_workflow_from_cmd, output_path};

    /// A scratch directory unique to one test
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("netpix-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn run(args: &[&str]) -> Result<(), AppErrors> {
        let mut full = vec!["netpix"];
        full.extend_from_slice(args);

        let matches = create_cmd_args().try_get_matches_from(full).unwrap();
        let options = parse_options(&matches);

        create_and_exec_workflow_from_cmd(&matches, &options)
    }

    #[test]
    fn extension_follows_format() {
        assert_eq!(output_path(Path::new("out"), PPMVersion::P5), PathBuf::from("out.pgm"));
        assert_eq!(output_path(Path::new("out"), PPMVersion::P2), PathBuf::from("out.pgm"));
        assert_eq!(output_path(Path::new("out"), PPMVersion::P3), PathBuf::from("out.ppm"));
        assert_eq!(
            output_path(Path::new("dir/img.v2"), PPMVersion::P6),
            PathBuf::from("dir/img.v2.ppm")
        );
    }

    #[test]
    fn negate_ascii_to_binary() {
        let dir = scratch_dir("negate");
        let input = dir.join("white.ppm");
        let basename = dir.join("black");

        std::fs::write(&input, "P3\n# white\n2 1\n255\n255 255 255\n255 255 255\n").unwrap();

        run(&[
            "-i",
            input.to_str().unwrap(),
            "-o",
            basename.to_str().unwrap(),
            "--binary",
            "--negate"
        ])
        .unwrap();

        let output = std::fs::read(dir.join("black.ppm")).unwrap();
        assert_eq!(output, b"P6\n# white\n2 1\n255\n\0\0\0\0\0\0");

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn grayscale_keeps_input_encoding() {
        let dir = scratch_dir("gray");
        let input = dir.join("green.ppm");
        let basename = dir.join("gray");

        std::fs::write(&input, b"P6\n1 1\n255\n\x00\xff\x00").unwrap();

        run(&[
            "-i",
            input.to_str().unwrap(),
            "-o",
            basename.to_str().unwrap(),
            "--grayscale"
        ])
        .unwrap();

        let output = std::fs::read(dir.join("gray.pgm")).unwrap();
        assert_eq!(output, b"P5\n1 1\n255\n\x99");

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn fill_in_place() {
        let dir = scratch_dir("fill");
        let input = dir.join("image.ppm");

        std::fs::write(&input, "P3\n1 2\n255\n1 2 3\n1 2 3\n").unwrap();

        run(&[
            "-i",
            input.to_str().unwrap(),
            "--in-place",
            "--fill",
            "1",
            "0",
            "9",
            "8",
            "7"
        ])
        .unwrap();

        let output = std::fs::read_to_string(&input).unwrap();
        assert_eq!(output, "P3\n1 2\n255\n9 8 7\n9 8 7\n");

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn failures_leave_no_output() {
        let dir = scratch_dir("fail");
        let input = dir.join("flat.ppm");
        let basename = dir.join("result");

        std::fs::write(&input, b"P6\n1 1\n255\n\x05\x05\x05").unwrap();

        let result = run(&[
            "-i",
            input.to_str().unwrap(),
            "-o",
            basename.to_str().unwrap(),
            "--contrast"
        ]);

        assert!(matches!(result, Err(AppErrors::Operation(_))));
        assert!(!dir.join("result.pgm").exists());

        let missing = run(&["-i", dir.join("missing.ppm").to_str().unwrap(), "-o", "x"]);
        assert!(matches!(missing, Err(AppErrors::FileOpenError(..))));

        std::fs::remove_dir_all(dir).unwrap();
    }
}
