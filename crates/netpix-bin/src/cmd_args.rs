/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgGroup, Command};

use crate::cmd_args::arg_parsers::IChannel;

pub mod arg_parsers;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("netpix")
        .about("Apply a single transform to a Netpbm (P3/P6) image")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input file to read data from")
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .value_name("BASENAME")
            .help("Output basename, .ppm or .pgm is appended")
            .value_parser(value_parser!(PathBuf))
            .required_unless_present_any(["in-place", "probe"]))
        .arg(Arg::new("in-place")
            .long("in-place")
            .action(ArgAction::SetTrue)
            .conflicts_with("out")
            .help_heading("OUTPUT")
            .help("Write the result back to the input file"))
        .arg(Arg::new("ascii")
            .long("ascii")
            .action(ArgAction::SetTrue)
            .help_heading("OUTPUT")
            .help("Write samples as decimal text (P3/P2)"))
        .arg(Arg::new("binary")
            .long("binary")
            .action(ArgAction::SetTrue)
            .conflicts_with("ascii")
            .help_heading("OUTPUT")
            .help("Write samples as raw bytes (P6/P5)")
            .long_help("Write samples as raw bytes (P6/P5).\nWithout --ascii or --binary the encoding of the input is kept"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print header information of the input as JSON and exit"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("DECODER")
            .help("Maximum width of an image the decoder accepts")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("DECODER")
            .help("Maximum height of an image the decoder accepts")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("DECODER")
            .help("Reject samples outside 0..=255 and max values other than 255"))
        .group(ArgGroup::new("operations").multiple(false))
        .args(add_operations())
}

#[rustfmt::skip]
fn add_operations() -> [Arg; 13] {
    [
        Arg::new("brighten")
            .long("brighten")
            .value_name("N")
            .help_heading("OPERATIONS")
            .help("Add N to every sample, negative values darken")
            .allow_hyphen_values(true)
            .value_parser(value_parser!(i32))
            .group("operations"),
        Arg::new("negate")
            .long("negate")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Replace every sample with 255 minus its value")
            .group("operations"),
        Arg::new("grayscale")
            .long("grayscale")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Convert the image to grayscale, written as P2/P5")
            .group("operations"),
        Arg::new("contrast")
            .long("contrast")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Grayscale then stretch the gray range to 0..=255")
            .group("operations"),
        Arg::new("sharpen")
            .long("sharpen")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Sharpen the image, border pixels become black")
            .group("operations"),
        Arg::new("smooth")
            .long("smooth")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Average every pixel with its 3x3 neighbourhood, border pixels become black")
            .group("operations"),
        Arg::new("flip-x")
            .long("flip-x")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Swap the top and bottom of the image")
            .group("operations"),
        Arg::new("flip-y")
            .long("flip-y")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Swap the left and right of the image")
            .group("operations"),
        Arg::new("rotate-cw")
            .long("rotate-cw")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Rotate 90 degrees clockwise")
            .group("operations"),
        Arg::new("rotate-ccw")
            .long("rotate-ccw")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Rotate 90 degrees counter clockwise")
            .group("operations"),
        Arg::new("icon")
            .long("icon")
            .value_names(["HEIGHT", "WIDTH", "ROW", "COL"])
            .num_args(4)
            .help_heading("OPERATIONS")
            .help("Cut out a HEIGHT x WIDTH sub-image starting at ROW, COL")
            .long_help("Cut out a HEIGHT x WIDTH sub-image starting at ROW, COL.\nRegions reaching past the image edge are shifted back inside")
            .value_parser(value_parser!(usize))
            .group("operations"),
        Arg::new("remove")
            .long("remove")
            .value_name("CHANNEL")
            .help_heading("OPERATIONS")
            .help("Zero out one color channel")
            .value_parser(value_parser!(IChannel))
            .group("operations"),
        Arg::new("fill")
            .long("fill")
            .value_names(["ROW", "COL", "R", "G", "B"])
            .num_args(5)
            .help_heading("OPERATIONS")
            .help("Flood fill the region around ROW, COL with the color R G B")
            .value_parser(value_parser!(usize))
            .group("operations")
    ]
}
