/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};
use netpix_ppm::Encoding;

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    /// Output encoding, `None` keeps the encoding of the input
    pub encoding: Option<Encoding>,
    pub in_place: bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            encoding: None,
            in_place: false
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if options.get_flag("ascii") {
        info!("Writing ASCII output");
        cmd_options.encoding = Some(Encoding::Ascii);
    } else if options.get_flag("binary") {
        info!("Writing binary output");
        cmd_options.encoding = Some(Encoding::Binary);
    }

    if options.get_flag("in-place") {
        info!("Output replaces the input file");
        cmd_options.in_place = true;
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn;
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
