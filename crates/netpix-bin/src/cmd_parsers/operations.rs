/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::debug;
use netpix_imageprocs::operations::Operation;

use crate::cmd_args::arg_parsers::IChannel;

/// Read the single operation requested on the command line
///
/// `None` means the image is only re-encoded.
pub fn parse_operation(args: &ArgMatches) -> Result<Option<Operation>, String> {
    let flags = [
        ("negate", Operation::Negate),
        ("grayscale", Operation::Grayscale),
        ("contrast", Operation::Contrast),
        ("sharpen", Operation::Sharpen),
        ("smooth", Operation::Smooth),
        ("flip-x", Operation::FlipHorizontal),
        ("flip-y", Operation::FlipVertical),
        ("rotate-cw", Operation::RotateCW),
        ("rotate-ccw", Operation::RotateCCW)
    ];

    for (name, operation) in flags {
        if args.get_flag(name) {
            debug!("Added {name} operation");
            return Ok(Some(operation));
        }
    }

    if let Some(value) = args.get_one::<i32>("brighten") {
        debug!("Added brighten operation with value {value}");
        return Ok(Some(Operation::Brighten(*value)));
    }

    if let Some(channel) = args.get_one::<IChannel>("remove") {
        debug!("Added remove channel operation for {channel:?}");
        return Ok(Some(Operation::RemoveChannel(channel.to_channel())));
    }

    if let Some(values) = args.get_many::<usize>("icon") {
        let values: Vec<usize> = values.copied().collect();

        let [height, width, row, col] = values[..] else {
            return Err(format!("--icon expects 4 values, found {}", values.len()));
        };
        debug!("Added icon operation {height}x{width} at ({row},{col})");

        return Ok(Some(Operation::Crop {
            row,
            col,
            height,
            width
        }));
    }

    if let Some(values) = args.get_many::<usize>("fill") {
        let values: Vec<usize> = values.copied().collect();

        let [row, col, r, g, b] = values[..] else {
            return Err(format!("--fill expects 5 values, found {}", values.len()));
        };
        let mut color = [0; 3];

        for (out, value) in color.iter_mut().zip([r, g, b]) {
            *out = u8::try_from(value)
                .map_err(|_| format!("Color component {value} is larger than 255"))?;
        }
        debug!("Added flood fill operation at ({row},{col}) with color {color:?}");

        return Ok(Some(Operation::FloodFill { row, col, color }));
    }
    Ok(None)
}
