/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::ValueEnum;
use netpix_core::colorspace::Channel;

/// Channel names accepted on the command line
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IChannel {
    Red,
    Green,
    Blue
}

impl IChannel {
    pub const fn to_channel(self) -> Channel {
        match self {
            IChannel::Red => Channel::Red,
            IChannel::Green => Channel::Green,
            IChannel::Blue => Channel::Blue
        }
    }
}

impl ValueEnum for IChannel {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Red, Self::Green, Self::Blue]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Red => PossibleValue::new("red").alias("r"),
            Self::Green => PossibleValue::new("green").alias("g"),
            Self::Blue => PossibleValue::new("blue").alias("b")
        })
    }
}
