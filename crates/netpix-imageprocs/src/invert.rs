/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use netpix_core::buffer::PixelBuffer;
use netpix_core::errors::ImageErrors;

use crate::traits::OperationsTrait;

/// Invert (negate) an image
#[derive(Default, Copy, Clone)]
pub struct Invert;

impl Invert {
    #[must_use]
    pub fn new() -> Invert {
        Self
    }
}

impl OperationsTrait for Invert {
    fn name(&self) -> &'static str {
        "Invert"
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors> {
        for channel in image.channels_mut() {
            invert(channel);
        }
        Ok(())
    }
}

///Invert a pixel
///
/// The formula for inverting a 8 bit pixel
///  is `pixel[x,y] = 255-pixel[x,y]`
pub fn invert(in_image: &mut [u8]) {
    in_image.iter_mut().for_each(|x| *x = u8::MAX - *x);
}

#[cfg(test)]
mod tests {
    use nanorand::{Rng, WyRand};

    use crate::invert::invert;

    #[test]
    fn invert_twice_is_identity() {
        let mut data = vec![0_u8; 1000];
        WyRand::new().fill(&mut data);

        let original = data.clone();

        invert(&mut data);
        assert!(data.iter().zip(&original).all(|(a, b)| u16::from(*a) + u16::from(*b) == 255));

        invert(&mut data);
        assert_eq!(data, original);
    }
}
