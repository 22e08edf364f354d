/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use netpix_core::buffer::PixelBuffer;
use netpix_core::colorspace::Channel;
use netpix_core::errors::ImageErrors;

use crate::traits::OperationsTrait;

/// Zero out every sample of one color plane
///
/// The plane itself stays, so the image keeps its colorspace.
#[derive(Copy, Clone, Debug)]
pub struct RemoveChannel {
    channel: Channel
}

impl RemoveChannel {
    #[must_use]
    pub fn new(channel: Channel) -> RemoveChannel {
        RemoveChannel { channel }
    }
}

impl OperationsTrait for RemoveChannel {
    fn name(&self) -> &'static str {
        "Remove channel"
    }

    fn execute_impl(&self, image: &mut PixelBuffer) -> Result<(), ImageErrors> {
        image.channel_mut(self.channel)?.fill(0);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use netpix_core::buffer::PixelBuffer;
    use netpix_core::colorspace::{Channel, ColorSpace};
    use netpix_core::errors::ImageErrors;

    use crate::remove_channel::RemoveChannel;
    use crate::traits::OperationsTrait;

    #[test]
    fn only_the_chosen_plane_is_zeroed() {
        let mut image = PixelBuffer::fill([10, 20, 30], 3, 3, ColorSpace::RGB).unwrap();

        RemoveChannel::new(Channel::Green).execute(&mut image).unwrap();

        assert_eq!(image.pixel(2, 1), [10, 0, 30]);
        assert_eq!(image.colorspace(), ColorSpace::RGB);
    }

    #[test]
    fn missing_plane_is_an_error() {
        let mut image = PixelBuffer::fill([10, 0, 0], 3, 3, ColorSpace::Luma).unwrap();

        assert!(matches!(
            RemoveChannel::new(Channel::Blue).execute(&mut image),
            Err(ImageErrors::ChannelNotPresent(2, ColorSpace::Luma))
        ));
    }
}
