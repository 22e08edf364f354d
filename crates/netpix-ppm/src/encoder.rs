/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::io::Write;

use log::debug;
use netpix_core::buffer::PixelBuffer;
use netpix_core::colorspace::ColorSpace;

use crate::version::PPMVersion;

/// Errors occurring during encoding
pub enum PPMEncodeErrors {
    /// A color format was requested for a buffer without color planes
    UnsupportedColorspace(ColorSpace, PPMVersion),
    IoErrors(io::Error)
}

impl From<io::Error> for PPMEncodeErrors {
    fn from(err: io::Error) -> Self {
        PPMEncodeErrors::IoErrors(err)
    }
}

impl Debug for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PPMEncodeErrors::UnsupportedColorspace(colorspace, version) => {
                writeln!(f, "Cannot write a {colorspace:?} image as {version}")
            }
            PPMEncodeErrors::IoErrors(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PPMEncodeErrors {}

/// A PPM encoder
///
/// Writes P2, P3, P5 and P6 images with 255 as the max value.
pub struct PPMEncoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> PPMEncoder<'a, W> {
    /// Create a new PPM encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> PPMEncoder<'a, W> {
        Self { writer }
    }

    /// Write the magic number, comments, dimensions and max value
    fn write_headers(&mut self, image: &PixelBuffer, version: PPMVersion) -> Result<usize, PPMEncodeErrors> {
        let mut header = format!("{version}\n").into_bytes();

        for comment in image.comments() {
            header.extend_from_slice(comment);
            header.push(b'\n');
        }
        writeln!(header, "{} {}\n255", image.cols(), image.rows())?;

        self.writer.write_all(&header)?;

        Ok(header.len())
    }

    /// Encode `image` in the format given by `version`
    ///
    /// Gray formats take samples from the first plane, so an RGB
    /// buffer written as P2 or P5 stores its red plane.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    /// - [`PPMEncodeErrors::UnsupportedColorspace`] if a grayscale buffer
    ///   is written as P3 or P6
    /// - [`PPMEncodeErrors::IoErrors`] if the writer fails
    pub fn encode(&mut self, image: &PixelBuffer, version: PPMVersion) -> Result<usize, PPMEncodeErrors> {
        if !version.is_grayscale() && image.colorspace() != ColorSpace::RGB {
            return Err(PPMEncodeErrors::UnsupportedColorspace(
                image.colorspace(),
                version
            ));
        }
        let header_size = self.write_headers(image, version)?;

        let planes = image.channels();
        let length = image.rows() * image.cols();

        let data = match version {
            PPMVersion::P2 => {
                let mut data = Vec::with_capacity(length * 4);

                for sample in &planes[0] {
                    writeln!(data, "{sample}")?;
                }
                data
            }
            PPMVersion::P3 => {
                let mut data = Vec::with_capacity(length * 12);

                for ((r, g), b) in planes[0].iter().zip(&planes[1]).zip(&planes[2]) {
                    writeln!(data, "{r} {g} {b}")?;
                }
                data
            }
            PPMVersion::P5 => planes[0].clone(),
            PPMVersion::P6 => {
                let mut data = Vec::with_capacity(length * 3);

                for ((r, g), b) in planes[0].iter().zip(&planes[1]).zip(&planes[2]) {
                    data.extend_from_slice(&[*r, *g, *b]);
                }
                data
            }
        };
        self.writer.write_all(&data)?;

        debug!(
            "Wrote {version} image, {header_size} header bytes, {} payload bytes",
            data.len()
        );

        Ok(header_size + data.len())
    }
}

/// Encode `image` into a freshly allocated vector
///
/// # Example
/// ```
/// use netpix_core::buffer::PixelBuffer;
/// use netpix_core::colorspace::ColorSpace;
/// use netpix_ppm::{encode_to_vec, PPMVersion};
///
/// let image = PixelBuffer::fill([1, 2, 3], 1, 1, ColorSpace::RGB).unwrap();
/// let bytes = encode_to_vec(&image, PPMVersion::P3).unwrap();
///
/// assert_eq!(bytes, b"P3\n1 1\n255\n1 2 3\n");
/// ```
pub fn encode_to_vec(image: &PixelBuffer, version: PPMVersion) -> Result<Vec<u8>, PPMEncodeErrors> {
    let mut output = vec![];

    PPMEncoder::new(&mut output).encode(image, version)?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use netpix_core::buffer::PixelBuffer;
    use netpix_core::colorspace::ColorSpace;

    use crate::{encode_to_vec, PPMEncodeErrors, PPMEncoder, PPMVersion};

    fn sample_image() -> PixelBuffer {
        PixelBuffer::from_fn(2, 2, ColorSpace::RGB, |row, col| {
            let base = (row * 2 + col) as u8 * 10;
            [base, base + 1, base + 2]
        })
        .unwrap()
    }

    #[test]
    fn ascii_color_layout() {
        let mut image = sample_image();
        image.comments_mut().push(b"# made by hand".to_vec());

        let bytes = encode_to_vec(&image, PPMVersion::P3).unwrap();
        let expected = "P3\n# made by hand\n2 2\n255\n0 1 2\n10 11 12\n20 21 22\n30 31 32\n";

        assert_eq!(bytes, expected.as_bytes());
    }

    #[test]
    fn gray_formats_use_first_plane() {
        let image = sample_image();

        assert_eq!(
            encode_to_vec(&image, PPMVersion::P2).unwrap(),
            b"P2\n2 2\n255\n0\n10\n20\n30\n"
        );
        assert_eq!(
            encode_to_vec(&image, PPMVersion::P5).unwrap(),
            b"P5\n2 2\n255\n\x00\x0a\x14\x1e"
        );
    }

    #[test]
    fn binary_color_is_interleaved() {
        let image = PixelBuffer::fill([1, 2, 3], 1, 2, ColorSpace::RGB).unwrap();

        assert_eq!(
            encode_to_vec(&image, PPMVersion::P6).unwrap(),
            b"P6\n2 1\n255\n\x01\x02\x03\x01\x02\x03"
        );
    }

    #[test]
    fn returns_bytes_written() {
        let image = sample_image();
        let mut output = vec![];

        let written = PPMEncoder::new(&mut output)
            .encode(&image, PPMVersion::P6)
            .unwrap();

        assert_eq!(written, output.len());
    }

    #[test]
    fn luma_cannot_become_color() {
        let image = PixelBuffer::new(1, 1, ColorSpace::Luma).unwrap();

        assert!(matches!(
            encode_to_vec(&image, PPMVersion::P6),
            Err(PPMEncodeErrors::UnsupportedColorspace(ColorSpace::Luma, PPMVersion::P6))
        ));
    }
}
