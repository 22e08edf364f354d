/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use log::{debug, info, trace};
use netpix_core::buffer::PixelBuffer;
use netpix_core::bytestream::ByteReader;
use netpix_core::colorspace::ColorSpace;
use netpix_core::errors::ImageErrors;
use netpix_core::options::DecoderOptions;

use crate::version::PPMVersion;

/// An instance of a PPM decoder
///
/// The decoder can currently decode P3 and P6 formats.
/// Grayscale P2 and P5 images are only ever produced by
/// the encoder and are rejected here.
pub struct PPMDecoder<'a> {
    rows:            usize,
    cols:            usize,
    decoded_headers: bool,
    version:         Option<PPMVersion>,
    comments:        Vec<Vec<u8>>,
    reader:          ByteReader<'a>,
    options:         DecoderOptions
}

/// Errors possible while decoding
pub enum PPMDecodeErrors {
    /// The magic number is not one of the supported input formats
    InvalidFormat(String),
    InvalidHeader(String),
    /// Limit, found
    LargeDimensions(usize, usize),
    /// The pixel planes could not be allocated
    AllocationError(ImageErrors),
    /// Expected, found
    NotEnoughBytes(usize, usize),
    /// An ASCII sample is missing, not a number or out of range
    InvalidSample(String)
}

impl Debug for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidFormat(val) => writeln!(f, "Invalid format, reason: {val}"),
            Self::InvalidHeader(val) => writeln!(f, "Invalid header, reason: {val}"),
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::AllocationError(err) => writeln!(f, "{err:?}"),
            Self::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            Self::InvalidSample(val) => writeln!(f, "Invalid sample, reason: {val}")
        }
    }
}

impl Display for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PPMDecodeErrors {}

impl<'a> PPMDecoder<'a> {
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data: PPM encoded pixels
    ///
    /// # Example
    /// ```
    /// use netpix_ppm::PPMDecoder;
    /// let mut decoder = PPMDecoder::new(b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder::new_with_options(DecoderOptions::default(), data)
    }

    /// Create a new PPM decoder with the specified options
    ///
    /// # Example
    /// ```
    /// use netpix_core::options::DecoderOptions;
    /// use netpix_ppm::PPMDecoder;
    ///
    /// let options = DecoderOptions::default().set_max_width(1);
    /// let mut decoder = PPMDecoder::new_with_options(options, b"P6\n2 1\n255\n\0\0\0\0\0\0");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder {
            rows: 0,
            cols: 0,
            decoded_headers: false,
            version: None,
            comments: vec![],
            reader: ByteReader::new(data),
            options
        }
    }

    /// Read PPM headers and store them in internal state
    ///
    /// Calling this more than once is a no-op.
    pub fn decode_headers(&mut self) -> Result<(), PPMDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        let magic = self.reader.read_word();

        let version = match PPMVersion::from_magic(magic) {
            Some(v @ (PPMVersion::P3 | PPMVersion::P6)) => v,
            Some(v) => {
                let msg = format!("{v} images can be written but not read, supported input formats are P3 and P6");
                return Err(PPMDecodeErrors::InvalidFormat(msg));
            }
            None => {
                let msg = format!(
                    "Unknown magic number {:?}, supported input formats are P3 and P6",
                    String::from_utf8_lossy(magic)
                );
                return Err(PPMDecodeErrors::InvalidFormat(msg));
            }
        };
        info!("Magic number: {version}");

        // exactly one separator byte follows the magic number
        self.reader.skip(1);

        while self.reader.peek_u8() == Some(b'#') {
            let line = self.reader.read_line();
            self.comments.push(line.to_vec());
        }
        debug!("Comment lines: {}", self.comments.len());

        let cols = self.get_integer("width")?;
        let rows = self.get_integer("height")?;

        let max_value = self.reader.read_word();

        if max_value.is_empty() {
            return Err(PPMDecodeErrors::InvalidHeader(
                "Stream ended before the max value".to_string()
            ));
        }
        if self.options.strict_mode && max_value != b"255" {
            let msg = format!(
                "Max value {:?} is not 255",
                String::from_utf8_lossy(max_value)
            );
            return Err(PPMDecodeErrors::InvalidHeader(msg));
        }
        // and exactly one after the max value
        self.reader.skip(1);

        if cols > self.options.max_width {
            return Err(PPMDecodeErrors::LargeDimensions(self.options.max_width, cols));
        }
        if rows > self.options.max_height {
            return Err(PPMDecodeErrors::LargeDimensions(self.options.max_height, rows));
        }
        info!("Width: {cols}, height: {rows}");

        self.cols = cols;
        self.rows = rows;
        self.version = Some(version);
        self.decoded_headers = true;

        Ok(())
    }

    fn get_integer(&mut self, name: &str) -> Result<usize, PPMDecodeErrors> {
        let word = self.reader.read_word();

        core::str::from_utf8(word)
            .ok()
            .and_then(|x| x.parse::<usize>().ok())
            .ok_or_else(|| {
                let msg = format!(
                    "Expected an integer for the image {name} but found {:?}",
                    String::from_utf8_lossy(word)
                );
                PPMDecodeErrors::InvalidHeader(msg)
            })
    }

    /// Return the input format or none if headers
    /// aren't decoded
    pub const fn version(&self) -> Option<PPMVersion> {
        if self.decoded_headers {
            self.version
        } else {
            None
        }
    }

    /// Return image dimensions as `(rows, cols)` or none if
    /// headers aren't decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.rows, self.cols))
        } else {
            None
        }
    }

    /// Header comment lines in the order they appeared, as raw bytes
    pub fn comments(&self) -> &[Vec<u8>] {
        &self.comments
    }

    /// Decode a ppm encoded image into a pixel buffer
    ///
    /// Headers are decoded first if that hasn't happened yet.
    pub fn decode(&mut self) -> Result<PixelBuffer, PPMDecodeErrors> {
        self.decode_headers()?;

        let mut buffer = PixelBuffer::new(self.rows, self.cols, ColorSpace::RGB)
            .map_err(PPMDecodeErrors::AllocationError)?;

        match self.version {
            Some(PPMVersion::P3) => self.decode_ascii(&mut buffer)?,
            _ => self.decode_binary(&mut buffer)?
        }
        *buffer.comments_mut() = self.comments.clone();

        trace!("Finished decoding, {} bytes left over", self.reader.remaining());

        Ok(buffer)
    }

    fn decode_binary(&mut self, buffer: &mut PixelBuffer) -> Result<(), PPMDecodeErrors> {
        let size = self.rows.saturating_mul(self.cols).saturating_mul(3);

        let remaining = self.reader.remaining();
        let data = self
            .reader
            .get_as_ref(size)
            .ok_or(PPMDecodeErrors::NotEnoughBytes(size, remaining))?;

        // de-interleave rgb triplets into planes
        for (component, plane) in buffer.channels_mut().iter_mut().enumerate() {
            for (sample, pixel) in plane.iter_mut().zip(data.chunks_exact(3)) {
                *sample = pixel[component];
            }
        }
        Ok(())
    }

    fn decode_ascii(&mut self, buffer: &mut PixelBuffer) -> Result<(), PPMDecodeErrors> {
        let expected = self.rows * self.cols * 3;
        let mut found = 0;

        for position in 0..self.rows * self.cols {
            for plane in buffer.channels_mut() {
                plane[position] = self.get_sample(expected, found)?;
                found += 1;
            }
        }
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn get_sample(&mut self, expected: usize, found: usize) -> Result<u8, PPMDecodeErrors> {
        let word = self.reader.read_word();

        if word.is_empty() {
            let msg = format!("Expected {expected} samples but the stream ended after {found}");
            return Err(PPMDecodeErrors::InvalidSample(msg));
        }
        let value = core::str::from_utf8(word)
            .ok()
            .and_then(|x| x.parse::<i64>().ok())
            .ok_or_else(|| {
                let msg = format!(
                    "Sample {found} is not an integer, found {:?}",
                    String::from_utf8_lossy(word)
                );
                PPMDecodeErrors::InvalidSample(msg)
            })?;

        if self.options.strict_mode {
            return u8::try_from(value).map_err(|_| {
                let msg = format!("Sample {found} has value {value} outside 0..=255");
                PPMDecodeErrors::InvalidSample(msg)
            });
        }
        // values are trusted, keep the low byte like a narrowing store would
        Ok(value as u8)
    }
}

#[cfg(test)]
mod tests {
    use netpix_core::colorspace::{Channel, ColorSpace};
    use netpix_core::errors::ImageErrors;
    use netpix_core::options::DecoderOptions;

    use crate::{PPMDecodeErrors, PPMDecoder, PPMVersion};

    #[test]
    fn decode_ascii_image() {
        let data = b"P3\n2 1\n255\n1 2 3\n4 5 6\n";
        let mut decoder = PPMDecoder::new(data);
        let image = decoder.decode().unwrap();

        assert_eq!(decoder.version(), Some(PPMVersion::P3));
        assert_eq!(image.dimensions(), (1, 2));
        assert_eq!(image.colorspace(), ColorSpace::RGB);
        assert_eq!(image.channel(Channel::Red).unwrap(), &[1, 4]);
        assert_eq!(image.channel(Channel::Green).unwrap(), &[2, 5]);
        assert_eq!(image.channel(Channel::Blue).unwrap(), &[3, 6]);
    }

    #[test]
    fn width_comes_before_height() {
        let data = b"P6\n3 2\n255\n012345678901234567";
        let mut decoder = PPMDecoder::new(data);
        let image = decoder.decode().unwrap();

        assert_eq!(image.rows(), 2);
        assert_eq!(image.cols(), 3);
        assert_eq!(image.pixel(1, 2), [b'5', b'6', b'7']);
    }

    #[test]
    fn comments_are_kept_in_order() {
        let data = b"P3\n# first\n#second line\n1 1\n255\n9 9 9\n";
        let mut decoder = PPMDecoder::new(data);
        let image = decoder.decode().unwrap();

        assert_eq!(image.comments(), &[b"# first".to_vec(), b"#second line".to_vec()]);
    }

    #[test]
    fn comments_keep_non_utf8_bytes() {
        let data = b"P6\n# caf\xE9\n1 1\n255\n\x01\x02\x03";
        let mut decoder = PPMDecoder::new(data);
        decoder.decode_headers().unwrap();

        assert_eq!(decoder.comments(), &[b"# caf\xE9".to_vec()]);
    }

    #[test]
    fn unallocatable_image_is_an_allocation_error() {
        let options = DecoderOptions::default()
            .set_max_width(usize::MAX)
            .set_max_height(usize::MAX);
        let data = format!("P6\n{} 2\n255\n", usize::MAX);

        let mut decoder = PPMDecoder::new_with_options(options, data.as_bytes());

        assert!(matches!(
            decoder.decode(),
            Err(PPMDecodeErrors::AllocationError(ImageErrors::AllocationError(2, _)))
        ));
        assert_eq!(decoder.dimensions(), Some((2, usize::MAX)));
    }

    #[test]
    fn grayscale_input_is_rejected() {
        let mut decoder = PPMDecoder::new(b"P5\n1 1\n255\n\0");

        assert!(matches!(decoder.decode(), Err(PPMDecodeErrors::InvalidFormat(_))));
    }

    #[test]
    fn unknown_magic_is_rejected_before_header() {
        let mut decoder = PPMDecoder::new(b"P9\n99999999999 99999999999\n255\n");

        assert!(matches!(decoder.decode(), Err(PPMDecodeErrors::InvalidFormat(_))));
        assert!(decoder.dimensions().is_none());
    }

    #[test]
    fn short_binary_payload() {
        let mut decoder = PPMDecoder::new(b"P6\n2 2\n255\n\0\0\0\0\0");

        assert!(matches!(
            decoder.decode(),
            Err(PPMDecodeErrors::NotEnoughBytes(12, 5))
        ));
    }

    #[test]
    fn truncated_ascii_payload() {
        let mut decoder = PPMDecoder::new(b"P3\n1 2\n255\n1 2 3 4\n");

        assert!(matches!(decoder.decode(), Err(PPMDecodeErrors::InvalidSample(_))));
    }

    #[test]
    fn large_dimensions_are_rejected() {
        let options = DecoderOptions::default().set_max_height(10);
        let mut decoder = PPMDecoder::new_with_options(options, b"P6\n1 11\n255\n");

        assert!(matches!(
            decoder.decode(),
            Err(PPMDecodeErrors::LargeDimensions(10, 11))
        ));
    }

    #[test]
    fn out_of_range_samples_wrap_unless_strict() {
        let data = b"P3\n1 1\n255\n256 -1 255\n";

        let image = PPMDecoder::new(data).decode().unwrap();
        assert_eq!(image.pixel(0, 0), [0, 255, 255]);

        let options = DecoderOptions::default().set_strict_mode(true);
        let result = PPMDecoder::new_with_options(options, data).decode();
        assert!(matches!(result, Err(PPMDecodeErrors::InvalidSample(_))));
    }

    #[test]
    fn strict_mode_checks_max_value() {
        let data = b"P6\n1 1\n65535\n\0\0\0";
        assert!(PPMDecoder::new(data).decode().is_ok());

        let options = DecoderOptions::default().set_strict_mode(true);
        let result = PPMDecoder::new_with_options(options, data).decode();
        assert!(matches!(result, Err(PPMDecodeErrors::InvalidHeader(_))));
    }

    #[test]
    fn single_separator_after_max_value() {
        // the second newline is taken as the first red sample
        let data = b"P6\n1 1\n255\n\n\x01\x02\x03";
        let image = PPMDecoder::new(data).decode().unwrap();

        assert_eq!(image.pixel(0, 0), [b'\n', 1, 2]);
    }
}
