/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple byte reader over an in-memory stream
//!
//! Netpbm headers are text and the payload may be text or raw bytes,
//! so the reader exposes both byte level access and a few token
//! helpers that mirror how a formatted stream reads words and lines.

/// Encapsulates a simple byte reader with
/// a cursor into the stream
pub struct ByteReader<'a> {
    stream:   &'a [u8],
    position: usize
}

impl<'a> ByteReader<'a> {
    /// Create a new reader positioned at the start of `buf`
    pub const fn new(buf: &'a [u8]) -> ByteReader<'a> {
        ByteReader {
            stream:   buf,
            position: 0
        }
    }

    /// Return true if all bytes have been consumed
    ///
    /// # Example
    /// ```
    /// use netpix_core::bytestream::ByteReader;
    /// let mut reader = ByteReader::new(b"a");
    /// assert!(!reader.eof());
    /// reader.skip(1);
    /// assert!(reader.eof());
    /// ```
    #[inline(always)]
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }

    /// Return the number of bytes not yet consumed
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.stream.len().saturating_sub(self.position)
    }

    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Move the cursor forward by `num` bytes, saturating at the end
    #[inline]
    pub fn skip(&mut self, num: usize) {
        self.position = self.position.saturating_add(num).min(self.stream.len());
    }

    /// Move the cursor back by `num` bytes, saturating at the start
    #[inline]
    pub fn rewind(&mut self, num: usize) {
        self.position = self.position.saturating_sub(num);
    }

    /// Look at the next byte without consuming it
    #[inline]
    pub fn peek_u8(&self) -> Option<u8> {
        self.stream.get(self.position).copied()
    }

    /// Read a single byte, returning `None` at the end of the stream
    #[inline]
    pub fn get_u8(&mut self) -> Option<u8> {
        let byte = self.peek_u8()?;
        self.position += 1;
        Some(byte)
    }

    /// Return a reference to the next `num` bytes and consume them
    ///
    /// Returns `None` without moving the cursor if fewer than
    /// `num` bytes remain.
    pub fn get_as_ref(&mut self, num: usize) -> Option<&'a [u8]> {
        let end = self.position.checked_add(num)?;
        let bytes = self.stream.get(self.position..end)?;

        self.position = end;
        Some(bytes)
    }

    /// Skip all ASCII whitespace until a byte that isn't whitespace
    /// or the end of the stream
    pub fn skip_whitespace(&mut self) {
        while let Some(byte) = self.peek_u8() {
            if !byte.is_ascii_whitespace() {
                break;
            }
            self.position += 1;
        }
    }

    /// Skip leading whitespace then return all bytes up to, but
    /// not including, the next whitespace byte.
    ///
    /// The terminating whitespace is left in the stream. An empty
    /// slice means the stream ended before a word started.
    pub fn read_word(&mut self) -> &'a [u8] {
        self.skip_whitespace();

        let start = self.position;

        while let Some(byte) = self.peek_u8() {
            if byte.is_ascii_whitespace() {
                break;
            }
            self.position += 1;
        }
        let stream = self.stream;
        &stream[start..self.position]
    }

    /// Return all bytes up to the next `\n` and consume the `\n` too
    ///
    /// The line break is not part of the returned slice, any `\r`
    /// before it is.
    pub fn read_line(&mut self) -> &'a [u8] {
        let stream = self.stream;
        let start = self.position;

        while let Some(byte) = self.get_u8() {
            if byte == b'\n' {
                return &stream[start..self.position - 1];
            }
        }
        &stream[start..self.position]
    }
}
