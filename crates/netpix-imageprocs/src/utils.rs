/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Helpers shared by the arithmetic transforms

/// Clamp a value into `0..=255` and convert it to a sample
///
/// Fractions are truncated toward zero after clamping,
/// so `127.6` becomes `127`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[inline]
pub fn clamp_byte(value: f64) -> u8 {
    // NaN becomes 0 through the cast
    value.clamp(0.0, 255.0) as u8
}

/// Integer version of [`clamp_byte`]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[inline]
pub const fn clamp_i32(value: i32) -> u8 {
    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::{clamp_byte, clamp_i32};

    #[test]
    fn clamp_integers() {
        assert_eq!(clamp_i32(-1), 0);
        assert_eq!(clamp_i32(0), 0);
        assert_eq!(clamp_i32(128), 128);
        assert_eq!(clamp_i32(255), 255);
        assert_eq!(clamp_i32(256), 255);
        assert_eq!(clamp_i32(i32::MIN), 0);
    }

    #[test]
    fn clamp_floats_truncates() {
        assert_eq!(clamp_byte(127.6), 127);
        assert_eq!(clamp_byte(-0.5), 0);
        assert_eq!(clamp_byte(-1.0), 0);
        assert_eq!(clamp_byte(255.9), 255);
        assert_eq!(clamp_byte(1000.0), 255);
    }
}
