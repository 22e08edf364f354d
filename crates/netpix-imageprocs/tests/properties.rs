/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};
use netpix_core::buffer::PixelBuffer;
use netpix_core::colorspace::ColorSpace;
use netpix_core::errors::ImageErrors;
use netpix_imageprocs::operations::Operation;
use netpix_ppm::{encode_to_vec, PPMDecoder, PPMVersion};

fn random_image(rows: usize, cols: usize) -> PixelBuffer {
    let mut image = PixelBuffer::new(rows, cols, ColorSpace::RGB).unwrap();
    let mut rand = WyRand::new();

    for plane in image.channels_mut() {
        rand.fill(plane.as_mut_slice());
    }
    image
}

fn apply(image: &PixelBuffer, operations: &[Operation]) -> PixelBuffer {
    let mut copy = image.clone();

    for operation in operations {
        operation.execute(&mut copy).unwrap();
    }
    copy
}

#[test]
fn negate_is_an_involution() {
    let image = random_image(13, 17);

    assert_eq!(apply(&image, &[Operation::Negate, Operation::Negate]), image);
}

#[test]
fn flips_are_involutions() {
    let image = random_image(9, 6);

    for flip in [Operation::FlipHorizontal, Operation::FlipVertical] {
        assert_eq!(apply(&image, &[flip, flip]), image);
    }
}

#[test]
fn rotations_return_to_the_original() {
    let image = random_image(5, 11);

    assert_eq!(apply(&image, &[Operation::RotateCW, Operation::RotateCCW]), image);
    assert_eq!(apply(&image, &[Operation::RotateCW; 4]), image);
    assert_eq!(apply(&image, &[Operation::RotateCW]).dimensions(), (11, 5));
}

#[test]
fn brighten_is_invertible_without_clamping() {
    // every sample lies in 40..=215 so +40 and -40 never clamp
    let image = PixelBuffer::from_fn(8, 8, ColorSpace::RGB, |r, c| {
        let base = 40 + (r * 8 + c) as u8;
        [base, base + 100, 215]
    })
    .unwrap();

    let restored = apply(&image, &[Operation::Brighten(40), Operation::Brighten(-40)]);
    assert_eq!(restored, image);
}

#[test]
fn brighten_loses_clamped_samples() {
    let image = PixelBuffer::from_fn(1, 3, ColorSpace::RGB, |_, c| [[250, 10, 100][c]; 3]).unwrap();

    let restored = apply(&image, &[Operation::Brighten(20), Operation::Brighten(-20)]);

    // 250 saturated at 255 and comes back as 235
    assert_eq!(restored.pixel(0, 0), [235; 3]);
    assert_eq!(restored.pixel(0, 1), [10; 3]);
    assert_eq!(restored.pixel(0, 2), [100; 3]);
}

#[test]
fn white_ascii_negated_to_black_binary() {
    let data = b"P3\n2 2\n255\n255 255 255\n255 255 255\n255 255 255\n255 255 255\n";

    let mut image = PPMDecoder::new(data).decode().unwrap();
    Operation::Negate.execute(&mut image).unwrap();

    let bytes = encode_to_vec(&image, PPMVersion::P6).unwrap();

    assert!(bytes.starts_with(b"P6\n2 2\n255\n"));
    assert_eq!(bytes.len(), 11 + 12);
    assert!(bytes[11..].iter().all(|x| *x == 0));
}

#[test]
fn flat_contrast_is_an_error() {
    let mut image = PixelBuffer::fill([100; 3], 4, 4, ColorSpace::Luma).unwrap();

    assert!(matches!(
        Operation::Contrast.execute(&mut image),
        Err(ImageErrors::ArithmeticError(_))
    ));
}

#[test]
fn sharpen_uniform_keeps_interior_zeroes_border() {
    let image = PixelBuffer::fill([60, 120, 180], 6, 6, ColorSpace::RGB).unwrap();
    let sharpened = apply(&image, &[Operation::Sharpen]);

    for row in 0..6 {
        for col in 0..6 {
            let border = row == 0 || row == 5 || col == 0 || col == 5;
            let expected = if border { [0; 3] } else { [60, 120, 180] };

            assert_eq!(sharpened.pixel(row, col), expected);
        }
    }
}

#[test]
fn flood_fill_with_same_color_is_a_no_op() {
    let image = random_image(7, 7);
    let color = image.pixel(3, 3);

    let filled = apply(&image, &[Operation::FloodFill { row: 3, col: 3, color }]);
    assert_eq!(filled, image);
}

#[test]
fn oversized_crop_is_identity() {
    let image = random_image(6, 9);
    let crop = Operation::Crop {
        row:    0,
        col:    0,
        height: 16,
        width:  9
    };

    assert_eq!(apply(&image, &[crop]), image);
}

#[test]
fn grayscale_then_binary_gray_output() {
    let image = PixelBuffer::fill([0, 255, 0], 1, 2, ColorSpace::RGB).unwrap();
    let gray = apply(&image, &[Operation::Grayscale]);

    assert_eq!(
        encode_to_vec(&gray, PPMVersion::P5).unwrap(),
        b"P5\n2 1\n255\n\x99\x99"
    );
    assert_eq!(
        encode_to_vec(&gray, PPMVersion::P2).unwrap(),
        b"P2\n2 1\n255\n153\n153\n"
    );
}
