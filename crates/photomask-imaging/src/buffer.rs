// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Normalized float buffer: conversion in from decoded images and raw
// samples, conversion out to 8-bit for viewers, and bordered sample access.

use image::{DynamicImage, GrayImage, ImageBuffer, Luma, Rgb};
use photomask_core::{Border, PhotomaskError, Result};

/// Single-channel image with one `f32` intensity per pixel.
pub type FloatImage = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Rec. 601 luma weights for red, green and blue.
pub const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

/// Reduce a decoded image to one normalized channel.
///
/// Colour inputs are weighted with [`LUMA_WEIGHTS`]; grayscale inputs keep
/// their single channel. 8-bit samples are divided by 255. The result goes
/// through the same checks as [`from_samples`], so empty images and
/// non-finite float samples are rejected.
pub fn normalize_dynamic(image: &DynamicImage) -> Result<FloatImage> {
    let (width, height) = (image.width(), image.height());
    let samples: Vec<f32> = if image.color().has_color() {
        let [wr, wg, wb] = LUMA_WEIGHTS;
        image
            .to_rgb32f()
            .pixels()
            .map(|Rgb([r, g, b])| wr * r + wg * g + wb * b)
            .collect()
    } else {
        image.to_luma32f().into_raw()
    };
    from_samples(width, height, samples)
}

/// Wrap already-normalized row-major samples.
///
/// Samples are clamped to [0, 1]; dimensions must be non-zero and match the
/// sample count, and every sample must be finite.
pub fn from_samples(width: u32, height: u32, samples: Vec<f32>) -> Result<FloatImage> {
    if width == 0 || height == 0 {
        return Err(PhotomaskError::invalid(
            "dimensions",
            format!("must be non-zero, got {width}x{height}"),
        ));
    }
    let expected = width as usize * height as usize;
    if samples.len() != expected {
        return Err(PhotomaskError::invalid(
            "samples",
            format!(
                "expected {expected} samples for {width}x{height}, got {}",
                samples.len()
            ),
        ));
    }
    if let Some(index) = samples.iter().position(|v| !v.is_finite()) {
        return Err(PhotomaskError::invalid(
            "samples",
            format!("sample {index} is not finite"),
        ));
    }

    let mut image = FloatImage::from_raw(width, height, samples).ok_or_else(|| {
        PhotomaskError::invalid("samples", "buffer does not match dimensions")
    })?;
    clamp_unit(&mut image);
    Ok(image)
}

/// Denormalize to 8-bit grayscale for display: clamp to [0, 1], scale by 255
/// and round.
pub fn to_gray8(image: &FloatImage) -> GrayImage {
    let (width, height) = image.dimensions();
    let bytes = image
        .as_raw()
        .iter()
        .map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
        .collect();
    // Same dimensions and one byte per sample, so the length always matches.
    GrayImage::from_raw(width, height, bytes).unwrap_or_else(|| GrayImage::new(width, height))
}

fn clamp_unit(image: &mut FloatImage) {
    for v in image.iter_mut() {
        *v = v.clamp(0.0, 1.0);
    }
}

/// Sample at (`x`, `y`), synthesizing out-of-range coordinates with `border`.
#[inline]
pub fn sample(image: &FloatImage, x: isize, y: isize, border: Border) -> f32 {
    let (width, height) = image.dimensions();
    let sx = border.resolve(x, width as usize);
    let sy = border.resolve(y, height as usize);
    image.as_raw()[sy * width as usize + sx]
}

/// Sample at (`x`, `y`) or `None` if the coordinate lies outside the image.
#[inline]
pub fn sample_in_bounds(image: &FloatImage, x: isize, y: isize) -> Option<f32> {
    let (width, height) = image.dimensions();
    if x < 0 || y < 0 || x >= width as isize || y >= height as isize {
        return None;
    }
    Some(image.as_raw()[y as usize * width as usize + x as usize])
}

/// Build a new image of the same dimensions by evaluating `f` at every pixel.
pub fn map_pixels(image: &FloatImage, mut f: impl FnMut(isize, isize) -> f32) -> FloatImage {
    let (width, height) = image.dimensions();
    ImageBuffer::from_fn(width, height, |x, y| Luma([f(x as isize, y as isize)]))
}

/// Number of samples equal to 1.0 (foreground of a binary image).
pub fn foreground_count(image: &FloatImage) -> usize {
    image.as_raw().iter().filter(|v| **v == 1.0).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb32FImage, RgbImage};

    #[test]
    fn gray8_is_divided_by_255() {
        let gray = GrayImage::from_raw(2, 1, vec![0u8, 255]).expect("2x1");
        let out = normalize_dynamic(&DynamicImage::ImageLuma8(gray)).expect("valid");
        assert_eq!(out.as_raw(), &vec![0.0, 1.0]);
    }

    #[test]
    fn colour_input_is_reduced_to_one_channel() {
        let rgb = RgbImage::from_pixel(3, 2, Rgb([255u8, 255, 255]));
        let out = normalize_dynamic(&DynamicImage::ImageRgb8(rgb)).expect("valid");
        assert_eq!(out.dimensions(), (3, 2));
        assert!(out.as_raw().iter().all(|v| (v - 1.0).abs() < 1e-6));

        let black = RgbImage::from_pixel(1, 1, Rgb([0u8, 0, 0]));
        let out = normalize_dynamic(&DynamicImage::ImageRgb8(black)).expect("valid");
        assert_eq!(out.as_raw(), &vec![0.0]);
    }

    #[test]
    fn colour_uses_rec601_weights() {
        let primaries = RgbImage::from_fn(3, 1, |x, _| match x {
            0 => Rgb([255u8, 0, 0]),
            1 => Rgb([0, 255, 0]),
            _ => Rgb([0, 0, 255]),
        });
        let out = normalize_dynamic(&DynamicImage::ImageRgb8(primaries)).expect("valid");
        assert!((out.as_raw()[0] - 0.299).abs() < 1e-4, "red = {}", out.as_raw()[0]);
        assert!((out.as_raw()[1] - 0.587).abs() < 1e-4, "green = {}", out.as_raw()[1]);
        assert!((out.as_raw()[2] - 0.114).abs() < 1e-4, "blue = {}", out.as_raw()[2]);
    }

    #[test]
    fn empty_decoded_image_is_rejected() {
        let empty = DynamicImage::ImageLuma8(GrayImage::new(0, 5));
        let err = normalize_dynamic(&empty).unwrap_err();
        assert!(matches!(err, PhotomaskError::InvalidParameter { name: "dimensions", .. }));
    }

    #[test]
    fn non_finite_float_input_is_rejected() {
        let mut rgb = Rgb32FImage::from_pixel(2, 2, Rgb([0.5, 0.5, 0.5]));
        rgb.put_pixel(1, 1, Rgb([f32::NAN, 0.5, 0.5]));
        let err = normalize_dynamic(&DynamicImage::ImageRgb32F(rgb)).unwrap_err();
        assert!(matches!(err, PhotomaskError::InvalidParameter { name: "samples", .. }));
    }

    #[test]
    fn float_input_is_clamped() {
        let rgb = Rgb32FImage::from_pixel(1, 1, Rgb([2.0, 2.0, 2.0]));
        let out = normalize_dynamic(&DynamicImage::ImageRgb32F(rgb)).expect("finite");
        assert_eq!(out.as_raw(), &vec![1.0]);
    }

    #[test]
    fn from_samples_rejects_mismatched_length() {
        let err = from_samples(2, 2, vec![0.0; 3]).unwrap_err();
        assert!(matches!(err, PhotomaskError::InvalidParameter { name: "samples", .. }));
    }

    #[test]
    fn from_samples_rejects_zero_dimensions() {
        assert!(from_samples(0, 4, Vec::new()).is_err());
    }

    #[test]
    fn from_samples_rejects_non_finite() {
        assert!(from_samples(1, 2, vec![0.5, f32::INFINITY]).is_err());
    }

    #[test]
    fn from_samples_clamps_out_of_range() {
        let image = from_samples(3, 1, vec![-0.5, 0.25, 1.5]).expect("valid");
        assert_eq!(image.as_raw(), &vec![0.0, 0.25, 1.0]);
    }

    #[test]
    fn gray8_output_rounds_and_clamps() {
        let image = from_samples(4, 1, vec![0.0, 0.5, 1.0, 1.0]).expect("valid");
        let mut raw = image.into_raw();
        raw[3] = 2.0;
        let image = FloatImage::from_raw(4, 1, raw).expect("4x1");
        assert_eq!(to_gray8(&image).into_raw(), vec![0, 128, 255, 255]);
    }

    #[test]
    fn bordered_sampling() {
        let image = from_samples(3, 1, vec![0.1, 0.2, 0.3]).expect("valid");
        assert_eq!(sample(&image, -1, 0, Border::Reflect101), 0.2);
        assert_eq!(sample(&image, -1, 0, Border::Replicate), 0.1);
        assert_eq!(sample(&image, 3, 5, Border::Replicate), 0.3);
        assert_eq!(sample_in_bounds(&image, 3, 0), None);
        assert_eq!(sample_in_bounds(&image, 2, 0), Some(0.3));
    }
}
