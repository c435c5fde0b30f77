// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Binary morphology with the fixed 3x3 square structuring element.
//
// Neighbours outside the image are skipped rather than synthesized, so the
// image frame never grows or shrinks a region on its own.

use photomask_core::StructuringElement;

use crate::buffer::{FloatImage, map_pixels, sample_in_bounds};

/// One dilation pass: each sample becomes the maximum over the element.
pub fn dilate(image: &FloatImage) -> FloatImage {
    map_pixels(image, |x, y| {
        StructuringElement::offsets()
            .filter_map(|(dx, dy)| sample_in_bounds(image, x + dx, y + dy))
            .fold(f32::NEG_INFINITY, f32::max)
    })
}

/// One erosion pass: each sample becomes the minimum over the element.
pub fn erode(image: &FloatImage) -> FloatImage {
    map_pixels(image, |x, y| {
        StructuringElement::offsets()
            .filter_map(|(dx, dy)| sample_in_bounds(image, x + dx, y + dy))
            .fold(f32::INFINITY, f32::min)
    })
}

/// Apply `pass` `count` times, each pass reading only the previous result.
pub fn iterate(image: &FloatImage, count: u32, pass: fn(&FloatImage) -> FloatImage) -> FloatImage {
    let mut current = image.clone();
    for _ in 0..count {
        current = pass(&current);
    }
    current
}

/// Dilation minus erosion of the same input, computed once.
///
/// Not clamped; for binary input the difference is already in {0, 1}.
pub fn morphological_gradient(image: &FloatImage) -> FloatImage {
    let mut result = dilate(image);
    let eroded = erode(image);
    for (d, e) in result.iter_mut().zip(eroded.iter()) {
        *d -= *e;
    }
    result
}
