// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Locally adaptive (mean-C) thresholding over a fixed 5x5 window.

use photomask_core::Border;

use super::threshold::binarize;
use crate::buffer::{FloatImage, map_pixels};

/// Side length of the local-mean window.
pub const ADAPTIVE_BLOCK_SIZE: u32 = 5;

/// Border policy for the local mean.
pub const ADAPTIVE_BORDER: Border = Border::Replicate;

/// Binarize each sample against the mean of its 5x5 neighbourhood.
///
/// A sample becomes 1.0 when `sample >= mean - (bias - 1.0)`. A bias of 1.0
/// compares against the plain local mean; larger values lower the threshold.
pub fn adaptive_threshold(image: &FloatImage, bias: f32) -> FloatImage {
    let offset = f64::from(bias) - 1.0;
    let radius = (ADAPTIVE_BLOCK_SIZE / 2) as isize;
    let table = IntegralImage::padded(image, radius, ADAPTIVE_BORDER);

    map_pixels(image, |x, y| {
        let mean = table.window_mean(x, y);
        binarize(image.as_raw()[table.index(x, y)], (mean - offset) as f32)
    })
}

/// Summed-area table over the image extended by `radius` on every side.
///
/// `sums[y * stride + x]` holds the sum of the padded rectangle [0, x) x [0, y),
/// so any window sum is four lookups.
struct IntegralImage {
    sums: Vec<f64>,
    stride: usize,
    width: usize,
    radius: isize,
}

impl IntegralImage {
    fn padded(image: &FloatImage, radius: isize, border: Border) -> Self {
        let (width, height) = image.dimensions();
        let (width, height) = (width as usize, height as usize);
        let padded_w = width + 2 * radius as usize;
        let padded_h = height + 2 * radius as usize;
        let stride = padded_w + 1;
        let mut sums = vec![0.0f64; stride * (padded_h + 1)];
        let raw = image.as_raw();

        for py in 0..padded_h {
            let sy = border.resolve(py as isize - radius, height);
            let mut row_sum = 0.0f64;
            for px in 0..padded_w {
                let sx = border.resolve(px as isize - radius, width);
                row_sum += f64::from(raw[sy * width + sx]);
                sums[(py + 1) * stride + px + 1] = row_sum + sums[py * stride + px + 1];
            }
        }

        Self {
            sums,
            stride,
            width,
            radius,
        }
    }

    /// Row-major index of an in-image pixel.
    fn index(&self, x: isize, y: isize) -> usize {
        y as usize * self.width + x as usize
    }

    /// Mean of the (2r+1)^2 window centred on image pixel (`x`, `y`).
    fn window_mean(&self, x: isize, y: isize) -> f64 {
        let side = 2 * self.radius as usize + 1;
        // Centre (x, y) sits at (x + r, y + r) in padded space, so the window
        // spans padded [x, x + side) x [y, y + side).
        let (x1, y1) = (x as usize, y as usize);
        let (x2, y2) = (x1 + side, y1 + side);
        let s = &self.sums;
        let sum = s[y2 * self.stride + x2] - s[y1 * self.stride + x2] - s[y2 * self.stride + x1]
            + s[y1 * self.stride + x1];
        sum / (side * side) as f64
    }
}
