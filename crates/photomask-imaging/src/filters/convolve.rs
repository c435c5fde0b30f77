// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// 3x3 linear filtering with an explicit border policy.

use photomask_core::{Border, Kernel3x3};

use crate::buffer::{FloatImage, map_pixels, sample};

/// Apply a 3x3 kernel as a correlation (kernel not flipped), synthesizing
/// out-of-range neighbours with `border`.
///
/// Output is not clamped: a sharpening kernel can push samples outside [0, 1].
pub fn convolve3x3(image: &FloatImage, kernel: &Kernel3x3, border: Border) -> FloatImage {
    map_pixels(image, |x, y| {
        let mut acc = 0.0f32;
        for dy in -1..=1 {
            for dx in -1..=1 {
                acc += kernel.weight(dx, dy) * sample(image, x + dx, y + dy, border);
            }
        }
        acc
    })
}

/// Like [`convolve3x3`] but accumulates positive and negative coefficients
/// separately and subtracts at the end.
///
/// For zero-sum kernels this makes a flat neighbourhood produce exactly 0.0,
/// because both halves see the same samples in the same order.
pub fn correlate_split(image: &FloatImage, kernel: &Kernel3x3, border: Border) -> FloatImage {
    map_pixels(image, |x, y| {
        let mut positive = 0.0f32;
        let mut negative = 0.0f32;
        for dy in -1..=1 {
            for dx in -1..=1 {
                let w = kernel.weight(dx, dy);
                if w == 0.0 {
                    continue;
                }
                let v = sample(image, x + dx, y + dy, border);
                if w > 0.0 {
                    positive += w * v;
                } else {
                    negative += -w * v;
                }
            }
        }
        positive - negative
    })
}
