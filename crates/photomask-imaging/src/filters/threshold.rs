// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global binary threshold.

use image::Luma;

use crate::buffer::FloatImage;

/// Binarize: 1.0 where `sample >= t`, 0.0 elsewhere.
///
/// `t` is not validated. Values at or below 0.0 yield an all-foreground image,
/// values above 1.0 an all-background one.
pub fn threshold(image: &FloatImage, t: f32) -> FloatImage {
    let mut out = image.clone();
    threshold_mut(&mut out, t);
    out
}

/// In-place variant of [`threshold`].
pub fn threshold_mut(image: &mut FloatImage, t: f32) {
    for Luma([v]) in image.pixels_mut() {
        *v = binarize(*v, t);
    }
}

#[inline]
pub(crate) fn binarize(v: f32, t: f32) -> f32 {
    if v >= t { 1.0 } else { 0.0 }
}
