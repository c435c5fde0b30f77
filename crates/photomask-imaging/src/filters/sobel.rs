// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sobel edge detection producing displayable [0, 1] gradient magnitudes.

use photomask_core::{Border, EdgeDirection, Kernel3x3};

use super::convolve::correlate_split;
use crate::buffer::FloatImage;

/// Border policy for gradient estimation.
pub const SOBEL_BORDER: Border = Border::Reflect101;

/// Compute the absolute Sobel response in the requested direction(s).
///
/// Each gradient map is rescaled by the kernel's largest possible response so
/// that it lands in [0, 1]. For [`EdgeDirection::Both`] the two rescaled maps
/// are blended 0.5 / 0.5 with no offset.
pub fn sobel(image: &FloatImage, direction: EdgeDirection) -> FloatImage {
    match direction {
        EdgeDirection::Horizontal => rescaled_gradient(image, &Kernel3x3::SOBEL_X),
        EdgeDirection::Vertical => rescaled_gradient(image, &Kernel3x3::SOBEL_Y),
        EdgeDirection::Both => {
            let gx = rescaled_gradient(image, &Kernel3x3::SOBEL_X);
            let mut gy = rescaled_gradient(image, &Kernel3x3::SOBEL_Y);
            for (y, x) in gy.iter_mut().zip(gx.iter()) {
                *y = 0.5 * *x + 0.5 * *y;
            }
            gy
        }
    }
}

fn rescaled_gradient(image: &FloatImage, kernel: &Kernel3x3) -> FloatImage {
    let scale = kernel.max_response();
    let mut gradient = correlate_split(image, kernel, SOBEL_BORDER);
    for v in gradient.iter_mut() {
        *v = (v.abs() / scale).min(1.0);
    }
    gradient
}
