// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Square-window median (rank-order) filter.

use photomask_core::{Border, PhotomaskError, Result};

use crate::buffer::{FloatImage, map_pixels};

/// Border policy for the median window.
pub const MEDIAN_BORDER: Border = Border::Replicate;

/// Replace each sample with the median of its `kernel_size` x `kernel_size`
/// neighbourhood.
///
/// `kernel_size` must be odd and at least 1; otherwise the image is left alone
/// and [`PhotomaskError::InvalidParameter`] is returned.
///
/// Out-of-range neighbours repeat the nearest edge sample, so the window is
/// held as distinct in-image samples with multiplicities. Memory stays bounded
/// by the image size however large the kernel is.
pub fn median_filter(image: &FloatImage, kernel_size: u32) -> Result<FloatImage> {
    validate_kernel_size(kernel_size)?;
    debug_assert_eq!(MEDIAN_BORDER, Border::Replicate);

    let (width, height) = image.dimensions();
    let (width, height) = (width as usize, height as usize);
    let radius = (kernel_size / 2) as isize;
    // Rank of the median among side^2 samples; side is odd.
    let side = u64::from(kernel_size);
    let mid = side * side / 2;
    let raw = image.as_raw();
    let mut window: Vec<(f32, u64)> = Vec::new();

    Ok(map_pixels(image, |x, y| {
        let columns = replicated_span(x, radius, width);
        let rows = replicated_span(y, radius, height);
        window.clear();
        for &(sy, wy) in &rows {
            for &(sx, wx) in &columns {
                window.push((raw[sy * width + sx], wx * wy));
            }
        }
        window.sort_unstable_by(|a, b| a.0.total_cmp(&b.0));

        let mut seen = 0u64;
        for &(value, weight) in &window {
            seen += weight;
            if seen > mid {
                return value;
            }
        }
        // Weights always sum to side^2 > mid.
        window.last().map_or(0.0, |&(value, _)| value)
    }))
}

/// In-image indices covered by `centre - radius ..= centre + radius` under a
/// replicated border, each with the number of window positions mapping to it.
fn replicated_span(centre: isize, radius: isize, len: usize) -> Vec<(usize, u64)> {
    let last = len as isize - 1;
    let (lo, hi) = (centre - radius, centre + radius);
    let first = lo.clamp(0, last);
    let end = hi.clamp(0, last);
    (first..=end)
        .map(|i| {
            // Window positions at or before 0 land on index 0; at or after
            // `last` on index `last`.
            let from = if i == 0 { lo } else { i };
            let to = if i == last { hi } else { i };
            (i as usize, (to - from + 1) as u64)
        })
        .collect()
}

/// Check the odd-and-positive precondition.
pub fn validate_kernel_size(kernel_size: u32) -> Result<()> {
    if kernel_size == 0 || kernel_size % 2 == 0 {
        return Err(PhotomaskError::invalid(
            "kernel_size",
            format!("must be odd and positive, got {kernel_size}"),
        ));
    }
    Ok(())
}
