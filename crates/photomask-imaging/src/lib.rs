// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// photomask-imaging: Intensity-domain filtering for the Photomask pipeline.
//
// Provides the `ImageProcessor`, which owns one normalized single-channel
// float buffer and transforms it in place (threshold, convolution, Sobel
// edges, binary morphology, median and locally adaptive threshold), plus the
// free-standing filter functions it dispatches to.

pub mod buffer;
pub mod filters;
pub mod processor;

// Re-export the primary types so callers can use `photomask_imaging::ImageProcessor` etc.
pub use buffer::FloatImage;
pub use processor::ImageProcessor;
