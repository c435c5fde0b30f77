// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Filter functions over `FloatImage`. Each takes the source by reference and
// returns a new buffer of identical dimensions; the processor swaps it in.

pub mod adaptive;
pub mod convolve;
pub mod median;
pub mod morphology;
pub mod sobel;
pub mod threshold;

pub use adaptive::{ADAPTIVE_BLOCK_SIZE, adaptive_threshold};
pub use convolve::convolve3x3;
pub use median::median_filter;
pub use morphology::{dilate, erode, morphological_gradient};
pub use sobel::sobel;
pub use threshold::threshold;
