// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types: operation selectors, convolution kernels, the
// structuring element and border policies.

use serde::{Deserialize, Serialize};

/// Which predefined 3x3 kernel a convolution uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConvolutionMode {
    /// Centre-weighted blur; coefficients sum to 1.
    Smoothing,
    /// Unsharp-mask style kernel; coefficients sum to 1, output is unclamped.
    Sharpening,
}

impl std::fmt::Display for ConvolutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Smoothing => f.write_str("smoothing"),
            Self::Sharpening => f.write_str("sharpening"),
        }
    }
}

/// Gradient direction(s) evaluated by Sobel edge detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeDirection {
    /// Derivative along x (responds to vertical edges).
    Horizontal,
    /// Derivative along y (responds to horizontal edges).
    Vertical,
    /// Equal-weight blend of both rescaled gradient maps.
    Both,
}

impl std::fmt::Display for EdgeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Horizontal => f.write_str("horizontal"),
            Self::Vertical => f.write_str("vertical"),
            Self::Both => f.write_str("both"),
        }
    }
}

/// Binary morphological operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MorphOp {
    Dilate,
    Erode,
    /// Dilation minus erosion of the same binary image (region boundaries).
    Gradient,
}

impl std::fmt::Display for MorphOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dilate => f.write_str("dilate"),
            Self::Erode => f.write_str("erode"),
            Self::Gradient => f.write_str("gradient"),
        }
    }
}

/// A 3x3 convolution kernel stored row-major.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Kernel3x3(pub [f32; 9]);

impl Kernel3x3 {
    /// Discrete blur approximation.
    pub const SMOOTHING: Self = Self([
        0.0, 0.125, 0.0, //
        0.125, 0.5, 0.125, //
        0.0, 0.125, 0.0,
    ]);

    /// Laplacian-based sharpening.
    pub const SHARPENING: Self = Self([
        0.0, -1.0, 0.0, //
        -1.0, 5.0, -1.0, //
        0.0, -1.0, 0.0,
    ]);

    /// Horizontal Sobel derivative (d/dx).
    pub const SOBEL_X: Self = Self([
        -1.0, 0.0, 1.0, //
        -2.0, 0.0, 2.0, //
        -1.0, 0.0, 1.0,
    ]);

    /// Vertical Sobel derivative (d/dy).
    pub const SOBEL_Y: Self = Self([
        -1.0, -2.0, -1.0, //
        0.0, 0.0, 0.0, //
        1.0, 2.0, 1.0,
    ]);

    /// Coefficient at offset (`dx`, `dy`) from the centre, each in -1..=1.
    pub fn weight(&self, dx: isize, dy: isize) -> f32 {
        debug_assert!((-1..=1).contains(&dx) && (-1..=1).contains(&dy));
        self.0[((dy + 1) * 3 + (dx + 1)) as usize]
    }

    /// Sum of all coefficients.
    pub fn sum(&self) -> f32 {
        self.0.iter().sum()
    }

    /// Largest response the kernel can produce for samples in [0, 1]: the sum
    /// of its positive coefficients.
    pub fn max_response(&self) -> f32 {
        self.0.iter().filter(|w| **w > 0.0).sum()
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|w| w.is_finite())
    }
}

/// The fixed 3x3 all-ones square used by dilation and erosion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructuringElement;

impl StructuringElement {
    pub const RADIUS: isize = 1;

    /// Neighbour offsets `(dx, dy)` covered by the element, centre included.
    pub fn offsets() -> impl Iterator<Item = (isize, isize)> {
        (-Self::RADIUS..=Self::RADIUS)
            .flat_map(|dy| (-Self::RADIUS..=Self::RADIUS).map(move |dx| (dx, dy)))
    }
}

/// Edge-extension policy for windowed operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Border {
    /// Mirror without repeating the edge sample: `c b | a b c | b a`.
    Reflect101,
    /// Repeat the edge sample: `a a | a b c | c c`.
    Replicate,
}

impl Border {
    /// Map a possibly out-of-range coordinate onto `0..len`.
    ///
    /// `len` must be non-zero.
    pub fn resolve(self, index: isize, len: usize) -> usize {
        debug_assert!(len > 0);
        let last = len as isize - 1;
        match self {
            Self::Replicate => index.clamp(0, last) as usize,
            Self::Reflect101 => {
                if last == 0 {
                    return 0;
                }
                // Reflection is periodic with period 2 * last.
                let period = 2 * last;
                let folded = index.rem_euclid(period);
                (if folded > last { period - folded } else { folded }) as usize
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predefined_kernels_are_normalised() {
        assert!((Kernel3x3::SMOOTHING.sum() - 1.0).abs() < f32::EPSILON);
        assert!((Kernel3x3::SHARPENING.sum() - 1.0).abs() < f32::EPSILON);
        assert_eq!(Kernel3x3::SOBEL_X.sum(), 0.0);
        assert_eq!(Kernel3x3::SOBEL_Y.sum(), 0.0);
    }

    #[test]
    fn kernel_weight_is_row_major() {
        assert_eq!(Kernel3x3::SHARPENING.weight(0, 0), 5.0);
        assert_eq!(Kernel3x3::SHARPENING.weight(0, -1), -1.0);
        assert_eq!(Kernel3x3::SOBEL_X.weight(1, 0), 2.0);
        assert_eq!(Kernel3x3::SOBEL_Y.weight(0, 1), 2.0);
    }

    #[test]
    fn sobel_max_response() {
        assert_eq!(Kernel3x3::SOBEL_X.max_response(), 4.0);
        assert_eq!(Kernel3x3::SOBEL_Y.max_response(), 4.0);
    }

    #[test]
    fn structuring_element_covers_nine_offsets() {
        let offsets: Vec<_> = StructuringElement::offsets().collect();
        assert_eq!(offsets.len(), 9);
        assert!(offsets.contains(&(0, 0)));
        assert!(offsets.contains(&(-1, 1)));
    }

    #[test]
    fn replicate_clamps_to_edges() {
        assert_eq!(Border::Replicate.resolve(-3, 5), 0);
        assert_eq!(Border::Replicate.resolve(7, 5), 4);
        assert_eq!(Border::Replicate.resolve(2, 5), 2);
    }

    #[test]
    fn reflect101_mirrors_without_repeating_edge() {
        // len 4: indices 0 1 2 3, reflected sequence ... 2 1 | 0 1 2 3 | 2 1 ...
        assert_eq!(Border::Reflect101.resolve(-1, 4), 1);
        assert_eq!(Border::Reflect101.resolve(-2, 4), 2);
        assert_eq!(Border::Reflect101.resolve(4, 4), 2);
        assert_eq!(Border::Reflect101.resolve(5, 4), 1);
        // Far out of range keeps folding.
        assert_eq!(Border::Reflect101.resolve(9, 4), 3);
    }

    #[test]
    fn reflect101_single_sample_axis() {
        assert_eq!(Border::Reflect101.resolve(-1, 1), 0);
        assert_eq!(Border::Reflect101.resolve(1, 1), 0);
    }

    #[test]
    fn modes_display_lowercase() {
        assert_eq!(ConvolutionMode::Sharpening.to_string(), "sharpening");
        assert_eq!(EdgeDirection::Both.to_string(), "both");
        assert_eq!(MorphOp::Gradient.to_string(), "gradient");
    }
}
