// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Processor configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PhotomaskError, Result};
use crate::types::{ConvolutionMode, Kernel3x3};

/// Immutable kernel set handed to an image processor at construction.
///
/// The structuring element and the adaptive-threshold window are fixed and
/// deliberately absent here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Kernel used for [`ConvolutionMode::Smoothing`].
    pub smoothing: Kernel3x3,
    /// Kernel used for [`ConvolutionMode::Sharpening`].
    pub sharpening: Kernel3x3,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            smoothing: Kernel3x3::SMOOTHING,
            sharpening: Kernel3x3::SHARPENING,
        }
    }
}

impl ProcessorConfig {
    /// The kernel selected by `mode`.
    pub fn kernel(&self, mode: ConvolutionMode) -> &Kernel3x3 {
        match mode {
            ConvolutionMode::Smoothing => &self.smoothing,
            ConvolutionMode::Sharpening => &self.sharpening,
        }
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject kernels that would poison the buffer with non-finite samples.
    pub fn validate(&self) -> Result<()> {
        for (name, kernel) in [("smoothing", &self.smoothing), ("sharpening", &self.sharpening)] {
            if !kernel.is_finite() {
                return Err(PhotomaskError::Config(format!(
                    "{name} kernel has non-finite coefficients"
                )));
            }
        }
        Ok(())
    }
}
