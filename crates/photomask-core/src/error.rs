// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Photomask.

use thiserror::Error;

/// Top-level error type for all Photomask operations.
#[derive(Debug, Error)]
pub enum PhotomaskError {
    // -- Construction --
    #[error("could not load image: {0}")]
    Load(String),

    // -- Per-operation rejections (processor stays usable) --
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    // -- Configuration --
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PhotomaskError {
    /// Shorthand for building an [`PhotomaskError::InvalidParameter`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Whether the error left the processor untouched and usable.
    ///
    /// Construction failures are fatal (no processor exists); everything else
    /// is a local rejection.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Load(_))
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PhotomaskError>;
