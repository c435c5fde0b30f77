// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Photomask: Core types, configuration and error definitions shared by the
// imaging crate.

pub mod config;
pub mod error;
pub mod types;

pub use config::ProcessorConfig;
pub use error::{PhotomaskError, Result};
pub use types::*;
