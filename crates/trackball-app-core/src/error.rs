// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type shared by settings documents and stores.

use thiserror::Error;
use trackball_core::ConfigValidationError;

/// Failures while loading or saving trackball settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Reading or writing the backing storage failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The stored bytes are not a settings document.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// The configuration parsed but a field is out of range.
    #[error(transparent)]
    Invalid(#[from] ConfigValidationError),
    /// The document was written by an incompatible release.
    #[error("unsupported settings version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the document.
        found: u32,
        /// Version this build reads and writes.
        expected: u32,
    },
    /// The platform has no per-user configuration directory.
    #[error("could not resolve a config directory")]
    NoConfigDir,
}
