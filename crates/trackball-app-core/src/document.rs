// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Versioned JSON envelope around [`TrackballConfig`].
//!
//! ```json
//! { "version": 1, "trackball": { "ball_size": 0.75, ... } }
//! ```
//!
//! Fields missing from `trackball` take their defaults, so files written
//! before a knob existed keep loading. A missing `version` reads as the
//! current one.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use trackball_core::TrackballConfig;

use crate::error::SettingsError;

/// Document version written by this build.
pub const SETTINGS_VERSION: u32 = 1;

const fn current_version() -> u32 {
    SETTINGS_VERSION
}

/// On-disk shape of the settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsDocument {
    /// Format version; see [`SETTINGS_VERSION`].
    #[serde(default = "current_version")]
    pub version: u32,
    /// The persisted controller configuration.
    #[serde(default)]
    pub trackball: TrackballConfig,
}

impl SettingsDocument {
    /// Wraps `trackball` at the current version.
    pub fn new(trackball: TrackballConfig) -> Self {
        Self {
            version: SETTINGS_VERSION,
            trackball,
        }
    }
}

/// Validates `config` and renders it as a pretty-printed document.
pub fn encode(config: &TrackballConfig) -> Result<Vec<u8>, SettingsError> {
    config.validate()?;
    let bytes = serde_json::to_vec_pretty(&SettingsDocument::new(config.clone()))?;
    Ok(bytes)
}

/// Parses and validates a stored document.
///
/// Blank input means nothing has been stored yet and yields `Ok(None)`.
pub fn decode(bytes: &[u8]) -> Result<Option<TrackballConfig>, SettingsError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        debug!("blank settings document");
        return Ok(None);
    }
    let doc: SettingsDocument = serde_json::from_slice(bytes)?;
    if doc.version != SETTINGS_VERSION {
        return Err(SettingsError::UnsupportedVersion {
            found: doc.version,
            expected: SETTINGS_VERSION,
        });
    }
    if let Err(err) = doc.trackball.validate() {
        warn!(%err, "stored trackball config rejected");
        return Err(err.into());
    }
    Ok(Some(doc.trackball))
}
