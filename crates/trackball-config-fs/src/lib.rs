// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filesystem-backed [`SettingsStore`] (uses the platform config dir).
//!
//! Saves are atomic: the document is written to a temporary file beside the
//! target and renamed over it, so a crash mid-write leaves the previous
//! settings intact.

#![forbid(unsafe_code)]

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tempfile::NamedTempFile;
use tracing::debug;
use trackball_app_core::{decode, encode, SettingsError, SettingsStore};
use trackball_core::TrackballConfig;

/// File name used under the platform config directory.
pub const SETTINGS_FILE: &str = "trackball.json";

/// Keeps the settings document in a single JSON file.
#[derive(Debug, Clone)]
pub struct FsSettingsStore {
    path: PathBuf,
}

impl FsSettingsStore {
    /// Store at [`SETTINGS_FILE`] under the user config directory
    /// (e.g., `~/.config/trackball/trackball.json`).
    pub fn new() -> Result<Self, SettingsError> {
        let proj = ProjectDirs::from("dev", "flyingrobots", "trackball")
            .ok_or(SettingsError::NoConfigDir)?;
        Ok(Self::at(proj.config_dir().join(SETTINGS_FILE)))
    }

    /// Store at an explicit file path. Parent directories are created on
    /// the first save.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File holding the settings document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl SettingsStore for FsSettingsStore {
    fn load(&self) -> Result<Option<TrackballConfig>, SettingsError> {
        match fs::read(&self.path) {
            Ok(bytes) => decode(&bytes),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no settings file");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, config: &TrackballConfig) -> Result<(), SettingsError> {
        let bytes = encode(config)?;
        let dir = self.dir();
        fs::create_dir_all(dir)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|err| err.error)?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "settings written");
        Ok(())
    }
}
