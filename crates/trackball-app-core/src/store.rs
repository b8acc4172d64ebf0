// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Storage port for trackball settings.

use std::cell::RefCell;

use tracing::{debug, warn};
use trackball_core::TrackballConfig;

use crate::document::{decode, encode};
use crate::error::SettingsError;

/// Somewhere a host keeps its trackball settings.
///
/// Implementations go through [`encode`] and [`decode`], so `save` refuses
/// invalid configurations before touching storage and `load` never returns
/// one.
pub trait SettingsStore {
    /// Reads the stored configuration; `Ok(None)` when nothing is stored.
    fn load(&self) -> Result<Option<TrackballConfig>, SettingsError>;

    /// Validates and persists `config`.
    fn save(&self, config: &TrackballConfig) -> Result<(), SettingsError>;

    /// Stored configuration, or defaults when absent or unreadable.
    ///
    /// Failures are logged and otherwise swallowed so a damaged file never
    /// keeps the host from starting.
    fn load_or_default(&self) -> TrackballConfig {
        match self.load() {
            Ok(Some(config)) => config,
            Ok(None) => {
                debug!("no stored trackball settings; using defaults");
                TrackballConfig::default()
            }
            Err(err) => {
                warn!(%err, "trackball settings unreadable; using defaults");
                TrackballConfig::default()
            }
        }
    }
}

/// In-memory store for tests and hosts without persistent storage.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    bytes: RefCell<Option<Vec<u8>>>,
}

impl MemorySettingsStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with raw document bytes.
    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: RefCell::new(Some(bytes.into())),
        }
    }

    /// Raw document bytes currently stored.
    pub fn bytes(&self) -> Option<Vec<u8>> {
        self.bytes.borrow().clone()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<Option<TrackballConfig>, SettingsError> {
        match self.bytes.borrow().as_deref() {
            Some(bytes) => decode(bytes),
            None => Ok(None),
        }
    }

    fn save(&self, config: &TrackballConfig) -> Result<(), SettingsError> {
        let bytes = encode(config)?;
        debug!(bytes = bytes.len(), "trackball settings stored in memory");
        *self.bytes.borrow_mut() = Some(bytes);
        Ok(())
    }
}
