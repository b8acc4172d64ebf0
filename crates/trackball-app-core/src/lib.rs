// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Persisted trackball settings for hosts.
//!
//! A [`SettingsDocument`] wraps a [`trackball_core::TrackballConfig`] in a
//! versioned JSON envelope; [`SettingsStore`] is the port hosts implement to
//! keep it somewhere. Both directions validate, so a store never hands out
//! or writes a configuration the controller would refuse.

#![forbid(unsafe_code)]

pub mod document;
pub mod error;
pub mod store;

pub use document::{decode, encode, SettingsDocument, SETTINGS_VERSION};
pub use error::SettingsError;
pub use store::{MemorySettingsStore, SettingsStore};
