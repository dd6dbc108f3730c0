// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Action configuration for a script-backed light.
//!
//! An [`ActionMap`] names the external action invoked for each color
//! bucket, plus the default "turn on" and "turn off" actions. It is
//! passed explicitly at construction time; there is no ambient global
//! registry.

use serde::{Deserialize, Serialize};

use crate::classify::ColorBucket;
use crate::error::ConfigError;

/// Maps color buckets and power transitions to external action keys.
///
/// Action keys are opaque identifiers resolved by the host's
/// [`ActionInvoker`](crate::dispatch::ActionInvoker), typically the names
/// of scripts or automations.
///
/// The serialized form uses the `*_script` field names of existing
/// configuration entries.
///
/// # Examples
///
/// ```
/// use scriptlight_lib::config::ActionMap;
///
/// let actions = ActionMap::new(
///     "ceiling_turn_on",
///     "ceiling_switch",
///     "ceiling_white",
///     "ceiling_red",
///     "ceiling_green",
///     "ceiling_blue",
/// );
/// assert_eq!(actions.off_action(), "ceiling_switch");
///
/// // Or from a stored configuration entry
/// let actions = ActionMap::from_json(r#"{
///     "on_script": "ceiling_turn_on",
///     "off_script": "ceiling_switch",
///     "white_script": "ceiling_white",
///     "red_script": "ceiling_red",
///     "green_script": "ceiling_green",
///     "blue_script": "ceiling_blue"
/// }"#).unwrap();
/// assert_eq!(actions.red_action(), "ceiling_red");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionMap {
    /// Action invoked when turning on without an explicit color.
    #[serde(rename = "on_script")]
    on_action: String,
    /// Action invoked when turning off.
    #[serde(rename = "off_script")]
    off_action: String,
    /// Action for the white bucket (also the unmatched-color fallback).
    #[serde(rename = "white_script")]
    white_action: String,
    /// Action for the red bucket.
    #[serde(rename = "red_script")]
    red_action: String,
    /// Action for the green bucket.
    #[serde(rename = "green_script")]
    green_action: String,
    /// Action for the blue bucket.
    #[serde(rename = "blue_script")]
    blue_action: String,
}

impl ActionMap {
    /// Creates a new action map.
    pub fn new(
        on_action: impl Into<String>,
        off_action: impl Into<String>,
        white_action: impl Into<String>,
        red_action: impl Into<String>,
        green_action: impl Into<String>,
        blue_action: impl Into<String>,
    ) -> Self {
        Self {
            on_action: on_action.into(),
            off_action: off_action.into(),
            white_action: white_action.into(),
            red_action: red_action.into(),
            green_action: green_action.into(),
            blue_action: blue_action.into(),
        }
    }

    /// Parses an action map from a JSON configuration entry.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidJson` if the JSON is malformed or a
    /// field is missing.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replaces the on action.
    #[must_use]
    pub fn with_on_action(mut self, action: impl Into<String>) -> Self {
        self.on_action = action.into();
        self
    }

    /// Replaces the off action.
    #[must_use]
    pub fn with_off_action(mut self, action: impl Into<String>) -> Self {
        self.off_action = action.into();
        self
    }

    /// Replaces the white action.
    #[must_use]
    pub fn with_white_action(mut self, action: impl Into<String>) -> Self {
        self.white_action = action.into();
        self
    }

    /// Returns the on action key.
    #[must_use]
    pub fn on_action(&self) -> &str {
        &self.on_action
    }

    /// Returns the off action key.
    #[must_use]
    pub fn off_action(&self) -> &str {
        &self.off_action
    }

    /// Returns the white action key.
    #[must_use]
    pub fn white_action(&self) -> &str {
        &self.white_action
    }

    /// Returns the red action key.
    #[must_use]
    pub fn red_action(&self) -> &str {
        &self.red_action
    }

    /// Returns the green action key.
    #[must_use]
    pub fn green_action(&self) -> &str {
        &self.green_action
    }

    /// Returns the blue action key.
    #[must_use]
    pub fn blue_action(&self) -> &str {
        &self.blue_action
    }

    /// Resolves the action key for a color bucket.
    ///
    /// [`ColorBucket::Unmatched`] resolves to the white action, the
    /// fallback for colors outside the supported gamut.
    #[must_use]
    pub fn action_for(&self, bucket: ColorBucket) -> &str {
        match bucket {
            ColorBucket::White | ColorBucket::Unmatched => &self.white_action,
            ColorBucket::Red => &self.red_action,
            ColorBucket::Green => &self.green_action,
            ColorBucket::Blue => &self.blue_action,
        }
    }

    /// Validates that every action key is non-empty.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyActionKey` naming the first offending
    /// field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("on_action", &self.on_action),
            ("off_action", &self.off_action),
            ("white_action", &self.white_action),
            ("red_action", &self.red_action),
            ("green_action", &self.green_action),
            ("blue_action", &self.blue_action),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyActionKey(name));
            }
        }
        Ok(())
    }
}
