// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `ScriptLight` library.
//!
//! This module provides the error hierarchy for handling failures across
//! the library: value validation, configuration problems, and action
//! dispatch failures reported by the host system.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when working
/// with a script-backed light.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred in the action configuration.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Error occurred while dispatching an external action.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A hue value is outside the valid range (0-360) or not finite.
    #[error("hue value {0} is out of range [0, 360]")]
    InvalidHue(f32),

    /// A saturation value is outside the valid range (0-100) or not finite.
    #[error("saturation value {0} is out of range [0, 100]")]
    InvalidSaturation(f32),
}

/// Errors related to the action configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An action key is empty or contains only whitespace.
    #[error("action key for {0} must not be empty")]
    EmptyActionKey(&'static str),

    /// JSON parsing of a configuration entry failed.
    #[error("invalid configuration JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Errors reported by an [`ActionInvoker`](crate::dispatch::ActionInvoker)
/// when an external action fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The invoked action reported a failure.
    #[error("action '{action}' failed: {reason}")]
    ActionFailed {
        /// The action key that was invoked.
        action: String,
        /// Description of the failure.
        reason: String,
    },

    /// The dispatcher is not available to take requests.
    #[error("action dispatcher is unavailable")]
    Unavailable,
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::InvalidHue(400.5);
        assert_eq!(err.to_string(), "hue value 400.5 is out of range [0, 360]");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::InvalidSaturation(101.0);
        let err: Error = value_err.into();
        assert!(matches!(
            err,
            Error::Value(ValueError::InvalidSaturation(s)) if s == 101.0
        ));
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::EmptyActionKey("red_action");
        assert_eq!(err.to_string(), "action key for red_action must not be empty");
    }

    #[test]
    fn dispatch_error_display() {
        let err = DispatchError::ActionFailed {
            action: "scene_red".to_string(),
            reason: "script not found".to_string(),
        };
        assert_eq!(err.to_string(), "action 'scene_red' failed: script not found");
    }
}
