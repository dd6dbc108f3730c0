// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Seams toward the host system.
//!
//! The library never talks to a concrete automation backend. It consumes
//! exactly two narrow capabilities supplied by the caller:
//!
//! - [`ActionInvoker`] runs an externally defined action by key.
//! - [`StateSink`] is notified after every applied state change.
//!
//! Both replace what a host framework would otherwise provide through a
//! broad entity base class.

use crate::error::DispatchError;
use crate::state::LightState;

/// Capability to invoke an externally defined action.
///
/// An action key is an opaque identifier, typically the name of a script
/// or automation on the host system. The future resolves once the action
/// has completed, so callers can sequence state updates after it.
///
/// # Examples
///
/// ```
/// use scriptlight_lib::dispatch::ActionInvoker;
/// use scriptlight_lib::error::DispatchError;
///
/// struct LoggingInvoker;
///
/// impl ActionInvoker for LoggingInvoker {
///     async fn invoke(&self, action_key: &str) -> Result<(), DispatchError> {
///         println!("would run script {action_key}");
///         Ok(())
///     }
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait ActionInvoker {
    /// Invokes the action identified by `action_key`.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError` if the action could not be run or reported
    /// a failure.
    async fn invoke(&self, action_key: &str) -> Result<(), DispatchError>;
}

/// Capability to observe applied state changes.
///
/// Called after the light commits a new [`LightState`], replacing a host
/// framework's state-write notification. Implementations must be cheap
/// and non-blocking; they run on the caller's task.
pub trait StateSink: Send + Sync {
    /// Notifies the sink that `state` has been applied.
    fn state_changed(&self, state: &LightState);
}

/// A [`StateSink`] that discards all notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStateSink;

impl StateSink for NullStateSink {
    fn state_changed(&self, _state: &LightState) {}
}
