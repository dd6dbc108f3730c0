// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The script-backed light entity.
//!
//! A [`ScriptLight`] does not drive hardware. Turning it on resolves the
//! requested HS color to a [`ColorBucket`] and invokes the corresponding
//! externally defined action through the caller-supplied
//! [`ActionInvoker`]; the classified bucket is never stored, only the
//! requested HS pair is. Conversions to RGB/RGBW/RGBWW/xy are derived
//! views over that stored pair, used for status reporting.

use std::fmt;

use parking_lot::RwLock;

use crate::classify::{ColorBucket, classify};
use crate::config::ActionMap;
use crate::dispatch::{ActionInvoker, NullStateSink, StateSink};
use crate::error::{DispatchError, Error, Result};
use crate::state::LightState;
use crate::types::{HsColor, RgbColor, RgbwColor, RgbwwColor, XyColor};

/// Governs when a requested state change is committed.
///
/// The reference behavior is optimistic: state reflects the request even
/// if the dispatched action failed. A hardened deployment can opt into
/// confirmed updates instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdatePolicy {
    /// Commit the state change regardless of the action outcome. The
    /// invocation error is still returned to the caller.
    #[default]
    Optimistic,
    /// Commit the state change only when the action succeeded; a failed
    /// action leaves the previous state intact.
    Confirmed,
}

/// A virtual light whose colors are rendered by external actions.
///
/// # Examples
///
/// ```
/// use scriptlight_lib::dispatch::ActionInvoker;
/// use scriptlight_lib::error::DispatchError;
/// use scriptlight_lib::types::HsColor;
/// use scriptlight_lib::{ActionMap, ColorBucket, ScriptLight};
///
/// struct Invoker;
///
/// impl ActionInvoker for Invoker {
///     async fn invoke(&self, _action_key: &str) -> Result<(), DispatchError> {
///         Ok(())
///     }
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> scriptlight_lib::Result<()> {
/// let light = ScriptLight::new(
///     "Living Room Ceiling",
///     ActionMap::new("on", "off", "white", "red", "green", "blue"),
///     Invoker,
/// )?;
///
/// let bucket = light.turn_on(Some(HsColor::new(15.0, 80.0)?)).await?;
/// assert_eq!(bucket, ColorBucket::Red);
/// assert!(light.is_on());
///
/// light.turn_off().await?;
/// assert_eq!(light.hs_color(), None);
/// # Ok(())
/// # }
/// ```
pub struct ScriptLight<I> {
    name: String,
    actions: ActionMap,
    invoker: I,
    sink: Box<dyn StateSink>,
    policy: UpdatePolicy,
    state: RwLock<LightState>,
}

impl<I: ActionInvoker> ScriptLight<I> {
    /// Creates a new light with the given name, action map and invoker.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyActionKey` if the action map contains
    /// an empty key.
    pub fn new(name: impl Into<String>, actions: ActionMap, invoker: I) -> Result<Self> {
        actions.validate()?;
        Ok(Self {
            name: name.into(),
            actions,
            invoker,
            sink: Box::new(NullStateSink),
            policy: UpdatePolicy::default(),
            state: RwLock::new(LightState::off()),
        })
    }

    /// Sets the sink notified after every committed state change.
    #[must_use]
    pub fn with_state_sink(mut self, sink: impl StateSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Sets the update policy.
    #[must_use]
    pub fn with_update_policy(mut self, policy: UpdatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the light's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a unique ID derived from the name.
    #[must_use]
    pub fn unique_id(&self) -> String {
        format!("{}_light", self.name.to_lowercase().replace(' ', "_"))
    }

    /// Returns the configured action map.
    #[must_use]
    pub fn actions(&self) -> &ActionMap {
        &self.actions
    }

    /// Returns the active update policy.
    #[must_use]
    pub fn update_policy(&self) -> UpdatePolicy {
        self.policy
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> LightState {
        *self.state.read()
    }

    /// Returns `true` if the light is on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.state.read().is_on()
    }

    /// Returns the stored HS color, if any.
    #[must_use]
    pub fn hs_color(&self) -> Option<HsColor> {
        self.state.read().color()
    }

    /// Returns the current color as RGB, if a color is stored.
    #[must_use]
    pub fn rgb_color(&self) -> Option<RgbColor> {
        self.hs_color().map(|c| c.to_rgb())
    }

    /// Returns the current color as RGBW, if a color is stored.
    #[must_use]
    pub fn rgbw_color(&self) -> Option<RgbwColor> {
        self.hs_color().map(|c| c.to_rgbw())
    }

    /// Returns the current color as RGBWW, if a color is stored.
    #[must_use]
    pub fn rgbww_color(&self) -> Option<RgbwwColor> {
        self.hs_color().map(|c| c.to_rgbww())
    }

    /// Returns the current color as xy chromaticity, if a color is stored.
    #[must_use]
    pub fn xy_color(&self) -> Option<XyColor> {
        self.hs_color().map(|c| c.to_xy())
    }

    /// Returns the reported brightness: 255 while on, `None` while off.
    ///
    /// The backing scripts control actual brightness; the entity always
    /// reports full brightness while on.
    #[must_use]
    pub fn brightness(&self) -> Option<u8> {
        self.is_on().then_some(255)
    }

    /// Turns the light on, optionally with an explicit color.
    ///
    /// The color is classified into a bucket and the bucket's action is
    /// invoked. Two fallbacks apply:
    ///
    /// - without an explicit color, the default on action runs and the
    ///   stored color resets to white `(0, 0)`;
    /// - an unmatched color falls back to the white action and also
    ///   resets the stored color to `(0, 0)`.
    ///
    /// Returns the bucket whose action was invoked.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError` if the action failed. Under
    /// [`UpdatePolicy::Optimistic`] the state change is committed even
    /// then; under [`UpdatePolicy::Confirmed`] the previous state is
    /// kept.
    pub async fn turn_on(&self, color: Option<HsColor>) -> Result<ColorBucket> {
        let (bucket, action, stored) = match (color, classify(color)) {
            (Some(requested), ColorBucket::Unmatched) => {
                tracing::warn!(
                    light = %self.name,
                    color = %requested,
                    "no matching color, falling back to white"
                );
                (
                    ColorBucket::White,
                    self.actions.white_action(),
                    HsColor::white(),
                )
            }
            (Some(requested), bucket) => (bucket, self.actions.action_for(bucket), requested),
            (None, _) => (
                ColorBucket::White,
                self.actions.on_action(),
                HsColor::white(),
            ),
        };

        tracing::info!(light = %self.name, action, bucket = %bucket, "turning on");
        let outcome = self.invoker.invoke(action).await;
        self.apply(LightState::on_with(stored), outcome)?;
        Ok(bucket)
    }

    /// Turns the light off by invoking the configured off action.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError` if the action failed; state handling
    /// follows the update policy as in [`turn_on`](Self::turn_on).
    pub async fn turn_off(&self) -> Result<()> {
        let action = self.actions.off_action();
        tracing::info!(light = %self.name, action, "turning off");
        let outcome = self.invoker.invoke(action).await;
        self.apply(LightState::off(), outcome)
    }

    /// Applies a state transition according to the update policy and
    /// reports the action outcome.
    fn apply(&self, next: LightState, outcome: std::result::Result<(), DispatchError>) -> Result<()> {
        match (&outcome, self.policy) {
            (Ok(()), _) => self.commit(next),
            (Err(e), UpdatePolicy::Optimistic) => {
                tracing::warn!(light = %self.name, error = %e, "action failed, committing state optimistically");
                self.commit(next);
            }
            (Err(e), UpdatePolicy::Confirmed) => {
                tracing::warn!(light = %self.name, error = %e, "action failed, keeping previous state");
            }
        }
        outcome.map_err(Error::from)
    }

    fn commit(&self, next: LightState) {
        *self.state.write() = next;
        self.sink.state_changed(&next);
    }
}

impl<I> fmt::Debug for ScriptLight<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptLight")
            .field("name", &self.name)
            .field("policy", &self.policy)
            .field("state", &*self.state.read())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    struct OkInvoker;

    impl ActionInvoker for OkInvoker {
        async fn invoke(&self, _action_key: &str) -> std::result::Result<(), DispatchError> {
            Ok(())
        }
    }

    fn sample_actions() -> ActionMap {
        ActionMap::new("on", "off", "white", "red", "green", "blue")
    }

    #[test]
    fn new_validates_action_map() {
        let result = ScriptLight::new(
            "Test",
            sample_actions().with_off_action(""),
            OkInvoker,
        );
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::EmptyActionKey("off_action")))
        ));
    }

    #[test]
    fn starts_off_without_color() {
        let light = ScriptLight::new("Test", sample_actions(), OkInvoker).unwrap();
        assert!(!light.is_on());
        assert_eq!(light.hs_color(), None);
        assert_eq!(light.rgb_color(), None);
        assert_eq!(light.brightness(), None);
    }

    #[test]
    fn unique_id_is_a_name_slug() {
        let light =
            ScriptLight::new("Wohnzimmer Deckenleuchte RGB", sample_actions(), OkInvoker).unwrap();
        assert_eq!(light.unique_id(), "wohnzimmer_deckenleuchte_rgb_light");
    }

    #[test]
    fn default_policy_is_optimistic() {
        let light = ScriptLight::new("Test", sample_actions(), OkInvoker).unwrap();
        assert_eq!(light.update_policy(), UpdatePolicy::Optimistic);
    }
}
