// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light state tracking.

use std::fmt;

use crate::types::HsColor;

/// The on/off and color state of a script-backed light.
///
/// The state is ephemeral: it starts off with no color and is mutated
/// only by turn-on and turn-off requests. It is never persisted across
/// process restarts.
///
/// Invariants, enforced by construction:
///
/// - the color is always absent when the light is off;
/// - when on with an explicitly requested color, the stored color is
///   exactly the requested HS pair. The matched bucket is a derived view
///   used to pick an action, never stored.
///
/// # Examples
///
/// ```
/// use scriptlight_lib::state::LightState;
/// use scriptlight_lib::types::HsColor;
///
/// let state = LightState::on_with(HsColor::new(15.0, 80.0).unwrap());
/// assert!(state.is_on());
/// assert_eq!(state.color().unwrap().hue(), 15.0);
///
/// assert_eq!(LightState::off().color(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct LightState {
    is_on: bool,
    color: Option<HsColor>,
}

impl LightState {
    /// Creates the off state (no color).
    #[must_use]
    pub const fn off() -> Self {
        Self {
            is_on: false,
            color: None,
        }
    }

    /// Creates an on state carrying the given color.
    #[must_use]
    pub const fn on_with(color: HsColor) -> Self {
        Self {
            is_on: true,
            color: Some(color),
        }
    }

    /// Returns `true` if the light is on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.is_on
    }

    /// Returns the stored HS color, if any.
    ///
    /// Always `None` when the light is off.
    #[must_use]
    pub const fn color(&self) -> Option<HsColor> {
        self.color
    }
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Some(color) if self.is_on => write!(f, "on {color}"),
            _ if self.is_on => write!(f, "on"),
            _ => write!(f, "off"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_off_without_color() {
        let state = LightState::default();
        assert!(!state.is_on());
        assert_eq!(state.color(), None);
    }

    #[test]
    fn off_state_has_no_color() {
        assert_eq!(LightState::off().color(), None);
    }

    #[test]
    fn on_state_keeps_requested_color() {
        let color = HsColor::new(15.0, 80.0).unwrap();
        let state = LightState::on_with(color);
        assert!(state.is_on());
        assert_eq!(state.color(), Some(color));
    }

    #[test]
    fn display_formats() {
        assert_eq!(LightState::off().to_string(), "off");
        assert_eq!(
            LightState::on_with(HsColor::white()).to_string(),
            "on HS(0°, 0%)"
        );
    }
}
