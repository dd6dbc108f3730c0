// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HS (hue/saturation) color type.
//!
//! This is the primary color representation of the library: a point in HS
//! color space, independent of brightness. All classification and color
//! space conversions start from this type.

use std::fmt;

use crate::error::ValueError;

use super::{RgbColor, RgbwColor, RgbwwColor, XyColor};

/// HS color representation (hue in degrees, saturation in percent).
///
/// # Examples
///
/// ```
/// use scriptlight_lib::types::HsColor;
///
/// // A saturated red
/// let red = HsColor::new(0.0, 100.0).unwrap();
/// assert_eq!(red.hue(), 0.0);
/// assert_eq!(red.saturation(), 100.0);
///
/// // Derive other color representations
/// let rgb = red.to_rgb();
/// assert_eq!((rgb.red(), rgb.green(), rgb.blue()), (255, 0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HsColor {
    hue: f32,
    saturation: f32,
}

impl HsColor {
    /// Maximum hue value in degrees.
    pub const MAX_HUE: f32 = 360.0;

    /// Maximum saturation value in percent.
    pub const MAX_SATURATION: f32 = 100.0;

    /// Saturation below this threshold is treated as white.
    ///
    /// Shared by the classifier and the white-channel policies of the
    /// RGBW/RGBWW conversions.
    pub const LOW_SATURATION: f32 = 10.0;

    /// Creates a new HS color.
    ///
    /// # Arguments
    ///
    /// * `hue` - Color hue (0-360 degrees, where 0/360 is red)
    /// * `saturation` - Color saturation (0-100%)
    ///
    /// # Errors
    ///
    /// Returns error if either value is not finite or outside its valid
    /// range.
    pub fn new(hue: f32, saturation: f32) -> Result<Self, ValueError> {
        if !hue.is_finite() || !(0.0..=Self::MAX_HUE).contains(&hue) {
            return Err(ValueError::InvalidHue(hue));
        }
        if !saturation.is_finite() || !(0.0..=Self::MAX_SATURATION).contains(&saturation) {
            return Err(ValueError::InvalidSaturation(saturation));
        }
        Ok(Self { hue, saturation })
    }

    /// Creates a white color (hue 0, saturation 0).
    #[must_use]
    pub const fn white() -> Self {
        Self {
            hue: 0.0,
            saturation: 0.0,
        }
    }

    /// Creates a fully saturated red.
    #[must_use]
    pub const fn red() -> Self {
        Self {
            hue: 0.0,
            saturation: 100.0,
        }
    }

    /// Creates a fully saturated green.
    #[must_use]
    pub const fn green() -> Self {
        Self {
            hue: 120.0,
            saturation: 100.0,
        }
    }

    /// Creates a fully saturated blue.
    #[must_use]
    pub const fn blue() -> Self {
        Self {
            hue: 240.0,
            saturation: 100.0,
        }
    }

    /// Returns the hue in degrees (0-360).
    #[must_use]
    pub const fn hue(&self) -> f32 {
        self.hue
    }

    /// Returns the saturation in percent (0-100).
    #[must_use]
    pub const fn saturation(&self) -> f32 {
        self.saturation
    }

    /// Returns `true` if the saturation is below the white threshold.
    #[must_use]
    pub fn is_low_saturation(&self) -> bool {
        self.saturation < Self::LOW_SATURATION
    }

    /// Converts this color to RGB at full brightness.
    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        crate::convert::hs_to_rgb(self.hue, self.saturation)
    }

    /// Converts this color to RGBW at full brightness.
    #[must_use]
    pub fn to_rgbw(&self) -> RgbwColor {
        crate::convert::hs_to_rgbw(self.hue, self.saturation)
    }

    /// Converts this color to RGBWW at full brightness.
    #[must_use]
    pub fn to_rgbww(&self) -> RgbwwColor {
        crate::convert::hs_to_rgbww(self.hue, self.saturation)
    }

    /// Converts this color to CIE 1931 xy chromaticity coordinates.
    #[must_use]
    pub fn to_xy(&self) -> XyColor {
        crate::convert::hs_to_xy(self.hue, self.saturation)
    }
}

impl Default for HsColor {
    fn default() -> Self {
        Self::white()
    }
}

impl fmt::Display for HsColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HS({}°, {}%)", self.hue, self.saturation)
    }
}

impl From<HsColor> for (f32, f32) {
    fn from(color: HsColor) -> Self {
        (color.hue, color.saturation)
    }
}

impl TryFrom<(f32, f32)> for HsColor {
    type Error = ValueError;

    fn try_from((hue, saturation): (f32, f32)) -> Result<Self, Self::Error> {
        Self::new(hue, saturation)
    }
}
