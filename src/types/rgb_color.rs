// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color types with optional white channels.
//!
//! These types are derived views of an [`HsColor`](super::HsColor) used
//! for status reporting. [`RgbwColor`] carries a single white channel,
//! [`RgbwwColor`] separate warm and cool white channels.

use std::fmt;

/// RGB color with 8-bit channels (0-255).
///
/// # Examples
///
/// ```
/// use scriptlight_lib::types::RgbColor;
///
/// let orange = RgbColor::new(255, 165, 0);
/// assert_eq!(orange.red(), 255);
/// assert_eq!(orange.to_string(), "#FFA500");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Creates a white color.
    #[must_use]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Creates a black color.
    #[must_use]
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the color as a hex string with the hash prefix.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Attaches a white channel, producing an RGBW color.
    #[must_use]
    pub const fn with_white(self, white: u8) -> RgbwColor {
        RgbwColor { rgb: self, white }
    }

    /// Attaches warm and cool white channels, producing an RGBWW color.
    #[must_use]
    pub const fn with_whites(self, warm_white: u8, cool_white: u8) -> RgbwwColor {
        RgbwwColor {
            rgb: self,
            warm_white,
            cool_white,
        }
    }
}

impl Default for RgbColor {
    fn default() -> Self {
        Self::white()
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<RgbColor> for (u8, u8, u8) {
    fn from(color: RgbColor) -> Self {
        (color.red, color.green, color.blue)
    }
}

/// RGB color with an additional white channel (0-255).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RgbwColor {
    #[serde(flatten)]
    rgb: RgbColor,
    white: u8,
}

impl RgbwColor {
    /// Creates a new RGBW color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8, white: u8) -> Self {
        Self {
            rgb: RgbColor::new(red, green, blue),
            white,
        }
    }

    /// Returns the RGB portion of this color.
    #[must_use]
    pub const fn rgb(&self) -> RgbColor {
        self.rgb
    }

    /// Returns the white channel.
    #[must_use]
    pub const fn white(&self) -> u8 {
        self.white
    }
}

impl fmt::Display for RgbwColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} W{}", self.rgb, self.white)
    }
}

impl From<RgbwColor> for (u8, u8, u8, u8) {
    fn from(color: RgbwColor) -> Self {
        (
            color.rgb.red,
            color.rgb.green,
            color.rgb.blue,
            color.white,
        )
    }
}

/// RGB color with separate warm-white and cool-white channels (0-255).
///
/// At most one of the two white channels is nonzero when derived from an
/// HS color (warm below hue 50, cool at or above).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RgbwwColor {
    #[serde(flatten)]
    rgb: RgbColor,
    warm_white: u8,
    cool_white: u8,
}

impl RgbwwColor {
    /// Creates a new RGBWW color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8, warm_white: u8, cool_white: u8) -> Self {
        Self {
            rgb: RgbColor::new(red, green, blue),
            warm_white,
            cool_white,
        }
    }

    /// Returns the RGB portion of this color.
    #[must_use]
    pub const fn rgb(&self) -> RgbColor {
        self.rgb
    }

    /// Returns the warm-white channel.
    #[must_use]
    pub const fn warm_white(&self) -> u8 {
        self.warm_white
    }

    /// Returns the cool-white channel.
    #[must_use]
    pub const fn cool_white(&self) -> u8 {
        self.cool_white
    }
}

impl fmt::Display for RgbwwColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} WW{} CW{}", self.rgb, self.warm_white, self.cool_white)
    }
}

impl From<RgbwwColor> for (u8, u8, u8, u8, u8) {
    fn from(color: RgbwwColor) -> Self {
        (
            color.rgb.red,
            color.rgb.green,
            color.rgb.blue,
            color.warm_white,
            color.cool_white,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_color_accessors() {
        let color = RgbColor::new(255, 128, 0);
        assert_eq!(color.red(), 255);
        assert_eq!(color.green(), 128);
        assert_eq!(color.blue(), 0);
    }

    #[test]
    fn rgb_color_hex() {
        assert_eq!(RgbColor::new(255, 128, 0).to_hex(), "#FF8000");
        assert_eq!(RgbColor::black().to_hex(), "#000000");
    }

    #[test]
    fn rgb_color_tuple_conversions() {
        let color: RgbColor = (10, 20, 30).into();
        let tuple: (u8, u8, u8) = color.into();
        assert_eq!(tuple, (10, 20, 30));
    }

    #[test]
    fn rgbw_color_channels() {
        let color = RgbColor::new(1, 2, 3).with_white(255);
        assert_eq!(color.rgb(), RgbColor::new(1, 2, 3));
        assert_eq!(color.white(), 255);
        assert_eq!(<(u8, u8, u8, u8)>::from(color), (1, 2, 3, 255));
    }

    #[test]
    fn rgbww_color_channels() {
        let color = RgbColor::new(1, 2, 3).with_whites(255, 0);
        assert_eq!(color.warm_white(), 255);
        assert_eq!(color.cool_white(), 0);
        assert_eq!(<(u8, u8, u8, u8, u8)>::from(color), (1, 2, 3, 255, 0));
    }

    #[test]
    fn rgbww_display() {
        let color = RgbwwColor::new(255, 255, 255, 0, 255);
        assert_eq!(color.to_string(), "#FFFFFF WW0 CW255");
    }
}
