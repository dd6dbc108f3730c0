// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CIE 1931 xy chromaticity coordinates.

use std::fmt;

/// A point in the CIE 1931 xy chromaticity diagram.
///
/// Both coordinates are normalized shares of the XYZ sum, so for any
/// color derived from a valid RGB triple `x + y <= 1.0`. Pure black has
/// no chromaticity and degenerates to `(0, 0)`.
///
/// # Examples
///
/// ```
/// use scriptlight_lib::types::HsColor;
///
/// // D65-ish white point of sRGB
/// let xy = HsColor::white().to_xy();
/// assert!((xy.x() - 0.3127).abs() < 0.001);
/// assert!((xy.y() - 0.3290).abs() < 0.001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct XyColor {
    x: f32,
    y: f32,
}

impl XyColor {
    /// Creates a new xy chromaticity pair.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The degenerate chromaticity of pure black.
    pub const BLACK: Self = Self { x: 0.0, y: 0.0 };

    /// Returns the x coordinate.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }
}

impl fmt::Display for XyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "xy({:.4}, {:.4})", self.x, self.y)
    }
}

impl From<XyColor> for (f32, f32) {
    fn from(color: XyColor) -> Self {
        (color.x, color.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xy_color_accessors() {
        let xy = XyColor::new(0.64, 0.33);
        assert_eq!(xy.x(), 0.64);
        assert_eq!(xy.y(), 0.33);
    }

    #[test]
    fn xy_color_black() {
        assert_eq!(XyColor::BLACK, XyColor::new(0.0, 0.0));
    }

    #[test]
    fn xy_color_display() {
        assert_eq!(XyColor::new(0.3127, 0.329).to_string(), "xy(0.3127, 0.3290)");
    }
}
