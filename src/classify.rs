// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color-bucket classification.
//!
//! Maps a continuous HS color to one of a small set of named colors. The
//! buckets correspond to the externally configured actions: a light that
//! only knows "white", "red", "green" and "blue" scripts needs every
//! requested color reduced to one of those (or [`ColorBucket::Unmatched`]).

use std::fmt;

use crate::types::HsColor;

/// Result of classifying an HS color.
///
/// The hue ranges deliberately leave gaps (30-90°, 150-210°, 270-330°)
/// which classify as [`Unmatched`](Self::Unmatched). This is intentional
/// gamut limiting; callers must define fallback behavior for it. The
/// [`ScriptLight`](crate::light::ScriptLight) entity falls back to white
/// and resets its stored color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBucket {
    /// No explicit color, or saturation too low to be perceived as color.
    White,
    /// Hue in [0°, 30°) or [330°, 360°].
    Red,
    /// Hue in [90°, 150°].
    Green,
    /// Hue in [210°, 270°].
    Blue,
    /// Saturated color outside every supported hue range.
    Unmatched,
}

impl fmt::Display for ColorBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::White => "white",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Unmatched => "unmatched",
        };
        write!(f, "{name}")
    }
}

/// Classifies an HS color into a discrete color bucket.
///
/// Pure and total: every input maps to exactly one bucket.
///
/// - `None` means "no explicit color" and defaults to white.
/// - Saturation below [`HsColor::LOW_SATURATION`] is perceptually washed
///   out and classifies as white regardless of hue.
/// - Otherwise the hue ranges are tested in order, first match wins.
///
/// # Examples
///
/// ```
/// use scriptlight_lib::classify::{classify, ColorBucket};
/// use scriptlight_lib::types::HsColor;
///
/// assert_eq!(classify(None), ColorBucket::White);
/// assert_eq!(
///     classify(Some(HsColor::new(15.0, 80.0).unwrap())),
///     ColorBucket::Red
/// );
/// assert_eq!(
///     classify(Some(HsColor::new(45.0, 80.0).unwrap())),
///     ColorBucket::Unmatched
/// );
/// ```
#[must_use]
pub fn classify(color: Option<HsColor>) -> ColorBucket {
    let Some(color) = color else {
        tracing::debug!("no color provided, defaulting to white");
        return ColorBucket::White;
    };

    let hue = color.hue();
    let saturation = color.saturation();
    tracing::debug!(hue, saturation, "classifying color");

    if saturation < HsColor::LOW_SATURATION {
        return ColorBucket::White;
    }

    if (0.0..30.0).contains(&hue) || (330.0..=360.0).contains(&hue) {
        ColorBucket::Red
    } else if (90.0..=150.0).contains(&hue) {
        ColorBucket::Green
    } else if (210.0..=270.0).contains(&hue) {
        ColorBucket::Blue
    } else {
        ColorBucket::Unmatched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hs(hue: f32, saturation: f32) -> Option<HsColor> {
        Some(HsColor::new(hue, saturation).unwrap())
    }

    #[test]
    fn absent_color_is_white() {
        assert_eq!(classify(None), ColorBucket::White);
    }

    #[test]
    fn low_saturation_is_white_for_every_hue() {
        for hue in [0.0, 45.0, 90.0, 180.0, 270.0, 330.0, 360.0] {
            assert_eq!(classify(hs(hue, 9.999)), ColorBucket::White);
            assert_eq!(classify(hs(hue, 0.0)), ColorBucket::White);
        }
    }

    #[test]
    fn red_hue_boundaries() {
        assert_eq!(classify(hs(0.0, 50.0)), ColorBucket::Red);
        assert_eq!(classify(hs(29.999, 50.0)), ColorBucket::Red);
        assert_eq!(classify(hs(30.0, 50.0)), ColorBucket::Unmatched);
        assert_eq!(classify(hs(330.0, 50.0)), ColorBucket::Red);
        assert_eq!(classify(hs(329.999, 50.0)), ColorBucket::Unmatched);
        assert_eq!(classify(hs(360.0, 50.0)), ColorBucket::Red);
    }

    #[test]
    fn green_hue_boundaries() {
        assert_eq!(classify(hs(90.0, 50.0)), ColorBucket::Green);
        assert_eq!(classify(hs(120.0, 50.0)), ColorBucket::Green);
        assert_eq!(classify(hs(150.0, 50.0)), ColorBucket::Green);
        assert_eq!(classify(hs(89.999, 50.0)), ColorBucket::Unmatched);
        assert_eq!(classify(hs(150.001, 50.0)), ColorBucket::Unmatched);
    }

    #[test]
    fn blue_hue_boundaries() {
        assert_eq!(classify(hs(210.0, 50.0)), ColorBucket::Blue);
        assert_eq!(classify(hs(240.0, 50.0)), ColorBucket::Blue);
        assert_eq!(classify(hs(270.0, 50.0)), ColorBucket::Blue);
        assert_eq!(classify(hs(209.999, 50.0)), ColorBucket::Unmatched);
        assert_eq!(classify(hs(270.001, 50.0)), ColorBucket::Unmatched);
    }

    #[test]
    fn gamut_gaps_are_unmatched() {
        for hue in [45.0, 60.0, 89.0, 170.0, 200.0, 290.0, 320.0] {
            assert_eq!(classify(hs(hue, 50.0)), ColorBucket::Unmatched, "hue {hue}");
        }
    }

    #[test]
    fn saturation_threshold_is_exclusive() {
        // Exactly 10% is saturated enough to match a hue range.
        assert_eq!(classify(hs(0.0, 10.0)), ColorBucket::Red);
        assert_eq!(classify(hs(0.0, 9.999)), ColorBucket::White);
    }

    #[test]
    fn bucket_display_names() {
        assert_eq!(ColorBucket::White.to_string(), "white");
        assert_eq!(ColorBucket::Unmatched.to_string(), "unmatched");
    }
}
