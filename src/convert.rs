// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color space conversions.
//!
//! All conversions start from an HS pair at full brightness (value fixed
//! at 1.0): the virtual light has no dimmer, it is either off or rendered
//! by an external script at whatever brightness that script drives.
//!
//! The functions here are pure, deterministic and total. Out-of-range
//! input is not validated and simply passes through the math; use
//! [`HsColor`](crate::types::HsColor) at the boundary to enforce ranges.

use crate::types::{HsColor, RgbColor, RgbwColor, RgbwwColor, XyColor};

/// Hue threshold separating warm from cool white in the RGBWW conversion.
const WARM_WHITE_MAX_HUE: f32 = 50.0;

/// Converts an HS color to RGB at full brightness.
///
/// Standard HSV to RGB transform with value fixed at 1.0. Each channel is
/// scaled by 255 and truncated (not rounded) to an integer.
///
/// # Examples
///
/// ```
/// use scriptlight_lib::convert::hs_to_rgb;
/// use scriptlight_lib::types::RgbColor;
///
/// assert_eq!(hs_to_rgb(0.0, 100.0), RgbColor::new(255, 0, 0));
/// assert_eq!(hs_to_rgb(180.0, 0.0), RgbColor::new(255, 255, 255));
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hs_to_rgb(hue: f32, saturation: f32) -> RgbColor {
    let h = hue / 360.0;
    let s = saturation / 100.0;
    let v = 1.0_f32;

    if s <= 0.0 {
        return RgbColor::new(255, 255, 255);
    }

    let sector = h * 6.0;
    let i = sector.floor();
    let f = sector - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match (i as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    // Truncate, do not round.
    RgbColor::new((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

/// Converts an HS color to RGBW at full brightness.
///
/// The white channel is binary: 255 when the saturation is below
/// [`HsColor::LOW_SATURATION`], 0 otherwise. There is no blended white
/// computation because the backing scripts only know "white or colored".
#[must_use]
pub fn hs_to_rgbw(hue: f32, saturation: f32) -> RgbwColor {
    let white = if saturation < HsColor::LOW_SATURATION {
        255
    } else {
        0
    };
    hs_to_rgb(hue, saturation).with_white(white)
}

/// Converts an HS color to RGBWW at full brightness.
///
/// Low-saturation colors light the warm channel for hues below 50° and
/// the cool channel at 50° and above. At most one of the two channels is
/// ever nonzero.
#[must_use]
pub fn hs_to_rgbww(hue: f32, saturation: f32) -> RgbwwColor {
    let low_saturation = saturation < HsColor::LOW_SATURATION;
    let warm_white = if low_saturation && hue < WARM_WHITE_MAX_HUE {
        255
    } else {
        0
    };
    let cool_white = if low_saturation && hue >= WARM_WHITE_MAX_HUE {
        255
    } else {
        0
    };
    hs_to_rgb(hue, saturation).with_whites(warm_white, cool_white)
}

/// Converts an HS color to CIE 1931 xy chromaticity coordinates.
///
/// Derives RGB via [`hs_to_rgb`] and projects it with [`rgb_to_xy`].
#[must_use]
pub fn hs_to_xy(hue: f32, saturation: f32) -> XyColor {
    rgb_to_xy(hs_to_rgb(hue, saturation))
}

/// Converts an sRGB color to CIE 1931 xy chromaticity coordinates.
///
/// Applies the inverse sRGB gamma to each channel, transforms linear RGB
/// to CIE XYZ with the standard sRGB/D65 matrix, then projects to the
/// chromaticity plane. Pure black has no chromaticity and maps to
/// [`XyColor::BLACK`].
#[must_use]
pub fn rgb_to_xy(rgb: RgbColor) -> XyColor {
    let r = srgb_to_linear(f32::from(rgb.red()) / 255.0);
    let g = srgb_to_linear(f32::from(rgb.green()) / 255.0);
    let b = srgb_to_linear(f32::from(rgb.blue()) / 255.0);

    // sRGB D65 reference primaries.
    let x = r * 0.4124 + g * 0.3576 + b * 0.1805;
    let y = r * 0.2126 + g * 0.7152 + b * 0.0722;
    let z = r * 0.0193 + g * 0.1192 + b * 0.9505;

    let sum = x + y + z;
    if sum == 0.0 {
        return XyColor::BLACK;
    }
    XyColor::new(x / sum, y / sum)
}

/// Inverse sRGB gamma (companded value to linear light).
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_primaries() {
        assert_eq!(hs_to_rgb(0.0, 100.0), RgbColor::new(255, 0, 0));
        assert_eq!(hs_to_rgb(120.0, 100.0), RgbColor::new(0, 255, 0));
        assert_eq!(hs_to_rgb(240.0, 100.0), RgbColor::new(0, 0, 255));
    }

    #[test]
    fn rgb_desaturated_is_white_for_every_hue() {
        for hue in [0.0, 50.0, 120.0, 240.0, 359.0] {
            assert_eq!(hs_to_rgb(hue, 0.0), RgbColor::new(255, 255, 255));
        }
    }

    #[test]
    fn rgb_hue_wraps_at_360() {
        assert_eq!(hs_to_rgb(360.0, 100.0), RgbColor::new(255, 0, 0));
    }

    #[test]
    fn rgb_channels_are_truncated() {
        // 30° at full saturation puts green at exactly 127.5, which must
        // truncate to 127 rather than round to 128.
        assert_eq!(hs_to_rgb(30.0, 100.0), RgbColor::new(255, 127, 0));
        assert_eq!(hs_to_rgb(0.0, 50.0), RgbColor::new(255, 127, 127));
    }

    #[test]
    fn rgbw_white_channel_is_binary() {
        for hue in [0.0, 120.0, 300.0] {
            assert_eq!(hs_to_rgbw(hue, 5.0).white(), 255);
            assert_eq!(hs_to_rgbw(hue, 50.0).white(), 0);
        }
        // Threshold itself is colored.
        assert_eq!(hs_to_rgbw(0.0, 10.0).white(), 0);
    }

    #[test]
    fn rgbww_warm_cool_split() {
        let warm = hs_to_rgbww(30.0, 5.0);
        assert_eq!((warm.warm_white(), warm.cool_white()), (255, 0));

        let cool = hs_to_rgbww(70.0, 5.0);
        assert_eq!((cool.warm_white(), cool.cool_white()), (0, 255));

        // Boundary hue 50 is cool.
        let boundary = hs_to_rgbww(50.0, 5.0);
        assert_eq!((boundary.warm_white(), boundary.cool_white()), (0, 255));
    }

    #[test]
    fn rgbww_saturated_has_no_white() {
        for hue in [30.0, 70.0, 200.0] {
            let color = hs_to_rgbww(hue, 80.0);
            assert_eq!((color.warm_white(), color.cool_white()), (0, 0));
        }
    }

    #[test]
    fn rgbww_never_both_whites() {
        for hue in [0.0, 49.999, 50.0, 180.0, 360.0] {
            for saturation in [0.0, 5.0, 9.999, 10.0, 100.0] {
                let color = hs_to_rgbww(hue, saturation);
                assert!(
                    color.warm_white() == 0 || color.cool_white() == 0,
                    "both white channels set for ({hue}, {saturation})"
                );
            }
        }
    }

    #[test]
    fn xy_of_srgb_primaries() {
        let red = hs_to_xy(0.0, 100.0);
        assert!((red.x() - 0.640).abs() < 1e-3);
        assert!((red.y() - 0.330).abs() < 1e-3);

        let green = hs_to_xy(120.0, 100.0);
        assert!((green.x() - 0.300).abs() < 1e-3);
        assert!((green.y() - 0.600).abs() < 1e-3);

        let blue = hs_to_xy(240.0, 100.0);
        assert!((blue.x() - 0.150).abs() < 1e-3);
        assert!((blue.y() - 0.060).abs() < 1e-3);
    }

    #[test]
    fn xy_of_white_is_d65() {
        let white = hs_to_xy(0.0, 0.0);
        assert!((white.x() - 0.3127).abs() < 1e-3);
        assert!((white.y() - 0.3290).abs() < 1e-3);
    }

    #[test]
    fn xy_of_black_degenerates_to_origin() {
        assert_eq!(rgb_to_xy(RgbColor::black()), XyColor::BLACK);
    }

    #[test]
    fn xy_components_stay_in_chromaticity_plane() {
        let mut hue = 0.0_f32;
        while hue <= 360.0 {
            for saturation in [0.0, 25.0, 50.0, 75.0, 100.0] {
                let xy = hs_to_xy(hue, saturation);
                assert!((0.0..=1.0).contains(&xy.x()), "x out of range at {hue}");
                assert!((0.0..=1.0).contains(&xy.y()), "y out of range at {hue}");
                assert!(xy.x() + xy.y() <= 1.0, "x+y > 1 at ({hue}, {saturation})");
            }
            hue += 7.5;
        }
    }

    #[test]
    fn conversions_are_deterministic() {
        let (hue, saturation) = (123.456, 67.89);
        assert_eq!(hs_to_rgb(hue, saturation), hs_to_rgb(hue, saturation));
        assert_eq!(hs_to_rgbw(hue, saturation), hs_to_rgbw(hue, saturation));
        assert_eq!(hs_to_rgbww(hue, saturation), hs_to_rgbww(hue, saturation));
        assert_eq!(
            hs_to_xy(hue, saturation).x().to_bits(),
            hs_to_xy(hue, saturation).x().to_bits()
        );
    }
}
