// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for script-backed light control.
//!
//! This module provides type-safe color representations. [`HsColor`]
//! validates its ranges at construction time; the remaining types are
//! derived views computed from an HS value.
//!
//! # Types
//!
//! - [`HsColor`] - Hue (0-360°) and saturation (0-100%) pair
//! - [`RgbColor`] - 8-bit RGB triple
//! - [`RgbwColor`] - RGB plus a single white channel
//! - [`RgbwwColor`] - RGB plus warm-white and cool-white channels
//! - [`XyColor`] - CIE 1931 xy chromaticity coordinates

mod hs_color;
mod rgb_color;
mod xy_color;

pub use hs_color::HsColor;
pub use rgb_color::{RgbColor, RgbwColor, RgbwwColor};
pub use xy_color::XyColor;
