// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `ScriptLight` Lib - A Rust library for script-backed virtual lights.
//!
//! A script-backed light is an on/off/color entity whose state is not
//! rendered by hardware this library controls. Instead, every state
//! change maps to an externally defined automation action (for example a
//! named script driving an IR blaster or a smart plug). The library owns
//! the color semantics; the host system owns the dispatch.
//!
//! # Supported Features
//!
//! - **Color classification**: Bucket any HS color into white, red,
//!   green, blue or unmatched with deterministic hue thresholds
//! - **Color space conversion**: Derive RGB, RGBW, RGBWW and CIE xy
//!   representations from a stored HS value for status reporting
//! - **Action mapping**: One configurable action key per color bucket
//!   plus on/off defaults, with validation and JSON config support
//! - **Light entity**: Turn-on/turn-off sequencing with optimistic or
//!   confirmed state updates and state-change notifications
//!
//! # Quick Start
//!
//! ```
//! use scriptlight_lib::dispatch::ActionInvoker;
//! use scriptlight_lib::error::DispatchError;
//! use scriptlight_lib::types::HsColor;
//! use scriptlight_lib::{ActionMap, ColorBucket, ScriptLight};
//!
//! // The host supplies the single capability the library consumes:
//! // running a named action.
//! struct ScriptRunner;
//!
//! impl ActionInvoker for ScriptRunner {
//!     async fn invoke(&self, action_key: &str) -> Result<(), DispatchError> {
//!         // e.g. call into an automation service here
//!         println!("running {action_key}");
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> scriptlight_lib::Result<()> {
//!     let actions = ActionMap::new(
//!         "ceiling_turn_on",
//!         "ceiling_switch",
//!         "ceiling_white",
//!         "ceiling_red",
//!         "ceiling_green",
//!         "ceiling_blue",
//!     );
//!     let light = ScriptLight::new("Living Room Ceiling", actions, ScriptRunner)?;
//!
//!     // A warm orange-red classifies as red and runs "ceiling_red".
//!     let bucket = light.turn_on(Some(HsColor::new(15.0, 80.0)?)).await?;
//!     assert_eq!(bucket, ColorBucket::Red);
//!
//!     // The stored color is the requested pair, not the bucket.
//!     assert_eq!(light.hs_color(), Some(HsColor::new(15.0, 80.0)?));
//!
//!     light.turn_off().await?;
//!     assert!(!light.is_on());
//!     Ok(())
//! }
//! ```
//!
//! # Classification Only
//!
//! The color core is usable without the entity:
//!
//! ```
//! use scriptlight_lib::classify::{classify, ColorBucket};
//! use scriptlight_lib::types::HsColor;
//!
//! let color = HsColor::new(120.0, 100.0).unwrap();
//! assert_eq!(classify(Some(color)), ColorBucket::Green);
//!
//! let rgb = color.to_rgb();
//! assert_eq!((rgb.red(), rgb.green(), rgb.blue()), (0, 255, 0));
//! ```

pub mod classify;
pub mod config;
pub mod convert;
pub mod dispatch;
pub mod error;
pub mod light;
pub mod state;
pub mod types;

pub use classify::{ColorBucket, classify};
pub use config::ActionMap;
pub use convert::{hs_to_rgb, hs_to_rgbw, hs_to_rgbww, hs_to_xy, rgb_to_xy};
pub use dispatch::{ActionInvoker, NullStateSink, StateSink};
pub use error::{ConfigError, DispatchError, Error, Result, ValueError};
pub use light::{ScriptLight, UpdatePolicy};
pub use state::LightState;
pub use types::{HsColor, RgbColor, RgbwColor, RgbwwColor, XyColor};
