//! Channel Configuration Module
//!
//! Column names are the one configurable contract in this crate: sensor
//! exports from different vendors label the same physical channel
//! differently, so the [`ChannelMap`] can be overridden from a TOML file.
//! Calibration constants live in [`defaults`] and are not configurable —
//! they are part of the definition of the derived targets.
//!
//! ## Loading Order
//!
//! 1. `WELLTARGETS_CONFIG` environment variable (path to TOML file)
//! 2. `channel_map.toml` in the current working directory
//! 3. Built-in defaults (reference dataset headers)

mod channel_map;
pub mod defaults;

pub use channel_map::*;
