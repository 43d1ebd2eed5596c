//! Configuration for the card stack carousel.
//!
//! Loads scroll geometry and transform tuning from TOML/JSON files or the
//! environment, then applies guard rails so a [`cardstack_core::CardStack`]
//! is never built from values the math cannot handle.
#![allow(missing_docs)]

pub mod error;
pub mod loader;
pub mod models;
pub mod validation;

pub use error::ConfigLoadError;
pub use loader::{
    CARD_COUNT_VAR, CONFIG_JSON_VAR, CONFIG_PATH_VAR, ConfigLoader,
    VIEWPORT_VAR,
};
pub use models::{CardStackConfig, ConfigSource, LoadedConfig, ScrollGeometry};
pub use validation::{
    ConfigGuardRailError, ConfigWarning, ConfigWarnings, apply_guard_rails,
};
