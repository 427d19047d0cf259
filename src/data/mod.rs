//! External track configuration
//!
//! The tier ladder, trail checkpoints, and point cap are data, not
//! code: they load from a RON file when one is present and fall back
//! to the built-in tables otherwise. Either way the result is
//! validated once at startup and immutable afterwards.

pub mod loader;

pub use loader::{export_default_config, ConfigError, TrackConfig};
