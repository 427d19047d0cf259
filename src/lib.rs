//! Jungletrail - a gamified progress tracker for the terminal
//!
//! Players earn points, climb tiers, and race each other along a
//! fixed savanna trail. A leaderboard keeps score.

pub mod board;
pub mod data;
pub mod progression;
pub mod roster;
pub mod save;
pub mod trail;
pub mod ui;

// Re-export commonly used types
pub use data::{ConfigError, TrackConfig};
pub use progression::Tier;
pub use roster::{Player, Roster};
pub use trail::{Checkpoint, PathPoint};
