//! Progression systems

pub mod tiers;

pub use tiers::{Tier, current_tier, next_tier, points_to_next, progress_fraction};
pub use tiers::{default_tiers, DEFAULT_MAX_POINTS};
