//! Tiers and level resolution
//!
//! Maps a point total onto the ordered tier ladder: current tier,
//! next tier, and progress toward the trail's end.

use serde::{Deserialize, Serialize};

/// A named milestone unlocked at a point threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub name: String,
    /// Points required to hold this tier
    pub threshold: u32,
    /// Emoji shown next to the tier name
    pub icon: String,
}

impl Tier {
    pub fn new(name: &str, threshold: u32, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            threshold,
            icon: icon.to_string(),
        }
    }
}

/// Points needed to finish the trail
pub const DEFAULT_MAX_POINTS: u32 = 1000;

/// The built-in tier ladder, ascending by threshold
pub fn default_tiers() -> Vec<Tier> {
    vec![
        Tier::new("Wannabe Rato-Esquilo", 0, "\u{1F37C}"),
        Tier::new("Bee and Snail Eater", 100, "\u{1F9A1}"),
        Tier::new("Chicken and Rabbit Assassin", 250, "\u{1F4AA}"),
        Tier::new("Rattle Snake Abuser", 500, "\u{1F451}"),
        Tier::new("Almost Chuck Norris Level", 1000, "\u{1F3C6}"),
    ]
}

/// Highest tier whose threshold is met. Total: the first tier's
/// threshold is 0, so every point count resolves to something.
pub fn current_tier(tiers: &[Tier], points: u32) -> &Tier {
    tiers
        .iter()
        .rev()
        .find(|t| points >= t.threshold)
        .unwrap_or(&tiers[0])
}

/// Lowest tier still out of reach, or `None` at the top of the ladder
pub fn next_tier(tiers: &[Tier], points: u32) -> Option<&Tier> {
    tiers.iter().find(|t| points < t.threshold)
}

/// Point total as a percentage of `max_points`, capped at 100
pub fn progress_fraction(points: u32, max_points: u32) -> f64 {
    (points as f64 / max_points as f64 * 100.0).min(100.0)
}

/// Points still needed for the next tier, 0 once maxed out
pub fn points_to_next(tiers: &[Tier], points: u32) -> u32 {
    match next_tier(tiers, points) {
        Some(tier) => tier.threshold - points,
        None => 0,
    }
}
