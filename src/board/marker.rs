//! Trail markers
//!
//! One marker per player: where they stand on the trail and how far
//! they are through the tier ladder. Computed fresh from a roster
//! snapshot each cycle; the view never feeds back into the data.

use crate::data::TrackConfig;
use crate::progression::Tier;
use crate::roster::Player;
use crate::trail::PathPoint;

/// Everything the view needs to draw one player
#[derive(Debug, Clone)]
pub struct Marker {
    pub player: Player,
    pub current_tier: Tier,
    /// `None` once the top tier is reached
    pub next_tier: Option<Tier>,
    /// Overall trail progress, 0-100
    pub progress: f64,
    pub points_to_next: u32,
    /// Map coordinate, in percent of the map area
    pub position: PathPoint,
}

impl Marker {
    pub fn for_player(config: &TrackConfig, player: &Player) -> Self {
        let points = player.points;
        let progress = config.progress_fraction(points);

        Self {
            player: player.clone(),
            current_tier: config.current_tier(points).clone(),
            next_tier: config.next_tier(points).cloned(),
            progress,
            points_to_next: config.points_to_next(points),
            position: config.position_at(progress),
        }
    }

    /// Tooltip line describing the tier transition, e.g.
    /// "Bee and Snail Eater -> Chicken and Rabbit Assassin"
    pub fn tier_line(&self) -> String {
        match &self.next_tier {
            Some(next) => format!("{} \u{2192} {}", self.current_tier.name, next.name),
            None => format!("{}!", self.current_tier.name),
        }
    }
}

/// Compute markers for a whole roster snapshot
pub fn compute_markers(config: &TrackConfig, players: &[Player]) -> Vec<Marker> {
    players
        .iter()
        .map(|p| Marker::for_player(config, p))
        .collect()
}
