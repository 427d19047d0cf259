//! Leaderboard ranking
//!
//! Sorts a roster snapshot by points and hands out 1-based ranks.

use crate::roster::Player;

/// A player paired with their leaderboard rank
#[derive(Debug, Clone)]
pub struct RankedPlayer {
    pub rank: usize,
    pub player: Player,
}

impl RankedPlayer {
    /// Top three ranks get special styling
    pub fn is_podium(&self) -> bool {
        self.rank <= 3
    }
}

/// Rank players by points, descending. The sort is stable, so ties
/// keep their roster order.
pub fn ranked(players: &[Player]) -> Vec<RankedPlayer> {
    let mut sorted: Vec<Player> = players.to_vec();
    sorted.sort_by(|a, b| b.points.cmp(&a.points));

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, player)| RankedPlayer {
            rank: i + 1,
            player,
        })
        .collect()
}
