//! Player roster
//!
//! The roster is the source of truth for who is racing and how many
//! points they have. It loads from a JSON file shared across users;
//! when that is missing the built-in sample roster steps in, topped
//! up with any locally cached point totals.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// One participant on the trail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    /// Emoji badge shown on the map
    pub avatar: String,
    pub points: u32,
    /// Marker color as a #RRGGBB hex string
    pub color: String,
}

impl Player {
    pub fn new(id: &str, name: &str, avatar: &str, points: u32, color: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            avatar: avatar.to_string(),
            points,
            color: color.to_string(),
        }
    }
}

/// The full player list, treated as an immutable snapshot per render
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    pub players: Vec<Player>,
}

impl Roster {
    /// Load the roster from a JSON file of the shape
    /// `{ "players": [ { id, name, avatar, points, color }, .. ] }`
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let roster: Roster = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;
        log::info!("Loaded {} players from {:?}", roster.players.len(), path);
        Ok(roster)
    }

    /// Overwrite point totals for matching player ids. Unknown ids
    /// are ignored, missing ids keep their current points.
    pub fn apply_points(&mut self, records: &[(String, u32)]) {
        for (id, points) in records {
            if let Some(player) = self.players.iter_mut().find(|p| &p.id == id) {
                player.points = *points;
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }
}

/// The built-in sample roster used when no data file is available
pub fn sample_roster() -> Roster {
    Roster {
        players: vec![
            Player::new("1", "Sarah K.", "\u{1F981}", 750, "#FF1744"),
            Player::new("2", "Mike R.", "\u{1F406}", 420, "#2196F3"),
            Player::new("3", "Jessica T.", "\u{1F43A}", 180, "#4CAF50"),
            Player::new("4", "David L.", "\u{1F40D}", 890, "#9C27B0"),
            Player::new("5", "Amanda C.", "\u{1F985}", 65, "#FF9800"),
            Player::new("6", "Chris P.", "\u{1F99B}", 310, "#00BCD4"),
        ],
    }
}
