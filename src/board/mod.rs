//! Computed board state: leaderboard ranks and trail markers

pub mod leaderboard;
pub mod marker;

pub use leaderboard::{ranked, RankedPlayer};
pub use marker::{compute_markers, Marker};
