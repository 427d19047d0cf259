//! Trail checkpoints
//!
//! The trail is non-linear, so its shape is described by sampled
//! checkpoints: a progress percentage plus the (x, y) map coordinate
//! it corresponds to. Coordinates are percentages of the map area,
//! with y growing downward (screen convention).

use serde::{Deserialize, Serialize};

/// A known (progress%, x, y) sample along the trail
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Overall trail progress this sample sits at, 0-100
    pub progress: f64,
    pub x: f64,
    pub y: f64,
}

impl Checkpoint {
    pub fn new(progress: f64, x: f64, y: f64) -> Self {
        Self { progress, x, y }
    }
}

/// The built-in trail, traced from the river path in the savanna map
/// at 4% intervals. Starts bottom-left, finishes top-left.
pub fn default_checkpoints() -> Vec<Checkpoint> {
    vec![
        Checkpoint::new(0.0, 12.6, 82.2),
        Checkpoint::new(4.0, 49.3, 65.0),
        Checkpoint::new(8.0, 62.8, 64.5),
        Checkpoint::new(12.0, 63.7, 80.8),
        Checkpoint::new(16.0, 78.5, 85.2),
        Checkpoint::new(20.0, 76.0, 72.6),
        Checkpoint::new(24.0, 77.1, 59.5),
        Checkpoint::new(28.0, 92.1, 64.8),
        Checkpoint::new(32.0, 89.0, 50.6),
        Checkpoint::new(36.0, 76.0, 47.5),
        Checkpoint::new(40.0, 63.6, 51.2),
        // Bridge area
        Checkpoint::new(44.0, 44.8, 51.8),
        Checkpoint::new(48.0, 29.5, 55.9),
        Checkpoint::new(52.0, 16.0, 53.2),
        Checkpoint::new(56.0, 9.5, 43.2),
        Checkpoint::new(60.0, 19.3, 29.5),
        Checkpoint::new(64.0, 37.9, 26.5),
        Checkpoint::new(68.0, 53.2, 28.2),
        Checkpoint::new(72.0, 72.4, 32.2),
        Checkpoint::new(76.0, 86.2, 32.2),
        Checkpoint::new(80.0, 91.2, 24.0),
        Checkpoint::new(84.0, 82.2, 13.2),
        Checkpoint::new(88.0, 67.7, 10.7),
        Checkpoint::new(92.0, 56.1, 12.3),
        Checkpoint::new(96.0, 38.4, 13.9),
        Checkpoint::new(100.0, 17.9, 11.6),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_trail_covers_full_range() {
        let checkpoints = default_checkpoints();
        assert_eq!(checkpoints.first().unwrap().progress, 0.0);
        assert_eq!(checkpoints.last().unwrap().progress, 100.0);
        for pair in checkpoints.windows(2) {
            assert!(pair[0].progress < pair[1].progress);
        }
    }

    #[test]
    fn test_default_coordinates_stay_on_the_map() {
        for cp in default_checkpoints() {
            assert!((0.0..=100.0).contains(&cp.x));
            assert!((0.0..=100.0).contains(&cp.y));
        }
    }
}
