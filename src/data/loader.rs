//! RON config loader
//!
//! Loads the track configuration from an external RON file, with the
//! built-in tables as defaults, and validates it before anything else
//! runs. A file that is present but unreadable, unparsable, or
//! inconsistent is fatal; only a missing file falls back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::progression::{self, default_tiers, Tier, DEFAULT_MAX_POINTS};
use crate::trail::{default_checkpoints, position_at, Checkpoint, PathPoint};

/// Default location of the track config, relative to the working dir
pub const CONFIG_PATH: &str = "assets/data/track.ron";

/// Everything wrong a track config can be
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("tier table is empty")]
    NoTiers,
    #[error("first tier must have threshold 0, found {0}")]
    FirstTierNotFree(u32),
    #[error("tier thresholds must be strictly ascending (tier index {0})")]
    TiersOutOfOrder(usize),
    #[error("checkpoint table is empty")]
    NoCheckpoints,
    #[error("trail must start at progress 0, found {0}")]
    TrailStartsLate(f64),
    #[error("trail must end at progress 100, found {0}")]
    TrailEndsEarly(f64),
    #[error("checkpoint progress must be strictly increasing (checkpoint index {0})")]
    CheckpointsOutOfOrder(usize),
    #[error("max_points must be positive")]
    NonPositiveMaxPoints,
}

/// The validated track configuration: tier ladder, trail shape, and
/// the point total that counts as finishing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackConfig {
    pub tiers: Vec<Tier>,
    pub checkpoints: Vec<Checkpoint>,
    pub max_points: u32,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            tiers: default_tiers(),
            checkpoints: default_checkpoints(),
            max_points: DEFAULT_MAX_POINTS,
        }
    }
}

impl TrackConfig {
    /// Load from the default config path
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(CONFIG_PATH))
    }

    /// Load from `path` if it exists, otherwise use the built-in
    /// tables. The result is validated either way.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let config: TrackConfig =
                ron::from_str(&content).map_err(|source| ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?;
            log::info!("Track config loaded from {:?}", path);
            config
        } else {
            log::info!("No track config at {:?}, using built-in tables", path);
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Check every table invariant the resolvers rely on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tiers.is_empty() {
            return Err(ConfigError::NoTiers);
        }
        if self.tiers[0].threshold != 0 {
            return Err(ConfigError::FirstTierNotFree(self.tiers[0].threshold));
        }
        for (i, pair) in self.tiers.windows(2).enumerate() {
            if pair[1].threshold <= pair[0].threshold {
                return Err(ConfigError::TiersOutOfOrder(i + 1));
            }
        }

        if self.checkpoints.is_empty() {
            return Err(ConfigError::NoCheckpoints);
        }
        let first = self.checkpoints[0].progress;
        if first != 0.0 {
            return Err(ConfigError::TrailStartsLate(first));
        }
        let last = self.checkpoints[self.checkpoints.len() - 1].progress;
        if last != 100.0 {
            return Err(ConfigError::TrailEndsEarly(last));
        }
        for (i, pair) in self.checkpoints.windows(2).enumerate() {
            if pair[1].progress <= pair[0].progress {
                return Err(ConfigError::CheckpointsOutOfOrder(i + 1));
            }
        }

        if self.max_points == 0 {
            return Err(ConfigError::NonPositiveMaxPoints);
        }

        Ok(())
    }

    /// Tier currently held at this point total
    pub fn current_tier(&self, points: u32) -> &Tier {
        progression::current_tier(&self.tiers, points)
    }

    /// Tier still out of reach, or `None` when maxed
    pub fn next_tier(&self, points: u32) -> Option<&Tier> {
        progression::next_tier(&self.tiers, points)
    }

    /// Point total as a percentage of the trail, capped at 100
    pub fn progress_fraction(&self, points: u32) -> f64 {
        progression::progress_fraction(points, self.max_points)
    }

    /// Points still needed for the next tier
    pub fn points_to_next(&self, points: u32) -> u32 {
        progression::points_to_next(&self.tiers, points)
    }

    /// Map coordinate at an overall progress percentage
    pub fn position_at(&self, progress_percent: f64) -> PathPoint {
        position_at(progress_percent, &self.checkpoints)
    }

    /// Map coordinate for a raw point total
    pub fn position_for_points(&self, points: u32) -> PathPoint {
        self.position_at(self.progress_fraction(points))
    }
}

/// Export the built-in tables to the config file for easy editing
pub fn export_default_config() -> Result<(), String> {
    let path = Path::new(CONFIG_PATH);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
    }

    let config = TrackConfig::default();
    let ron = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::default())
        .map_err(|e| format!("Failed to serialize track config: {}", e))?;
    fs::write(path, ron).map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(TrackConfig::default().validate().is_ok());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = TrackConfig::load_from(Path::new("no/such/track.ron")).unwrap();
        assert_eq!(config.tiers.len(), default_tiers().len());
        assert_eq!(config.max_points, DEFAULT_MAX_POINTS);
    }

    #[test]
    fn test_validate_rejects_empty_tables() {
        let mut config = TrackConfig::default();
        config.tiers.clear();
        assert!(matches!(config.validate(), Err(ConfigError::NoTiers)));

        let mut config = TrackConfig::default();
        config.checkpoints.clear();
        assert!(matches!(config.validate(), Err(ConfigError::NoCheckpoints)));
    }

    #[test]
    fn test_validate_rejects_nonzero_first_tier() {
        let mut config = TrackConfig::default();
        config.tiers[0].threshold = 10;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FirstTierNotFree(10))
        ));
    }

    #[test]
    fn test_validate_rejects_unsorted_tiers() {
        let mut config = TrackConfig::default();
        config.tiers[2].threshold = 50;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TiersOutOfOrder(2))
        ));
    }

    #[test]
    fn test_validate_rejects_partial_trail() {
        let mut config = TrackConfig::default();
        config.checkpoints[0].progress = 2.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TrailStartsLate(_))
        ));

        let mut config = TrackConfig::default();
        config.checkpoints.pop();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TrailEndsEarly(_))
        ));
    }

    #[test]
    fn test_validate_rejects_unsorted_checkpoints() {
        let mut config = TrackConfig::default();
        config.checkpoints.swap(5, 6);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::CheckpointsOutOfOrder(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_max_points() {
        let mut config = TrackConfig::default();
        config.max_points = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveMaxPoints)
        ));
    }

    #[test]
    fn test_ron_round_trip() {
        let config = TrackConfig::default();
        let ron = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::default()).unwrap();
        let reloaded: TrackConfig = ron::from_str(&ron).unwrap();
        assert_eq!(reloaded.tiers, config.tiers);
        assert_eq!(reloaded.checkpoints, config.checkpoints);
        assert_eq!(reloaded.max_points, config.max_points);
    }

    #[test]
    fn test_position_for_points_tracks_progress() {
        let config = TrackConfig::default();
        // 750 of 1000 points is 75% of the trail
        let direct = config.position_at(75.0);
        assert_eq!(config.position_for_points(750), direct);
    }
}
