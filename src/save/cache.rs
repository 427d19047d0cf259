//! Points cache
//!
//! Stores a flat list of (id, points) pairs as JSON in the platform
//! data directory. Writes are best-effort: a failed cache write is
//! logged and life goes on, the shared roster file stays the source
//! of truth.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::roster::Player;

/// One cached entry: just enough to restore a player's position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsRecord {
    pub id: String,
    pub points: u32,
}

/// Get the cache file path
fn cache_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "jungletrail", "Jungletrail") {
        let mut path = proj_dirs.data_local_dir().to_path_buf();
        path.push("points.json");
        path
    } else {
        PathBuf::from("./points.json")
    }
}

/// Mirror the roster's point totals to the local cache
pub fn save_cached_points(players: &[Player]) -> Result<(), String> {
    save_to(&cache_path(), players)
}

/// Load cached point totals, if any usable cache exists
pub fn load_cached_points() -> Option<Vec<PointsRecord>> {
    load_from(&cache_path())
}

fn save_to(path: &Path, players: &[Player]) -> Result<(), String> {
    let records: Vec<PointsRecord> = players
        .iter()
        .map(|p| PointsRecord {
            id: p.id.clone(),
            points: p.points,
        })
        .collect();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }

    let json = serde_json::to_string_pretty(&records).map_err(|e| e.to_string())?;
    fs::write(path, json).map_err(|e| e.to_string())?;

    log::info!("Cached {} point totals to {:?}", records.len(), path);
    Ok(())
}

fn load_from(path: &Path) -> Option<Vec<PointsRecord>> {
    if !path.exists() {
        return None;
    }

    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(records) => {
                log::info!("Loaded cached points from {:?}", path);
                Some(records)
            }
            Err(e) => {
                log::warn!("Failed to parse points cache: {}, ignoring it", e);
                None
            }
        },
        Err(e) => {
            log::warn!("Failed to read points cache: {}, ignoring it", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::sample_roster;

    fn temp_cache(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("jungletrail-test-{}", name));
        path.push("points.json");
        path
    }

    #[test]
    fn test_cache_round_trip() {
        let path = temp_cache("round-trip");
        let roster = sample_roster();

        save_to(&path, &roster.players).unwrap();
        let records = load_from(&path).unwrap();

        assert_eq!(records.len(), roster.len());
        assert_eq!(records[0], PointsRecord { id: "1".to_string(), points: 750 });

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_cache_loads_nothing() {
        assert!(load_from(Path::new("no/such/points.json")).is_none());
    }

    #[test]
    fn test_garbage_cache_is_ignored() {
        let path = temp_cache("garbage");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json at all").unwrap();

        assert!(load_from(&path).is_none());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
