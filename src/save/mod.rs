//! Local persistence
//!
//! A best-effort cache of point totals, mirroring the shared roster
//! so the tracker still shows sensible positions when the data file
//! is unreachable.

pub mod cache;

pub use cache::{load_cached_points, save_cached_points, PointsRecord};
