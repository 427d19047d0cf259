//! The trail: checkpoint samples and position interpolation

pub mod checkpoints;
pub mod interpolate;

pub use checkpoints::{default_checkpoints, Checkpoint};
pub use interpolate::{position_at, PathPoint};
