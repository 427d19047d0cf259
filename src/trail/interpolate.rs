//! Position interpolation along the trail
//!
//! Converts an overall progress percentage into a map coordinate by
//! finding the surrounding checkpoint pair and lerping between them.

use super::checkpoints::Checkpoint;

/// An interpolated map coordinate, in percent of the map area
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

impl PathPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Checkpoint> for PathPoint {
    fn from(cp: Checkpoint) -> Self {
        Self { x: cp.x, y: cp.y }
    }
}

/// Map a progress percentage onto the trail.
///
/// Out-of-range input is clamped to [0, 100] rather than rejected.
/// When the value lands exactly on a checkpoint boundary, the
/// earliest-ordered segment wins (the scan breaks on first match);
/// both neighbors agree on the coordinate, so this only matters for
/// floating-point edge cases.
pub fn position_at(progress_percent: f64, checkpoints: &[Checkpoint]) -> PathPoint {
    if checkpoints.is_empty() {
        return PathPoint::default();
    }

    let progress = progress_percent.clamp(0.0, 100.0);

    // Find the two checkpoints surrounding this progress value.
    // The defaults are only reachable with a table that does not
    // cover the full 0-100 range; load-time validation rules that out.
    let mut c1 = checkpoints[0];
    let mut c2 = checkpoints[checkpoints.len() - 1];

    for pair in checkpoints.windows(2) {
        if progress >= pair[0].progress && progress <= pair[1].progress {
            c1 = pair[0];
            c2 = pair[1];
            break;
        }
    }

    // At exactly 100% the last checkpoint is returned directly, which
    // also sidesteps a zero-length final segment.
    if progress == 100.0 {
        return checkpoints[checkpoints.len() - 1].into();
    }

    let t = (progress - c1.progress) / (c2.progress - c1.progress);

    PathPoint {
        x: c1.x + (c2.x - c1.x) * t,
        y: c1.y + (c2.y - c1.y) * t,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trail::checkpoints::default_checkpoints;

    const EPSILON: f64 = 1e-9;

    fn assert_close(point: PathPoint, x: f64, y: f64) {
        assert!(
            (point.x - x).abs() < EPSILON && (point.y - y).abs() < EPSILON,
            "expected ({x}, {y}), got ({}, {})",
            point.x,
            point.y
        );
    }

    #[test]
    fn test_endpoints_reproduce_exactly() {
        let checkpoints = default_checkpoints();
        let start = position_at(0.0, &checkpoints);
        assert_eq!(start.x, checkpoints[0].x);
        assert_eq!(start.y, checkpoints[0].y);

        let finish = position_at(100.0, &checkpoints);
        let last = checkpoints[checkpoints.len() - 1];
        assert_eq!(finish.x, last.x);
        assert_eq!(finish.y, last.y);
    }

    #[test]
    fn test_checkpoint_boundary_hits_the_sample() {
        let checkpoints = default_checkpoints();
        assert_close(position_at(4.0, &checkpoints), 49.3, 65.0);
    }

    #[test]
    fn test_segment_midpoint_lerps_both_axes() {
        // Halfway between (12.6, 82.2) at 0% and (49.3, 65.0) at 4%
        let checkpoints = default_checkpoints();
        assert_close(position_at(2.0, &checkpoints), 30.95, 73.6);
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        let checkpoints = default_checkpoints();
        assert_eq!(
            position_at(-20.0, &checkpoints),
            position_at(0.0, &checkpoints)
        );
        assert_eq!(
            position_at(250.0, &checkpoints),
            position_at(100.0, &checkpoints)
        );
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let checkpoints = default_checkpoints();
        for progress in [0.0, 2.0, 13.7, 50.0, 99.9, 100.0] {
            let a = position_at(progress, &checkpoints);
            let b = position_at(progress, &checkpoints);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_gap_table_falls_back_to_trail_ends() {
        // 40-60 is uncovered; the fallback pairs the first and last
        // checkpoints, so the result lerps across the whole table
        let sparse = vec![
            Checkpoint::new(0.0, 0.0, 0.0),
            Checkpoint::new(40.0, 10.0, 10.0),
            Checkpoint::new(60.0, 20.0, 20.0),
        ];
        let broken = vec![
            Checkpoint::new(0.0, 0.0, 0.0),
            Checkpoint::new(40.0, 10.0, 10.0),
        ];
        // Within coverage, normal interpolation applies
        assert_close(position_at(20.0, &sparse), 5.0, 5.0);
        // Past coverage, the defensive first/last pair takes over
        assert_close(position_at(80.0, &broken), 20.0, 20.0);
    }

    #[test]
    fn test_empty_table_yields_origin() {
        assert_eq!(position_at(50.0, &[]), PathPoint::default());
    }
}
