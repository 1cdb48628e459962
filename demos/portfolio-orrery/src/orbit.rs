/// Circular orbit math: pure functions, no engine state.
///
/// All orbits lie in the XZ plane (y = 0) and are centered on the origin.

use glam::Vec3;
use std::f32::consts::TAU;

/// Sample count for orbit guide lines.
pub const GUIDE_POINTS: usize = 128;

/// Position on a circular orbit of radius `distance` at `angle` radians.
pub fn circular_position(distance: f32, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(distance * cos, 0.0, distance * sin)
}

/// Evenly spaced points around the orbit, for a closed guide line.
pub fn guide_points(distance: f32) -> Vec<Vec3> {
    (0..GUIDE_POINTS)
        .map(|i| circular_position(distance, i as f32 / GUIDE_POINTS as f32 * TAU))
        .collect()
}
