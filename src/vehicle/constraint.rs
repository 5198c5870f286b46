//! Road-constraint resolution for proposed displacements.

use bevy::prelude::*;

use crate::roads::RoadNetwork;

/// Outcome of resolving a proposed displacement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstraintResult {
    pub x: f32,
    pub z: f32,
    /// True when the proposal was altered or rejected.
    pub clamped: bool,
}

/// Decide whether a proposed position is drivable, and pick the best legal
/// alternative when it is not.
///
/// Three tiers: an on-road proposal is accepted verbatim; a small excursion
/// (within `snap_distance` of a corridor) is pulled back to the nearest
/// corridor point; anything further is rejected and the pre-tick position
/// stands. Snapping still reports `clamped` since the vehicle did not end
/// up where it was headed.
pub fn resolve(
    network: &RoadNetwork,
    current: Vec2,
    proposed: Vec2,
    tolerance: f32,
    snap_distance: f32,
) -> ConstraintResult {
    if network.is_on_road(proposed.x, proposed.y, tolerance) {
        return ConstraintResult {
            x: proposed.x,
            z: proposed.y,
            clamped: false,
        };
    }

    let nearest = network.nearest_road_position(proposed.x, proposed.y);
    if nearest.distance(proposed) < snap_distance {
        return ConstraintResult {
            x: nearest.x,
            z: nearest.y,
            clamped: true,
        };
    }

    ConstraintResult {
        x: current.x,
        z: current.y,
        clamped: true,
    }
}
