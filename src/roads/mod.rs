//! Road network definition and spatial queries.
//!
//! The city is a fixed set of axis-aligned corridors built once at startup.
//! Queries are linear scans over the corridor list, which is fine at this
//! scale (14 corridors); a much larger network would want a grid index.

use bevy::prelude::*;

pub mod layout;

pub struct RoadsPlugin;

impl Plugin for RoadsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(RoadNetwork::city_grid());
    }
}

/// Which world axis a corridor runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Long axis is world X.
    Horizontal,
    /// Long axis is world Z.
    Vertical,
}

/// An axis-aligned rectangular drivable corridor.
#[derive(Clone, Copy, Debug)]
pub struct Road {
    /// Corridor center on the ground plane (x, z).
    pub center: Vec2,
    /// Lateral extent.
    pub width: f32,
    /// Longitudinal extent.
    pub length: f32,
    /// Which axis the length runs along.
    pub orientation: Orientation,
}

impl Road {
    pub fn horizontal(x: f32, z: f32, width: f32, length: f32) -> Self {
        Self {
            center: Vec2::new(x, z),
            width,
            length,
            orientation: Orientation::Horizontal,
        }
    }

    pub fn vertical(x: f32, z: f32, width: f32, length: f32) -> Self {
        Self {
            center: Vec2::new(x, z),
            width,
            length,
            orientation: Orientation::Vertical,
        }
    }

    /// Half-extents of the footprint as (x, z).
    pub fn half_extents(&self) -> Vec2 {
        match self.orientation {
            Orientation::Horizontal => Vec2::new(self.length / 2.0, self.width / 2.0),
            Orientation::Vertical => Vec2::new(self.width / 2.0, self.length / 2.0),
        }
    }

    /// Whether (x, z) lies inside the footprint expanded by `tolerance`
    /// on all sides.
    pub fn contains(&self, x: f32, z: f32, tolerance: f32) -> bool {
        let half = self.half_extents();
        (x - self.center.x).abs() <= half.x + tolerance
            && (z - self.center.y).abs() <= half.y + tolerance
    }

    /// Clamp (x, z) into the footprint rectangle.
    pub fn clamp_inside(&self, x: f32, z: f32) -> Vec2 {
        let half = self.half_extents();
        Vec2::new(
            x.clamp(self.center.x - half.x, self.center.x + half.x),
            z.clamp(self.center.y - half.y, self.center.y + half.y),
        )
    }
}

/// The full set of drivable corridors.
#[derive(Resource, Default)]
pub struct RoadNetwork {
    roads: Vec<Road>,
}

impl RoadNetwork {
    pub fn new(roads: Vec<Road>) -> Self {
        Self { roads }
    }

    /// The default city grid from [`layout`].
    pub fn city_grid() -> Self {
        Self::new(layout::city_grid())
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Whether (x, z) lies on any corridor, with footprints expanded by
    /// `tolerance`.
    pub fn is_on_road(&self, x: f32, z: f32, tolerance: f32) -> bool {
        self.roads.iter().any(|road| road.contains(x, z, tolerance))
    }

    /// The closest point on any corridor to (x, z).
    ///
    /// Each corridor clamps the point into its own rectangle; the globally
    /// nearest clamp wins. An empty network falls back to the origin (the
    /// main crossing).
    pub fn nearest_road_position(&self, x: f32, z: f32) -> Vec2 {
        let mut nearest = Vec2::ZERO;
        let mut nearest_distance = f32::INFINITY;

        for road in &self.roads {
            let clamped = road.clamp_inside(x, z);
            let distance = clamped.distance(Vec2::new(x, z));
            if distance < nearest_distance {
                nearest_distance = distance;
                nearest = clamped;
            }
        }

        nearest
    }
}
