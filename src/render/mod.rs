//! Static scene: ground plane, road slabs, and lighting.
//!
//! Purely presentational; nothing here feeds back into the driving model.

use bevy::prelude::*;

pub mod van_mesh;

use crate::roads::{Orientation, RoadNetwork};

pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(van_mesh::VanMeshPlugin)
            .add_systems(Startup, (setup_lighting, spawn_ground, spawn_road_slabs));
    }
}

const GROUND_SIZE: f32 = 220.0;
const ROAD_THICKNESS: f32 = 0.04;

fn setup_lighting(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.9, 0.9, 1.0),
        brightness: 250.0,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 9_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(60.0, 90.0, 40.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn spawn_ground(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.45, 0.6, 0.35),
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));
}

/// One flat slab per corridor, straddling the ground plane.
fn spawn_road_slabs(
    mut commands: Commands,
    network: Res<RoadNetwork>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let asphalt = materials.add(StandardMaterial {
        base_color: Color::srgb(0.25, 0.25, 0.27),
        perceptual_roughness: 0.95,
        ..default()
    });

    for road in network.roads() {
        let (size_x, size_z) = match road.orientation {
            Orientation::Horizontal => (road.length, road.width),
            Orientation::Vertical => (road.width, road.length),
        };
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(size_x, ROAD_THICKNESS, size_z))),
            MeshMaterial3d(asphalt.clone()),
            Transform::from_xyz(road.center.x, ROAD_THICKNESS / 2.0, road.center.y),
        ));
    }

    info!("Built {} road slabs", network.roads().len());
}
