//! Proximity triggers and collectible packages.
//!
//! Points of interest fire an [`InteractionEvent`] when the van *enters*
//! their radius and re-arm once it leaves, so holding position at a depot
//! does not spam the quest layer. Packages are scattered along random
//! corridors and collected by driving over them.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::roads::{Orientation, Road, RoadNetwork};
use crate::vehicle::PlayerVan;

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PackageConfig>()
            .init_resource::<CollectedCount>()
            .add_event::<InteractionEvent>()
            .add_event::<PackageCollected>()
            .add_systems(Startup, (spawn_points_of_interest, spawn_packages))
            .add_systems(
                Update,
                (update_interactions, collect_packages, animate_packages)
                    .after(crate::vehicle::DrivingSet),
            );
    }
}

/// A named spot the van can pull up to.
#[derive(Component)]
pub struct PointOfInterest {
    pub label: String,
    /// Trigger radius in ground-plane units.
    pub radius: f32,
    /// Whether the van is currently inside the radius.
    pub in_range: bool,
}

/// Fired once each time the van drives into a point of interest.
#[derive(Event)]
pub struct InteractionEvent {
    pub entity: Entity,
    pub label: String,
}

/// Marker plus bob animation phase for a collectible package.
#[derive(Component)]
pub struct CollectiblePackage {
    pub phase: f32,
}

/// Fired when the van picks up a package.
#[derive(Event)]
pub struct PackageCollected {
    pub position: Vec3,
}

/// Running pickup total.
#[derive(Resource, Default)]
pub struct CollectedCount(pub u32);

/// Configuration for package placement.
#[derive(Resource)]
pub struct PackageConfig {
    pub count: usize,
    /// Pickup radius around the van.
    pub pickup_radius: f32,
    /// Margin kept from corridor edges so packages sit fully on asphalt.
    pub edge_margin: f32,
    pub seed: u64,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            count: 8,
            pickup_radius: 2.0,
            edge_margin: 1.0,
            seed: 4242,
        }
    }
}

/// The fixed quest locations of the city.
const POINTS_OF_INTEREST: &[(&str, f32, f32)] = &[
    ("depot", 50.0, 0.0),
    ("locker", -50.0, 0.0),
    ("shop", 0.0, 50.0),
    ("pub", 25.0, 25.0),
];

const INTERACTION_RADIUS: f32 = 3.0;

fn spawn_points_of_interest(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let marker_mesh = meshes.add(Cylinder::new(INTERACTION_RADIUS * 0.8, 0.05));
    let marker_material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.95, 0.85, 0.3, 0.6),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    for &(label, x, z) in POINTS_OF_INTEREST {
        commands.spawn((
            Mesh3d(marker_mesh.clone()),
            MeshMaterial3d(marker_material.clone()),
            Transform::from_xyz(x, 0.03, z),
            PointOfInterest {
                label: label.to_string(),
                radius: INTERACTION_RADIUS,
                in_range: false,
            },
        ));
    }
}

/// Pick a uniformly random spot on a corridor, inset by `margin` from its
/// edges.
pub fn random_point_on(road: &Road, margin: f32, rng: &mut StdRng) -> Vec2 {
    let half = road.half_extents();
    let (half_long, half_lat) = match road.orientation {
        Orientation::Horizontal => (half.x, half.y),
        Orientation::Vertical => (half.y, half.x),
    };
    let long_span = (half_long - margin).max(0.0);
    let lat_span = (half_lat - margin).max(0.0);
    let along = if long_span > 0.0 {
        rng.gen_range(-long_span..long_span)
    } else {
        0.0
    };
    let across = if lat_span > 0.0 {
        rng.gen_range(-lat_span..lat_span)
    } else {
        0.0
    };

    match road.orientation {
        Orientation::Horizontal => road.center + Vec2::new(along, across),
        Orientation::Vertical => road.center + Vec2::new(across, along),
    }
}

fn spawn_packages(
    mut commands: Commands,
    config: Res<PackageConfig>,
    network: Res<RoadNetwork>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let roads = network.roads();
    if roads.is_empty() {
        warn!("No roads available; skipping package placement");
        return;
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let package_mesh = meshes.add(Cuboid::new(0.7, 0.7, 0.7));
    let package_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.6, 0.4, 0.2),
        perceptual_roughness: 0.9,
        ..default()
    });

    for index in 0..config.count {
        let road = &roads[rng.gen_range(0..roads.len())];
        let spot = random_point_on(road, config.edge_margin, &mut rng);
        commands.spawn((
            Mesh3d(package_mesh.clone()),
            MeshMaterial3d(package_material.clone()),
            Transform::from_xyz(spot.x, 0.8, spot.y),
            CollectiblePackage {
                phase: index as f32 * 0.9,
            },
        ));
    }
    info!("Placed {} packages along the road grid", config.count);
}

fn ground_distance(a: Vec3, b: Vec3) -> f32 {
    Vec2::new(a.x, a.z).distance(Vec2::new(b.x, b.z))
}

fn update_interactions(
    vans: Query<&Transform, With<PlayerVan>>,
    mut pois: Query<(Entity, &Transform, &mut PointOfInterest)>,
    mut events: EventWriter<InteractionEvent>,
) {
    let Ok(van) = vans.get_single() else {
        return;
    };

    for (entity, transform, mut poi) in pois.iter_mut() {
        let inside = ground_distance(van.translation, transform.translation) <= poi.radius;
        if inside && !poi.in_range {
            info!("Van arrived at the {}", poi.label);
            events.send(InteractionEvent {
                entity,
                label: poi.label.clone(),
            });
        }
        poi.in_range = inside;
    }
}

fn collect_packages(
    mut commands: Commands,
    config: Res<PackageConfig>,
    vans: Query<&Transform, With<PlayerVan>>,
    packages: Query<(Entity, &Transform), With<CollectiblePackage>>,
    mut count: ResMut<CollectedCount>,
    mut events: EventWriter<PackageCollected>,
) {
    let Ok(van) = vans.get_single() else {
        return;
    };

    for (entity, transform) in packages.iter() {
        if ground_distance(van.translation, transform.translation) <= config.pickup_radius {
            commands.entity(entity).despawn();
            count.0 += 1;
            events.send(PackageCollected {
                position: transform.translation,
            });
            info!("Package collected ({} total)", count.0);
        }
    }
}

/// Spin and bob so packages read as pickups.
fn animate_packages(
    time: Res<Time>,
    mut packages: Query<(&CollectiblePackage, &mut Transform)>,
) {
    let elapsed = time.elapsed_secs();
    for (package, mut transform) in packages.iter_mut() {
        transform.rotate_y(time.delta_secs() * 1.5);
        transform.translation.y = 0.8 + (elapsed * 2.0 + package.phase).sin() * 0.15;
    }
}
