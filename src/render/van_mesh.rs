//! The van's visual body, attached as children of the simulation entity.

use bevy::prelude::*;

use crate::vehicle::PlayerVan;

pub struct VanMeshPlugin;

impl Plugin for VanMeshPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VanBodyConfig>()
            .add_systems(Update, dress_van.run_if(van_needs_dressing));
    }
}

/// Marker that the van entity already carries its meshes.
#[derive(Component)]
pub struct VanDressed;

fn van_needs_dressing(vans: Query<(), (With<PlayerVan>, Without<VanDressed>)>) -> bool {
    !vans.is_empty()
}

/// Proportions of the courier van, relative to the entity origin.
#[derive(Resource)]
pub struct VanBodyConfig {
    pub body: Vec3,
    pub cabin: Vec3,
    pub wheel_radius: f32,
    pub wheel_width: f32,
}

impl Default for VanBodyConfig {
    fn default() -> Self {
        Self {
            body: Vec3::new(1.2, 0.5, 2.0),
            cabin: Vec3::new(1.0, 0.6, 1.0),
            wheel_radius: 0.25,
            wheel_width: 0.2,
        }
    }
}

fn dress_van(
    mut commands: Commands,
    vans: Query<Entity, (With<PlayerVan>, Without<VanDressed>)>,
    config: Res<VanBodyConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let body_mesh = meshes.add(Cuboid::new(config.body.x, config.body.y, config.body.z));
    let cabin_mesh = meshes.add(Cuboid::new(config.cabin.x, config.cabin.y, config.cabin.z));
    let window_mesh = meshes.add(Cuboid::new(0.05, 0.4, 0.8));
    let headlight_mesh = meshes.add(Cuboid::new(0.2, 0.15, 0.1));
    let wheel_mesh = meshes.add(Cylinder::new(config.wheel_radius, config.wheel_width));

    let body_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.91, 0.36, 0.3),
        perceptual_roughness: 0.4,
        metallic: 0.3,
        ..default()
    });
    let cabin_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.85, 0.3, 0.24),
        perceptual_roughness: 0.4,
        metallic: 0.3,
        ..default()
    });
    let window_material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.53, 0.81, 0.92, 0.6),
        alpha_mode: AlphaMode::Blend,
        perceptual_roughness: 0.1,
        ..default()
    });
    let headlight_material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.96, 0.88),
        emissive: LinearRgba::new(1.0, 0.96, 0.88, 1.0) * 0.3,
        ..default()
    });
    let wheel_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.17, 0.17, 0.17),
        perceptual_roughness: 0.8,
        ..default()
    });

    // Wheel cylinders lie on their side so the axle runs laterally.
    let wheel_rotation = Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);
    let wheel_offsets = [
        Vec3::new(-0.65, 0.0, 0.6),
        Vec3::new(0.65, 0.0, 0.6),
        Vec3::new(-0.65, 0.0, -0.6),
        Vec3::new(0.65, 0.0, -0.6),
    ];

    for van in vans.iter() {
        commands
            .entity(van)
            .insert(VanDressed)
            .with_children(|parent| {
                parent.spawn((
                    Mesh3d(body_mesh.clone()),
                    MeshMaterial3d(body_material.clone()),
                    Transform::from_xyz(0.0, 0.3, 0.0),
                ));
                parent.spawn((
                    Mesh3d(cabin_mesh.clone()),
                    MeshMaterial3d(cabin_material.clone()),
                    Transform::from_xyz(0.0, 0.8, -0.2),
                ));
                for side in [-0.45, 0.45] {
                    parent.spawn((
                        Mesh3d(window_mesh.clone()),
                        MeshMaterial3d(window_material.clone()),
                        Transform::from_xyz(side, 0.8, -0.2),
                    ));
                }
                for side in [-0.35, 0.35] {
                    parent.spawn((
                        Mesh3d(headlight_mesh.clone()),
                        MeshMaterial3d(headlight_material.clone()),
                        Transform::from_xyz(side, 0.35, 1.05),
                    ));
                }
                for offset in wheel_offsets {
                    parent.spawn((
                        Mesh3d(wheel_mesh.clone()),
                        MeshMaterial3d(wheel_material.clone()),
                        Transform::from_translation(offset).with_rotation(wheel_rotation),
                    ));
                }
            });
    }
}
