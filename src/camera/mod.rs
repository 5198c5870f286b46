//! Chase camera that trails the van from a raised three-quarter offset.
//!
//! The camera only reads the van's transform; it never feeds back into the
//! driving model.

use bevy::prelude::*;

use crate::vehicle::PlayerVan;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FollowCameraConfig>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, follow_van.after(crate::vehicle::DrivingSet));
    }
}

/// Configuration for the follow camera.
#[derive(Resource)]
pub struct FollowCameraConfig {
    /// World-space offset from the van.
    pub offset: Vec3,
    /// Per-frame lerp factor toward the target position.
    pub smoothing: f32,
}

impl Default for FollowCameraConfig {
    fn default() -> Self {
        Self {
            offset: Vec3::new(12.0, 15.0, 12.0),
            smoothing: 0.05,
        }
    }
}

/// Marker for the chase camera.
#[derive(Component)]
pub struct FollowCamera;

fn setup_camera(mut commands: Commands, config: Res<FollowCameraConfig>) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(config.offset).looking_at(Vec3::ZERO, Vec3::Y),
        FollowCamera,
    ));
}

fn follow_van(
    config: Res<FollowCameraConfig>,
    vans: Query<&Transform, (With<PlayerVan>, Without<FollowCamera>)>,
    mut cameras: Query<&mut Transform, With<FollowCamera>>,
) {
    let Ok(van) = vans.get_single() else {
        return;
    };

    let target = van.translation + config.offset;
    for mut camera in cameras.iter_mut() {
        camera.translation = camera.translation.lerp(target, config.smoothing);
        camera.look_at(van.translation, Vec3::Y);
    }
}
