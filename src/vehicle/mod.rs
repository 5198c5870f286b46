//! The player van: spawning, the per-frame driving tick, and resets.

use bevy::prelude::*;

pub mod constraint;
pub mod dynamics;

use crate::input::{ControlIntent, ControlSamplingSet};
use crate::roads::RoadNetwork;
use dynamics::{DrivingConfig, VehicleState};

pub struct VehiclePlugin;

/// Set containing the per-frame driving tick; consumers of the van's
/// transform order themselves after it.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrivingSet;

impl Plugin for VehiclePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DrivingConfig>()
            .add_event::<VehicleResetEvent>()
            .add_systems(Startup, spawn_van)
            .add_systems(
                Update,
                (reset_controls, apply_vehicle_reset, drive_vehicle)
                    .chain()
                    .in_set(DrivingSet)
                    .after(ControlSamplingSet),
            );
    }
}

/// Marker for the player-controlled van.
#[derive(Component)]
pub struct PlayerVan;

/// Fired to put the van back at spawn. Each event causes exactly one reset,
/// regardless of where the van is or how it is moving.
#[derive(Event, Default)]
pub struct VehicleResetEvent;

fn spawn_van(mut commands: Commands, config: Res<DrivingConfig>) {
    let state = VehicleState::spawned(&config);
    commands.spawn((
        Transform::from_translation(state.position),
        Visibility::default(),
        state,
        PlayerVan,
    ));
    info!("Player van spawned at the main crossing");
}

/// Keyboard shortcut for the reset trigger (the quest UI fires the same
/// event when a mini-game ends).
fn reset_controls(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut resets: EventWriter<VehicleResetEvent>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        resets.send(VehicleResetEvent);
    }
}

fn apply_vehicle_reset(
    mut resets: EventReader<VehicleResetEvent>,
    config: Res<DrivingConfig>,
    mut vans: Query<(&mut VehicleState, &mut Transform), With<PlayerVan>>,
) {
    if resets.read().count() == 0 {
        return;
    }

    for (mut state, mut transform) in vans.iter_mut() {
        state.reset(&config);
        transform.translation = state.position;
        transform.rotation = Quat::IDENTITY;
    }
    info!("Van reset to spawn");
}

/// One driving tick per frame: snapshot intent in, authoritative transform
/// out.
fn drive_vehicle(
    time: Res<Time>,
    intent: Res<ControlIntent>,
    network: Res<RoadNetwork>,
    config: Res<DrivingConfig>,
    mut vans: Query<(&mut VehicleState, &mut Transform), With<PlayerVan>>,
) {
    let delta = time.delta_secs();

    for (mut state, mut transform) in vans.iter_mut() {
        dynamics::step(&mut state, &intent, delta, &network, &config);
        transform.translation = state.position;
        transform.rotation = Quat::from_rotation_y(state.heading);
    }
}
