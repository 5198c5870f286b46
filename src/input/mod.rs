//! Keyboard sampling into a per-tick control snapshot.
//!
//! Key events arrive at event-loop cadence; the driving systems only ever
//! see the snapshot taken at the start of the frame, so a key press can
//! never change intent halfway through a tick.

use bevy::prelude::*;

pub struct InputPlugin;

/// Set containing the snapshot system; drivers of [`ControlIntent`] order
/// themselves after it.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlSamplingSet;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlIntent>()
            .add_systems(Update, sample_controls.in_set(ControlSamplingSet));
    }
}

/// Driver intent for one tick.
#[derive(Resource, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub turbo: bool,
}

impl ControlIntent {
    /// Snapshot the W/S/A/D + Shift bindings from the current key state.
    pub fn from_keys(keys: &ButtonInput<KeyCode>) -> Self {
        Self {
            forward: keys.pressed(KeyCode::KeyW),
            backward: keys.pressed(KeyCode::KeyS),
            left: keys.pressed(KeyCode::KeyA),
            right: keys.pressed(KeyCode::KeyD),
            turbo: keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight),
        }
    }
}

fn sample_controls(keys: Res<ButtonInput<KeyCode>>, mut intent: ResMut<ControlIntent>) {
    *intent = ControlIntent::from_keys(&keys);
}
