//! Vancourier - courier van driving around a fixed city grid.
//!
//! Keyboard-driven van physics constrained to the road network, with a
//! chase camera, proximity-triggered quest spots, and collectible packages.

use bevy::prelude::*;

use vancourier::{camera, input, interaction, render, roads, vehicle};

fn main() {
    // Force Vulkan backend on Windows (DX12 causes crashes on some systems)
    #[cfg(target_os = "windows")]
    std::env::set_var("WGPU_BACKEND", "vulkan");
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Vancourier".into(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        // Static road grid
        .add_plugins(roads::RoadsPlugin)
        // Keyboard snapshotting
        .add_plugins(input::InputPlugin)
        // Driving model and constraints
        .add_plugins(vehicle::VehiclePlugin)
        // Chase camera
        .add_plugins(camera::CameraPlugin)
        // Quest spots and packages
        .add_plugins(interaction::InteractionPlugin)
        // Scene dressing
        .add_plugins(render::RenderPlugin)
        .run();
}
