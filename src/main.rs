//! Island View - an orthographic island scene built with Bevy 0.18
//!
//! Clicking the marker toggles between view modes:
//! - The camera eases to the new mode's spherical angles and zoom
//! - The island group slides to the new mode's offset in lockstep
//! - Pointer position adds a small parallax sway to the camera's aim
//! - Bevy Remote Protocol (BRP) support for debugging

mod asset_loader;
mod camera;
mod global_input;
mod scene;
mod schedule;
mod stats;
mod traits;
mod transition;
mod view_mode;
mod view_profile;

use bevy::gltf::GltfPlugin;
use bevy::gltf::convert_coordinates::GltfConvertCoordinates;
use bevy::picking::mesh_picking::MeshPickingPlugin;
use bevy::prelude::*;
#[cfg(target_arch = "wasm32")]
use bevy::window::PresentMode;
use bevy_brp_extras::BrpExtrasPlugin;
use bevy_inspector_egui::bevy_egui::EguiPlugin;

use crate::asset_loader::AssetLoaderPlugin;
use crate::camera::CameraPlugin;
use crate::global_input::GlobalInputPlugin;
use crate::scene::ScenePlugin;
use crate::schedule::SchedulePlugin;
use crate::stats::StatsPlugin;
use crate::transition::TransitionPlugin;
use crate::view_mode::ViewModePlugin;

fn main() {
    let mut app = App::new();

    // Get effective port from BrpExtrasPlugin to include in window title if non-default
    let brp_plugin = BrpExtrasPlugin::default();
    let (effective_port, _) = brp_plugin.get_effective_port();
    let window_title = if effective_port == bevy_brp_extras::DEFAULT_REMOTE_PORT {
        "island view".to_string()
    } else {
        format!("island view - {effective_port}")
    };

    #[cfg(not(target_arch = "wasm32"))]
    let primary_window = Window {
        title: window_title,
        ..default()
    };

    #[cfg(target_arch = "wasm32")]
    let primary_window = Window {
        title: window_title,
        present_mode: PresentMode::AutoNoVsync, // Reduces input lag.
        fit_canvas_to_parent: true,
        ..default()
    };

    app.add_plugins(
        DefaultPlugins
            .set(GltfPlugin {
                convert_coordinates: GltfConvertCoordinates {
                    rotate_scene_entity: true,
                    rotate_meshes:       true,
                },
                ..default()
            })
            .set(WindowPlugin {
                primary_window: Some(primary_window),
                ..default()
            }),
    );

    app.add_plugins((
        EguiPlugin::default(),
        MeshPickingPlugin,
        brp_plugin,
        AssetLoaderPlugin,
        SchedulePlugin,
        GlobalInputPlugin,
        ViewModePlugin,
        CameraPlugin,
        ScenePlugin,
        TransitionPlugin,
        StatsPlugin,
    ))
    .run();
}
