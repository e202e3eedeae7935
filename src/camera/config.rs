use bevy::prelude::*;
use bevy_inspector_egui::inspector_options::std_options::NumberDisplay;
use bevy_inspector_egui::prelude::*;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;

use crate::global_input::GlobalAction;
use crate::global_input::toggle_active;

pub struct RigConfigPlugin;

impl Plugin for RigConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(
            ResourceInspectorPlugin::<RigConfig>::default()
                .run_if(toggle_active(false, GlobalAction::RigInspector)),
        )
        .init_resource::<RigConfig>();
    }
}

/// Tunables shared by the camera rig and the scene rig
#[derive(Resource, Reflect, InspectorOptions, Debug, PartialEq, Clone, Copy)]
#[reflect(Resource, InspectorOptions)]
pub struct RigConfig {
    /// Distance from the origin to the camera
    #[inspector(min = 1.0, max = 100.0, display = NumberDisplay::Slider)]
    pub radius:                  f32,
    #[inspector(min = 0.001, max = 1.0, display = NumberDisplay::Slider)]
    pub zoom_damping:            f32,
    #[inspector(min = 0.001, max = 1.0, display = NumberDisplay::Slider)]
    pub theta_damping:           f32,
    #[inspector(min = 0.001, max = 1.0, display = NumberDisplay::Slider)]
    pub look_damping:            f32,
    #[inspector(min = 0.001, max = 1.0, display = NumberDisplay::Slider)]
    pub offset_damping:          f32,
    /// Look-target excursion at `parallax_reference_zoom`
    #[inspector(min = 0.0, max = 20.0, display = NumberDisplay::Slider)]
    pub parallax_strength:       f32,
    /// Zoom at which the excursion equals `parallax_strength`
    #[inspector(min = 1.0, max = 100.0, display = NumberDisplay::Slider)]
    pub parallax_reference_zoom: f32,
    /// Scale damping by frame time instead of applying it once per frame
    pub frame_rate_independent:  bool,
    /// Frame rate the damping factors are tuned for
    #[inspector(min = 1.0, max = 240.0)]
    pub reference_fps:           f32,
    /// Distance to target below which a rig counts as settled
    #[inspector(min = 0.00001, max = 0.1)]
    pub settle_epsilon:          f32,
    #[inspector(min = 0.0001, max = 1.0)]
    pub near:                    f32,
    #[inspector(min = 10.0, max = 1000.0)]
    pub far:                     f32,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            radius:                  20.0,
            zoom_damping:            0.03,
            theta_damping:           0.05,
            look_damping:            0.05,
            offset_damping:          0.05,
            parallax_strength:       4.0,
            parallax_reference_zoom: 28.0,
            frame_rate_independent:  false,
            reference_fps:           60.0,
            settle_epsilon:          1e-3,
            near:                    0.01,
            far:                     200.0,
        }
    }
}
