use bevy::light::AmbientLight;
use bevy::prelude::*;

use super::config::SceneConfig;
use crate::camera::CameraState;

pub struct EnvironmentPlugin;

impl Plugin for EnvironmentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, apply_scene_config.run_if(resource_changed::<SceneConfig>));
    }
}

// also runs on the first frame, since an inserted resource counts as changed
fn apply_scene_config(
    config: Res<SceneConfig>,
    mut clear_color: ResMut<ClearColor>,
    mut cameras: Query<(&mut DistanceFog, &mut AmbientLight), With<CameraState>>,
) {
    clear_color.0 = config.clear_color;

    for (mut fog, mut ambient) in &mut cameras {
        *fog = config.distance_fog();
        ambient.brightness = config.ambient_brightness;
    }
    debug!("applied scene config");
}
