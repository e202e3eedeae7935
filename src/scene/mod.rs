mod config;
mod constants;
mod environment;
mod group;
mod label;
mod marker;

use bevy::prelude::*;

pub use config::SceneConfig;
use config::SceneConfigPlugin;
pub use constants::ISLAND_SCENE_PATH;
use environment::EnvironmentPlugin;
pub use group::SceneGroupState;
use group::SceneGroupPlugin;
use label::HoverLabelPlugin;
use marker::MarkerPlugin;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(SceneConfigPlugin)
            .add_plugins(EnvironmentPlugin)
            .add_plugins(SceneGroupPlugin)
            .add_plugins(MarkerPlugin)
            .add_plugins(HoverLabelPlugin);
    }
}
