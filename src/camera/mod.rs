mod config;
mod constants;
mod pointer;
mod rig;

use bevy::prelude::*;

pub use config::RigConfig;
use config::RigConfigPlugin;
use pointer::PointerSamplePlugin;
pub use rig::CameraState;
use rig::CameraRigPlugin;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RigConfigPlugin)
            .add_plugins(PointerSamplePlugin)
            .add_plugins(CameraRigPlugin);
    }
}
