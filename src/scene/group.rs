use bevy::prelude::*;

use super::marker::spawn_marker;
use crate::asset_loader::SceneAssets;
use crate::camera::RigConfig;
use crate::schedule::RigSet;
use crate::traits::DampExt;
use crate::traits::frame_rate_independent_damping;
use crate::traits::sanitize_damping;
use crate::view_mode::ViewMode;
use crate::view_mode::ViewModeStore;
use crate::view_profile::ViewProfile;

pub struct SceneGroupPlugin;

impl Plugin for SceneGroupPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SceneGroupState>()
            .add_systems(Startup, spawn_scene_group)
            .add_systems(Update, update_scene_rig.in_set(RigSet::Advance));
    }
}

/// Position of the group holding the island and the marker. Trails the
/// current profile's offset.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component)]
#[require(Transform, Visibility)]
pub struct SceneGroupState {
    pub position: Vec3,
}

impl SceneGroupState {
    pub const fn at_rest(mode: ViewMode) -> Self {
        Self {
            position: ViewProfile::for_mode(mode).offset,
        }
    }

    #[must_use]
    pub fn advance(&self, target: &ViewProfile, config: &RigConfig, dt: f32) -> Self {
        let damping = if config.frame_rate_independent {
            frame_rate_independent_damping(config.offset_damping, dt, config.reference_fps)
        } else {
            sanitize_damping(config.offset_damping)
        };

        Self {
            position: self.position.damp_toward(target.offset, damping),
        }
    }

    pub fn is_settled(&self, target: &ViewProfile, epsilon: f32) -> bool {
        (self.position - target.offset).abs().max_element() < epsilon
    }
}

fn spawn_scene_group(
    mut commands: Commands,
    store: Res<ViewModeStore>,
    scene_assets: Res<SceneAssets>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let state = SceneGroupState::at_rest(store.current());

    let group = commands
        .spawn((
            Name::new("SceneGroup"),
            Transform::from_translation(state.position),
            state,
        ))
        .with_child((Name::new("Island"), SceneRoot(scene_assets.island.clone())))
        .id();

    spawn_marker(&mut commands, group, &mut meshes, &mut materials);
}

fn update_scene_rig(
    time: Res<Time>,
    store: Res<ViewModeStore>,
    config: Res<RigConfig>,
    mut groups: Query<(&mut SceneGroupState, &mut Transform)>,
) {
    let target = ViewProfile::for_mode(store.current());

    for (mut state, mut transform) in &mut groups {
        let next = state.advance(&target, &config, time.delta_secs());
        *state = next;
        transform.translation = next.position;
    }
}
