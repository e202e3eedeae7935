use bevy::asset::LoadState;
// the island is loaded once, before the scene group that parents it spawns
use bevy::prelude::*;

use crate::scene::ISLAND_SCENE_PATH;

pub struct AssetLoaderPlugin;

impl Plugin for AssetLoaderPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AssetsState>() // necessary to tell if they've finished loading
            .init_resource::<SceneAssets>()
            // the scene group spawns in Startup and clones this handle
            .add_systems(PreStartup, load_assets)
            .add_systems(
                Update,
                check_asset_loading.run_if(in_state(AssetsState::Loading)),
            );
    }
}

#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AssetsState {
    #[default]
    Loading,
    Loaded,
    /// The island failed to load. The rest of the scene still runs.
    Failed,
}

#[derive(Resource, Clone, Debug, Default)]
pub struct SceneAssets {
    pub island: Handle<Scene>,
}

pub fn load_assets(mut scene_assets: ResMut<SceneAssets>, asset_server: Res<AssetServer>) {
    *scene_assets = SceneAssets {
        island: asset_server.load(ISLAND_SCENE_PATH),
    };
}

pub fn check_asset_loading(
    mut next_state: ResMut<NextState<AssetsState>>,
    asset_server: Res<AssetServer>,
    scene_assets: Res<SceneAssets>,
) {
    match asset_server.get_load_state(scene_assets.island.id()) {
        Some(LoadState::Loaded) => {
            info!("island loaded");
            next_state.set(AssetsState::Loaded);
        },
        Some(LoadState::Failed(error)) => {
            warn!("island failed to load from {ISLAND_SCENE_PATH}: {error}");
            next_state.set(AssetsState::Failed);
        },
        _ => {},
    }
}
