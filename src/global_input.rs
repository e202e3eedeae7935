use bevy::input::InputSystems;
use bevy::prelude::*;

pub struct GlobalInputPlugin;

impl Plugin for GlobalInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GlobalToggles>()
            .add_systems(PreUpdate, read_global_actions.after(InputSystems));
    }
}

/// Debug actions available regardless of view mode
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalAction {
    RigInspector,
    SceneInspector,
    Stats,
}

impl GlobalAction {
    pub const ALL: [Self; 3] = [Self::RigInspector, Self::SceneInspector, Self::Stats];

    pub const fn key(self) -> KeyCode {
        match self {
            Self::RigInspector => KeyCode::F1,
            Self::SceneInspector => KeyCode::F2,
            Self::Stats => KeyCode::F3,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::RigInspector => 0,
            Self::SceneInspector => 1,
            Self::Stats => 2,
        }
    }
}

/// Which actions have been pressed an odd number of times
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GlobalToggles([bool; GlobalAction::ALL.len()]);

impl GlobalToggles {
    pub const fn flip(&mut self, action: GlobalAction) {
        let index = action.index();
        self.0[index] = !self.0[index];
    }

    pub const fn is_flipped(&self, action: GlobalAction) -> bool { self.0[action.index()] }
}

fn read_global_actions(keys: Res<ButtonInput<KeyCode>>, mut toggles: ResMut<GlobalToggles>) {
    for action in GlobalAction::ALL {
        if keys.just_pressed(action.key()) {
            toggles.flip(action);
            debug!("{action:?} toggled");
        }
    }
}

/// Run condition that starts at `default` and flips each time `action` is pressed
pub fn toggle_active(
    default: bool,
    action: GlobalAction,
) -> impl FnMut(Res<GlobalToggles>) -> bool + Clone {
    move |toggles: Res<GlobalToggles>| default != toggles.is_flipped(action)
}
