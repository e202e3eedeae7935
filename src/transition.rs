//! Tracks a view transition from the toggle until both rigs are within
//! `RigConfig::settle_epsilon` of the new profile.

use bevy::prelude::*;

use crate::camera::CameraState;
use crate::camera::RigConfig;
use crate::scene::SceneGroupState;
use crate::schedule::RigSet;
use crate::traits::frames_to_converge;
use crate::view_mode::ViewMode;
use crate::view_mode::ViewModeStore;
use crate::view_mode::ViewModeToggled;
use crate::view_profile::ViewProfile;

pub struct TransitionPlugin;

impl Plugin for TransitionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Transition>()
            .add_observer(start_transition)
            .add_observer(log_transition_settled)
            .add_systems(Update, track_transition.in_set(RigSet::Present));
    }
}

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    #[default]
    Settled,
    InProgress {
        frames: u32,
    },
}

/// Triggered once both rigs have settled on the current view mode
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewTransitionSettled {
    pub mode:   ViewMode,
    /// Frames since the toggle that started this transition
    pub frames: u32,
}

fn start_transition(
    toggled: On<ViewModeToggled>,
    config: Res<RigConfig>,
    mut transition: ResMut<Transition>,
) {
    *transition = Transition::InProgress { frames: 0 };

    // the slowest factor dominates
    let slowest = config
        .zoom_damping
        .min(config.theta_damping)
        .min(config.offset_damping);
    debug!(
        "transition to {:?} started, expect ~{} frames",
        toggled.to,
        frames_to_converge(slowest, config.settle_epsilon)
    );
}

fn track_transition(
    mut commands: Commands,
    store: Res<ViewModeStore>,
    config: Res<RigConfig>,
    mut transition: ResMut<Transition>,
    cameras: Query<&CameraState>,
    groups: Query<&SceneGroupState>,
) {
    let Transition::InProgress { frames } = *transition else {
        return;
    };
    let frames = frames + 1;

    let mode = store.current();
    let target = ViewProfile::for_mode(mode);
    let settled = cameras
        .iter()
        .all(|camera| camera.is_settled(&target, config.settle_epsilon))
        && groups
            .iter()
            .all(|group| group.is_settled(&target, config.settle_epsilon));

    if settled {
        *transition = Transition::Settled;
        commands.trigger(ViewTransitionSettled { mode, frames });
    } else {
        *transition = Transition::InProgress { frames };
    }
}

fn log_transition_settled(settled: On<ViewTransitionSettled>) {
    debug!(
        "view transition settled on {:?} after {} frames",
        settled.mode, settled.frames
    );
}
