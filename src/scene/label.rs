use bevy::prelude::*;

use super::config::SceneConfig;
use super::constants::MARKER_LABEL;
use super::constants::MARKER_POSITION;
use super::group::SceneGroupState;
use super::marker::Highlight;
use super::marker::Marker;
use crate::camera::CameraState;
use crate::schedule::RigSet;

/// Width of the box the label text is centered in
const LABEL_WIDTH: f32 = 240.0;

pub struct HoverLabelPlugin;

impl Plugin for HoverLabelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hover_label)
            .add_systems(
                Update,
                (reveal_hover_label, place_hover_label)
                    .chain()
                    .in_set(RigSet::Present),
            );
    }
}

/// Container node that tracks the marker on screen
#[derive(Component, Debug, Default)]
struct HoverLabel {
    /// 0 hidden, 1 fully shown
    reveal: f32,
}

/// The text inside the `HoverLabel`
#[derive(Component, Debug)]
struct HoverLabelText;

/// Moves `reveal` linearly toward 1 while hovered and toward 0 otherwise,
/// taking `fade_secs` for a full sweep
fn step_reveal(reveal: f32, hovered: bool, dt: f32, fade_secs: f32) -> f32 {
    let rate = if fade_secs > 0.0 { dt / fade_secs } else { 1.0 };
    let target = if hovered { 1.0 } else { 0.0 };
    if reveal < target {
        (reveal + rate).min(target)
    } else {
        (reveal - rate).max(target)
    }
}

fn spawn_hover_label(mut commands: Commands, config: Res<SceneConfig>) {
    commands
        .spawn((
            Name::new("HoverLabel"),
            HoverLabel::default(),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Px(LABEL_WIDTH),
                justify_content: JustifyContent::Center,
                ..default()
            },
            Visibility::Hidden,
        ))
        .with_child((
            HoverLabelText,
            Text::new(MARKER_LABEL),
            TextFont {
                font_size: config.label_font_size,
                ..default()
            },
            TextColor(Color::BLACK.with_alpha(0.0)),
        ));
}

fn reveal_hover_label(
    time: Res<Time>,
    config: Res<SceneConfig>,
    markers: Query<&Highlight, With<Marker>>,
    mut label: Single<(&mut HoverLabel, &mut Visibility)>,
    mut text: Single<(&mut TextColor, &mut TextFont), With<HoverLabelText>>,
) {
    let hovered = markers.iter().any(|highlight| highlight.0);
    let (ref mut hover_label, ref mut visibility) = *label;

    let reveal = step_reveal(
        hover_label.reveal,
        hovered,
        time.delta_secs(),
        config.label_fade_secs,
    );
    hover_label.reveal = reveal;

    visibility.set_if_neq(if reveal > 0.0 {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    });

    let (ref mut color, ref mut font) = *text;
    color.0 = color.0.with_alpha(reveal);
    // scales in from nothing
    font.font_size = (config.label_font_size * reveal).max(1.0);
}

fn place_hover_label(
    config: Res<SceneConfig>,
    camera: Single<(&Camera, &Transform), With<CameraState>>,
    group: Single<&Transform, With<SceneGroupState>>,
    mut label: Single<&mut Node, With<HoverLabel>>,
) {
    let (camera, camera_transform) = *camera;
    // the rig rewrote the camera transform this frame and the camera has no parent,
    // so its global transform is the local one
    let camera_global = GlobalTransform::from(*camera_transform);
    let anchor = group.translation + MARKER_POSITION + Vec3::Y * config.label_height;

    let Ok(viewport) = camera.world_to_viewport(&camera_global, anchor) else {
        return;
    };

    label.left = Val::Px(viewport.x - LABEL_WIDTH / 2.0);
    label.top = Val::Px(viewport.y - config.label_font_size);
}
