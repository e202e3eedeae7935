use bevy::diagnostic::DiagnosticsStore;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;

use crate::global_input::GlobalAction;
use crate::global_input::GlobalToggles;
use crate::global_input::toggle_active;

pub struct StatsPlugin;

impl Plugin for StatsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(FrameTimeDiagnosticsPlugin::default())
            .add_systems(Startup, spawn_stats_overlay)
            .add_systems(
                Update,
                (
                    show_stats_overlay.run_if(resource_changed::<GlobalToggles>),
                    update_stats_overlay.run_if(toggle_active(true, GlobalAction::Stats)),
                ),
            );
    }
}

#[derive(Component)]
struct StatsOverlay;

fn spawn_stats_overlay(mut commands: Commands) {
    commands.spawn((
        Name::new("StatsOverlay"),
        StatsOverlay,
        Text::new("fps --"),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.1, 0.1, 0.1)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
    ));
}

// shown until the stats action is pressed
fn show_stats_overlay(
    toggles: Res<GlobalToggles>,
    mut overlay: Single<&mut Visibility, With<StatsOverlay>>,
) {
    overlay.set_if_neq(if toggles.is_flipped(GlobalAction::Stats) {
        Visibility::Hidden
    } else {
        Visibility::Inherited
    });
}

fn update_stats_overlay(
    diagnostics: Res<DiagnosticsStore>,
    mut text: Single<&mut Text, With<StatsOverlay>>,
) {
    if let Some(fps) = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(bevy::diagnostic::Diagnostic::smoothed)
    {
        text.0 = format!("fps {fps:.0}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_action_hides_and_restores_overlay() {
        let mut app = App::new();
        app.init_resource::<GlobalToggles>()
            .add_systems(Startup, spawn_stats_overlay)
            .add_systems(
                Update,
                show_stats_overlay.run_if(resource_changed::<GlobalToggles>),
            );
        app.update();

        let visibility = |app: &mut App| {
            let mut overlays = app
                .world_mut()
                .query_filtered::<&Visibility, With<StatsOverlay>>();
            overlays.single(app.world()).ok().copied()
        };
        assert_eq!(visibility(&mut app), Some(Visibility::Inherited));

        app.world_mut()
            .resource_mut::<GlobalToggles>()
            .flip(GlobalAction::Stats);
        app.update();
        assert_eq!(visibility(&mut app), Some(Visibility::Hidden));

        app.world_mut()
            .resource_mut::<GlobalToggles>()
            .flip(GlobalAction::Stats);
        app.update();
        assert_eq!(visibility(&mut app), Some(Visibility::Inherited));
    }
}
