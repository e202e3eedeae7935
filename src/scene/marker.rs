use bevy::picking::Pickable;
use bevy::prelude::*;
use bevy::render::render_resource::Face;
use bevy::window::CursorIcon;
use bevy::window::PrimaryWindow;
use bevy::window::SystemCursorIcon;

use super::config::SceneConfig;
use super::constants::MARKER_POSITION;
use super::constants::MARKER_RADIUS;
use super::constants::MARKER_SEGMENTS;
use crate::view_mode::ViewModeStore;
use crate::view_mode::toggle_view_mode;

pub struct MarkerPlugin;

impl Plugin for MarkerPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Highlight>()
            .add_systems(Update, (show_outline, apply_marker_style));
    }
}

/// The clickable sphere that toggles the view mode
#[derive(Component, Reflect, Debug, Default)]
#[reflect(Component)]
pub struct Marker;

/// Whether the pointer is over this entity. Read by the outline and the hover label.
#[derive(Component, Reflect, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[reflect(Component)]
pub struct Highlight(pub bool);

/// Inverted hull around the marker. Only its back faces render, so it shows as
/// an edge band around the sphere's silhouette.
#[derive(Component, Debug, Default)]
struct MarkerOutline;

/// Uniform scale that grows the marker mesh by `width` on every side
const fn outline_scale(width: f32) -> f32 { (MARKER_RADIUS + width.max(0.0)) / MARKER_RADIUS }

pub fn spawn_marker(
    commands: &mut Commands,
    group: Entity,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) -> Entity {
    let mesh = meshes.add(
        Sphere::new(MARKER_RADIUS)
            .mesh()
            .uv(MARKER_SEGMENTS, MARKER_SEGMENTS),
    );
    // colors and outline width are filled in by `apply_marker_style` once the config is known
    let outline_material = materials.add(StandardMaterial {
        base_color: Color::BLACK,
        cull_mode: Some(Face::Front),
        fog_enabled: false,
        ..default()
    });

    commands
        .spawn((
            Name::new("Marker"),
            Marker,
            Highlight::default(),
            Mesh3d(mesh.clone()),
            MeshMaterial3d(materials.add(StandardMaterial::default())),
            Transform::from_translation(MARKER_POSITION),
            ChildOf(group),
        ))
        .with_child((
            Name::new("MarkerOutline"),
            MarkerOutline,
            Mesh3d(mesh),
            MeshMaterial3d(outline_material),
            Transform::default(),
            Visibility::Hidden,
            Pickable::IGNORE,
        ))
        .observe(on_marker_over)
        .observe(on_marker_out)
        .observe(on_marker_click)
        .id()
}

/// Sets the marker's `Highlight` and swaps the window cursor to match
fn set_hovered(
    commands: &mut Commands,
    highlights: &mut Query<&mut Highlight, With<Marker>>,
    window: Option<Entity>,
    marker: Entity,
    hovered: bool,
) {
    if let Ok(mut highlight) = highlights.get_mut(marker) {
        highlight.set_if_neq(Highlight(hovered));
    }
    if let Some(window) = window {
        let icon = if hovered {
            SystemCursorIcon::Pointer
        } else {
            SystemCursorIcon::Default
        };
        commands.entity(window).insert(CursorIcon::from(icon));
    }
}

fn on_marker_over(
    over: On<Pointer<Over>>,
    mut commands: Commands,
    mut highlights: Query<&mut Highlight, With<Marker>>,
    window: Option<Single<Entity, With<PrimaryWindow>>>,
) {
    let window = window.map(|window| *window);
    set_hovered(&mut commands, &mut highlights, window, over.entity, true);
}

fn on_marker_out(
    out: On<Pointer<Out>>,
    mut commands: Commands,
    mut highlights: Query<&mut Highlight, With<Marker>>,
    window: Option<Single<Entity, With<PrimaryWindow>>>,
) {
    let window = window.map(|window| *window);
    set_hovered(&mut commands, &mut highlights, window, out.entity, false);
}

/// Every click toggles exactly once. The rigs read the store fresh each frame,
/// so rapid clicks cannot leave them on a stale target.
fn on_marker_click(
    _click: On<Pointer<Click>>,
    mut commands: Commands,
    mut store: ResMut<ViewModeStore>,
) {
    toggle_view_mode(&mut commands, &mut store);
}

fn show_outline(
    markers: Query<(&Highlight, &Children), (With<Marker>, Changed<Highlight>)>,
    mut outlines: Query<&mut Visibility, With<MarkerOutline>>,
) {
    for (highlight, children) in &markers {
        let visibility = if highlight.0 {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        for child in children.iter() {
            if let Ok(mut outline) = outlines.get_mut(child) {
                outline.set_if_neq(visibility);
            }
        }
    }
}

fn apply_marker_style(
    config: Res<SceneConfig>,
    markers: Query<&MeshMaterial3d<StandardMaterial>, With<Marker>>,
    mut outlines: Query<(&MeshMaterial3d<StandardMaterial>, &mut Transform), With<MarkerOutline>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !config.is_changed() {
        return;
    }

    for material in &markers {
        if let Some(mut base) = materials.get_mut(&material.0) {
            base.base_color = config.marker_color;
        }
    }
    for (material, mut transform) in &mut outlines {
        if let Some(mut outline) = materials.get_mut(&material.0) {
            outline.emissive = config.outline_emissive();
        }
        transform.scale = Vec3::splat(outline_scale(config.outline_width));
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;

    use super::*;
    use crate::view_mode::ViewMode;
    use crate::view_mode::ViewModeToggled;

    #[derive(Resource, Default)]
    struct Toggles(Vec<ViewModeToggled>);

    fn test_app() -> App {
        let mut app = App::new();
        app.init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<SceneConfig>()
            .init_resource::<ViewModeStore>()
            .init_resource::<Toggles>()
            .add_observer(|toggled: On<ViewModeToggled>, mut toggles: ResMut<Toggles>| {
                toggles.0.push(*toggled);
            })
            .add_systems(Update, (show_outline, apply_marker_style));
        app
    }

    fn spawn_test_marker(app: &mut App) -> Entity {
        let marker = app.world_mut().run_system_once(
            |mut commands: Commands,
             mut meshes: ResMut<Assets<Mesh>>,
             mut materials: ResMut<Assets<StandardMaterial>>| {
                let group = commands.spawn(Transform::default()).id();
                spawn_marker(&mut commands, group, &mut meshes, &mut materials)
            },
        );
        assert!(marker.is_ok());
        app.update();
        marker.unwrap_or(Entity::PLACEHOLDER)
    }

    fn hover(app: &mut App, marker: Entity, window: Option<Entity>, hovered: bool) {
        let result = app.world_mut().run_system_once(
            move |mut commands: Commands, mut highlights: Query<&mut Highlight, With<Marker>>| {
                set_hovered(&mut commands, &mut highlights, window, marker, hovered);
            },
        );
        assert!(result.is_ok());
        app.update();
    }

    fn click(app: &mut App) {
        let result = app.world_mut().run_system_once(
            |mut commands: Commands, mut store: ResMut<ViewModeStore>| {
                toggle_view_mode(&mut commands, &mut store);
            },
        );
        assert!(result.is_ok());
    }

    fn outline_of(app: &mut App) -> Option<(Visibility, Transform, Handle<StandardMaterial>)> {
        let mut outlines = app.world_mut().query_filtered::<(
            &Visibility,
            &Transform,
            &MeshMaterial3d<StandardMaterial>,
        ), With<MarkerOutline>>();
        outlines
            .single(app.world())
            .ok()
            .map(|(visibility, transform, material)| (*visibility, *transform, material.0.clone()))
    }

    #[test]
    fn hover_sets_and_clears_highlight() {
        let mut app = test_app();
        let marker = spawn_test_marker(&mut app);

        hover(&mut app, marker, None, true);
        assert_eq!(app.world().get::<Highlight>(marker), Some(&Highlight(true)));

        hover(&mut app, marker, None, false);
        assert_eq!(app.world().get::<Highlight>(marker), Some(&Highlight(false)));
    }

    #[test]
    fn hover_swaps_window_cursor() {
        let mut app = test_app();
        let marker = spawn_test_marker(&mut app);
        let window = app.world_mut().spawn((Window::default(), PrimaryWindow)).id();

        hover(&mut app, marker, Some(window), true);
        assert!(matches!(
            app.world().get::<CursorIcon>(window),
            Some(CursorIcon::System(SystemCursorIcon::Pointer))
        ));

        hover(&mut app, marker, Some(window), false);
        assert!(matches!(
            app.world().get::<CursorIcon>(window),
            Some(CursorIcon::System(SystemCursorIcon::Default))
        ));
    }

    #[test]
    fn each_click_toggles_exactly_once() {
        let mut app = test_app();
        spawn_test_marker(&mut app);

        for _ in 0..3 {
            click(&mut app);
        }

        assert_eq!(
            app.world().resource::<ViewModeStore>().current(),
            ViewMode::RightSide
        );
        let toggles = &app.world().resource::<Toggles>().0;
        assert_eq!(toggles.len(), 3);
        assert_eq!(toggles[2], ViewModeToggled {
            from: ViewMode::Center,
            to:   ViewMode::RightSide,
        });
    }

    #[test]
    fn outline_follows_highlight() {
        let mut app = test_app();
        let marker = spawn_test_marker(&mut app);
        let visibility = |app: &mut App| outline_of(app).map(|(visibility, ..)| visibility);
        assert_eq!(visibility(&mut app), Some(Visibility::Hidden));

        hover(&mut app, marker, None, true);
        assert_eq!(visibility(&mut app), Some(Visibility::Inherited));

        hover(&mut app, marker, None, false);
        assert_eq!(visibility(&mut app), Some(Visibility::Hidden));
    }

    #[test]
    fn outline_uses_configured_edge_color_and_width() {
        let mut app = test_app();
        spawn_test_marker(&mut app);
        let config = SceneConfig::default();

        let outline = outline_of(&mut app);
        assert!(outline.as_ref().is_some_and(|(_, transform, _)| {
            (transform.scale - Vec3::splat(outline_scale(config.outline_width))).length() < 1e-6
        }));

        let materials = app.world().resource::<Assets<StandardMaterial>>();
        let material = outline.and_then(|(.., handle)| materials.get(&handle));
        assert!(material.is_some_and(|material| {
            material.emissive == config.outline_emissive()
                && material.cull_mode == Some(Face::Front)
        }));
    }

    #[test]
    fn outline_scale_grows_by_width() {
        assert!((outline_scale(0.0) - 1.0).abs() < f32::EPSILON);
        assert!((outline_scale(0.25) - (MARKER_RADIUS + 0.25) / MARKER_RADIUS).abs() < 1e-6);
        assert!((outline_scale(-1.0) - 1.0).abs() < f32::EPSILON);
    }
}
