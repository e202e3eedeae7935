use bevy::light::AmbientLight;
use bevy::prelude::*;

use super::config::RigConfig;
use super::constants::MIN_ZOOM;
use super::pointer::PointerSample;
use crate::scene::SceneConfig;
use crate::schedule::RigSet;
use crate::traits::DampExt;
use crate::traits::frame_rate_independent_damping;
use crate::traits::sanitize_damping;
use crate::traits::spherical_to_cartesian;
use crate::view_mode::ViewMode;
use crate::view_mode::ViewModeStore;
use crate::view_profile::ViewProfile;

pub struct CameraRigPlugin;

impl Plugin for CameraRigPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CameraState>()
            .add_systems(Startup, spawn_camera)
            .add_systems(Update, update_camera_rig.in_set(RigSet::Advance));
    }
}

/// Continuous camera state owned by the rig. Position is never stored, it is
/// derived from `theta` and `phi` every frame.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component)]
pub struct CameraState {
    pub theta:       f32,
    /// Fixed for the lifetime of the rig
    pub phi:         f32,
    pub zoom:        f32,
    /// Aim point on the ground plane as (x, z)
    pub look_target: Vec2,
}

impl CameraState {
    /// State at rest on the profile of `mode` with a centered look target
    pub const fn at_rest(mode: ViewMode) -> Self {
        let profile = ViewProfile::for_mode(mode);
        Self {
            theta:       profile.theta,
            phi:         profile.phi,
            zoom:        profile.zoom,
            look_target: Vec2::ZERO,
        }
    }

    /// One rig step toward `target`. `dt` only matters when the config asks
    /// for frame-rate independent damping.
    #[must_use]
    pub fn advance(
        &self,
        target: &ViewProfile,
        pointer: PointerSample,
        config: &RigConfig,
        dt: f32,
    ) -> Self {
        let damping = |factor: f32| {
            if config.frame_rate_independent {
                frame_rate_independent_damping(factor, dt, config.reference_fps)
            } else {
                sanitize_damping(factor)
            }
        };

        let zoom = self
            .zoom
            .damp_toward(target.zoom, damping(config.zoom_damping))
            .max(MIN_ZOOM);
        let theta = self
            .theta
            .damp_toward(target.theta, damping(config.theta_damping));

        let excursion = parallax_scale(zoom, config);
        let look_target = self.look_target.damp_toward(
            Vec2::new(pointer.x() * excursion, pointer.y() * excursion),
            damping(config.look_damping),
        );

        Self {
            theta,
            phi: self.phi,
            zoom,
            look_target,
        }
    }

    pub fn position(&self, radius: f32) -> Vec3 {
        spherical_to_cartesian(radius, self.theta, self.phi)
    }

    pub const fn look_at_point(&self) -> Vec3 {
        Vec3::new(self.look_target.x, 0.0, self.look_target.y)
    }

    /// Camera placement for this state, looking at the look target with +Y up
    pub fn transform(&self, radius: f32) -> Transform {
        Transform::from_translation(self.position(radius)).looking_at(self.look_at_point(), Vec3::Y)
    }

    /// Orthographic projection scale, world units per logical pixel
    pub fn projection_scale(&self) -> f32 { 1.0 / self.zoom.max(MIN_ZOOM) }

    pub fn is_settled(&self, target: &ViewProfile, epsilon: f32) -> bool {
        (self.theta - target.theta).abs() < epsilon && (self.zoom - target.zoom).abs() < epsilon
    }
}

/// Look-target excursion for a full pointer deflection. Shrinks with the square of
/// zoom, so tight framing barely sways.
pub fn parallax_scale(zoom: f32, config: &RigConfig) -> f32 {
    let zoom = zoom.max(MIN_ZOOM);
    let reference = config.parallax_reference_zoom.max(MIN_ZOOM);
    config.parallax_strength / (zoom * zoom / (reference * reference))
}

fn orthographic_projection(state: &CameraState, config: &RigConfig) -> Projection {
    Projection::Orthographic(OrthographicProjection {
        near: config.near,
        far: config.far,
        scale: state.projection_scale(),
        ..OrthographicProjection::default_3d()
    })
}

fn spawn_camera(
    mut commands: Commands,
    store: Res<ViewModeStore>,
    config: Res<RigConfig>,
    scene_config: Res<SceneConfig>,
) {
    let state = CameraState::at_rest(store.current());

    commands.spawn((
        Name::new("ViewCamera"),
        Camera3d::default(),
        orthographic_projection(&state, &config),
        state.transform(config.radius),
        scene_config.distance_fog(),
        // per-camera ambient light, retuned by the scene inspector
        AmbientLight {
            brightness: scene_config.ambient_brightness,
            ..default()
        },
        state,
    ));
}

fn update_camera_rig(
    time: Res<Time>,
    store: Res<ViewModeStore>,
    pointer: Res<PointerSample>,
    config: Res<RigConfig>,
    mut cameras: Query<(&mut CameraState, &mut Transform, &mut Projection)>,
) {
    let target = ViewProfile::for_mode(store.current());

    for (mut state, mut transform, mut projection) in &mut cameras {
        let next = state.advance(&target, *pointer, &config, time.delta_secs());
        *state = next;
        *transform = next.transform(config.radius);

        // mutating the projection is what makes bevy rebuild the projection matrix
        if let Projection::Orthographic(orthographic) = projection.as_mut() {
            orthographic.scale = next.projection_scale();
            orthographic.near = config.near;
            orthographic.far = config.far;
        } else {
            *projection = orthographic_projection(&next, &config);
        }
    }
}
