use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::schedule::RigSet;

pub struct PointerSamplePlugin;

impl Plugin for PointerSamplePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerSample>()
            .add_systems(Update, sample_pointer.in_set(RigSet::SamplePointer));
    }
}

/// Cursor position in normalized device coordinates, `[-1, 1]` on both axes with +y up.
/// Keeps its last value while the cursor is outside the window.
#[derive(Resource, Reflect, Debug, Clone, Copy, Default, PartialEq)]
#[reflect(Resource)]
pub struct PointerSample(Vec2);

impl PointerSample {
    pub const CENTER: Self = Self(Vec2::ZERO);

    /// Non-finite components read as 0, everything else is clamped to `[-1, 1]`
    pub fn new(x: f32, y: f32) -> Self {
        let sanitize = |value: f32| {
            if value.is_finite() {
                value.clamp(-1.0, 1.0)
            } else {
                0.0
            }
        };
        Self(Vec2::new(sanitize(x), sanitize(y)))
    }

    /// Converts a window-space cursor position (origin top left, +y down)
    pub fn from_window_position(cursor: Vec2, window_size: Vec2) -> Self {
        if window_size.x <= 0.0 || window_size.y <= 0.0 {
            return Self::CENTER;
        }
        Self::new(
            cursor.x / window_size.x * 2.0 - 1.0,
            -(cursor.y / window_size.y * 2.0 - 1.0),
        )
    }

    pub const fn x(self) -> f32 { self.0.x }

    pub const fn y(self) -> f32 { self.0.y }
}

fn sample_pointer(
    window: Option<Single<&Window, With<PrimaryWindow>>>,
    mut pointer: ResMut<PointerSample>,
) {
    let Some(window) = window else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    pointer.set_if_neq(PointerSample::from_window_position(cursor, window.size()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_corners_map_to_unit_square() {
        let size = Vec2::new(800.0, 600.0);

        let top_left = PointerSample::from_window_position(Vec2::ZERO, size);
        assert_eq!((top_left.x(), top_left.y()), (-1.0, 1.0));

        let bottom_right = PointerSample::from_window_position(size, size);
        assert_eq!((bottom_right.x(), bottom_right.y()), (1.0, -1.0));

        let center = PointerSample::from_window_position(size / 2.0, size);
        assert_eq!(center, PointerSample::CENTER);
    }

    #[test]
    fn non_finite_components_read_as_zero() {
        let sample = PointerSample::new(f32::NAN, f32::INFINITY);
        assert_eq!(sample, PointerSample::CENTER);
    }

    #[test]
    fn out_of_range_is_clamped() {
        let sample = PointerSample::new(3.0, -7.5);
        assert_eq!((sample.x(), sample.y()), (1.0, -1.0));
    }

    #[test]
    fn cursor_leaving_window_keeps_last_sample() {
        let mut app = App::new();
        app.init_resource::<PointerSample>()
            .add_systems(Update, sample_pointer);

        let mut window = Window::default();
        window.set_cursor_position(Some(Vec2::ZERO));
        let window = app.world_mut().spawn((window, PrimaryWindow)).id();
        app.update();

        let corner = PointerSample::new(-1.0, 1.0);
        assert_eq!(*app.world().resource::<PointerSample>(), corner);

        if let Some(mut window) = app.world_mut().get_mut::<Window>(window) {
            window.set_cursor_position(None);
        }
        app.update();
        assert_eq!(*app.world().resource::<PointerSample>(), corner);
    }

    #[test]
    fn zero_sized_window_is_centered() {
        let sample = PointerSample::from_window_position(Vec2::new(10.0, 10.0), Vec2::ZERO);
        assert_eq!(sample, PointerSample::CENTER);
    }
}
