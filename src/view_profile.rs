use std::f32::consts::PI;

use bevy::prelude::*;

use crate::view_mode::ViewMode;

/// Camera direction, zoom and scene group offset for one view mode
#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
pub struct ViewProfile {
    /// Angle from +Y in radians
    pub theta:  f32,
    /// Angle around Y from +X in radians
    pub phi:    f32,
    /// Orthographic zoom, world units per screen pixel is `1 / zoom`
    pub zoom:   f32,
    /// Where the scene group sits while this mode is active
    pub offset: Vec3,
}

const CENTER_PROFILE: ViewProfile = ViewProfile {
    theta:  0.38 * PI,
    phi:    0.5 * PI,
    zoom:   55.0,
    offset: Vec3::new(0.0, -1.5, 0.0),
};

const RIGHT_SIDE_PROFILE: ViewProfile = ViewProfile {
    theta:  0.42 * PI,
    phi:    0.5 * PI,
    zoom:   28.0,
    offset: Vec3::new(15.0, 0.0, 10.0),
};

impl ViewProfile {
    /// A mode without a profile does not compile.
    pub const fn for_mode(mode: ViewMode) -> Self {
        match mode {
            ViewMode::Center => CENTER_PROFILE,
            ViewMode::RightSide => RIGHT_SIDE_PROFILE,
        }
    }
}
