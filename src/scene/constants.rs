use bevy::math::Vec3;

/// Island model, parented under the scene group
pub const ISLAND_SCENE_PATH: &str = "models/island.glb#Scene0";

/// Marker position relative to the scene group
pub const MARKER_POSITION: Vec3 = Vec3::new(4.0, 1.0, 0.0);
pub const MARKER_RADIUS: f32 = 1.0;
/// Sectors and stacks of the marker's UV sphere
pub const MARKER_SEGMENTS: u32 = 16;

pub const MARKER_LABEL: &str = "Home Feed";
