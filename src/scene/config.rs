use bevy::prelude::*;
use bevy_inspector_egui::inspector_options::std_options::NumberDisplay;
use bevy_inspector_egui::prelude::*;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;

use crate::global_input::GlobalAction;
use crate::global_input::toggle_active;

pub struct SceneConfigPlugin;

impl Plugin for SceneConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(
            ResourceInspectorPlugin::<SceneConfig>::default()
                .run_if(toggle_active(false, GlobalAction::SceneInspector)),
        )
        .init_resource::<SceneConfig>();
    }
}

#[derive(Resource, Reflect, InspectorOptions, Debug, PartialEq, Clone, Copy)]
#[reflect(Resource, InspectorOptions)]
pub struct SceneConfig {
    pub clear_color:        Color,
    pub fog_color:          Color,
    #[inspector(min = 0.0, max = 200.0, display = NumberDisplay::Slider)]
    pub fog_start:          f32,
    #[inspector(min = 0.0, max = 200.0, display = NumberDisplay::Slider)]
    pub fog_end:            f32,
    #[inspector(min = 0.0, max = 5_000.0, display = NumberDisplay::Slider)]
    pub ambient_brightness: f32,
    pub marker_color:       Color,
    /// Edge color of the outline drawn around the hovered marker
    pub outline_color:      Color,
    /// Emissive multiplier on `outline_color`
    #[inspector(min = 0.0, max = 20.0, display = NumberDisplay::Slider)]
    pub outline_strength:   f32,
    /// Thickness of the outline shell in world units
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub outline_width:      f32,
    /// Seconds for the hover label to fade fully in or out
    #[inspector(min = 0.01, max = 2.0, display = NumberDisplay::Slider)]
    pub label_fade_secs:    f32,
    /// Height of the hover label above the marker center
    #[inspector(min = 0.0, max = 10.0, display = NumberDisplay::Slider)]
    pub label_height:       f32,
    #[inspector(min = 4.0, max = 64.0, display = NumberDisplay::Slider)]
    pub label_font_size:    f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            clear_color:        Color::srgb_u8(0xd0, 0xd0, 0xd0),
            fog_color:          Color::srgb_u8(0xd0, 0xd0, 0xd0),
            fog_start:          10.0,
            fog_end:            60.0,
            ambient_brightness: 750.0,
            marker_color:       Color::srgb_u8(0xff, 0xa5, 0x00),
            outline_color:      Color::srgb_u8(0xcd, 0xf0, 0xe4),
            outline_strength:   3.0,
            outline_width:      0.08,
            label_fade_secs:    0.2,
            label_height:       1.5,
            label_font_size:    18.0,
        }
    }
}

impl SceneConfig {
    pub fn distance_fog(&self) -> DistanceFog {
        DistanceFog {
            color: self.fog_color,
            falloff: FogFalloff::Linear {
                start: self.fog_start,
                end:   self.fog_end,
            },
            ..default()
        }
    }

    pub fn outline_emissive(&self) -> LinearRgba {
        LinearRgba::from(self.outline_color) * self.outline_strength
    }
}
