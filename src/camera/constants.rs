/// Smallest zoom the rig will divide by when computing parallax and projection scale
pub const MIN_ZOOM: f32 = 0.01;
