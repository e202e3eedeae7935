use bevy::prelude::*;

/// Smallest damping factor a rig will use. Zero would freeze the rig in place.
const MIN_DAMPING: f32 = 1e-4;

/// Extension trait for damped linear interpolation toward a target
pub trait DampExt {
    /// One smoothing step: `self + (target - self) * factor`
    #[must_use]
    fn damp_toward(self, target: Self, factor: f32) -> Self;
}

impl DampExt for f32 {
    #[inline]
    fn damp_toward(self, target: Self, factor: f32) -> Self {
        (target - self).mul_add(factor, self)
    }
}

impl DampExt for Vec2 {
    #[inline]
    fn damp_toward(self, target: Self, factor: f32) -> Self { self.lerp(target, factor) }
}

impl DampExt for Vec3 {
    #[inline]
    fn damp_toward(self, target: Self, factor: f32) -> Self { self.lerp(target, factor) }
}

/// Clamps a damping factor into `(0, 1]`. Non-finite factors fall back to 1 (snap).
pub fn sanitize_damping(factor: f32) -> f32 {
    if factor.is_finite() {
        factor.clamp(MIN_DAMPING, 1.0)
    } else {
        1.0
    }
}

/// Rescales a per-frame damping factor so the decay over `dt` seconds matches
/// `reference_fps` frames per second: `1 - (1 - k)^(dt * reference_fps)`
pub fn frame_rate_independent_damping(factor: f32, dt: f32, reference_fps: f32) -> f32 {
    let factor = sanitize_damping(factor);
    let frames = (dt * reference_fps).max(0.0);
    if !frames.is_finite() {
        return factor;
    }
    1.0 - (1.0 - factor).powf(frames)
}

/// Number of smoothing steps with factor `k` needed before the remaining
/// distance to the target falls below `epsilon` times the starting distance.
pub fn frames_to_converge(factor: f32, epsilon: f32) -> u32 {
    let factor = sanitize_damping(factor);
    if factor >= 1.0 || epsilon >= 1.0 {
        return 1;
    }
    let frames = epsilon.ln() / (1.0 - factor).ln();
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "frames is a small positive count"
    )]
    let frames = frames.ceil().max(1.0) as u32;
    frames
}

/// Spherical to cartesian with `theta` measured from +Y and `phi` around Y from +X
pub fn spherical_to_cartesian(radius: f32, theta: f32, phi: f32) -> Vec3 {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    Vec3::new(
        radius * sin_theta * cos_phi,
        radius * cos_theta,
        radius * sin_theta * sin_phi,
    )
}
