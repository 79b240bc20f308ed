/// Clamp a value to [0, 1].
pub fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Linear interpolation from `a` to `b`. `t` is clamped to [0, 1].
/// Exact at both ends.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    let t = clamp01(t);
    a * (1.0 - t) + b * t
}

/// Normalized position of `value` between `a` and `b`, clamped to [0, 1].
/// Returns 0 when the bounds coincide.
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        return 0.0;
    }
    clamp01((value - a) / (b - a))
}

/// Atmosphere blend factor: 1 at and below the datum, decaying
/// exponentially toward 0 with altitude.
///
/// Large negative altitudes overflow `exp` to +inf, which the `min` clamps.
pub fn atmosphere_blend(altitude_m: f32, falloff_per_m: f32) -> f32 {
    1.0f32.min((-falloff_per_m * altitude_m).exp())
}

/// Cloud fade factor: 0 at and below `low_m`, 1 at and above `high_m`.
pub fn cloud_fade(altitude_m: f32, low_m: f32, high_m: f32) -> f32 {
    clamp01(inverse_lerp(low_m, high_m, altitude_m))
}
