//! Curve constants for the altitude mapping.
//! The canonical set is the current tuning; the `LEGACY_*` values belong to
//! the earlier revision that had no cloud coverage/sharpness control.

/// Exponential falloff rate of the atmosphere blend, per metre.
pub const ALTITUDE_FALLOFF_PER_M: f32 = 0.00007;

/// Altitude at and below which the cloud fade factor is 0.
pub const CLOUD_FADE_LOW_M: f32 = 4000.0;

/// Altitude at and above which the cloud fade factor is 1.
pub const CLOUD_FADE_HIGH_M: f32 = 11000.0;

/// Directionality at high altitude (blend factor 0).
pub const DIRECTIONALITY_HIGH_ALT: f32 = 0.2;

/// Directionality at sea level (blend factor 1).
pub const DIRECTIONALITY_SEA_LEVEL: f32 = 0.7;

/// Sky brightness at high altitude.
pub const BRIGHTNESS_HIGH_ALT: f32 = 0.05;

/// Sky brightness at sea level.
pub const BRIGHTNESS_SEA_LEVEL: f32 = 1.0;

/// Multiplier on the cloud fade factor before opacity is clamped.
pub const CLOUD_OPACITY_GAIN: f32 = 3.0;

/// Cloud sharpness at full fade.
pub const CLOUD_SHARPNESS_SCALE: f32 = 0.5;

/// Sky brightness at high altitude, earlier revision.
pub const LEGACY_BRIGHTNESS_HIGH_ALT: f32 = 0.1;

/// Sky brightness at sea level, earlier revision.
pub const LEGACY_BRIGHTNESS_SEA_LEVEL: f32 = 1.5;

/// Opacity gain of the earlier revision (opacity tracks the fade directly).
pub const LEGACY_CLOUD_OPACITY_GAIN: f32 = 1.0;
