use serde::{Deserialize, Serialize};

/// Sky parameters derived from altitude. Recomputed in full on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VisualParameters {
    /// Atmosphere scattering directionality (0.0–1.0).
    pub directionality: f32,
    /// Atmosphere brightness multiplier.
    pub brightness: f32,
    /// Cloud layer opacity (0.0–1.0).
    pub cloud_opacity: f32,
    /// Cloud coverage (0.0–1.0), never above the bound baseline.
    pub cloud_coverage: f32,
    /// Cloud edge sharpness.
    pub cloud_sharpness: f32,
}
