use darkblue_core::math::{atmosphere_blend, clamp01, cloud_fade, lerp};
use darkblue_core::{MapError, VisualParameters};

use crate::profile::CurveProfile;

/// Stateless altitude → sky parameter transform for one curve profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AltitudeVisualMapper {
    profile: CurveProfile,
}

impl AltitudeVisualMapper {
    pub fn new(profile: CurveProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &CurveProfile {
        &self.profile
    }

    /// Compute the sky parameters for `altitude_m`, bounding coverage by
    /// `cloud_baseline`.
    ///
    /// With a profile that has no shape control, coverage is reported as the
    /// baseline and sharpness as 0; bindings leave those fields untouched.
    pub fn compute(
        &self,
        altitude_m: f32,
        cloud_baseline: f32,
    ) -> Result<VisualParameters, MapError> {
        if !altitude_m.is_finite() {
            return Err(MapError::InvalidAltitude(altitude_m));
        }
        if !cloud_baseline.is_finite() {
            return Err(MapError::InvalidBaseline(cloud_baseline));
        }

        let p = &self.profile;
        let blend = atmosphere_blend(altitude_m, p.falloff_per_m);
        let fade = cloud_fade(altitude_m, p.cloud_fade_low_m, p.cloud_fade_high_m);

        let (cloud_coverage, cloud_sharpness) = if p.shape_control {
            ((fade * fade).min(cloud_baseline), p.sharpness_scale * fade)
        } else {
            (cloud_baseline, 0.0)
        };

        Ok(VisualParameters {
            directionality: lerp(p.directionality.0, p.directionality.1, blend),
            brightness: lerp(p.brightness.0, p.brightness.1, blend),
            cloud_opacity: clamp01(p.opacity_gain * fade),
            cloud_coverage,
            cloud_sharpness,
        })
    }
}

/// Canonical mapping for one altitude sample.
pub fn compute_visual_parameters(
    altitude_m: f32,
    cloud_baseline: f32,
) -> Result<VisualParameters, MapError> {
    AltitudeVisualMapper::default().compute(altitude_m, cloud_baseline)
}
