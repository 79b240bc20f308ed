use std::path::Path;

use darkblue_core::constants::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RON source of the built-in profiles.
pub const CANONICAL_RON: &str = include_str!("../../../data/profiles/canonical.ron");
pub const LEGACY_RON: &str = include_str!("../../../data/profiles/legacy.ron");

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Failed to parse profile RON: {0}")]
    ParseError(String),
    #[error("Failed to read profile {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid profile '{name}': {reason}")]
    Invalid { name: String, reason: String },
    #[error("Unknown built-in profile '{0}'")]
    UnknownProfile(String),
}

/// Curve constants for one tuning of the altitude mapping.
///
/// Ranges are `(high_altitude, sea_level)`: the atmosphere blend factor is 1
/// at sea level and decays toward 0 with altitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveProfile {
    pub name: String,
    /// Exponential falloff of the atmosphere blend, per metre.
    pub falloff_per_m: f32,
    /// Cloud fade is 0 at and below this altitude.
    pub cloud_fade_low_m: f32,
    /// Cloud fade is 1 at and above this altitude.
    pub cloud_fade_high_m: f32,
    pub directionality: (f32, f32),
    pub brightness: (f32, f32),
    /// Multiplier on the cloud fade before opacity is clamped to [0, 1].
    pub opacity_gain: f32,
    #[serde(default)]
    pub sharpness_scale: f32,
    /// Whether cloud coverage and sharpness are driven at all.
    #[serde(default)]
    pub shape_control: bool,
}

impl Default for CurveProfile {
    fn default() -> Self {
        Self::canonical()
    }
}

impl CurveProfile {
    /// Current tuning.
    pub fn canonical() -> Self {
        Self {
            name: "canonical".into(),
            falloff_per_m: ALTITUDE_FALLOFF_PER_M,
            cloud_fade_low_m: CLOUD_FADE_LOW_M,
            cloud_fade_high_m: CLOUD_FADE_HIGH_M,
            directionality: (DIRECTIONALITY_HIGH_ALT, DIRECTIONALITY_SEA_LEVEL),
            brightness: (BRIGHTNESS_HIGH_ALT, BRIGHTNESS_SEA_LEVEL),
            opacity_gain: CLOUD_OPACITY_GAIN,
            sharpness_scale: CLOUD_SHARPNESS_SCALE,
            shape_control: true,
        }
    }

    /// Earlier revision without coverage/sharpness control.
    ///
    /// Its cloud fade rises with altitude like the canonical profile; the
    /// revision it comes from faded from 11000 m down to 4000 m instead, which
    /// `validate` does not accept.
    pub fn legacy() -> Self {
        Self {
            name: "legacy".into(),
            brightness: (LEGACY_BRIGHTNESS_HIGH_ALT, LEGACY_BRIGHTNESS_SEA_LEVEL),
            opacity_gain: LEGACY_CLOUD_OPACITY_GAIN,
            sharpness_scale: 0.0,
            shape_control: false,
            ..Self::canonical()
        }
    }

    /// Look up a built-in profile by name.
    pub fn builtin(name: &str) -> Result<Self, ProfileError> {
        match name {
            "canonical" => Ok(Self::canonical()),
            "legacy" => Ok(Self::legacy()),
            other => Err(ProfileError::UnknownProfile(other.to_string())),
        }
    }

    /// Reject profiles the mapping cannot evaluate sensibly. The cloud fade
    /// bounds must be ascending.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let values = [
            self.falloff_per_m,
            self.cloud_fade_low_m,
            self.cloud_fade_high_m,
            self.directionality.0,
            self.directionality.1,
            self.brightness.0,
            self.brightness.1,
            self.opacity_gain,
            self.sharpness_scale,
        ];
        let invalid = |reason: &str| ProfileError::Invalid {
            name: self.name.clone(),
            reason: reason.to_string(),
        };
        if values.iter().any(|v| !v.is_finite()) {
            return Err(invalid("all curve constants must be finite"));
        }
        if self.falloff_per_m < 0.0 {
            return Err(invalid("falloff_per_m must not be negative"));
        }
        if self.cloud_fade_low_m >= self.cloud_fade_high_m {
            return Err(invalid("cloud_fade_low_m must be below cloud_fade_high_m"));
        }
        Ok(())
    }
}

/// Parse and validate a profile from a RON string.
pub fn load_profile_from_str(ron_str: &str) -> Result<CurveProfile, ProfileError> {
    let options = ron::Options::default();
    let profile: CurveProfile = options
        .from_str(ron_str)
        .map_err(|e| ProfileError::ParseError(e.to_string()))?;
    profile.validate()?;
    Ok(profile)
}

/// Read a profile from a RON file on disk.
pub fn load_profile_file(path: &Path) -> Result<CurveProfile, ProfileError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let profile = load_profile_from_str(&contents)?;
    log::info!("Loaded curve profile '{}' from {}", profile.name, path.display());
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ron_matches_constants() {
        assert_eq!(
            load_profile_from_str(CANONICAL_RON).expect("canonical parses"),
            CurveProfile::canonical()
        );
        assert_eq!(
            load_profile_from_str(LEGACY_RON).expect("legacy parses"),
            CurveProfile::legacy()
        );
    }

    #[test]
    fn test_builtin_lookup() {
        assert_eq!(CurveProfile::builtin("legacy").expect("exists").name, "legacy");
        assert!(matches!(
            CurveProfile::builtin("sunset"),
            Err(ProfileError::UnknownProfile(_))
        ));
    }

    #[test]
    fn test_default_is_canonical() {
        assert_eq!(CurveProfile::default(), CurveProfile::canonical());
        assert!(CurveProfile::canonical().shape_control);
        assert!(!CurveProfile::legacy().shape_control);
    }

    #[test]
    fn test_optional_fields_default() {
        let ron_str = r#"(
            name: "minimal",
            falloff_per_m: 0.0001,
            cloud_fade_low_m: 1000.0,
            cloud_fade_high_m: 2000.0,
            directionality: (0.1, 0.9),
            brightness: (0.2, 1.2),
            opacity_gain: 2.0,
        )"#;
        let profile = load_profile_from_str(ron_str).expect("valid profile");
        assert_eq!(profile.sharpness_scale, 0.0);
        assert!(!profile.shape_control);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            load_profile_from_str("(name: \"broken\""),
            Err(ProfileError::ParseError(_))
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_fade() {
        let profile = CurveProfile {
            cloud_fade_low_m: 11000.0,
            cloud_fade_high_m: 4000.0,
            ..CurveProfile::canonical()
        };
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::Invalid { .. })
        ));
    }

    #[test]
    fn test_legacy_fade_rises_with_altitude() {
        let legacy = CurveProfile::legacy();
        assert!(legacy.validate().is_ok());
        assert!(legacy.cloud_fade_low_m < legacy.cloud_fade_high_m);
        assert_eq!(legacy.cloud_fade_low_m, CurveProfile::canonical().cloud_fade_low_m);
        assert_eq!(legacy.cloud_fade_high_m, CurveProfile::canonical().cloud_fade_high_m);
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let profile = CurveProfile {
            opacity_gain: f32::NAN,
            ..CurveProfile::canonical()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = load_profile_file(Path::new("/nonexistent/profile.ron"))
            .expect_err("file does not exist");
        assert!(matches!(err, ProfileError::Io { .. }));
    }
}
