//! Sky objects the altitude mapping writes to.
//! A host exposes its sky through [`SkyTarget`]; either parameter group may be
//! missing (not loaded yet, or stripped from the scene).

use serde::{Deserialize, Serialize};

/// Atmosphere scattering parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphereParameters {
    pub directionality: f32,
    pub brightness: f32,
    pub fogginess: f32,
}

impl Default for AtmosphereParameters {
    fn default() -> Self {
        Self {
            directionality: 0.7,
            brightness: 1.5,
            fogginess: 0.0,
        }
    }
}

/// Cloud layer parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CloudParameters {
    pub opacity: f32,
    pub coverage: f32,
    pub sharpness: f32,
    pub brightness: f32,
}

impl Default for CloudParameters {
    fn default() -> Self {
        Self {
            opacity: 0.8,
            coverage: 0.5,
            sharpness: 0.5,
            brightness: 1.5,
        }
    }
}

pub trait SkyTarget {
    fn name(&self) -> &str;
    fn atmosphere(&self) -> Option<&AtmosphereParameters>;
    fn atmosphere_mut(&mut self) -> Option<&mut AtmosphereParameters>;
    fn clouds(&self) -> Option<&CloudParameters>;
    fn clouds_mut(&mut self) -> Option<&mut CloudParameters>;
}

/// Plain in-memory sky.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkyDome {
    pub name: String,
    pub atmosphere: Option<AtmosphereParameters>,
    pub clouds: Option<CloudParameters>,
}

impl Default for SkyDome {
    fn default() -> Self {
        Self::new("SkyDome")
    }
}

impl SkyDome {
    /// A dome with both parameter groups at their defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            atmosphere: Some(AtmosphereParameters::default()),
            clouds: Some(CloudParameters::default()),
        }
    }

    pub fn with_cloud_coverage(mut self, coverage: f32) -> Self {
        if let Some(clouds) = &mut self.clouds {
            clouds.coverage = coverage;
        }
        self
    }
}

impl SkyTarget for SkyDome {
    fn name(&self) -> &str {
        &self.name
    }

    fn atmosphere(&self) -> Option<&AtmosphereParameters> {
        self.atmosphere.as_ref()
    }

    fn atmosphere_mut(&mut self) -> Option<&mut AtmosphereParameters> {
        self.atmosphere.as_mut()
    }

    fn clouds(&self) -> Option<&CloudParameters> {
        self.clouds.as_ref()
    }

    fn clouds_mut(&mut self) -> Option<&mut CloudParameters> {
        self.clouds.as_mut()
    }
}
