use darkblue_core::{MapError, VisualParameters};

use crate::mapper::AltitudeVisualMapper;
use crate::target::SkyTarget;

/// A sky target bound to a mapper, with the cloud coverage captured at bind
/// time as the upper bound for computed coverage.
#[derive(Debug)]
pub struct SkyBinding<T: SkyTarget> {
    target: T,
    mapper: AltitudeVisualMapper,
    cloud_baseline: f32,
}

impl<T: SkyTarget> SkyBinding<T> {
    /// Bind `target`. Fails if either parameter group is missing or the
    /// current coverage is not a finite number.
    pub fn bind(target: T, mapper: AltitudeVisualMapper) -> Result<Self, MapError> {
        check_available(&target)?;
        let cloud_baseline = target.clouds().map_or(0.0, |c| c.coverage);
        if !cloud_baseline.is_finite() {
            return Err(MapError::InvalidBaseline(cloud_baseline));
        }

        log::info!(
            "Bound sky '{}' (profile '{}', cloud baseline {:.3})",
            target.name(),
            mapper.profile().name,
            cloud_baseline
        );

        Ok(Self {
            target,
            mapper,
            cloud_baseline,
        })
    }

    /// Compute the parameters for `altitude_m` and write them to the target.
    /// Nothing is written if the computation fails or a group has gone missing.
    pub fn set_altitude(&mut self, altitude_m: f32) -> Result<VisualParameters, MapError> {
        let params = self.mapper.compute(altitude_m, self.cloud_baseline)?;
        check_available(&self.target)?;

        if let Some(atmosphere) = self.target.atmosphere_mut() {
            atmosphere.directionality = params.directionality;
            atmosphere.brightness = params.brightness;
        }
        let shape_control = self.mapper.profile().shape_control;
        if let Some(clouds) = self.target.clouds_mut() {
            clouds.opacity = params.cloud_opacity;
            if shape_control {
                clouds.coverage = params.cloud_coverage;
                clouds.sharpness = params.cloud_sharpness;
            }
        }

        log::debug!("altitude {altitude_m:.1} m -> {params:?}");
        Ok(params)
    }

    pub fn cloud_baseline(&self) -> f32 {
        self.cloud_baseline
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Mutable access for the host; the captured baseline is unaffected.
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }
}

fn check_available<T: SkyTarget>(target: &T) -> Result<(), MapError> {
    if target.atmosphere().is_none() {
        return Err(MapError::TargetUnavailable(format!(
            "'{}' has no atmosphere parameters",
            target.name()
        )));
    }
    if target.clouds().is_none() {
        return Err(MapError::TargetUnavailable(format!(
            "'{}' has no cloud parameters",
            target.name()
        )));
    }
    Ok(())
}
