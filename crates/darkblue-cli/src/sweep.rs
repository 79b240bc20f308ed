use darkblue_core::{MapError, VisualParameters};
use darkblue_sky::AltitudeVisualMapper;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on the number of altitudes a single sweep may sample.
pub const MAX_SWEEP_SAMPLES: usize = 100_000;

#[derive(Debug, Error, PartialEq)]
pub enum SweepError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },
    #[error("sweep would sample {0} altitudes (limit {limit})", limit = MAX_SWEEP_SAMPLES)]
    TooManySamples(u64),
    #[error(transparent)]
    Map(#[from] MapError),
}

/// Altitude range to sample, inclusive of both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    pub from_m: f32,
    pub to_m: f32,
    pub step_m: f32,
    pub cloud_baseline: f32,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            from_m: 0.0,
            to_m: 15000.0,
            step_m: 1000.0,
            cloud_baseline: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRow {
    pub altitude_m: f32,
    pub params: VisualParameters,
}

impl SweepConfig {
    /// Sample altitudes from `from_m` to `to_m`. The last sample is always `to_m`.
    /// A non-positive step yields only the endpoints.
    pub fn altitudes(&self) -> Result<Vec<f32>, SweepError> {
        for (field, value) in [
            ("from_m", self.from_m),
            ("to_m", self.to_m),
            ("step_m", self.step_m),
        ] {
            if !value.is_finite() {
                return Err(SweepError::NonFinite { field, value });
            }
        }

        let mut out = vec![self.from_m];
        if self.to_m <= self.from_m {
            return Ok(out);
        }
        if self.step_m > 0.0 {
            let steps = ((self.to_m as f64 - self.from_m as f64) / self.step_m as f64).ceil();
            if steps + 1.0 > MAX_SWEEP_SAMPLES as f64 {
                return Err(SweepError::TooManySamples(steps as u64 + 1));
            }
            for i in 1..steps as u32 {
                let alt = self.from_m + self.step_m * i as f32;
                if alt >= self.to_m {
                    break;
                }
                out.push(alt);
            }
        }
        out.push(self.to_m);
        Ok(out)
    }
}

/// Run every sampled altitude through `mapper`.
pub fn run_sweep(
    mapper: &AltitudeVisualMapper,
    config: &SweepConfig,
) -> Result<Vec<SweepRow>, SweepError> {
    config
        .altitudes()?
        .into_iter()
        .map(|altitude_m| {
            mapper
                .compute(altitude_m, config.cloud_baseline)
                .map(|params| SweepRow { altitude_m, params })
                .map_err(SweepError::from)
        })
        .collect()
}
