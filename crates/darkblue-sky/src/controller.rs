use darkblue_core::{MapError, VisualParameters};
use thiserror::Error;

use crate::binding::SkyBinding;
use crate::console::{Command, FIND_SKY_DOME};
use crate::inspect::describe_sky;
use crate::mapper::AltitudeVisualMapper;
use crate::target::SkyTarget;

#[derive(Debug, Error, PartialEq)]
pub enum ControllerError {
    #[error("no sky bound, run DarkBlueFindSkyDome first")]
    NoSky,
    #[error("no sky found")]
    SkyNotFound,
    #[error("automatic altitude can only be enabled inside a level")]
    NotInLevel,
    #[error(transparent)]
    Map(#[from] MapError),
}

/// Host game state, passed in by the caller each time it matters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameState {
    pub in_level: bool,
    pub in_designer: bool,
    pub paused: bool,
}

impl GameState {
    /// Flying a level, as opposed to menus or the aircraft designer.
    pub fn in_flight(&self) -> bool {
        self.in_level && !self.in_designer
    }
}

/// Per-tick input from the host update loop.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameContext {
    pub state: GameState,
    /// Current aircraft altitude in metres.
    pub altitude_m: f32,
}

/// Owns the sky binding and the automatic-altitude toggle.
#[derive(Debug)]
pub struct AltitudeController<T: SkyTarget> {
    mapper: AltitudeVisualMapper,
    binding: Option<SkyBinding<T>>,
    auto_altitude: bool,
}

impl<T: SkyTarget> AltitudeController<T> {
    pub fn new(mapper: AltitudeVisualMapper) -> Self {
        Self {
            mapper,
            binding: None,
            auto_altitude: false,
        }
    }

    /// Locate a sky through `locate` and bind it, replacing any previous
    /// binding. On failure the controller is left unbound.
    pub fn find_sky(&mut self, locate: impl FnOnce() -> Option<T>) -> Result<(), ControllerError> {
        self.binding = None;
        let Some(target) = locate() else {
            log::error!("No sky found");
            return Err(ControllerError::SkyNotFound);
        };

        log::info!("{}", describe_sky(&target));
        match SkyBinding::bind(target, self.mapper.clone()) {
            Ok(binding) => {
                self.binding = Some(binding);
                Ok(())
            }
            Err(e) => {
                log::error!("Cannot bind sky: {e}");
                Err(e.into())
            }
        }
    }

    /// Apply `altitude_m` to the bound sky.
    pub fn set_altitude(&mut self, altitude_m: f32) -> Result<VisualParameters, ControllerError> {
        let Some(binding) = self.binding.as_mut() else {
            log::error!("No sky bound! Run {FIND_SKY_DOME} first!");
            return Err(ControllerError::NoSky);
        };
        binding.set_altitude(altitude_m).map_err(|e| {
            log::error!("Altitude {altitude_m} not applied: {e}");
            e.into()
        })
    }

    /// Turn on automatic altitude. Refused outside a level.
    pub fn activate_auto_altitude(&mut self, state: &GameState) -> Result<(), ControllerError> {
        if state.in_flight() {
            self.auto_altitude = true;
            log::info!("Automatic altitude enabled");
            Ok(())
        } else {
            log::error!("Cannot activate automatic altitude outside of a level!");
            self.auto_altitude = false;
            Err(ControllerError::NotInLevel)
        }
    }

    /// Called once per host tick. Returns the applied parameters, or `None`
    /// when nothing was applied (automatic altitude off, paused, or the level
    /// was left, which also turns automatic altitude off).
    pub fn update(&mut self, frame: &FrameContext) -> Result<Option<VisualParameters>, ControllerError> {
        if !self.auto_altitude {
            return Ok(None);
        }
        if !frame.state.in_flight() {
            log::info!("Left the level, automatic altitude disabled");
            self.auto_altitude = false;
            return Ok(None);
        }
        if frame.state.paused {
            return Ok(None);
        }
        self.set_altitude(frame.altitude_m).map(Some)
    }

    /// Dispatch a console command.
    pub fn execute(
        &mut self,
        command: Command,
        state: &GameState,
        locate: impl FnOnce() -> Option<T>,
    ) -> Result<Option<VisualParameters>, ControllerError> {
        match command {
            Command::FindSkyDome => self.find_sky(locate).map(|_| None),
            Command::SetAltitude(altitude_m) => self.set_altitude(altitude_m).map(Some),
            Command::AutoAltitude => self.activate_auto_altitude(state).map(|_| None),
        }
    }

    pub fn is_auto_altitude(&self) -> bool {
        self.auto_altitude
    }

    pub fn binding(&self) -> Option<&SkyBinding<T>> {
        self.binding.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::SkyDome;

    const FLYING: GameState = GameState {
        in_level: true,
        in_designer: false,
        paused: false,
    };

    fn bound_controller() -> AltitudeController<SkyDome> {
        let mut controller = AltitudeController::new(AltitudeVisualMapper::default());
        controller
            .find_sky(|| Some(SkyDome::default().with_cloud_coverage(0.5)))
            .expect("sky found");
        controller
    }

    fn dome(controller: &AltitudeController<SkyDome>) -> &SkyDome {
        controller.binding().expect("bound").target()
    }

    #[test]
    fn test_set_altitude_requires_sky() {
        let mut controller = AltitudeController::<SkyDome>::new(AltitudeVisualMapper::default());
        assert_eq!(controller.set_altitude(1000.0), Err(ControllerError::NoSky));
    }

    #[test]
    fn test_find_sky_not_found_clears_binding() {
        let mut controller = bound_controller();
        assert_eq!(controller.find_sky(|| None), Err(ControllerError::SkyNotFound));
        assert!(controller.binding().is_none());
    }

    #[test]
    fn test_find_sky_incomplete_target() {
        let mut controller = AltitudeController::new(AltitudeVisualMapper::default());
        let result = controller.find_sky(|| {
            Some(SkyDome {
                atmosphere: None,
                ..SkyDome::default()
            })
        });
        assert!(matches!(
            result,
            Err(ControllerError::Map(MapError::TargetUnavailable(_)))
        ));
        assert!(controller.binding().is_none());
    }

    #[test]
    fn test_manual_set_altitude() {
        let mut controller = bound_controller();
        let params = controller.set_altitude(11000.0).expect("applied");
        assert_eq!(params.cloud_opacity, 1.0);
        assert_eq!(dome(&controller).clouds.map(|c| c.sharpness), Some(0.5));
    }

    #[test]
    fn test_invalid_altitude_reported() {
        let mut controller = bound_controller();
        assert!(matches!(
            controller.set_altitude(f32::NAN),
            Err(ControllerError::Map(MapError::InvalidAltitude(_)))
        ));
    }

    #[test]
    fn test_auto_altitude_refused_outside_level() {
        let mut controller = bound_controller();
        let menu = GameState::default();
        assert_eq!(
            controller.activate_auto_altitude(&menu),
            Err(ControllerError::NotInLevel)
        );
        let designer = GameState {
            in_designer: true,
            ..FLYING
        };
        assert!(controller.activate_auto_altitude(&designer).is_err());
        assert!(!controller.is_auto_altitude());
    }

    #[test]
    fn test_update_without_auto_does_nothing() {
        let mut controller = bound_controller();
        let frame = FrameContext {
            state: FLYING,
            altitude_m: 9000.0,
        };
        assert_eq!(controller.update(&frame), Ok(None));
        assert_eq!(dome(&controller).clouds.map(|c| c.opacity), Some(0.8));
    }

    #[test]
    fn test_update_follows_altitude() {
        let mut controller = bound_controller();
        controller.activate_auto_altitude(&FLYING).expect("in level");

        let frame = FrameContext {
            state: FLYING,
            altitude_m: 0.0,
        };
        let params = controller.update(&frame).expect("applied").expect("not paused");
        assert_eq!(params.brightness, 1.0);
        assert_eq!(dome(&controller).atmosphere.map(|a| a.brightness), Some(1.0));
    }

    #[test]
    fn test_update_skips_while_paused() {
        let mut controller = bound_controller();
        controller.activate_auto_altitude(&FLYING).expect("in level");

        let frame = FrameContext {
            state: GameState {
                paused: true,
                ..FLYING
            },
            altitude_m: 0.0,
        };
        assert_eq!(controller.update(&frame), Ok(None));
        assert!(controller.is_auto_altitude());
    }

    #[test]
    fn test_leaving_level_disables_auto() {
        let mut controller = bound_controller();
        controller.activate_auto_altitude(&FLYING).expect("in level");

        let frame = FrameContext {
            state: GameState::default(),
            altitude_m: 5000.0,
        };
        assert_eq!(controller.update(&frame), Ok(None));
        assert!(!controller.is_auto_altitude());
    }

    #[test]
    fn test_execute_console_script() {
        let mut controller = AltitudeController::new(AltitudeVisualMapper::default());
        let lines = [
            "DarkBlueFindSkyDome",
            "DarkBlueSetAltitude 7500",
            "DarkBlueAutoAltitude",
        ];
        let mut last = None;
        for line in lines {
            let command = Command::parse(line).expect("valid command");
            last = controller
                .execute(command, &FLYING, || Some(SkyDome::default()))
                .expect("command succeeds")
                .or(last);
        }
        let params = last.expect("altitude applied");
        assert!((params.cloud_sharpness - 0.25).abs() < 1e-4);
        assert!(controller.is_auto_altitude());
    }
}
