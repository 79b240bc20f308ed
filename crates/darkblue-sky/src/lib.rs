pub mod binding;
pub mod console;
pub mod controller;
pub mod inspect;
pub mod mapper;
pub mod profile;
pub mod target;

pub use binding::SkyBinding;
pub use console::{Command, ConsoleError};
pub use controller::{AltitudeController, ControllerError, FrameContext, GameState};
pub use mapper::{compute_visual_parameters, AltitudeVisualMapper};
pub use profile::{CurveProfile, ProfileError};
pub use target::{AtmosphereParameters, CloudParameters, SkyDome, SkyTarget};
