//! Replays a console script against an in-memory sky.
//!
//! Each non-empty line is either a console command or `tick <altitude>`,
//! which runs one host update at that aircraft altitude. `#` starts a comment.

use darkblue_core::VisualParameters;
use darkblue_sky::{
    AltitudeController, AltitudeVisualMapper, Command, ConsoleError, ControllerError,
    FrameContext, GameState, SkyDome,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("line {line}: {source}")]
    Console { line: usize, source: ConsoleError },
    #[error("line {line}: {source}")]
    Controller {
        line: usize,
        source: ControllerError,
    },
    #[error("line {line}: invalid tick '{text}'")]
    InvalidTick { line: usize, text: String },
}

/// Parameters applied by one script line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliedStep {
    pub line: usize,
    pub altitude_m: f32,
    pub params: VisualParameters,
}

#[derive(Debug)]
pub struct ReplayOutcome {
    pub steps: Vec<AppliedStep>,
    /// The sky after the last line, if one was bound.
    pub sky: Option<SkyDome>,
    pub auto_altitude: bool,
}

/// Run `script` with `sky` as the only sky `DarkBlueFindSkyDome` can find.
/// Stops at the first failing line.
pub fn replay_script(
    script: &str,
    mapper: AltitudeVisualMapper,
    sky: SkyDome,
    state: GameState,
) -> Result<ReplayOutcome, ReplayError> {
    let mut controller = AltitudeController::new(mapper);
    let mut steps = Vec::new();

    for (index, raw) in script.lines().enumerate() {
        let line = index + 1;
        let text = raw.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }

        let (altitude_m, applied) = if let Some(arg) = text.strip_prefix("tick") {
            let altitude_m: f32 = arg.trim().parse().map_err(|_| ReplayError::InvalidTick {
                line,
                text: text.to_string(),
            })?;
            let frame = FrameContext { state, altitude_m };
            let applied = controller
                .update(&frame)
                .map_err(|source| ReplayError::Controller { line, source })?;
            (altitude_m, applied)
        } else {
            let command =
                Command::parse(text).map_err(|source| ReplayError::Console { line, source })?;
            let altitude_m = match command {
                Command::SetAltitude(a) => a,
                _ => 0.0,
            };
            let applied = controller
                .execute(command, &state, || Some(sky.clone()))
                .map_err(|source| ReplayError::Controller { line, source })?;
            (altitude_m, applied)
        };

        if let Some(params) = applied {
            steps.push(AppliedStep {
                line,
                altitude_m,
                params,
            });
        }
    }

    let auto_altitude = controller.is_auto_altitude();
    let sky = controller.binding().map(|b| b.target().clone());
    Ok(ReplayOutcome {
        steps,
        sky,
        auto_altitude,
    })
}
