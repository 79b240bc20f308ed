//! Developer console commands.
//! The host console delivers raw lines; they are parsed here and dispatched
//! through [`AltitudeController::execute`](crate::controller::AltitudeController::execute).

use std::fmt;

use thiserror::Error;

pub const FIND_SKY_DOME: &str = "DarkBlueFindSkyDome";
pub const SET_ALTITUDE: &str = "DarkBlueSetAltitude";
pub const AUTO_ALTITUDE: &str = "DarkBlueAutoAltitude";

/// Every command name, for registration with a host console.
pub const COMMAND_NAMES: [&str; 3] = [FIND_SKY_DOME, SET_ALTITUDE, AUTO_ALTITUDE];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Locate the sky, bind it and log its parameters.
    FindSkyDome,
    /// Apply one altitude (metres) by hand.
    SetAltitude(f32),
    /// Follow the aircraft altitude every tick.
    AutoAltitude,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConsoleError {
    #[error("empty command line")]
    Empty,
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("{0} expects an argument")]
    MissingArgument(&'static str),
    #[error("{command}: invalid argument '{value}'")]
    InvalidArgument {
        command: &'static str,
        value: String,
    },
    #[error("{command}: unexpected argument '{value}'")]
    UnexpectedArgument {
        command: &'static str,
        value: String,
    },
}

impl Command {
    /// Parse a console line such as `DarkBlueSetAltitude 8500`.
    pub fn parse(line: &str) -> Result<Self, ConsoleError> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(ConsoleError::Empty)?;

        let command = match name {
            FIND_SKY_DOME => Command::FindSkyDome,
            AUTO_ALTITUDE => Command::AutoAltitude,
            SET_ALTITUDE => {
                let arg = words.next().ok_or(ConsoleError::MissingArgument(SET_ALTITUDE))?;
                let altitude = arg.parse().map_err(|_| ConsoleError::InvalidArgument {
                    command: SET_ALTITUDE,
                    value: arg.to_string(),
                })?;
                Command::SetAltitude(altitude)
            }
            other => return Err(ConsoleError::UnknownCommand(other.to_string())),
        };

        if let Some(extra) = words.next() {
            return Err(ConsoleError::UnexpectedArgument {
                command: command.name(),
                value: extra.to_string(),
            });
        }
        Ok(command)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::FindSkyDome => FIND_SKY_DOME,
            Command::SetAltitude(_) => SET_ALTITUDE,
            Command::AutoAltitude => AUTO_ALTITUDE,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::SetAltitude(altitude) => write!(f, "{} {}", self.name(), altitude),
            _ => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("DarkBlueFindSkyDome"), Ok(Command::FindSkyDome));
        assert_eq!(Command::parse("  DarkBlueAutoAltitude "), Ok(Command::AutoAltitude));
        assert_eq!(
            Command::parse("DarkBlueSetAltitude 8500.5"),
            Ok(Command::SetAltitude(8500.5))
        );
        assert_eq!(
            Command::parse("DarkBlueSetAltitude -120"),
            Ok(Command::SetAltitude(-120.0))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Command::parse("   "), Err(ConsoleError::Empty));
        assert_eq!(
            Command::parse("darkbluefindskydome"),
            Err(ConsoleError::UnknownCommand("darkbluefindskydome".into()))
        );
        assert_eq!(
            Command::parse("DarkBlueSetAltitude"),
            Err(ConsoleError::MissingArgument(SET_ALTITUDE))
        );
        assert!(matches!(
            Command::parse("DarkBlueSetAltitude high"),
            Err(ConsoleError::InvalidArgument { .. })
        ));
        assert!(matches!(
            Command::parse("DarkBlueAutoAltitude now"),
            Err(ConsoleError::UnexpectedArgument { .. })
        ));
    }

    #[test]
    fn test_display_round_trips() {
        for command in [
            Command::FindSkyDome,
            Command::AutoAltitude,
            Command::SetAltitude(4000.0),
        ] {
            assert_eq!(Command::parse(&command.to_string()), Ok(command));
        }
    }

    #[test]
    fn test_command_names_registered() {
        for name in COMMAND_NAMES {
            assert!(
                !matches!(Command::parse(name), Err(ConsoleError::UnknownCommand(_))),
                "{name} not recognised"
            );
        }
        assert_eq!(Command::AutoAltitude.name(), AUTO_ALTITUDE);
    }
}
