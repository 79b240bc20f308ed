use thiserror::Error;

/// Errors returned by the altitude mapping.
#[derive(Debug, Error, PartialEq)]
pub enum MapError {
    #[error("sky target unavailable: {0}")]
    TargetUnavailable(String),

    #[error("invalid altitude {0} (must be finite)")]
    InvalidAltitude(f32),

    #[error("invalid cloud baseline {0} (must be finite)")]
    InvalidBaseline(f32),
}
