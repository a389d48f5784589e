use thiserror::Error;

/// Rejected scene configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("scene config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}

/// Playback failure of an audio cue. Never leaves the collision audio reactor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CueError {
    #[error("audio cue is unavailable: {0}")]
    Unavailable(String),
    #[error("audio playback was rejected: {0}")]
    Rejected(String),
}
