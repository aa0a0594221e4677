use hifitime::Epoch;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("samples out of chronological order: {next} follows {previous}")]
    ChronologicalOrder { previous: Epoch, next: Epoch },
    #[error("invalid coordinates: lat={latitude} lon={longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
    #[error("invalid timestamp \"{0}\"")]
    InvalidTimestamp(String),
    #[error("invalid timeline configuration: {0}")]
    InvalidConfig(&'static str),
    #[cfg(feature = "serde")]
    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),
}
