use thiserror::Error;

pub type Result<T, E = TelemetryError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid sample interval: {0} (must be finite and greater than zero)")]
    InvalidInterval(f64),

    #[error("Invalid time range: start = {start}, end = {end}")]
    InvalidRange { start: f64, end: f64 },

    #[error("Configuration error: {0}")]
    Configuration(String),
}
