use thiserror::Error;

#[derive(Error, Debug)]
pub enum PollerError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Response schema mismatch: {0}")]
    SchemaError(#[from] serde_json::Error),

    #[error("Monitor failed for performer {performer_id} at venue {venue_id}: {message}")]
    MonitorError {
        performer_id: String,
        venue_id: String,
        message: String,
    },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, PollerError>;
