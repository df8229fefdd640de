use thiserror::Error;

/// Errors emitted while reading or validating layout configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Filesystem operation failed.
    #[error("layout config IO failed: {0}")]
    Io(#[from] std::io::Error),
    /// JSON deserialization failed.
    #[error("layout config JSON failed: {0}")]
    Json(#[from] serde_json::Error),
    /// A field value did not pass validation.
    #[error("validation error: {message}")]
    Validation { message: String },
}
