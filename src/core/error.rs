//! Application-wide error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    /// Every required setting that had no value after loading, in schema order.
    #[error("missing required configuration fields: {}", .0.join(", "))]
    MissingSettings(Vec<String>),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("email error: {0}")]
    Email(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
