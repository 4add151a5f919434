use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Missing access token: {0}")]
    #[diagnostic(
        code(meeting_rooms::missing_token),
        help("Set the GOOGLE_ACCESS_TOKEN environment variable (or add it to .env)")
    )]
    MissingToken(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(meeting_rooms::config))]
    Config(String),

    #[error("Error creating request: {0}")]
    #[diagnostic(code(meeting_rooms::request))]
    Request(String),

    #[error("Error making request: {0}")]
    #[diagnostic(code(meeting_rooms::transport))]
    Transport(#[source] reqwest::Error),

    #[error("Error reading response: {0}")]
    #[diagnostic(code(meeting_rooms::body_read))]
    BodyRead(#[source] reqwest::Error),

    #[error("Calendar API returned HTTP {status}: {body}")]
    #[diagnostic(code(meeting_rooms::http_status))]
    HttpStatus { status: u16, body: String },

    #[error("Error parsing JSON: {0}")]
    #[diagnostic(code(meeting_rooms::decode))]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    #[diagnostic(code(meeting_rooms::io))]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with our Error type
pub type RoomsResult<T> = Result<T, Error>;

/// Helper to create missing-token errors
pub fn env_error(var: &str) -> Error {
    Error::MissingToken(format!("{} is not set or empty", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create request construction errors
pub fn request_error(message: &str) -> Error {
    Error::Request(message.to_string())
}
