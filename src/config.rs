use crate::error::{config_error, env_error, RoomsResult};
use dotenvy::dotenv;
use std::env;
use url::Url;

/// Calendar list endpoint for the authenticated user
pub const DEFAULT_CALENDAR_LIST_URL: &str =
    "https://www.googleapis.com/calendar/v3/users/me/calendarList";

/// Environment variable holding the bearer token
pub const ACCESS_TOKEN_VAR: &str = "GOOGLE_ACCESS_TOKEN";

/// Runtime configuration, built once at startup and passed down explicitly
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token sent with the calendar list request
    pub google_access_token: String,
    /// Calendar list endpoint, only settable from code
    pub calendar_list_url: Url,
}

impl Config {
    /// Load configuration from `.env` and the process environment
    pub fn load() -> RoomsResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    /// Only the access token is read; the endpoint is always the default.
    pub fn from_lookup<F>(lookup: F) -> RoomsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let google_access_token = lookup(ACCESS_TOKEN_VAR)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| env_error(ACCESS_TOKEN_VAR))?;

        Self::with_endpoint(google_access_token, DEFAULT_CALENDAR_LIST_URL)
    }

    /// Configuration for a token against the default endpoint
    pub fn with_token(token: impl Into<String>) -> RoomsResult<Self> {
        Self::with_endpoint(token, DEFAULT_CALENDAR_LIST_URL)
    }

    /// Configuration for a token against an explicit endpoint
    pub fn with_endpoint(token: impl Into<String>, url: &str) -> RoomsResult<Self> {
        let google_access_token = token.into();
        if google_access_token.is_empty() {
            return Err(env_error(ACCESS_TOKEN_VAR));
        }

        let calendar_list_url = Url::parse(url)
            .map_err(|e| config_error(&format!("Invalid calendar list URL '{}': {}", url, e)))?;

        Ok(Config {
            google_access_token,
            calendar_list_url,
        })
    }
}
