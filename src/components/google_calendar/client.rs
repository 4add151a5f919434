use super::models::CalendarList;
use crate::config::Config;
use crate::error::{request_error, Error, RoomsResult};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Request};
use tracing::{debug, info};
use url::Url;

/// Anything that can produce the user's calendar list
#[async_trait]
pub trait CalendarListSource: Send + Sync {
    /// Fetch and decode the full calendar list
    async fn fetch_calendar_list(&self) -> RoomsResult<CalendarList>;
}

/// Google Calendar API client for the calendar list endpoint
#[derive(Debug, Clone)]
pub struct GoogleCalendarClient {
    client: Client,
    calendar_list_url: Url,
    access_token: String,
}

impl GoogleCalendarClient {
    /// Create a client with reqwest's default settings
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            calendar_list_url: config.calendar_list_url.clone(),
            access_token: config.google_access_token.clone(),
        }
    }

    /// Build the authenticated GET request without sending it
    pub fn build_request(&self) -> RoomsResult<Request> {
        self.client
            .get(self.calendar_list_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.access_token))
            .build()
            .map_err(|e| request_error(&e.to_string()))
    }
}

#[async_trait]
impl CalendarListSource for GoogleCalendarClient {
    async fn fetch_calendar_list(&self) -> RoomsResult<CalendarList> {
        let request = self.build_request()?;
        info!("Fetching calendar list from {}", self.calendar_list_url);

        let response = self
            .client
            .execute(request)
            .await
            .map_err(Error::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(Error::BodyRead)?;
        debug!("Calendar list response: HTTP {}, {} bytes", status, body.len());

        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let list = CalendarList::from_json(&body)?;
        info!("Fetched {} calendars", list.items.len());

        Ok(list)
    }
}
