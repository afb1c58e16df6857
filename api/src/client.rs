// SPDX-License-Identifier: Apache-2.0

//! Typed client for the event service collection and item endpoints.

use std::sync::Arc;

use reqwest::Method;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::types::{AttendeeDraft, Event, EventDraft, EventId};

/// Client for the remote event service.
///
/// # Example
///
/// ```ignore
/// use muster_api::{ApiConfig, EventsClient};
///
/// # async fn example() -> Result<(), muster_api::ApiError> {
/// let config = ApiConfig {
///     base_url: "http://localhost:8080".to_string(),
///     ..Default::default()
/// };
///
/// let client = EventsClient::new(config)?;
/// let events = client.list_events().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EventsClient {
    http: Arc<HttpClient>,
    config: ApiConfig,
}

impl EventsClient {
    /// Creates a new event service client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = HttpClient::new(&config)?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// Fetches the full event collection, in server order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        let url = self.full_url("/api/events");
        tracing::debug!(url, "fetching event collection");

        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, &url))
            .await?;

        Ok(resp.json().await?)
    }

    /// Creates a new event and returns the server-confirmed copy.
    ///
    /// # Errors
    ///
    /// Returns an error if creation fails.
    pub async fn create_event(&self, draft: &EventDraft) -> Result<Event, ApiError> {
        let url = self.full_url("/api/events");
        tracing::debug!(url, name = %draft.name, "creating event");

        let resp = self
            .http
            .execute(self.http.build_request(Method::POST, &url).json(draft))
            .await?;

        Ok(resp.json().await?)
    }

    /// Updates an existing event, keyed by id, and returns the
    /// server-confirmed copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the event does not exist or the update fails.
    pub async fn update_event(&self, id: EventId, draft: &EventDraft) -> Result<Event, ApiError> {
        let url = self.full_url(&format!("/api/events/{id}"));
        tracing::debug!(url, %id, "updating event");

        let resp = self
            .http
            .execute(self.http.build_request(Method::PUT, &url).json(draft))
            .await?;

        Ok(resp.json().await?)
    }

    /// Deletes an event. The server answers with no content.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails.
    pub async fn delete_event(&self, id: EventId) -> Result<(), ApiError> {
        let url = self.full_url(&format!("/api/events/{id}"));
        tracing::debug!(url, %id, "deleting event");

        self.http
            .execute(self.http.build_request(Method::DELETE, &url))
            .await?;

        Ok(())
    }

    /// Adds an attendee to an event's sub-collection. The server returns the
    /// whole updated event, attendees included.
    ///
    /// # Errors
    ///
    /// Returns an error if the event does not exist or creation fails.
    pub async fn add_attendee(&self, id: EventId, draft: &AttendeeDraft) -> Result<Event, ApiError> {
        let url = self.full_url(&format!("/api/events/{id}/attendees"));
        tracing::debug!(url, %id, name = %draft.name, "adding attendee");

        let resp = self
            .http
            .execute(self.http.build_request(Method::POST, &url).json(draft))
            .await?;

        Ok(resp.json().await?)
    }

    /// Builds a full URL from a path.
    fn full_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}
