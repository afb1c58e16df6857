// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use muster_api::{AttendeeDraft, Event, EventDraft, EventId, EventsClient};

use crate::config::Config;
use crate::state::EventList;

/// Muster application core: the view-state container.
///
/// Owns the event service client and the locally held event list, and
/// mediates between them: every mutating operation sends the request first
/// and applies the matching list transition only on success, so a failed
/// request leaves the list exactly as it was.
#[derive(Debug)]
pub struct Muster {
    client: EventsClient,
    state: EventList,
    loading: bool,
}

impl Muster {
    /// Creates a new Muster instance with the given configuration.
    pub fn new(config: Config) -> Result<Self, Box<dyn Error>> {
        let client = EventsClient::new(config.api)?;
        Ok(Self {
            client,
            state: EventList::new(),
            loading: false,
        })
    }

    /// Fetches the full event collection once.
    ///
    /// The loading flag is set while the request is pending. On failure the
    /// error is logged, the flag is cleared, and the (empty) list is left
    /// intact; the caller observes the failure through the returned error.
    pub async fn load(&mut self) -> Result<(), Box<dyn Error>> {
        self.loading = true;
        let result = self.client.list_events().await;
        self.loading = false;

        match result {
            Ok(events) => {
                tracing::debug!(count = events.len(), "event collection loaded");
                self.state.replace_all(events);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch the event collection");
                Err(e.into())
            }
        }
    }

    /// The events, in display order.
    pub fn events(&self) -> &[Event] {
        self.state.events()
    }

    /// Looks up an event by id.
    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.state.get(id)
    }

    /// Whether a request is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Creates a new event from the given draft and shows it first in the
    /// list.
    pub async fn create_event(&mut self, draft: EventDraft) -> Result<&Event, Box<dyn Error>> {
        validate_event_draft(&draft)?;

        let event = self.request(|c| async move { c.create_event(&draft).await }).await?;
        let id = event.id;
        self.state.apply_created(event);

        Ok(self.state.get(id).ok_or("event missing after create")?)
    }

    /// Updates an existing event, replacing the matching list entry in
    /// place.
    pub async fn update_event(
        &mut self,
        id: EventId,
        draft: EventDraft,
    ) -> Result<&Event, Box<dyn Error>> {
        validate_event_draft(&draft)?;

        let event = self
            .request(|c| async move { c.update_event(id, &draft).await })
            .await?;
        let id = event.id;
        self.state.apply_updated(event);

        Ok(self.state.get(id).ok_or("event missing after update")?)
    }

    /// Deletes an event and removes it from the list.
    ///
    /// Confirmation is the caller's responsibility; this never prompts.
    pub async fn delete_event(&mut self, id: EventId) -> Result<(), Box<dyn Error>> {
        self.request(|c| async move { c.delete_event(id).await }).await?;
        self.state.apply_removed(id);
        Ok(())
    }

    /// Adds an attendee to an event; the matching list entry is replaced
    /// with the server's returned representation.
    pub async fn add_attendee(
        &mut self,
        id: EventId,
        draft: AttendeeDraft,
    ) -> Result<&Event, Box<dyn Error>> {
        if draft.name.trim().is_empty() {
            return Err("Attendee name is required".into());
        }

        let event = self
            .request(|c| async move { c.add_attendee(id, &draft).await })
            .await?;
        let id = event.id;
        self.state.apply_attendee_added(event);

        Ok(self.state.get(id).ok_or("event missing after attendee add")?)
    }

    /// Runs one request with the coarse loading flag set, logging failures.
    async fn request<T, F, Fut>(&mut self, op: F) -> Result<T, Box<dyn Error>>
    where
        F: FnOnce(EventsClient) -> Fut,
        Fut: Future<Output = Result<T, muster_api::ApiError>>,
    {
        self.loading = true;
        let result = op(self.client.clone()).await;
        self.loading = false;

        result.map_err(|e| {
            tracing::error!(error = %e, "event service request failed");
            e.into()
        })
    }
}

/// Required-field checks, the only validation the event form performs.
fn validate_event_draft(draft: &EventDraft) -> Result<(), Box<dyn Error>> {
    for (field, value) in [
        ("Name", &draft.name),
        ("Description", &draft.description),
        ("Location", &draft.location),
    ] {
        if value.trim().is_empty() {
            return Err(format!("{field} is required").into());
        }
    }
    Ok(())
}
