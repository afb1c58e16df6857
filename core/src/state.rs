// SPDX-License-Identifier: Apache-2.0

//! Pure view state for the event list.
//!
//! Each transition corresponds to one successful server mutation and keeps
//! the list holding exactly one entry per server-known event id.

use muster_api::{Event, EventId};

/// The locally held event list.
///
/// Server order is preserved on fetch; newly created events are shown
/// first. The authoritative copy of every entry lives on the server.
#[derive(Debug, Clone, Default)]
pub struct EventList {
    events: Vec<Event>,
}

impl EventList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// The events, in display order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Looks up an event by id.
    #[must_use]
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Number of events held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Replaces the whole list with a freshly fetched collection,
    /// preserving server order.
    pub fn replace_all(&mut self, events: Vec<Event>) {
        self.events = events;
    }

    /// Applies a successful create: any stale entry with the same id is
    /// dropped, then the server-confirmed event is prepended.
    pub fn apply_created(&mut self, event: Event) {
        self.events.retain(|e| e.id != event.id);
        self.events.insert(0, event);
    }

    /// Applies a successful update: the matching entry is replaced in
    /// place, leaving the rest of the list untouched. An update for an id
    /// not held locally prepends the server copy.
    pub fn apply_updated(&mut self, event: Event) {
        match self.events.iter_mut().find(|e| e.id == event.id) {
            Some(slot) => *slot = event,
            None => self.events.insert(0, event),
        }
    }

    /// Applies a successful delete: removes the matching entry, if any.
    pub fn apply_removed(&mut self, id: EventId) {
        self.events.retain(|e| e.id != id);
    }

    /// Applies a successful attendee create: the whole matching entry is
    /// replaced with the server's returned representation, which includes
    /// the updated attendee list.
    pub fn apply_attendee_added(&mut self, event: Event) {
        self.apply_updated(event);
    }
}
