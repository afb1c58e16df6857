// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::NaiveDate;

/// Server-assigned event identifier.
///
/// Ids are minted by the event service; the client never invents one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct EventId(i64);

impl EventId {
    /// Creates an `EventId` from a raw id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for EventId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for EventId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// A scheduled gathering with descriptive metadata and its attendees.
///
/// Mirrors the wire representation of the event service; the authoritative
/// copy always lives on the server.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    /// Server-assigned identifier.
    pub id: EventId,
    /// Event name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Calendar date of the event (ISO `YYYY-MM-DD` on the wire).
    pub date: NaiveDate,
    /// Where the event takes place.
    pub location: String,
    /// Attendees in server order.
    #[serde(default)]
    pub attendees: Vec<Attendee>,
}

/// A named participant associated with exactly one event.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Attendee {
    /// Server-assigned identifier.
    pub id: i64,
    /// Attendee name.
    pub name: String,
    /// The owning event.
    #[serde(rename = "eventId")]
    pub event_id: EventId,
}

/// Payload for creating or updating an event.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct EventDraft {
    /// Event name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Calendar date of the event.
    pub date: NaiveDate,
    /// Where the event takes place.
    pub location: String,
}

/// Payload for adding an attendee to an event.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AttendeeDraft {
    /// Attendee name.
    pub name: String,
}
