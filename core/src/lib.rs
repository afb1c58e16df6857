// SPDX-License-Identifier: Apache-2.0

//! Muster application core: the view-state container and the pure event
//! list state it mediates.

mod config;
mod muster;
mod state;

pub use muster_api::{ApiConfig, ApiError, Attendee, AttendeeDraft, Event, EventDraft, EventId};

pub use crate::config::Config;
pub use crate::muster::Muster;
pub use crate::state::EventList;

/// The application name, used for config paths and the CLI.
pub const APP_NAME: &str = "muster";
