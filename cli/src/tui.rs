// SPDX-License-Identifier: Apache-2.0

mod app;
mod attendee_form;
mod attendee_store;
mod browser;
mod component;
mod component_form;
mod component_modal;
mod dispatcher;
mod event_form;
mod event_store;

pub use app::{confirm_delete, draft_attendee, draft_event, patch_event};
pub use browser::{BrowseAction, browse};
