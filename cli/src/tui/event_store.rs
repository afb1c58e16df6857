// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, rc::Rc};

use muster_core::{Event, EventDraft};

use crate::tui::dispatcher::{Action, Dispatcher};
use crate::util::{format_date, parse_date};

/// Backing state for the event form. All fields are edited as text and
/// only turned into a draft on submit.
#[derive(Debug, Default)]
pub struct EventFormStore {
    pub data: EventFormData,

    /// Whether the user submitted the changes
    pub submit: bool,
}

#[derive(Debug, Default)]
pub struct EventFormData {
    pub name: String,
    pub date: String,
    pub location: String,
    pub description: String,
}

impl EventFormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_by_event(event: &Event) -> Self {
        Self {
            data: EventFormData {
                name: event.name.clone(),
                date: format_date(event.date),
                location: event.location.clone(),
                description: event.description.clone(),
            },
            submit: false,
        }
    }

    pub fn submit_draft(self) -> Result<EventDraft, Box<dyn Error>> {
        Ok(EventDraft {
            name: self.data.name,
            description: self.data.description,
            date: parse_date(&self.data.date)?,
            location: self.data.location,
        })
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| match action {
            Action::UpdateEventName(v) => that.borrow_mut().data.name = v.clone(),
            Action::UpdateEventDate(v) => that.borrow_mut().data.date = v.clone(),
            Action::UpdateEventLocation(v) => that.borrow_mut().data.location = v.clone(),
            Action::UpdateEventDescription(v) => that.borrow_mut().data.description = v.clone(),
            Action::SubmitChanges => that.borrow_mut().submit = true,
            _ => (),
        }));
        dispatcher.register(callback);
    }
}
