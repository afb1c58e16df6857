// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use muster_core::AttendeeDraft;

use crate::tui::dispatcher::{Action, Dispatcher};

/// Backing state for the attendee form.
#[derive(Debug, Default)]
pub struct AttendeeFormStore {
    pub name: String,

    /// Whether the user submitted the changes
    pub submit: bool,
}

impl AttendeeFormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit_draft(self) -> AttendeeDraft {
        AttendeeDraft { name: self.name }
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| match action {
            Action::UpdateAttendeeName(v) => that.borrow_mut().name = v.clone(),
            Action::SubmitChanges => that.borrow_mut().submit = true,
            _ => (),
        }));
        dispatcher.register(callback);
    }
}
