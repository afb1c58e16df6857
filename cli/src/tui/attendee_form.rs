// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use crate::tui::attendee_store::AttendeeFormStore;
use crate::tui::component_form::{Access, Form, Input};
use crate::tui::component_modal::Modal;
use crate::tui::dispatcher::{Action, Dispatcher};

pub fn new_attendee_editor(event_name: &str) -> Modal<AttendeeFormStore, Form<AttendeeFormStore>> {
    let form = Form::new(vec![Box::new(new_name())]);
    let height = form.height();
    Modal::new(format!("Add Attendee to {event_name}"), height, form)
}

fn new_name() -> Input<AttendeeFormStore, NameAccess> {
    Input::new("Name")
}

struct NameAccess;

impl Access<AttendeeFormStore, String> for NameAccess {
    fn get(store: &Rc<RefCell<AttendeeFormStore>>) -> String {
        store.borrow().name.clone()
    }

    fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
        dispatcher.dispatch(Action::UpdateAttendeeName(value));
        true
    }
}
