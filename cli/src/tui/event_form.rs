// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use crate::tui::component_form::{Access, Form, Input};
use crate::tui::component_modal::Modal;
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::event_store::EventFormStore;

pub fn new_event_editor(title: &str) -> Modal<EventFormStore, Form<EventFormStore>> {
    let form = Form::new(vec![
        Box::new(new_name()),
        Box::new(new_date()),
        Box::new(new_location()),
        Box::new(new_description()),
    ]);
    let height = form.height();
    Modal::new(title.to_owned(), height, form)
}

macro_rules! new_input {
    ($fn: ident, $title:expr, $acc: ident, $field: ident, $action: ident) => {
        fn $fn() -> Input<EventFormStore, $acc> {
            Input::new($title)
        }

        struct $acc;

        impl Access<EventFormStore, String> for $acc {
            fn get(store: &Rc<RefCell<EventFormStore>>) -> String {
                store.borrow().data.$field.clone()
            }

            fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
                dispatcher.dispatch(Action::$action(value));
                true
            }
        }
    };
}

new_input!(new_name, "Name", NameAccess, name, UpdateEventName);
new_input!(
    new_date,
    "Date (YYYY-MM-DD)",
    DateAccess,
    date,
    UpdateEventDate
);
new_input!(
    new_location,
    "Location",
    LocationAccess,
    location,
    UpdateEventLocation
);
new_input!(
    new_description,
    "Description",
    DescriptionAccess,
    description,
    UpdateEventDescription
);
