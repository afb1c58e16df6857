// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, rc::Rc};

use muster_core::{AttendeeDraft, Event, EventDraft};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, KeyCode, KeyEventKind};
use ratatui::layout::Rect;

use crate::tui::attendee_store::AttendeeFormStore;
use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;
use crate::tui::event_form::new_event_editor;
use crate::tui::event_store::EventFormStore;
use crate::tui::{attendee_form::new_attendee_editor, component_modal::popup_area};

/// Collect a new event draft through the form. Returns `None` when the
/// user cancels.
pub fn draft_event() -> Result<Option<EventDraft>, Box<dyn Error>> {
    let store = run_editor(
        EventFormStore::new(),
        new_event_editor("New Event"),
        EventFormStore::register_to,
    )?;
    match store.submit {
        true => store.submit_draft().map(Some),
        false => Ok(None),
    }
}

/// Edit an existing event through the form, prefilled with its current
/// fields. Returns `None` when the user cancels.
pub fn patch_event(event: &Event) -> Result<Option<EventDraft>, Box<dyn Error>> {
    let store = run_editor(
        EventFormStore::new_by_event(event),
        new_event_editor("Edit Event"),
        EventFormStore::register_to,
    )?;
    match store.submit {
        true => store.submit_draft().map(Some),
        false => Ok(None),
    }
}

/// Collect an attendee draft for the given event. Returns `None` when the
/// user cancels.
pub fn draft_attendee(event: &Event) -> Result<Option<AttendeeDraft>, Box<dyn Error>> {
    let store = run_editor(
        AttendeeFormStore::new(),
        new_attendee_editor(&event.name),
        AttendeeFormStore::register_to,
    )?;
    match store.submit {
        true => Ok(Some(store.submit_draft())),
        false => Ok(None),
    }
}

/// Full-screen confirmation before a delete. Defaults to keeping the
/// event.
pub fn confirm_delete(event: &Event) -> Result<bool, Box<dyn Error>> {
    use ratatui::prelude::*;
    use ratatui::symbols::border;
    use ratatui::widgets::{Block, Clear, Paragraph};

    let mut terminal = ratatui::init();
    let result = loop {
        let drawn = terminal.draw(|frame| {
            let popup = popup_area(frame.area(), 46, 6);
            frame.render_widget(Clear, popup);

            let instructions = Line::from(vec![
                " Delete ".into(),
                "<y>".red().bold(),
                " Keep ".into(),
                "<Esc> ".blue().bold(),
            ]);
            let block = Block::bordered()
                .border_set(border::ROUNDED)
                .title(Line::from(" Delete Event ".bold()).centered())
                .title_bottom(instructions.centered());

            let body = Paragraph::new(vec![
                Line::from(event.name.clone().bold()).centered(),
                Line::from("This cannot be undone.").centered(),
            ])
            .block(block);
            frame.render_widget(body, popup);
        });
        if let Err(e) = drawn {
            break Err(e.into());
        }

        match read_key() {
            Err(e) => break Err(e),
            Ok(Some(KeyCode::Char('y' | 'Y'))) => break Ok(true),
            Ok(Some(KeyCode::Char('n' | 'N' | 'q') | KeyCode::Esc)) => break Ok(false),
            Ok(_) => {}
        }
    };
    ratatui::restore();
    result
}

/// Run one editor session: wire the store to a fresh dispatcher, pump the
/// terminal until the view exits, then hand the store back to the caller.
fn run_editor<S: 'static>(
    store: S,
    mut view: impl Component<S>,
    register: fn(Rc<RefCell<S>>, &mut Dispatcher),
) -> Result<S, Box<dyn Error>> {
    let store = Rc::new(RefCell::new(store));

    let mut terminal = ratatui::init();
    let result = {
        let mut dispatcher = Dispatcher::new();
        register(store.clone(), &mut dispatcher);
        view.activate(&mut dispatcher, &store);

        loop {
            if let Err(e) = draw(&mut terminal, &view, &store) {
                break Err(e);
            }

            match read_key() {
                Err(e) => break Err(e),
                Ok(Some(key)) => {
                    let area = match terminal.size() {
                        Ok(size) => Rect::new(0, 0, size.width, size.height),
                        Err(e) => break Err(e.into()),
                    };
                    if let Some(Message::Exit) = view.on_key(&mut dispatcher, &store, area, key) {
                        break Ok(());
                    }
                }
                Ok(None) => {}
            }
        }
    }; // release the dispatcher here so the store callback drops its Rc
    ratatui::restore();
    result?;

    let store = Rc::try_unwrap(store)
        .map_err(|_| "Store still has references")?
        .into_inner();
    Ok(store)
}

fn draw<S>(
    terminal: &mut DefaultTerminal,
    view: &impl Component<S>,
    store: &Rc<RefCell<S>>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|frame| {
        view.render(store, frame.area(), frame.buffer_mut());
        if let Some((x, y)) = view.get_cursor_position(store, frame.area()) {
            frame.set_cursor_position((x, y));
        }
    })?;
    Ok(())
}

/// Blocks until the next key press, swallowing other terminal events.
pub(crate) fn read_key() -> Result<Option<KeyCode>, Box<dyn Error>> {
    match event::read()? {
        event::Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key.code)),
        _ => Ok(None),
    }
}
