// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use muster_core::{Event, EventId};
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, List, ListItem, ListState};

use crate::tui::app::read_key;
use crate::util::format_date;

/// What the user asked for from the browse screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    Quit,
    Create,
    Update(EventId),
    AddAttendee(EventId),
    Delete(EventId),
}

/// Show the event list until the user picks an action. The selection index
/// is kept by the caller so it survives across editor sessions.
pub fn browse(events: &[Event], selected: &mut usize) -> Result<BrowseAction, Box<dyn Error>> {
    use ratatui::crossterm::event::KeyCode;

    *selected = (*selected).min(events.len().saturating_sub(1));

    let mut terminal = ratatui::init();
    let result = loop {
        if let Err(e) = terminal.draw(|frame| render(frame, events, *selected)) {
            break Err(e.into());
        }

        match read_key() {
            Err(e) => break Err(e),
            Ok(Some(key)) => match key {
                KeyCode::Up | KeyCode::Char('k') => *selected = selected.saturating_sub(1),
                KeyCode::Down | KeyCode::Char('j') => {
                    *selected = (*selected + 1).min(events.len().saturating_sub(1));
                }
                KeyCode::Char('n') => break Ok(BrowseAction::Create),
                KeyCode::Char('e') => {
                    if let Some(event) = events.get(*selected) {
                        break Ok(BrowseAction::Update(event.id));
                    }
                }
                KeyCode::Char('a') => {
                    if let Some(event) = events.get(*selected) {
                        break Ok(BrowseAction::AddAttendee(event.id));
                    }
                }
                KeyCode::Char('d') => {
                    if let Some(event) = events.get(*selected) {
                        break Ok(BrowseAction::Delete(event.id));
                    }
                }
                KeyCode::Char('q') | KeyCode::Esc => break Ok(BrowseAction::Quit),
                _ => {}
            },
            Ok(None) => {}
        }
    };
    ratatui::restore();
    result
}

fn render(frame: &mut Frame, events: &[Event], selected: usize) {
    let block = Block::bordered()
        .border_set(border::ROUNDED)
        .title(Line::from(" Muster ".bold()).centered())
        .title_bottom(instructions().centered());

    if events.is_empty() {
        let empty = ratatui::widgets::Paragraph::new(Line::from(vec![
            "No events yet. Press ".into(),
            "<n>".blue().bold(),
            " to create one.".into(),
        ]))
        .centered()
        .block(block);
        frame.render_widget(empty, frame.area());
        return;
    }

    let items: Vec<ListItem> = events.iter().map(list_item).collect();
    let list = List::new(items)
        .block(block)
        .highlight_symbol("> ")
        .highlight_style(Style::new().bold());
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, frame.area(), &mut state);
}

fn list_item(event: &Event) -> ListItem<'_> {
    let attendees = if event.attendees.is_empty() {
        "no attendees yet".to_string()
    } else {
        event
            .attendees
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    ListItem::new(vec![
        Line::from(vec![
            event.name.clone().bold(),
            format!("  {} at {}", format_date(event.date), event.location).into(),
        ]),
        Line::from(event.description.clone().dim()),
        Line::from(attendees.italic().dim()),
        Line::from(""),
    ])
}

fn instructions() -> Line<'static> {
    Line::from(vec![
        " New ".into(),
        "<n>".blue().bold(),
        " Edit ".into(),
        "<e>".blue().bold(),
        " Attendee ".into(),
        "<a>".blue().bold(),
        " Delete ".into(),
        "<d>".blue().bold(),
        " Quit ".into(),
        "<q> ".blue().bold(),
    ])
}
