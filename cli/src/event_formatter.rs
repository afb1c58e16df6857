// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use muster_core::Event;

use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::{ArgOutputFormat, format_date};

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: ArgOutputFormat,
}

impl EventFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                EventColumn::Id,
                EventColumn::Date,
                EventColumn::Name,
                EventColumn::Location,
                EventColumn::Attendees,
            ],
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, events: &'a [Event]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [Event],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            ArgOutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.events).map_err(|_| fmt::Error)?;
                write!(f, "{json}")
            }
            ArgOutputFormat::Table => {
                write!(f, "{}", Table::new(&self.formatter.columns, self.events))
            }
        }
    }
}

#[derive(Debug, Clone)]
enum EventColumn {
    Id,
    Date,
    Name,
    Location,
    Attendees,
}

impl TableColumn<Event> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            EventColumn::Id => "Id",
            EventColumn::Date => "Date",
            EventColumn::Name => "Name",
            EventColumn::Location => "Location",
            EventColumn::Attendees => "Attendees",
        }
        .into()
    }

    fn format<'a>(&self, event: &'a Event) -> Cow<'a, str> {
        match self {
            EventColumn::Id => event.id.to_string().into(),
            EventColumn::Date => format_date(event.date).into(),
            EventColumn::Name => Cow::from(&event.name),
            EventColumn::Location => Cow::from(&event.location),
            EventColumn::Attendees if event.attendees.is_empty() => "-".into(),
            EventColumn::Attendees => event
                .attendees
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
                .into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }
}
