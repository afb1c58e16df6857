// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use muster_core::{AttendeeDraft, Event, EventDraft, EventId, Muster};

use crate::event_formatter::EventFormatter;
use crate::prompt;
use crate::tui;
use crate::util::{ArgOutputFormat, parse_date};

#[derive(Debug, Clone)]
pub struct CmdList {
    pub output_format: ArgOutputFormat,
}

impl CmdList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List events and their attendees")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn new() -> Self {
        Self {
            output_format: ArgOutputFormat::Table,
        }
    }

    pub async fn run(self, muster: &mut Muster) -> Result<(), Box<dyn Error>> {
        tracing::debug!("listing events");
        let events = muster.events();
        if events.is_empty() && self.output_format == ArgOutputFormat::Table {
            println!("{}", "No events found".italic());
        }
        print_events(events, self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdNew {
    pub name: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,

    pub output_format: ArgOutputFormat,
}

impl CmdNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Create an event")
            .arg(arg_name())
            .arg(arg_date())
            .arg(arg_location())
            .arg(arg_description())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let name = get_name(matches);
        let date = get_date(matches);
        let location = get_location(matches);
        let description = get_description(matches);

        let given = [&name, &date, &location, &description]
            .iter()
            .filter(|a| a.is_some())
            .count();

        // All fields are required; with none given, the form is opened
        // instead.
        if given != 0 && given != 4 {
            return Err(
                "--name, --date, --location and --description must be given together \
                 (or none of them, to open the form)"
                    .into(),
            );
        }

        Ok(Self {
            name,
            date,
            location,
            description,

            output_format: ArgOutputFormat::from(matches),
        })
    }

    pub async fn run(self, muster: &mut Muster) -> Result<(), Box<dyn Error>> {
        tracing::debug!("creating a new event");

        let draft = match (self.name, self.date, self.location, self.description) {
            (Some(name), Some(date), Some(location), Some(description)) => EventDraft {
                name,
                description,
                date: parse_date(&date)?,
                location,
            },
            _ => match tui::draft_event()? {
                Some(draft) => draft,
                None => {
                    tracing::info!("user canceled the event form");
                    return Ok(());
                }
            },
        };

        let event = muster.create_event(draft).await?;
        print_events(std::slice::from_ref(event), self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEdit {
    pub id: EventId,
    pub name: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,

    pub output_format: ArgOutputFormat,
}

impl CmdEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit an event")
            .arg(arg_id())
            .arg(arg_name())
            .arg(arg_date())
            .arg(arg_location())
            .arg(arg_description())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: get_id(matches),
            name: get_name(matches),
            date: get_date(matches),
            location: get_location(matches),
            description: get_description(matches),

            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, muster: &mut Muster) -> Result<(), Box<dyn Error>> {
        tracing::debug!(id = %self.id, "editing event");
        let current = muster.event(self.id).ok_or("Event not found")?.clone();

        let draft = if self.is_empty() {
            match tui::patch_event(&current)? {
                Some(draft) => draft,
                None => {
                    tracing::info!("user canceled the event form");
                    return Ok(());
                }
            }
        } else {
            // Flags overlay the current fields; anything not given keeps
            // its value.
            EventDraft {
                name: self.name.unwrap_or(current.name),
                description: self.description.unwrap_or(current.description),
                date: self
                    .date
                    .as_deref()
                    .map(parse_date)
                    .transpose()?
                    .unwrap_or(current.date),
                location: self.location.unwrap_or(current.location),
            }
        };

        let event = muster.update_event(self.id, draft).await?;
        print_events(std::slice::from_ref(event), self.output_format);
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.date.is_none()
            && self.location.is_none()
            && self.description.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct CmdDelete {
    pub id: EventId,
    pub yes: bool,
}

impl CmdDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete an event")
            .arg(arg_id())
            .arg(arg!(-y --yes "Skip the confirmation prompt"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: get_id(matches),
            yes: matches.get_flag("yes"),
        }
    }

    pub async fn run(self, muster: &mut Muster) -> Result<(), Box<dyn Error>> {
        tracing::debug!(id = %self.id, "deleting event");
        let event = muster.event(self.id).ok_or("Event not found")?.clone();

        if !self.yes && !prompt::confirm_delete(&event)? {
            println!("Aborted, nothing deleted.");
            return Ok(());
        }

        muster.delete_event(self.id).await?;
        println!("{} Your event has been deleted.", "Deleted!".green());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdAttendee {
    pub id: EventId,
    pub name: Option<String>,

    pub output_format: ArgOutputFormat,
}

impl CmdAttendee {
    pub const NAME: &str = "attendee";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Add an attendee to an event")
            .arg(arg_id())
            .arg(arg!(name: [NAME] "Name of the attendee"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: get_id(matches),
            name: matches.get_one("name").cloned(),

            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, muster: &mut Muster) -> Result<(), Box<dyn Error>> {
        tracing::debug!(id = %self.id, "adding attendee");
        let current = muster.event(self.id).ok_or("Event not found")?.clone();

        let draft = match self.name {
            Some(name) => AttendeeDraft { name },
            None => match tui::draft_attendee(&current)? {
                Some(draft) => draft,
                None => {
                    tracing::info!("user canceled the attendee form");
                    return Ok(());
                }
            },
        };

        let event = muster.add_attendee(self.id, draft).await?;
        print_events(std::slice::from_ref(event), self.output_format);
        Ok(())
    }
}

fn print_events(events: &[Event], output_format: ArgOutputFormat) {
    let formatter = EventFormatter::new().with_output_format(output_format);
    println!("{}", formatter.format(events));
}

fn arg_id() -> Arg {
    arg!(id: <ID> "The id of the event").value_parser(value_parser!(i64))
}

fn get_id(matches: &ArgMatches) -> EventId {
    matches
        .get_one::<i64>("id")
        .copied()
        .map(EventId::new)
        .expect("id is required")
}

fn arg_name() -> Arg {
    arg!(-n --name <NAME> "Name of the event")
}

fn get_name(matches: &ArgMatches) -> Option<String> {
    matches.get_one("name").cloned()
}

fn arg_date() -> Arg {
    arg!(-d --date <DATE> "Date of the event (YYYY-MM-DD)")
}

fn get_date(matches: &ArgMatches) -> Option<String> {
    matches.get_one("date").cloned()
}

fn arg_location() -> Arg {
    arg!(-l --location <LOCATION> "Location of the event")
}

fn get_location(matches: &ArgMatches) -> Option<String> {
    matches.get_one("location").cloned()
}

fn arg_description() -> Arg {
    arg!(--description <DESCRIPTION> "Description of the event")
}

fn get_description(matches: &ArgMatches) -> Option<String> {
    matches.get_one("description").cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Command;

    #[test]
    fn test_parse_new() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdNew::command());

        let matches = cmd
            .try_get_matches_from([
                "test",
                "new",
                "--name",
                "Rust Meetup",
                "--date",
                "2026-03-14",
                "--location",
                "HQ",
                "--description",
                "Monthly gathering",
            ])
            .unwrap();
        let sub_matches = matches.subcommand_matches("new").unwrap();
        let parsed = CmdNew::from(sub_matches).unwrap();
        assert_eq!(parsed.name, Some("Rust Meetup".to_string()));
        assert_eq!(parsed.date, Some("2026-03-14".to_string()));
        assert_eq!(parsed.location, Some("HQ".to_string()));
        assert_eq!(parsed.description, Some("Monthly gathering".to_string()));
    }

    #[test]
    fn test_parse_new_tui() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdNew::command());

        let matches = cmd.try_get_matches_from(["test", "new"]).unwrap();
        let sub_matches = matches.subcommand_matches("new").unwrap();
        let parsed = CmdNew::from(sub_matches).unwrap();
        assert_eq!(parsed.name, None);
        assert_eq!(parsed.date, None);
        assert_eq!(parsed.location, None);
        assert_eq!(parsed.description, None);
    }

    #[test]
    fn test_parse_new_partial_flags_rejected() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdNew::command());

        let matches = cmd
            .try_get_matches_from(["test", "new", "--name", "Rust Meetup"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("new").unwrap();
        assert!(CmdNew::from(sub_matches).is_err());
    }

    #[test]
    fn test_parse_edit() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdEdit::command());

        let matches = cmd
            .try_get_matches_from(["test", "edit", "3", "--name", "Renamed"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("edit").unwrap();
        let parsed = CmdEdit::from(sub_matches);
        assert_eq!(parsed.id, EventId::new(3));
        assert_eq!(parsed.name, Some("Renamed".to_string()));
        assert_eq!(parsed.date, None);
        assert!(!parsed.is_empty());
    }

    #[test]
    fn test_parse_edit_no_flags_is_empty() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdEdit::command());

        let matches = cmd.try_get_matches_from(["test", "edit", "3"]).unwrap();
        let sub_matches = matches.subcommand_matches("edit").unwrap();
        assert!(CmdEdit::from(sub_matches).is_empty());
    }

    #[test]
    fn test_parse_delete() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdDelete::command());

        let matches = cmd
            .try_get_matches_from(["test", "delete", "7", "--yes"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("delete").unwrap();
        let parsed = CmdDelete::from(sub_matches);
        assert_eq!(parsed.id, EventId::new(7));
        assert!(parsed.yes);
    }

    #[test]
    fn test_parse_delete_requires_confirmation_by_default() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdDelete::command());

        let matches = cmd.try_get_matches_from(["test", "delete", "7"]).unwrap();
        let sub_matches = matches.subcommand_matches("delete").unwrap();
        assert!(!CmdDelete::from(sub_matches).yes);
    }

    #[test]
    fn test_parse_attendee() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdAttendee::command());

        let matches = cmd
            .try_get_matches_from(["test", "attendee", "3", "Jane Doe"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("attendee").unwrap();
        let parsed = CmdAttendee::from(sub_matches);
        assert_eq!(parsed.id, EventId::new(3));
        assert_eq!(parsed.name, Some("Jane Doe".to_string()));
    }

    #[test]
    fn test_parse_list_output_format() {
        let cmd = Command::new("test")
            .subcommand_required(true)
            .subcommand(CmdList::command());

        let matches = cmd
            .try_get_matches_from(["test", "list", "--output-format", "json"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("list").unwrap();
        let parsed = CmdList::from(sub_matches);
        assert_eq!(parsed.output_format, ArgOutputFormat::Json);
    }
}
