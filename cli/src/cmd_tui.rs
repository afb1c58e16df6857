// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, time::Duration};

use clap::{ArgMatches, Command};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use muster_core::Muster;

use crate::tui::{self, BrowseAction};

#[derive(Debug, Clone)]
pub struct CmdTui;

impl CmdTui {
    pub const NAME: &str = "tui";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Browse and manage events in a full-screen view")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    /// Alternate between the browse screen and one editor session at a
    /// time. Requests run between sessions, behind a spinner; a failed
    /// request is reported and the list is left as it was.
    pub async fn run(self, muster: &mut Muster) -> Result<(), Box<dyn Error>> {
        let mut selected = 0;
        loop {
            let events = muster.events().to_vec();
            match tui::browse(&events, &mut selected)? {
                BrowseAction::Quit => break,

                BrowseAction::Create => {
                    if let Some(draft) = tui::draft_event()? {
                        report(with_spinner("Creating event...", muster.create_event(draft)).await);
                    }
                }

                BrowseAction::Update(id) => {
                    let Some(event) = muster.event(id).cloned() else {
                        continue;
                    };
                    if let Some(draft) = tui::patch_event(&event)? {
                        report(
                            with_spinner("Updating event...", muster.update_event(id, draft)).await,
                        );
                    }
                }

                BrowseAction::AddAttendee(id) => {
                    let Some(event) = muster.event(id).cloned() else {
                        continue;
                    };
                    if let Some(draft) = tui::draft_attendee(&event)? {
                        report(
                            with_spinner("Adding attendee...", muster.add_attendee(id, draft))
                                .await,
                        );
                    }
                }

                BrowseAction::Delete(id) => {
                    let Some(event) = muster.event(id).cloned() else {
                        continue;
                    };
                    if tui::confirm_delete(&event)? {
                        report(with_spinner("Deleting event...", muster.delete_event(id)).await);
                    }
                }
            }
        }
        Ok(())
    }
}

fn report<T>(result: Result<T, Box<dyn Error>>) {
    if let Err(e) = result {
        println!("{} {}", "Error:".red(), e);
    }
}

async fn with_spinner<T>(
    message: &str,
    fut: impl Future<Output = Result<T, Box<dyn Error>>>,
) -> Result<T, Box<dyn Error>> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["-", "\\", "|", "/"])
            .template("{msg} {spinner}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = fut.await;
    spinner.finish_and_clear();
    result
}
