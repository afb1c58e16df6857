// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use muster_core::{APP_NAME, Muster};
use tracing_subscriber::EnvFilter;

use crate::cmd_event::{CmdAttendee, CmdDelete, CmdEdit, CmdList, CmdNew};
use crate::cmd_tui::CmdTui;
use crate::config::parse_config;

/// Run the Muster command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Manage events and the people attending them, from your terminal.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to list
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/muster/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/muster/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdList::command())
            .subcommand(CmdNew::command())
            .subcommand(CmdEdit::command())
            .subcommand(CmdDelete::command())
            .subcommand(CmdAttendee::command())
            .subcommand(CmdTui::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdList::NAME, matches)) => List(CmdList::from(matches)),
            Some((CmdNew::NAME, matches)) => New(CmdNew::from(matches)?),
            Some((CmdEdit::NAME, matches)) => Edit(CmdEdit::from(matches)),
            Some((CmdDelete::NAME, matches)) => Delete(CmdDelete::from(matches)),
            Some((CmdAttendee::NAME, matches)) => Attendee(CmdAttendee::from(matches)),
            Some((CmdTui::NAME, matches)) => Tui(CmdTui::from(matches)),
            None => List(CmdList::new()),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// List events and their attendees
    List(CmdList),

    /// Create an event
    New(CmdNew),

    /// Edit an event
    Edit(CmdEdit),

    /// Delete an event
    Delete(CmdDelete),

    /// Add an attendee to an event
    Attendee(CmdAttendee),

    /// Browse and manage events in a full-screen view
    Tui(CmdTui),
}

impl Commands {
    /// Run the command with the given configuration
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        tracing::debug!("parsing configuration");
        let config = parse_config(config).await?;
        let mut muster = Muster::new(config)?;

        tracing::debug!("fetching the event collection");
        muster.load().await?;

        use Commands::*;
        match self {
            List(a) => a.run(&mut muster).await,
            New(a) => a.run(&mut muster).await,
            Edit(a) => a.run(&mut muster).await,
            Delete(a) => a.run(&mut muster).await,
            Attendee(a) => a.run(&mut muster).await,
            Tui(a) => a.run(&mut muster).await,
        }
    }
}
