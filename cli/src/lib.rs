// SPDX-License-Identifier: Apache-2.0

//! Muster command-line interface: one-shot event commands and the
//! full-screen browser.

mod cli;
mod cmd_event;
mod cmd_tui;
mod config;
mod event_formatter;
mod prompt;
mod table;
mod tui;
mod util;

pub use crate::cli::{Cli, Commands, run};
