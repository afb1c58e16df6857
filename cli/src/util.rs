// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use clap::{Arg, ArgMatches, arg, value_parser};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

pub fn parse_date(date: &str) -> Result<NaiveDate, &'static str> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| "Invalid date format. Expected format: YYYY-MM-DD")
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Returns the display width of the first `graphemes` graphemes of `s`.
pub fn unicode_width_of_slice(s: &str, graphemes: usize) -> usize {
    s.graphemes(true)
        .take(graphemes)
        .map(UnicodeWidthStr::width)
        .sum()
}

/// Returns the byte range occupied by the grapheme at the given index, if any.
pub fn byte_range_of_grapheme_at(s: &str, index: usize) -> Option<std::ops::Range<usize>> {
    s.grapheme_indices(true)
        .nth(index)
        .map(|(start, g)| start..start + g.len())
}
