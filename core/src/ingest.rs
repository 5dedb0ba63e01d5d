// SPDX-FileCopyrightText: 2026 festa contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::num::ParseIntError;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::agenda::Agenda;
use crate::festival::{Festival, ValidationError};
use crate::style::Style;

/// Word separators recognized by the name capitalizer: commas, periods and
/// whitespace runs.
static WORD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,.\s]+").expect("word separator pattern is valid"));

/// Errors raised while parsing one delimited festival record.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The line carries fewer `:`-separated fields than a record needs.
    #[error("expected name, venue, date, duration and at least one style, got {found} fields")]
    MissingFields {
        /// How many fields the line actually carried.
        found: usize,
    },

    /// The start date is not a valid `dd-MM-yyyy` date.
    #[error("invalid start date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    /// The duration is not a non-negative integer.
    #[error("invalid duration: {0}")]
    InvalidDuration(#[from] ParseIntError),

    /// A style tag outside the closed style set.
    #[error("unknown style tag `{0}`")]
    UnknownStyle(String),

    /// The assembled record failed the festival's own validation.
    #[error(transparent)]
    Record(#[from] ValidationError),
}

/// Outcome of loading a delimited agenda text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Records parsed and added to the agenda.
    pub added: usize,

    /// Lines that failed to parse and were skipped.
    pub skipped: usize,
}

/// Parses one `:`-delimited record into a [`Festival`].
///
/// Layout: `name : venue : dd-MM-yyyy : duration : style [: style ...]`.
/// Every field is trimmed. The name is word-capitalized, the venue
/// uppercased, and each trailing tag resolved against the closed style set;
/// an unknown tag fails the whole line.
pub fn parse_line(line: &str) -> Result<Festival, ParseError> {
    let fields: Vec<&str> = line.split(':').map(str::trim).collect();
    if fields.len() < 5 {
        return Err(ParseError::MissingFields {
            found: fields.len(),
        });
    }

    let name = capitalize(fields[0]);
    let venue = fields[1].to_uppercase();
    let start_date = NaiveDate::parse_from_str(fields[2], "%d-%m-%Y")?;
    let duration_days: u32 = fields[3].parse()?;
    let styles = fields[4..]
        .iter()
        .map(|tag| {
            tag.parse::<Style>()
                .map_err(|_| ParseError::UnknownStyle((*tag).to_string()))
        })
        .collect::<Result<Vec<Style>, ParseError>>()?;

    Ok(Festival::new(name, venue, start_date, duration_days, styles)?)
}

/// Parses `content` line by line, feeding each record into `agenda` one at
/// a time.
///
/// Blank lines are ignored. A line that fails to parse is logged and
/// skipped; loading always continues. Callers that must abort on the first
/// bad record can drive [`parse_line`] themselves.
pub fn load_agenda(content: &str, agenda: &mut Agenda) -> LoadSummary {
    let mut summary = LoadSummary::default();
    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(festival) => {
                agenda.add(festival);
                summary.added += 1;
            }
            Err(err) => {
                tracing::warn!(line = index + 1, %err, "skipping unparseable festival record");
                summary.skipped += 1;
            }
        }
    }
    tracing::debug!(added = summary.added, skipped = summary.skipped, "agenda loaded");
    summary
}

/// First letter of each word uppercased, the rest lowercased. Words are
/// split on commas, periods and whitespace, then re-joined with single
/// spaces.
fn capitalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in WORD_SEPARATOR.split(text).filter(|word| !word.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.extend(chars.flat_map(char::to_lowercase));
        }
    }
    out
}
