// SPDX-FileCopyrightText: 2026 festa contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Month-indexed festival agenda: ordered insertion, grouping by style set,
//! date-relative lifecycle queries and conditional cancellation.

mod agenda;
mod festival;
mod ingest;
mod month;
mod style;

pub use crate::agenda::Agenda;
pub use crate::festival::{Festival, ValidationError};
pub use crate::ingest::{LoadSummary, ParseError, load_agenda, parse_line};
pub use crate::month::Month;
pub use crate::style::{Style, format_styles};
