// SPDX-FileCopyrightText: 2026 festa contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Days, NaiveDate};

use crate::month::Month;
use crate::style::{Style, format_styles};

/// Errors raised when constructing a [`Festival`] record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A festival lasts at least one day.
    #[error("festival duration must be at least 1 day, got {0}")]
    InvalidDuration(u32),

    /// A festival carries at least one style tag.
    #[error("festival must carry at least one style")]
    NoStyles,
}

/// One festival: name, venue, start date, duration in days and style set.
///
/// Immutable after construction. The producer normalizes the name and venue
/// before handing the record over; the constructor still re-validates the
/// duration and style set rather than trusting callers.
///
/// Lifecycle queries (`has_concluded`, `is_ongoing`, `days_until_start`)
/// take the reference date as an explicit parameter so results never depend
/// on a hidden wall-clock read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Festival {
    name: String,
    venue: String,
    start_date: NaiveDate,
    duration_days: u32,
    styles: Vec<Style>,
}

impl Festival {
    /// Creates a festival record, validating `duration_days >= 1` and a
    /// non-empty style set. Duplicate styles are dropped, keeping the first
    /// occurrence so the rendered style-set label stays reproducible.
    pub fn new(
        name: impl Into<String>,
        venue: impl Into<String>,
        start_date: NaiveDate,
        duration_days: u32,
        styles: Vec<Style>,
    ) -> Result<Self, ValidationError> {
        if duration_days < 1 {
            return Err(ValidationError::InvalidDuration(duration_days));
        }

        let mut deduped = Vec::with_capacity(styles.len());
        for style in styles {
            if !deduped.contains(&style) {
                deduped.push(style);
            }
        }
        if deduped.is_empty() {
            return Err(ValidationError::NoStyles);
        }

        Ok(Self {
            name: name.into(),
            venue: venue.into(),
            start_date,
            duration_days,
            styles: deduped,
        })
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The venue, uppercased by the producer.
    pub fn venue(&self) -> &str {
        &self.venue
    }

    /// The first day of the festival.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// How many days the festival lasts, at least one.
    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }

    /// The style set, in producer order without duplicates.
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    /// The calendar month of the start date.
    pub fn month(&self) -> Month {
        Month::from_date(self.start_date)
    }

    /// The exclusive end date: start plus duration. A one-day festival held
    /// on the 10th ends on the 11th.
    pub fn end_date(&self) -> NaiveDate {
        self.start_date + Days::new(u64::from(self.duration_days))
    }

    /// Whether this festival starts strictly before `other`. Festivals
    /// starting the same day are neither before nor after each other.
    pub fn starts_before(&self, other: &Festival) -> bool {
        self.start_date < other.start_date
    }

    /// Whether this festival starts strictly after `other`.
    pub fn starts_after(&self, other: &Festival) -> bool {
        self.start_date > other.start_date
    }

    /// Whether the festival is over: its end date is strictly before `today`.
    pub fn has_concluded(&self, today: NaiveDate) -> bool {
        self.end_date() < today
    }

    /// Whether the festival has started but not concluded. A festival
    /// starting exactly `today` has not started yet.
    pub fn is_ongoing(&self, today: NaiveDate) -> bool {
        !self.has_concluded(today) && self.start_date < today
    }

    /// Calendar days from `today` until the start date, or `None` once the
    /// festival is ongoing or concluded.
    pub fn days_until_start(&self, today: NaiveDate) -> Option<i64> {
        if self.has_concluded(today) || self.is_ongoing(today) {
            None
        } else {
            Some((self.start_date - today).num_days())
        }
    }

    /// Deterministic textual rendering relative to `today`.
    ///
    /// Name and style-set label on the first line, venue on the second, then
    /// the date (a `start - end` range when the festival lasts more than one
    /// day, rendering the exclusive end date) followed by one status
    /// annotation, and a closing rule.
    pub fn display(&self, today: NaiveDate) -> String {
        let mut out = format!(
            "{} {}\n{}\n{}",
            self.name,
            format_styles(&self.styles),
            self.venue,
            format_date(self.start_date),
        );
        if self.duration_days > 1 {
            out.push_str(" - ");
            out.push_str(&format_date(self.end_date()));
        }

        if self.has_concluded(today) {
            out.push_str(" (concluded)");
        } else if self.is_ongoing(today) {
            out.push_str(" (ongoing)");
        } else {
            let days = self.days_until_start(today).unwrap_or_default();
            out.push_str(&format!(" ({days} days remaining)"));
        }

        out.push('\n');
        out.push_str(&"-".repeat(40));
        out
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}
