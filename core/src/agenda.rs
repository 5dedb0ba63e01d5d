// SPDX-FileCopyrightText: 2026 festa contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;

use crate::festival::Festival;
use crate::month::Month;
use crate::style::format_styles;

/// Month-indexed collection of festivals.
///
/// Only months holding at least one festival are present as keys, and each
/// month's list stays sorted ascending by name, equal names keeping their
/// insertion order. Because [`Month`] orders by calendar position, keys
/// always enumerate January through December.
///
/// No operation here reads the clock: queries that depend on "today" take
/// the reference date as a parameter.
#[derive(Debug, Clone, Default)]
pub struct Agenda {
    months: BTreeMap<Month, Vec<Festival>>,
}

impl Agenda {
    /// Creates an empty agenda.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a festival under the month derived from its start date.
    ///
    /// The insertion point is found by a linear scan for the first entry
    /// whose name compares strictly greater, so a festival named like an
    /// existing one lands after it, preserving relative insertion order.
    /// Never fails; the agenda does not enforce uniqueness.
    pub fn add(&mut self, festival: Festival) {
        let festivals = self.months.entry(festival.month()).or_default();
        let position = festivals
            .iter()
            .position(|existing| existing.name() > festival.name())
            .unwrap_or(festivals.len());
        festivals.insert(position, festival);
    }

    /// Number of festivals tracked for `month`, or `-1` if the month is not
    /// tracked at all.
    ///
    /// The sentinel distinguishes "never tracked" from "tracked with zero
    /// festivals"; the latter never persists because emptied months are
    /// dropped. New call sites can prefer [`Agenda::festivals_in`].
    pub fn count_in_month(&self, month: Month) -> i64 {
        self.festivals_in(month)
            .map_or(-1, |festivals| festivals.len() as i64)
    }

    /// The festivals tracked for `month`, in name order, if any.
    pub fn festivals_in(&self, month: Month) -> Option<&[Festival]> {
        self.months.get(&month).map(Vec::as_slice)
    }

    /// Groups festival names by the rendered label of their full style set.
    ///
    /// Grouping is by the exact style combination: a festival tagged
    /// `[ROCK, PUNK]` forms a group distinct from `[ROCK]`. Within a label,
    /// names keep first-seen order while scanning months in calendar order
    /// and each month in name order, with duplicate names suppressed.
    /// Labels enumerate alphabetically.
    pub fn group_by_style(&self) -> BTreeMap<String, Vec<String>> {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for festival in self.months.values().flatten() {
            let label = format_styles(festival.styles());
            let names = groups.entry(label).or_default();
            if !names.iter().any(|name| name == festival.name()) {
                names.push(festival.name().to_string());
            }
        }
        groups
    }

    /// Cancels the not-yet-concluded festivals of `month` whose venue
    /// matches `venues`, returning how many were removed, or `-1` if the
    /// month is not tracked.
    ///
    /// Venue matching keeps the original agenda's literal semantics: the
    /// event's venue, taken as a singleton, must equal the entire supplied
    /// set, so only a singleton set ever matches anything. Concluded
    /// festivals are left in place. New call sites can prefer
    /// [`Agenda::cancel_in`].
    pub fn cancel(&mut self, venues: &HashSet<String>, month: Month, today: NaiveDate) -> i64 {
        self.cancel_in(venues, month, today)
            .map_or(-1, |removed| removed as i64)
    }

    /// Like [`Agenda::cancel`], reporting an untracked month as `None`.
    ///
    /// Survivors keep their relative order, and a month emptied by the
    /// removal is dropped from the agenda entirely.
    pub fn cancel_in(
        &mut self,
        venues: &HashSet<String>,
        month: Month,
        today: NaiveDate,
    ) -> Option<usize> {
        let festivals = self.months.get_mut(&month)?;
        let before = festivals.len();
        festivals
            .retain(|festival| festival.has_concluded(today) || !matches_venue_set(venues, festival.venue()));
        let removed = before - festivals.len();
        if festivals.is_empty() {
            self.months.remove(&month);
        }
        Some(removed)
    }

    /// Full-text dump: months in calendar order, each festival in name order
    /// rendered via [`Festival::display`] relative to `today`.
    pub fn render(&self, today: NaiveDate) -> String {
        let mut out = String::new();
        for (month, festivals) in &self.months {
            out.push_str(&month.to_string());
            out.push_str(":\n");
            for festival in festivals {
                out.push('\t');
                out.push_str(&festival.display(today));
                out.push('\n');
            }
        }
        out
    }

    /// Whether no month holds any festival.
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// The tracked months, in calendar order.
    pub fn months(&self) -> impl Iterator<Item = Month> {
        self.months.keys().copied()
    }
}

/// Set-equality between a venue taken as a singleton and the supplied set.
fn matches_venue_set(venues: &HashSet<String>, venue: &str) -> bool {
    venues.len() == 1 && venues.contains(venue)
}
