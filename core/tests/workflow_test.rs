// SPDX-FileCopyrightText: 2026 festa contributors
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow: ingest a delimited agenda text, then exercise the
//! whole query surface against a fixed reference date.

use std::collections::HashSet;

use chrono::NaiveDate;
use festa_core::{Agenda, Month, load_agenda};

const AGENDA_TEXT: &str = "\
gazpatxo rock : valencia: 28-02-2022  :1  :rock:punk : hiphop\n\
black sound fest:badajoz:05-02-2022:  21:rock:  blues\n\
guitar bcn:barcelona: 28-01-2022 :  170:indie:pop:fusion\n\
  benidorm fest:benidorm:26-01-2022:3:indie: pop  :rock\n";

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 2, 10).unwrap()
}

fn loaded_agenda() -> Agenda {
    let mut agenda = Agenda::new();
    let summary = load_agenda(AGENDA_TEXT, &mut agenda);
    assert_eq!(summary.added, 4);
    assert_eq!(summary.skipped, 0);
    agenda
}

fn singleton(venue: &str) -> HashSet<String> {
    HashSet::from([venue.to_string()])
}

#[test]
fn tracks_only_months_with_festivals_in_calendar_order() {
    let agenda = loaded_agenda();

    let months: Vec<Month> = agenda.months().collect();
    assert_eq!(months, [Month::January, Month::February]);

    assert_eq!(agenda.count_in_month(Month::January), 2);
    assert_eq!(agenda.count_in_month(Month::February), 2);
    assert_eq!(agenda.count_in_month(Month::March), -1);
}

#[test]
fn renders_sorted_agenda_with_lifecycle_statuses() {
    let rendered = loaded_agenda().render(today());

    // Months in calendar order, each month's festivals in name order.
    let positions: Vec<usize> = [
        "JANUARY:",
        "Benidorm Fest",
        "Guitar Bcn",
        "FEBRUARY:",
        "Black Sound Fest",
        "Gazpatxo Rock",
    ]
    .iter()
    .map(|needle| rendered.find(needle).expect(needle))
    .collect();
    assert!(positions.is_sorted());

    // On 2022-02-10: Benidorm Fest ended Jan 29, Guitar Bcn and Black Sound
    // Fest are running, Gazpatxo Rock starts in 18 days.
    assert!(rendered.contains("Benidorm Fest [INDIE, POP, ROCK]"));
    assert!(rendered.contains("26 Jan 2022 - 29 Jan 2022 (concluded)"));
    assert!(rendered.contains("28 Jan 2022 - 17 Jul 2022 (ongoing)"));
    assert!(rendered.contains("28 Feb 2022 (18 days remaining)"));
}

#[test]
fn groups_by_full_style_set_across_months() {
    let groups = loaded_agenda().group_by_style();

    let labels: Vec<&str> = groups.keys().map(String::as_str).collect();
    assert_eq!(
        labels,
        [
            "[INDIE, POP, FUSION]",
            "[INDIE, POP, ROCK]",
            "[ROCK, BLUES]",
            "[ROCK, PUNK, HIPHOP]",
        ]
    );
    assert_eq!(groups["[INDIE, POP, ROCK]"], ["Benidorm Fest"]);
    assert_eq!(groups["[ROCK, PUNK, HIPHOP]"], ["Gazpatxo Rock"]);
}

#[test]
fn cancels_only_unconcluded_festivals_at_the_matching_venue() {
    let mut agenda = loaded_agenda();

    // Gazpatxo Rock has not started yet, so it goes.
    assert_eq!(agenda.cancel(&singleton("VALENCIA"), Month::February, today()), 1);
    assert_eq!(agenda.count_in_month(Month::February), 1);

    // Benidorm Fest concluded in January and is immune.
    assert_eq!(agenda.cancel(&singleton("BENIDORM"), Month::January, today()), 0);
    assert_eq!(agenda.count_in_month(Month::January), 2);

    // Untracked month keeps the sentinel.
    assert_eq!(agenda.cancel(&singleton("VALENCIA"), Month::March, today()), -1);
}

#[test]
fn cancelling_a_months_last_festival_drops_the_key() {
    let mut agenda = loaded_agenda();

    assert_eq!(agenda.cancel(&singleton("VALENCIA"), Month::February, today()), 1);
    // Black Sound Fest is ongoing, not concluded, so it can still be cancelled.
    assert_eq!(agenda.cancel(&singleton("BADAJOZ"), Month::February, today()), 1);

    assert_eq!(agenda.count_in_month(Month::February), -1);
    assert_eq!(agenda.months().collect::<Vec<_>>(), [Month::January]);
}

#[test]
fn multi_venue_sets_never_match() {
    let mut agenda = loaded_agenda();
    let venues: HashSet<String> = ["VALENCIA", "BADAJOZ"]
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(agenda.cancel(&venues, Month::February, today()), 0);
    assert_eq!(agenda.count_in_month(Month::February), 2);
}
