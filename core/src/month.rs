// SPDX-FileCopyrightText: 2026 festa contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, NaiveDate};
use strum::VariantArray;

/// A calendar month.
///
/// `Ord` follows calendar order (January through December), so a `BTreeMap`
/// keyed by `Month` enumerates in calendar order rather than insertion order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::VariantArray,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Month {
    /// January.
    January,

    /// February.
    February,

    /// March.
    March,

    /// April.
    April,

    /// May.
    May,

    /// June.
    June,

    /// July.
    July,

    /// August.
    August,

    /// September.
    September,

    /// October.
    October,

    /// November.
    November,

    /// December.
    December,
}

impl Month {
    /// The month the given date falls in.
    ///
    /// This is the only way an agenda key is ever derived: always from a
    /// festival's start date, never set independently.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::VARIANTS[date.month0() as usize]
    }

    /// 1-based month number; January is 1.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn derives_month_from_date() {
        assert_eq!(Month::from_date(date(2024, 1, 31)), Month::January);
        assert_eq!(Month::from_date(date(2024, 6, 10)), Month::June);
        assert_eq!(Month::from_date(date(2024, 12, 1)), Month::December);
    }

    #[test]
    fn orders_months_by_calendar_position() {
        assert!(Month::January < Month::February);
        assert!(Month::June < Month::December);

        let mut shuffled = [Month::March, Month::January, Month::December];
        shuffled.sort();
        assert_eq!(shuffled, [Month::January, Month::March, Month::December]);
    }

    #[test]
    fn exposes_one_based_number() {
        assert_eq!(Month::January.number(), 1);
        assert_eq!(Month::December.number(), 12);
    }

    #[test]
    fn round_trips_display_and_parse() {
        assert_eq!(Month::June.to_string(), "JUNE");
        assert_eq!("june".parse(), Ok(Month::June));
        assert!("junio".parse::<Month>().is_err());
    }
}
