// SPDX-FileCopyrightText: 2026 festa contributors
//
// SPDX-License-Identifier: Apache-2.0

/// A tag from the closed set of musical genres a festival can carry.
///
/// Display renders the uppercase tag name; parsing accepts any letter case
/// and rejects tags outside the set.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Style {
    /// Blues.
    Blues,

    /// Fusion.
    Fusion,

    /// Hip hop.
    HipHop,

    /// Indie.
    Indie,

    /// Pop.
    Pop,

    /// Punk.
    Punk,

    /// Rock.
    Rock,
}

/// Renders a style set as a bracketed label, e.g. `[ROCK, PUNK]`.
///
/// The label preserves the order the styles were supplied in. It is the
/// grouping key used by [`Agenda::group_by_style`](crate::Agenda::group_by_style)
/// and part of [`Festival::display`](crate::Festival::display), so it must
/// stay byte-for-byte reproducible.
pub fn format_styles(styles: &[Style]) -> String {
    let tags: Vec<&str> = styles.iter().map(<&str>::from).collect();
    format!("[{}]", tags.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tags_case_insensitively() {
        assert_eq!("rock".parse(), Ok(Style::Rock));
        assert_eq!("HIPHOP".parse(), Ok(Style::HipHop));
        assert_eq!("Blues".parse(), Ok(Style::Blues));
    }

    #[test]
    fn rejects_unknown_tags() {
        assert!("salsa".parse::<Style>().is_err());
        assert!("".parse::<Style>().is_err());
    }

    #[test]
    fn displays_uppercase_tag() {
        assert_eq!(Style::HipHop.to_string(), "HIPHOP");
        assert_eq!(Style::Rock.to_string(), "ROCK");
    }

    #[test]
    fn formats_style_set_label_in_given_order() {
        assert_eq!(format_styles(&[Style::Rock, Style::Punk]), "[ROCK, PUNK]");
        assert_eq!(format_styles(&[Style::Punk, Style::Rock]), "[PUNK, ROCK]");
        assert_eq!(format_styles(&[Style::Indie]), "[INDIE]");
    }
}
