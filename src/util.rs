// Month normalization and console formatting helpers.
//
// This module centralizes the month-name handling so the aggregation
// passes can assume canonical 3-letter labels and a chronological rank.
use num_format::{Locale, ToFormattedString};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Full uppercase Portuguese month name → canonical abbreviation, in
/// calendar order. The array position doubles as the chronological rank.
pub const MONTHS: [(&str, &str); 12] = [
    ("JANEIRO", "Jan"),
    ("FEVEREIRO", "Fev"),
    ("MARÇO", "Mar"),
    ("ABRIL", "Abr"),
    ("MAIO", "Mai"),
    ("JUNHO", "Jun"),
    ("JULHO", "Jul"),
    ("AGOSTO", "Ago"),
    ("SETEMBRO", "Set"),
    ("OUTUBRO", "Out"),
    ("NOVEMBRO", "Nov"),
    ("DEZEMBRO", "Dez"),
];

/// Rank assigned to abbreviations outside the canonical sequence, so
/// unrecognized months sort after December.
pub const UNKNOWN_MONTH_RANK: usize = 99;

static MONTH_ABBREV: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| MONTHS.iter().copied().collect());

/// Normalize a raw month string to its 3-letter form.
///
/// Lookup is case-sensitive; anything not in the table falls back to its
/// first three characters, unmodified. The fallback counts characters,
/// not bytes, so accented names are never split mid-character.
pub fn month_abbrev(raw: &str) -> String {
    match MONTH_ABBREV.get(raw) {
        Some(abbrev) => (*abbrev).to_string(),
        None => raw.chars().take(3).collect(),
    }
}

/// Chronological rank of a normalized month name (0 = Jan, 11 = Dez).
///
/// Abbreviations produced by the fallback path do not match the
/// canonical sequence and receive [`UNKNOWN_MONTH_RANK`].
pub fn month_rank(abbrev: &str) -> usize {
    MONTHS
        .iter()
        .position(|(_, a)| *a == abbrev)
        .unwrap_or(UNKNOWN_MONTH_RANK)
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Thin wrapper around `num-format` for counts in console messages
    // (e.g., `1,248 rows loaded`).
    n.to_formatted_string(&Locale::en)
}
