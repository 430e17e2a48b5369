//! Genre list encoding helpers
//!
//! Venues and artists store their genre lists in a single TEXT column as a
//! colon-delimited string (e.g. `"Jazz:Reggae:Swing"`). These helpers are the
//! only place that delimiter appears: callers split at read time and join at
//! write time, and never hand a raw stored string to a template.

/// Delimiter used in the stored genre column.
const GENRE_DELIMITER: char = ':';

/// Split a stored genre string into individual genre names.
///
/// Whitespace around each name is trimmed and empty segments are dropped,
/// so an empty or all-delimiter string produces an empty list rather than
/// a list containing empty strings.
///
/// # Examples
///
/// ```
/// use marquee::genres;
///
/// assert_eq!(genres::split("Jazz:Reggae:Swing"), vec!["Jazz", "Reggae", "Swing"]);
/// assert_eq!(genres::split("Rock n Roll"), vec!["Rock n Roll"]);
/// assert!(genres::split("").is_empty());
/// ```
pub fn split(stored: &str) -> Vec<String> {
    stored
        .split(GENRE_DELIMITER)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join genre names into the stored colon-delimited form.
///
/// # Examples
///
/// ```
/// use marquee::genres;
///
/// let list = vec!["Jazz".to_string(), "Classical".to_string()];
/// assert_eq!(genres::join(&list), "Jazz:Classical");
/// assert_eq!(genres::join(&[]), "");
/// ```
pub fn join(list: &[String]) -> String {
    list.join(&GENRE_DELIMITER.to_string())
}

/// Parse the comma-separated genre field submitted by the HTML forms.
///
/// Users type genres as free text (`"Jazz, Folk"`); this trims each entry
/// and drops empties so stray commas do not produce blank genres.
///
/// # Examples
///
/// ```
/// use marquee::genres;
///
/// assert_eq!(genres::from_form("Jazz, Folk"), vec!["Jazz", "Folk"]);
/// assert_eq!(genres::from_form("Jazz,,Folk,"), vec!["Jazz", "Folk"]);
/// assert!(genres::from_form("  ").is_empty());
/// ```
pub fn from_form(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
