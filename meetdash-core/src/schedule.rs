//! The date-prefix encoding inside the `next_meeting` field.
//!
//! The dashboard stores a human-readable date (and optional time) token in
//! front of free-text notes, in one string field:
//!
//! ```text
//! Fri, Dec 6, 2024 at 2:00 PM - call back
//! ```
//!
//! This module splits that token apart and reassembles it, so the rest of
//! the code can treat date, time and notes as separate values while the
//! wire format stays a single string. The server never interprets the
//! field, so the encoding must round-trip exactly.

use chrono::{NaiveDate, NaiveTime, Timelike};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A decoded `next_meeting` value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub notes: String,
}

impl Schedule {
    pub fn new(date: Option<NaiveDate>, time: Option<NaiveTime>, notes: impl Into<String>) -> Self {
        Schedule {
            date,
            time,
            notes: notes.into(),
        }
    }

    /// Split a `next_meeting` value into date, time and notes.
    ///
    /// The date token must sit at the start of the string. Text with no
    /// recognizable token decodes as notes only. Times without an AM/PM
    /// suffix are read as 24-hour.
    pub fn decode(text: &str) -> Schedule {
        let trimmed = text.trim();
        match split_date_token(trimmed) {
            Some((date, time, notes)) => Schedule {
                date: Some(date),
                time,
                notes: notes.to_string(),
            },
            None => Schedule {
                date: None,
                time: None,
                notes: trimmed.to_string(),
            },
        }
    }

    /// Reassemble the wire string: `Ddd, Mon D, YYYY[ at H:MM AM/PM][ - notes]`.
    ///
    /// Without a date, the notes pass through untouched. Returns `None`
    /// when there is nothing to store (the field should be null).
    pub fn encode(&self) -> Option<String> {
        let notes = self.notes.trim();

        let Some(date) = self.date else {
            return if notes.is_empty() {
                None
            } else {
                Some(notes.to_string())
            };
        };

        let mut out = date.format("%a, %b %-d, %Y").to_string();

        if let Some(time) = self.time {
            let hour = time.hour();
            let meridiem = if hour >= 12 { "PM" } else { "AM" };
            let display_hour = match hour % 12 {
                0 => 12,
                h => h,
            };
            out.push_str(&format!(" at {}:{:02} {}", display_hour, time.minute(), meridiem));
        }

        if !notes.is_empty() {
            out.push_str(" - ");
            out.push_str(notes);
        }

        Some(out)
    }

    /// Whole days between the scheduled date and `today`, both at midnight.
    /// Positive for future dates, negative for past ones.
    pub fn days_left(&self, today: NaiveDate) -> Option<i64> {
        self.date.map(|date| (date - today).num_days())
    }
}

/// Parse a leading `Ddd, Mon D, YYYY[ at H:MM[ AM/PM]]` token.
/// Returns the date, the optional time, and the remaining notes (with the
/// separating dash stripped).
fn split_date_token(text: &str) -> Option<(NaiveDate, Option<NaiveTime>, &str)> {
    let mut rest = text;

    let weekday = take_alpha(&mut rest)?;
    if !WEEKDAYS.iter().any(|w| w.eq_ignore_ascii_case(weekday)) {
        return None;
    }
    rest = rest.strip_prefix(',')?;
    rest = rest.trim_start();

    let month_name = take_alpha(&mut rest)?;
    let month = MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(month_name))? as u32
        + 1;
    rest = rest.trim_start();

    let day: u32 = take_digits(&mut rest)?.parse().ok()?;
    rest = rest.strip_prefix(',')?;
    rest = rest.trim_start();
    let year: i32 = take_digits(&mut rest)?.parse().ok()?;

    // Invalid calendar dates (Feb 30) mean the whole text is notes.
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    let mut time = None;
    let after_time = rest.trim_start();
    if let Some(candidate) = strip_word(after_time, "at")
        && let Some((parsed, remainder)) = take_time(candidate.trim_start())
    {
        time = Some(parsed);
        rest = remainder;
    }

    Some((date, time, strip_separator(rest)))
}

/// Parse `H:MM` with an optional `AM`/`PM` suffix; bare times are 24-hour.
fn take_time(text: &str) -> Option<(NaiveTime, &str)> {
    let mut rest = text;
    let mut hour: u32 = take_digits(&mut rest)?.parse().ok()?;
    rest = rest.strip_prefix(':')?;
    let minutes = take_digits(&mut rest)?;
    if minutes.len() != 2 {
        return None;
    }
    let minute: u32 = minutes.parse().ok()?;

    let after = rest.trim_start();
    if let Some(word) = peek_alpha(after) {
        if word.eq_ignore_ascii_case("pm") {
            if hour != 12 {
                hour += 12;
            }
            rest = &after[word.len()..];
        } else if word.eq_ignore_ascii_case("am") {
            if hour == 12 {
                hour = 0;
            }
            rest = &after[word.len()..];
        }
    }

    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some((time, rest))
}

/// Take a run of ASCII letters off the front of `rest`.
fn take_alpha<'a>(rest: &mut &'a str) -> Option<&'a str> {
    let end = rest
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let (token, remainder) = rest.split_at(end);
    *rest = remainder;
    Some(token)
}

/// Take a run of ASCII digits off the front of `rest`.
fn take_digits<'a>(rest: &mut &'a str) -> Option<&'a str> {
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let (token, remainder) = rest.split_at(end);
    *rest = remainder;
    Some(token)
}

/// The leading run of ASCII letters, without consuming it.
fn peek_alpha(text: &str) -> Option<&str> {
    let end = text
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(text.len());
    if end == 0 { None } else { Some(&text[..end]) }
}

/// Strip a whole word (case-insensitive) from the front, requiring a
/// boundary after it.
fn strip_word<'a>(text: &'a str, word: &str) -> Option<&'a str> {
    let head = text.get(..word.len())?;
    if !head.eq_ignore_ascii_case(word) {
        return None;
    }
    let rest = &text[word.len()..];
    match rest.chars().next() {
        Some(c) if c.is_ascii_alphanumeric() => None,
        _ => Some(rest),
    }
}

/// Strip the ` - ` separator between the date token and the notes. At most
/// one dash is consumed so notes that start with a dash survive.
fn strip_separator(rest: &str) -> &str {
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('-').unwrap_or(rest);
    rest.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    // --- decode ---

    #[test]
    fn decode_date_time_and_notes() {
        let s = Schedule::decode("Fri, Dec 6, 2024 at 2:00 PM - call back");
        assert_eq!(s.date, Some(date(2024, 12, 6)));
        assert_eq!(s.time, Some(time(14, 0)));
        assert_eq!(s.notes, "call back");
    }

    #[test]
    fn decode_date_only() {
        let s = Schedule::decode("Fri, Dec 6, 2024");
        assert_eq!(s.date, Some(date(2024, 12, 6)));
        assert_eq!(s.time, None);
        assert_eq!(s.notes, "");
    }

    #[test]
    fn decode_without_separator_dash() {
        let s = Schedule::decode("Fri, Dec 6, 2024 call back");
        assert_eq!(s.date, Some(date(2024, 12, 6)));
        assert_eq!(s.notes, "call back");
    }

    #[test]
    fn decode_plain_notes() {
        let s = Schedule::decode("waiting on contract");
        assert_eq!(s.date, None);
        assert_eq!(s.time, None);
        assert_eq!(s.notes, "waiting on contract");
    }

    #[test]
    fn decode_is_case_insensitive() {
        let s = Schedule::decode("fri, dec 6, 2024 at 2:00 pm - call back");
        assert_eq!(s.date, Some(date(2024, 12, 6)));
        assert_eq!(s.time, Some(time(14, 0)));
        assert_eq!(s.notes, "call back");
    }

    #[test]
    fn decode_24_hour_time() {
        let s = Schedule::decode("Mon, Jan 13, 2025 at 14:30 - prep deck");
        assert_eq!(s.time, Some(time(14, 30)));
        assert_eq!(s.notes, "prep deck");
    }

    #[test]
    fn decode_midnight_and_noon() {
        assert_eq!(
            Schedule::decode("Fri, Dec 6, 2024 at 12:15 AM").time,
            Some(time(0, 15))
        );
        assert_eq!(
            Schedule::decode("Fri, Dec 6, 2024 at 12:15 PM").time,
            Some(time(12, 15))
        );
    }

    #[test]
    fn decode_rejects_impossible_dates() {
        let s = Schedule::decode("Fri, Feb 30, 2024 - see notes");
        assert_eq!(s.date, None);
        assert_eq!(s.notes, "Fri, Feb 30, 2024 - see notes");
    }

    #[test]
    fn decode_date_not_at_start_is_notes() {
        let s = Schedule::decode("call back on Fri, Dec 6, 2024");
        assert_eq!(s.date, None);
        assert_eq!(s.notes, "call back on Fri, Dec 6, 2024");
    }

    // --- encode ---

    #[test]
    fn encode_date_time_and_notes() {
        let s = Schedule::new(Some(date(2024, 12, 6)), Some(time(14, 0)), "call back");
        assert_eq!(
            s.encode().as_deref(),
            Some("Fri, Dec 6, 2024 at 2:00 PM - call back")
        );
    }

    #[test]
    fn encode_date_alone() {
        let s = Schedule::new(Some(date(2024, 12, 6)), None, "");
        assert_eq!(s.encode().as_deref(), Some("Fri, Dec 6, 2024"));
    }

    #[test]
    fn encode_zero_pads_minutes_and_maps_twelve() {
        let s = Schedule::new(Some(date(2024, 12, 6)), Some(time(0, 5)), "");
        assert_eq!(s.encode().as_deref(), Some("Fri, Dec 6, 2024 at 12:05 AM"));

        let s = Schedule::new(Some(date(2024, 12, 6)), Some(time(12, 5)), "");
        assert_eq!(s.encode().as_deref(), Some("Fri, Dec 6, 2024 at 12:05 PM"));
    }

    #[test]
    fn encode_notes_only_passes_through() {
        let s = Schedule::new(None, None, "call back");
        assert_eq!(s.encode().as_deref(), Some("call back"));
        assert_eq!(Schedule::new(None, None, "").encode(), None);
    }

    // --- round trip ---

    #[test]
    fn round_trip_preserves_all_parts() {
        let original = Schedule::new(Some(date(2024, 12, 6)), Some(time(14, 0)), "call back");
        let encoded = original.encode().unwrap();
        assert_eq!(Schedule::decode(&encoded), original);
    }

    #[test]
    fn round_trip_without_time() {
        let original = Schedule::new(Some(date(2025, 3, 1)), None, "bring samples");
        let encoded = original.encode().unwrap();
        assert_eq!(Schedule::decode(&encoded), original);
    }

    #[test]
    fn round_trip_notes_with_leading_dash() {
        let original = Schedule::new(Some(date(2025, 3, 1)), None, "- urgent");
        let encoded = original.encode().unwrap();
        assert_eq!(Schedule::decode(&encoded), original);
    }

    // --- days_left ---

    #[test]
    fn days_left_relative_to_today() {
        let today = date(2024, 12, 6);
        let on = |d| Schedule::new(Some(d), None, "").days_left(today);

        assert_eq!(on(date(2024, 12, 6)), Some(0));
        assert_eq!(on(date(2024, 12, 7)), Some(1));
        assert_eq!(on(date(2024, 12, 5)), Some(-1));
        assert_eq!(on(date(2025, 1, 6)), Some(31));
    }

    #[test]
    fn days_left_without_date() {
        let s = Schedule::new(None, None, "no date here");
        assert_eq!(s.days_left(date(2024, 12, 6)), None);
    }
}
