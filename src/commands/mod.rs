pub mod add;
pub mod bulk;
pub mod calendar;
pub mod clients;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod redo;
pub mod remind;
pub mod reorder;
pub mod schedule;
pub mod show;
pub mod stats;
pub mod undo;

pub use crate::utils::create_spinner;

use anyhow::Result;
use chrono::Local;

use meetdash_core::schedule::Schedule;

use crate::utils::when;

/// Build the `next_meeting` wire value from raw text or date/time parts,
/// merging with whatever the field already holds: parts left out keep
/// their existing value. Past dates are rejected here, before any
/// network call.
pub(crate) fn resolve_next_meeting(
    raw: Option<String>,
    date: Option<&str>,
    time: Option<&str>,
    notes: Option<&str>,
    existing: Schedule,
) -> Result<Option<String>> {
    if let Some(raw) = raw {
        let trimmed = raw.trim();
        return Ok(if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        });
    }

    let date = match date {
        Some(input) => {
            let parsed = when::parse_date(input)?;
            when::ensure_not_past(parsed, Local::now().date_naive())?;
            Some(parsed)
        }
        None => existing.date,
    };

    if date.is_none() && time.is_some() {
        anyhow::bail!("--next-time requires --next-date");
    }

    let time = match time {
        Some(input) => Some(when::parse_time(input)?),
        None => existing.time,
    };

    let notes = match notes {
        Some(n) => n.to_string(),
        None => existing.notes,
    };

    Ok(Schedule::new(date, time, notes).encode())
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- resolve_next_meeting ---

    #[test]
    fn notes_only_change_keeps_the_scheduled_date() {
        let existing = Schedule::decode("Fri, Dec 6, 2024 at 2:00 PM - call back");
        let out = resolve_next_meeting(None, None, None, Some("bring contract"), existing).unwrap();
        assert_eq!(
            out.as_deref(),
            Some("Fri, Dec 6, 2024 at 2:00 PM - bring contract")
        );
    }

    #[test]
    fn new_date_keeps_existing_notes() {
        let existing = Schedule::decode("Fri, Dec 6, 2024 - call back");
        let out = resolve_next_meeting(None, Some("2099-01-01"), None, None, existing).unwrap();
        assert_eq!(out.as_deref(), Some("Thu, Jan 1, 2099 - call back"));
    }

    #[test]
    fn raw_text_replaces_everything() {
        let existing = Schedule::decode("Fri, Dec 6, 2024 - call back");
        let out = resolve_next_meeting(Some("tbd".to_string()), None, None, None, existing).unwrap();
        assert_eq!(out.as_deref(), Some("tbd"));

        let out = resolve_next_meeting(Some("  ".to_string()), None, None, None, Schedule::default())
            .unwrap();
        assert_eq!(out, None);
    }

    #[test]
    fn time_without_any_date_is_rejected() {
        let result = resolve_next_meeting(None, None, Some("14:00"), None, Schedule::default());
        assert!(result.is_err());
    }

    #[test]
    fn nothing_set_yields_no_value() {
        let out = resolve_next_meeting(None, None, None, None, Schedule::default()).unwrap();
        assert_eq!(out, None);
    }
}
