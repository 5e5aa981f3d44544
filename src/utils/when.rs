//! Parsing of user-supplied dates and times.
//!
//! Dates accept ISO (`2025-03-20`) or natural language (`tomorrow`,
//! `next friday`, `dec 6`); times accept `14:30` or `2:30 pm`.

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};

/// Parse a date argument. ISO format wins; anything else goes through the
/// natural-language parser with common abbreviations expanded first.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d") {
        return Ok(date);
    }

    let expanded = expand_abbreviations(input);
    let dt = fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))?;

    Ok(dt.date())
}

/// Parse a time argument, 24-hour or 12-hour with meridiem.
pub fn parse_time(input: &str) -> Result<NaiveTime> {
    let trimmed = input.trim();

    if let Ok(time) = NaiveTime::parse_from_str(trimmed, "%H:%M") {
        return Ok(time);
    }

    let upper = trimmed.to_uppercase();
    if let Ok(time) = NaiveTime::parse_from_str(&upper, "%I:%M %p") {
        return Ok(time);
    }

    // Hour-only forms like "9 am" carry no minutes, which chrono requires.
    let mut parts = upper.split_whitespace();
    if let (Some(hour), Some(meridiem), None) = (parts.next(), parts.next(), parts.next())
        && let Ok(time) = NaiveTime::parse_from_str(&format!("{hour}:00 {meridiem}"), "%I:%M %p")
    {
        return Ok(time);
    }

    anyhow::bail!("Could not parse time: \"{}\"", input)
}

/// Reject dates before `today`. Scheduling in the past is a user error
/// caught before any request is sent.
pub fn ensure_not_past(date: NaiveDate, today: NaiveDate) -> Result<()> {
    if date < today {
        anyhow::bail!("Cannot schedule a meeting in the past: {}", date);
    }
    Ok(())
}

/// Expand day/month abbreviations that fuzzydate doesn't handle.
fn expand_abbreviations(input: &str) -> String {
    let lower = input.to_lowercase();

    lower
        .split_whitespace()
        .map(|word| match word {
            "mon" => "monday",
            "tue" | "tues" => "tuesday",
            "wed" => "wednesday",
            "thu" | "thur" | "thurs" => "thursday",
            "fri" => "friday",
            "sat" => "saturday",
            "sun" => "sunday",
            "jan" => "january",
            "feb" => "february",
            "mar" => "march",
            "apr" => "april",
            "jun" => "june",
            "jul" => "july",
            "aug" => "august",
            "sep" | "sept" => "september",
            "oct" => "october",
            "nov" => "november",
            "dec" => "december",
            other => other,
        })
        .collect::<Vec<_>>()
        .join(" ")
}
