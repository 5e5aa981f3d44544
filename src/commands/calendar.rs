use std::collections::BTreeMap;
use std::collections::HashSet;

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use owo_colors::OwoColorize;

use meetdash_core::MeetingRecord;
use meetdash_core::schedule::Schedule;

use super::create_spinner;
use crate::client::RemoteStore;
use crate::state::AppState;

/// Month agenda: every record whose capture date or scheduled next meeting
/// falls in the month, grouped by day.
pub async fn run(state: &mut AppState, store: &RemoteStore, month: Option<String>) -> Result<()> {
    let first = match month {
        Some(input) => parse_month(&input)?,
        None => Local::now().date_naive().with_day(1).unwrap_or_default(),
    };

    let spinner = create_spinner("Fetching meetings");
    let result = state.refresh(store).await;
    spinner.finish_and_clear();
    result?;

    let days = collect_month(&state.records, first.year(), first.month());

    println!("{}", first.format("%B %Y").to_string().bold());

    if days.is_empty() {
        println!("{}", "No meetings this month".dimmed());
        return Ok(());
    }

    for (date, entries) in days {
        println!();
        println!("{}", date.format("%a, %b %-d").to_string().bold());
        for (id, client, kind) in entries {
            println!(
                "   {} {} {}",
                format!("#{id}").dimmed(),
                client,
                format!("({kind})").dimmed()
            );
        }
    }

    Ok(())
}

fn parse_month(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", input.trim()), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid month \"{}\", expected YYYY-MM", input))
}

/// Day-keyed agenda entries for one month. A record can appear on its
/// capture date and on its scheduled date, but never twice on the same day.
fn collect_month(
    records: &[MeetingRecord],
    year: i32,
    month: u32,
) -> BTreeMap<NaiveDate, Vec<(i64, String, &'static str)>> {
    let mut days: BTreeMap<NaiveDate, Vec<(i64, String, &'static str)>> = BTreeMap::new();
    let mut seen: HashSet<(NaiveDate, i64)> = HashSet::new();

    let mut push = |date: NaiveDate, record: &MeetingRecord, kind: &'static str| {
        if date.year() == year && date.month() == month && seen.insert((date, record.id)) {
            days.entry(date)
                .or_default()
                .push((record.id, record.client.clone(), kind));
        }
    };

    for record in records {
        if let Some(date) = record.meeting_date {
            push(date, record, "recorded");
        }

        if let Some(text) = &record.next_meeting {
            let schedule = Schedule::decode(text);
            if let Some(date) = schedule.date {
                push(date, record, "next meeting");
            }
        }
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_record(id: i64, client: &str) -> MeetingRecord {
        MeetingRecord {
            id,
            client: client.to_string(),
            client_order: 1,
            people_connected: None,
            actions: None,
            next_meeting: None,
            address: None,
            actions_taken: None,
            meeting_date: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    // --- parse_month ---

    #[test]
    fn parse_month_accepts_yyyy_mm() {
        assert_eq!(
            parse_month("2024-12").unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()
        );
        assert!(parse_month("december").is_err());
    }

    // --- collect_month ---

    #[test]
    fn collects_capture_and_scheduled_dates() {
        let mut a = make_record(1, "Acme");
        a.meeting_date = Some(NaiveDate::from_ymd_opt(2024, 12, 2).unwrap());
        a.next_meeting = Some("Fri, Dec 6, 2024 at 2:00 PM - call back".to_string());

        let days = collect_month(&[a], 2024, 12);
        assert_eq!(days.len(), 2);
        assert!(days.contains_key(&NaiveDate::from_ymd_opt(2024, 12, 2).unwrap()));
        assert!(days.contains_key(&NaiveDate::from_ymd_opt(2024, 12, 6).unwrap()));
    }

    #[test]
    fn skips_other_months_and_dedupes_same_day() {
        let mut a = make_record(1, "Acme");
        a.meeting_date = Some(NaiveDate::from_ymd_opt(2024, 12, 6).unwrap());
        a.next_meeting = Some("Fri, Dec 6, 2024 - same day".to_string());
        let mut b = make_record(2, "Globex");
        b.meeting_date = Some(NaiveDate::from_ymd_opt(2025, 1, 3).unwrap());

        let days = collect_month(&[a, b], 2024, 12);
        assert_eq!(days.len(), 1);
        let entries = &days[&NaiveDate::from_ymd_opt(2024, 12, 6).unwrap()];
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn days_come_out_sorted() {
        let mut a = make_record(1, "Acme");
        a.meeting_date = Some(NaiveDate::from_ymd_opt(2024, 12, 20).unwrap());
        let mut b = make_record(2, "Globex");
        b.meeting_date = Some(NaiveDate::from_ymd_opt(2024, 12, 3).unwrap());

        let days = collect_month(&[a, b], 2024, 12);
        let dates: Vec<_> = days.keys().copied().collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 12, 3).unwrap(),
                NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
            ]
        );
    }
}
