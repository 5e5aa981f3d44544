//! TUI rendering for meeting records.
//!
//! Extension trait adding colored terminal rendering to core types using
//! owo_colors, plus the grouped-by-client list layout.

use chrono::NaiveDate;
use owo_colors::OwoColorize;

use meetdash_core::meeting::{MeetingRecord, has_value};
use meetdash_core::schedule::Schedule;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for MeetingRecord {
    fn render(&self) -> String {
        format!(
            "{} {}",
            format!("#{}", self.id).dimmed(),
            self.client.bold()
        )
    }
}

/// Colorize a days-left count: overdue red, imminent yellow, distant dimmed.
fn render_days_left(days: i64) -> String {
    match days {
        d if d < 0 => format!("{}d ago", -d).red().to_string(),
        0 => "today".yellow().bold().to_string(),
        1 => "tomorrow".yellow().to_string(),
        d if d <= 7 => format!("in {}d", d).yellow().to_string(),
        d => format!("in {}d", d).dimmed().to_string(),
    }
}

/// One list line: id, order within the client, and the next meeting with
/// its days-left badge when the field carries a date.
fn render_line(record: &MeetingRecord, today: NaiveDate) -> String {
    let mut line = format!(
        "   {} {}",
        format!("#{}", record.id).dimmed(),
        format!("[{}]", record.client_order).dimmed()
    );

    if has_value(record.next_meeting.as_deref()) {
        let text = record.next_meeting.as_deref().unwrap_or_default();
        line.push_str(&format!(" {}", text));

        let schedule = Schedule::decode(text);
        if let Some(days) = schedule.days_left(today) {
            line.push_str(&format!(" ({})", render_days_left(days)));
        }
    } else if has_value(record.actions.as_deref()) {
        line.push_str(&format!(
            " {}",
            record.actions.as_deref().unwrap_or_default().dimmed()
        ));
    }

    line
}

/// Render records grouped by client, preserving the server's order.
pub fn render_grouped(records: &[&MeetingRecord], today: NaiveDate) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current_client: Option<&str> = None;

    for record in records {
        if current_client != Some(record.client.as_str()) {
            if current_client.is_some() {
                lines.push(String::new());
            }
            let count = records
                .iter()
                .filter(|r| r.client == record.client)
                .count();
            lines.push(format!(
                "{} {}",
                record.client.bold(),
                format!("({} {})", count, pluralize("update", count)).dimmed()
            ));
            current_client = Some(record.client.as_str());
        }

        lines.push(render_line(record, today));
    }

    lines.join("\n")
}

/// Render every field of one record, sentinel fields shown as empty.
pub fn render_details(record: &MeetingRecord, today: NaiveDate) -> String {
    let mut lines = vec![
        record.render(),
        render_field("People connected", record.people_connected.as_deref()),
        render_field("Actions", record.actions.as_deref()),
        render_field("Next meeting", record.next_meeting.as_deref()),
        render_field("Address", record.address.as_deref()),
        render_field("Actions taken", record.actions_taken.as_deref()),
    ];

    if has_value(record.next_meeting.as_deref()) {
        let schedule = Schedule::decode(record.next_meeting.as_deref().unwrap_or_default());
        if let Some(days) = schedule.days_left(today) {
            lines.push(format!("   {}: {}", "Due".dimmed(), render_days_left(days)));
        }
    }

    if let Some(date) = record.meeting_date {
        lines.push(format!("   {}: {}", "Recorded".dimmed(), date));
    }

    lines.join("\n")
}

fn render_field(label: &str, value: Option<&str>) -> String {
    let rendered = if has_value(value) {
        value.unwrap_or_default().to_string()
    } else {
        "(none)".dimmed().to_string()
    };
    format!("   {}: {}", label.dimmed(), rendered)
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_record(id: i64, client: &str, order: i64) -> MeetingRecord {
        MeetingRecord {
            id,
            client: client.to_string(),
            client_order: order,
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

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()
    }

    // --- render_days_left ---

    #[test]
    fn days_left_labels() {
        assert!(render_days_left(0).contains("today"));
        assert!(render_days_left(1).contains("tomorrow"));
        assert!(render_days_left(5).contains("in 5d"));
        assert!(render_days_left(-3).contains("3d ago"));
    }

    // --- render_grouped ---

    #[test]
    fn grouped_output_has_one_header_per_client() {
        let a1 = make_record(1, "Acme", 1);
        let a2 = make_record(2, "Acme", 2);
        let b = make_record(3, "Globex", 1);

        let records = vec![&a1, &a2, &b];
        let out = render_grouped(&records, today());

        assert_eq!(out.matches("Acme").count(), 1);
        assert!(out.contains("(2 updates)"));
        assert!(out.contains("(1 update)"));
        assert!(out.contains("#1"));
        assert!(out.contains("#3"));
    }

    #[test]
    fn grouped_line_shows_days_left_badge() {
        let mut a = make_record(1, "Acme", 1);
        a.next_meeting = Some("Mon, Dec 2, 2024 - call back".to_string());

        let records = vec![&a];
        let out = render_grouped(&records, today());
        assert!(out.contains("tomorrow"));
    }

    // --- render_details ---

    #[test]
    fn details_mask_sentinel_fields() {
        let mut a = make_record(1, "Acme", 1);
        a.actions = Some("-".to_string());
        a.address = Some("12 Main St".to_string());

        let out = render_details(&a, today());
        assert!(out.contains("(none)"));
        assert!(out.contains("12 Main St"));
    }
}
