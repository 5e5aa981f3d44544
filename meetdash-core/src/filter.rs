//! Pure filtering over a fetched record set.
//!
//! The dashboard filters the in-memory cache rather than re-querying the
//! server: a free-text query matched against every searchable field, plus a
//! status predicate on the `next_meeting` / `actions_taken` fields. Both
//! must hold for a record to be included.

use crate::meeting::{MeetingRecord, has_value};

/// Status predicate applied alongside the free-text query.
///
/// "Has" means present and not the `"-"` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    HasNextMeeting,
    NoNextMeeting,
    HasActionsTaken,
    NoActionsTaken,
}

/// Filter records by a case-insensitive substring query and a status
/// predicate. Order-preserving: the result keeps the input sequence.
pub fn filter<'a>(
    records: &'a [MeetingRecord],
    query: Option<&str>,
    status: Option<StatusFilter>,
) -> Vec<&'a MeetingRecord> {
    let query = query
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty());

    records
        .iter()
        .filter(|record| {
            if let Some(q) = &query
                && !searchable_text(record).contains(q.as_str())
            {
                return false;
            }

            match status {
                Some(StatusFilter::HasNextMeeting) => has_value(record.next_meeting.as_deref()),
                Some(StatusFilter::NoNextMeeting) => !has_value(record.next_meeting.as_deref()),
                Some(StatusFilter::HasActionsTaken) => has_value(record.actions_taken.as_deref()),
                Some(StatusFilter::NoActionsTaken) => !has_value(record.actions_taken.as_deref()),
                None => true,
            }
        })
        .collect()
}

/// The six searchable fields joined with spaces, lowercased.
fn searchable_text(record: &MeetingRecord) -> String {
    [
        record.client.as_str(),
        record.people_connected.as_deref().unwrap_or(""),
        record.actions.as_deref().unwrap_or(""),
        record.next_meeting.as_deref().unwrap_or(""),
        record.address.as_deref().unwrap_or(""),
        record.actions_taken.as_deref().unwrap_or(""),
    ]
    .join(" ")
    .to_lowercase()
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

    #[test]
    fn query_matches_any_field_case_insensitive() {
        let mut a = make_record(1, "Acme");
        a.people_connected = Some("Jane Smith".to_string());
        let b = make_record(2, "Globex");

        let records = vec![a, b];
        let hits = filter(&records, Some("SMITH"), None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn query_and_status_must_both_hold() {
        let mut a = make_record(1, "Smith & Co");
        a.next_meeting = Some("Fri, Dec 6, 2024 - call back".to_string());
        let mut b = make_record(2, "Smithers Ltd");
        b.next_meeting = Some("-".to_string());
        let c = make_record(3, "Acme");

        let records = vec![a, b, c];
        let hits = filter(&records, Some("smith"), Some(StatusFilter::HasNextMeeting));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn sentinel_counts_as_absent() {
        let mut a = make_record(1, "Acme");
        a.actions_taken = Some("-".to_string());
        let mut b = make_record(2, "Globex");
        b.actions_taken = Some("sent proposal".to_string());

        let records = vec![a, b];
        let hits = filter(&records, None, Some(StatusFilter::NoActionsTaken));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn preserves_input_order() {
        let records = vec![
            make_record(3, "Acme"),
            make_record(1, "Acme"),
            make_record(2, "Acme"),
        ];
        let hits = filter(&records, Some("acme"), None);
        let ids: Vec<i64> = hits.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn blank_query_matches_everything() {
        let records = vec![make_record(1, "Acme"), make_record(2, "Globex")];
        assert_eq!(filter(&records, Some("   "), None).len(), 2);
        assert_eq!(filter(&records, None, None).len(), 2);
    }
}
