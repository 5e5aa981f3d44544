//! Meeting record types.
//!
//! These mirror the JSON shapes of the dashboard server's REST API. The
//! server owns identity, ordering and timestamps; the client only ever
//! submits the writable subset ([`MeetingDraft`]).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel the dashboard uses for "no value" in free-text fields.
pub const EMPTY_FIELD: &str = "-";

/// A meeting record as stored by the dashboard server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingRecord {
    /// Server-assigned id, stable and unique.
    pub id: i64,
    /// Client name; groups records.
    pub client: String,
    /// Position within this client's sequence of updates (1-based,
    /// contiguous). Only the server mutates it, via the reorder operation.
    pub client_order: i64,
    pub people_connected: Option<String>,
    pub actions: Option<String>,
    /// Free text that may carry a leading formatted date/time token,
    /// e.g. `"Fri, Dec 6, 2024 at 2:00 PM - call back"`. See [`crate::schedule`].
    pub next_meeting: Option<String>,
    pub address: Option<String>,
    pub actions_taken: Option<String>,
    /// Calendar date the record was captured, independent of `next_meeting`.
    #[serde(default)]
    pub meeting_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MeetingRecord {
    /// The client-writable fields of this record, for resubmission.
    pub fn draft(&self) -> MeetingDraft {
        MeetingDraft {
            client: self.client.clone(),
            people_connected: self.people_connected.clone(),
            actions: self.actions.clone(),
            next_meeting: self.next_meeting.clone(),
            address: self.address.clone(),
            actions_taken: self.actions_taken.clone(),
            meeting_date: self.meeting_date,
        }
    }
}

/// The writable subset of a record, used as the create/update payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeetingDraft {
    pub client: String,
    pub people_connected: Option<String>,
    pub actions: Option<String>,
    pub next_meeting: Option<String>,
    pub address: Option<String>,
    pub actions_taken: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_date: Option<NaiveDate>,
}

/// True when a free-text field carries a real value: present, non-empty,
/// and not the `"-"` sentinel.
pub fn has_value(field: Option<&str>) -> bool {
    matches!(field, Some(v) if !v.is_empty() && v != EMPTY_FIELD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_value_rejects_sentinel_and_empty() {
        assert!(has_value(Some("call back")));
        assert!(!has_value(Some("-")));
        assert!(!has_value(Some("")));
        assert!(!has_value(None));
    }

    #[test]
    fn draft_drops_server_owned_fields() {
        let json = r#"{
            "id": 7,
            "client": "Acme",
            "client_order": 2,
            "people_connected": "Jo",
            "actions": null,
            "next_meeting": "Fri, Dec 6, 2024 - call back",
            "address": null,
            "actions_taken": "-",
            "meeting_date": "2024-12-01",
            "created_at": "2024-12-01T10:00:00Z",
            "updated_at": "2024-12-01T10:00:00Z"
        }"#;
        let record: MeetingRecord = serde_json::from_str(json).unwrap();
        let draft = record.draft();
        assert_eq!(draft.client, "Acme");
        assert_eq!(draft.next_meeting.as_deref(), Some("Fri, Dec 6, 2024 - call back"));

        // The draft serializes without id/order/timestamps.
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("client_order").is_none());
        assert!(value.get("created_at").is_none());
    }
}
