//! HTTP client for the meeting dashboard server.

use serde::{Deserialize, Serialize};
use url::Url;

use meetdash_core::error::{MeetdashError, MeetdashResult};
use meetdash_core::store::MeetingStore;
use meetdash_core::{MeetingDraft, MeetingRecord};

/// HTTP client for the dashboard REST API.
///
/// Implements [`MeetingStore`] for the CRUD operations the undo/redo log
/// replays through; everything else (reorder, exports, stats) is exposed
/// as inherent methods.
pub struct RemoteStore {
    http: reqwest::Client,
    base_url: String,
}

// Request/response types matching the server API

#[derive(Deserialize)]
struct DetailResponse {
    detail: String,
}

#[derive(Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Deserialize)]
pub struct ClientInfo {
    pub name: String,
}

#[derive(Serialize)]
struct ReorderRequest {
    dragged_id: i64,
    target_id: i64,
}

#[derive(Serialize)]
struct IdsRequest {
    meeting_ids: Vec<i64>,
}

#[derive(Deserialize)]
pub struct ReminderResponse {
    pub success: bool,
    pub count: u64,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize)]
pub struct DashboardStats {
    pub total_clients: u64,
    pub active_clients: u64,
    pub upcoming_meetings: u64,
    pub meetings_today: u64,
    pub action_required: u64,
    pub total_meetings: u64,
}

fn connection_error(e: reqwest::Error) -> MeetdashError {
    MeetdashError::Store(format!("Failed to connect to server: {e}"))
}

fn decode_error(e: reqwest::Error) -> MeetdashError {
    MeetdashError::Store(format!("Invalid server response: {e}"))
}

/// Turn a non-2xx response into an error, preferring the server's own
/// `{detail}` message over the bare status code.
async fn check(resp: reqwest::Response) -> MeetdashResult<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    match resp.json::<DetailResponse>().await {
        Ok(err) => Err(MeetdashError::Store(err.detail)),
        Err(_) => Err(MeetdashError::Store(format!("Server returned {status}"))),
    }
}

impl RemoteStore {
    pub fn new(server_url: &str) -> Self {
        RemoteStore {
            http: reqwest::Client::new(),
            base_url: server_url.trim_end_matches('/').to_string(),
        }
    }

    /// POST /api/meetings/reorder
    pub async fn reorder(&self, dragged_id: i64, target_id: i64) -> MeetdashResult<()> {
        let resp = self
            .http
            .post(format!("{}/api/meetings/reorder", self.base_url))
            .json(&ReorderRequest {
                dragged_id,
                target_id,
            })
            .send()
            .await
            .map_err(connection_error)?;

        check(resp).await?;
        Ok(())
    }

    /// POST /api/meetings/bulk-delete
    pub async fn bulk_delete(&self, ids: Vec<i64>) -> MeetdashResult<MessageResponse> {
        let resp = self
            .http
            .post(format!("{}/api/meetings/bulk-delete", self.base_url))
            .json(&IdsRequest { meeting_ids: ids })
            .send()
            .await
            .map_err(connection_error)?;

        check(resp).await?.json().await.map_err(decode_error)
    }

    /// GET /api/clients
    pub async fn clients(&self) -> MeetdashResult<Vec<ClientInfo>> {
        let resp = self
            .http
            .get(format!("{}/api/clients", self.base_url))
            .send()
            .await
            .map_err(connection_error)?;

        check(resp).await?.json().await.map_err(decode_error)
    }

    /// GET /api/clients/:name/addresses
    pub async fn client_addresses(&self, name: &str) -> MeetdashResult<Vec<String>> {
        let resp = self
            .http
            .get(self.addresses_url(name)?)
            .send()
            .await
            .map_err(connection_error)?;

        check(resp).await?.json().await.map_err(decode_error)
    }

    /// Client names go into a path segment, so reserved characters must be
    /// percent-encoded or a name like "A/B" would hit the wrong route.
    fn addresses_url(&self, name: &str) -> MeetdashResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| MeetdashError::Store(format!("Invalid server URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| MeetdashError::Store("Invalid server URL".to_string()))?
            .pop_if_empty()
            .extend(["api", "clients", name, "addresses"]);
        Ok(url)
    }

    /// POST /api/export/excel
    pub async fn export_excel(&self, ids: Vec<i64>) -> MeetdashResult<Vec<u8>> {
        self.export("excel", ids).await
    }

    /// POST /api/export/pdf
    pub async fn export_pdf(&self, ids: Vec<i64>) -> MeetdashResult<Vec<u8>> {
        self.export("pdf", ids).await
    }

    async fn export(&self, format: &str, ids: Vec<i64>) -> MeetdashResult<Vec<u8>> {
        let resp = self
            .http
            .post(format!("{}/api/export/{}", self.base_url, format))
            .json(&IdsRequest { meeting_ids: ids })
            .send()
            .await
            .map_err(connection_error)?;

        let bytes = check(resp).await?.bytes().await.map_err(decode_error)?;
        Ok(bytes.to_vec())
    }

    /// POST /api/email/send-reminder
    pub async fn send_reminder(&self) -> MeetdashResult<ReminderResponse> {
        let resp = self
            .http
            .post(format!("{}/api/email/send-reminder", self.base_url))
            .send()
            .await
            .map_err(connection_error)?;

        check(resp).await?.json().await.map_err(decode_error)
    }

    /// GET /api/dashboard/stats
    pub async fn dashboard_stats(&self) -> MeetdashResult<DashboardStats> {
        let resp = self
            .http
            .get(format!("{}/api/dashboard/stats", self.base_url))
            .send()
            .await
            .map_err(connection_error)?;

        check(resp).await?.json().await.map_err(decode_error)
    }
}

impl MeetingStore for RemoteStore {
    /// GET /api/meetings
    async fn list(&self) -> MeetdashResult<Vec<MeetingRecord>> {
        let resp = self
            .http
            .get(format!("{}/api/meetings", self.base_url))
            .send()
            .await
            .map_err(connection_error)?;

        check(resp).await?.json().await.map_err(decode_error)
    }

    /// GET /api/meetings/:id
    async fn get(&self, id: i64) -> MeetdashResult<MeetingRecord> {
        let resp = self
            .http
            .get(format!("{}/api/meetings/{}", self.base_url, id))
            .send()
            .await
            .map_err(connection_error)?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(MeetdashError::MeetingNotFound(id));
        }

        check(resp).await?.json().await.map_err(decode_error)
    }

    /// POST /api/meetings
    async fn create(&self, draft: &MeetingDraft) -> MeetdashResult<MeetingRecord> {
        let resp = self
            .http
            .post(format!("{}/api/meetings", self.base_url))
            .json(draft)
            .send()
            .await
            .map_err(connection_error)?;

        check(resp).await?.json().await.map_err(decode_error)
    }

    /// PUT /api/meetings/:id
    async fn update(&self, id: i64, draft: &MeetingDraft) -> MeetdashResult<MeetingRecord> {
        let resp = self
            .http
            .put(format!("{}/api/meetings/{}", self.base_url, id))
            .json(draft)
            .send()
            .await
            .map_err(connection_error)?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(MeetdashError::MeetingNotFound(id));
        }

        check(resp).await?.json().await.map_err(decode_error)
    }

    /// DELETE /api/meetings/:id
    async fn delete(&self, id: i64) -> MeetdashResult<()> {
        let resp = self
            .http
            .delete(format!("{}/api/meetings/{}", self.base_url, id))
            .send()
            .await
            .map_err(connection_error)?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(MeetdashError::MeetingNotFound(id));
        }

        check(resp).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- addresses_url ---

    #[test]
    fn client_name_is_escaped_in_the_path() {
        let store = RemoteStore::new("http://127.0.0.1:8000");
        let url = store.addresses_url("A/B Consulting?").unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8000/api/clients/A%2FB%20Consulting%3F/addresses"
        );
    }

    #[test]
    fn plain_names_pass_through() {
        let store = RemoteStore::new("http://127.0.0.1:8000/");
        let url = store.addresses_url("Acme").unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8000/api/clients/Acme/addresses"
        );
    }
}
