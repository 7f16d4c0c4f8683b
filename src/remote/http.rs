//! HTTP adapter for the board-item backend.
//!
//! Thin reqwest wrapper over the backend's REST routes. Items are created
//! and listed under their board; updates and deletes address the item
//! directly. Pure decoding in the `decode_*` helpers for testability.

use std::time::Duration;

use super::{BoardRemote, RemoteConfig, RemoteError};
use crate::item::{BoardId, BoardItem, ItemDraft, ItemId, PartialBoardItem};

// =============================================================================
// CLIENT
// =============================================================================

/// Production [`BoardRemote`] talking to the backend over HTTPS.
pub struct HttpRemote {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpRemote {
    /// Build a client from typed config.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::HttpClientBuild`] if the underlying HTTP
    /// client cannot be constructed.
    pub fn new(config: RemoteConfig) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| RemoteError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url, api_key: config.api_key })
    }

    /// Build a client from environment variables (see [`RemoteConfig::from_env`]).
    ///
    /// # Errors
    ///
    /// Returns an error if required variables are missing or the HTTP
    /// client fails to build.
    pub fn from_env() -> Result<Self, RemoteError> {
        Self::new(RemoteConfig::from_env()?)
    }

    /// Attach auth, send, and collapse the response to `(status, body)`.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<(u16, String), RemoteError> {
        let response = request
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .map_err(|e| RemoteError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| RemoteError::Request(e.to_string()))?;
        Ok((status, text))
    }
}

#[async_trait::async_trait]
impl BoardRemote for HttpRemote {
    async fn create_item(
        &self,
        board_id: BoardId,
        draft: &ItemDraft,
    ) -> Result<BoardItem, RemoteError> {
        let url = format!("{}/api/boards/{board_id}/items", self.base_url);
        let (status, body) = self.send(self.http.post(&url).json(draft)).await?;
        tracing::debug!(%board_id, status, "create item");
        decode_item(status, &body)
    }

    async fn update_item(
        &self,
        item_id: ItemId,
        fields: &PartialBoardItem,
    ) -> Result<BoardItem, RemoteError> {
        let url = format!("{}/api/items/{item_id}", self.base_url);
        let (status, body) = self.send(self.http.patch(&url).json(fields)).await?;
        tracing::debug!(%item_id, status, "update item");
        decode_item(status, &body)
    }

    async fn delete_item(&self, item_id: ItemId) -> Result<(), RemoteError> {
        let url = format!("{}/api/items/{item_id}", self.base_url);
        let (status, body) = self.send(self.http.delete(&url)).await?;
        tracing::debug!(%item_id, status, "delete item");
        decode_empty(status, &body)
    }

    async fn list_items(&self, board_id: BoardId) -> Result<Vec<BoardItem>, RemoteError> {
        let url = format!("{}/api/boards/{board_id}/items", self.base_url);
        let (status, body) = self.send(self.http.get(&url)).await?;
        tracing::debug!(%board_id, status, "list items");
        decode_items(status, &body)
    }
}

// =============================================================================
// DECODING
// =============================================================================

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

fn decode_item(status: u16, body: &str) -> Result<BoardItem, RemoteError> {
    check_status(status, body)?;
    serde_json::from_str(body).map_err(|e| RemoteError::Parse(e.to_string()))
}

fn decode_items(status: u16, body: &str) -> Result<Vec<BoardItem>, RemoteError> {
    check_status(status, body)?;
    serde_json::from_str(body).map_err(|e| RemoteError::Parse(e.to_string()))
}

fn decode_empty(status: u16, body: &str) -> Result<(), RemoteError> {
    check_status(status, body)
}

fn check_status(status: u16, body: &str) -> Result<(), RemoteError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    Err(RemoteError::Backend { status, message: error_message(body) })
}

/// Extract the message from an `{"error": "…"}` body; fall back to the raw
/// body when it has some other shape.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
