//! Remote board-item storage: the consumed CRUD contract and its HTTP adapter.
//!
//! DESIGN
//! ======
//! The backend is consumed through the [`BoardRemote`] trait so the store
//! can run against the production HTTP adapter or a scripted test double.
//! [`HttpRemote`] is the production implementation, configured from
//! environment variables by [`RemoteConfig`].
//!
//! ERROR HANDLING
//! ==============
//! Every failure funnels into [`RemoteError`]: transport problems, non-2xx
//! backend responses (with the backend's message extracted when the body is
//! a JSON error envelope), malformed success payloads, and configuration
//! problems at construction time. Callers decide recovery; nothing here
//! retries.

pub mod config;
pub mod http;

pub use config::RemoteConfig;
pub use http::HttpRemote;

use crate::item::{BoardId, BoardItem, ItemDraft, ItemId, PartialBoardItem};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by remote board-item operations.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// The HTTP request could not be sent or the response body not read.
    #[error("backend request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success HTTP status.
    #[error("backend error: status {status}: {message}")]
    Backend { status: u16, message: String },

    /// A success response body could not be deserialized.
    #[error("backend response parse failed: {0}")]
    Parse(String),

    /// A required configuration environment variable is not set.
    #[error("missing config: env var {var} not set")]
    MissingConfig { var: String },

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// REMOTE TRAIT
// =============================================================================

/// Async CRUD contract for board-item storage. Enables mocking in tests.
#[async_trait::async_trait]
pub trait BoardRemote: Send + Sync {
    /// Create an item on the board and return the canonical stored record.
    ///
    /// # Errors
    ///
    /// Returns a [`RemoteError`] if the request fails or the backend
    /// rejects the draft.
    async fn create_item(&self, board_id: BoardId, draft: &ItemDraft)
    -> Result<BoardItem, RemoteError>;

    /// Apply a sparse update to an item and return the updated record.
    ///
    /// # Errors
    ///
    /// Returns a [`RemoteError`] if the request fails or the backend
    /// rejects the update.
    async fn update_item(
        &self,
        item_id: ItemId,
        fields: &PartialBoardItem,
    ) -> Result<BoardItem, RemoteError>;

    /// Delete an item.
    ///
    /// # Errors
    ///
    /// Returns a [`RemoteError`] if the request fails or the backend
    /// rejects the deletion.
    async fn delete_item(&self, item_id: ItemId) -> Result<(), RemoteError>;

    /// Fetch every item on the board, ordered ascending by creation time.
    ///
    /// # Errors
    ///
    /// Returns a [`RemoteError`] if the request fails or the response is
    /// malformed.
    async fn list_items(&self, board_id: BoardId) -> Result<Vec<BoardItem>, RemoteError>;
}
