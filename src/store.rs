//! Board store — the optimistic local cache over the remote backend.
//!
//! DESIGN
//! ======
//! `list` replaces the whole cache with the backend's snapshot. `add` is
//! remote-first: nothing enters the cache until the backend returns the
//! canonical record, so a rejected create leaves no trace. `update` and
//! `delete` mutate the cache immediately and then issue the remote write;
//! the UI stays responsive and the common case needs no second pass.
//!
//! When a write fails, the store reconciles with one full reload, discarding
//! every item's speculative state, and surfaces the original error. Coarse
//! on purpose: no per-field rollback, no version tracking, no retry. A
//! successful write likewise does not copy the backend's record over the
//! cache entry; the optimistic value stands until the next reload, so a slow
//! response can never clobber a newer local move. No ordering is imposed
//! between successive writes to the same item.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cache::ItemCache;
use crate::geom::{Canvas, Rect, Size};
use crate::item::{BoardId, BoardItem, ItemDraft, ItemId, ItemKind, PartialBoardItem};
use crate::placement;
use crate::remote::{BoardRemote, RemoteError};

/// Local view of one board, synchronized against the remote backend.
pub struct BoardStore {
    board_id: BoardId,
    canvas: Canvas,
    remote: Arc<dyn BoardRemote>,
    cache: ItemCache,
    dirty: bool,
    rng: StdRng,
}

impl BoardStore {
    /// Store for `board_id` on `canvas`, backed by `remote`. The cache
    /// starts empty; call [`BoardStore::list`] to hydrate it.
    #[must_use]
    pub fn new(board_id: BoardId, canvas: Canvas, remote: Arc<dyn BoardRemote>) -> Self {
        Self::with_rng(board_id, canvas, remote, StdRng::from_os_rng())
    }

    /// [`BoardStore::new`] with a seeded placement RNG, for deterministic
    /// layouts.
    #[must_use]
    pub fn with_seed(
        board_id: BoardId,
        canvas: Canvas,
        remote: Arc<dyn BoardRemote>,
        seed: u64,
    ) -> Self {
        Self::with_rng(board_id, canvas, remote, StdRng::seed_from_u64(seed))
    }

    fn with_rng(board_id: BoardId, canvas: Canvas, remote: Arc<dyn BoardRemote>, rng: StdRng) -> Self {
        Self { board_id, canvas, remote, cache: ItemCache::new(), dirty: false, rng }
    }

    // =========================================================================
    // LOAD
    // =========================================================================

    /// Fetch the board's full item set and replace the cache wholesale,
    /// ordered ascending by creation time. Clears the unsaved-changes flag.
    ///
    /// # Errors
    ///
    /// Returns the backend error unchanged; the cache keeps its previous
    /// contents when the fetch fails.
    pub async fn list(&mut self) -> Result<&[BoardItem], RemoteError> {
        let items = self.remote.list_items(self.board_id).await?;
        self.cache.load_snapshot(items);
        self.dirty = false;
        Ok(self.cache.items())
    }

    // =========================================================================
    // ADD
    // =========================================================================

    /// Create an item remotely, then append the canonical record to the
    /// cache. Remote-first: a failed create leaves the cache unchanged.
    ///
    /// # Errors
    ///
    /// Returns the backend error unchanged.
    pub async fn add(&mut self, draft: ItemDraft) -> Result<BoardItem, RemoteError> {
        let item = self.remote.create_item(self.board_id, &draft).await?;
        self.cache.insert(item.clone());
        self.dirty = true;
        Ok(item)
    }

    /// [`BoardStore::add`] with the position computed by the placement
    /// sampler, avoiding the items currently in the cache.
    ///
    /// # Errors
    ///
    /// Returns the backend error unchanged.
    pub async fn add_placed(
        &mut self,
        kind: ItemKind,
        content: impl Into<String> + Send,
        description: Option<String>,
        size: Size,
    ) -> Result<BoardItem, RemoteError> {
        let existing: Vec<Rect> = self.cache.items().iter().map(BoardItem::rect).collect();
        let position =
            placement::find_placement_with(&mut self.rng, self.canvas.placement_area, size, &existing);

        let mut draft = ItemDraft::new(kind, content, position, size);
        if let Some(description) = description {
            draft = draft.with_description(description);
        }
        self.add(draft).await
    }

    // =========================================================================
    // UPDATE
    // =========================================================================

    /// Merge `fields` into the cached item immediately, then issue the
    /// remote update. On failure the store reloads the whole board to drop
    /// the speculative value, then surfaces the original error.
    ///
    /// The returned record is the backend's; the cache keeps the optimistic
    /// value until the next reload.
    ///
    /// # Errors
    ///
    /// Returns the backend error from the update itself; a reload failure
    /// on the recovery path is logged, not returned.
    pub async fn update(
        &mut self,
        id: ItemId,
        fields: PartialBoardItem,
    ) -> Result<BoardItem, RemoteError> {
        self.cache.apply_partial(&id, &fields);

        match self.remote.update_item(id, &fields).await {
            Ok(item) => {
                self.dirty = true;
                Ok(item)
            }
            Err(err) => {
                tracing::warn!(%id, error = %err, "update failed, reloading board");
                self.reload_after_failure().await;
                Err(err)
            }
        }
    }

    // =========================================================================
    // DELETE
    // =========================================================================

    /// Remove the cached item immediately, then issue the remote delete.
    /// On failure the store reloads the whole board, which restores the
    /// item if the backend still has it, then surfaces the original error.
    ///
    /// # Errors
    ///
    /// Returns the backend error from the delete itself; a reload failure
    /// on the recovery path is logged, not returned.
    pub async fn delete(&mut self, id: ItemId) -> Result<(), RemoteError> {
        self.cache.remove(&id);

        match self.remote.delete_item(id).await {
            Ok(()) => {
                self.dirty = true;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%id, error = %err, "delete failed, reloading board");
                self.reload_after_failure().await;
                Err(err)
            }
        }
    }

    /// Best-effort reconciling reload after a failed write. The cache keeps
    /// its optimistic contents if the reload also fails.
    async fn reload_after_failure(&mut self) {
        if let Err(err) = self.list().await {
            tracing::error!(error = %err, "reconciling reload failed, cache left as-is");
        }
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// All cached items in z-order (back of the list draws on top).
    #[must_use]
    pub fn items(&self) -> &[BoardItem] {
        self.cache.items()
    }

    /// Look up a cached item by id.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&BoardItem> {
        self.cache.get(id)
    }

    /// The board this store serves.
    #[must_use]
    pub fn board_id(&self) -> BoardId {
        self.board_id
    }

    /// The canvas the board is laid out on.
    #[must_use]
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Whether a mutation succeeded since the last wholesale load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }
}
