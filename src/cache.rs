//! In-memory item cache: the store's local, ordered view of one board.
//!
//! DESIGN
//! ======
//! Items live in a `Vec` rather than a map because order is meaningful:
//! z-order equals list order, with later entries drawn above earlier ones.
//! Snapshots replace the whole list and are sorted ascending by creation
//! time (stable, so the backend's order is kept for equal timestamps);
//! appends go to the back. Ids stay unique: inserting an id that is already
//! present overwrites that entry in place.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use crate::item::{BoardItem, ItemId, PartialBoardItem};

/// Ordered in-memory collection of one board's items.
#[derive(Debug)]
pub struct ItemCache {
    items: Vec<BoardItem>,
}

impl ItemCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Insert an item at the back, or overwrite in place if an item with
    /// the same `id` already exists.
    pub fn insert(&mut self, item: BoardItem) {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    /// Remove an item by id, returning it if it was present.
    pub fn remove(&mut self, id: &ItemId) -> Option<BoardItem> {
        let index = self.items.iter().position(|item| item.id == *id)?;
        Some(self.items.remove(index))
    }

    /// Return a reference to an item by id.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&BoardItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    /// Apply a partial update to an existing item. Returns false if the
    /// item doesn't exist.
    pub fn apply_partial(&mut self, id: &ItemId, partial: &PartialBoardItem) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == *id) else {
            return false;
        };
        if let Some(x) = partial.x {
            item.x = x;
        }
        if let Some(y) = partial.y {
            item.y = y;
        }
        if let Some(w) = partial.width {
            item.width = w;
        }
        if let Some(h) = partial.height {
            item.height = h;
        }
        if let Some(ref content) = partial.content {
            item.content = content.clone();
        }
        if let Some(ref description) = partial.description {
            item.description = Some(description.clone());
        }
        true
    }

    /// Replace all items with a full snapshot, ordered ascending by
    /// creation time.
    pub fn load_snapshot(&mut self, items: Vec<BoardItem>) {
        self.items = items;
        self.items.sort_by_key(|item| item.created_at);
    }

    /// All items in z-order (back of the list draws on top).
    #[must_use]
    pub fn items(&self) -> &[BoardItem] {
        &self.items
    }

    /// Number of items currently cached.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the cache contains no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ItemCache {
    fn default() -> Self {
        Self::new()
    }
}
