//! Board item model: the item record, its kind, and the create/update shapes.
//!
//! `BoardItem` is both the domain type and the wire shape; serde renames map
//! the flat `position_x` / `position_y` record columns onto `x` / `y` fields.
//! `ItemDraft` is what a create call sends (no id, no timestamps) and
//! `PartialBoardItem` is the sparse body of an update call.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geom::{Point, Rect, Size};

/// Unique identifier for a board item, assigned by the backend at creation.
pub type ItemId = Uuid;

/// Identifier of the board an item belongs to.
pub type BoardId = Uuid;

/// The kind of a board item. Polymorphic over content rendering only;
/// placement and drag logic never inspect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Picked or captured image, `content` is its URI.
    Image,
    /// Free text, `content` is the text itself.
    Text,
    /// Drawing placeholder, `content` is an asset URI.
    Drawing,
    /// Single emoji glyph in `content`.
    Emoji,
}

/// A board item as stored in the local cache and on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardItem {
    /// Unique identifier for this item.
    pub id: ItemId,
    /// The board this item belongs to.
    pub board_id: BoardId,
    /// Content kind.
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Opaque payload: URI, text, or emoji glyph.
    pub content: String,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Left edge of the item in canvas coordinates.
    #[serde(rename = "position_x")]
    pub x: f64,
    /// Top edge of the item in canvas coordinates.
    #[serde(rename = "position_y")]
    pub y: f64,
    /// Item width, fixed at creation.
    pub width: f64,
    /// Item height, fixed at creation.
    pub height: f64,
    /// Creation instant in epoch milliseconds, backend-owned.
    pub created_at: i64,
    /// Last-update instant in epoch milliseconds, backend-owned.
    pub updated_at: i64,
}

impl BoardItem {
    /// Top-left corner as a point.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Item dimensions.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Bounding box of the item.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// What a create call sends: everything about a new item except the fields
/// the backend owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDraft {
    /// Content kind.
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Opaque payload: URI, text, or emoji glyph.
    pub content: String,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Left edge of the item in canvas coordinates.
    #[serde(rename = "position_x")]
    pub x: f64,
    /// Top edge of the item in canvas coordinates.
    #[serde(rename = "position_y")]
    pub y: f64,
    /// Item width.
    pub width: f64,
    /// Item height.
    pub height: f64,
}

impl ItemDraft {
    #[must_use]
    pub fn new(kind: ItemKind, content: impl Into<String>, position: Point, size: Size) -> Self {
        Self {
            kind,
            content: content.into(),
            description: None,
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Draft with a description attached.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Sparse update for a board item. Only present fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialBoardItem {
    /// New x position, if being updated.
    #[serde(rename = "position_x", skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// New y position, if being updated.
    #[serde(rename = "position_y", skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// New width, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// New height, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// New content payload, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// New description, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PartialBoardItem {
    /// A partial that moves the item to `position` and changes nothing else.
    /// This is what a drag commit sends.
    #[must_use]
    pub fn position(position: Point) -> Self {
        Self { x: Some(position.x), y: Some(position.y), ..Self::default() }
    }
}
