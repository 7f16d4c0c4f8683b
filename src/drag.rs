//! Drag gesture state machine for a single board item.
//!
//! DESIGN
//! ======
//! One controller instance per item, driven by pointer events from the host.
//! A gesture becomes a drag only once pointer travel since pointer-down
//! exceeds a small threshold on either axis, so taps never move items.
//! While dragging, the displayed position is `baseline + cumulative delta`,
//! unclamped, so the item tracks the finger even past the canvas edge;
//! bounds clamping happens exactly once, at release, and the clamped
//! position is handed back to the host as a [`DragAction::Released`] for it
//! to commit through the board store.
//!
//! The controller performs no I/O and owns no timers. Time enters only as
//! `now_ms` arguments, which keeps threshold and affordance behavior
//! testable without a UI framework. If the host's commit fails afterwards,
//! nothing is rolled back here; the store's reload reconciles.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::consts::{DELETE_LINGER_MS, DRAG_LIFT_SCALE, DRAG_THRESHOLD_PX};
use crate::geom::{Point, Size, clamp_position};
use crate::item::ItemId;

/// Internal state for one item's drag machine.
///
/// Each active variant carries the gesture context needed to compute deltas
/// and the final position on release.
#[derive(Debug, Clone)]
enum DragState {
    /// No gesture in progress; the item rests at its committed position.
    Idle,
    /// Pointer is down but travel is still within the tap threshold.
    Pending {
        /// Pointer position at pointer-down, in canvas coordinates.
        start: Point,
    },
    /// The threshold was crossed; the item follows the pointer.
    Dragging {
        /// Pointer position at pointer-down, in canvas coordinates.
        start: Point,
        /// Item position when the gesture began; deltas apply on top of it.
        origin: Point,
        /// Current displayed position, unclamped.
        position: Point,
    },
}

/// What a pointer event amounted to, for the host to act on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragAction {
    /// Nothing for the host to do.
    None,
    /// The gesture crossed the drag threshold; the item lifted.
    Started { position: Point },
    /// The dragged item moved to a new displayed position.
    Moved { position: Point },
    /// The drag ended; `position` is final and clamped, ready to commit.
    Released { position: Point },
    /// Pointer went down and up without crossing the threshold.
    Tapped,
}

/// Drag state machine for one board item.
#[derive(Debug, Clone)]
pub struct DragController {
    item_id: ItemId,
    canvas_size: Size,
    item_size: Size,
    /// Last committed position; what the item displays when not dragging.
    committed: Point,
    state: DragState,
    /// Instant the delete affordance auto-hides, set on release.
    delete_visible_until_ms: Option<i64>,
}

impl DragController {
    /// Controller for `item_id` resting at `position`.
    #[must_use]
    pub fn new(item_id: ItemId, position: Point, item_size: Size, canvas_size: Size) -> Self {
        Self {
            item_id,
            canvas_size,
            item_size,
            committed: position,
            state: DragState::Idle,
            delete_visible_until_ms: None,
        }
    }

    /// The item this controller drives.
    #[must_use]
    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    // ── Events ──────────────────────────────────────────────────

    /// Pointer went down on the item. Starts threshold tracking; any
    /// gesture already in progress restarts from here.
    pub fn pointer_down(&mut self, at: Point) -> DragAction {
        self.state = DragState::Pending { start: at };
        DragAction::None
    }

    /// Pointer moved while down.
    pub fn pointer_move(&mut self, at: Point) -> DragAction {
        match self.state {
            DragState::Idle => DragAction::None,
            DragState::Pending { start } => {
                let dx = at.x - start.x;
                let dy = at.y - start.y;
                if dx.abs() <= DRAG_THRESHOLD_PX && dy.abs() <= DRAG_THRESHOLD_PX {
                    return DragAction::None;
                }
                let origin = self.committed;
                let position = Point::new(origin.x + dx, origin.y + dy);
                self.state = DragState::Dragging { start, origin, position };
                DragAction::Started { position }
            }
            DragState::Dragging { start, origin, .. } => {
                let position = Point::new(origin.x + (at.x - start.x), origin.y + (at.y - start.y));
                self.state = DragState::Dragging { start, origin, position };
                DragAction::Moved { position }
            }
        }
    }

    /// Pointer released. A drag flattens into a clamped final position for
    /// the host to commit; a sub-threshold gesture is a tap.
    pub fn pointer_up(&mut self, at: Point, now_ms: i64) -> DragAction {
        match self.state {
            DragState::Idle => DragAction::None,
            DragState::Pending { .. } => {
                self.state = DragState::Idle;
                DragAction::Tapped
            }
            DragState::Dragging { start, origin, .. } => {
                let landed = Point::new(origin.x + (at.x - start.x), origin.y + (at.y - start.y));
                let position = clamp_position(landed, self.canvas_size, self.item_size);
                self.committed = position;
                self.state = DragState::Idle;
                self.delete_visible_until_ms = Some(now_ms + DELETE_LINGER_MS);
                DragAction::Released { position }
            }
        }
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Where the item should render right now.
    #[must_use]
    pub fn display_position(&self) -> Point {
        match self.state {
            DragState::Dragging { position, .. } => position,
            DragState::Idle | DragState::Pending { .. } => self.committed,
        }
    }

    /// Visual scale for the item: lifted while dragging, resting otherwise.
    #[must_use]
    pub fn scale(&self) -> f64 {
        if self.is_dragging() { DRAG_LIFT_SCALE } else { 1.0 }
    }

    /// Whether a drag (threshold already crossed) is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Whether the delete affordance shows at `now_ms`: during a drag, and
    /// for a linger window after release.
    #[must_use]
    pub fn delete_visible(&self, now_ms: i64) -> bool {
        self.is_dragging() || self.delete_visible_until_ms.is_some_and(|until| now_ms < until)
    }

    /// Move the resting position from outside the gesture, e.g. after the
    /// store reloaded the board. A drag in progress keeps tracking the
    /// pointer; the new position shows once the item is at rest.
    pub fn set_position(&mut self, position: Point) {
        self.committed = position;
    }
}
