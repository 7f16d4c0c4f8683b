//! Shared numeric constants for the vision board.

// ── Placement ───────────────────────────────────────────────────

/// Margin in logical pixels kept between a newly placed item and the
/// placement-area edges.
pub const PLACEMENT_MARGIN: f64 = 20.0;

/// Maximum random candidates sampled before the last one is accepted
/// regardless of overlap.
pub const PLACEMENT_MAX_ATTEMPTS: u32 = 50;

/// Tolerance in logical pixels added to each side of an existing item's
/// box when testing a candidate for overlap.
pub const OVERLAP_TOLERANCE: f64 = 10.0;

// ── Drag gesture ────────────────────────────────────────────────

/// Pointer travel in logical pixels, on either axis, past which a gesture
/// stops being a tap and becomes a drag.
pub const DRAG_THRESHOLD_PX: f64 = 3.0;

/// Visual scale applied to an item while it is being dragged.
pub const DRAG_LIFT_SCALE: f64 = 1.1;

/// How long the delete affordance stays visible after a drag ends.
pub const DELETE_LINGER_MS: i64 = 3_000;

// ── Remote defaults ─────────────────────────────────────────────

/// Default overall request timeout for backend calls, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default TCP connect timeout for backend calls, in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
