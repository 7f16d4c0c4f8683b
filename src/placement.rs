//! Random placement for newly created items.
//!
//! DESIGN
//! ======
//! Rejection sampling: draw a candidate top-left corner uniformly inside the
//! placement area (inset by a margin) and accept it when the candidate's box
//! clears every existing item's box expanded by a tolerance on each side.
//! After a bounded number of attempts the last candidate is returned
//! unconditionally, so placement always succeeds; a forced candidate may
//! overlap, which the caller accepts in exchange for never failing.
//!
//! The sampling core takes the RNG as a parameter so tests drive it with a
//! seeded generator.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use rand::Rng;

use crate::consts::{OVERLAP_TOLERANCE, PLACEMENT_MARGIN, PLACEMENT_MAX_ATTEMPTS};
use crate::geom::{Point, Rect, Size};

/// Pick a position for a new item of `item_size` inside `area`, avoiding
/// the `existing` boxes when possible.
#[must_use]
pub fn find_placement(area: Size, item_size: Size, existing: &[Rect]) -> Point {
    find_placement_with(&mut rand::rng(), area, item_size, existing)
}

/// [`find_placement`] with an explicit RNG.
///
/// Candidates are drawn from
/// `[margin, area.width - item.width - margin]` on each axis. When the area
/// is too small for the item plus margins, the upper bound clamps to zero
/// and the lower bound follows it down, so the range stays valid and the
/// returned position stays non-negative.
#[must_use]
pub fn find_placement_with<R: Rng + ?Sized>(
    rng: &mut R,
    area: Size,
    item_size: Size,
    existing: &[Rect],
) -> Point {
    let max_x = (area.width - item_size.width - PLACEMENT_MARGIN).max(0.0);
    let max_y = (area.height - item_size.height - PLACEMENT_MARGIN).max(0.0);
    let min_x = PLACEMENT_MARGIN.min(max_x);
    let min_y = PLACEMENT_MARGIN.min(max_y);

    let mut candidate = Point::new(min_x, min_y);
    for _ in 0..PLACEMENT_MAX_ATTEMPTS {
        candidate = Point::new(
            rng.random_range(min_x..=max_x),
            rng.random_range(min_y..=max_y),
        );
        let proposed = Rect::new(candidate.x, candidate.y, item_size.width, item_size.height);
        let clear = existing
            .iter()
            .all(|occupied| !proposed.intersects(&occupied.expand(OVERLAP_TOLERANCE)));
        if clear {
            return candidate;
        }
    }
    candidate
}
