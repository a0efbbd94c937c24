//! Selection of the sub-interval a child rail displays.

use super::ticks::TickSet;
use super::time::{Interval, TimePoint};

/// Number of tick intervals covered by a zoom window.
pub const ZOOM_WINDOW_TICKS: usize = 3;

/// Window `ZOOM_WINDOW_TICKS` ticks wide ending at the first tick strictly
/// after `focus` (or the last tick when none is).
///
/// The end index is clamped so the window never starts before the first tick,
/// so a focus early in the range can fall before the returned window. Tick
/// sets shorter than a full window return their whole range, and an empty set
/// returns `None`.
pub fn compute_zoom_window(ticks: &TickSet, focus: TimePoint) -> Option<Interval> {
    let points = ticks.as_slice();
    let last = points.len().checked_sub(1)?;
    if points.len() <= ZOOM_WINDOW_TICKS {
        return Some(Interval::new(points[0], points[last]));
    }

    let after = points.partition_point(|tick| *tick <= focus);
    let index = after.min(last).clamp(ZOOM_WINDOW_TICKS, last);
    Some(Interval::new(points[index - ZOOM_WINDOW_TICKS], points[index]))
}
