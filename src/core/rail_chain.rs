//! Builds the ordered chain of rails, outermost first.
//!
//! Each rail shows one zoom level. A rail whose ticks still span more than the
//! minimum resolution picks a zoom window around the committed time and hands
//! it to the next rail. The chain is derived from committed time only, so it
//! does not change while a drag is in progress.

use super::ticks::{compute_ticks_within, max_intervals_for, Scale, TickSet, DEFAULT_MIN_TICK_SPACING_PX};
use super::time::{Interval, TimePoint, SECONDS_PER_DAY};
use super::zoom_window::compute_zoom_window;

/// Fewest tick intervals a rail is laid out with, whatever its height.
///
/// From the quarterly step up, adjacent ladder steps are at most 2.5x apart,
/// so a three-interval window always takes a finer step on the next rail.
/// Short rails draw their labels closer together than the configured spacing.
pub const MIN_RAIL_INTERVALS: usize = 8;

/// Parameters that bound the chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainConfig {
    /// Pixel height of every rail.
    pub rail_height_px: f64,
    pub min_tick_spacing_px: f64,
    /// A rail whose tick span is at or below this many seconds has no child.
    pub min_resolution_seconds: i64,
    /// Hard cap on the number of rails.
    pub max_depth: usize,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rail_height_px: 480.0,
            min_tick_spacing_px: DEFAULT_MIN_TICK_SPACING_PX,
            min_resolution_seconds: 366 * SECONDS_PER_DAY,
            max_depth: 16,
        }
    }
}

/// Everything one rail needs to render itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RailDescriptor {
    pub depth: usize,
    /// Interval handed down by the parent (the dataset span for the root).
    pub interval: Interval,
    pub ticks: TickSet,
    pub scale: Scale,
    /// Sub-interval shown by the next rail, if there is one.
    pub zoom_window: Option<Interval>,
}

impl ChainConfig {
    /// Tick interval budget for every rail of the chain.
    pub fn max_intervals(&self) -> usize {
        max_intervals_for(self.rail_height_px, self.min_tick_spacing_px).max(MIN_RAIL_INTERVALS)
    }
}

impl RailDescriptor {
    pub fn has_child(&self) -> bool {
        self.zoom_window.is_some()
    }
}

/// Rails for `root`, each child zoomed around `committed`.
///
/// The chain is empty for a degenerate root. It stops at the first rail whose
/// tick span is within the minimum resolution, or at `max_depth` rails. A
/// window that would repeat its rail's own range also ends the chain.
pub fn build_rail_chain(root: Interval, committed: TimePoint, config: &ChainConfig) -> Vec<RailDescriptor> {
    let mut chain: Vec<RailDescriptor> = Vec::new();
    let mut next = Some(root);

    while let Some(interval) = next.take() {
        if chain.len() >= config.max_depth {
            break;
        }
        let (ticks, scale) = compute_ticks_within(interval, config.rail_height_px, config.max_intervals());
        if ticks.is_empty() {
            break;
        }

        let zoom_window = child_window(&ticks, committed, config);
        let depth = chain.len();
        let has_room = depth + 1 < config.max_depth;
        chain.push(RailDescriptor {
            depth,
            interval,
            ticks,
            scale,
            zoom_window: zoom_window.filter(|_| has_room),
        });
        next = chain.last().and_then(|rail| rail.zoom_window);
    }

    tracing::debug!(
        target: "battle_timeline::rails",
        rails = chain.len(),
        committed = %committed.format_ymd(),
        "rail_chain.built"
    );
    chain
}

fn child_window(ticks: &TickSet, committed: TimePoint, config: &ChainConfig) -> Option<Interval> {
    if ticks.span_seconds() <= config.min_resolution_seconds {
        return None;
    }
    let window = compute_zoom_window(ticks, committed)?;
    if Some(window) == ticks.range() || window.is_degenerate() {
        return None;
    }
    Some(window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ticks::TickStep;
    use crate::core::time::ymd;

    fn config(height: f64) -> ChainConfig {
        ChainConfig {
            rail_height_px: height,
            ..ChainConfig::default()
        }
    }

    #[test]
    fn test_napoleonic_scenario() {
        let root = Interval::new(ymd(1796, 1, 1), ymd(1815, 12, 31));
        let focus = ymd(1812, 6, 1);
        let chain = build_rail_chain(root, focus, &config(600.0));

        let rail0 = &chain[0];
        assert_eq!(rail0.ticks.step(), Some(TickStep::Years(1)));
        let window = rail0.zoom_window.unwrap();
        assert_eq!(window, Interval::new(ymd(1810, 1, 1), ymd(1813, 1, 1)));
        assert!(window.contains(focus));
        let ticks = rail0.ticks.as_slice();
        let start = ticks.iter().position(|t| *t == window.start).unwrap();
        let end = ticks.iter().position(|t| *t == window.end).unwrap();
        assert_eq!(end - start, 3);

        let rail1 = &chain[1];
        assert_eq!(rail1.interval, window);
        assert!(rail1.ticks.span_seconds() > ChainConfig::default().min_resolution_seconds);
        assert!(rail1.has_child());

        let deepest = chain.last().unwrap();
        assert!(!deepest.has_child());
        assert!(deepest.ticks.span_seconds() <= ChainConfig::default().min_resolution_seconds);
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn test_five_hundred_years_terminates() {
        let root = Interval::new(ymd(1300, 1, 1), ymd(1800, 1, 1));
        let cfg = config(480.0);
        let chain = build_rail_chain(root, ymd(1650, 3, 3), &cfg);
        assert!(chain.len() > 1);
        assert!(chain.len() <= cfg.max_depth);
        let deepest = chain.last().unwrap();
        assert!(deepest.ticks.span_seconds() <= cfg.min_resolution_seconds);

        let again = build_rail_chain(root, ymd(1650, 3, 3), &cfg);
        assert_eq!(chain.len(), again.len());
        assert_eq!(chain, again);
    }

    #[test]
    fn test_chain_length_is_stable_across_focus_dates() {
        let root = Interval::new(ymd(1300, 1, 1), ymd(1800, 1, 1));
        let cfg = config(480.0);
        let lengths: Vec<usize> = [ymd(1310, 1, 1), ymd(1555, 5, 5), ymd(1799, 12, 1)]
            .into_iter()
            .map(|focus| build_rail_chain(root, focus, &cfg).len())
            .collect();
        assert!(lengths.iter().all(|len| *len == lengths[0]), "{lengths:?}");
    }

    #[test]
    fn test_children_nest_inside_parents() {
        let root = Interval::new(ymd(1796, 1, 1), ymd(1815, 12, 31));
        let chain = build_rail_chain(root, ymd(1806, 10, 14), &config(480.0));
        for pair in chain.windows(2) {
            let window = pair[0].zoom_window.unwrap();
            assert_eq!(pair[1].interval, window);
            let parent = pair[0].ticks.range().unwrap();
            assert!(parent.start <= window.start && window.end <= parent.end);
            assert_eq!(pair[1].depth, pair[0].depth + 1);
        }
    }

    #[test]
    fn test_degenerate_root_has_no_rails() {
        let t = ymd(1805, 12, 2);
        assert!(build_rail_chain(Interval::new(t, t), t, &config(480.0)).is_empty());
    }

    #[test]
    fn test_short_root_is_single_rail() {
        let root = Interval::new(ymd(1812, 6, 24), ymd(1812, 12, 14));
        let chain = build_rail_chain(root, ymd(1812, 9, 7), &config(480.0));
        assert_eq!(chain.len(), 1);
        assert!(!chain[0].has_child());
    }

    #[test]
    fn test_max_depth_caps_chain() {
        let root = Interval::new(ymd(1300, 1, 1), ymd(1800, 1, 1));
        let cfg = ChainConfig {
            max_depth: 2,
            ..config(480.0)
        };
        let chain = build_rail_chain(root, ymd(1650, 3, 3), &cfg);
        assert_eq!(chain.len(), 2);
        assert!(!chain[1].has_child());
    }

    #[test]
    fn test_five_hundred_years_reaches_min_resolution_at_any_height() {
        let root = Interval::new(ymd(1300, 1, 1), ymd(1800, 1, 1));
        for height in [50.0, 60.0, 120.0, 190.0, 480.0] {
            for spacing in [12.0, 24.0, 40.0] {
                for focus in [ymd(1310, 1, 1), ymd(1650, 3, 3), ymd(1812, 6, 1)] {
                    let cfg = ChainConfig {
                        min_tick_spacing_px: spacing,
                        ..config(height)
                    };
                    let chain = build_rail_chain(root, focus, &cfg);
                    let label = format!("{height}px / {spacing}px / {}", focus.format_ymd());
                    assert!(chain.len() < cfg.max_depth, "{label}: {} rails", chain.len());

                    let deepest = chain.last().unwrap();
                    assert!(!deepest.has_child(), "{label}");
                    assert!(
                        deepest.ticks.span_seconds() <= cfg.min_resolution_seconds,
                        "{label}: stopped at {:?}",
                        deepest.ticks.step()
                    );
                    for pair in chain.windows(2) {
                        assert!(pair[1].ticks.span_seconds() < pair[0].ticks.span_seconds(), "{label}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_short_rails_are_laid_out_with_the_interval_floor() {
        let cfg = config(60.0);
        assert_eq!(cfg.max_intervals(), MIN_RAIL_INTERVALS);
        assert_eq!(config(480.0).max_intervals(), 20);

        let root = Interval::new(ymd(1300, 1, 1), ymd(1800, 1, 1));
        let chain = build_rail_chain(root, ymd(1650, 3, 3), &cfg);
        assert_eq!(chain[0].ticks.step(), Some(TickStep::Years(100)));
        assert_eq!(chain[1].ticks.step(), Some(TickStep::Years(50)));
        assert_eq!(chain.len(), 10);
    }

    #[test]
    fn test_window_repeating_the_range_ends_the_chain() {
        let ticks = TickSet::from_points(
            (1810..=1813).map(|y| ymd(y, 1, 1)).collect(),
            Some(TickStep::Years(1)),
        );
        assert!(ticks.span_seconds() > ChainConfig::default().min_resolution_seconds);
        assert_eq!(child_window(&ticks, ymd(1812, 6, 1), &ChainConfig::default()), None);
    }
}
