//! Proximity of events to the current time, for marker fading.

use crate::core::time::{Interval, TimePoint, SECONDS_PER_DAY};
use crate::state::EventRecord;

/// Days before or after an event during which it stays visible.
pub const DEFAULT_MARKER_LAG_DAYS: i64 = 200;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkerPhase {
    /// The event starts `days` from now.
    Upcoming { days: i64, opacity: f64 },
    /// `progress` in [0, 1] through the event.
    Ongoing { progress: f64 },
    /// The event ended `days` ago.
    Past { days: i64, opacity: f64 },
}

impl MarkerPhase {
    pub fn opacity(&self) -> f64 {
        match self {
            MarkerPhase::Upcoming { opacity, .. } | MarkerPhase::Past { opacity, .. } => *opacity,
            MarkerPhase::Ongoing { .. } => 1.0,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            MarkerPhase::Upcoming { days, .. } => format!("in {days} days"),
            MarkerPhase::Ongoing { .. } => "ongoing".to_string(),
            MarkerPhase::Past { days, .. } => format!("{days} days ago"),
        }
    }
}

fn whole_days(from: TimePoint, to: TimePoint) -> i64 {
    (to.seconds() - from.seconds()) / SECONDS_PER_DAY
}

/// Quadratic fade: 1 at the event, 0 at `lag_days` away.
fn fade(days: i64, lag_days: i64) -> f64 {
    (1.0 - days as f64 / lag_days as f64).clamp(0.0, 1.0).powi(2)
}

/// Phase of `record` at `now`, `None` when it is more than `lag_days` away.
pub fn marker_phase(record: &EventRecord, now: TimePoint, lag_days: i64) -> Option<MarkerPhase> {
    let lag_days = lag_days.max(1);
    let days_to_event = whole_days(now, record.start());
    let days_since_event = whole_days(record.end(), now);
    if days_to_event > lag_days || days_since_event > lag_days {
        return None;
    }

    let phase = if days_to_event > 1 {
        MarkerPhase::Upcoming {
            days: days_to_event,
            opacity: fade(days_to_event, lag_days),
        }
    } else if days_since_event > 1 {
        MarkerPhase::Past {
            days: days_since_event,
            opacity: fade(days_since_event, lag_days),
        }
    } else {
        let span = (record.end().seconds() - record.start().seconds()) as f64;
        let into = (now.seconds() - record.start().seconds()) as f64;
        let progress = if span > 0.0 { (into / span).clamp(0.0, 1.0) } else { 0.0 };
        MarkerPhase::Ongoing { progress }
    };
    Some(phase)
}

/// Events visible at `now` with their phase, in dataset order.
pub fn visible_markers(records: &[EventRecord], now: TimePoint, lag_days: i64) -> Vec<(&EventRecord, MarkerPhase)> {
    records
        .iter()
        .filter_map(|record| marker_phase(record, now, lag_days).map(|phase| (record, phase)))
        .collect()
}

/// Marker body width in pixels, growing with the log of the duration.
pub fn marker_width_px(duration_days: i64) -> f64 {
    (duration_days.max(0) as f64 + 1.4).ln() * 25.0
}

/// Start dates as fractions of `interval`, sorted and deduplicated.
pub fn slider_marks(records: &[EventRecord], interval: Interval) -> Vec<f64> {
    if interval.is_degenerate() {
        return Vec::new();
    }
    let span = interval.span_seconds() as f64;
    let mut marks: Vec<f64> = records
        .iter()
        .map(|r| ((r.start().seconds() - interval.start.seconds()) as f64 / span).clamp(0.0, 1.0))
        .collect();
    marks.sort_by(|a, b| a.total_cmp(b));
    marks.dedup();
    marks
}
