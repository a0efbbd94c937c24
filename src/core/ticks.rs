//! Calendar tick generation and the time <-> pixel scale for one rail.

use chrono::{Datelike, NaiveDate};

use super::time::{Interval, TimePoint, SECONDS_PER_DAY};

/// Minimum vertical distance between two tick labels.
pub const DEFAULT_MIN_TICK_SPACING_PX: f64 = 24.0;

/// Upper bound on ticks produced for one rail, whatever the inputs.
const MAX_TICKS: usize = 4096;

const SECONDS_PER_MONTH: f64 = 2_629_746.0;
const SECONDS_PER_YEAR: f64 = 31_556_952.0;

/// Distance between two consecutive ticks, in calendar units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickStep {
    Days(u32),
    Months(u32),
    Years(u32),
}

/// Candidate steps in ascending order of length.
const STEP_LADDER: [TickStep; 16] = [
    TickStep::Days(1),
    TickStep::Days(2),
    TickStep::Days(7),
    TickStep::Months(1),
    TickStep::Months(3),
    TickStep::Months(6),
    TickStep::Years(1),
    TickStep::Years(2),
    TickStep::Years(5),
    TickStep::Years(10),
    TickStep::Years(25),
    TickStep::Years(50),
    TickStep::Years(100),
    TickStep::Years(250),
    TickStep::Years(500),
    TickStep::Years(1000),
];

impl TickStep {
    /// Average length in seconds, used only to estimate tick counts.
    pub fn approx_seconds(self) -> f64 {
        match self {
            TickStep::Days(k) => k as f64 * SECONDS_PER_DAY as f64,
            TickStep::Months(k) => k as f64 * SECONDS_PER_MONTH,
            TickStep::Years(k) => k as f64 * SECONDS_PER_YEAR,
        }
    }

    /// Smallest ladder step that keeps the interval count within `max_intervals`.
    pub fn for_span(span_seconds: i64, max_intervals: usize) -> TickStep {
        let max_intervals = max_intervals.max(1) as f64;
        let span = span_seconds.max(0) as f64;
        STEP_LADDER
            .iter()
            .copied()
            .find(|step| span / step.approx_seconds() <= max_intervals)
            .unwrap_or_else(|| {
                let millennia = (span / SECONDS_PER_YEAR / max_intervals / 1000.0).ceil();
                TickStep::Years((millennia.max(1.0) as u32).saturating_mul(1000))
            })
    }

    /// Latest grid point at or before `t`.
    pub fn floor(self, t: TimePoint) -> TimePoint {
        let Some(date) = t.to_date() else {
            return t;
        };
        let floored = match self {
            TickStep::Days(k) => {
                let n = date.num_days_from_ce();
                NaiveDate::from_num_days_from_ce_opt(n - n.rem_euclid(k as i32))
            }
            TickStep::Months(k) => {
                let index = date.year() * 12 + date.month0() as i32;
                let index = index - index.rem_euclid(k as i32);
                NaiveDate::from_ymd_opt(index.div_euclid(12), index.rem_euclid(12) as u32 + 1, 1)
            }
            TickStep::Years(k) => {
                let year = date.year() - date.year().rem_euclid(k as i32);
                NaiveDate::from_ymd_opt(year, 1, 1)
            }
        };
        floored.map(TimePoint::from_date).unwrap_or(t)
    }

    /// Earliest grid point at or after `t`.
    pub fn ceil(self, t: TimePoint) -> TimePoint {
        let floored = self.floor(t);
        if floored == t {
            t
        } else {
            self.advance(floored, 1)
        }
    }

    /// Move `n` steps forward from `t`.
    pub fn advance(self, t: TimePoint, n: u32) -> TimePoint {
        match self {
            TickStep::Days(k) => t.add_days(k as i64 * n as i64),
            TickStep::Months(k) => t.add_months((k as i32).saturating_mul(n as i32)),
            TickStep::Years(k) => t.add_months((k as i32).saturating_mul(12).saturating_mul(n as i32)),
        }
    }

    /// Short English label for a tick produced with this step.
    pub fn label(self, t: TimePoint) -> String {
        let Some(date) = t.to_date() else {
            return String::new();
        };
        match self {
            TickStep::Years(_) => date.format("%Y").to_string(),
            TickStep::Months(_) => date.format("%b %Y").to_string(),
            TickStep::Days(_) => date.format("%d %b").to_string(),
        }
    }
}

/// Ascending tick dates for one rail.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickSet {
    ticks: Vec<TimePoint>,
    step: Option<TickStep>,
}

impl TickSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from explicit points. Callers are responsible for ordering.
    pub fn from_points(ticks: Vec<TimePoint>, step: Option<TickStep>) -> Self {
        Self { ticks, step }
    }

    pub fn as_slice(&self) -> &[TimePoint] {
        &self.ticks
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    pub fn step(&self) -> Option<TickStep> {
        self.step
    }

    pub fn first(&self) -> Option<TimePoint> {
        self.ticks.first().copied()
    }

    pub fn last(&self) -> Option<TimePoint> {
        self.ticks.last().copied()
    }

    /// Interval from the first to the last tick.
    pub fn range(&self) -> Option<Interval> {
        Some(Interval::new(self.first()?, self.last()?))
    }

    /// Seconds between the first and last tick, zero when empty.
    pub fn span_seconds(&self) -> i64 {
        self.range().map(|range| range.span_seconds()).unwrap_or(0)
    }

    pub fn label(&self, t: TimePoint) -> String {
        self.step.map(|step| step.label(t)).unwrap_or_default()
    }
}

/// Linear mapping between a time domain and `[0, height]` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scale {
    domain: Option<Interval>,
    height: f64,
}

impl Scale {
    pub fn new(domain: Interval, height: f64) -> Self {
        if domain.is_degenerate() || !height.is_finite() || height <= 0.0 {
            return Self::empty();
        }
        Self {
            domain: Some(domain),
            height,
        }
    }

    pub fn empty() -> Self {
        Self {
            domain: None,
            height: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_none()
    }

    pub fn domain(&self) -> Option<Interval> {
        self.domain
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Pixel offset of `t`. Values outside the domain extrapolate linearly.
    pub fn to_px(&self, t: TimePoint) -> f64 {
        let Some(domain) = self.domain else {
            return 0.0;
        };
        let offset = (t.seconds() - domain.start.seconds()) as f64;
        offset / domain.span_seconds() as f64 * self.height
    }

    /// Time under pixel offset `px`, clamped to the domain.
    pub fn to_time(&self, px: f64) -> TimePoint {
        let Some(domain) = self.domain else {
            return TimePoint::SENTINEL;
        };
        let px = if px.is_finite() { px.clamp(0.0, self.height) } else { 0.0 };
        let offset = (px / self.height * domain.span_seconds() as f64).round() as i64;
        domain.clamp(TimePoint(domain.start.seconds() + offset))
    }
}

/// Ticks and scale for `interval` drawn over `pixel_height` pixels.
pub fn compute_ticks(interval: Interval, pixel_height: f64) -> (TickSet, Scale) {
    compute_ticks_with_spacing(interval, pixel_height, DEFAULT_MIN_TICK_SPACING_PX)
}

/// Like [`compute_ticks`], with an explicit minimum label spacing.
pub fn compute_ticks_with_spacing(
    interval: Interval,
    pixel_height: f64,
    min_tick_spacing_px: f64,
) -> (TickSet, Scale) {
    compute_ticks_within(interval, pixel_height, max_intervals_for(pixel_height, min_tick_spacing_px))
}

/// Number of tick intervals that fit in `pixel_height` at the given label
/// spacing, at least 1.
pub fn max_intervals_for(pixel_height: f64, min_tick_spacing_px: f64) -> usize {
    if !pixel_height.is_finite() || pixel_height <= 0.0 {
        return 1;
    }
    let spacing = if min_tick_spacing_px.is_finite() && min_tick_spacing_px > 0.0 {
        min_tick_spacing_px
    } else {
        DEFAULT_MIN_TICK_SPACING_PX
    };
    (pixel_height / spacing).floor().max(1.0) as usize
}

/// Ticks for `interval` using the smallest step with at most `max_intervals`
/// intervals, drawn over `pixel_height` pixels.
pub fn compute_ticks_within(interval: Interval, pixel_height: f64, max_intervals: usize) -> (TickSet, Scale) {
    if interval.is_degenerate() || !pixel_height.is_finite() || pixel_height <= 0.0 {
        return (TickSet::empty(), Scale::empty());
    }

    let step = TickStep::for_span(interval.span_seconds(), max_intervals);

    let start = step.floor(interval.start);
    let end = step.ceil(interval.end);

    let mut ticks = Vec::new();
    for i in 0..MAX_TICKS as u32 {
        let tick = step.advance(start, i);
        if tick > end {
            break;
        }
        if ticks.last().is_some_and(|last| *last >= tick) {
            // Saturated at the edge of the calendar range.
            break;
        }
        ticks.push(tick);
    }

    if ticks.len() < 2 {
        return (TickSet::empty(), Scale::empty());
    }

    let domain = Interval::new(ticks[0], ticks[ticks.len() - 1]);
    (TickSet::from_points(ticks, Some(step)), Scale::new(domain, pixel_height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::ymd;

    fn assert_strictly_increasing(ticks: &TickSet) {
        for pair in ticks.as_slice().windows(2) {
            assert!(pair[0] < pair[1], "{:?} !< {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_twenty_years_gets_yearly_ticks() {
        let interval = Interval::new(ymd(1796, 1, 1), ymd(1815, 12, 31));
        let (ticks, scale) = compute_ticks(interval, 600.0);
        assert_eq!(ticks.step(), Some(TickStep::Years(1)));
        assert_eq!(ticks.first(), Some(ymd(1796, 1, 1)));
        assert_eq!(ticks.last(), Some(ymd(1816, 1, 1)));
        assert_eq!(ticks.len(), 21);
        assert_eq!(scale.to_px(ymd(1796, 1, 1)), 0.0);
        assert!((scale.to_px(ymd(1816, 1, 1)) - 600.0).abs() < 1e-9);
    }

    #[test]
    fn test_three_years_gets_quarterly_ticks() {
        let interval = Interval::new(ymd(1810, 1, 1), ymd(1813, 1, 1));
        let (ticks, _) = compute_ticks(interval, 600.0);
        assert_eq!(ticks.step(), Some(TickStep::Months(3)));
        assert_eq!(ticks.len(), 13);
        assert_eq!(ticks.as_slice()[1], ymd(1810, 4, 1));
    }

    #[test]
    fn test_short_interval_gets_daily_ticks_with_nicing() {
        let interval = Interval::new(TimePoint(ymd(1815, 6, 16).seconds() + 3600), ymd(1815, 6, 18));
        let (ticks, _) = compute_ticks(interval, 600.0);
        assert_eq!(ticks.step(), Some(TickStep::Days(1)));
        assert_eq!(ticks.as_slice(), &[ymd(1815, 6, 16), ymd(1815, 6, 17), ymd(1815, 6, 18)]);
    }

    #[test]
    fn test_sub_day_interval_still_has_two_ticks() {
        let start = ymd(1805, 12, 2);
        let interval = Interval::new(TimePoint(start.seconds() + 60), TimePoint(start.seconds() + 120));
        let (ticks, scale) = compute_ticks(interval, 300.0);
        assert_eq!(ticks.as_slice(), &[start, ymd(1805, 12, 3)]);
        assert!(!scale.is_empty());
    }

    #[test]
    fn test_non_degenerate_intervals_satisfy_tick_invariants() {
        let starts = [ymd(1, 3, 4), ymd(1492, 10, 12), ymd(1796, 1, 1), ymd(1969, 7, 20), ymd(2001, 2, 28)];
        let spans_days = [1_i64, 5, 40, 400, 3_000, 40_000, 400_000];
        let heights = [48.0, 200.0, 480.0, 1200.0];
        for start in starts {
            for span in spans_days {
                for height in heights {
                    let interval = Interval::new(start, start.add_days(span));
                    let (ticks, scale) = compute_ticks(interval, height);
                    assert!(ticks.len() >= 2, "{interval:?} at {height}px");
                    assert_strictly_increasing(&ticks);
                    let first_px = scale.to_px(ticks.as_slice()[0]);
                    assert!((0.0..=height).contains(&first_px));
                    assert!(ticks.first().unwrap() <= interval.start);
                    assert!(ticks.last().unwrap() >= interval.end);
                }
            }
        }
    }

    #[test]
    fn test_degenerate_interval_gives_empty_result() {
        let t = ymd(1800, 1, 1);
        let (ticks, scale) = compute_ticks(Interval::new(t, t), 480.0);
        assert!(ticks.is_empty());
        assert!(scale.is_empty());

        let (ticks, _) = compute_ticks(Interval::new(t.add_days(10), t), 480.0);
        assert!(ticks.is_empty());
    }

    #[test]
    fn test_zero_height_gives_empty_result() {
        let interval = Interval::new(ymd(1800, 1, 1), ymd(1810, 1, 1));
        assert!(compute_ticks(interval, 0.0).0.is_empty());
        assert!(compute_ticks(interval, f64::NAN).0.is_empty());
    }

    #[test]
    fn test_max_intervals_follow_height_and_spacing() {
        assert_eq!(max_intervals_for(480.0, 24.0), 20);
        assert_eq!(max_intervals_for(60.0, 24.0), 2);
        assert_eq!(max_intervals_for(10.0, 24.0), 1);
        assert_eq!(max_intervals_for(480.0, 0.0), 20);
        assert_eq!(max_intervals_for(f64::NAN, 24.0), 1);
    }

    #[test]
    fn test_explicit_interval_budget_refines_step() {
        // 300 years: at most 4 intervals gives centuries, 8 gives half-centuries.
        let interval = Interval::new(ymd(1400, 1, 1), ymd(1700, 1, 1));
        let (coarse, _) = compute_ticks_within(interval, 60.0, 4);
        assert_eq!(coarse.step(), Some(TickStep::Years(100)));
        assert_eq!(coarse.len(), 4);
        let (fine, scale) = compute_ticks_within(interval, 60.0, 8);
        assert_eq!(fine.step(), Some(TickStep::Years(50)));
        assert_eq!(fine.len(), 7);
        assert!((scale.to_px(ymd(1700, 1, 1)) - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_huge_span_falls_back_to_millennia() {
        let step = TickStep::for_span((SECONDS_PER_YEAR * 100_000.0) as i64, 10);
        assert_eq!(step, TickStep::Years(10_000));
    }

    #[test]
    fn test_scale_inverse_is_clamped() {
        let interval = Interval::new(ymd(1800, 1, 1), ymd(1810, 1, 1));
        let scale = Scale::new(interval, 100.0);
        assert_eq!(scale.to_time(-20.0), interval.start);
        assert_eq!(scale.to_time(500.0), interval.end);
        let mid = scale.to_time(50.0);
        assert!((scale.to_px(mid) - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_floor_aligns_to_stride() {
        assert_eq!(TickStep::Years(5).floor(ymd(1812, 6, 1)), ymd(1810, 1, 1));
        assert_eq!(TickStep::Months(3).floor(ymd(1812, 6, 1)), ymd(1812, 4, 1));
        assert_eq!(TickStep::Months(1).ceil(ymd(1812, 6, 2)), ymd(1812, 7, 1));
        assert_eq!(TickStep::Years(1).ceil(ymd(1812, 1, 1)), ymd(1812, 1, 1));
    }

    #[test]
    fn test_labels_follow_granularity() {
        let t = ymd(1812, 6, 14);
        assert_eq!(TickStep::Years(1).label(t), "1812");
        assert_eq!(TickStep::Months(1).label(t), "Jun 1812");
        assert_eq!(TickStep::Days(1).label(t), "14 Jun");
    }
}
