//! The shared timeline clock.
//!
//! Two values: the *live* time follows the pointer on every move, the
//! *committed* time only catches up when an interaction ends. Rails read live
//! time for their thumbs; the rail chain is derived from committed time.

use dioxus::prelude::*;

use crate::core::time::TimePoint;

/// Read/write access to the live and committed times.
pub trait Clock {
    fn live(&self) -> TimePoint;
    fn set_live(&mut self, t: TimePoint);
    fn committed(&self) -> TimePoint;
    /// Copy the current live time into the committed time.
    fn commit(&mut self);

    /// Set both values at once, e.g. when a dataset finishes loading.
    fn reset(&mut self, t: TimePoint) {
        self.set_live(t);
        self.commit();
    }
}

/// Plain clock value, used wherever no reactive runtime is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockState {
    live: TimePoint,
    committed: TimePoint,
}

impl Default for ClockState {
    fn default() -> Self {
        Self {
            live: TimePoint::SENTINEL,
            committed: TimePoint::SENTINEL,
        }
    }
}

impl Clock for ClockState {
    fn live(&self) -> TimePoint {
        self.live
    }

    fn set_live(&mut self, t: TimePoint) {
        self.live = t;
    }

    fn committed(&self) -> TimePoint {
        self.committed
    }

    fn commit(&mut self) {
        self.committed = self.live;
    }
}

/// Clock handle provided through the component context.
///
/// Live and committed times are separate signals so that components that only
/// depend on committed time do not re-render while a drag is in progress.
#[derive(Clone, Copy, PartialEq)]
pub struct SharedClock {
    live: Signal<TimePoint>,
    committed: Signal<TimePoint>,
}

impl SharedClock {
    pub fn new(live: Signal<TimePoint>, committed: Signal<TimePoint>) -> Self {
        Self { live, committed }
    }

    pub fn live_signal(&self) -> Signal<TimePoint> {
        self.live
    }
}

impl Clock for SharedClock {
    fn live(&self) -> TimePoint {
        (self.live)()
    }

    fn set_live(&mut self, t: TimePoint) {
        if *self.live.peek() != t {
            self.live.set(t);
        }
    }

    fn committed(&self) -> TimePoint {
        (self.committed)()
    }

    fn commit(&mut self) {
        let live = *self.live.peek();
        if *self.committed.peek() != live {
            tracing::debug!(
                target: "battle_timeline::clock",
                committed = %live.format_ymd(),
                "clock.commit"
            );
            self.committed.set(live);
        }
    }
}

/// Create the clock at the sentinel and provide it to descendants.
pub fn use_clock_provider() -> SharedClock {
    let live = use_signal(|| TimePoint::SENTINEL);
    let committed = use_signal(|| TimePoint::SENTINEL);
    use_context_provider(|| SharedClock::new(live, committed))
}

/// The clock provided by an ancestor.
pub fn use_clock() -> SharedClock {
    use_context::<SharedClock>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_sentinel() {
        let clock = ClockState::default();
        assert_eq!(clock.live(), TimePoint::SENTINEL);
        assert_eq!(clock.committed(), TimePoint::SENTINEL);
    }

    #[test]
    fn test_live_changes_do_not_move_committed() {
        let mut clock = ClockState::default();
        clock.set_live(TimePoint(10));
        clock.set_live(TimePoint(20));
        assert_eq!(clock.live(), TimePoint(20));
        assert_eq!(clock.committed(), TimePoint::SENTINEL);
        clock.commit();
        assert_eq!(clock.committed(), TimePoint(20));
    }

    #[test]
    fn test_reset_sets_both() {
        let mut clock = ClockState::default();
        clock.reset(TimePoint(-5_000));
        assert_eq!(clock.live(), TimePoint(-5_000));
        assert_eq!(clock.committed(), TimePoint(-5_000));
    }
}
