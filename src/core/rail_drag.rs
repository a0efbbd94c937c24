//! Pointer interaction on a single rail.

use crate::core::time::TimePoint;
use crate::state::Clock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RailDrag {
    #[default]
    Idle,
    Dragging,
}

impl RailDrag {
    pub fn is_dragging(self) -> bool {
        matches!(self, RailDrag::Dragging)
    }

    /// Pointer down on the rail: jump the live time and start dragging.
    pub fn press(&mut self, clock: &mut impl Clock, t: TimePoint) {
        clock.set_live(t);
        *self = RailDrag::Dragging;
    }

    /// Pointer move. Only updates live time while dragging.
    pub fn drag_to(&mut self, clock: &mut impl Clock, t: TimePoint) -> bool {
        if !self.is_dragging() {
            return false;
        }
        clock.set_live(t);
        true
    }

    /// Pointer up: commit the live time. No-op unless this rail is dragging.
    pub fn release(&mut self, clock: &mut impl Clock) -> bool {
        if !self.is_dragging() {
            return false;
        }
        clock.commit();
        *self = RailDrag::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ClockState;

    #[test]
    fn test_drag_updates_live_only_until_release() {
        let mut clock = ClockState::default();
        clock.reset(TimePoint(100));
        let mut drag = RailDrag::default();

        drag.press(&mut clock, TimePoint(200));
        assert!(drag.is_dragging());
        assert_eq!(clock.live(), TimePoint(200));
        assert_eq!(clock.committed(), TimePoint(100));

        for t in [250, 300, 275] {
            assert!(drag.drag_to(&mut clock, TimePoint(t)));
            assert_eq!(clock.committed(), TimePoint(100));
        }
        assert_eq!(clock.live(), TimePoint(275));

        assert!(drag.release(&mut clock));
        assert_eq!(drag, RailDrag::Idle);
        assert_eq!(clock.committed(), TimePoint(275));
    }

    #[test]
    fn test_moves_without_press_are_ignored() {
        let mut clock = ClockState::default();
        clock.reset(TimePoint(100));
        let mut drag = RailDrag::Idle;
        assert!(!drag.drag_to(&mut clock, TimePoint(500)));
        assert_eq!(clock.live(), TimePoint(100));
    }

    #[test]
    fn test_only_the_dragging_rail_commits() {
        let mut clock = ClockState::default();
        clock.reset(TimePoint(0));
        let mut active = RailDrag::Idle;
        let mut other = RailDrag::Idle;

        active.press(&mut clock, TimePoint(42));
        assert!(!other.release(&mut clock));
        assert_eq!(clock.committed(), TimePoint(0));
        assert!(active.release(&mut clock));
        assert_eq!(clock.committed(), TimePoint(42));
        assert!(!active.release(&mut clock));
    }
}
