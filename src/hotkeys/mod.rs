//! Hotkey system
//!
//! Keyboard stepping of the shared clock.
//!
//! # Architecture
//!
//! - **HotkeyAction**: Enum of all possible actions that can be triggered by hotkeys
//! - **HotkeyContext**: Determines which hotkeys are active based on app state
//! - **handle_hotkey()**: Main dispatch function that maps key events to actions
//! - **step_time()**: The time an action moves the clock to
//!
//! A key press is a complete interaction: the App sets the live time and
//! commits it in the same handler.

use dioxus::prelude::Key;

use crate::core::time::{Interval, TimePoint};

/// All possible actions that can be triggered by hotkeys.
///
/// Rails run top to bottom, so "down" moves later in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    // ═══════════════════════════════════════════════════════════════
    // Stepping
    // ═══════════════════════════════════════════════════════════════
    /// One day later
    StepDayForward,
    /// One day earlier
    StepDayBackward,
    /// One month later
    StepMonthForward,
    /// One month earlier
    StepMonthBackward,

    // ═══════════════════════════════════════════════════════════════
    // Jumps
    // ═══════════════════════════════════════════════════════════════
    /// First day of the dataset
    JumpToStart,
    /// Last day of the dataset
    JumpToEnd,
}

/// Context information that affects which hotkeys are active.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether a dataset interval exists to step within
    pub has_data: bool,
    /// Whether an input field has focus (should suppress hotkeys)
    pub input_focused: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key/context combination
    NoMatch,
    /// Hotkey would match but is suppressed (e.g., input field focused)
    Suppressed,
}

/// Maps a key event to an action, considering the current context.
pub fn handle_hotkey(key: &Key, context: &HotkeyContext) -> HotkeyResult {
    // Suppress hotkeys when typing in an input field
    if context.input_focused {
        return HotkeyResult::Suppressed;
    }
    if !context.has_data {
        return HotkeyResult::NoMatch;
    }

    let action = match key {
        Key::ArrowDown => HotkeyAction::StepDayForward,
        Key::ArrowUp => HotkeyAction::StepDayBackward,
        Key::PageDown => HotkeyAction::StepMonthForward,
        Key::PageUp => HotkeyAction::StepMonthBackward,
        Key::Home => HotkeyAction::JumpToStart,
        Key::End => HotkeyAction::JumpToEnd,
        _ => return HotkeyResult::NoMatch,
    };
    HotkeyResult::Action(action)
}

/// Time reached by applying `action` at `now`, clamped to `bounds`.
pub fn step_time(action: HotkeyAction, now: TimePoint, bounds: Interval) -> TimePoint {
    let target = match action {
        HotkeyAction::StepDayForward => now.add_days(1),
        HotkeyAction::StepDayBackward => now.add_days(-1),
        HotkeyAction::StepMonthForward => now.add_months(1),
        HotkeyAction::StepMonthBackward => now.add_months(-1),
        HotkeyAction::JumpToStart => bounds.start,
        HotkeyAction::JumpToEnd => bounds.end,
    };
    bounds.clamp(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::ymd;

    fn ctx() -> HotkeyContext {
        HotkeyContext {
            has_data: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_arrow_down_steps_forward() {
        let result = handle_hotkey(&Key::ArrowDown, &ctx());
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::StepDayForward)));
    }

    #[test]
    fn test_page_up_steps_month_backward() {
        let result = handle_hotkey(&Key::PageUp, &ctx());
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::StepMonthBackward)));
    }

    #[test]
    fn test_end_jumps_to_end() {
        let result = handle_hotkey(&Key::End, &ctx());
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::JumpToEnd)));
    }

    #[test]
    fn test_suppressed_when_input_focused() {
        let context = HotkeyContext {
            input_focused: true,
            ..ctx()
        };
        let result = handle_hotkey(&Key::ArrowDown, &context);
        assert!(matches!(result, HotkeyResult::Suppressed));
    }

    #[test]
    fn test_no_match_without_data() {
        let result = handle_hotkey(&Key::ArrowDown, &HotkeyContext::default());
        assert!(matches!(result, HotkeyResult::NoMatch));
        let result = handle_hotkey(&Key::Character("x".to_string()), &ctx());
        assert!(matches!(result, HotkeyResult::NoMatch));
    }

    #[test]
    fn test_step_time_clamps_to_bounds() {
        let bounds = Interval::new(ymd(1796, 4, 12), ymd(1815, 6, 18));
        assert_eq!(step_time(HotkeyAction::StepDayForward, ymd(1805, 12, 1), bounds), ymd(1805, 12, 2));
        assert_eq!(step_time(HotkeyAction::StepMonthBackward, ymd(1796, 4, 20), bounds), bounds.start);
        assert_eq!(step_time(HotkeyAction::StepMonthForward, ymd(1815, 6, 1), bounds), bounds.end);
        assert_eq!(step_time(HotkeyAction::JumpToStart, ymd(1805, 12, 1), bounds), bounds.start);
    }
}
