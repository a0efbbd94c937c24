//! UI components around the calendar.

mod date_header;
mod event_panel;
mod status_bar;

pub use date_header::DateHeader;
pub use event_panel::EventPanel;
pub use status_bar::StatusBar;
