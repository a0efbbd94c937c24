//! Timeline module
//!
//! - Calendar: the row of recursively zoomed rails
//! - Rail: one level, with ticks, labels and a draggable thumb
//! - ProjectionOverlay: quads linking each zoom window to its child rail
//! - MonthLine / TimeSlider: the date header strip and the global scrubber

mod calendar;
mod month_line;
mod projection_overlay;
mod rail;
mod time_slider;

pub use calendar::Calendar;
pub use month_line::MonthLine;
pub use time_slider::TimeSlider;
