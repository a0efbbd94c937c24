pub mod time;
pub mod ticks;
pub mod zoom_window;
pub mod rail_chain;
pub mod rail_drag;
pub mod projection;
pub mod markers;
pub mod paths;
