//! Battle Timeline
//!
//! A multi-resolution calendar of the Napoleonic wars: a row of vertical rails,
//! each zooming into the neighbourhood of the selected date on the previous one.

mod app;
mod components;
mod constants;
mod core;
mod hotkeys;
mod state;
mod timeline;
mod utils;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Configure the window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Battle Timeline")
                .with_inner_size(LogicalSize::new(1280.0, 800.0))
                .with_resizable(true),
        )
        .with_menu(None); // Disable default menu bar

    // Launch the Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
