use dioxus::prelude::*;
use crate::constants::*;
use crate::state::{use_clock, Clock};

#[component]
pub fn StatusBar(loading: bool, record_count: usize, dataset_name: String, settings_name: String) -> Element {
    let clock = use_clock();
    let live = clock.live().format_ymd();
    let committed = clock.committed().format_ymd();
    let status = if loading { "Loading…".to_string() } else { format!("{record_count} battles · {dataset_name}") };

    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; height: {STATUS_BAR_HEIGHT}px; padding: 0 14px; background-color: {BG_SURFACE}; border-top: 1px solid {BORDER_DEFAULT}; font-size: 11px; color: {TEXT_DIM};",
            span { "{status}" }
            div {
                style: "display: flex; gap: 16px; font-family: {FONT_MONO};",
                span { "settings {settings_name}" }
                span { style: "color: {ACCENT_LIVE};", "live {live}" }
                span { style: "color: {ACCENT_COMMITTED};", "committed {committed}" }
            }
        }
    }
}
