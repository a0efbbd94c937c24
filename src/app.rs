//! Main application component
//!
//! Owns the shared clock and the dataset, and lays out the header,
//! calendar, event panel, slider and status bar.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::components::{DateHeader, EventPanel, StatusBar};
use crate::constants::*;
use crate::core::markers::slider_marks;
use crate::hotkeys::{handle_hotkey, step_time, HotkeyContext, HotkeyResult};
use crate::state::{
    dataset_interval, load_dataset, load_settings_from_env, settings_source_label, use_clock_provider, Clock,
    EventRecord,
};
use crate::timeline::{Calendar, TimeSlider};

#[component]
pub fn App() -> Element {
    let (settings, settings_path) = use_hook(load_settings_from_env);
    let mut clock = use_clock_provider();
    let mut records = use_signal(|| Arc::new(Vec::<EventRecord>::new()));
    let mut loading = use_signal(|| true);

    let dataset_path = settings.resolved_dataset_path();
    let dataset_name = dataset_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    let settings_name = settings_source_label(settings_path.as_deref());

    // Single read at startup; the calendar shows its placeholder until it resolves.
    let load_path = dataset_path.clone();
    use_future(move || {
        let path = load_path.clone();
        async move {
            match load_dataset(&path).await {
                Ok(loaded) => {
                    if let Some(interval) = dataset_interval(&loaded) {
                        tracing::info!(
                            target: "battle_timeline::dataset",
                            start = %interval.start.format_ymd(),
                            end = %interval.end.format_ymd(),
                            "dataset.interval"
                        );
                        clock.reset(interval.start);
                    }
                    records.set(Arc::new(loaded));
                }
                Err(err) => {
                    tracing::warn!(
                        target: "battle_timeline::dataset",
                        path = %path.display(),
                        error = %err,
                        "dataset.load_failed"
                    );
                }
            }
            loading.set(false);
        }
    });

    let records_now = records();
    let interval = dataset_interval(&records_now);
    let marks = interval
        .map(|i| slider_marks(&records_now, i))
        .unwrap_or_default();
    let record_count = records_now.len();

    rsx! {
        div {
            tabindex: "0",
            style: "
                display: flex; flex-direction: column;
                width: 100vw; height: 100vh;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                overflow: hidden; outline: none;
                user-select: none;
            ",
            onmounted: move |e| async move {
                let _ = e.set_focus(true).await;
            },
            onkeydown: move |e| {
                let Some(bounds) = interval else {
                    return;
                };
                let context = HotkeyContext {
                    has_data: !bounds.is_degenerate(),
                    input_focused: false,
                };
                if let HotkeyResult::Action(action) = handle_hotkey(&e.key(), &context) {
                    e.prevent_default();
                    let target = step_time(action, *clock.live_signal().peek(), bounds);
                    clock.set_live(target);
                    clock.commit();
                }
            },

            DateHeader {}

            div {
                style: "flex: 1; display: flex; flex-direction: row; min-height: 0;",
                Calendar {
                    interval: interval,
                    loading: loading(),
                    settings: settings.clone(),
                }
                EventPanel {
                    records: records_now.clone(),
                    lag_days: settings.marker_lag_days,
                    width: EVENT_PANEL_WIDTH,
                }
            }

            TimeSlider {
                interval: interval,
                marks: marks,
            }

            StatusBar {
                loading: loading(),
                record_count: record_count,
                dataset_name: dataset_name,
                settings_name: settings_name,
            }
        }
    }
}
