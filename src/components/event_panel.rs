use std::sync::Arc;

use dioxus::prelude::*;

use crate::constants::*;
use crate::core::markers::{marker_width_px, visible_markers, MarkerPhase};
use crate::state::{artifact_route, use_clock, Clock, EventRecord, TRACKED_ARTIFACTS};

/// Battles close to the live time, faded by proximity.
#[component]
pub fn EventPanel(records: Arc<Vec<EventRecord>>, lag_days: i64, width: f64) -> Element {
    let clock = use_clock();
    let now = clock.live();
    let visible = visible_markers(&records, now, lag_days);
    let count = visible.len();
    let routes: Vec<(&str, usize)> = TRACKED_ARTIFACTS
        .iter()
        .map(|name| (*name, artifact_route(&records, name).len() - 1))
        .collect();

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column;
                width: {width}px; min-width: {width}px;
                background-color: {BG_ELEVATED};
                border-left: 1px solid {BORDER_DEFAULT};
                overflow: hidden;
            ",
            div {
                style: "
                    height: 32px; display: flex; align-items: center; justify-content: space-between;
                    padding: 0 12px; flex-shrink: 0;
                    border-bottom: 1px solid {BORDER_DEFAULT};
                    font-size: 11px; font-weight: 500; color: {TEXT_SECONDARY};
                    text-transform: uppercase; letter-spacing: 0.5px;
                ",
                span { "Nearby battles" }
                span { style: "color: {TEXT_DIM}; font-family: {FONT_MONO};", "{count}" }
            }
            div {
                style: "flex: 1; overflow-y: auto; padding: 8px;",
                if visible.is_empty() {
                    div {
                        style: "color: {TEXT_DIM}; font-size: 12px; text-align: center; padding: 16px 0;",
                        "No battles within {lag_days} days"
                    }
                }
                for (record, phase) in visible.iter() {
                    {
                        let accent = match phase {
                            MarkerPhase::Ongoing { .. } => ACCENT_LIVE,
                            MarkerPhase::Upcoming { .. } => ACCENT_WINDOW,
                            MarkerPhase::Past { .. } => ACCENT_COMMITTED,
                        };
                        let opacity = phase.opacity().max(0.15);
                        let bar_width = marker_width_px(record.duration_days).min(width - 40.0).max(4.0);
                        let progress = match phase {
                            MarkerPhase::Ongoing { progress } => Some(progress * 100.0),
                            _ => None,
                        };
                        let napoleon = record.has_artifact(TRACKED_ARTIFACTS[0]);
                        let dates = if record.date1 == record.date2 {
                            record.date1.format("%Y-%m-%d").to_string()
                        } else {
                            format!("{} → {}", record.date1.format("%Y-%m-%d"), record.date2.format("%Y-%m-%d"))
                        };
                        let detail = format!("{dates} · {}", phase.describe());
                        rsx! {
                            div {
                                key: "{record.id}",
                                style: "
                                    padding: 6px 8px; margin-bottom: 4px;
                                    border-radius: 4px;
                                    background-color: {BG_SURFACE};
                                    border-left: 3px solid {accent};
                                    opacity: {opacity};
                                ",
                                div {
                                    style: "display: flex; justify-content: space-between; gap: 8px; font-size: 12px; color: {TEXT_PRIMARY};",
                                    span { "{record.battle}" }
                                    if napoleon {
                                        span { title: "Napoleon present", style: "color: {ACCENT_COMMITTED};", "★" }
                                    }
                                }
                                div {
                                    style: "font-size: 10px; color: {TEXT_MUTED}; font-family: {FONT_MONO}; margin-top: 2px;",
                                    "{detail}"
                                }
                                div {
                                    style: "position: relative; height: 3px; width: {bar_width}px; margin-top: 4px; background-color: {BG_HOVER}; border-radius: 2px;",
                                    if let Some(pct) = progress {
                                        div { style: "height: 100%; width: {pct}%; background-color: {accent}; border-radius: 2px;" }
                                    }
                                }
                                if record.radius > 0 {
                                    div {
                                        style: "font-size: 10px; color: {TEXT_DIM}; margin-top: 2px;",
                                        "{record.radius} dead or wounded"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div {
                style: "
                    flex-shrink: 0; padding: 6px 12px;
                    border-top: 1px solid {BORDER_DEFAULT};
                    font-size: 10px; color: {TEXT_DIM}; font-family: {FONT_MONO};
                ",
                for (name, stops) in routes {
                    div { key: "{name}", "{name}: {stops} stops from Paris" }
                }
            }
        }
    }
}
