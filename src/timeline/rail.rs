use dioxus::prelude::*;

use crate::constants::{
    ACCENT_COMMITTED, ACCENT_LIVE, ACCENT_WINDOW, BG_SURFACE, BORDER_DEFAULT, BORDER_STRONG,
    FONT_MONO, TEXT_DIM, TEXT_MUTED,
};
use crate::core::projection::RailGeometry;
use crate::core::rail_chain::RailDescriptor;
use crate::core::rail_drag::RailDrag;
use crate::state::{use_clock, Clock};

/// Height of the range caption drawn above each rail track.
pub(crate) const RAIL_CAPTION_PX: f64 = 22.0;

/// One vertical level of the calendar.
///
/// Reads the live time for its thumb and writes it while dragging; commits
/// on release. The descriptor itself only changes when the committed time does.
#[component]
pub fn Rail(rail: RailDescriptor, geometry: RailGeometry) -> Element {
    let mut clock = use_clock();
    let mut drag = use_signal(RailDrag::default);
    let mut drag_start_y = use_signal(|| 0.0_f64);
    let mut drag_start_px = use_signal(|| 0.0_f64);

    let live = clock.live();
    let committed = clock.committed();
    let scale = rail.scale;
    let Some(range) = rail.ticks.range() else {
        return rsx! {};
    };

    let caption = format!("{} – {}", rail.ticks.label(range.start), rail.ticks.label(range.end));
    let thumb_y = range.contains(live).then(|| scale.to_px(live));
    let committed_y = range.contains(committed).then(|| scale.to_px(committed));
    let window_band = rail
        .zoom_window
        .map(|window| {
            let band_top = scale.to_px(window.start);
            (band_top, (scale.to_px(window.end) - band_top).max(1.0))
        });

    let left = geometry.left;
    let top = geometry.top;
    let width = geometry.width;
    let height = geometry.height;
    let track_x = width - 14.0;
    let cursor = if drag().is_dragging() { "grabbing" } else { "ns-resize" };

    rsx! {
        div {
            style: "
                position: absolute;
                left: {left}px; top: {top - RAIL_CAPTION_PX}px;
                width: {width}px; height: {RAIL_CAPTION_PX}px;
                font-size: 10px; color: {TEXT_MUTED}; font-family: {FONT_MONO};
                text-align: right; white-space: nowrap; overflow: hidden;
                user-select: none;
            ",
            "{caption}"
        }
        div {
            style: "
                position: absolute;
                left: {left}px; top: {top}px;
                width: {width}px; height: {height}px;
                cursor: {cursor};
            ",
            onmousedown: move |e| {
                e.prevent_default();
                let y = e.element_coordinates().y;
                drag_start_y.set(e.client_coordinates().y);
                drag_start_px.set(y);
                drag.write().press(&mut clock, scale.to_time(y));
            },

            // Track
            div {
                style: "
                    position: absolute;
                    left: {track_x}px; top: 0;
                    width: 4px; height: 100%;
                    border-radius: 2px;
                    background-color: {BG_SURFACE};
                    border: 1px solid {BORDER_DEFAULT};
                    pointer-events: none;
                ",
            }

            // Window handed to the next rail
            if let Some((band_top, band_height)) = window_band {
                div {
                    style: "
                        position: absolute;
                        left: {track_x - 2.0}px; top: {band_top}px;
                        width: 10px; height: {band_height}px;
                        border-radius: 3px;
                        background-color: {ACCENT_WINDOW};
                        opacity: 0.35;
                        pointer-events: none;
                    ",
                }
            }

            // Ticks and labels
            for (i, tick) in rail.ticks.as_slice().iter().enumerate() {
                {
                    let y = scale.to_px(*tick);
                    let label = rail.ticks.label(*tick);
                    rsx! {
                        div {
                            key: "tick-{i}",
                            div {
                                style: "
                                    position: absolute;
                                    left: {track_x - 8.0}px; top: {y}px;
                                    width: 8px; height: 1px;
                                    background-color: {BORDER_STRONG};
                                    pointer-events: none;
                                ",
                            }
                            div {
                                style: "
                                    position: absolute;
                                    right: {width - track_x + 12.0}px; top: {y - 6.0}px;
                                    font-size: 9px; line-height: 12px;
                                    color: {TEXT_DIM}; font-family: {FONT_MONO};
                                    white-space: nowrap;
                                    user-select: none; pointer-events: none;
                                ",
                                "{label}"
                            }
                        }
                    }
                }
            }

            if let Some(y) = committed_y {
                div {
                    style: "
                        position: absolute;
                        left: {track_x + 6.0}px; top: {y - 4.0}px;
                        width: 0; height: 0;
                        border-top: 4px solid transparent;
                        border-bottom: 4px solid transparent;
                        border-right: 6px solid {ACCENT_COMMITTED};
                        pointer-events: none;
                    ",
                }
            }

            // Thumb bound to the live time
            if let Some(y) = thumb_y {
                div {
                    style: "
                        position: absolute;
                        left: 0; top: {y}px;
                        width: {width}px; height: 1px;
                        background-color: {ACCENT_LIVE};
                        pointer-events: none;
                    ",
                }
                div {
                    style: "
                        position: absolute;
                        left: {track_x - 4.0}px; top: {y - 6.0}px;
                        width: 12px; height: 12px;
                        border-radius: 6px;
                        background-color: {ACCENT_LIVE};
                        box-shadow: 0 0 0 2px rgba(0,0,0,0.35);
                        pointer-events: none;
                    ",
                }
            }
        }

        if drag().is_dragging() {
            div {
                style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; z-index: 9999; cursor: grabbing;",
                oncontextmenu: move |e| e.prevent_default(),
                onmousemove: move |e| {
                    let px = drag_start_px() + (e.client_coordinates().y - drag_start_y());
                    drag.write().drag_to(&mut clock, scale.to_time(px));
                },
                onmouseup: move |_| {
                    drag.write().release(&mut clock);
                },
            }
        }
    }
}
