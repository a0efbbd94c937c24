use std::time::Duration;

use dioxus::prelude::*;

use super::projection_overlay::ProjectionOverlay;
use super::rail::{Rail, RAIL_CAPTION_PX};
use crate::constants::{BG_BASE, CALENDAR_HEIGHT_SCRIPT, CALENDAR_PADDING_PX, TEXT_MUTED};
use crate::core::projection::{chain_quads, RailGeometry};
use crate::core::rail_chain::build_rail_chain;
use crate::core::time::Interval;
use crate::state::{use_clock, Clock, TimelineSettings};

/// Row of recursively zoomed rails over `interval`.
///
/// The chain is rebuilt whenever the committed time, the interval, or the
/// measured height changes. Live scrubbing only re-renders the rails.
#[component]
pub fn Calendar(interval: Option<Interval>, loading: bool, settings: TimelineSettings) -> Element {
    let clock = use_clock();
    let mut calendar_height = use_signal(|| None::<f64>);
    let mut calendar_eval = use_signal(|| None::<document::Eval>);

    use_effect(move || {
        if calendar_eval().is_some() {
            return;
        }
        let eval = document::eval(CALENDAR_HEIGHT_SCRIPT);
        calendar_eval.set(Some(eval));
    });

    use_future(move || async move {
        loop {
            let Some(eval) = calendar_eval() else {
                tokio::time::sleep(Duration::from_millis(100)).await;
                continue;
            };
            let mut eval = eval;
            loop {
                match eval.recv::<f64>().await {
                    Ok(height) => {
                        let height = height.max(0.0);
                        if calendar_height() != Some(height) {
                            calendar_height.set(Some(height));
                        }
                    }
                    Err(_) => break,
                }
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
    });

    let committed = clock.committed();

    let rail_top = CALENDAR_PADDING_PX + RAIL_CAPTION_PX;
    let rail_height = match calendar_height() {
        Some(measured) => (measured - rail_top - CALENDAR_PADDING_PX).max(0.0),
        None => settings.rail_height_px,
    };

    let chain = interval
        .map(|root| build_rail_chain(root, committed, &settings.chain_config(rail_height)))
        .unwrap_or_default();

    let geometries: Vec<RailGeometry> = (0..chain.len())
        .map(|depth| {
            RailGeometry::in_row(depth, settings.rail_width_px, settings.rail_gap_px, rail_top, rail_height)
        })
        .collect();

    let quads = chain_quads(&chain, &geometries);

    let content_width = geometries
        .last()
        .map(|g| g.right() + CALENDAR_PADDING_PX)
        .unwrap_or(0.0);
    let content_height = rail_top + rail_height + CALENDAR_PADDING_PX;

    let placeholder = if loading {
        Some("Loading battles…")
    } else if chain.is_empty() {
        Some("No events to display")
    } else {
        None
    };

    rsx! {
        div {
            id: "calendar-host",
            style: "
                flex: 1; min-width: 0; min-height: 0;
                position: relative;
                overflow-x: auto; overflow-y: hidden;
                background-color: {BG_BASE};
            ",

            if let Some(message) = placeholder {
                div {
                    style: "
                        position: absolute; inset: 0;
                        display: flex; align-items: center; justify-content: center;
                        color: {TEXT_MUTED}; font-size: 13px;
                    ",
                    "{message}"
                }
            } else {
                div {
                    style: "position: relative; margin-left: {CALENDAR_PADDING_PX}px; width: {content_width}px; height: {content_height}px;",
                    ProjectionOverlay {
                        quads: quads,
                        width: content_width,
                        height: content_height,
                    }
                    for (rail, geometry) in chain.iter().zip(geometries.iter()) {
                        Rail {
                            key: "{rail.depth}",
                            rail: rail.clone(),
                            geometry: *geometry,
                        }
                    }
                }
            }
        }
    }
}
