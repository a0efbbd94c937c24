use dioxus::prelude::*;

use crate::constants::{ACCENT_LIVE, BG_ELEVATED, BORDER_DEFAULT, SLIDER_HEIGHT, TEXT_DIM};
use crate::core::time::Interval;
use crate::state::{use_clock, Clock};
use crate::utils::parse_time_input;

/// Horizontal scrubber across the whole dataset.
///
/// `marks` are event start dates as fractions of `interval`.
#[component]
pub fn TimeSlider(interval: Option<Interval>, marks: Vec<f64>) -> Element {
    let mut clock = use_clock();
    let live = clock.live();

    let Some(interval) = interval.filter(|i| !i.is_degenerate()) else {
        return rsx! {
            div { style: "height: {SLIDER_HEIGHT}px; background-color: {BG_ELEVATED}; border-top: 1px solid {BORDER_DEFAULT};" }
        };
    };
    let min = interval.start.seconds();
    let max = interval.end.seconds();
    let value = interval.clamp(live).seconds();

    rsx! {
        div {
            style: "
                height: {SLIDER_HEIGHT}px; padding: 6px 16px 0 16px;
                display: flex; flex-direction: column; gap: 2px;
                background-color: {BG_ELEVATED};
                border-top: 1px solid {BORDER_DEFAULT};
                box-sizing: border-box;
            ",
            input {
                r#type: "range",
                min: "{min}",
                max: "{max}",
                step: "86400",
                value: "{value}",
                style: "width: 100%; accent-color: {ACCENT_LIVE}; margin: 0;",
                // The range input steps itself; keep app hotkeys out of it.
                onkeydown: move |e| e.stop_propagation(),
                oninput: move |e| {
                    let t = parse_time_input(&e.value(), clock.live());
                    clock.set_live(interval.clamp(t));
                },
                onchange: move |e| {
                    let t = parse_time_input(&e.value(), clock.live());
                    clock.set_live(interval.clamp(t));
                    clock.commit();
                },
            }
            div {
                style: "position: relative; height: 8px; margin: 0 7px;",
                for (i, mark) in marks.iter().enumerate() {
                    div {
                        key: "mark-{i}",
                        style: "
                            position: absolute;
                            left: {mark * 100.0}%; top: 0;
                            width: 1px; height: 8px;
                            background-color: {TEXT_DIM};
                            pointer-events: none;
                        ",
                    }
                }
            }
        }
    }
}
