use dioxus::prelude::*;
use crate::constants::*;
use crate::state::{use_clock, Clock};
use crate::timeline::MonthLine;

/// Live date, large, above the month strip of its year.
#[component]
pub fn DateHeader() -> Element {
    let clock = use_clock();
    let live = clock.live();
    let (date_label, year_label) = match live.to_date() {
        Some(date) => (date.format("%Y-%m-%d").to_string(), date.format("%Y").to_string()),
        None => ("----------".to_string(), String::new()),
    };

    rsx! {
        div {
            style: "
                height: {HEADER_HEIGHT}px; flex-shrink: 0;
                display: flex; flex-direction: column; justify-content: center; gap: 8px;
                padding: 0 16px;
                background-color: {BG_ELEVATED};
                border-bottom: 1px solid {BORDER_DEFAULT};
                box-sizing: border-box;
            ",
            div {
                style: "display: flex; align-items: baseline; gap: 12px;",
                span {
                    style: "font-size: 26px; font-weight: 600; color: {TEXT_PRIMARY}; font-family: {FONT_MONO};",
                    "{date_label}"
                }
                span { style: "font-size: 13px; color: {TEXT_MUTED};", "{year_label}" }
            }
            MonthLine { time: live }
        }
    }
}
