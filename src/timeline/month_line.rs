use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;

use crate::constants::{ACCENT_LIVE, BORDER_SUBTLE, TEXT_DIM, TEXT_PRIMARY};
use crate::core::time::TimePoint;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCell {
    pub name: &'static str,
    pub current: bool,
}

/// The twelve months of `date`'s year, with its own month flagged.
pub fn month_line(date: NaiveDate) -> [MonthCell; 12] {
    let current = date.month0() as usize;
    std::array::from_fn(|i| MonthCell {
        name: MONTH_NAMES[i],
        current: i == current,
    })
}

#[component]
pub fn MonthLine(time: TimePoint) -> Element {
    let Some(date) = time.to_date() else {
        return rsx! {};
    };
    let cells = month_line(date);

    rsx! {
        div {
            style: "display: flex; gap: 2px; font-size: 11px; user-select: none;",
            for cell in cells.iter() {
                {
                    let (color, weight, border) = if cell.current {
                        (TEXT_PRIMARY, "600", ACCENT_LIVE)
                    } else {
                        (TEXT_DIM, "400", BORDER_SUBTLE)
                    };
                    rsx! {
                        span {
                            key: "{cell.name}",
                            style: "
                                flex: 1; text-align: center; padding: 2px 0;
                                color: {color}; font-weight: {weight};
                                border-bottom: 2px solid {border};
                            ",
                            "{cell.name}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_line_flags_current_month() {
        let cells = month_line(NaiveDate::from_ymd_opt(1812, 9, 7).unwrap());
        let current: Vec<_> = cells.iter().filter(|c| c.current).map(|c| c.name).collect();
        assert_eq!(current, vec!["Sep"]);
        assert_eq!(cells[0].name, "Jan");
        assert_eq!(cells[11].name, "Dec");
    }

    #[test]
    fn test_month_line_january() {
        let cells = month_line(NaiveDate::from_ymd_opt(1800, 1, 1).unwrap());
        assert!(cells[0].current);
        assert!(cells[1..].iter().all(|c| !c.current));
    }
}
