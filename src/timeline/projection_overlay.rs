use dioxus::prelude::*;

use crate::constants::{PROJECTION_FILL, PROJECTION_STROKE};
use crate::core::projection::ProjectionQuad;

/// SVG layer joining each parent's zoom window to the span of its child rail.
#[component]
pub fn ProjectionOverlay(quads: Vec<ProjectionQuad>, width: f64, height: f64) -> Element {
    rsx! {
        svg {
            width: "{width}",
            height: "{height}",
            style: "position: absolute; left: 0; top: 0; pointer-events: none; overflow: visible;",
            for (i, quad) in quads.iter().enumerate() {
                polygon {
                    key: "projection-{i}",
                    points: "{quad.svg_points()}",
                    fill: PROJECTION_FILL,
                    stroke: PROJECTION_STROKE,
                    stroke_width: "1",
                }
            }
        }
    }
}
