//! Geometry of the quadrilateral that links a parent rail to the window its
//! child rail displays.
//!
//! Rail geometry is laid out analytically from settings, so the projection
//! needs no measurement of rendered elements.

use super::rail_chain::RailDescriptor;
use super::ticks::Scale;
use super::time::Interval;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Placement of one rail's track in calendar pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RailGeometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl RailGeometry {
    /// Geometry of the rail at `depth` in a left-to-right row.
    pub fn in_row(depth: usize, rail_width: f64, gap: f64, top: f64, height: f64) -> Self {
        Self {
            left: depth as f64 * (rail_width + gap),
            top,
            width: rail_width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn is_laid_out(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Corners in clockwise order starting at the parent's upper edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionQuad {
    pub parent_top: Point,
    pub child_top: Point,
    pub child_bottom: Point,
    pub parent_bottom: Point,
}

impl ProjectionQuad {
    /// Corners as an SVG `points` attribute.
    pub fn svg_points(&self) -> String {
        [self.parent_top, self.child_top, self.child_bottom, self.parent_bottom]
            .iter()
            .map(|p| format!("{:.1},{:.1}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Quad from the pixel span of `window` on the parent's right edge to the
/// full height of the child's left edge.
///
/// Returns `None` while either rail has no size, when the parent has no scale,
/// or when the window is degenerate or lies outside the parent domain.
pub fn project_window(
    parent_scale: &Scale,
    window: Interval,
    parent: RailGeometry,
    child: RailGeometry,
) -> Option<ProjectionQuad> {
    if !parent.is_laid_out() || !child.is_laid_out() {
        return None;
    }
    let domain = parent_scale.domain()?;
    if window.is_degenerate() || window.start < domain.start || window.end > domain.end {
        return None;
    }

    let y_scale = parent.height / parent_scale.height();
    let span_top = parent.top + parent_scale.to_px(window.start) * y_scale;
    let span_bottom = parent.top + parent_scale.to_px(window.end) * y_scale;

    Some(ProjectionQuad {
        parent_top: Point::new(parent.right(), span_top),
        child_top: Point::new(child.left, child.top),
        child_bottom: Point::new(child.left, child.bottom()),
        parent_bottom: Point::new(parent.right(), span_bottom),
    })
}

/// One quad per rail that hands a window to the rail after it.
pub fn chain_quads(chain: &[RailDescriptor], geometries: &[RailGeometry]) -> Vec<ProjectionQuad> {
    chain
        .windows(2)
        .zip(geometries.windows(2))
        .filter(|(rails, _)| rails[0].has_child())
        .filter_map(|(rails, geoms)| {
            let window = rails[0].zoom_window?;
            project_window(&rails[0].scale, window, geoms[0], geoms[1])
        })
        .collect()
}
