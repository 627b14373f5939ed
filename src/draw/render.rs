//! Cairo-based rendering functions for strokes.

use super::color::Color;
use super::model::StrokeModel;
use super::stroke::{Point, Stroke};

/// Renders the whole model: committed strokes in order, then the stroke in
/// progress on top.
pub fn render_model(ctx: &cairo::Context, model: &StrokeModel) {
    render_strokes(ctx, model.committed());
    if let Some(current) = model.current() {
        render_stroke(ctx, current);
    }
}

/// Renders all strokes in a collection to a Cairo context.
///
/// Strokes are drawn in the order they appear (first stroke = bottom layer).
pub fn render_strokes(ctx: &cairo::Context, strokes: &[Stroke]) {
    for stroke in strokes {
        render_stroke(ctx, stroke);
    }
}

/// Renders a single stroke using its own color and thickness.
pub fn render_stroke(ctx: &cairo::Context, stroke: &Stroke) {
    render_polyline(ctx, &stroke.points, stroke.color, stroke.thickness);
}

/// Render freehand polyline through points.
///
/// A single point still produces a segment (of zero length) so round caps
/// turn a tap into a dot.
pub fn render_polyline(ctx: &cairo::Context, points: &[Point], color: Color, thick: f64) {
    let Some(&(x0, y0)) = points.first() else {
        return;
    };

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(x0, y0);
    if points.len() == 1 {
        ctx.line_to(x0, y0);
    }
    for &(x, y) in &points[1..] {
        ctx.line_to(x, y);
    }

    let _ = ctx.stroke();
}

/// Fills the entire surface with a solid color.
pub fn fill_background(ctx: &cairo::Context, color: Color) {
    let _ = ctx.save();
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_operator(cairo::Operator::Source);
    let _ = ctx.paint();
    let _ = ctx.restore();
}

/// Wipes the surface back to fully transparent pixels.
pub fn clear_surface(ctx: &cairo::Context) {
    fill_background(ctx, super::color::TRANSPARENT);
}
