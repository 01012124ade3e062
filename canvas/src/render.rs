//! Rendering: draws the surface to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of the surface and produces pixels; it does
//! not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<_, JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::collections::HashMap;
use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::consts::{TEXT_FONT_FAMILY, TEXT_FONT_SIZE, TEXT_FONT_WEIGHT, TEXT_LINE_HEIGHT};
use crate::doc::{CanvasObject, ShapeKind};
use crate::geom::{Bounds, Point};
use crate::hit;
use crate::input::Corner;
use crate::surface::{Brush, Surface};

/// Selection dash segment length in pixels.
const SELECTION_DASH_PX: f64 = 4.0;
const SELECTION_COLOR: &str = "#1E90FF";
/// Stroke used for lines and paths that carry no stroke color.
const FALLBACK_STROKE: &str = "#000000";

/// Draw the full scene: objects, selection UI, marquee and the unfinished
/// brush stroke. `dpr` is the device pixel ratio.
///
/// Returns `true` if an image was not decoded yet and a later redraw is needed.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    surface: &Surface,
    images: &HashMap<String, HtmlImageElement>,
    dpr: f64,
) -> Result<bool, JsValue> {
    // Layer 1: clear.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, surface.width(), surface.height());

    // Layer 2: objects in z-order (bottom first).
    let mut pending = false;
    for obj in surface.objects() {
        pending |= draw_object(ctx, obj, images)?;
    }

    // Layer 3: selection UI.
    let active = surface.active_objects();
    let show_handles = active.len() == 1;
    for obj in active {
        draw_selection(ctx, obj, show_handles)?;
    }

    if let Some(m) = surface.marquee() {
        draw_marquee(ctx, m)?;
    }

    let stroke = surface.brush_points();
    if !stroke.is_empty() {
        draw_brush_preview(ctx, stroke, surface.brush())?;
    }

    Ok(pending)
}

// =============================================================
// Object dispatch
// =============================================================

fn draw_object(
    ctx: &CanvasRenderingContext2d,
    obj: &CanvasObject,
    images: &HashMap<String, HtmlImageElement>,
) -> Result<bool, JsValue> {
    ctx.save();
    ctx.translate(obj.left, obj.top)?;
    ctx.scale(obj.scale_x, obj.scale_y)?;

    let drawn = match obj.kind {
        ShapeKind::Rect => draw_rect(ctx, obj).map(|()| false),
        ShapeKind::Circle => draw_circle(ctx, obj).map(|()| false),
        ShapeKind::Triangle => draw_triangle(ctx, obj).map(|()| false),
        ShapeKind::Line | ShapeKind::Path => draw_polyline(ctx, obj).map(|()| false),
        ShapeKind::Text => draw_text(ctx, obj).map(|()| false),
        ShapeKind::Image => draw_image(ctx, obj, images),
    };

    ctx.restore();
    drawn
}

// =============================================================
// Shape renderers (local frame)
// =============================================================

fn draw_rect(ctx: &CanvasRenderingContext2d, obj: &CanvasObject) -> Result<(), JsValue> {
    if let Some(fill) = obj.fill.as_deref() {
        ctx.set_fill_style_str(fill);
        ctx.fill_rect(0.0, 0.0, obj.width, obj.height);
    }
    if apply_stroke_style(ctx, obj) {
        ctx.stroke_rect(0.0, 0.0, obj.width, obj.height);
    }
    Ok(())
}

fn draw_circle(ctx: &CanvasRenderingContext2d, obj: &CanvasObject) -> Result<(), JsValue> {
    if obj.width <= 0.0 || obj.height <= 0.0 {
        return Ok(());
    }
    let (rx, ry) = (obj.width / 2.0, obj.height / 2.0);
    ctx.begin_path();
    ctx.ellipse(rx, ry, rx, ry, 0.0, 0.0, 2.0 * PI)?;
    fill_and_stroke(ctx, obj);
    Ok(())
}

fn draw_triangle(ctx: &CanvasRenderingContext2d, obj: &CanvasObject) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.move_to(obj.width / 2.0, 0.0); // apex
    ctx.line_to(obj.width, obj.height);
    ctx.line_to(0.0, obj.height);
    ctx.close_path();
    fill_and_stroke(ctx, obj);
    Ok(())
}

fn draw_polyline(ctx: &CanvasRenderingContext2d, obj: &CanvasObject) -> Result<(), JsValue> {
    let color = obj.stroke.as_deref().or(obj.fill.as_deref()).unwrap_or(FALLBACK_STROKE);
    let width = obj.stroke_width.unwrap_or(1.0);
    stroke_points(ctx, &obj.points, color, width)
}

fn draw_text(ctx: &CanvasRenderingContext2d, obj: &CanvasObject) -> Result<(), JsValue> {
    let Some(text) = obj.text.as_deref() else {
        return Ok(());
    };
    let size = obj.font_size.unwrap_or(TEXT_FONT_SIZE);
    let weight = obj.font_weight.as_deref().unwrap_or(TEXT_FONT_WEIGHT);
    let family = obj.font_family.as_deref().unwrap_or(TEXT_FONT_FAMILY);

    ctx.set_font(&format!("{weight} {size}px {family}"));
    ctx.set_text_align("left");
    ctx.set_text_baseline("top");
    ctx.set_fill_style_str(obj.fill.as_deref().unwrap_or(FALLBACK_STROKE));

    let line_height = size * TEXT_LINE_HEIGHT;
    let mut y = 0.0;
    for line in text.lines() {
        ctx.fill_text(line, 0.0, y)?;
        y += line_height;
    }
    Ok(())
}

/// Returns `true` when the bitmap is not ready yet.
fn draw_image(
    ctx: &CanvasRenderingContext2d,
    obj: &CanvasObject,
    images: &HashMap<String, HtmlImageElement>,
) -> Result<bool, JsValue> {
    let Some(img) = obj.src.as_deref().and_then(|src| images.get(src)) else {
        return Ok(true);
    };
    if !img.complete() || img.natural_width() == 0 {
        return Ok(true);
    }
    ctx.draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, 0.0, obj.width, obj.height)?;
    Ok(false)
}

// =============================================================
// Selection UI (canvas frame)
// =============================================================

fn draw_selection(ctx: &CanvasRenderingContext2d, obj: &CanvasObject, show_handles: bool) -> Result<(), JsValue> {
    let b = obj.bounds();

    ctx.save();
    ctx.set_stroke_style_str(SELECTION_COLOR);
    ctx.set_line_width(1.0);
    set_dash(ctx, SELECTION_DASH_PX)?;
    ctx.stroke_rect(b.x, b.y, b.width, b.height);
    set_dash(ctx, 0.0)?;

    if show_handles {
        ctx.set_fill_style_str("#fff");
        for corner in Corner::ALL {
            let h = hit::handle_bounds(corner.position(&b));
            ctx.fill_rect(h.x, h.y, h.width, h.height);
            ctx.stroke_rect(h.x, h.y, h.width, h.height);
        }
    }

    ctx.restore();
    Ok(())
}

fn draw_marquee(ctx: &CanvasRenderingContext2d, marquee: Bounds) -> Result<(), JsValue> {
    ctx.save();
    set_dash(ctx, SELECTION_DASH_PX)?;
    ctx.set_stroke_style_str(SELECTION_COLOR);
    ctx.set_fill_style_str("rgba(30, 144, 255, 0.12)");
    ctx.set_line_width(1.0);
    ctx.fill_rect(marquee.x, marquee.y, marquee.width, marquee.height);
    ctx.stroke_rect(marquee.x, marquee.y, marquee.width, marquee.height);
    set_dash(ctx, 0.0)?;
    ctx.restore();
    Ok(())
}

fn draw_brush_preview(ctx: &CanvasRenderingContext2d, points: &[Point], brush: &Brush) -> Result<(), JsValue> {
    ctx.save();
    let drawn = stroke_points(ctx, points, &brush.color, brush.width);
    ctx.restore();
    drawn
}

// =============================================================
// Helpers
// =============================================================

/// Stroke a round-capped polyline; a single point becomes a dot.
fn stroke_points(ctx: &CanvasRenderingContext2d, points: &[Point], color: &str, width: f64) -> Result<(), JsValue> {
    let Some((first, rest)) = points.split_first() else {
        return Ok(());
    };
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    if rest.is_empty() {
        ctx.set_fill_style_str(color);
        ctx.begin_path();
        ctx.arc(first.x, first.y, width / 2.0, 0.0, 2.0 * PI)?;
        ctx.fill();
        return Ok(());
    }
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(width);
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    ctx.stroke();
    Ok(())
}

fn fill_and_stroke(ctx: &CanvasRenderingContext2d, obj: &CanvasObject) {
    if let Some(fill) = obj.fill.as_deref() {
        ctx.set_fill_style_str(fill);
        ctx.fill();
    }
    if apply_stroke_style(ctx, obj) {
        ctx.stroke();
    }
}

/// Apply the object's stroke style. Returns `false` when it has no stroke.
fn apply_stroke_style(ctx: &CanvasRenderingContext2d, obj: &CanvasObject) -> bool {
    let Some(stroke) = obj.stroke.as_deref() else {
        return false;
    };
    ctx.set_stroke_style_str(stroke);
    ctx.set_line_width(obj.stroke_width.unwrap_or(1.0));
    true
}

/// Set an even dash pattern; `0` clears it.
fn set_dash(ctx: &CanvasRenderingContext2d, dash: f64) -> Result<(), JsValue> {
    let pattern = js_sys::Array::new();
    if dash > 0.0 {
        pattern.push(&dash.into());
        pattern.push(&dash.into());
    }
    ctx.set_line_dash(&pattern)
}
