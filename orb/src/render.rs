//! Rendering: paints a [`Scene`] to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a finished scene and produces pixels; it does not mutate any
//! simulation state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Orb::frame`]) hands the result to the host.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::color::Rgb;
use crate::scene::{Link, Point, Polygon, Ring, Scene, Sprite, Trail};

/// Alpha of the background wash at its center and at 40% of the radius.
const WASH_INNER_ALPHA: f64 = 8.0 / 255.0;
const WASH_MID_ALPHA: f64 = 4.0 / 255.0;

/// Particle glow alpha relative to the particle's own opacity.
const SPRITE_GLOW_RATIO: f64 = 100.0 / 255.0;

/// Draw the full scene.
///
/// `dpr` is the device pixel ratio; the canvas backing store is expected to
/// be `scene.size * dpr` pixels square.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, scene: &Scene, dpr: f64) -> Result<(), JsValue> {
    // Layer 1: clear and background wash.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, scene.size, scene.size);
    draw_wash(ctx, scene)?;

    // Layer 2: glow rings.
    for ring in &scene.rings {
        draw_ring(ctx, scene.color, ring);
    }

    // Layer 3: particles with trails, then links.
    for sprite in &scene.sprites {
        if let Some(trail) = &sprite.trail {
            draw_trail(ctx, scene.color, sprite.pos, trail)?;
        }
        draw_sprite(ctx, scene.color, sprite)?;
    }
    for link in &scene.links {
        draw_link(ctx, scene.color, link);
    }

    // Layer 4: core ornament.
    for polygon in &scene.core {
        draw_polygon(ctx, scene.color, polygon);
    }

    Ok(())
}

fn draw_wash(ctx: &CanvasRenderingContext2d, scene: &Scene) -> Result<(), JsValue> {
    let c = scene.center;
    let gradient = ctx.create_radial_gradient(c.x, c.y, 0.0, c.x, c.y, scene.radius)?;
    gradient.add_color_stop(0.0, &scene.color.rgba(WASH_INNER_ALPHA))?;
    gradient.add_color_stop(0.4, &scene.color.rgba(WASH_MID_ALPHA))?;
    gradient.add_color_stop(1.0, "transparent")?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, scene.size, scene.size);
    Ok(())
}

fn draw_ring(ctx: &CanvasRenderingContext2d, color: Rgb, ring: &Ring) {
    ctx.save();
    if ring.blur > 0.0 {
        ctx.set_shadow_blur(ring.blur);
        ctx.set_shadow_color(&color.rgba(ring.opacity));
    }
    trace_closed_path(ctx, &ring.points);
    ctx.set_stroke_style_str(&color.rgba(ring.opacity));
    ctx.set_line_width(ring.width);
    ctx.stroke();
    ctx.restore();
}

fn draw_trail(ctx: &CanvasRenderingContext2d, color: Rgb, head: Point, trail: &Trail) -> Result<(), JsValue> {
    let gradient = ctx.create_linear_gradient(trail.tail.x, trail.tail.y, head.x, head.y);
    gradient.add_color_stop(0.0, &color.rgba(0.0))?;
    gradient.add_color_stop(1.0, &color.rgba(trail.opacity))?;
    ctx.begin_path();
    ctx.move_to(trail.tail.x, trail.tail.y);
    ctx.line_to(head.x, head.y);
    ctx.set_stroke_style_canvas_gradient(&gradient);
    ctx.set_line_width(trail.width);
    ctx.stroke();
    Ok(())
}

fn draw_sprite(ctx: &CanvasRenderingContext2d, color: Rgb, sprite: &Sprite) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_shadow_blur(sprite.size * 2.0);
    ctx.set_shadow_color(&color.rgba(sprite.opacity * SPRITE_GLOW_RATIO));
    ctx.begin_path();
    ctx.arc(sprite.pos.x, sprite.pos.y, sprite.size, 0.0, TAU)?;
    ctx.set_fill_style_str(&color.rgba(sprite.opacity));
    ctx.fill();
    ctx.restore();
    Ok(())
}

fn draw_link(ctx: &CanvasRenderingContext2d, color: Rgb, link: &Link) {
    ctx.begin_path();
    ctx.move_to(link.from.x, link.from.y);
    ctx.line_to(link.to.x, link.to.y);
    ctx.set_stroke_style_str(&color.rgba(link.opacity));
    ctx.set_line_width(link.width);
    ctx.stroke();
}

fn draw_polygon(ctx: &CanvasRenderingContext2d, color: Rgb, polygon: &Polygon) {
    trace_closed_path(ctx, &polygon.points);
    ctx.set_stroke_style_str(&color.rgba(polygon.opacity));
    ctx.set_line_width(1.0);
    ctx.stroke();
}

fn trace_closed_path(ctx: &CanvasRenderingContext2d, points: &[Point]) {
    ctx.begin_path();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        ctx.move_to(first.x, first.y);
    }
    for p in iter {
        ctx.line_to(p.x, p.y);
    }
    ctx.close_path();
}
