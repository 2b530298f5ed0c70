//! Stroke rasterizer: turns one segment into pixels.
//!
//! [`rasterize`] is a pure function of its explicit arguments — it never
//! reads gesture or tool state — so a locally drawn segment and the same
//! segment received from a peer produce identical pixels. Out-of-range
//! coordinates are clipped by the surface, never rejected.

use strokes::StrokeSegment;

use crate::color::Rgb;
use crate::consts::DEFAULT_INK;
use crate::surface::Surface;

/// Draw one round-capped straight line stroke onto the surface.
///
/// A pixel is painted iff the distance from its center to the segment is at
/// most `size / 2`. A degenerate segment (both endpoints equal) paints a dot.
pub fn rasterize(surface: &mut Surface, segment: &StrokeSegment) {
    // Senders validate color at the decode gate; unparseable text on the
    // local path falls back to the default ink.
    let ink = Rgb::parse(&segment.color).unwrap_or(DEFAULT_INK).packed();
    let radius = segment.size / 2.0;

    // Bounding box of the capped stroke, clipped to the buffer.
    let min_x = clip_low(segment.x0.min(segment.x1) - radius);
    let min_y = clip_low(segment.y0.min(segment.y1) - radius);
    let max_x = clip_high(segment.x0.max(segment.x1) + radius, surface.width());
    let max_y = clip_high(segment.y0.max(segment.y1) + radius, surface.height());

    let radius_sq = radius * radius;
    for y in min_y..max_y {
        for x in min_x..max_x {
            let cx = f64::from(x) + 0.5;
            let cy = f64::from(y) + 0.5;
            let d_sq = dist_sq_to_segment(cx, cy, segment);
            if d_sq <= radius_sq {
                surface.set_pixel(x, y, ink);
            }
        }
    }
}

/// Squared distance from a point to the segment (projection clamped to the
/// endpoints, which is what produces the round caps).
fn dist_sq_to_segment(px: f64, py: f64, segment: &StrokeSegment) -> f64 {
    let dx = segment.x1 - segment.x0;
    let dy = segment.y1 - segment.y0;
    let len_sq = dx.mul_add(dx, dy * dy);

    let t = if len_sq > 0.0 {
        let along = (px - segment.x0).mul_add(dx, (py - segment.y0) * dy);
        (along / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let nearest_x = t.mul_add(dx, segment.x0);
    let nearest_y = t.mul_add(dy, segment.y0);
    let ex = px - nearest_x;
    let ey = py - nearest_y;
    ex.mul_add(ex, ey * ey)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clip_low(coord: f64) -> u32 {
    coord.floor().max(0.0) as u32
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clip_high(coord: f64, limit: u32) -> u32 {
    coord.ceil().clamp(0.0, f64::from(limit)) as u32
}

#[cfg(test)]
#[path = "raster_test.rs"]
mod tests;
