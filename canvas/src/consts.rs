//! Shared numeric constants for the canvas crate.

use crate::color::Rgb;

// ── Palette ─────────────────────────────────────────────────────

/// Surface background. Also what the eraser paints, so erasing over colored
/// pixels yields background paint, not transparency.
pub const BACKGROUND: Rgb = Rgb::new(0xff, 0xff, 0xff);

/// Default tool ink, and the fallback when a segment carries a color the
/// rasterizer cannot parse (the decode gate normally prevents that).
pub const DEFAULT_INK: Rgb = Rgb::new(0x00, 0x00, 0x00);

// ── Brush ───────────────────────────────────────────────────────

/// Default brush width in surface pixels.
pub const DEFAULT_BRUSH_SIZE: f64 = 4.0;

/// Narrowest brush the toolbar offers.
pub const MIN_BRUSH_SIZE: f64 = 1.0;

/// Widest brush the toolbar offers.
pub const MAX_BRUSH_SIZE: f64 = 30.0;
