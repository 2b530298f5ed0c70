#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{BACKGROUND, DEFAULT_BRUSH_SIZE, DEFAULT_INK};

// =============================================================
// Mode
// =============================================================

#[test]
fn mode_default_is_draw() {
    assert_eq!(Mode::default(), Mode::Draw);
}

// =============================================================
// ToolState
// =============================================================

#[test]
fn tool_state_defaults() {
    let tool = ToolState::default();
    assert_eq!(tool.color, DEFAULT_INK);
    assert_eq!(tool.brush_size, DEFAULT_BRUSH_SIZE);
    assert_eq!(tool.mode, Mode::Draw);
}

#[test]
fn effective_color_in_draw_mode_is_tool_color() {
    let tool = ToolState { color: Rgb::new(0xff, 0, 0), ..ToolState::default() };
    assert_eq!(tool.effective_color(BACKGROUND), Rgb::new(0xff, 0, 0));
}

#[test]
fn effective_color_in_erase_mode_is_background_regardless_of_tool_color() {
    let tool = ToolState {
        color: Rgb::new(0xff, 0, 0),
        mode: Mode::Erase,
        ..ToolState::default()
    };
    assert_eq!(tool.effective_color(BACKGROUND), BACKGROUND);
    assert_eq!(
        tool.effective_color(Rgb::new(1, 2, 3)),
        Rgb::new(1, 2, 3),
        "erase tracks whatever the surface background is"
    );
}

// =============================================================
// GestureState
// =============================================================

#[test]
fn gesture_default_is_idle() {
    assert!(!GestureState::default().is_drawing());
}

#[test]
fn drawing_state_reports_is_drawing() {
    let gesture = GestureState::Drawing { last: Point::new(3.0, 4.0) };
    assert!(gesture.is_drawing());
}

#[test]
fn point_new() {
    let p = Point::new(1.5, -2.0);
    assert_eq!(p.x, 1.5);
    assert_eq!(p.y, -2.0);
}
