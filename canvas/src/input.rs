//! Input model: tool state and the gesture state machine.
//!
//! `ToolState` captures the toolbar's current color, brush width, and mode;
//! it is an explicit input to segment construction, never ambient state.
//! `GestureState` is the client-local pointer tracking between pointer-down
//! and pointer-up — it is never transmitted.

use crate::color::Rgb;
use crate::consts::{DEFAULT_BRUSH_SIZE, DEFAULT_INK};

/// A point in surface-local coordinates, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Whether the active tool paints ink or background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Paint with the selected tool color.
    #[default]
    Draw,
    /// Paint with the surface background color. Not true pixel deletion:
    /// erasing over a colored region leaves background paint.
    Erase,
}

/// Toolbar state read when stamping outgoing segments.
#[derive(Debug, Clone, Copy)]
pub struct ToolState {
    /// Selected ink color.
    pub color: Rgb,
    /// Selected brush width in surface pixels.
    pub brush_size: f64,
    /// Draw or erase.
    pub mode: Mode,
}

impl Default for ToolState {
    fn default() -> Self {
        Self { color: DEFAULT_INK, brush_size: DEFAULT_BRUSH_SIZE, mode: Mode::Draw }
    }
}

impl ToolState {
    /// The color an outgoing segment carries: the tool color when drawing,
    /// the background color when erasing.
    #[must_use]
    pub fn effective_color(&self, background: Rgb) -> Rgb {
        match self.mode {
            Mode::Draw => self.color,
            Mode::Erase => background,
        }
    }
}

/// The active gesture, tracked between pointer-down and pointer-up/leave.
#[derive(Debug, Clone, Copy, Default)]
pub enum GestureState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Pointer is down; `last` is the most recent point, the start of the
    /// next segment.
    Drawing {
        /// Last known surface coordinate of the gesture.
        last: Point,
    },
}

impl GestureState {
    /// True between pointer-down and pointer-up.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }
}

#[cfg(test)]
#[path = "input_test.rs"]
mod tests;
