//! Core engine — all client-side whiteboard state with no transport attached.
//!
//! The engine reacts to pointer events by rasterizing locally first
//! (optimistic rendering: the drawer never waits on the network) and handing
//! the produced segment back to the caller for transmission. Remote segments
//! come in through [`EngineCore::apply_remote`], which rasterizes and
//! returns nothing, so received segments have no path back to the wire.

use strokes::StrokeSegment;

use crate::color::Rgb;
use crate::consts::{BACKGROUND, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
use crate::input::{GestureState, Mode, Point, ToolState};
use crate::raster;
use crate::surface::{Snapshot, Surface};

/// Client core: surface, toolbar state, and the active gesture.
pub struct EngineCore {
    surface: Surface,
    tool: ToolState,
    gesture: GestureState,
}

impl EngineCore {
    /// Create an engine with a background-filled surface.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            surface: Surface::new(width, height, BACKGROUND),
            tool: ToolState::default(),
            gesture: GestureState::Idle,
        }
    }

    // --- Pointer events ---

    /// Pointer down: begin a gesture. A single point is not a segment, so
    /// nothing is drawn yet.
    pub fn on_pointer_down(&mut self, point: Point) {
        self.gesture = GestureState::Drawing { last: point };
    }

    /// Pointer move. While a gesture is active this produces exactly one
    /// segment from the last point to `point`, rasterizes it locally, and
    /// returns it for transmission. Outside a gesture it is a no-op.
    pub fn on_pointer_move(&mut self, point: Point) -> Option<StrokeSegment> {
        let GestureState::Drawing { last } = self.gesture else {
            return None;
        };

        let segment = StrokeSegment {
            x0: last.x,
            y0: last.y,
            x1: point.x,
            y1: point.y,
            color: self.tool.effective_color(self.surface.background()).to_hex(),
            size: self.tool.brush_size,
        };

        raster::rasterize(&mut self.surface, &segment);
        self.gesture = GestureState::Drawing { last: point };
        Some(segment)
    }

    /// Pointer up or leave: end the gesture. Nothing is flushed — every
    /// segment was already handed off the instant it was drawn.
    pub fn on_pointer_up(&mut self) {
        self.gesture = GestureState::Idle;
    }

    // --- Remote application ---

    /// Rasterize a segment received from a peer. Apply-only: this never
    /// yields anything to transmit.
    pub fn apply_remote(&mut self, segment: &StrokeSegment) {
        raster::rasterize(&mut self.surface, segment);
    }

    // --- Toolbar ---

    pub fn set_color(&mut self, color: Rgb) {
        self.tool.color = color;
    }

    /// Set the brush width, clamped to the toolbar's slider range.
    pub fn set_brush_size(&mut self, size: f64) {
        self.tool.brush_size = size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.tool.mode = mode;
    }

    // --- Surface ---

    /// Fill the surface with the background color. Local only; clearing is
    /// not a replicated operation.
    pub fn clear(&mut self) {
        self.surface.clear();
    }

    /// Resize the surface. Returns the pre-resize snapshot; the host must
    /// schedule [`EngineCore::complete_resize`] with it to bring drawn
    /// content back.
    #[must_use]
    pub fn resize(&mut self, width: u32, height: u32) -> Snapshot {
        self.surface.resize(width, height)
    }

    /// Finish a resize by restoring the snapshot. Segments drawn since the
    /// matching [`EngineCore::resize`] may be overdrawn — the accepted race.
    pub fn complete_resize(&mut self, snapshot: &Snapshot) {
        self.surface.restore(snapshot);
    }

    /// Tear the engine down: pending resize restores become no-ops.
    pub fn retire(&mut self) {
        self.surface.retire();
    }

    // --- Queries ---

    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    #[must_use]
    pub fn tool(&self) -> &ToolState {
        &self.tool
    }

    /// True between pointer-down and pointer-up.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.gesture.is_drawing()
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
