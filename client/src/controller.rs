//! Board controller: the surface the UI layer talks to.
//!
//! Input hooks rasterize locally first and transmit second (optimistic
//! rendering: the drawer never waits for the relay). Inbound wire text is
//! decoded, applied to the same rasterizer, and never retransmitted.
//! Malformed inbound payloads are dropped with a warning.

use canvas::color::Rgb;
use canvas::engine::EngineCore;
use canvas::input::{Mode, Point};
use canvas::surface::{Snapshot, Surface};

use crate::channel::SyncChannel;

/// One client's whiteboard: engine plus sync channel.
pub struct BoardController {
    engine: EngineCore,
    channel: SyncChannel,
}

impl BoardController {
    /// Create a controller with a blank surface and a disconnected channel.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { engine: EngineCore::new(width, height), channel: SyncChannel::new() }
    }

    // --- Input hooks (UI layer) ---

    pub fn on_stroke_start(&mut self, point: Point) {
        self.engine.on_pointer_down(point);
    }

    /// Extend the active gesture: rasterize locally, then hand the segment
    /// to the channel. Fire-and-forget — a disconnected channel drops it.
    pub fn on_stroke_move(&mut self, point: Point) {
        if let Some(segment) = self.engine.on_pointer_move(point) {
            self.channel.send(&segment);
        }
    }

    pub fn on_stroke_end(&mut self) {
        self.engine.on_pointer_up();
    }

    // --- Inbound (transport loop) ---

    /// Apply one inbound wire message. Apply-only: nothing received here is
    /// ever retransmitted.
    pub fn on_message(&mut self, text: &str) {
        match strokes::decode_segment(text) {
            Ok(segment) => self.engine.apply_remote(&segment),
            Err(error) => {
                tracing::warn!(%error, "dropping malformed inbound segment");
            }
        }
    }

    // --- Toolbar ---

    pub fn set_color(&mut self, color: Rgb) {
        self.engine.set_color(color);
    }

    pub fn set_brush_size(&mut self, size: f64) {
        self.engine.set_brush_size(size);
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.engine.set_mode(mode);
    }

    // --- Surface ---

    /// Clear the local surface. Never transmitted: clearing is not a
    /// replicated operation, only stroke segments replicate.
    pub fn clear(&mut self) {
        self.engine.clear();
    }

    /// Resize the surface; the caller schedules [`Self::complete_resize`]
    /// with the returned snapshot.
    #[must_use]
    pub fn resize(&mut self, width: u32, height: u32) -> Snapshot {
        self.engine.resize(width, height)
    }

    pub fn complete_resize(&mut self, snapshot: &Snapshot) {
        self.engine.complete_resize(snapshot);
    }

    /// Tear down on view unmount: pending resize restores become no-ops.
    pub fn retire(&mut self) {
        self.engine.retire();
    }

    // --- Queries / wiring ---

    /// Connectivity indicator for the UI.
    #[must_use]
    pub fn connected(&self) -> bool {
        self.channel.is_connected()
    }

    #[must_use]
    pub fn surface(&self) -> &Surface {
        self.engine.surface()
    }

    /// The sync channel, for the transport loop to attach/detach.
    pub fn channel_mut(&mut self) -> &mut SyncChannel {
        &mut self.channel
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
