//! Client-side canvas core for the collaborative whiteboard.
//!
//! This crate owns everything a drawing client does between a pointer event
//! and a wire message: tracking the active gesture, stamping tool state onto
//! outgoing stroke segments, rasterizing segments onto the local surface
//! (whether they originated here or on a peer), and surviving resize without
//! discarding drawn pixels. It has no transport — the `client` crate wires
//! an [`engine::EngineCore`] to a WebSocket channel, and tests drive the
//! engine headless.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level testable [`engine::EngineCore`] |
//! | [`surface`] | Raster buffer with snapshot/restore resize |
//! | [`raster`] | Stroke-segment rasterizer |
//! | [`input`] | Tool state and the gesture state machine |
//! | [`color`] | Hex color model |
//! | [`consts`] | Shared numeric constants (brush limits, palette defaults) |

pub mod color;
pub mod consts;
pub mod engine;
pub mod input;
pub mod raster;
pub mod surface;
