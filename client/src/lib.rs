//! Whiteboard client: wires the canvas engine to a relay over WebSocket.
//!
//! Three layers, outermost first:
//!
//! | Module | Role |
//! |--------|------|
//! | [`net`] | tokio-tungstenite transport loop and its lifecycle handle |
//! | [`controller`] | [`controller::BoardController`]: input hooks in, segments out |
//! | [`channel`] | [`channel::SyncChannel`]: connectivity status + best-effort send |
//!
//! The engine never learns about the network: the controller hands produced
//! segments to the channel, and inbound wire text to the engine. Everything
//! below [`net`] is synchronous and can be driven headless in tests.

pub mod channel;
pub mod controller;
pub mod net;
