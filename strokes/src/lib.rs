//! Shared stroke-segment model and JSON codec for the realtime WS transport.
//!
//! This crate owns the wire representation used by both `server` and `client`.
//! A [`StrokeSegment`] is the atomic replicated unit: one straight line
//! primitive with endpoints, color, and width. There is no message envelope,
//! no sequence number, and no acknowledgement — the relay forwards segment
//! messages as-is and a freehand stroke is simply a run of adjacent segments.

use serde::{Deserialize, Serialize};

/// Error returned by [`decode_segment`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The raw text could not be decoded as a JSON `StrokeSegment`.
    #[error("failed to decode stroke segment: {0}")]
    Decode(#[from] serde_json::Error),
    /// The `size` field is not a finite, positive stroke width.
    #[error("invalid stroke size: {0}")]
    InvalidSize(f64),
    /// The `color` field is not a `#rrggbb` hex string.
    #[error("invalid stroke color: {0:?}")]
    InvalidColor(String),
}

/// A single line segment on the realtime wire protocol.
///
/// Segments are anonymous and unordered across peers: no identity, no
/// timestamp, no author. The field names and types are the wire contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokeSegment {
    /// Start point x, in surface-local coordinates (origin top-left).
    pub x0: f64,
    /// Start point y.
    pub y0: f64,
    /// End point x.
    pub x1: f64,
    /// End point y.
    pub y1: f64,
    /// Stroke color as a `#rrggbb` hex string.
    pub color: String,
    /// Stroke width; finite and strictly positive.
    pub size: f64,
}

/// Encode a segment into its JSON wire text.
///
/// # Panics
///
/// Never panics in practice; serializing a struct of numbers and a string
/// into a `String` is infallible.
#[must_use]
pub fn encode_segment(segment: &StrokeSegment) -> String {
    serde_json::to_string(segment).unwrap_or_default()
}

/// Decode JSON wire text into a segment.
///
/// This is the single validation gate for inbound data: everything
/// downstream (rasterization, relay fan-out) assumes a segment returned
/// here is well-formed.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed JSON or missing/mistyped
/// fields (serde_json also rejects numeric literals that overflow f64),
/// [`CodecError::InvalidSize`] for a non-positive width, and
/// [`CodecError::InvalidColor`] for a color that is not `#rrggbb`.
pub fn decode_segment(text: &str) -> Result<StrokeSegment, CodecError> {
    let segment: StrokeSegment = serde_json::from_str(text)?;

    if segment.size <= 0.0 {
        return Err(CodecError::InvalidSize(segment.size));
    }
    if !is_hex_color(&segment.color) {
        return Err(CodecError::InvalidColor(segment.color));
    }

    Ok(segment)
}

/// Whether `text` is a `#` followed by exactly six hex digits.
#[must_use]
pub fn is_hex_color(text: &str) -> bool {
    let Some(digits) = text.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
