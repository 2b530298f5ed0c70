//! Hex color model shared by the rasterizer and the toolbar state.

/// Error returned by [`Rgb::parse`].
#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    /// The text is not a `#rrggbb` hex triplet.
    #[error("malformed hex color: {0:?}")]
    Malformed(String),
}

/// An opaque RGB color. The canvas has no alpha channel — erasing paints
/// the background color rather than producing transparency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` string (hex digits in either case).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Malformed`] for anything that is not a `#`
    /// followed by exactly six hex digits.
    pub fn parse(text: &str) -> Result<Self, ColorError> {
        let malformed = || ColorError::Malformed(text.to_owned());

        let digits = text.strip_prefix('#').ok_or_else(malformed)?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(malformed());
        }

        let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| malformed())?;
        let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| malformed())?;
        let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| malformed())?;
        Ok(Self { r, g, b })
    }

    /// Lowercase `#rrggbb` representation, the wire form of a color.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Pack into `0xRRGGBB`, the surface's pixel representation.
    #[must_use]
    pub fn packed(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Unpack from `0xRRGGBB`. The top byte is ignored.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_packed(pixel: u32) -> Self {
        Self {
            r: ((pixel >> 16) & 0xff) as u8,
            g: ((pixel >> 8) & 0xff) as u8,
            b: (pixel & 0xff) as u8,
        }
    }
}

#[cfg(test)]
#[path = "color_test.rs"]
mod tests;
