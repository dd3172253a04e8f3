//! Color types for the tri-color panel
//!
//! This module defines the [`Color`] enum for the three physical pixel states
//! the display can show: white, black, and the highlight accent (red on the
//! 7.5inch HD (B), yellow on some sister panels).
//!
//! ## Color Representation
//!
//! The wire format is two bit-packed planes; each pixel is represented by:
//! - 1 bit in the black/white plane
//! - 1 bit in the highlight plane
//!
//! | Color     | Black plane | Highlight plane |
//! |-----------|-------------|-----------------|
//! | Black     | 0           | 0               |
//! | White     | 1           | 0               |
//! | Highlight | 1           | 1               |
//!
//! The (0, 1) combination is never produced by this crate.
//!
//! ## Example
//!
//! ```
//! use epd7in5bhd::Color;
//!
//! assert_eq!(Color::White.black_plane_byte(), 0xFF);
//! assert_eq!(Color::White.highlight_plane_byte(), 0x00);
//!
//! assert_eq!(Color::Black.black_plane_byte(), 0x00);
//!
//! assert_eq!(Color::Highlight.black_plane_byte(), 0xFF);
//! assert_eq!(Color::Highlight.highlight_plane_byte(), 0xFF);
//! ```

/// The three physical pixel states of the panel
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Color {
    /// White pixels (the blank state)
    #[default]
    White,
    /// Black pixels
    Black,
    /// Accent pixels, rendered by the panel's third particle layer
    Highlight,
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU8;
}

impl Color {
    /// Byte that fills the black/white plane with this color
    ///
    /// - White: 0xFF (all bits 1)
    /// - Black: 0x00 (all bits 0)
    /// - Highlight: 0xFF (highlight requires the black/white bit set too)
    pub fn black_plane_byte(self) -> u8 {
        match self {
            Self::White => 0xFF,
            Self::Black => 0x00,
            Self::Highlight => 0xFF,
        }
    }

    /// Byte that fills the highlight plane with this color
    ///
    /// - White: 0x00
    /// - Black: 0x00
    /// - Highlight: 0xFF
    pub fn highlight_plane_byte(self) -> u8 {
        match self {
            Self::White => 0x00,
            Self::Black => 0x00,
            Self::Highlight => 0xFF,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_white() {
        assert_eq!(Color::default(), Color::White);
    }

    #[test]
    fn test_highlight_sets_both_planes() {
        assert_eq!(Color::Highlight.black_plane_byte(), 0xFF);
        assert_eq!(Color::Highlight.highlight_plane_byte(), 0xFF);
    }

    #[test]
    fn test_black_clears_both_planes() {
        assert_eq!(Color::Black.black_plane_byte(), 0x00);
        assert_eq!(Color::Black.highlight_plane_byte(), 0x00);
    }
}
