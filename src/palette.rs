//! Palette encoding for arbitrary pixel sources
//!
//! This module maps arbitrary color values onto the three physical display
//! states in [`Color`]. Two paths exist, selected once per draw via
//! [`PixelSource`]:
//!
//! - **Exact palette**: a source that is indexed over exactly three colors has
//!   its entries bound to roles up front by [`Palette::assign`], and every
//!   pixel becomes a table lookup.
//! - **Generic**: any other source is classified pixel by pixel with
//!   [`Palette::classify`], nearest role by RGB distance, no state carried
//!   between pixels.
//!
//! ## Example
//!
//! ```
//! use epd7in5bhd::{Color, Palette, Rgb};
//!
//! let palette = Palette::new();
//! assert_eq!(palette.classify(Rgb::new(250, 250, 250)), Color::White);
//! assert_eq!(palette.classify(Rgb::new(200, 30, 10)), Color::Highlight);
//! ```

use crate::color::Color;

/// An RGB triple
///
/// Alpha is not represented; the panel has no notion of transparency.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Rgb {
    /// Create an RGB triple
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Squared euclidean distance to another color
    pub fn distance(self, other: Self) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }
}

/// Claim order for role assignment. White and black go first so a faint
/// accent entry cannot take their slot (see [`Palette::assign`]).
const ROLES: [Color; 3] = [Color::White, Color::Black, Color::Highlight];

/// The three role colors, in canonical order [white, black, highlight]
///
/// An immutable value passed into [`FrameBuffer`](crate::FrameBuffer); there
/// is no process-wide palette state. The highlight accent defaults to pure
/// red and is configurable for panels with a different third color.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette {
    white: Rgb,
    black: Rgb,
    highlight: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    /// Canonical palette: white, black, and a pure red accent
    pub const fn new() -> Self {
        Self::with_accent(Rgb::new(255, 0, 0))
    }

    /// Palette with a custom highlight accent (e.g. yellow panels)
    pub const fn with_accent(accent: Rgb) -> Self {
        Self {
            white: Rgb::new(255, 255, 255),
            black: Rgb::new(0, 0, 0),
            highlight: accent,
        }
    }

    /// The RGB value of a role color
    pub fn rgb(&self, color: Color) -> Rgb {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
            Color::Highlight => self.highlight,
        }
    }

    /// Classify one pixel against the role colors (general path)
    ///
    /// Returns the role whose RGB value is nearest to `pixel`. Ties resolve
    /// in role order, white first.
    pub fn classify(&self, pixel: Rgb) -> Color {
        let mut best = Color::White;
        let mut best_distance = u32::MAX;
        for role in ROLES {
            let d = pixel.distance(self.rgb(role));
            if d < best_distance {
                best = role;
                best_distance = d;
            }
        }
        best
    }

    /// Assign roles to an exactly-three-entry source palette (exact path)
    ///
    /// For each of white, black, highlight, in that fixed order, the
    /// nearest remaining entry is bound to the role and removed from the
    /// candidate set. The order is significant: white and black claim their
    /// entries before the accent does, so a desaturated red that happens to
    /// sit closer to white than to pure red still ends up as the highlight.
    ///
    /// Returns the role for each source palette index.
    pub fn assign(&self, entries: &[Rgb; 3]) -> [Color; 3] {
        let mut remaining = [true; 3];
        let mut roles = [Color::White; 3];
        for role in ROLES {
            let want = self.rgb(role);
            let mut best = usize::MAX;
            let mut best_distance = u32::MAX;
            for (i, entry) in entries.iter().enumerate() {
                if !remaining[i] {
                    continue;
                }
                let d = entry.distance(want);
                if d < best_distance {
                    best = i;
                    best_distance = d;
                }
            }
            if best < entries.len() {
                roles[best] = role;
                remaining[best] = false;
            }
        }
        roles
    }
}

/// Read access to an arbitrary-color raster
pub trait Raster {
    /// Width and height of the source in pixels
    fn dimensions(&self) -> (u32, u32);

    /// The color at (x, y); callers stay within [`Raster::dimensions`]
    fn pixel(&self, x: u32, y: u32) -> Rgb;
}

/// Read access to a palette-indexed raster with exactly three entries
pub trait IndexedRaster {
    /// Width and height of the source in pixels
    fn dimensions(&self) -> (u32, u32);

    /// The source's native palette
    fn palette(&self) -> [Rgb; 3];

    /// The palette index at (x, y); values outside 0..=2 read as white
    fn index(&self, x: u32, y: u32) -> u8;
}

/// Pixel input for [`FrameBuffer::draw`](crate::FrameBuffer::draw), tagged by
/// encoding path
///
/// The tag is inspected once at the start of a draw, not per pixel. A source
/// whose native palette does not have exactly three entries is simply handed
/// over as [`PixelSource::Generic`]; that is a fallback, never an error.
pub enum PixelSource<'a> {
    /// Indexed pixels over an exactly-three-entry palette
    ExactPalette(&'a dyn IndexedRaster),
    /// Arbitrary colors, classified per pixel
    Generic(&'a dyn Raster),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_role_colors() {
        let p = Palette::new();
        assert_eq!(p.classify(Rgb::new(255, 255, 255)), Color::White);
        assert_eq!(p.classify(Rgb::new(0, 0, 0)), Color::Black);
        assert_eq!(p.classify(Rgb::new(255, 0, 0)), Color::Highlight);
    }

    #[test]
    fn test_classify_nearby_colors() {
        let p = Palette::new();
        assert_eq!(p.classify(Rgb::new(230, 240, 235)), Color::White);
        assert_eq!(p.classify(Rgb::new(40, 30, 35)), Color::Black);
        assert_eq!(p.classify(Rgb::new(220, 40, 60)), Color::Highlight);
    }

    #[test]
    fn test_classify_faint_red_reads_as_white() {
        // The per-pixel path has no claim ordering; a washed-out red really
        // is nearer to white. The exact path below handles this case.
        let p = Palette::new();
        assert_eq!(p.classify(Rgb::new(255, 210, 210)), Color::White);
    }

    #[test]
    fn test_assign_canonical_order() {
        let p = Palette::new();
        let roles = p.assign(&[
            Rgb::new(255, 255, 255),
            Rgb::new(0, 0, 0),
            Rgb::new(255, 0, 0),
        ]);
        assert_eq!(roles, [Color::White, Color::Black, Color::Highlight]);
    }

    #[test]
    fn test_assign_shuffled_entries() {
        let p = Palette::new();
        let roles = p.assign(&[
            Rgb::new(200, 20, 30),
            Rgb::new(250, 250, 245),
            Rgb::new(10, 5, 0),
        ]);
        assert_eq!(roles, [Color::Highlight, Color::White, Color::Black]);
    }

    #[test]
    fn test_assign_claims_white_before_faint_red() {
        // Distance alone would classify the faint red as white (see the
        // classify test above); the claim order must still bind the true
        // white to White and leave the faint red for Highlight.
        let p = Palette::new();
        let roles = p.assign(&[
            Rgb::new(255, 210, 210),
            Rgb::new(255, 255, 255),
            Rgb::new(0, 0, 0),
        ]);
        assert_eq!(roles, [Color::Highlight, Color::White, Color::Black]);
    }

    #[test]
    fn test_assign_with_blue_accent() {
        // A non-red third color still binds to Highlight once white and
        // black are taken, even though it is nowhere near the accent.
        let p = Palette::new();
        let roles = p.assign(&[
            Rgb::new(0, 0, 255),
            Rgb::new(255, 255, 255),
            Rgb::new(0, 0, 0),
        ]);
        assert_eq!(roles, [Color::Highlight, Color::White, Color::Black]);
    }

    #[test]
    fn test_with_accent() {
        let p = Palette::with_accent(Rgb::new(255, 255, 0));
        assert_eq!(p.classify(Rgb::new(240, 230, 20)), Color::Highlight);
        assert_eq!(p.rgb(Color::Highlight), Rgb::new(255, 255, 0));
    }
}
