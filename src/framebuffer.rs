//! Two-plane bit-packed frame store
//!
//! A [`FrameBuffer`] holds one full image in the panel's native wire format:
//! a black/white plane and a highlight plane, each one bit per pixel,
//! row-major, most significant bit first. The planes can be handed straight
//! to [`Display::render`](crate::Display::render).
//!
//! Buffers are caller-provided so the crate stays allocation-free; with the
//! `alloc` feature, `FrameBuffer::panel_sized` allocates a full-panel frame.
//!
//! ## Example
//!
//! ```
//! use epd7in5bhd::{Color, FrameBuffer};
//!
//! // A 16x2 frame backed by stack arrays: 2 bytes per row.
//! let mut frame = match FrameBuffer::new(16, 2, [0u8; 4], [0u8; 4]) {
//!     Ok(frame) => frame,
//!     Err(_) => return,
//! };
//! frame.set(0, 0, Color::Black);
//! frame.set(7, 0, Color::Highlight);
//! assert_eq!(frame.at(0, 0), Color::Black);
//! assert_eq!(frame.black_plane()[0], 0b0111_1111);
//! assert_eq!(frame.highlight_plane()[0], 0b0000_0001);
//! ```

use crate::color::Color;
use crate::error::FrameError;
use crate::palette::{Palette, PixelSource};

/// One full image in the display's two-plane wire format
///
/// A pixel's physical color is a pure function of its (black bit, highlight
/// bit) pair; see [`Color`] for the mapping. The buffer is not synchronized;
/// callers serialize their own drawing before handing the planes to the
/// protocol driver.
pub struct FrameBuffer<B> {
    width: u32,
    height: u32,
    bytes_per_row: usize,
    black: B,
    highlight: B,
    palette: Palette,
}

impl<B> FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a frame over caller-provided plane storage
    ///
    /// Each plane must be exactly `ceil(width / 8) * height` bytes. The
    /// planes are reset to blank (all white, no highlight) on creation.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::PlaneSizeMismatch`] if either plane has the
    /// wrong length.
    pub fn new(width: u32, height: u32, black: B, highlight: B) -> Result<Self, FrameError> {
        Self::with_palette(width, height, black, highlight, Palette::new())
    }

    /// Create a frame with a custom role palette (e.g. a yellow accent)
    pub fn with_palette(
        width: u32,
        height: u32,
        black: B,
        highlight: B,
        palette: Palette,
    ) -> Result<Self, FrameError> {
        let bytes_per_row = (width as usize).div_ceil(8);
        let plane_len = bytes_per_row * height as usize;
        for plane in [black.as_ref(), highlight.as_ref()] {
            if plane.len() != plane_len {
                return Err(FrameError::PlaneSizeMismatch {
                    expected: plane_len,
                    provided: plane.len(),
                });
            }
        }
        let mut frame = Self {
            width,
            height,
            bytes_per_row,
            black,
            highlight,
            palette,
        };
        frame.clear();
        Ok(frame)
    }

    /// Frame width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The role palette used by [`FrameBuffer::draw`]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The bit-packed black/white plane (bit=1 white, bit=0 black)
    pub fn black_plane(&self) -> &[u8] {
        self.black.as_ref()
    }

    /// The bit-packed highlight plane (bit=1 highlight)
    pub fn highlight_plane(&self) -> &[u8] {
        self.highlight.as_ref()
    }

    /// Set one pixel; out-of-bounds coordinates are a no-op
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = (x as usize / 8) + y as usize * self.bytes_per_row;
        let bit = 0x80 >> (x % 8);
        let black = self.black.as_mut();
        let highlight = self.highlight.as_mut();
        match color {
            Color::White => {
                black[index] |= bit;
                highlight[index] &= !bit;
            }
            Color::Black => {
                black[index] &= !bit;
                highlight[index] &= !bit;
            }
            Color::Highlight => {
                black[index] |= bit;
                highlight[index] |= bit;
            }
        }
    }

    /// Read one pixel back; out-of-bounds coordinates read as white
    pub fn at(&self, x: u32, y: u32) -> Color {
        if x >= self.width || y >= self.height {
            return Color::White;
        }
        let index = (x as usize / 8) + y as usize * self.bytes_per_row;
        let bit = 0x80 >> (x % 8);
        if self.highlight.as_ref()[index] & bit != 0 {
            Color::Highlight
        } else if self.black.as_ref()[index] & bit != 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Reset to blank: black plane all `0xFF`, highlight plane all `0x00`
    ///
    /// No reallocation takes place; calling this twice is the same as once.
    pub fn clear(&mut self) {
        self.fill(Color::White);
    }

    /// Fill the whole frame with one color
    pub fn fill(&mut self, color: Color) {
        let (bw, hl) = (color.black_plane_byte(), color.highlight_plane_byte());
        for byte in self.black.as_mut().iter_mut() {
            *byte = bw;
        }
        for byte in self.highlight.as_mut().iter_mut() {
            *byte = hl;
        }
    }

    /// Draw a pixel source over the whole frame
    ///
    /// Every destination pixel is visited in row-major order. Pixels outside
    /// the source's bounds come out white. The encoding path is picked once
    /// from the [`PixelSource`] tag: exact-palette sources get their entries
    /// bound to roles up front, everything else is classified per pixel.
    pub fn draw(&mut self, source: &PixelSource<'_>) {
        match source {
            PixelSource::ExactPalette(raster) => {
                let roles = self.palette.assign(&raster.palette());
                let (w, h) = raster.dimensions();
                for y in 0..self.height {
                    for x in 0..self.width {
                        let color = if x < w && y < h {
                            roles
                                .get(raster.index(x, y) as usize)
                                .copied()
                                .unwrap_or(Color::White)
                        } else {
                            Color::White
                        };
                        self.set(x, y, color);
                    }
                }
            }
            PixelSource::Generic(raster) => {
                let (w, h) = raster.dimensions();
                for y in 0..self.height {
                    for x in 0..self.width {
                        let color = if x < w && y < h {
                            self.palette.classify(raster.pixel(x, y))
                        } else {
                            Color::White
                        };
                        self.set(x, y, color);
                    }
                }
            }
        }
    }
}

#[cfg(feature = "alloc")]
impl FrameBuffer<alloc::vec::Vec<u8>> {
    /// Allocate a blank frame covering the full panel
    pub fn panel_sized() -> Self {
        let len = crate::BUF_SIZE;
        Self {
            width: crate::WIDTH,
            height: crate::HEIGHT,
            bytes_per_row: crate::WIDTH_BYTES,
            black: alloc::vec![0xFF; len],
            highlight: alloc::vec![0x00; len],
            palette: Palette::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{IndexedRaster, Raster, Rgb};

    struct Uniform {
        color: Rgb,
        width: u32,
        height: u32,
    }

    impl Raster for Uniform {
        fn dimensions(&self) -> (u32, u32) {
            (self.width, self.height)
        }

        fn pixel(&self, _x: u32, _y: u32) -> Rgb {
            self.color
        }
    }

    fn frame_16x2() -> FrameBuffer<[u8; 4]> {
        match FrameBuffer::new(16, 2, [0u8; 4], [0u8; 4]) {
            Ok(frame) => frame,
            Err(err) => panic!("16x2 frame: {err}"),
        }
    }

    #[test]
    fn test_new_rejects_wrong_plane_length() {
        let result = FrameBuffer::new(16, 2, [0u8; 3], [0u8; 3]);
        assert!(matches!(
            result,
            Err(FrameError::PlaneSizeMismatch {
                expected: 4,
                provided: 3
            })
        ));
    }

    #[test]
    fn test_new_starts_blank() {
        let frame = frame_16x2();
        assert_eq!(frame.black_plane(), &[0xFF; 4]);
        assert_eq!(frame.highlight_plane(), &[0x00; 4]);
    }

    #[test]
    fn test_bytes_per_row_rounds_up() {
        // 10 pixels wide needs 2 bytes per row.
        let frame = match FrameBuffer::new(10, 3, [0u8; 6], [0u8; 6]) {
            Ok(frame) => frame,
            Err(err) => panic!("10x3 frame: {err}"),
        };
        assert_eq!(frame.black_plane().len(), 6);
    }

    #[test]
    fn test_set_at_round_trip() {
        let mut frame = frame_16x2();
        for (x, y, color) in [
            (0, 0, Color::Black),
            (7, 0, Color::Highlight),
            (8, 1, Color::White),
            (15, 1, Color::Black),
        ] {
            frame.set(x, y, color);
            assert_eq!(frame.at(x, y), color, "pixel ({x},{y})");
        }
    }

    #[test]
    fn test_set_out_of_bounds_is_noop() {
        let mut frame = frame_16x2();
        frame.set(16, 0, Color::Black);
        frame.set(0, 2, Color::Black);
        assert_eq!(frame.black_plane(), &[0xFF; 4]);
        assert_eq!(frame.highlight_plane(), &[0x00; 4]);
    }

    #[test]
    fn test_at_out_of_bounds_reads_white() {
        let frame = frame_16x2();
        assert_eq!(frame.at(16, 0), Color::White);
        assert_eq!(frame.at(0, 2), Color::White);
    }

    #[test]
    fn test_bit_packing_first_byte() {
        let mut frame = frame_16x2();
        frame.set(0, 0, Color::Black);
        frame.set(7, 0, Color::Highlight);
        assert_eq!(frame.black_plane()[0], 0b0111_1111);
        assert_eq!(frame.highlight_plane()[0], 0b0000_0001);
    }

    #[test]
    fn test_bit_packing_second_byte() {
        // Same pattern shifted across the byte boundary at x=8.
        let mut frame = frame_16x2();
        frame.set(8, 0, Color::Black);
        frame.set(15, 0, Color::Highlight);
        assert_eq!(frame.black_plane()[1], 0b0111_1111);
        assert_eq!(frame.highlight_plane()[1], 0b0000_0001);
        assert_eq!(frame.black_plane()[0], 0xFF);
        assert_eq!(frame.highlight_plane()[0], 0x00);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut frame = frame_16x2();
        frame.set(3, 1, Color::Highlight);
        frame.clear();
        let black: [u8; 4] = frame.black_plane().try_into().unwrap();
        let highlight: [u8; 4] = frame.highlight_plane().try_into().unwrap();
        frame.clear();
        assert_eq!(frame.black_plane(), &black);
        assert_eq!(frame.highlight_plane(), &highlight);
        assert_eq!(black, [0xFF; 4]);
        assert_eq!(highlight, [0x00; 4]);
    }

    #[test]
    fn test_fill_highlight() {
        let mut frame = frame_16x2();
        frame.fill(Color::Highlight);
        assert_eq!(frame.black_plane(), &[0xFF; 4]);
        assert_eq!(frame.highlight_plane(), &[0xFF; 4]);
    }

    struct Checker;

    impl Raster for Checker {
        fn dimensions(&self) -> (u32, u32) {
            (8, 2)
        }

        fn pixel(&self, x: u32, y: u32) -> Rgb {
            if (x + y) % 2 == 0 {
                Rgb::new(0, 0, 0)
            } else {
                Rgb::new(255, 0, 0)
            }
        }
    }

    #[test]
    fn test_draw_generic_source() {
        let mut frame = frame_16x2();
        frame.draw(&PixelSource::Generic(&Checker));
        assert_eq!(frame.at(0, 0), Color::Black);
        assert_eq!(frame.at(1, 0), Color::Highlight);
        assert_eq!(frame.at(0, 1), Color::Highlight);
        // Beyond the 8x2 source, pixels default to white.
        assert_eq!(frame.at(8, 0), Color::White);
        assert_eq!(frame.at(15, 1), Color::White);
    }

    struct Indexed {
        palette: [Rgb; 3],
    }

    impl IndexedRaster for Indexed {
        fn dimensions(&self) -> (u32, u32) {
            (3, 1)
        }

        fn palette(&self) -> [Rgb; 3] {
            self.palette
        }

        fn index(&self, x: u32, _y: u32) -> u8 {
            x as u8
        }
    }

    #[test]
    fn test_draw_exact_palette_claim_order() {
        // Entry 0 is a faint red that sits nearer to white than to pure
        // red; the exact path must still bind it to Highlight.
        let src = Indexed {
            palette: [
                Rgb::new(255, 210, 210),
                Rgb::new(255, 255, 255),
                Rgb::new(0, 0, 0),
            ],
        };
        let mut frame = frame_16x2();
        frame.draw(&PixelSource::ExactPalette(&src));
        assert_eq!(frame.at(0, 0), Color::Highlight);
        assert_eq!(frame.at(1, 0), Color::White);
        assert_eq!(frame.at(2, 0), Color::Black);
    }

    #[test]
    fn test_draw_overwrites_previous_content() {
        let mut frame = frame_16x2();
        frame.fill(Color::Black);
        frame.draw(&PixelSource::Generic(&Uniform {
            color: Rgb::new(255, 255, 255),
            width: 16,
            height: 2,
        }));
        assert_eq!(frame.black_plane(), &[0xFF; 4]);
        assert_eq!(frame.highlight_plane(), &[0x00; 4]);
    }

    #[test]
    fn test_corner_pixel_of_full_panel() {
        let plane = alloc::vec![0u8; crate::BUF_SIZE];
        let mut frame = match FrameBuffer::new(crate::WIDTH, crate::HEIGHT, plane.clone(), plane) {
            Ok(frame) => frame,
            Err(err) => panic!("panel frame: {err}"),
        };
        frame.set(crate::WIDTH - 1, crate::HEIGHT - 1, Color::Highlight);

        let highlight = frame.highlight_plane();
        let last = highlight.len() - 1;
        assert_eq!(highlight[last], 0x01);
        assert!(highlight[..last].iter().all(|&b| b == 0x00));
        // The dual-bit rule keeps the black/white bit set for highlights.
        assert_eq!(frame.black_plane()[last] & 0x01, 0x01);
        assert_eq!(frame.at(crate::WIDTH - 1, crate::HEIGHT - 1), Color::Highlight);
    }
}
