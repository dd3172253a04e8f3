//! Graphics support via embedded-graphics
//!
//! With the `graphics` feature enabled, [`FrameBuffer`] implements the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait, so
//! the whole embedded-graphics ecosystem (primitives, text, images) renders
//! straight into the panel's wire format.
//!
//! ## Example
//!
//! ```
//! use embedded_graphics::{
//!     prelude::*,
//!     primitives::{PrimitiveStyle, Rectangle},
//! };
//! use epd7in5bhd::{Color, FrameBuffer};
//!
//! let mut frame = match FrameBuffer::new(16, 2, [0u8; 4], [0u8; 4]) {
//!     Ok(frame) => frame,
//!     Err(_) => return,
//! };
//!
//! let _ = Rectangle::new(Point::new(0, 0), Size::new(8, 1))
//!     .into_styled(PrimitiveStyle::with_fill(Color::Black))
//!     .draw(&mut frame);
//!
//! assert_eq!(frame.black_plane()[0], 0x00);
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
};

use crate::color::Color;
use crate::framebuffer::FrameBuffer;

impl<B> DrawTarget for FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }
            // set() drops anything past the frame bounds.
            self.set(x as u32, y as u32, color);
        }
        Ok(())
    }
}

impl<B> OriginDimensions for FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    fn frame_16x2() -> FrameBuffer<[u8; 4]> {
        match FrameBuffer::new(16, 2, [0u8; 4], [0u8; 4]) {
            Ok(frame) => frame,
            Err(err) => panic!("16x2 frame: {err}"),
        }
    }

    #[test]
    fn test_size_matches_frame() {
        let frame = frame_16x2();
        assert_eq!(frame.size(), Size::new(16, 2));
    }

    #[test]
    fn test_filled_rectangle_packs_into_planes() {
        let mut frame = frame_16x2();
        let result = Rectangle::new(Point::new(0, 0), Size::new(8, 2))
            .into_styled(PrimitiveStyle::with_fill(Color::Black))
            .draw(&mut frame);
        assert!(result.is_ok());

        assert_eq!(frame.black_plane(), &[0x00, 0xFF, 0x00, 0xFF]);
        assert_eq!(frame.highlight_plane(), &[0x00; 4]);
    }

    #[test]
    fn test_highlight_rectangle_sets_both_planes() {
        let mut frame = frame_16x2();
        let result = Rectangle::new(Point::new(8, 0), Size::new(8, 1))
            .into_styled(PrimitiveStyle::with_fill(Color::Highlight))
            .draw(&mut frame);
        assert!(result.is_ok());

        assert_eq!(frame.black_plane(), &[0xFF; 4]);
        assert_eq!(frame.highlight_plane(), &[0x00, 0xFF, 0x00, 0x00]);
    }

    #[test]
    fn test_negative_and_out_of_bounds_pixels_are_dropped() {
        let mut frame = frame_16x2();
        let pixels = [
            Pixel(Point::new(-1, 0), Color::Black),
            Pixel(Point::new(0, -3), Color::Black),
            Pixel(Point::new(16, 0), Color::Black),
            Pixel(Point::new(0, 2), Color::Black),
        ];
        assert!(frame.draw_iter(pixels).is_ok());
        assert_eq!(frame.black_plane(), &[0xFF; 4]);
    }
}
