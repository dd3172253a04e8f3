//! Waveshare 7.5inch HD (B) e-Paper Display Driver
//!
//! A driver for the 880x528 tri-color (black/white/red) e-paper panel,
//! talking to its controller over SPI plus three GPIO lines.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Two-plane bit-packed [`FrameBuffer`] with palette encoding for
//!   arbitrary pixel sources
//! - Full reset/configure/upload/refresh protocol sequencing with
//!   busy-line polling
//!
//! The panel supports full refreshes only; one refresh is documented at
//! 22 seconds or more (see [`FULL_REFRESH`]).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::{InputPin, OutputPin};
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use epd7in5bhd::{Color, Config, Display, FrameBuffer, Interface};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl InputPin for MockPin {
//! #     fn is_high(&mut self) -> Result<bool, Self::Error> { Ok(true) }
//! #     fn is_low(&mut self) -> Result<bool, Self::Error> { Ok(false) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let busy = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst, busy);
//! let mut display = Display::new(interface, Config::default());
//!
//! // Reset and configure the controller.
//! let _ = display.init(&mut delay);
//!
//! // Draw into a frame and push it to the panel.
//! let mut frame = match FrameBuffer::new(16, 2, [0u8; 4], [0u8; 4]) {
//!     Ok(frame) => frame,
//!     Err(_) => return,
//! };
//! frame.set(1, 1, Color::Highlight);
//! let _ = display.render_frame(&frame, &mut delay);
//!
//! // Power down; only init() wakes the controller again.
//! display.sleep();
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Color types for the tri-color panel
pub mod color;
/// Controller command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Two-plane bit-packed frame store
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;
/// Palette encoding for arbitrary pixel sources
pub mod palette;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

/// Panel width in pixels
pub const WIDTH: u32 = 880;
/// Panel height in pixels
pub const HEIGHT: u32 = 528;
/// Width of one bit-packed row in bytes
pub const WIDTH_BYTES: usize = WIDTH as usize / 8;
/// Size of one full plane in bytes
pub const BUF_SIZE: usize = WIDTH_BYTES * HEIGHT as usize;

/// Documented full-refresh completion time, with margin
///
/// The official figure is 22 seconds; 25 leaves headroom for cold panels.
/// Informational only; the driver relies on the busy line, not on this
/// value. Useful for callers scheduling around a refresh.
pub const FULL_REFRESH: core::time::Duration = core::time::Duration::from_secs(25);

pub use color::Color;
pub use config::{Builder, Config};
pub use display::{Display, DisplayState};
pub use error::{Error, FrameError};
pub use framebuffer::FrameBuffer;
pub use interface::{
    BUSY_POLL_MS, BUSY_SETTLE_MS, DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_TX_LIMIT, DisplayInterface,
    Interface, InterfaceError,
};
pub use palette::{IndexedRaster, Palette, PixelSource, Raster, Rgb};

#[cfg(test)]
mod tests {
    #[test]
    fn test_panel_geometry() {
        assert_eq!(super::WIDTH_BYTES, 110);
        assert_eq!(super::BUF_SIZE, 58_080);
    }
}
