//! Error types for the driver
//!
//! - [`Error`] - Runtime errors during display operations
//! - [`FrameError`] - Errors constructing a [`FrameBuffer`](crate::FrameBuffer)
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level bus errors
//!
//! Note that SPI transfer failures inside a protocol sequence are not
//! surfaced through [`Error`]: the driver logs them and carries on with the
//! next command (see [`Display`](crate::display::Display)). What does come
//! back as [`Error`] are validation failures and busy-line faults.
//!
//! ## Example
//!
//! ```
//! use epd7in5bhd::{FrameBuffer, FrameError};
//!
//! // Planes for a 16x2 frame must be exactly 4 bytes.
//! let result = FrameBuffer::new(16, 2, [0u8; 3], [0u8; 3]);
//! assert!(matches!(result, Err(FrameError::PlaneSizeMismatch { .. })));
//! ```

use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (busy-line fault or timeout)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`]
    /// implementation.
    Interface(I::Error),
    /// An upload buffer is longer than one full panel plane
    ///
    /// Buffers shorter than [`BUF_SIZE`](crate::BUF_SIZE) are padded on
    /// upload; longer ones are rejected.
    BufferTooLarge {
        /// Provided buffer size in bytes
        provided: usize,
        /// Maximum plane size in bytes
        max: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::BufferTooLarge { provided, max } => {
                write!(
                    f,
                    "Buffer too large: provided {provided} bytes, plane holds {max}"
                )
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors constructing a [`FrameBuffer`](crate::FrameBuffer)
#[derive(Debug)]
pub enum FrameError {
    /// A plane buffer does not match the frame geometry
    ///
    /// Both planes must be exactly `ceil(width / 8) * height` bytes.
    PlaneSizeMismatch {
        /// Required plane size in bytes
        expected: usize,
        /// Provided plane size in bytes
        provided: usize,
    },
}

impl core::fmt::Display for FrameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::PlaneSizeMismatch { expected, provided } => write!(
                f,
                "Plane size mismatch: expected {expected} bytes, provided {provided}"
            ),
        }
    }
}

impl core::error::Error for FrameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_error_display() {
        let err = FrameError::PlaneSizeMismatch {
            expected: 4,
            provided: 3,
        };
        let mut buf = alloc::string::String::new();
        core::fmt::write(&mut buf, format_args!("{err}")).ok();
        assert_eq!(buf, "Plane size mismatch: expected 4 bytes, provided 3");
    }
}
