//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`]
//! struct for communicating with the panel controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The controller requires:
//! - SPI bus (MOSI + SCK, chip-select owned by the [`SpiDevice`])
//! - 3 GPIO pins:
//!   - **DC**: Data/Command select (output, low=command, high=data)
//!   - **RST**: Reset (output, active low)
//!   - **BUSY**: Busy status (input, pull-down; the line reads high once the
//!     controller is ready)
//!
//! ## Bus sharing
//!
//! One logical command (opcode plus its full payload) runs under a single
//! `&mut` borrow of the interface, so no other user of this interface can
//! interleave. When the SPI bus itself is shared between peripherals or
//! threads, hand the interface an `embedded-hal-bus` device (for example a
//! `MutexDevice`); each chunk is then one locked bus transaction, and the
//! chip-select is released on every exit path, error or not.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::{InputPin, OutputPin};
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use epd7in5bhd::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! # let mut delay = MockDelay;
//! // Create interface with SPI and GPIO pins
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//!
//! // Soft reset (opcode only), then wait for the controller to release busy
//! let _ = interface.send_command(0x12, &[]);
//! let _ = interface.busy_wait(&mut delay);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the command/data channel to the panel controller
///
/// This trait abstracts over different hardware implementations, allowing
/// the [`Display`](crate::display::Display) to work with any SPI + GPIO
/// implementation that satisfies embedded-hal traits.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need custom
/// behavior (e.g. different pin polarities, an inverted busy line), implement
/// this trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send one logical command: the opcode byte plus its payload
    ///
    /// The implementation must:
    /// 1. Set DC low (command mode)
    /// 2. Send the opcode byte over SPI
    /// 3. Forward any payload bytes through the data path
    ///
    /// The whole sequence runs under one exclusive borrow so a concurrent
    /// caller can never interleave a command in the middle of a payload.
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails; payload errors
    /// carry the count of payload bytes that reached the bus.
    fn send_command(&mut self, opcode: u8, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Send payload bytes to the controller
    ///
    /// The implementation must:
    /// 1. Set DC high (data mode)
    /// 2. Send the bytes over SPI, splitting into transfers no larger than
    ///    the transport's limit
    ///
    /// A failed transfer aborts the remaining chunks.
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Send the same byte `len` times through the data path
    ///
    /// Used to pad short upload buffers out to the full plane size without
    /// materializing the padding.
    fn send_repeated(&mut self, byte: u8, len: usize) -> InterfaceResult<(), Self::Error> {
        let chunk = [byte; 64];
        let mut remaining = len;
        while remaining > 0 {
            let n = remaining.min(chunk.len());
            self.send_data(&chunk[..n])?;
            remaining -= n;
        }
        Ok(())
    }

    /// Perform the hardware reset pulse
    ///
    /// The implementation must drive RST high for 200 ms, low for 2 ms, then
    /// high again for 200 ms. This hard-resets the controller and is the only
    /// way to wake it from deep sleep.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;

    /// Block until the controller releases the busy line
    ///
    /// Polls the BUSY pin until it reads high (ready), then waits one extra
    /// settle delay. The call blocks the calling thread.
    ///
    /// # Errors
    ///
    /// Returns an error on a GPIO fault, or a timeout where the
    /// implementation bounds the wait.
    fn busy_wait<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI transfer error
    Spi {
        /// The underlying bus error
        source: SpiErr,
        /// Payload bytes known to have reached the bus before the failure
        sent: usize,
    },
    /// GPIO pin error
    Pin(PinErr),
    /// Timeout waiting for the busy line to release
    Timeout,
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi { source, sent } => write!(f, "SPI error after {sent} bytes: {source:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
            Self::Timeout => write!(f, "Timeout waiting for display"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Default maximum bytes per SPI transfer
///
/// Linux spidev caps a single transfer at 4096 bytes; payloads larger than
/// this are split into sequential chunks.
pub const DEFAULT_TX_LIMIT: usize = 4096;

/// Default timeout for busy-wait in milliseconds
///
/// A full refresh is documented at 22 seconds or more, so the bound leaves
/// headroom. Set to 0 to disable the bound entirely.
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 30_000;

/// Busy line poll interval in milliseconds
pub const BUSY_POLL_MS: u32 = 10;

/// Extra settle delay after the busy line releases, in milliseconds
pub const BUSY_SETTLE_MS: u32 = 10;

/// Hardware interface implementation for the panel controller
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
/// * `BUSY` - Busy pin implementing [`InputPin`]
pub struct Interface<SPI, DC, RST, BUSY> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
    /// Busy pin (input; high once the controller is ready)
    busy: BUSY,
    /// Maximum bytes per SPI transfer
    tx_limit: usize,
    /// Timeout for busy-wait in milliseconds (0 disables the bound)
    busy_timeout_ms: u32,
    /// Settle delay after the busy line releases, in milliseconds
    busy_settle_ms: u32,
}

impl<SPI, DC, RST, BUSY> Interface<SPI, DC, RST, BUSY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    BUSY: InputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    /// * `busy` - Busy pin (input, pull-down, reads high when ready)
    pub fn new(spi: SPI, dc: DC, rst: RST, busy: BUSY) -> Self {
        Self {
            spi,
            dc,
            rst,
            busy,
            tx_limit: DEFAULT_TX_LIMIT,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
            busy_settle_ms: BUSY_SETTLE_MS,
        }
    }

    /// Set the maximum bytes per SPI transfer
    ///
    /// Defaults to [`DEFAULT_TX_LIMIT`]. Values below 1 are clamped to 1.
    pub fn set_tx_limit(&mut self, limit: usize) -> &mut Self {
        self.tx_limit = limit.max(1);
        self
    }

    /// Get the maximum bytes per SPI transfer
    pub fn tx_limit(&self) -> usize {
        self.tx_limit
    }

    /// Set the busy-wait timeout in milliseconds
    ///
    /// Default is [`DEFAULT_BUSY_TIMEOUT_MS`]. Set to 0 to disable the bound
    /// and block indefinitely, matching the controller's own behavior.
    pub fn set_busy_timeout(&mut self, timeout_ms: u32) -> &mut Self {
        self.busy_timeout_ms = timeout_ms;
        self
    }

    /// Get the current busy-wait timeout in milliseconds
    pub fn busy_timeout(&self) -> u32 {
        self.busy_timeout_ms
    }

    /// Set the settle delay applied after the busy line releases
    pub fn set_busy_settle(&mut self, settle_ms: u32) -> &mut Self {
        self.busy_settle_ms = settle_ms;
        self
    }
}

impl<SPI, DC, RST, BUSY, PinErr> DisplayInterface for Interface<SPI, DC, RST, BUSY>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    BUSY: InputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, opcode: u8, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi
            .write(&[opcode])
            .map_err(|source| InterfaceError::Spi { source, sent: 0 })?;
        if data.is_empty() {
            return Ok(());
        }
        self.send_data(data)
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        let mut sent = 0;
        for chunk in data.chunks(self.tx_limit) {
            self.spi
                .write(chunk)
                .map_err(|source| InterfaceError::Spi { source, sent })?;
            sent += chunk.len();
        }
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(200);
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(2);
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(200);
        Ok(())
    }

    fn busy_wait<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        let mut elapsed_ms = 0u32;
        loop {
            match self.busy.is_high() {
                Ok(true) => break,
                Ok(false) => {}
                Err(e) => return Err(InterfaceError::Pin(e)),
            }
            delay.delay_ms(BUSY_POLL_MS);
            elapsed_ms = elapsed_ms.saturating_add(BUSY_POLL_MS);
            if self.busy_timeout_ms > 0 && elapsed_ms >= self.busy_timeout_ms {
                return Err(InterfaceError::Timeout);
            }
        }
        delay.delay_ms(self.busy_settle_ms);
        Ok(())
    }
}
