//! Controller command definitions
//!
//! This module defines the command bytes understood by the panel controller
//! driving the 7.5inch HD (B) display. Commands are sent over SPI with the DC
//! pin low for the opcode byte and high for any payload bytes.
//!
//! The values are fixed by the controller datasheet and the vendor
//! initialization code; they are reproduced here, never derived.
//!
//! ## Command Structure
//!
//! All commands follow the pattern:
//! 1. Set DC low (command mode)
//! 2. Send the opcode byte
//! 3. Set DC high (data mode)
//! 4. Send payload bytes (if any)
//!
//! ## Example
//!
//! ```rust,no_run
//! use epd7in5bhd::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::{InputPin, OutputPin};
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! #     fn is_high(&mut self) -> Result<bool, Self::Error> { Ok(false) }
//! #     fn is_low(&mut self) -> Result<bool, Self::Error> { Ok(true) }
//! # }
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//! # let pixel_data = [0xFFu8; 4];
//! // Soft reset, no payload
//! let _ = interface.send_command(command::SOFT_RESET, &[]);
//!
//! // Write to the black/white RAM
//! let _ = interface.send_command(command::WRITE_RAM_BW, &pixel_data);
//! ```

// System control commands

/// Driver output control / gate MUX setting (0x01)
///
/// Sets the number of gate outputs and the scanning order.
/// Requires 3 bytes: [mux LSB, mux MSB, scanning mode].
pub const DRIVER_OUTPUT_CONTROL: u8 = 0x01;

/// Gate driving voltage control (0x03)
pub const GATE_VOLTAGE: u8 = 0x03;

/// Source driving voltage control (0x04)
pub const SOURCE_VOLTAGE: u8 = 0x04;

/// Booster soft-start control command (0x0C)
///
/// Controls the power-on ramp of the booster circuit.
/// Requires 5 bytes of data.
pub const BOOSTER_SOFT_START: u8 = 0x0C;

/// Deep sleep mode command (0x10)
///
/// Enters ultra-low power mode with payload `0x01`. Only a hardware reset
/// followed by re-initialization wakes the controller again.
pub const DEEP_SLEEP: u8 = 0x10;

/// Data entry mode command (0x11)
///
/// Controls the RAM address counter auto-increment direction.
/// Requires 1 byte:
/// - Bit 0 (ID0): X direction (0=decrement, 1=increment)
/// - Bit 1 (ID1): Y direction (0=decrement, 1=increment)
/// - Bit 2 (AM): counter advances along X (0) or Y (1)
pub const DATA_ENTRY_MODE: u8 = 0x11;

/// Soft reset command (0x12)
///
/// Resets the controller to its default register state. Must wait for the
/// busy line to release after issuing.
pub const SOFT_RESET: u8 = 0x12;

/// HV ready detection (0x14)
pub const HV_READY_DETECTION: u8 = 0x14;

/// VCI detection (0x15)
pub const VCI_DETECTION: u8 = 0x15;

/// Temperature sensor control command (0x18)
///
/// Selects the temperature sensor used for waveform timing.
/// Requires 1 byte: 0x80 = internal, 0x48 = external.
pub const TEMP_SENSOR_CONTROL: u8 = 0x18;

/// Temperature register write (0x1A)
pub const TEMP_SENSOR_WRITE: u8 = 0x1A;

/// External temperature sensor control (0x1C)
pub const TEMP_SENSOR_CONTROL_EXT: u8 = 0x1C;

// Display update commands

/// Master activation command (0x20)
///
/// Triggers the update sequence programmed via
/// [`DISPLAY_UPDATE_CTRL2`]. The busy line is held during the update.
pub const MASTER_ACTIVATION: u8 = 0x20;

/// Display update control 1 command (0x21)
pub const DISPLAY_UPDATE_CTRL1: u8 = 0x21;

/// Display update control 2 command (0x22)
///
/// Selects the update sequence (clock/analog enable, temperature load,
/// waveform load, pattern display) run by [`MASTER_ACTIVATION`].
/// Requires 1 byte; values are panel-specific.
pub const DISPLAY_UPDATE_CTRL2: u8 = 0x22;

// RAM access commands

/// Write to the black/white RAM (0x24)
///
/// Bit=0: black, bit=1: white. Takes the full bit-packed plane.
pub const WRITE_RAM_BW: u8 = 0x24;

/// Write to the red/highlight RAM (0x26)
///
/// Bit=1: highlight (overrides the black/white plane for that pixel),
/// bit=0: leave the black/white plane in control.
pub const WRITE_RAM_RED: u8 = 0x26;

/// Read RAM (0x27)
pub const READ_RAM: u8 = 0x27;

/// VCOM sense (0x28)
pub const VCOM_SENSE: u8 = 0x28;

/// VCOM sense duration (0x29)
pub const VCOM_SENSE_DURATION: u8 = 0x29;

/// Program VCOM into OTP (0x2A)
pub const VCOM_OTP: u8 = 0x2A;

/// VCOM control register (0x2B)
pub const VCOM_CONTROL: u8 = 0x2B;

/// VCOM register write (0x2C)
pub const VCOM_WRITE: u8 = 0x2C;

/// OTP register read (0x2D)
pub const OTP_REGISTER_READ: u8 = 0x2D;

/// CRC calculation (0x34)
pub const CRC_CALCULATION: u8 = 0x34;

/// CRC status read (0x35)
pub const CRC_STATUS_READ: u8 = 0x35;

/// OTP program selection (0x36)
pub const OTP_PROGRAM_SELECT: u8 = 0x36;

/// Display option register (0x37)
pub const DISPLAY_OPTION: u8 = 0x37;

/// User option register (0x38)
pub const USER_OPTION: u8 = 0x38;

/// Border waveform control command (0x3C)
///
/// Controls the border color and transition behavior.
/// Requires 1 byte of data.
pub const BORDER_WAVEFORM: u8 = 0x3C;

/// Read RAM option (0x41)
pub const READ_RAM_OPTION: u8 = 0x41;

// RAM addressing commands

/// Set RAM X address window command (0x44)
///
/// Sets the X (column) address range for RAM access.
/// Requires 4 bytes: [start LSB, start MSB, end LSB, end MSB].
pub const SET_RAM_X_RANGE: u8 = 0x44;

/// Set RAM Y address window command (0x45)
///
/// Sets the Y (row) address range for RAM access.
/// Requires 4 bytes: [start LSB, start MSB, end LSB, end MSB].
pub const SET_RAM_Y_RANGE: u8 = 0x45;

/// Auto write red/highlight RAM command (0x46)
///
/// Fills the entire red RAM with a pattern in one command.
/// Requires 1 byte; wait for busy release afterwards.
pub const AUTO_WRITE_RED_RAM: u8 = 0x46;

/// Auto write black/white RAM command (0x47)
///
/// Fills the entire black/white RAM with a pattern in one command.
/// Requires 1 byte; wait for busy release afterwards.
pub const AUTO_WRITE_BW_RAM: u8 = 0x47;

/// Set RAM X address counter command (0x4E)
///
/// Requires 2 bytes: [address LSB, address MSB].
pub const SET_RAM_X_COUNTER: u8 = 0x4E;

/// Set RAM Y address counter command (0x4F)
///
/// Requires 2 bytes: [address LSB, address MSB].
pub const SET_RAM_Y_COUNTER: u8 = 0x4F;
