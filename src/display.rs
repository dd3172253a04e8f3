//! Core display operations
//!
//! [`Display`] owns the power-up, configuration, upload, and refresh
//! sequencing for the panel. The exact byte payloads written during
//! initialization come from the vendor init code and must match the
//! controller bit for bit; they are reproduced here as constants, never
//! derived from the geometry.
//!
//! ## Error policy
//!
//! The driver is best-effort: an SPI transfer failure inside a sequence is
//! logged together with the byte count that made it out, and the sequence
//! continues with the next command. That can leave the controller's RAM
//! address pointer in an unspecified position, so after any logged transfer
//! failure the panel content is suspect until the next successful
//! [`Display::init`] + [`Display::render`] cycle. Do not retry a failed
//! upload mid-sequence; start over from [`Display::init`].
//!
//! Busy-line faults and validation failures do come back as [`Error`].

use embedded_hal::delay::DelayNs;
use log::{debug, error, warn};

use crate::BUF_SIZE;
use crate::command::{
    AUTO_WRITE_BW_RAM, AUTO_WRITE_RED_RAM, BOOSTER_SOFT_START, BORDER_WAVEFORM, DATA_ENTRY_MODE,
    DEEP_SLEEP, DISPLAY_UPDATE_CTRL2, DRIVER_OUTPUT_CONTROL, MASTER_ACTIVATION, SET_RAM_X_COUNTER,
    SET_RAM_X_RANGE, SET_RAM_Y_COUNTER, SET_RAM_Y_RANGE, SOFT_RESET, TEMP_SENSOR_CONTROL,
    WRITE_RAM_BW, WRITE_RAM_RED,
};
use crate::config::Config;
use crate::error::Error;
use crate::framebuffer::FrameBuffer;
use crate::interface::DisplayInterface;

// Panel contract bytes from the vendor init code. The gate MUX and the RAM
// window run the Y address from 2AFh down to 0; X covers columns 0..36Fh.
const GATE_DRIVER_MUX: [u8; 3] = [0xAF, 0x02, 0x01];
const RAM_X_WINDOW: [u8; 4] = [0x00, 0x00, 0x6F, 0x03];
const RAM_Y_WINDOW: [u8; 4] = [0xAF, 0x02, 0x00, 0x00];
const RAM_X_ORIGIN: [u8; 2] = [0x00, 0x00];
const RAM_Y_ORIGIN: [u8; 2] = [0xAF, 0x02];

// The vendor code insists on at least 200us between master activation and
// the first busy probe.
const ACTIVATION_DELAY_MS: u32 = 2;

/// Protocol state of the driver
///
/// The transient states ([`Configuring`](DisplayState::Configuring),
/// [`Uploading`](DisplayState::Uploading),
/// [`Refreshing`](DisplayState::Refreshing)) are only observable from another
/// thread while the corresponding blocking call runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayState {
    /// Created, no reset issued yet
    #[default]
    Uninitialized,
    /// Running the reset/configuration sequence
    Configuring,
    /// Configured and ready for uploads
    Idle,
    /// Writing plane data to controller RAM
    Uploading,
    /// Refresh triggered, waiting on the busy line
    Refreshing,
    /// In deep sleep; only [`Display::init`] wakes the controller
    Asleep,
}

/// Protocol driver for the 7.5inch HD (B) panel
///
/// Owns the command sequencing against a [`DisplayInterface`]. Pixel data is
/// prepared separately (see [`FrameBuffer`]) and handed over as two
/// bit-packed planes.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Panel register configuration
    config: Config,
    /// Current protocol state
    state: DisplayState,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// The controller is untouched until [`Display::init`] runs.
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            state: DisplayState::Uninitialized,
        }
    }

    /// Hardware reset and full configuration sequence
    ///
    /// Pulses the reset line, soft-resets the controller, and writes the
    /// panel configuration registers. Also the only way to wake the
    /// controller after [`Display::sleep`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] on a reset pin fault or when a busy-wait
    /// fails; transfer failures are logged and skipped (see module docs).
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I>> {
        debug!("initializing panel");
        self.state = DisplayState::Configuring;
        let cfg = self.config.clone();

        self.interface.reset(delay).map_err(Error::Interface)?;

        self.command(SOFT_RESET, &[]);
        self.busy_wait(delay)?;

        // Power-up fill of both RAM planes
        self.command(AUTO_WRITE_RED_RAM, &[cfg.auto_write_fill]);
        self.busy_wait(delay)?;
        self.command(AUTO_WRITE_BW_RAM, &[cfg.auto_write_fill]);
        self.busy_wait(delay)?;

        self.command(BOOSTER_SOFT_START, &cfg.soft_start);
        self.command(DRIVER_OUTPUT_CONTROL, &GATE_DRIVER_MUX);
        self.command(DATA_ENTRY_MODE, &[cfg.data_entry_mode]);
        self.command(SET_RAM_X_RANGE, &RAM_X_WINDOW);
        self.command(SET_RAM_Y_RANGE, &RAM_Y_WINDOW);
        self.command(BORDER_WAVEFORM, &[cfg.border_waveform]);
        self.command(TEMP_SENSOR_CONTROL, &[cfg.temp_sensor]);

        // Load temperature value and waveform setting from OTP
        self.command(DISPLAY_UPDATE_CTRL2, &[cfg.otp_load_mode]);
        self.command(MASTER_ACTIVATION, &[]);
        self.busy_wait(delay)?;

        self.command(SET_RAM_X_COUNTER, &RAM_X_ORIGIN);
        self.command(SET_RAM_Y_COUNTER, &RAM_Y_ORIGIN);

        self.state = DisplayState::Idle;
        debug!("panel ready");
        Ok(())
    }

    /// Upload both planes and run a full refresh
    ///
    /// The panel has no partial refresh; the whole frame is written every
    /// time. Buffers shorter than [`BUF_SIZE`] are padded out (the
    /// black/white plane with white `0xFF`, the highlight plane with
    /// not-highlighted `0x00`) so a short upload never leaves stale data
    /// in the unwritten remainder.
    ///
    /// Blocks until the controller releases the busy line; a full refresh is
    /// documented at 22 seconds or more.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooLarge`] if either buffer exceeds
    /// [`BUF_SIZE`], and [`Error::Interface`] on busy-wait faults.
    pub fn render<D: DelayNs>(
        &mut self,
        black: &[u8],
        highlight: &[u8],
        delay: &mut D,
    ) -> Result<(), Error<I>> {
        for buffer in [black, highlight] {
            if buffer.len() > BUF_SIZE {
                return Err(Error::BufferTooLarge {
                    provided: buffer.len(),
                    max: BUF_SIZE,
                });
            }
        }
        if matches!(
            self.state,
            DisplayState::Uninitialized | DisplayState::Asleep
        ) {
            warn!("render without init; the panel will not pick this up");
        }

        debug!(
            "uploading frame ({} + {} explicit bytes)",
            black.len(),
            highlight.len()
        );
        self.state = DisplayState::Uploading;
        self.command(SET_RAM_Y_COUNTER, &RAM_Y_ORIGIN);

        // 1 is white, 0 is black.
        self.command(WRITE_RAM_BW, black);
        self.pad(0xFF, BUF_SIZE - black.len());

        // 0 is white or black, 1 is highlight.
        self.command(WRITE_RAM_RED, highlight);
        self.pad(0x00, BUF_SIZE - highlight.len());

        self.refresh(delay)
    }

    /// Upload a frame and run a full refresh
    ///
    /// Hands the frame's planes to [`Display::render`]. Meant for
    /// panel-sized frames; a smaller frame is uploaded with its own row
    /// stride and padded linearly, which is rarely what you want.
    pub fn render_frame<D, B>(
        &mut self,
        frame: &FrameBuffer<B>,
        delay: &mut D,
    ) -> Result<(), Error<I>>
    where
        D: DelayNs,
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        self.render(frame.black_plane(), frame.highlight_plane(), delay)
    }

    /// Clear the screen to white
    ///
    /// Equivalent to rendering two empty buffers: all white, no highlight.
    pub fn clear<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I>> {
        self.render(&[], &[], delay)
    }

    /// Enter deep sleep
    ///
    /// The controller stops accepting commands; only the reset pulse in
    /// [`Display::init`] wakes it again.
    pub fn sleep(&mut self) {
        debug!("entering deep sleep");
        self.command(DEEP_SLEEP, &[0x01]);
        self.state = DisplayState::Asleep;
    }

    /// Current protocol state
    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Trigger the refresh sequence and wait it out
    fn refresh<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I>> {
        let mode = self.config.refresh_mode;
        self.command(DISPLAY_UPDATE_CTRL2, &[mode]);
        self.command(MASTER_ACTIVATION, &[]);
        delay.delay_ms(ACTIVATION_DELAY_MS);

        self.state = DisplayState::Refreshing;
        self.busy_wait(delay)?;
        self.state = DisplayState::Idle;
        debug!("refresh complete");
        Ok(())
    }

    /// Send one command best-effort
    ///
    /// A transfer failure is logged with the byte count that reached the bus
    /// and the sequence moves on; recovery is a fresh [`Display::init`].
    fn command(&mut self, opcode: u8, data: &[u8]) {
        if let Err(err) = self.interface.send_command(opcode, data) {
            error!("command {opcode:#04x} failed: {err:?}");
        }
    }

    /// Send padding bytes best-effort
    fn pad(&mut self, byte: u8, len: usize) {
        if len == 0 {
            return;
        }
        if let Err(err) = self.interface.send_repeated(byte, len) {
            error!("padding write failed: {err:?}");
        }
    }

    fn busy_wait<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I>> {
        self.interface.busy_wait(delay).map_err(Error::Interface)
    }
}
