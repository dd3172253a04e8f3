//! Display configuration types and builder
//!
//! The defaults reproduce the vendor initialization values for the 7.5inch
//! HD (B) panel byte for byte. Overrides exist for sister panels that share
//! the controller but tune the analog settings differently; the panel
//! geometry itself is fixed (see [`WIDTH`](crate::WIDTH) and
//! [`HEIGHT`](crate::HEIGHT)).
//!
//! ## Example
//!
//! ```
//! use epd7in5bhd::{Builder, Config};
//!
//! let config = Builder::new().border_waveform(0x05).build();
//! assert_eq!(config.border_waveform, 0x05);
//! assert_eq!(config.temp_sensor, Config::default().temp_sensor);
//! ```

/// Display configuration
///
/// Holds the panel-specific register values used during initialization and
/// refresh. Use [`Builder`] to override individual values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Booster soft-start parameters (5 bytes for command 0x0C)
    pub soft_start: [u8; 5],
    /// Data entry mode byte (address counter direction)
    pub data_entry_mode: u8,
    /// Border waveform setting (VBD level selection)
    pub border_waveform: u8,
    /// Temperature sensor selection (0x80 = internal)
    pub temp_sensor: u8,
    /// Update sequence that loads temperature and waveform from OTP,
    /// run once during initialization
    pub otp_load_mode: u8,
    /// Update sequence for a full refresh (load LUT from the controller)
    pub refresh_mode: u8,
    /// Fill pattern for the auto-write RAM commands issued at power-up
    pub auto_write_fill: u8,
}

impl Default for Config {
    fn default() -> Self {
        Builder::new().build()
    }
}

/// Builder for constructing display configuration
///
/// All values default to the vendor initialization code for the 7.5inch
/// HD (B) panel; `build()` cannot fail.
///
/// # Example
///
/// ```
/// use epd7in5bhd::Builder;
///
/// let config = Builder::new()
///     .temp_sensor(0x48) // external sensor
///     .build();
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    soft_start: [u8; 5],
    data_entry_mode: u8,
    border_waveform: u8,
    temp_sensor: u8,
    otp_load_mode: u8,
    refresh_mode: u8,
    auto_write_fill: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            // Booster soft-start ramp from the vendor init code
            soft_start: [0xAE, 0xC7, 0xC3, 0xC0, 0x40],
            // X increment, Y decrement
            data_entry_mode: 0x01,
            // VBD follows LUT1 (white border)
            border_waveform: 0x01,
            // Internal temperature sensor
            temp_sensor: 0x80,
            // Load temperature value and waveform setting
            otp_load_mode: 0xB1,
            // Display mode 1, LUT from OTP
            refresh_mode: 0xC7,
            // Auto-write RAM fill pattern
            auto_write_fill: 0xF7,
        }
    }
}

impl Builder {
    /// Create a new Builder with the vendor default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set booster soft-start parameters
    pub fn soft_start(mut self, values: [u8; 5]) -> Self {
        self.soft_start = values;
        self
    }

    /// Set the data entry mode byte
    pub fn data_entry_mode(mut self, value: u8) -> Self {
        self.data_entry_mode = value;
        self
    }

    /// Set the border waveform
    pub fn border_waveform(mut self, value: u8) -> Self {
        self.border_waveform = value;
        self
    }

    /// Set the temperature sensor selection
    pub fn temp_sensor(mut self, value: u8) -> Self {
        self.temp_sensor = value;
        self
    }

    /// Set the update sequence used to load OTP settings during init
    pub fn otp_load_mode(mut self, value: u8) -> Self {
        self.otp_load_mode = value;
        self
    }

    /// Set the update sequence used for a full refresh
    pub fn refresh_mode(mut self, value: u8) -> Self {
        self.refresh_mode = value;
        self
    }

    /// Set the auto-write RAM fill pattern used at power-up
    pub fn auto_write_fill(mut self, value: u8) -> Self {
        self.auto_write_fill = value;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        Config {
            soft_start: self.soft_start,
            data_entry_mode: self.data_entry_mode,
            border_waveform: self.border_waveform,
            temp_sensor: self.temp_sensor,
            otp_load_mode: self.otp_load_mode,
            refresh_mode: self.refresh_mode,
            auto_write_fill: self.auto_write_fill,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_vendor_init() {
        let config = Config::default();
        assert_eq!(config.soft_start, [0xAE, 0xC7, 0xC3, 0xC0, 0x40]);
        assert_eq!(config.data_entry_mode, 0x01);
        assert_eq!(config.border_waveform, 0x01);
        assert_eq!(config.temp_sensor, 0x80);
        assert_eq!(config.otp_load_mode, 0xB1);
        assert_eq!(config.refresh_mode, 0xC7);
        assert_eq!(config.auto_write_fill, 0xF7);
    }

    #[test]
    fn test_builder_overrides() {
        let config = Builder::new()
            .soft_start([1, 2, 3, 4, 5])
            .refresh_mode(0xF7)
            .build();
        assert_eq!(config.soft_start, [1, 2, 3, 4, 5]);
        assert_eq!(config.refresh_mode, 0xF7);
        assert_eq!(config.temp_sensor, 0x80);
    }
}
