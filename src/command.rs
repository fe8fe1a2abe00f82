//! ST7735 command definitions
//!
//! This module defines the command bytes used to control the ST7735
//! TFT display controller. The DC line distinguishes the byte kinds on
//! the shared bus: low marks a command, high marks its parameters.
//!
//! ## Wire Framing
//!
//! Every command goes out the same way:
//! 1. CS asserted by the SPI device for the transaction
//! 2. DC low, command byte
//! 3. DC high, parameter bytes (when the command takes any)
//! 4. CS released
//!
//! ## Example
//!
//! ```rust,no_run
//! use st7735::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
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
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//! // Software reset
//! let _ = interface.send_command(command::SOFTWARE_RESET);
//!
//! // Set the column window to 0..=127
//! let _ = interface.send_command(command::COLUMN_ADDRESS_SET);
//! let _ = interface.send_data(&[0x00, 0x00, 0x00, 0x7F]);
//! ```

// System commands

/// No operation (0x00)
pub const NOP: u8 = 0x00;

/// Software reset command (0x01)
///
/// Resets the controller registers to their defaults. The panel needs
/// at least 120ms before it reliably accepts further commands; this
/// driver waits 150ms.
pub const SOFTWARE_RESET: u8 = 0x01;

/// Read display ID command (0x04)
///
/// Returns 3 bytes of manufacturer/version/driver ID. Requires a
/// bidirectional bus; unused by this driver.
pub const READ_DISPLAY_ID: u8 = 0x04;

/// Read display status command (0x09)
///
/// Returns 4 status bytes. Requires a bidirectional bus; unused by
/// this driver.
pub const READ_DISPLAY_STATUS: u8 = 0x09;

// Power state commands

/// Sleep in command (0x10)
///
/// Enters minimum-power sleep mode. The panel needs 120ms before the
/// next sleep-out command.
pub const SLEEP_IN: u8 = 0x10;

/// Sleep out command (0x11)
///
/// Wakes the panel from sleep. The internal oscillator and charge pump
/// need up to 255ms to stabilize before further commands.
pub const SLEEP_OUT: u8 = 0x11;

/// Partial display mode on command (0x12)
///
/// Restricts refresh to the area set by [`PARTIAL_AREA`]. Unused by
/// this driver.
pub const PARTIAL_MODE_ON: u8 = 0x12;

/// Normal display mode on command (0x13)
///
/// Leaves partial mode and refreshes the whole panel. Requires a short
/// (10ms) settle delay.
pub const NORMAL_DISPLAY_MODE: u8 = 0x13;

/// Display inversion off command (0x20)
pub const INVERSION_OFF: u8 = 0x20;

/// Display inversion on command (0x21)
///
/// Some panel revisions are wired so that inverted output is the
/// correct one; see [`crate::Builder::invert_colors`].
pub const INVERSION_ON: u8 = 0x21;

/// Display off command (0x28)
///
/// Blanks the panel output. Frame memory is preserved.
pub const DISPLAY_OFF: u8 = 0x28;

/// Display on command (0x29)
///
/// Enables panel output from frame memory. Requires a 100ms settle
/// delay before the image is stable.
pub const DISPLAY_ON: u8 = 0x29;

// Memory and addressing commands

/// Column address set command (0x2A)
///
/// Sets the X range of the addressing window.
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const COLUMN_ADDRESS_SET: u8 = 0x2A;

/// Row address set command (0x2B)
///
/// Sets the Y range of the addressing window.
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const ROW_ADDRESS_SET: u8 = 0x2B;

/// Memory write command (0x2C)
///
/// Starts a pixel write into the current addressing window. The
/// controller then expects exactly `(x1-x0+1)*(y1-y0+1)` pixels of
/// payload, 2 bytes each in 16-bit mode, big-endian. Writing a
/// different amount desynchronizes the address counter until the next
/// window set.
pub const MEMORY_WRITE: u8 = 0x2C;

/// Memory read command (0x2E)
///
/// Requires a bidirectional bus; unused by this driver.
pub const MEMORY_READ: u8 = 0x2E;

/// Partial area command (0x30)
///
/// Sets the rows refreshed in partial mode. Requires 4 bytes. Unused
/// by this driver.
pub const PARTIAL_AREA: u8 = 0x30;

/// Memory access control command (0x36)
///
/// Sets scan order, row/column exchange and RGB/BGR order. Requires
/// 1 byte composed of the `MADCTL_*` bits; see [`crate::Config::madctl`].
pub const MEMORY_ACCESS_CONTROL: u8 = 0x36;

/// Interface pixel format command (0x3A)
///
/// Selects bits per pixel. Requires 1 byte; this driver always sends
/// [`PIXEL_FORMAT_16BIT`].
pub const PIXEL_FORMAT: u8 = 0x3A;

/// 16-bit (RGB565) pixel format value for [`PIXEL_FORMAT`]
pub const PIXEL_FORMAT_16BIT: u8 = 0x05;

// Memory access control bits

/// MADCTL row address order bit (MY)
pub const MADCTL_ROW_ORDER: u8 = 0x80;
/// MADCTL column address order bit (MX)
pub const MADCTL_COLUMN_ORDER: u8 = 0x40;
/// MADCTL row/column exchange bit (MV)
pub const MADCTL_ROW_COLUMN_EXCHANGE: u8 = 0x20;
/// MADCTL vertical refresh order bit (ML)
pub const MADCTL_VERTICAL_REFRESH_ORDER: u8 = 0x10;
/// MADCTL BGR color filter order bit (0 = RGB, 1 = BGR)
pub const MADCTL_BGR_ORDER: u8 = 0x08;
/// MADCTL horizontal refresh order bit (MH)
pub const MADCTL_HORIZONTAL_REFRESH_ORDER: u8 = 0x04;

// Panel register commands

/// Frame rate control, normal mode (0xB1)
///
/// Requires 3 bytes: [RTNA, FPA (front porch), BPA (back porch)].
pub const FRAME_RATE_CONTROL_NORMAL: u8 = 0xB1;

/// Frame rate control, idle mode (0xB2)
///
/// Requires 3 bytes, same layout as normal mode.
pub const FRAME_RATE_CONTROL_IDLE: u8 = 0xB2;

/// Frame rate control, partial mode (0xB3)
///
/// Requires 6 bytes: dot-inversion then line-inversion triples.
pub const FRAME_RATE_CONTROL_PARTIAL: u8 = 0xB3;

/// Display inversion control command (0xB4)
///
/// Selects dot vs line inversion per mode. Requires 1 byte.
pub const INVERSION_CONTROL: u8 = 0xB4;

/// Display function set command (0xB6)
///
/// Legacy function control. Unused by this driver.
pub const DISPLAY_FUNCTION_SET: u8 = 0xB6;

/// Power control 1 command (0xC0)
///
/// Sets GVDD and AVDD voltage levels. Requires 3 bytes.
pub const POWER_CONTROL_1: u8 = 0xC0;

/// Power control 2 command (0xC1)
///
/// Sets VGH/VGL supply levels. Requires 1 byte.
pub const POWER_CONTROL_2: u8 = 0xC1;

/// Power control 3 command (0xC2)
///
/// Op-amp current and boost frequency in normal mode. Requires 2 bytes.
pub const POWER_CONTROL_3: u8 = 0xC2;

/// Power control 4 command (0xC3)
///
/// Op-amp current and boost frequency in idle mode. Requires 2 bytes.
pub const POWER_CONTROL_4: u8 = 0xC3;

/// Power control 5 command (0xC4)
///
/// Op-amp current and boost frequency in partial mode. Requires 2 bytes.
pub const POWER_CONTROL_5: u8 = 0xC4;

/// Power control 6 command (0xFC)
///
/// Op-amp current in partial+idle mode. Unused by this driver.
pub const POWER_CONTROL_6: u8 = 0xFC;

/// VCOM control command (0xC5)
///
/// Sets the VCOM common-electrode voltage. Requires 1 byte.
pub const VCOM_CONTROL: u8 = 0xC5;

// Gamma and ID commands

/// Positive polarity gamma correction command (0xE0)
///
/// Requires 16 bytes of gamma curve data.
pub const GAMMA_ADJUST_POSITIVE: u8 = 0xE0;

/// Negative polarity gamma correction command (0xE1)
///
/// Requires 16 bytes of gamma curve data.
pub const GAMMA_ADJUST_NEGATIVE: u8 = 0xE1;

/// Read ID1 command (0xDA), manufacturer ID. Unused by this driver.
pub const READ_ID_1: u8 = 0xDA;
/// Read ID2 command (0xDB), driver version. Unused by this driver.
pub const READ_ID_2: u8 = 0xDB;
/// Read ID3 command (0xDC), driver ID. Unused by this driver.
pub const READ_ID_3: u8 = 0xDC;
/// Read ID4 command (0xDD), IC function. Unused by this driver.
pub const READ_ID_4: u8 = 0xDD;
