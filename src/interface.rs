//! Hardware interface abstraction
//!
//! [`DisplayInterface`] is the command/data link the driver speaks over;
//! [`Interface`] implements it on top of an embedded-hal SPI device and
//! GPIO pins.
//!
//! ## Hardware Requirements
//!
//! The wiring is an SPI bus (MOSI + SCK, chip select belongs to the
//! [`SpiDevice`]) plus three outputs:
//! - **DC**: Data/Command select
//! - **RST**: Reset, active low
//! - **BL**: Backlight enable, active high by default
//!
//! The controller is write-only over this interface. Commands are fired
//! without reading status back, so no busy pin is involved.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use st7735::{DisplayInterface, Interface};
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
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! // Wire up SPI plus the DC, RST and BL pins
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//!
//! // Pulse the reset pin
//! interface.reset(&mut delay);
//!
//! // Software reset command, then three data bytes
//! let _ = interface.send_command(0x01);
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//!
//! // Switch the backlight on
//! let _ = interface.set_backlight(true);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the hardware link to the ST7735 controller
///
/// The [`Display`](crate::display::Display) drives the panel exclusively
/// through this trait, so any type that can frame command and data bytes
/// can stand in for the real wiring.
///
/// ## Implementing
///
/// The provided [`Interface`] covers the usual SPI + GPIO setup.
/// Implement the trait directly for unusual boards (inverted pins, a
/// shared bus with manual CS, a backlight on a PWM channel).
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;
    /// Send a command byte to the controller
    ///
    /// Drives DC low to select command framing, then writes the byte in
    /// one SPI transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the pin or the bus write fails.
    #[allow(clippy::type_complexity)]
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send data bytes to the controller
    ///
    /// Drives DC high to select data framing, then writes the whole
    /// slice in one SPI transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the pin or the bus write fails.
    #[allow(clippy::type_complexity)]
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// Pulses RST low for at least 10ms, then gives the controller
    /// another 10ms to come up after the rising edge.
    fn reset<D: DelayNs>(&mut self, delay: &mut D);

    /// Switch the backlight on or off
    ///
    /// `on` refers to the visible state, not the pin level. The
    /// implementation is responsible for mapping it to the correct level
    /// for the board's backlight circuit.
    ///
    /// # Errors
    ///
    /// Returns an error if GPIO fails.
    #[allow(clippy::type_complexity)]
    fn set_backlight(&mut self, on: bool) -> InterfaceResult<(), Self::Error>;
}

/// Transport errors from the SPI bus or the control pins
///
/// Generic so both underlying HAL error types stay visible.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// SPI + GPIO implementation of [`DisplayInterface`]
///
/// Owns the embedded-hal v1.0 bus device and the three control pins.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
/// * `BL` - Backlight pin implementing [`OutputPin`]
///
/// ## Example
///
/// ```rust,no_run
/// use st7735::{Builder, Dimensions, Display, Interface};
/// # use core::convert::Infallible;
/// # use embedded_hal::digital::OutputPin;
/// # use embedded_hal::spi::{Operation, SpiDevice};
/// # struct MockSpi;
/// # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
/// # impl SpiDevice for MockSpi {
/// #     fn transaction(
/// #         &mut self,
/// #         _operations: &mut [Operation<'_, u8>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// # struct MockPin;
/// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
/// # impl OutputPin for MockPin {
/// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// let interface = Interface::new(
///     MockSpi,  // SpiDevice
///     MockPin,  // DC
///     MockPin,  // RST
///     MockPin,  // BL
/// );
///
/// // Use with Display
/// # let dims = match Dimensions::new(128, 128) {
/// #     Ok(dims) => dims,
/// #     Err(_) => return,
/// # };
/// # let config = match Builder::new().dimensions(dims).build() {
/// #     Ok(config) => config,
/// #     Err(_) => return,
/// # };
/// let _display = Display::new(interface, config);
/// ```
pub struct Interface<SPI, DC, RST, BL> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
    /// Backlight pin
    bl: BL,
    /// Backlight pin polarity (true = lit when high)
    backlight_active_high: bool,
}

impl<SPI, DC, RST, BL> Interface<SPI, DC, RST, BL>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    BL: OutputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - Bus device, one transaction per command or data transfer
    /// * `dc` - Data/Command select output (low selects command framing)
    /// * `rst` - Reset output, active low
    /// * `bl` - Backlight output, active high unless reconfigured
    ///
    /// ## Example
    ///
    /// ```rust,no_run
    /// use st7735::{DisplayInterface, Interface};
    /// # use core::convert::Infallible;
    /// # use embedded_hal::digital::OutputPin;
    /// # use embedded_hal::spi::{Operation, SpiDevice};
    /// # struct MockSpi;
    /// # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
    /// # impl SpiDevice for MockSpi {
    /// #     fn transaction(
    /// #         &mut self,
    /// #         _operations: &mut [Operation<'_, u8>],
    /// #     ) -> Result<(), Self::Error> {
    /// #         Ok(())
    /// #     }
    /// # }
    /// # struct MockPin;
    /// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
    /// # impl OutputPin for MockPin {
    /// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
    /// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
    /// # }
    /// let _interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
    /// ```
    pub fn new(spi: SPI, dc: DC, rst: RST, bl: BL) -> Self {
        Self {
            spi,
            dc,
            rst,
            bl,
            backlight_active_high: true,
        }
    }

    /// Set backlight pin polarity
    ///
    /// Default is active-high. Set to false for boards that drive the
    /// backlight through an inverting transistor.
    pub fn set_backlight_active_high(&mut self, active_high: bool) -> &mut Self {
        self.backlight_active_high = active_high;
        self
    }

    /// Get backlight pin polarity (true = lit when high)
    pub fn backlight_active_high(&self) -> bool {
        self.backlight_active_high
    }
}

impl<SPI, DC, RST, BL, PinErr> DisplayInterface for Interface<SPI, DC, RST, BL>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    BL: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(|e| InterfaceError::Pin(e))?;
        self.spi
            .write(&[command])
            .map_err(|e| InterfaceError::Spi(e))?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(|e| InterfaceError::Pin(e))?;
        self.spi.write(data).map_err(|e| InterfaceError::Spi(e))?;
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) {
        // Reset sequence: LOW -> wait 10ms -> HIGH -> wait 10ms
        let _ = self.rst.set_low();
        delay.delay_ms(10);
        let _ = self.rst.set_high();
        delay.delay_ms(10);
    }

    fn set_backlight(&mut self, on: bool) -> InterfaceResult<(), Self::Error> {
        if on == self.backlight_active_high {
            self.bl.set_high().map_err(|e| InterfaceError::Pin(e))?;
        } else {
            self.bl.set_low().map_err(|e| InterfaceError::Pin(e))?;
        }
        Ok(())
    }
}
