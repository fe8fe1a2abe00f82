//! Error types for the driver
//!
//! Configuration mistakes surface as [`BuilderError`] before any bus
//! traffic happens. Everything after that is an [`Error`] wrapping the
//! transport failure reported by the interface layer (see
//! [`InterfaceError`](crate::interface::InterfaceError)).
//!
//! Out-of-bounds or degenerate drawing geometry is never an error:
//! the primitives clip silently and render nothing.
//!
//! ## Example
//!
//! ```
//! use st7735::{Builder, Dimensions, BuilderError};
//!
//! // Dimensions are the one required builder field
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // 200 columns does not fit the controller's 132x162 RAM
//! let result = Dimensions::new(200, 160);
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Maximum columns (width) supported by the ST7735 controller
///
/// The ST7735 frame memory is 132 columns wide.
///
/// NOTE: Panels usually wire fewer columns; configure [`crate::Dimensions`] accordingly.
pub const MAX_COLUMNS: u16 = 132;

/// Maximum rows (height) supported by the ST7735 controller
///
/// The ST7735 frame memory is 162 rows tall.
///
/// NOTE: Panels usually wire fewer rows; configure [`crate::Dimensions`] accordingly.
pub const MAX_ROWS: u16 = 162;

/// Runtime errors raised by display operations
///
/// Generic over the interface so the concrete SPI/GPIO error type
/// survives for callers that want to match on it.
///
/// The bus is write-only and unacknowledged, so transport failure is
/// the only runtime error; it is fatal for the in-flight operation and
/// leaves the panel in an undefined state. Recover with a full
/// [`init()`](crate::Display::init).
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Transport failure on the SPI bus or a control pin
    ///
    /// Carries the error value produced by the [`DisplayInterface`] in use.
    Interface(I::Error),
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Configuration errors reported when building a [`Config`](crate::config::Config)
///
/// Raised before a display is constructed; no hardware is touched.
#[derive(Debug)]
pub enum BuilderError {
    /// The builder was finished without
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions)
    MissingDimensions,
    /// Dimensions outside the controller's addressable RAM
    ///
    /// Constraints are documented on
    /// [`Dimensions::new()`](crate::config::Dimensions::new).
    InvalidDimensions {
        /// Width (columns) requested
        width: u16,
        /// Height (rows) requested
        height: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "No dimensions were provided"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (nonzero, max {MAX_COLUMNS}x{MAX_ROWS})"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
