//! Display configuration types and builder

use crate::command::{
    MADCTL_BGR_ORDER, MADCTL_COLUMN_ORDER, MADCTL_ROW_COLUMN_EXCHANGE, MADCTL_ROW_ORDER,
};

pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Width in pixels (columns)
    pub width: u16,
    /// Height in pixels (rows)
    pub height: u16,
}

impl Dimensions {
    /// Validate and construct panel dimensions
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` unless
    /// `1 <= width <= MAX_COLUMNS` (132) and
    /// `1 <= height <= MAX_ROWS` (162).
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_COLUMNS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_ROWS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }
}

/// Quarter-turn orientation of the panel
///
/// Rotation is applied in the controller via the memory access control
/// register, not by remapping coordinates in software. Drawing
/// coordinates are always in the rotated frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

impl Rotation {
    /// Memory access control bits selecting this orientation
    pub fn madctl_bits(self) -> u8 {
        match self {
            Self::Rotate0 => MADCTL_ROW_ORDER | MADCTL_COLUMN_ORDER,
            Self::Rotate90 => MADCTL_ROW_ORDER | MADCTL_ROW_COLUMN_EXCHANGE,
            Self::Rotate180 => 0x00,
            Self::Rotate270 => MADCTL_COLUMN_ORDER | MADCTL_ROW_COLUMN_EXCHANGE,
        }
    }
}

/// Subpixel order of the attached panel
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ColorOrder {
    /// Red-green-blue subpixels
    Rgb,
    /// Blue-green-red subpixels (the reference 1.44" panel)
    #[default]
    Bgr,
}

impl ColorOrder {
    /// Memory access control bit selecting this order
    pub fn madctl_bits(self) -> u8 {
        match self {
            Self::Rgb => 0x00,
            Self::Bgr => MADCTL_BGR_ORDER,
        }
    }
}

/// Display configuration
///
/// This struct holds all configurable parameters for the ST7735 controller,
/// including the panel register table written during
/// [`init()`](crate::Display::init). Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Display rotation
    pub rotation: Rotation,
    /// Panel subpixel order
    pub color_order: ColorOrder,
    /// Whether to enable display inversion during init
    pub invert_colors: bool,
    /// Frame rate control, normal mode (3 bytes for command 0xB1)
    pub frame_rate_normal: [u8; 3],
    /// Frame rate control, idle mode (3 bytes for command 0xB2)
    pub frame_rate_idle: [u8; 3],
    /// Frame rate control, partial mode (6 bytes for command 0xB3)
    pub frame_rate_partial: [u8; 6],
    /// Display inversion control byte
    pub inversion_control: u8,
    /// Power control 1 (GVDD/AVDD, 3 bytes)
    pub power_control1: [u8; 3],
    /// Power control 2 (VGH/VGL, 1 byte)
    pub power_control2: u8,
    /// Power control 3 (normal mode op-amp, 2 bytes)
    pub power_control3: [u8; 2],
    /// Power control 4 (idle mode op-amp, 2 bytes)
    pub power_control4: [u8; 2],
    /// Power control 5 (partial mode op-amp, 2 bytes)
    pub power_control5: [u8; 2],
    /// VCOM register value
    pub vcom: u8,
    /// Positive polarity gamma curve (16 bytes)
    pub gamma_positive: [u8; 16],
    /// Negative polarity gamma curve (16 bytes)
    pub gamma_negative: [u8; 16],
}

impl Config {
    /// Dimensions of the drawable area after rotation
    ///
    /// Drawing coordinates and clipping operate on these.
    pub fn rotated_dimensions(&self) -> Dimensions {
        match self.rotation {
            Rotation::Rotate0 | Rotation::Rotate180 => self.dimensions,
            Rotation::Rotate90 | Rotation::Rotate270 => Dimensions {
                width: self.dimensions.height,
                height: self.dimensions.width,
            },
        }
    }

    /// Compose the memory access control byte from rotation and color order
    pub fn madctl(&self) -> u8 {
        self.rotation.madctl_bits() | self.color_order.madctl_bits()
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use st7735::{Builder, Dimensions, Rotation};
///
/// let dims = match Dimensions::new(128, 128) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).rotation(Rotation::Rotate0).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// Display rotation
    rotation: Rotation,
    /// Panel subpixel order
    color_order: ColorOrder,
    /// Whether to enable display inversion during init
    invert_colors: bool,
    /// Frame rate control, normal mode
    frame_rate_normal: [u8; 3],
    /// Frame rate control, idle mode
    frame_rate_idle: [u8; 3],
    /// Frame rate control, partial mode
    frame_rate_partial: [u8; 6],
    /// Display inversion control byte
    inversion_control: u8,
    /// Power control 1
    power_control1: [u8; 3],
    /// Power control 2
    power_control2: u8,
    /// Power control 3
    power_control3: [u8; 2],
    /// Power control 4
    power_control4: [u8; 2],
    /// Power control 5
    power_control5: [u8; 2],
    /// VCOM register value
    vcom: u8,
    /// Positive polarity gamma curve
    gamma_positive: [u8; 16],
    /// Negative polarity gamma curve
    gamma_negative: [u8; 16],
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            rotation: Rotation::Rotate0,
            color_order: ColorOrder::Bgr,
            invert_colors: false,
            // Register defaults for the reference 1.44" panel (panel-specific, override as needed)
            frame_rate_normal: [0x01, 0x2C, 0x2D],
            frame_rate_idle: [0x01, 0x2C, 0x2D],
            frame_rate_partial: [0x01, 0x2C, 0x2D, 0x01, 0x2C, 0x2D],
            inversion_control: 0x07,
            power_control1: [0xA2, 0x02, 0x84],
            power_control2: 0xC5,
            power_control3: [0x0A, 0x00],
            power_control4: [0x8A, 0x2A],
            power_control5: [0x8A, 0xEE],
            vcom: 0x0E,
            gamma_positive: [
                0x02, 0x1C, 0x07, 0x12, 0x37, 0x32, 0x29, 0x2D, 0x29, 0x25, 0x2B, 0x39, 0x00,
                0x01, 0x03, 0x10,
            ],
            gamma_negative: [
                0x03, 0x1D, 0x07, 0x06, 0x2E, 0x2C, 0x29, 0x2D, 0x2E, 0x2E, 0x37, 0x3F, 0x00,
                0x00, 0x02, 0x10,
            ],
        }
    }
}

impl Builder {
    /// Start a builder carrying the reference panel defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set display rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set panel subpixel order
    pub fn color_order(mut self, order: ColorOrder) -> Self {
        self.color_order = order;
        self
    }

    /// Enable or disable display inversion
    ///
    /// Some panel revisions render correct colors only with inversion on.
    pub fn invert_colors(mut self, invert: bool) -> Self {
        self.invert_colors = invert;
        self
    }

    /// Set frame rate control parameters for normal mode
    pub fn frame_rate_normal(mut self, values: [u8; 3]) -> Self {
        self.frame_rate_normal = values;
        self
    }

    /// Set frame rate control parameters for idle mode
    pub fn frame_rate_idle(mut self, values: [u8; 3]) -> Self {
        self.frame_rate_idle = values;
        self
    }

    /// Set frame rate control parameters for partial mode
    pub fn frame_rate_partial(mut self, values: [u8; 6]) -> Self {
        self.frame_rate_partial = values;
        self
    }

    /// Set the display inversion control byte
    pub fn inversion_control(mut self, value: u8) -> Self {
        self.inversion_control = value;
        self
    }

    /// Set power control 1 parameters (GVDD/AVDD)
    pub fn power_control1(mut self, values: [u8; 3]) -> Self {
        self.power_control1 = values;
        self
    }

    /// Set the power control 2 byte (VGH/VGL)
    pub fn power_control2(mut self, value: u8) -> Self {
        self.power_control2 = value;
        self
    }

    /// Set power control 3 parameters (normal mode op-amp)
    pub fn power_control3(mut self, values: [u8; 2]) -> Self {
        self.power_control3 = values;
        self
    }

    /// Set power control 4 parameters (idle mode op-amp)
    pub fn power_control4(mut self, values: [u8; 2]) -> Self {
        self.power_control4 = values;
        self
    }

    /// Set power control 5 parameters (partial mode op-amp)
    pub fn power_control5(mut self, values: [u8; 2]) -> Self {
        self.power_control5 = values;
        self
    }

    /// Set VCOM value
    pub fn vcom(mut self, value: u8) -> Self {
        self.vcom = value;
        self
    }

    /// Set the positive polarity gamma curve
    pub fn gamma_positive(mut self, values: [u8; 16]) -> Self {
        self.gamma_positive = values;
        self
    }

    /// Set the negative polarity gamma curve
    pub fn gamma_negative(mut self, values: [u8; 16]) -> Self {
        self.gamma_negative = values;
        self
    }

    /// Finish the builder and produce a [`Config`]
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` when
    /// [`dimensions()`](Self::dimensions) was never called
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            rotation: self.rotation,
            color_order: self.color_order,
            invert_colors: self.invert_colors,
            frame_rate_normal: self.frame_rate_normal,
            frame_rate_idle: self.frame_rate_idle,
            frame_rate_partial: self.frame_rate_partial,
            inversion_control: self.inversion_control,
            power_control1: self.power_control1,
            power_control2: self.power_control2,
            power_control3: self.power_control3,
            power_control4: self.power_control4,
            power_control5: self.power_control5,
            vcom: self.vcom,
            gamma_positive: self.gamma_positive,
            gamma_negative: self.gamma_negative,
        })
    }
}
