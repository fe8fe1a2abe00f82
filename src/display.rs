//! Core display operations

use embedded_hal::delay::DelayNs;
use log::debug;

use crate::color::Color;
use crate::command::{
    COLUMN_ADDRESS_SET, DISPLAY_OFF, DISPLAY_ON, FRAME_RATE_CONTROL_IDLE,
    FRAME_RATE_CONTROL_NORMAL, FRAME_RATE_CONTROL_PARTIAL, GAMMA_ADJUST_NEGATIVE,
    GAMMA_ADJUST_POSITIVE, INVERSION_CONTROL, INVERSION_OFF, INVERSION_ON, MEMORY_ACCESS_CONTROL,
    MEMORY_WRITE, NORMAL_DISPLAY_MODE, PIXEL_FORMAT, PIXEL_FORMAT_16BIT, POWER_CONTROL_1,
    POWER_CONTROL_2, POWER_CONTROL_3, POWER_CONTROL_4, POWER_CONTROL_5, ROW_ADDRESS_SET, SLEEP_IN,
    SLEEP_OUT, SOFTWARE_RESET, VCOM_CONTROL,
};
use crate::config::{Config, Dimensions};
use crate::error::Error;
use crate::font;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Settle delay after software reset
const SOFTWARE_RESET_DELAY_MS: u32 = 150;
/// Settle delay after sleep-out, the longest in the sequence
const SLEEP_OUT_DELAY_MS: u32 = 255;
/// Settle delay after sleep-in
const SLEEP_IN_DELAY_MS: u32 = 120;
/// Settle delay after selecting normal display mode
const NORMAL_MODE_DELAY_MS: u32 = 10;
/// Settle delay after display-on
const DISPLAY_ON_DELAY_MS: u32 = 100;

/// Pixels per SPI transfer when streaming a solid color
const SOLID_CHUNK_PIXELS: usize = 64;

/// Controller power state
///
/// Tracks the mode the controller was last driven into. This is
/// bookkeeping for the caller; operations do not gate on it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PowerState {
    /// After construction or hardware reset, before initialization
    #[default]
    Reset,
    /// Sleep-in mode, internal oscillator stopped
    Sleep,
    /// Initialized and displaying in normal mode
    AwakeNormal,
    /// Display output off
    Off,
}

/// Core display driver for ST7735
///
/// This struct provides the drawing operations for the ST7735 controller.
/// With the `graphics` feature enabled it also implements the
/// embedded-graphics `DrawTarget` trait.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Last power state the controller was driven into
    power_state: PowerState,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a display over the given interface
    ///
    /// The panel is untouched until [`init()`](Self::init) runs.
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            power_state: PowerState::Reset,
        }
    }

    /// Perform hardware reset and initialize the panel
    ///
    /// Runs the fixed power-on sequence: hardware reset, software reset,
    /// sleep-out, the panel register table from [`Config`], normal display
    /// mode, display on, then backlight on. The settle delays between
    /// steps are required by the panel; the whole sequence blocks for
    /// roughly half a second.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if a bus transaction fails. Panel
    /// state is then undefined; recover by calling `init()` again.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        debug!("initializing ST7735 panel");

        self.interface.reset(delay);
        self.power_state = PowerState::Reset;

        self.send_command(SOFTWARE_RESET)?;
        delay.delay_ms(SOFTWARE_RESET_DELAY_MS);

        self.send_command(SLEEP_OUT)?;
        delay.delay_ms(SLEEP_OUT_DELAY_MS);

        // Frame rate control
        let frame_rate_normal = self.config.frame_rate_normal;
        self.send_command(FRAME_RATE_CONTROL_NORMAL)?;
        self.send_data(&frame_rate_normal)?;

        let frame_rate_idle = self.config.frame_rate_idle;
        self.send_command(FRAME_RATE_CONTROL_IDLE)?;
        self.send_data(&frame_rate_idle)?;

        let frame_rate_partial = self.config.frame_rate_partial;
        self.send_command(FRAME_RATE_CONTROL_PARTIAL)?;
        self.send_data(&frame_rate_partial)?;

        // Display inversion control
        self.send_command(INVERSION_CONTROL)?;
        self.send_data(&[self.config.inversion_control])?;

        // Power control
        let power_control1 = self.config.power_control1;
        self.send_command(POWER_CONTROL_1)?;
        self.send_data(&power_control1)?;

        self.send_command(POWER_CONTROL_2)?;
        self.send_data(&[self.config.power_control2])?;

        let power_control3 = self.config.power_control3;
        self.send_command(POWER_CONTROL_3)?;
        self.send_data(&power_control3)?;

        let power_control4 = self.config.power_control4;
        self.send_command(POWER_CONTROL_4)?;
        self.send_data(&power_control4)?;

        let power_control5 = self.config.power_control5;
        self.send_command(POWER_CONTROL_5)?;
        self.send_data(&power_control5)?;

        // VCOM
        self.send_command(VCOM_CONTROL)?;
        self.send_data(&[self.config.vcom])?;

        if self.config.invert_colors {
            self.send_command(INVERSION_ON)?;
        } else {
            self.send_command(INVERSION_OFF)?;
        }

        // Orientation and pixel format
        let madctl = self.config.madctl();
        self.send_command(MEMORY_ACCESS_CONTROL)?;
        self.send_data(&[madctl])?;

        self.send_command(PIXEL_FORMAT)?;
        self.send_data(&[PIXEL_FORMAT_16BIT])?;

        // Gamma correction
        let gamma_positive = self.config.gamma_positive;
        self.send_command(GAMMA_ADJUST_POSITIVE)?;
        self.send_data(&gamma_positive)?;

        let gamma_negative = self.config.gamma_negative;
        self.send_command(GAMMA_ADJUST_NEGATIVE)?;
        self.send_data(&gamma_negative)?;

        self.send_command(NORMAL_DISPLAY_MODE)?;
        delay.delay_ms(NORMAL_MODE_DELAY_MS);

        self.send_command(DISPLAY_ON)?;
        delay.delay_ms(DISPLAY_ON_DELAY_MS);

        self.interface
            .set_backlight(true)
            .map_err(Error::Interface)?;
        self.power_state = PowerState::AwakeNormal;

        debug!("ST7735 panel initialized");
        Ok(())
    }

    /// Fill the entire panel with one color
    pub fn fill(&mut self, color: Color) -> DisplayResult<I> {
        let dims = self.config.rotated_dimensions();
        self.set_window(0, 0, dims.width - 1, dims.height - 1)?;
        self.write_solid(color, usize::from(dims.width) * usize::from(dims.height))
    }

    /// Set a single pixel
    ///
    /// Coordinates outside the panel are silently ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> DisplayResult<I> {
        let (width, height) = self.bounds();
        if x < 0 || y < 0 || x >= width || y >= height {
            return Ok(());
        }

        let (x, y) = (x as u16, y as u16);
        self.set_window(x, y, x, y)?;
        self.send_data(&color.to_be_bytes())
    }

    /// Draw a horizontal line
    ///
    /// The segment is clipped to the panel; a fully off-panel line is a
    /// no-op.
    pub fn horizontal_line(&mut self, x: i32, y: i32, w: i32, color: Color) -> DisplayResult<I> {
        let (width, height) = self.bounds();
        if y < 0 || y >= height {
            return Ok(());
        }

        let mut x = x;
        let mut w = w;
        if x < 0 {
            w = w.saturating_add(x);
            x = 0;
        }
        if x.saturating_add(w) > width {
            w = width - x;
        }
        if w <= 0 {
            return Ok(());
        }

        self.set_window(x as u16, y as u16, (x + w - 1) as u16, y as u16)?;
        self.write_solid(color, w as usize)
    }

    /// Draw a vertical line
    ///
    /// The segment is clipped to the panel. Issued as one single-pixel
    /// write per row rather than one bulk transfer, which keeps each bus
    /// transaction short.
    pub fn vertical_line(&mut self, x: i32, y: i32, h: i32, color: Color) -> DisplayResult<I> {
        let (width, height) = self.bounds();
        if x < 0 || x >= width {
            return Ok(());
        }

        let mut y = y;
        let mut h = h;
        if y < 0 {
            h = h.saturating_add(y);
            y = 0;
        }
        if y.saturating_add(h) > height {
            h = height - y;
        }
        if h <= 0 {
            return Ok(());
        }

        for row in y..y + h {
            self.set_pixel(x, row, color)?;
        }
        Ok(())
    }

    /// Draw a rectangle outline
    ///
    /// Drawn as two horizontal and two vertical lines, each clipped
    /// independently. Degenerate rectangles (`w` or `h` not positive)
    /// draw nothing.
    #[allow(clippy::many_single_char_names)]
    pub fn rect_outline(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) -> DisplayResult<I> {
        if w <= 0 || h <= 0 {
            return Ok(());
        }

        let right = x.saturating_add(w) - 1;
        let bottom = y.saturating_add(h) - 1;
        self.horizontal_line(x, y, w, color)?;
        self.horizontal_line(x, bottom, w, color)?;
        self.vertical_line(x, y, h, color)?;
        self.vertical_line(right, y, h, color)
    }

    /// Fill a rectangle
    ///
    /// The rectangle is clipped to the panel on both axes. Rows are
    /// written one at a time, each with its own addressing window.
    #[allow(clippy::many_single_char_names)]
    pub fn rect_fill(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) -> DisplayResult<I> {
        let (width, height) = self.bounds();

        let mut x = x;
        let mut y = y;
        let mut w = w;
        let mut h = h;
        if x < 0 {
            w = w.saturating_add(x);
            x = 0;
        }
        if y < 0 {
            h = h.saturating_add(y);
            y = 0;
        }
        if x.saturating_add(w) > width {
            w = width - x;
        }
        if y.saturating_add(h) > height {
            h = height - y;
        }
        if w <= 0 || h <= 0 {
            return Ok(());
        }

        for row in y..y + h {
            self.set_window(x as u16, row as u16, (x + w - 1) as u16, row as u16)?;
            self.write_solid(color, w as usize)?;
        }
        Ok(())
    }

    /// Draw text using the built-in 8x8 glyph table
    ///
    /// Characters advance 8 pixels horizontally. Set glyph bits are drawn
    /// in `color`; unset bits are filled with `bg` when provided and left
    /// untouched otherwise. Rendering stops at the first character whose
    /// origin lies at or beyond the right panel edge. The table covers
    /// uppercase letters, digits, space and colon; lowercase input is
    /// uppercased and anything else renders as a space.
    pub fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        color: Color,
        bg: Option<Color>,
    ) -> DisplayResult<I> {
        let (width, _) = self.bounds();
        for (i, c) in text.chars().enumerate() {
            let char_x = x + (i as i32) * font::ADVANCE_X;
            if char_x >= width {
                break;
            }

            let glyph = font::glyph(c);
            for row in 0..font::HEIGHT {
                let byte = glyph[row as usize];
                for col in 0..8 {
                    let px = char_x + col;
                    let py = y + row;
                    if byte & (0x80 >> col) != 0 {
                        self.set_pixel(px, py, color)?;
                    } else if let Some(bg) = bg {
                        self.set_pixel(px, py, bg)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Draw text as solid 6x8 boxes, one per character
    ///
    /// A placeholder renderer that marks character cells without looking
    /// up glyph shapes. Advance and the right-edge stop rule match
    /// [`draw_text()`](Self::draw_text).
    pub fn draw_text_boxed(&mut self, text: &str, x: i32, y: i32, color: Color) -> DisplayResult<I> {
        let (width, _) = self.bounds();
        for (i, _) in text.chars().enumerate() {
            let char_x = x + (i as i32) * font::ADVANCE_X;
            if char_x >= width {
                break;
            }
            self.rect_fill(char_x, y, font::BOX_WIDTH, font::HEIGHT, color)?;
        }
        Ok(())
    }

    /// Switch the panel off
    ///
    /// Disables the backlight and sends the display-off command. Safe to
    /// call more than once. No further drawing should be issued until
    /// [`init()`](Self::init) has run again.
    pub fn shutdown(&mut self) -> DisplayResult<I> {
        debug!("shutting down ST7735 panel");
        self.interface
            .set_backlight(false)
            .map_err(Error::Interface)?;
        self.send_command(DISPLAY_OFF)?;
        self.power_state = PowerState::Off;
        Ok(())
    }

    /// Enter sleep-in mode
    ///
    /// Panel RAM is retained; drawing resumes after
    /// [`sleep_out()`](Self::sleep_out).
    pub fn sleep_in<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.send_command(SLEEP_IN)?;
        delay.delay_ms(SLEEP_IN_DELAY_MS);
        self.power_state = PowerState::Sleep;
        Ok(())
    }

    /// Leave sleep-in mode
    pub fn sleep_out<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.send_command(SLEEP_OUT)?;
        delay.delay_ms(SLEEP_OUT_DELAY_MS);
        self.power_state = PowerState::AwakeNormal;
        Ok(())
    }

    /// Turn the display output on without touching panel RAM
    pub fn display_on<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.send_command(DISPLAY_ON)?;
        delay.delay_ms(DISPLAY_ON_DELAY_MS);
        self.power_state = PowerState::AwakeNormal;
        Ok(())
    }

    /// Turn the display output off, keeping panel RAM intact
    pub fn display_off(&mut self) -> DisplayResult<I> {
        self.send_command(DISPLAY_OFF)?;
        self.power_state = PowerState::Off;
        Ok(())
    }

    /// Get the drawable dimensions (width and height after rotation)
    pub fn dimensions(&self) -> Dimensions {
        self.config.rotated_dimensions()
    }

    /// Get the last power state the controller was driven into
    pub fn power_state(&self) -> PowerState {
        self.power_state
    }

    /// The configuration this display was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Program the addressing window and open a memory write
    ///
    /// Coordinates are inclusive. The caller must follow with exactly
    /// `(x1 - x0 + 1) * (y1 - y0 + 1)` pixels of payload; writing more
    /// or fewer desynchronizes the controller until the next window set.
    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> DisplayResult<I> {
        let [x0_hi, x0_lo] = x0.to_be_bytes();
        let [x1_hi, x1_lo] = x1.to_be_bytes();
        self.send_command(COLUMN_ADDRESS_SET)?;
        self.send_data(&[x0_hi, x0_lo, x1_hi, x1_lo])?;

        let [y0_hi, y0_lo] = y0.to_be_bytes();
        let [y1_hi, y1_lo] = y1.to_be_bytes();
        self.send_command(ROW_ADDRESS_SET)?;
        self.send_data(&[y0_hi, y0_lo, y1_hi, y1_lo])?;

        self.send_command(MEMORY_WRITE)
    }

    /// Stream `count` repetitions of a color into an open memory write
    fn write_solid(&mut self, color: Color, count: usize) -> DisplayResult<I> {
        let [hi, lo] = color.to_be_bytes();
        let mut chunk = [0u8; SOLID_CHUNK_PIXELS * 2];
        for pair in chunk.chunks_exact_mut(2) {
            pair[0] = hi;
            pair[1] = lo;
        }

        let mut remaining = count;
        while remaining > 0 {
            let n = remaining.min(SOLID_CHUNK_PIXELS);
            self.send_data(&chunk[..n * 2])?;
            remaining -= n;
        }
        Ok(())
    }

    /// Drawable bounds as signed values for clipping arithmetic
    fn bounds(&self) -> (i32, i32) {
        let dims = self.config.rotated_dimensions();
        (i32::from(dims.width), i32::from(dims.height))
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, Dimensions, Rotation};

    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[derive(Debug, PartialEq)]
    enum Event {
        Command(u8),
        Data(Vec<u8>),
        Reset,
        Backlight(bool),
        DelayNs(u32),
    }

    #[derive(Debug)]
    struct MockInterface {
        events: Rc<RefCell<Vec<Event>>>,
    }

    impl DisplayInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
            self.events.borrow_mut().push(Event::Command(command));
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            self.events.borrow_mut().push(Event::Data(data.to_vec()));
            Ok(())
        }

        fn reset<D: DelayNs>(&mut self, delay: &mut D) {
            self.events.borrow_mut().push(Event::Reset);
            delay.delay_ms(10);
            delay.delay_ms(10);
        }

        fn set_backlight(&mut self, on: bool) -> Result<(), Self::Error> {
            self.events.borrow_mut().push(Event::Backlight(on));
            Ok(())
        }
    }

    struct MockDelay {
        events: Rc<RefCell<Vec<Event>>>,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.events.borrow_mut().push(Event::DelayNs(ns));
        }
    }

    #[derive(Debug)]
    struct FailingInterface;

    #[derive(Debug, PartialEq)]
    struct BusError;

    impl DisplayInterface for FailingInterface {
        type Error = BusError;

        fn send_command(&mut self, _command: u8) -> Result<(), Self::Error> {
            Err(BusError)
        }

        fn send_data(&mut self, _data: &[u8]) -> Result<(), Self::Error> {
            Err(BusError)
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D) {}

        fn set_backlight(&mut self, _on: bool) -> Result<(), Self::Error> {
            Err(BusError)
        }
    }

    /// One addressing window and the payload streamed after it
    #[derive(Debug, PartialEq)]
    struct Window {
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
        payload: Vec<u8>,
    }

    fn display_with(config: crate::config::Config) -> (
        Display<MockInterface>,
        MockDelay,
        Rc<RefCell<Vec<Event>>>,
    ) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let interface = MockInterface {
            events: Rc::clone(&events),
        };
        let delay = MockDelay {
            events: Rc::clone(&events),
        };
        (Display::new(interface, config), delay, events)
    }

    fn test_display() -> (
        Display<MockInterface>,
        MockDelay,
        Rc<RefCell<Vec<Event>>>,
    ) {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 128).unwrap())
            .build()
            .unwrap();
        display_with(config)
    }

    fn commands(events: &[Event]) -> Vec<u8> {
        events
            .iter()
            .filter_map(|e| match e {
                Event::Command(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    fn data_after(events: &[Event], command: u8) -> Vec<u8> {
        let at = events
            .iter()
            .position(|e| *e == Event::Command(command))
            .unwrap();
        match &events[at + 1] {
            Event::Data(d) => d.clone(),
            other => panic!("expected data after {command:#04x}, got {other:?}"),
        }
    }

    /// Parse every window set plus the payload streamed into it
    fn windows(events: &[Event]) -> Vec<Window> {
        let mut out = Vec::new();
        let mut i = 0;
        while i < events.len() {
            if events[i] != Event::Command(COLUMN_ADDRESS_SET) {
                i += 1;
                continue;
            }
            let Event::Data(cols) = &events[i + 1] else {
                panic!("column address set without payload");
            };
            assert_eq!(events[i + 2], Event::Command(ROW_ADDRESS_SET));
            let Event::Data(rows) = &events[i + 3] else {
                panic!("row address set without payload");
            };
            assert_eq!(events[i + 4], Event::Command(MEMORY_WRITE));

            let mut payload = Vec::new();
            i += 5;
            while let Some(Event::Data(d)) = events.get(i) {
                payload.extend_from_slice(d);
                i += 1;
            }

            out.push(Window {
                x0: u16::from_be_bytes([cols[0], cols[1]]),
                x1: u16::from_be_bytes([cols[2], cols[3]]),
                y0: u16::from_be_bytes([rows[0], rows[1]]),
                y1: u16::from_be_bytes([rows[2], rows[3]]),
                payload,
            });
        }
        out
    }

    #[test]
    fn test_init_command_order() {
        let (mut display, mut delay, events) = test_display();
        display.init(&mut delay).unwrap();

        let events = events.borrow();
        assert_eq!(events.first(), Some(&Event::Reset));
        assert_eq!(events.last(), Some(&Event::Backlight(true)));
        assert_eq!(
            commands(&events),
            alloc::vec![
                SOFTWARE_RESET,
                SLEEP_OUT,
                FRAME_RATE_CONTROL_NORMAL,
                FRAME_RATE_CONTROL_IDLE,
                FRAME_RATE_CONTROL_PARTIAL,
                INVERSION_CONTROL,
                POWER_CONTROL_1,
                POWER_CONTROL_2,
                POWER_CONTROL_3,
                POWER_CONTROL_4,
                POWER_CONTROL_5,
                VCOM_CONTROL,
                INVERSION_OFF,
                MEMORY_ACCESS_CONTROL,
                PIXEL_FORMAT,
                GAMMA_ADJUST_POSITIVE,
                GAMMA_ADJUST_NEGATIVE,
                NORMAL_DISPLAY_MODE,
                DISPLAY_ON,
            ]
        );
    }

    #[test]
    fn test_init_waits_at_least_535_ms_before_backlight() {
        let (mut display, mut delay, events) = test_display();
        display.init(&mut delay).unwrap();

        let events = events.borrow();
        let backlight_at = events
            .iter()
            .position(|e| matches!(e, Event::Backlight(true)))
            .unwrap();
        let total_ns: u64 = events[..backlight_at]
            .iter()
            .filter_map(|e| match e {
                Event::DelayNs(ns) => Some(u64::from(*ns)),
                _ => None,
            })
            .sum();
        assert!(total_ns >= 535_000_000);
    }

    #[test]
    fn test_init_programs_panel_registers() {
        let (mut display, mut delay, events) = test_display();
        display.init(&mut delay).unwrap();

        let events = events.borrow();
        assert_eq!(data_after(&events, MEMORY_ACCESS_CONTROL), alloc::vec![0xC8]);
        assert_eq!(
            data_after(&events, PIXEL_FORMAT),
            alloc::vec![PIXEL_FORMAT_16BIT]
        );
        assert_eq!(
            data_after(&events, FRAME_RATE_CONTROL_PARTIAL),
            alloc::vec![0x01, 0x2C, 0x2D, 0x01, 0x2C, 0x2D]
        );
        assert_eq!(
            data_after(&events, POWER_CONTROL_1),
            alloc::vec![0xA2, 0x02, 0x84]
        );
        assert_eq!(
            data_after(&events, GAMMA_ADJUST_POSITIVE),
            alloc::vec![
                0x02, 0x1C, 0x07, 0x12, 0x37, 0x32, 0x29, 0x2D, 0x29, 0x25, 0x2B, 0x39, 0x00,
                0x01, 0x03, 0x10,
            ]
        );
        assert_eq!(
            data_after(&events, GAMMA_ADJUST_NEGATIVE),
            alloc::vec![
                0x03, 0x1D, 0x07, 0x06, 0x2E, 0x2C, 0x29, 0x2D, 0x2E, 0x2E, 0x37, 0x3F, 0x00,
                0x00, 0x02, 0x10,
            ]
        );
    }

    #[test]
    fn test_init_with_invert_colors_sends_inversion_on() {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 128).unwrap())
            .invert_colors(true)
            .build()
            .unwrap();
        let (mut display, mut delay, events) = display_with(config);
        display.init(&mut delay).unwrap();

        let sent = commands(&events.borrow());
        assert!(sent.contains(&INVERSION_ON));
        assert!(!sent.contains(&INVERSION_OFF));
    }

    #[test]
    fn test_set_pixel_emits_single_point_window() {
        let (mut display, _delay, events) = test_display();
        display.set_pixel(5, 9, Color::WHITE).unwrap();

        let wins = windows(&events.borrow());
        assert_eq!(wins.len(), 1);
        let win = &wins[0];
        assert_eq!((win.x0, win.y0, win.x1, win.y1), (5, 9, 5, 9));
        assert_eq!(win.payload, alloc::vec![0xFF, 0xFF]);
    }

    #[test]
    fn test_set_pixel_out_of_bounds_is_silent() {
        let (mut display, _delay, events) = test_display();
        for (x, y) in [(-1, 0), (0, -1), (128, 0), (0, 128), (-5, 200)] {
            display.set_pixel(x, y, Color::RED).unwrap();
        }
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_fill_sets_one_full_panel_window() {
        let (mut display, _delay, events) = test_display();
        display.fill(Color::RED).unwrap();

        let wins = windows(&events.borrow());
        assert_eq!(wins.len(), 1);
        let win = &wins[0];
        assert_eq!((win.x0, win.y0, win.x1, win.y1), (0, 0, 127, 127));
        assert_eq!(win.payload.len(), 128 * 128 * 2);
        assert!(win.payload.chunks_exact(2).all(|p| p == [0xF8, 0x00]));
    }

    #[test]
    fn test_fill_respects_rotation() {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 160).unwrap())
            .rotation(Rotation::Rotate90)
            .build()
            .unwrap();
        let (mut display, _delay, events) = display_with(config);
        assert_eq!(display.dimensions(), Dimensions::new(160, 128).unwrap());

        display.fill(Color::BLACK).unwrap();

        let wins = windows(&events.borrow());
        assert_eq!(wins.len(), 1);
        let win = &wins[0];
        assert_eq!((win.x0, win.y0, win.x1, win.y1), (0, 0, 159, 127));
        assert_eq!(win.payload.len(), 160 * 128 * 2);
    }

    #[test]
    fn test_horizontal_line_clips_left_edge() {
        let (mut display, _delay, events) = test_display();
        display.horizontal_line(-5, 10, 20, Color::RED).unwrap();

        let wins = windows(&events.borrow());
        assert_eq!(wins.len(), 1);
        let win = &wins[0];
        assert_eq!((win.x0, win.y0, win.x1, win.y1), (0, 10, 14, 10));
        assert_eq!(win.payload.len(), 15 * 2);
        assert!(win.payload.chunks_exact(2).all(|p| p == [0xF8, 0x00]));
    }

    #[test]
    fn test_horizontal_line_clips_right_edge() {
        let (mut display, _delay, events) = test_display();
        display.horizontal_line(120, 5, 20, Color::GREEN).unwrap();

        let wins = windows(&events.borrow());
        assert_eq!(wins.len(), 1);
        let win = &wins[0];
        assert_eq!((win.x0, win.y0, win.x1, win.y1), (120, 5, 127, 5));
        assert_eq!(win.payload.len(), 8 * 2);
    }

    #[test]
    fn test_horizontal_line_off_panel_is_silent() {
        let (mut display, _delay, events) = test_display();
        display.horizontal_line(0, -1, 20, Color::RED).unwrap();
        display.horizontal_line(0, 128, 20, Color::RED).unwrap();
        display.horizontal_line(128, 5, 20, Color::RED).unwrap();
        display.horizontal_line(-30, 5, 20, Color::RED).unwrap();
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_vertical_line_writes_pixel_per_row() {
        let (mut display, _delay, events) = test_display();
        display.vertical_line(3, -2, 6, Color::GREEN).unwrap();

        // Clipped to rows 0..=3, one single-pixel window each
        let wins = windows(&events.borrow());
        assert_eq!(wins.len(), 4);
        for (i, win) in wins.iter().enumerate() {
            let row = i as u16;
            assert_eq!((win.x0, win.y0, win.x1, win.y1), (3, row, 3, row));
            assert_eq!(win.payload, alloc::vec![0x07, 0xE0]);
        }
    }

    #[test]
    fn test_vertical_line_off_panel_is_silent() {
        let (mut display, _delay, events) = test_display();
        display.vertical_line(-1, 0, 10, Color::RED).unwrap();
        display.vertical_line(128, 0, 10, Color::RED).unwrap();
        display.vertical_line(5, 128, 10, Color::RED).unwrap();
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_rect_fill_clips_and_writes_row_windows() {
        let (mut display, _delay, events) = test_display();
        display.rect_fill(120, 0, 20, 5, Color::BLUE).unwrap();

        // Width clips from 20 to 8, height is untouched
        let wins = windows(&events.borrow());
        assert_eq!(wins.len(), 5);
        for (i, win) in wins.iter().enumerate() {
            let row = i as u16;
            assert_eq!((win.x0, win.y0, win.x1, win.y1), (120, row, 127, row));
            assert_eq!(win.payload.len(), 8 * 2);
            assert!(win.payload.chunks_exact(2).all(|p| p == [0x00, 0x1F]));
        }
    }

    #[test]
    fn test_rect_fill_degenerate_is_silent() {
        let (mut display, _delay, events) = test_display();
        display.rect_fill(10, 10, 0, 5, Color::RED).unwrap();
        display.rect_fill(10, 10, 5, -3, Color::RED).unwrap();
        display.rect_fill(130, 0, 10, 10, Color::RED).unwrap();
        display.rect_fill(0, -20, 10, 10, Color::RED).unwrap();
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_rect_outline_draws_border() {
        let (mut display, _delay, events) = test_display();
        display.rect_outline(1, 1, 3, 3, Color::WHITE).unwrap();

        let wins = windows(&events.borrow());
        assert_eq!(wins.len(), 8);
        // Top and bottom edges as bulk rows
        assert_eq!((wins[0].x0, wins[0].y0, wins[0].x1, wins[0].y1), (1, 1, 3, 1));
        assert_eq!((wins[1].x0, wins[1].y0, wins[1].x1, wins[1].y1), (1, 3, 3, 3));
        // Left and right edges as single pixels
        let points: Vec<_> = wins[2..].iter().map(|w| (w.x0, w.y0)).collect();
        assert_eq!(
            points,
            alloc::vec![(1, 1), (1, 2), (1, 3), (3, 1), (3, 2), (3, 3)]
        );
    }

    #[test]
    fn test_rect_outline_degenerate_is_silent() {
        let (mut display, _delay, events) = test_display();
        display.rect_outline(5, 5, 0, 10, Color::RED).unwrap();
        display.rect_outline(5, 5, 10, -1, Color::RED).unwrap();
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_draw_text_renders_glyph_bits() {
        let (mut display, _delay, events) = test_display();
        display.draw_text(":", 0, 0, Color::WHITE, None).unwrap();

        let wins = windows(&events.borrow());
        let points: Vec<_> = wins.iter().map(|w| (w.x0, w.y0)).collect();
        assert_eq!(
            points,
            alloc::vec![(3, 1), (4, 1), (3, 2), (4, 2), (3, 4), (4, 4), (3, 5), (4, 5)]
        );
        assert!(wins.iter().all(|w| w.payload == [0xFF, 0xFF]));
    }

    #[test]
    fn test_draw_text_with_background_covers_cell() {
        let (mut display, _delay, events) = test_display();
        display
            .draw_text("A", 0, 0, Color::WHITE, Some(Color::BLACK))
            .unwrap();

        // Every pixel of the 8x8 cell is written, set bits in the
        // foreground color and the rest in the background color
        let wins = windows(&events.borrow());
        assert_eq!(wins.len(), 64);
        let white = wins.iter().filter(|w| w.payload == [0xFF, 0xFF]).count();
        let black = wins.iter().filter(|w| w.payload == [0x00, 0x00]).count();
        assert_eq!(white, 28);
        assert_eq!(black, 36);
    }

    #[test]
    fn test_draw_text_stops_at_right_edge() {
        let (mut display, _delay, events) = test_display();
        display.draw_text("HH", 120, 0, Color::WHITE, None).unwrap();

        // Second character's origin is 128, at the panel edge, so only
        // the first H (30 set bits) renders
        let wins = windows(&events.borrow());
        assert_eq!(wins.len(), 30);
        assert!(wins.iter().all(|w| w.x0 >= 121 && w.x0 <= 126));
    }

    #[test]
    fn test_draw_text_unknown_characters_render_as_spaces() {
        let (mut display, _delay, events) = test_display();
        display.draw_text("@#", 0, 0, Color::WHITE, None).unwrap();
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_draw_text_is_case_insensitive() {
        let (mut display, _delay, events) = test_display();
        display.draw_text("a", 0, 0, Color::WHITE, None).unwrap();
        let lower = windows(&events.borrow()).len();

        let (mut display, _delay, events) = test_display();
        display.draw_text("A", 0, 0, Color::WHITE, None).unwrap();
        let upper = windows(&events.borrow()).len();

        assert_eq!(lower, upper);
        assert_eq!(upper, 28);
    }

    #[test]
    fn test_draw_text_boxed_fills_cells() {
        let (mut display, _delay, events) = test_display();
        display.draw_text_boxed("AB", 2, 3, Color::RED).unwrap();

        // Two 6x8 boxes at 8-pixel advance, one row window per box row
        let wins = windows(&events.borrow());
        assert_eq!(wins.len(), 16);
        for (i, win) in wins[..8].iter().enumerate() {
            let row = 3 + i as u16;
            assert_eq!((win.x0, win.y0, win.x1, win.y1), (2, row, 7, row));
            assert_eq!(win.payload.len(), 6 * 2);
        }
        for win in &wins[8..] {
            assert_eq!((win.x0, win.x1), (10, 15));
        }
    }

    #[test]
    fn test_draw_text_boxed_stops_at_right_edge() {
        let (mut display, _delay, events) = test_display();
        display.draw_text_boxed("AAA", 112, 0, Color::RED).unwrap();

        // Third character's origin is 128, past the edge
        let wins = windows(&events.borrow());
        assert_eq!(wins.len(), 16);
    }

    #[test]
    fn test_shutdown_twice_is_idempotent() {
        let (mut display, _delay, events) = test_display();
        display.shutdown().unwrap();
        display.shutdown().unwrap();

        let events = events.borrow();
        assert_eq!(
            *events,
            alloc::vec![
                Event::Backlight(false),
                Event::Command(DISPLAY_OFF),
                Event::Backlight(false),
                Event::Command(DISPLAY_OFF),
            ]
        );
        assert_eq!(display.power_state(), PowerState::Off);
    }

    #[test]
    fn test_sleep_in_waits_for_panel() {
        let (mut display, mut delay, events) = test_display();
        display.sleep_in(&mut delay).unwrap();

        let events = events.borrow();
        assert_eq!(
            *events,
            alloc::vec![Event::Command(SLEEP_IN), Event::DelayNs(120_000_000)]
        );
    }

    #[test]
    fn test_power_state_transitions() {
        let (mut display, mut delay, _events) = test_display();
        assert_eq!(display.power_state(), PowerState::Reset);

        display.init(&mut delay).unwrap();
        assert_eq!(display.power_state(), PowerState::AwakeNormal);

        display.sleep_in(&mut delay).unwrap();
        assert_eq!(display.power_state(), PowerState::Sleep);

        display.sleep_out(&mut delay).unwrap();
        assert_eq!(display.power_state(), PowerState::AwakeNormal);

        display.display_off().unwrap();
        assert_eq!(display.power_state(), PowerState::Off);

        display.display_on(&mut delay).unwrap();
        assert_eq!(display.power_state(), PowerState::AwakeNormal);

        display.shutdown().unwrap();
        assert_eq!(display.power_state(), PowerState::Off);
    }

    #[test]
    fn test_transport_errors_propagate() {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 128).unwrap())
            .build()
            .unwrap();
        let mut display = Display::new(FailingInterface, config);
        let mut delay = MockDelay {
            events: Rc::new(RefCell::new(Vec::new())),
        };

        assert!(matches!(
            display.init(&mut delay),
            Err(Error::Interface(BusError))
        ));
        assert!(matches!(
            display.set_pixel(1, 1, Color::WHITE),
            Err(Error::Interface(BusError))
        ));
        assert!(matches!(
            display.shutdown(),
            Err(Error::Interface(BusError))
        ));
    }
}
