//! SSD1306 OLED Display Driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via I2C.
//! Drawing goes to a local frame buffer; `flush` sends all eight pages.

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment},
};
use embedded_hal::i2c::I2c;

use joylite_core::traits::{Canvas, Color, DisplayError, Rect};

use crate::framebuffer::{FrameBuffer, PAGES, WIDTH};

/// SSD1306 I2C address (typically 0x3C or 0x3D)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Control byte: following bytes are commands
const CONTROL_COMMAND: u8 = 0x00;
/// Control byte: following bytes are display data
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const ENTIRE_DISPLAY_RESUME: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_COLUMN_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    buffer: FrameBuffer,
    initialized: bool,
}

impl<I2C> Ssd1306<I2C>
where
    I2C: I2c,
{
    /// Create a new SSD1306 driver
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            buffer: FrameBuffer::new(),
            initialized: false,
        }
    }

    /// Initialize the display
    pub fn init(&mut self) -> Result<(), I2C::Error> {
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80, // Default clock
            cmd::SET_MUX_RATIO,
            0x3F, // 64 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE,
            cmd::SET_CHARGE_PUMP,
            0x14, // Enable charge pump
            cmd::SET_MEMORY_MODE,
            0x00,                  // Horizontal addressing
            cmd::SET_SEG_REMAP,    // Flip horizontally
            cmd::SET_COM_SCAN_DEC, // Flip vertically
            cmd::SET_COM_PINS,
            0x12, // Alternative COM config
            cmd::SET_CONTRAST,
            0xCF,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::ENTIRE_DISPLAY_RESUME,
            cmd::SET_NORMAL,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c)?;
        }

        self.initialized = true;
        Ok(())
    }

    /// Whether `init` completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Send a command to the display
    fn command(&mut self, cmd: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[CONTROL_COMMAND, cmd])
    }

    /// Frame buffer
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Send the frame buffer to the display
    pub fn flush_buffer(&mut self) -> Result<(), I2C::Error> {
        // Full-screen window; the controller auto-advances through it
        self.command(cmd::SET_COLUMN_ADDR)?;
        self.command(0)?;
        self.command((WIDTH - 1) as u8)?;
        self.command(cmd::SET_PAGE_ADDR)?;
        self.command(0)?;
        self.command((PAGES - 1) as u8)?;

        let mut data = [0u8; WIDTH + 1];
        data[0] = CONTROL_DATA;
        for page in 0..PAGES {
            if let Some(bytes) = self.buffer.page(page) {
                data[1..].copy_from_slice(bytes);
                self.i2c.write(self.address, &data)?;
            }
        }

        Ok(())
    }
}

impl<I2C> Canvas for Ssd1306<I2C>
where
    I2C: I2c,
{
    fn size(&self) -> (u16, u16) {
        let size = self.buffer.size();
        (size.width as u16, size.height as u16)
    }

    fn clear(&mut self, color: Color) {
        self.buffer.clear(color == Color::On);
    }

    fn draw_rect(&mut self, rect: Rect, color: Color, filled: bool) {
        let color = match color {
            Color::On => BinaryColor::On,
            Color::Off => BinaryColor::Off,
        };
        let style = if filled {
            PrimitiveStyle::with_fill(color)
        } else {
            PrimitiveStyleBuilder::new()
                .stroke_color(color)
                .stroke_width(1)
                .stroke_alignment(StrokeAlignment::Inside)
                .build()
        };

        let shape = Rectangle::new(
            Point::new(rect.x as i32, rect.y as i32),
            Size::new(rect.width as u32, rect.height as u32),
        );
        // Drawing into the frame buffer is infallible
        let _ = shape.into_styled(style).draw(&mut self.buffer);
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        self.flush_buffer().map_err(|_| DisplayError::Communication)
    }
}
