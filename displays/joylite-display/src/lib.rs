//! Monochrome OLED support for the joystick firmware
//!
//! This crate provides:
//! - `FrameBuffer`: 1-bit-per-pixel page-organized buffer (128x64)
//! - `Ssd1306`: I2C driver that owns a frame buffer and implements the
//!   core `Canvas` trait
//! - an embedded-graphics `DrawTarget` for the frame buffer, used for
//!   rectangle rasterization

#![cfg_attr(not(test), no_std)]

mod framebuffer;
mod graphics;
pub mod ssd1306;

pub use framebuffer::{FrameBuffer, HEIGHT, PAGES, WIDTH};
pub use ssd1306::{Ssd1306, DEFAULT_ADDRESS};
