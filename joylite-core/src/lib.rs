//! Board-agnostic core logic for the joystick firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Peripheral traits (analog input, LED dimmer, indicator, canvas)
//! - Button debouncing and analog signal conditioning
//! - Analog-to-pixel coordinate mapping with edge clamping
//! - Render decision (redraw only when something visibly changed)
//! - Shared toggle state written by the button handler
//! - Button handler and polling loop orchestration
//! - Board configuration

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod input;
pub mod mapping;
pub mod render;
pub mod state;
pub mod traits;
