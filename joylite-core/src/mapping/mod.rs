//! Analog-to-pixel coordinate mapping
//!
//! Converts conditioned joystick deltas into a sprite position on the
//! display, clamped to the drawable region inside the current border.

pub mod mapper;
pub mod scale;

pub use mapper::{clamp, CoordinateMapper, PixelPosition};
pub use scale::Scale;
