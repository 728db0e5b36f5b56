//! Analog signal conditioning
//!
//! Turns a raw ADC sample into a zero-centered delta with a dead zone
//! around the joystick's rest position to reject jitter.

/// Condition a raw sample against a center point
///
/// Returns `raw - center`, or 0 when the magnitude of that delta is
/// strictly less than `deadzone`.
pub fn condition(raw: u16, center: u16, deadzone: u16) -> i16 {
    let delta = raw as i32 - center as i32;
    if delta.unsigned_abs() < deadzone as u32 {
        0
    } else {
        delta.clamp(i16::MIN as i32, i16::MAX as i32) as i16
    }
}

/// Per-axis conditioner with a fixed center and dead zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisConditioner {
    center: u16,
    deadzone: u16,
}

impl AxisConditioner {
    /// Create a conditioner
    pub const fn new(center: u16, deadzone: u16) -> Self {
        Self { center, deadzone }
    }

    /// Resting reading for this axis
    pub fn center(&self) -> u16 {
        self.center
    }

    /// Condition a raw sample
    pub fn condition(&self, raw: u16) -> i16 {
        condition(raw, self.center, self.deadzone)
    }
}
