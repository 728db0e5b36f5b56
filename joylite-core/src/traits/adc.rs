//! Analog input trait

use crate::input::Axis;

/// Errors from an analog conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Conversion did not complete or reported an error
    Conversion,
}

/// Joystick analog input
///
/// Selecting the channel and reading it are fused into one call.
pub trait AnalogInput {
    /// Read one raw sample for an axis (0..=4095 on a 12-bit ADC)
    fn read(&mut self, axis: Axis) -> Result<u16, AdcError>;
}
