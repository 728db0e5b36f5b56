//! Joystick ADC input
//!
//! The RP2040 ADC inputs 0-3 are hard-wired to GPIO26-29.

use embassy_rp::adc::{Adc, Blocking, Channel};

use joylite_core::input::Axis;
use joylite_core::traits::{AdcError, AnalogInput};

/// First GPIO with an ADC input
const FIRST_ADC_GPIO: u8 = 26;

/// ADC input number for a GPIO, if the pin has one
pub const fn adc_input_for_gpio(gpio: u8) -> Option<u8> {
    match gpio {
        26..=29 => Some(gpio - FIRST_ADC_GPIO),
        _ => None,
    }
}

/// Joystick axes on two ADC channels
///
/// The RP2040 ADC has one converter, so channels are read one at a
/// time with a blocking conversion each.
pub struct JoystickAdc<'d> {
    adc: Adc<'d, Blocking>,
    x: Channel<'d>,
    y: Channel<'d>,
}

impl<'d> JoystickAdc<'d> {
    /// Create from an initialized ADC and the two axis channels
    pub fn new(adc: Adc<'d, Blocking>, x: Channel<'d>, y: Channel<'d>) -> Self {
        Self { adc, x, y }
    }
}

impl AnalogInput for JoystickAdc<'_> {
    fn read(&mut self, axis: Axis) -> Result<u16, AdcError> {
        let channel = match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        };
        self.adc
            .blocking_read(channel)
            .map_err(|_| AdcError::Conversion)
    }
}
