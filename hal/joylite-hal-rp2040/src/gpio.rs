//! Digital LED output

use embassy_rp::gpio::Output;

use joylite_core::traits::Indicator;

/// On/off LED on a push-pull GPIO
pub struct LedOutput<'d> {
    pin: Output<'d>,
}

impl<'d> LedOutput<'d> {
    /// Wrap an output pin; the LED keeps its current level
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl Indicator for LedOutput<'_> {
    fn toggle(&mut self) {
        self.pin.toggle();
    }

    fn is_on(&self) -> bool {
        self.pin.is_set_high()
    }
}
